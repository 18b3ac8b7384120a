//! Repository implementations using SeaORM

pub mod app_instance_repository;
pub mod client_repository;
pub mod company_ssi_details_repository;
pub mod country_repository;
mod keyset;
pub mod process_step_repository;
pub mod static_data_repository;

pub use app_instance_repository::SeaOrmAppInstanceRepository;
pub use client_repository::SeaOrmClientRepository;
pub use company_ssi_details_repository::SeaOrmCompanySsiDetailsRepository;
pub use country_repository::SeaOrmCountryRepository;
pub use process_step_repository::SeaOrmProcessStepRepository;
pub use static_data_repository::SeaOrmStaticDataRepository;
