//! Repository bundle handed to callers

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::domain::{
    AppInstanceRepository, ClientRepository, CompanySsiDetailsRepository, CountryRepository,
    ProcessStepRepository, StaticDataRepository,
};
use crate::infrastructure::{
    PortalDbContext, SeaOrmAppInstanceRepository, SeaOrmClientRepository,
    SeaOrmCompanySsiDetailsRepository, SeaOrmCountryRepository, SeaOrmProcessStepRepository,
    SeaOrmStaticDataRepository,
};

/// All repositories plus the connection pool units of work are opened on
#[derive(Clone)]
pub struct PortalRepositories {
    db: DatabaseConnection,
    pub app_instances: Arc<dyn AppInstanceRepository>,
    pub clients: Arc<dyn ClientRepository>,
    pub company_ssi_details: Arc<dyn CompanySsiDetailsRepository>,
    pub countries: Arc<dyn CountryRepository>,
    pub static_data: Arc<dyn StaticDataRepository>,
    pub process_steps: Arc<dyn ProcessStepRepository>,
}

impl PortalRepositories {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            app_instances: Arc::new(SeaOrmAppInstanceRepository::new()),
            clients: Arc::new(SeaOrmClientRepository::new()),
            company_ssi_details: Arc::new(SeaOrmCompanySsiDetailsRepository::new()),
            countries: Arc::new(SeaOrmCountryRepository::new()),
            static_data: Arc::new(SeaOrmStaticDataRepository::new()),
            process_steps: Arc::new(SeaOrmProcessStepRepository::new()),
        }
    }

    /// Open a fresh unit of work; one per request
    pub fn context(&self) -> PortalDbContext {
        PortalDbContext::new(self.db.clone())
    }
}
