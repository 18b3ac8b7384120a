//! SeaORM implementation of AppInstanceRepository

use async_trait::async_trait;
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};
use uuid::Uuid;

use crate::domain::{AppInstance, AppInstanceRepository, DomainError};
use crate::infrastructure::context::{PortalDbContext, StagedRow, TrackedEntity};
use crate::models::app_instance::{self, Entity as AppInstanceEntity};

#[derive(Debug, Default, Clone, Copy)]
pub struct SeaOrmAppInstanceRepository;

impl SeaOrmAppInstanceRepository {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl AppInstanceRepository for SeaOrmAppInstanceRepository {
    fn create_app_instance(
        &self,
        context: &mut PortalDbContext,
        app_id: Uuid,
        iam_client_id: Uuid,
    ) -> AppInstance {
        let instance = AppInstance {
            id: Uuid::new_v4(),
            app_id,
            iam_client_id,
        };

        context.stage_added(StagedRow::AppInstance(app_instance::Model {
            id: instance.id,
            app_id,
            iam_client_id,
        }));
        instance
    }

    fn remove_app_instance(&self, context: &mut PortalDbContext, app_instance_id: Uuid) {
        context.stage_removed(TrackedEntity::AppInstance, app_instance_id);
    }

    async fn check_instance_exists_for_app(
        &self,
        context: &PortalDbContext,
        app_id: Uuid,
    ) -> Result<bool, DomainError> {
        let count = AppInstanceEntity::find()
            .filter(app_instance::Column::AppId.eq(app_id))
            .count(context.connection())
            .await?;

        Ok(count > 0)
    }
}
