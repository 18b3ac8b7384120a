//! SeaORM implementation of ClientRepository

use uuid::Uuid;

use crate::domain::{ClientRepository, IamClient};
use crate::infrastructure::context::{PortalDbContext, StagedRow, TrackedEntity};
use crate::models::iam_client;

/// Stages identity-provider client rows on the unit of work
#[derive(Debug, Default, Clone, Copy)]
pub struct SeaOrmClientRepository;

impl SeaOrmClientRepository {
    pub fn new() -> Self {
        Self
    }
}

impl ClientRepository for SeaOrmClientRepository {
    fn create_client(&self, context: &mut PortalDbContext, client_id: &str) -> IamClient {
        let row = iam_client::Model {
            id: Uuid::new_v4(),
            client_client_id: client_id.to_string(),
        };

        let client = IamClient {
            id: row.id,
            client_client_id: row.client_client_id.clone(),
        };
        context.stage_added(StagedRow::IamClient(row));
        client
    }

    fn remove_client(&self, context: &mut PortalDbContext, id: Uuid) {
        context.stage_removed(TrackedEntity::IamClient, id);
    }
}
