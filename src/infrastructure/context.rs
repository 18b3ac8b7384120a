//! Unit of work shared by all repositories
//!
//! `PortalDbContext` owns a pooled connection handle plus the list of changes
//! staged by repository calls. Staging is pure bookkeeping; `save_changes`
//! replays the list inside one transaction.

use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DatabaseTransaction, EntityTrait,
    QueryFilter, Set, TransactionTrait,
};
use uuid::Uuid;

use crate::domain::DomainError;
use crate::models::enums::ProcessStepStatusId;
use crate::models::{app_instance, iam_client, process, process_step};

/// Entities that can be staged for insert or removal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackedEntity {
    AppInstance,
    IamClient,
    Process,
    ProcessStep,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum StagedRow {
    AppInstance(app_instance::Model),
    IamClient(iam_client::Model),
    Process(process::Model),
    ProcessStep(process_step::Model),
}

impl StagedRow {
    fn key(&self) -> (TrackedEntity, Uuid) {
        match self {
            StagedRow::AppInstance(row) => (TrackedEntity::AppInstance, row.id),
            StagedRow::IamClient(row) => (TrackedEntity::IamClient, row.id),
            StagedRow::Process(row) => (TrackedEntity::Process, row.id),
            StagedRow::ProcessStep(row) => (TrackedEntity::ProcessStep, row.id),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct StepModification {
    pub id: Uuid,
    pub status: ProcessStepStatusId,
    pub message: Option<String>,
    pub date_last_changed: String,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum StagedChange {
    Added(StagedRow),
    Removed(TrackedEntity, Uuid),
    StepModified(StepModification),
}

/// Request-scoped persistence context
///
/// Not `Clone`: create one per unit of work. Staging takes `&mut self`, so a
/// context cannot be shared between concurrent call sites.
#[derive(Debug)]
pub struct PortalDbContext {
    db: DatabaseConnection,
    staged: Vec<StagedChange>,
}

impl PortalDbContext {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            staged: Vec::new(),
        }
    }

    /// Read surface; reads never see uncommitted staged changes
    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }

    pub fn pending_changes(&self) -> usize {
        self.staged.len()
    }

    pub fn has_pending_changes(&self) -> bool {
        !self.staged.is_empty()
    }

    pub fn discard_changes(&mut self) {
        if !self.staged.is_empty() {
            tracing::debug!("Discarding {} staged changes", self.staged.len());
        }
        self.staged.clear();
    }

    pub(crate) fn stage_added(&mut self, row: StagedRow) {
        tracing::debug!("Staged insert: {:?}", row.key());
        self.staged.push(StagedChange::Added(row));
    }

    /// Removing a row that is only staged as added detaches it instead.
    pub(crate) fn stage_removed(&mut self, entity: TrackedEntity, id: Uuid) {
        let pending_add = self.staged.iter().position(
            |change| matches!(change, StagedChange::Added(row) if row.key() == (entity, id)),
        );

        if let Some(index) = pending_add {
            tracing::debug!("Detached staged insert: {:?}", (entity, id));
            self.staged.remove(index);
            if entity == TrackedEntity::ProcessStep {
                self.staged.retain(|change| {
                    !matches!(change, StagedChange::StepModified(m) if m.id == id)
                });
            }
            return;
        }

        tracing::debug!("Staged removal: {:?}", (entity, id));
        self.staged.push(StagedChange::Removed(entity, id));
    }

    /// Modifying a step that is only staged as added rewrites the staged row.
    pub(crate) fn stage_step_modified(&mut self, modification: StepModification) {
        for change in self.staged.iter_mut() {
            if let StagedChange::Added(StagedRow::ProcessStep(row)) = change
                && row.id == modification.id
            {
                row.process_step_status_id = modification.status;
                row.message = modification.message;
                row.date_last_changed = Some(modification.date_last_changed);
                tracing::debug!("Updated staged step {}", row.id);
                return;
            }
        }

        tracing::debug!(
            "Staged step modification: {} -> {:?}",
            modification.id,
            modification.status
        );
        self.staged.push(StagedChange::StepModified(modification));
    }

    /// Apply all staged changes in one transaction and return the rows affected.
    ///
    /// On failure the transaction is rolled back and the staged changes are
    /// kept, so the caller can inspect or discard them.
    pub async fn save_changes(&mut self) -> Result<u64, DomainError> {
        if self.staged.is_empty() {
            return Ok(0);
        }

        let txn = self.db.begin().await?;
        match apply_all(&self.staged, &txn).await {
            Ok(rows) => {
                txn.commit().await?;
                tracing::info!(
                    "Saved {} staged changes ({} rows affected)",
                    self.staged.len(),
                    rows
                );
                self.staged.clear();
                Ok(rows)
            }
            Err(e) => {
                txn.rollback().await?;
                tracing::warn!(
                    "Rolled back {} staged changes: {}",
                    self.staged.len(),
                    e
                );
                Err(e)
            }
        }
    }
}

async fn apply_all(staged: &[StagedChange], txn: &DatabaseTransaction) -> Result<u64, DomainError> {
    let mut rows = 0;
    for change in staged {
        rows += apply(change, txn).await?;
    }
    Ok(rows)
}

async fn apply(change: &StagedChange, txn: &DatabaseTransaction) -> Result<u64, DomainError> {
    match change {
        StagedChange::Added(StagedRow::AppInstance(row)) => {
            app_instance::ActiveModel {
                id: Set(row.id),
                app_id: Set(row.app_id),
                iam_client_id: Set(row.iam_client_id),
            }
            .insert(txn)
            .await?;
        }
        StagedChange::Added(StagedRow::IamClient(row)) => {
            iam_client::ActiveModel {
                id: Set(row.id),
                client_client_id: Set(row.client_client_id.clone()),
            }
            .insert(txn)
            .await?;
        }
        StagedChange::Added(StagedRow::Process(row)) => {
            process::ActiveModel {
                id: Set(row.id),
                process_type_id: Set(row.process_type_id),
            }
            .insert(txn)
            .await?;
        }
        StagedChange::Added(StagedRow::ProcessStep(row)) => {
            process_step::ActiveModel {
                id: Set(row.id),
                process_step_type_id: Set(row.process_step_type_id),
                process_step_status_id: Set(row.process_step_status_id),
                process_id: Set(row.process_id),
                date_created: Set(row.date_created.clone()),
                date_last_changed: Set(row.date_last_changed.clone()),
                message: Set(row.message.clone()),
            }
            .insert(txn)
            .await?;
        }
        StagedChange::Removed(entity, id) => {
            let result = match entity {
                TrackedEntity::AppInstance => {
                    app_instance::Entity::delete_by_id(*id).exec(txn).await?
                }
                TrackedEntity::IamClient => iam_client::Entity::delete_by_id(*id).exec(txn).await?,
                TrackedEntity::Process => process::Entity::delete_by_id(*id).exec(txn).await?,
                TrackedEntity::ProcessStep => {
                    process_step::Entity::delete_by_id(*id).exec(txn).await?
                }
            };

            if result.rows_affected == 0 {
                return Err(DomainError::NotFound);
            }
            return Ok(result.rows_affected);
        }
        StagedChange::StepModified(m) => {
            let result = process_step::Entity::update_many()
                .col_expr(process_step::Column::ProcessStepStatusId, Expr::value(m.status))
                .col_expr(
                    process_step::Column::DateLastChanged,
                    Expr::value(Some(m.date_last_changed.clone())),
                )
                .col_expr(process_step::Column::Message, Expr::value(m.message.clone()))
                .filter(process_step::Column::Id.eq(m.id))
                .exec(txn)
                .await?;

            if result.rows_affected == 0 {
                return Err(DomainError::NotFound);
            }
            return Ok(result.rows_affected);
        }
    }

    Ok(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::init_db;
    use crate::models::enums::{ProcessStepTypeId, ProcessTypeId};

    async fn context() -> PortalDbContext {
        PortalDbContext::new(init_db("sqlite::memory:").await.expect("Failed to init db"))
    }

    fn client_row(name: &str) -> StagedRow {
        StagedRow::IamClient(iam_client::Model {
            id: Uuid::new_v4(),
            client_client_id: name.to_string(),
        })
    }

    #[tokio::test]
    async fn test_remove_of_staged_insert_detaches_it() {
        let mut ctx = context().await;
        let row = client_row("detach-me");
        let (_, id) = row.key();

        ctx.stage_added(row);
        ctx.stage_removed(TrackedEntity::IamClient, id);

        assert!(!ctx.has_pending_changes());
        assert_eq!(ctx.save_changes().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_modify_of_staged_step_rewrites_row() {
        let mut ctx = context().await;
        let process_id = Uuid::new_v4();
        let step_id = Uuid::new_v4();
        ctx.stage_added(StagedRow::Process(process::Model {
            id: process_id,
            process_type_id: ProcessTypeId::ApplicationChecklist,
        }));
        ctx.stage_added(StagedRow::ProcessStep(process_step::Model {
            id: step_id,
            process_step_type_id: ProcessStepTypeId::VerifyRegistration,
            process_step_status_id: ProcessStepStatusId::Todo,
            process_id,
            date_created: chrono::Utc::now().to_rfc3339(),
            date_last_changed: None,
            message: None,
        }));

        ctx.stage_step_modified(StepModification {
            id: step_id,
            status: ProcessStepStatusId::Done,
            message: Some("verified".to_string()),
            date_last_changed: chrono::Utc::now().to_rfc3339(),
        });

        assert_eq!(ctx.pending_changes(), 2);
        assert_eq!(ctx.save_changes().await.unwrap(), 2);

        let step = process_step::Entity::find_by_id(step_id)
            .one(ctx.connection())
            .await
            .expect("DB error")
            .unwrap();
        assert_eq!(step.process_step_status_id, ProcessStepStatusId::Done);
        assert_eq!(step.message.as_deref(), Some("verified"));
        assert!(step.date_last_changed.is_some());
    }

    #[tokio::test]
    async fn test_failed_save_rolls_back_and_keeps_changes() {
        let mut ctx = context().await;
        ctx.stage_added(client_row("kept"));
        ctx.stage_removed(TrackedEntity::IamClient, Uuid::new_v4());

        let err = ctx.save_changes().await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound));
        assert_eq!(ctx.pending_changes(), 2);

        let clients = iam_client::Entity::find()
            .all(ctx.connection())
            .await
            .expect("DB error");
        assert!(clients.is_empty(), "insert must be rolled back");

        ctx.discard_changes();
        assert!(!ctx.has_pending_changes());
    }
}
