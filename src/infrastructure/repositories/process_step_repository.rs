//! SeaORM implementation of ProcessStepRepository
//!
//! Enqueue and advance are staged on the unit of work; the queries read
//! committed state only.

use futures::stream::BoxStream;
use sea_orm::{
    ColumnTrait, EntityTrait, JoinType, QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};
use uuid::Uuid;

use super::keyset::keyset_stream;
use crate::domain::{DomainError, Process, ProcessStep, ProcessStepData, ProcessStepRepository};
use crate::infrastructure::context::{PortalDbContext, StagedRow, StepModification};
use crate::models::enums::{ProcessStepStatusId, ProcessStepTypeId, ProcessTypeId};
use crate::models::process::{self, Entity as ProcessEntity};
use crate::models::process_step::{self, Entity as ProcessStepEntity};

#[derive(Debug, Default, Clone, Copy)]
pub struct SeaOrmProcessStepRepository;

impl SeaOrmProcessStepRepository {
    pub fn new() -> Self {
        Self
    }
}

impl From<process_step::Model> for ProcessStep {
    fn from(row: process_step::Model) -> Self {
        ProcessStep {
            id: row.id,
            process_step_type_id: row.process_step_type_id,
            process_step_status_id: row.process_step_status_id,
            process_id: row.process_id,
            date_created: row.date_created,
            date_last_changed: row.date_last_changed,
            message: row.message,
        }
    }
}

impl ProcessStepRepository for SeaOrmProcessStepRepository {
    fn create_process(
        &self,
        context: &mut PortalDbContext,
        process_type_id: ProcessTypeId,
    ) -> Process {
        let process = Process {
            id: Uuid::new_v4(),
            process_type_id,
        };

        context.stage_added(StagedRow::Process(process::Model {
            id: process.id,
            process_type_id,
        }));
        process
    }

    fn create_process_step(
        &self,
        context: &mut PortalDbContext,
        process_id: Uuid,
        process_step_type_id: ProcessStepTypeId,
        process_step_status_id: ProcessStepStatusId,
    ) -> ProcessStep {
        let row = process_step::Model {
            id: Uuid::new_v4(),
            process_step_type_id,
            process_step_status_id,
            process_id,
            date_created: chrono::Utc::now().to_rfc3339(),
            date_last_changed: None,
            message: None,
        };

        context.stage_added(StagedRow::ProcessStep(row.clone()));
        row.into()
    }

    fn create_process_step_range(
        &self,
        context: &mut PortalDbContext,
        process_id: Uuid,
        steps: &[(ProcessStepTypeId, ProcessStepStatusId)],
    ) -> Vec<ProcessStep> {
        steps
            .iter()
            .map(|&(step_type, status)| {
                self.create_process_step(context, process_id, step_type, status)
            })
            .collect()
    }

    fn modify_process_step(
        &self,
        context: &mut PortalDbContext,
        process_step_id: Uuid,
        process_step_status_id: ProcessStepStatusId,
        message: Option<String>,
    ) {
        context.stage_step_modified(StepModification {
            id: process_step_id,
            status: process_step_status_id,
            message,
            date_last_changed: chrono::Utc::now().to_rfc3339(),
        });
    }

    fn get_active_processes<'a>(
        &self,
        context: &'a PortalDbContext,
        process_types: &[ProcessTypeId],
        step_types: &[ProcessStepTypeId],
    ) -> BoxStream<'a, Result<Process, DomainError>> {
        let db = context.connection();
        let process_types = process_types.to_vec();
        let step_types = step_types.to_vec();

        keyset_stream(move |after: Option<Uuid>| {
            let process_types = process_types.clone();
            let step_types = step_types.clone();
            async move {
                let mut query = ProcessEntity::find()
                    .join(JoinType::InnerJoin, process::Relation::ProcessSteps.def())
                    .filter(process::Column::ProcessTypeId.is_in(process_types))
                    .filter(process_step::Column::ProcessStepTypeId.is_in(step_types))
                    .filter(
                        process_step::Column::ProcessStepStatusId.eq(ProcessStepStatusId::Todo),
                    )
                    .order_by_asc(process::Column::Id);
                if let Some(after) = after {
                    query = query.filter(process::Column::Id.gt(after));
                }

                let next = query.one(db).await?.map(|p| {
                    let process = Process {
                        id: p.id,
                        process_type_id: p.process_type_id,
                    };
                    (p.id, process)
                });
                Ok::<_, DomainError>(next)
            }
        })
    }

    fn get_process_step_data<'a>(
        &self,
        context: &'a PortalDbContext,
        process_id: Uuid,
    ) -> BoxStream<'a, Result<ProcessStepData, DomainError>> {
        let db = context.connection();

        keyset_stream(move |after: Option<Uuid>| async move {
            let mut query = ProcessStepEntity::find()
                .filter(process_step::Column::ProcessId.eq(process_id))
                .filter(process_step::Column::ProcessStepStatusId.eq(ProcessStepStatusId::Todo))
                .order_by_asc(process_step::Column::Id);
            if let Some(after) = after {
                query = query.filter(process_step::Column::Id.gt(after));
            }

            let next = query.one(db).await?.map(|step| {
                let data = ProcessStepData {
                    id: step.id,
                    process_step_type_id: step.process_step_type_id,
                };
                (step.id, data)
            });
            Ok::<_, DomainError>(next)
        })
    }
}
