use futures::TryStreamExt;
use portal_repositories::domain::{Process, ProcessStepData};
use portal_repositories::models::{
    ProcessStepStatusId, ProcessStepTypeId, ProcessTypeId, process, process_step,
};
use portal_repositories::{DomainError, PortalRepositories, db};
use sea_orm::EntityTrait;
use uuid::Uuid;

async fn setup_repositories() -> PortalRepositories {
    let db = db::init_db("sqlite::memory:")
        .await
        .expect("Failed to init DB");
    PortalRepositories::new(db)
}

// Helper to commit a process with the given steps
async fn create_test_process(
    repos: &PortalRepositories,
    process_type: ProcessTypeId,
    steps: &[(ProcessStepTypeId, ProcessStepStatusId)],
) -> (Uuid, Vec<Uuid>) {
    let mut ctx = repos.context();
    let process = repos.process_steps.create_process(&mut ctx, process_type);
    let steps = repos
        .process_steps
        .create_process_step_range(&mut ctx, process.id, steps);
    ctx.save_changes().await.expect("Save failed");
    (process.id, steps.into_iter().map(|s| s.id).collect())
}

#[tokio::test]
async fn test_enqueue_steps() {
    let repos = setup_repositories().await;
    let mut ctx = repos.context();

    let process = repos
        .process_steps
        .create_process(&mut ctx, ProcessTypeId::ApplicationChecklist);
    let step = repos.process_steps.create_process_step(
        &mut ctx,
        process.id,
        ProcessStepTypeId::VerifyRegistration,
        ProcessStepStatusId::Todo,
    );

    assert_eq!(step.process_id, process.id);
    assert_eq!(step.process_step_status_id, ProcessStepStatusId::Todo);
    assert!(step.date_last_changed.is_none());
    assert_eq!(ctx.save_changes().await.expect("Save failed"), 2);

    let stored = process::Entity::find_by_id(process.id)
        .one(ctx.connection())
        .await
        .expect("DB error")
        .expect("Process not persisted");
    assert_eq!(stored.process_type_id, ProcessTypeId::ApplicationChecklist);
}

#[tokio::test]
async fn test_step_for_unknown_process_fails_at_save() {
    let repos = setup_repositories().await;
    let mut ctx = repos.context();

    repos.process_steps.create_process_step(
        &mut ctx,
        Uuid::new_v4(),
        ProcessStepTypeId::TriggerProvider,
        ProcessStepStatusId::Todo,
    );

    let result = ctx.save_changes().await;
    assert!(matches!(result, Err(DomainError::Database(_))));
}

#[tokio::test]
async fn test_modify_process_step() {
    let repos = setup_repositories().await;
    let (process_id, step_ids) = create_test_process(
        &repos,
        ProcessTypeId::ApplicationChecklist,
        &[
            (ProcessStepTypeId::VerifyRegistration, ProcessStepStatusId::Todo),
            (ProcessStepTypeId::StartClearingHouse, ProcessStepStatusId::Todo),
        ],
    )
    .await;

    let mut ctx = repos.context();
    repos.process_steps.modify_process_step(
        &mut ctx,
        step_ids[0],
        ProcessStepStatusId::Done,
        Some("registration verified".to_string()),
    );
    ctx.save_changes().await.expect("Save failed");

    let stored = process_step::Entity::find_by_id(step_ids[0])
        .one(ctx.connection())
        .await
        .expect("DB error")
        .expect("Step missing");
    assert_eq!(stored.process_step_status_id, ProcessStepStatusId::Done);
    assert_eq!(stored.message.as_deref(), Some("registration verified"));
    assert!(stored.date_last_changed.is_some());

    let remaining: Vec<ProcessStepData> = repos
        .process_steps
        .get_process_step_data(&ctx, process_id)
        .try_collect()
        .await
        .expect("Stream failed");
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, step_ids[1]);
    assert_eq!(
        remaining[0].process_step_type_id,
        ProcessStepTypeId::StartClearingHouse
    );
}

#[tokio::test]
async fn test_modify_unknown_step_fails_at_save() {
    let repos = setup_repositories().await;
    let mut ctx = repos.context();

    repos.process_steps.modify_process_step(
        &mut ctx,
        Uuid::new_v4(),
        ProcessStepStatusId::Failed,
        None,
    );

    let result = ctx.save_changes().await;
    assert!(matches!(result, Err(DomainError::NotFound)));
}

#[tokio::test]
async fn test_get_active_processes() {
    let repos = setup_repositories().await;
    let (active_id, _) = create_test_process(
        &repos,
        ProcessTypeId::ApplicationChecklist,
        &[
            (ProcessStepTypeId::VerifyRegistration, ProcessStepStatusId::Todo),
            (ProcessStepTypeId::VerifyRegistration, ProcessStepStatusId::Todo),
        ],
    )
    .await;
    // Matching step already done
    create_test_process(
        &repos,
        ProcessTypeId::OfferSubscription,
        &[(ProcessStepTypeId::TriggerProvider, ProcessStepStatusId::Done)],
    )
    .await;
    // Todo step of another type
    create_test_process(
        &repos,
        ProcessTypeId::ApplicationChecklist,
        &[(ProcessStepTypeId::StartClearingHouse, ProcessStepStatusId::Todo)],
    )
    .await;
    // Process type not requested
    create_test_process(
        &repos,
        ProcessTypeId::PartnerRegistration,
        &[(ProcessStepTypeId::VerifyRegistration, ProcessStepStatusId::Todo)],
    )
    .await;

    let ctx = repos.context();
    let active: Vec<Process> = repos
        .process_steps
        .get_active_processes(
            &ctx,
            &[
                ProcessTypeId::ApplicationChecklist,
                ProcessTypeId::OfferSubscription,
            ],
            &[
                ProcessStepTypeId::VerifyRegistration,
                ProcessStepTypeId::TriggerProvider,
            ],
        )
        .try_collect()
        .await
        .expect("Stream failed");

    // Two matching steps still yield the process once
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].id, active_id);
    assert_eq!(
        active[0].process_type_id,
        ProcessTypeId::ApplicationChecklist
    );
}

#[tokio::test]
async fn test_modify_staged_step_before_save() {
    let repos = setup_repositories().await;
    let mut ctx = repos.context();

    let process = repos
        .process_steps
        .create_process(&mut ctx, ProcessTypeId::IdentityProviderProvisioning);
    let steps = repos.process_steps.create_process_step_range(
        &mut ctx,
        process.id,
        &[
            (
                ProcessStepTypeId::DeleteCentralIdentityProvider,
                ProcessStepStatusId::Todo,
            ),
            (ProcessStepTypeId::SyncUserProvider, ProcessStepStatusId::Todo),
        ],
    );
    assert_eq!(steps.len(), 2);
    assert_ne!(steps[0].id, steps[1].id);

    // A staged step modified before commit is inserted with the new status
    repos.process_steps.modify_process_step(
        &mut ctx,
        steps[1].id,
        ProcessStepStatusId::Skipped,
        None,
    );
    assert_eq!(ctx.pending_changes(), 3);
    ctx.save_changes().await.expect("Save failed");

    let data: Vec<ProcessStepData> = repos
        .process_steps
        .get_process_step_data(&ctx, process.id)
        .try_collect()
        .await
        .expect("Stream failed");
    assert_eq!(data.len(), 1);
    assert_eq!(
        data[0].process_step_type_id,
        ProcessStepTypeId::DeleteCentralIdentityProvider
    );
}
