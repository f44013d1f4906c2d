//! End-to-end board flows over the in-memory backend.

use super::helpers::{Backend, assignee, backend, mount, new_task, project};
use eames::board::domain::{BoardFilter, DraftChange, Task, TaskStatus, UserId};
use eames::board::ports::{CollaboratorError, TaskRemover, TaskSource};
use eames::board::services::{
    DragTransitionService, DropOutcome, DropRequest, QuickCreateService, SubmitOutcome,
};
use rstest::rstest;
use std::sync::Arc;

/// Asserts exactly one task is visible with the expected title.
///
/// # Errors
///
/// Returns an error if the visible set does not contain exactly one task
/// carrying `expected_title`.
fn assert_single_visible(visible: &[Task], expected_title: &str) -> Result<(), eyre::Report> {
    eyre::ensure!(
        visible.len() == 1,
        "expected exactly one visible task, found {}",
        visible.len()
    );
    let card = visible
        .first()
        .ok_or_else(|| eyre::eyre!("expected at least one visible task"))?;
    eyre::ensure!(card.title() == expected_title, "task title mismatch");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn seed_carries_tasks_and_quick_create_catalogs(backend: Backend) {
    let atlas = project("p-1", "Atlas Redesign");
    backend.seed_project(atlas.clone());
    backend.seed_assignee(assignee("u-1", "Ana Duarte"));
    backend.seed_task(&new_task("Wireframe hero section", &atlas, TaskStatus::Todo));
    backend.seed_task(&new_task("QA contact form", &atlas, TaskStatus::Review));

    let seed = backend.load_board().await.expect("board seed loads");

    assert_eq!(seed.tasks.len(), 2);
    assert_eq!(seed.projects.len(), 1);
    assert_eq!(seed.assignees.len(), 1);

    let store = mount(&backend).await;
    assert_eq!(store.by_status(TaskStatus::Todo).len(), 1);
    assert_eq!(store.by_status(TaskStatus::Review).len(), 1);
    assert!(store.by_status(TaskStatus::Completed).is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn committed_drag_persists_the_new_status(backend: Backend) {
    let atlas = project("p-1", "Atlas Redesign");
    let card = backend.seed_task(&new_task("Wireframe hero section", &atlas, TaskStatus::Todo));
    let store = mount(&backend).await;
    let drags = DragTransitionService::new(store.clone(), Arc::new(backend.clone()));

    let outcome = drags
        .handle_drop(DropRequest::new(
            card.id().clone(),
            TaskStatus::Todo,
            TaskStatus::InProgress,
            0,
        ))
        .await;

    assert!(matches!(outcome, DropOutcome::Committed(_)));
    assert_eq!(backend.update_calls(), 1);
    let stored = store.find(card.id()).expect("task in store");
    assert_eq!(stored.status(), TaskStatus::InProgress);
    let persisted = backend.persisted(card.id()).expect("task persisted");
    assert_eq!(persisted.status(), TaskStatus::InProgress);
    assert!(persisted.updated_at() >= card.updated_at());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn rejected_drag_reverts_store_and_leaves_persistence_untouched(backend: Backend) {
    let atlas = project("p-1", "Atlas Redesign");
    let card = backend.seed_task(&new_task("Write brand guidelines", &atlas, TaskStatus::Todo));
    let store = mount(&backend).await;
    let drags = DragTransitionService::new(store.clone(), Arc::new(backend.clone()));
    backend.fail_next_update("db write failed");

    let outcome = drags
        .handle_drop(DropRequest::new(
            card.id().clone(),
            TaskStatus::Todo,
            TaskStatus::Completed,
            0,
        ))
        .await;

    let DropOutcome::RolledBack { prior, .. } = outcome else {
        panic!("expected rollback, got {outcome:?}");
    };
    assert_eq!(prior, TaskStatus::Todo);
    let stored = store.find(card.id()).expect("task in store");
    assert_eq!(stored.status(), TaskStatus::Todo);
    let persisted = backend.persisted(card.id()).expect("task persisted");
    assert_eq!(persisted.status(), TaskStatus::Todo);

    // The user may retry the same drag once the backend recovers.
    let retry = drags
        .handle_drop(DropRequest::new(
            card.id().clone(),
            TaskStatus::Todo,
            TaskStatus::Completed,
            0,
        ))
        .await;
    assert!(matches!(retry, DropOutcome::Committed(_)));
    assert_eq!(backend.update_calls(), 2);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn no_op_drop_reaches_no_collaborator(backend: Backend) {
    let atlas = project("p-1", "Atlas Redesign");
    let card = backend.seed_task(&new_task("Collect stock imagery", &atlas, TaskStatus::Todo));
    let store = mount(&backend).await;
    let drags = DragTransitionService::new(store.clone(), Arc::new(backend.clone()));

    let outcome = drags
        .handle_drop(DropRequest::new(
            card.id().clone(),
            TaskStatus::Todo,
            TaskStatus::Todo,
            0,
        ))
        .await;

    assert!(matches!(outcome, DropOutcome::NoOp));
    assert_eq!(backend.update_calls(), 0);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn quick_create_round_trips_through_the_backend(backend: Backend) {
    let atlas = project("p-1", "Atlas Redesign");
    backend.seed_project(atlas.clone());
    let store = mount(&backend).await;
    let mut quick_create = QuickCreateService::new(store.clone(), Arc::new(backend.clone()));

    quick_create.open(TaskStatus::InProgress);
    quick_create.update_draft(DraftChange::Title("Refresh keyword matrix".to_owned()));
    quick_create.update_draft(DraftChange::Project(Some(atlas)));

    let outcome = quick_create.submit().await;

    let SubmitOutcome::Created(created) = outcome else {
        panic!("expected creation, got {outcome:?}");
    };
    assert_eq!(created.status(), TaskStatus::InProgress);
    assert!(!created.id().as_str().is_empty());
    assert_eq!(store.by_status(TaskStatus::InProgress).len(), 1);
    assert!(backend.persisted(created.id()).is_some());
    assert!(!quick_create.is_open());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn failed_quick_create_keeps_the_draft_and_succeeds_on_retry(backend: Backend) {
    let atlas = project("p-1", "Atlas Redesign");
    backend.seed_project(atlas.clone());
    let store = mount(&backend).await;
    let mut quick_create = QuickCreateService::new(store.clone(), Arc::new(backend.clone()));
    backend.fail_next_create("quota exceeded");

    quick_create.open(TaskStatus::Todo);
    quick_create.update_draft(DraftChange::Title("Schedule kickoff call".to_owned()));
    quick_create.update_draft(DraftChange::Project(Some(atlas)));

    let failed = quick_create.submit().await;
    assert!(matches!(failed, SubmitOutcome::Failed { .. }));
    assert!(quick_create.is_open());
    assert!(store.is_empty());

    let retried = quick_create.submit().await;
    assert!(matches!(retried, SubmitOutcome::Created(_)));
    assert_eq!(store.len(), 1);
    assert_eq!(backend.create_calls(), 2);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn filters_project_the_mounted_collection_without_mutation(backend: Backend) {
    let atlas = project("p-1", "Atlas Redesign");
    let lighthouse = project("p-2", "Lighthouse SEO");
    let bram = assignee("u-2", "Bram Koster");
    backend.seed_task(&new_task("Wireframe hero section", &atlas, TaskStatus::Todo));
    backend.seed_task(
        &new_task("Refresh keyword matrix", &lighthouse, TaskStatus::Todo)
            .with_assignee(bram.clone()),
    );
    backend.seed_task(&new_task("Audit backlinks", &lighthouse, TaskStatus::Review));
    let store = mount(&backend).await;

    let by_project = BoardFilter::new().with_project(lighthouse.id().clone());
    assert_eq!(by_project.apply(&store.snapshot()).len(), 2);

    let narrowed = by_project.with_assignee(UserId::new("u-2"));
    let visible = narrowed.apply(&store.snapshot());
    assert_single_visible(&visible, "Refresh keyword matrix")
        .expect("both predicates apply together");

    assert_eq!(store.len(), 3, "filtering left the store untouched");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn external_delete_clears_backend_then_store(backend: Backend) {
    let atlas = project("p-1", "Atlas Redesign");
    let card = backend.seed_task(&new_task("Launch staging site", &atlas, TaskStatus::Completed));
    let store = mount(&backend).await;

    backend
        .remove_task(card.id())
        .await
        .expect("delete succeeds");
    store.remove(card.id());

    assert!(store.is_empty());
    assert!(backend.persisted(card.id()).is_none());

    let missing = backend.remove_task(card.id()).await;
    assert!(matches!(missing, Err(CollaboratorError::NotFound(_))));
}
