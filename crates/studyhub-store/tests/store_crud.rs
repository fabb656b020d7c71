//! Integration tests against a real PostgreSQL database.
//!
//! These exercise the document store end to end: insert, list, merge-update,
//! and idempotent delete. They require `DATABASE_URL` to point at a disposable
//! database and are gated behind the `integration-tests` feature:
//!
//! ```bash
//! cargo test -p studyhub-store --features integration-tests
//! ```
#![cfg(feature = "integration-tests")]

use studyhub_core::{Note, NoteFields, ResourceKind, Tool, ToolFields};
use studyhub_store::{Repository, Store, StoreConfig};
use uuid::Uuid;

async fn connect() -> Repository {
    let config = StoreConfig::from_env().expect("DATABASE_URL must be set");
    let store = Store::connect(config).await.expect("Failed to connect");
    Repository::new(store)
}

#[tokio::test]
async fn test_create_then_list_contains_record() {
    let repository = connect().await;

    let fields = NoteFields {
        title: Some("Algebra".to_string()),
        file_url: Some("http://x/a.pdf".to_string()),
        category: Some("math".to_string()),
    };
    let created = repository.create::<Note>(&fields).await.expect("create");

    let notes = repository.list::<Note>().await.expect("list");
    let found = notes
        .iter()
        .find(|n| n.id == created.id)
        .expect("created note missing from list");
    assert_eq!(found.fields, fields);

    repository
        .delete(ResourceKind::Note, created.id)
        .await
        .expect("cleanup");
}

#[tokio::test]
async fn test_update_merges_only_provided_fields() {
    let repository = connect().await;

    let created = repository
        .create::<Tool>(&ToolFields {
            name: Some("Desmos".to_string()),
            image_url: Some("http://x/d.png".to_string()),
            description: Some("graphing".to_string()),
            category: Some("math".to_string()),
        })
        .await
        .expect("create");

    let matched = repository
        .update::<Tool>(
            created.id,
            &ToolFields {
                description: Some("updated".to_string()),
                ..Default::default()
            },
        )
        .await
        .expect("update");
    assert!(matched);

    let tools = repository.list::<Tool>().await.expect("list");
    let found = tools.iter().find(|t| t.id == created.id).expect("missing");
    assert_eq!(found.fields.description.as_deref(), Some("updated"));
    // Fields absent from the patch are untouched
    assert_eq!(found.fields.name.as_deref(), Some("Desmos"));
    assert_eq!(found.fields.image_url.as_deref(), Some("http://x/d.png"));
    assert_eq!(found.fields.category.as_deref(), Some("math"));

    repository
        .delete(ResourceKind::Tool, created.id)
        .await
        .expect("cleanup");
}

#[tokio::test]
async fn test_update_on_missing_id_reports_no_match() {
    let repository = connect().await;

    let matched = repository
        .update::<Note>(
            Uuid::new_v4(),
            &NoteFields {
                title: Some("ghost".to_string()),
                ..Default::default()
            },
        )
        .await
        .expect("update should not error on a miss");
    assert!(!matched);
}

#[tokio::test]
async fn test_delete_is_idempotent() {
    let repository = connect().await;

    let created = repository
        .create::<Note>(&NoteFields::default())
        .await
        .expect("create");

    let first = repository
        .delete(ResourceKind::Note, created.id)
        .await
        .expect("delete");
    assert!(first);

    let second = repository
        .delete(ResourceKind::Note, created.id)
        .await
        .expect("second delete should not error");
    assert!(!second);

    let notes = repository.list::<Note>().await.expect("list");
    assert!(notes.iter().all(|n| n.id != created.id));
}

#[tokio::test]
async fn test_create_with_empty_body_stores_bare_record() {
    let repository = connect().await;

    let created = repository
        .create::<Note>(&NoteFields::default())
        .await
        .expect("create");
    assert_eq!(created.fields, NoteFields::default());

    repository
        .delete(ResourceKind::Note, created.id)
        .await
        .expect("cleanup");
}
