//! HttpGateway + TaskStore against an in-process HTTP server.

mod common;

use pretty_assertions::assert_eq;

use tasksync::gateway::{HttpGateway, TaskGateway};
use tasksync::model::config::GatewayConfig;
use tasksync::model::task::{Task, TaskDraft};
use tasksync::store::views::Counts;
use tasksync::store::TaskStore;

use common::{sample_tasks, spawn_server};

fn gateway(base_url: &str) -> HttpGateway {
    HttpGateway::new(&GatewayConfig {
        base_url: base_url.to_string(),
        endpoint: "/api/tasks".to_string(),
    })
    .unwrap()
}

#[tokio::test]
async fn test_list_returns_tasks_in_server_order() {
    let (base_url, _) = spawn_server(sample_tasks()).await;
    let gw = gateway(&base_url);

    let tasks = gw.list().await;
    let ids: Vec<u64> = tasks.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![1, 2]);
}

#[tokio::test]
async fn test_create_then_refetch_grows_collection_by_one() {
    let (base_url, _) = spawn_server(sample_tasks()).await;
    let mut store = TaskStore::new(Box::new(gateway(&base_url)));
    store.init().await;
    assert_eq!(store.counts(), Counts { all: 2, done: 1 });

    assert!(store.create("Call the bank").await);

    assert_eq!(store.counts(), Counts { all: 3, done: 1 });
    let created = store.tasks().last().unwrap();
    assert_eq!(created.name, "Call the bank");
    assert!(!created.done);
}

#[tokio::test]
async fn test_update_round_trip() {
    let (base_url, state) = spawn_server(sample_tasks()).await;
    let mut store = TaskStore::new(Box::new(gateway(&base_url)));
    store.init().await;

    store.update(1, TaskDraft::new("Water the plants", true)).await;

    let task = store.find(1).unwrap();
    assert_eq!(task.name, "Water the plants");
    assert!(task.done);
    // And the server agrees.
    let remote = state.lock().unwrap().tasks[0].clone();
    assert_eq!(
        remote,
        Task {
            id: 1,
            name: "Water the plants".to_string(),
            done: true,
        }
    );
}

#[tokio::test]
async fn test_delete_removes_from_snapshot() {
    let (base_url, _) = spawn_server(sample_tasks()).await;
    let mut store = TaskStore::new(Box::new(gateway(&base_url)));
    store.init().await;

    store.delete(1).await;

    assert!(store.find(1).is_none());
    assert_eq!(store.counts(), Counts { all: 1, done: 1 });
}

#[tokio::test]
async fn test_update_of_unknown_id_leaves_state_unchanged() {
    // The server answers 404; the client swallows it and the refetch
    // simply shows the unchanged collection.
    let (base_url, _) = spawn_server(sample_tasks()).await;
    let mut store = TaskStore::new(Box::new(gateway(&base_url)));
    store.init().await;
    let before = store.tasks().to_vec();

    store.update(999, TaskDraft::new("ghost", true)).await;

    assert_eq!(store.tasks(), &before[..]);
}

#[tokio::test]
async fn test_unreachable_service_yields_empty_snapshot() {
    let gw = gateway("http://127.0.0.1:9");
    let mut store = TaskStore::new(Box::new(gw));
    store.init().await;

    assert_eq!(store.counts(), Counts { all: 0, done: 0 });
    assert!(store.visible().is_empty());
}

#[tokio::test]
async fn test_refetch_surfaces_concurrent_writes() {
    // A write from another client lands between our mutation and the
    // refetch; the reload must pick it up.
    let (base_url, state) = spawn_server(sample_tasks()).await;
    let mut store = TaskStore::new(Box::new(gateway(&base_url)));
    store.init().await;

    state.lock().unwrap().tasks.push(Task {
        id: 77,
        name: "Added elsewhere".to_string(),
        done: false,
    });
    store.delete(2).await;

    let ids: Vec<u64> = store.tasks().iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![1, 77]);
}
