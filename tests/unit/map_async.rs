//! Tests for asynchronous exhaustive dispatch.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use futures::future::{self, BoxFuture, FutureExt};
use parking_lot::Mutex;

use super::common::{assert_argument_null, assert_broken, recording, Level};
use method_contracts::{map_async, Contract, Enumeration, Site};

type Producer<T = i32> = Box<dyn Fn() -> BoxFuture<'static, T> + Send + Sync>;

fn producer(value: i32, started: Arc<AtomicUsize>) -> Producer {
    Box::new(move || {
        started.fetch_add(1, Ordering::SeqCst);
        future::ready(value).boxed()
    })
}

fn async_table(started: &Arc<AtomicUsize>) -> HashMap<Level, Producer> {
    HashMap::from([
        (Level::None, producer(10, started.clone())),
        (Level::Some, producer(20, started.clone())),
        (Level::More, producer(30, started.clone())),
    ])
}

type Action = Producer<()>;

/// Action table whose entries append their key to `ran` when awaited.
fn action_table(ran: &Arc<Mutex<Vec<Level>>>) -> HashMap<Level, Action> {
    Level::VARIANTS
        .iter()
        .map(|&level| {
            let ran = ran.clone();
            let action: Action = Box::new(move || {
                let ran = ran.clone();
                async move {
                    tokio::task::yield_now().await;
                    ran.lock().push(level);
                }
                .boxed()
            });
            (level, action)
        })
        .collect()
}

#[tokio::test]
async fn test_map_async_awaits_selected_producer() {
    let started = Arc::new(AtomicUsize::new(0));
    let table = async_table(&started);
    let (contract, listener) = recording();

    let value = map_async!(contract; Level::More, table).await.unwrap();
    assert_eq!(value, 30);
    assert_eq!(started.load(Ordering::SeqCst), 1);
    assert!(!listener.is_assert_triggered());
}

#[tokio::test]
async fn test_map_async_short_table_starts_nothing() {
    let started = Arc::new(AtomicUsize::new(0));
    let mut table = async_table(&started);
    table.remove(&Level::Some);
    let contract = Contract::deployment();

    for key in [Level::None, Level::Some, Level::More] {
        let err = map_async!(contract; key, table).await.unwrap_err();
        assert!(err.message().starts_with("Invalid dictionary, line "));
        assert_broken(&err);
    }
    assert_eq!(started.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_map_async_null_table() {
    let (contract, listener) = recording();
    let err = contract
        .map_async::<Level, Producer, _, i32>(
            Level::None,
            None,
            Site::text("key"),
            Site::text("Dictionary"),
        )
        .await
        .unwrap_err();
    assert_eq!(listener.last_message().as_deref(), Some("Invalid null dictionary: Dictionary"));
    assert_argument_null(&err);
}

#[tokio::test]
async fn test_map_async_suspends_in_producer() {
    let mut table: HashMap<Level, Producer<&'static str>> = HashMap::new();
    table.insert(
        Level::None,
        Box::new(|| {
            async {
                tokio::task::yield_now().await;
                "none"
            }
            .boxed()
        }),
    );
    table.insert(Level::Some, Box::new(|| future::ready("some").boxed()));
    table.insert(Level::More, Box::new(|| future::ready("more").boxed()));

    let contract = Contract::deployment();
    assert_eq!(map_async!(contract; Level::None, table).await.unwrap(), "none");
}

#[tokio::test]
async fn test_map_async_runs_only_selected_action() {
    let ran = Arc::new(Mutex::new(Vec::new()));
    let table = action_table(&ran);
    let (contract, listener) = recording();

    map_async!(contract; Level::Some, table).await.unwrap();
    map_async!(contract; Level::None, table).await.unwrap();

    assert_eq!(*ran.lock(), vec![Level::Some, Level::None]);
    assert!(!listener.is_assert_triggered());
}

#[tokio::test]
async fn test_map_async_short_action_table_starts_none() {
    let ran = Arc::new(Mutex::new(Vec::new()));
    let mut table = action_table(&ran);
    table.remove(&Level::More);
    let (contract, listener) = recording();

    let err = map_async!(contract; Level::None, table).await.unwrap_err();
    assert_eq!(listener.messages().len(), 1);
    assert!(listener
        .last_message()
        .is_some_and(|m| m.starts_with("Invalid dictionary, line ")));
    assert_broken(&err);
    assert!(ran.lock().is_empty());
}
