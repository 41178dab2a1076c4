//! Future-backed deferred values. Needs the `tokio` feature:
//! `cargo test -p select-picker-core --features tokio`.

use parking_lot::Mutex;
use select_picker_core::Deferred;

#[tokio::test]
async fn deferred_from_future_resolves() {
    let deferred = Deferred::from_future(async { vec![1u32, 2] });
    let (tx, rx) = tokio::sync::oneshot::channel();
    let tx = Mutex::new(Some(tx));
    deferred.on_resolved(move |items| {
        if let Some(tx) = tx.lock().take() {
            let _ = tx.send(items.clone());
        }
    });

    assert_eq!(rx.await.unwrap(), vec![1, 2]);
    assert_eq!(deferred.get(), Some(vec![1, 2]));
}

#[tokio::test]
async fn deferred_from_future_is_pending_until_polled() {
    let (tx, rx) = tokio::sync::oneshot::channel::<&'static str>();
    let deferred = Deferred::from_future(async move { rx.await.unwrap_or("dropped") });
    assert!(deferred.is_pending());

    tx.send("Apple").unwrap();
    for _ in 0..100 {
        if !deferred.is_pending() {
            break;
        }
        tokio::task::yield_now().await;
    }
    assert_eq!(deferred.get(), Some("Apple"));
}
