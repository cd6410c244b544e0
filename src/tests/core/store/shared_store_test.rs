#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use serde_json::json;

    use crate::core::counter::action::{Action, DECREMENT_BY_AMOUNT};
    use crate::core::counter::Operation;
    use crate::core::store::{CounterStore, SharedCounterStore};
    use crate::core::StoreError;

    #[tokio::test]
    async fn test_shared_handles_see_the_same_store() {
        let store = SharedCounterStore::new(CounterStore::new());
        let other = store.clone();

        store.apply(Operation::IncrementByAmount(4)).await.unwrap();
        assert_eq!(other.value().await, 4);

        let err = other
            .apply(Action::new(DECREMENT_BY_AMOUNT, Some(json!(1.5))))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::InvalidPayload { .. }));
        assert_eq!(store.value().await, 4);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_applies_are_serialized() {
        let store = SharedCounterStore::default();
        let notified = Arc::new(AtomicUsize::new(0));
        let counter = notified.clone();
        let sub = store
            .subscribe(move |_| {
                counter.fetch_add(1, Ordering::SeqCst);
            })
            .await;

        let mut handles = Vec::new();
        for i in 0..8 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                for _ in 0..100 {
                    let op = if i % 2 == 0 {
                        Operation::IncrementByAmount(3)
                    } else {
                        Operation::Decrement
                    };
                    store.apply(op).await.unwrap();
                }
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        // Four tasks add 300 each, four subtract 100 each.
        assert_eq!(store.value().await, 800);
        assert_eq!(notified.load(Ordering::SeqCst), 800);

        assert!(sub.unsubscribe());
        assert_eq!(store.listener_count().await, 0);
    }
}
