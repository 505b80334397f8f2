// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::sync::{Arc, Mutex as StdMutex};
use std::time::Duration;
use storeless_core::{CancellationToken, StorelessError, Subject};
use storeless_exec::SubscribeExt;
use storeless_test_utils::unwrap_value;
use thiserror::Error;
use tokio::sync::mpsc::unbounded_channel;
use tokio::time::{sleep, timeout};
use tokio_stream::wrappers::UnboundedReceiverStream;
use tokio_stream::StreamExt as _;

#[derive(Debug, Error)]
#[error("rejected item {0}")]
struct Rejected(i32);

fn recorder() -> (
    Arc<StdMutex<Vec<i32>>>,
    impl Fn(i32, CancellationToken) -> futures::future::Ready<Result<(), Rejected>>
        + Send
        + Sync
        + 'static,
) {
    let results = Arc::new(StdMutex::new(Vec::new()));
    let func = {
        let results = results.clone();
        move |item: i32, _token: CancellationToken| {
            results.lock().unwrap().push(item);
            futures::future::ready(Ok::<(), Rejected>(()))
        }
    };
    (results, func)
}

#[tokio::test]
async fn test_subscribe_processes_items_in_order() -> anyhow::Result<()> {
    // Arrange
    let (results, func) = recorder();
    let stream = futures::stream::iter(vec![1, 2, 3, 4]);

    // Act
    stream.subscribe(func, None, None::<fn(Rejected)>).await?;

    // Assert
    assert_eq!(*results.lock().unwrap(), vec![1, 2, 3, 4]);
    Ok(())
}

#[tokio::test]
async fn test_subscribe_waits_for_each_handler_before_the_next_item() -> anyhow::Result<()> {
    // Arrange
    let log = Arc::new(StdMutex::new(Vec::new()));
    let func = {
        let log = log.clone();
        move |item: u64, _token: CancellationToken| {
            let log = log.clone();
            async move {
                log.lock().unwrap().push(format!("start {item}"));
                // Earlier items sleep longer; ordering must still hold
                sleep(Duration::from_millis(30 - item * 10)).await;
                log.lock().unwrap().push(format!("end {item}"));
                Ok::<(), Rejected>(())
            }
        }
    };

    // Act
    futures::stream::iter(vec![0u64, 1, 2])
        .subscribe(func, None, None::<fn(Rejected)>)
        .await?;

    // Assert
    assert_eq!(
        *log.lock().unwrap(),
        vec!["start 0", "end 0", "start 1", "end 1", "start 2", "end 2"]
    );
    Ok(())
}

#[tokio::test]
async fn test_subscribe_routes_errors_to_callback_and_continues() -> anyhow::Result<()> {
    // Arrange
    let errors = Arc::new(StdMutex::new(Vec::new()));
    let processed = Arc::new(StdMutex::new(Vec::new()));
    let func = {
        let processed = processed.clone();
        move |item: i32, _token: CancellationToken| {
            let processed = processed.clone();
            async move {
                if item % 2 == 0 {
                    return Err(Rejected(item));
                }
                processed.lock().unwrap().push(item);
                Ok(())
            }
        }
    };
    let on_error = {
        let errors = errors.clone();
        move |err: Rejected| errors.lock().unwrap().push(err.to_string())
    };

    // Act
    futures::stream::iter(1..=4)
        .subscribe(func, None, Some(on_error))
        .await?;

    // Assert
    assert_eq!(*processed.lock().unwrap(), vec![1, 3]);
    assert_eq!(
        *errors.lock().unwrap(),
        vec!["rejected item 2".to_string(), "rejected item 4".to_string()]
    );
    Ok(())
}

#[tokio::test]
async fn test_subscribe_collects_errors_without_callback() {
    // Arrange
    let func = |item: i32, _token: CancellationToken| async move {
        if item > 1 {
            Err(Rejected(item))
        } else {
            Ok(())
        }
    };

    // Act
    let result = futures::stream::iter(1..=3)
        .subscribe(func, None, None::<fn(Rejected)>)
        .await;

    // Assert
    match result {
        Err(StorelessError::MultipleErrors { count, errors }) => {
            assert_eq!(count, 2);
            assert_eq!(errors[0].to_string(), "User error: rejected item 2");
            assert_eq!(errors[1].to_string(), "User error: rejected item 3");
        }
        other => panic!("expected MultipleErrors, got {other:?}"),
    }
}

#[tokio::test]
async fn test_subscribe_stops_when_token_is_cancelled_while_idle() -> anyhow::Result<()> {
    // Arrange
    let (tx, rx) = unbounded_channel::<i32>();
    let (results, func) = recorder();
    let token = CancellationToken::new();
    let handle = tokio::spawn({
        let token = token.clone();
        async move {
            UnboundedReceiverStream::new(rx)
                .subscribe(func, Some(token), None::<fn(Rejected)>)
                .await
        }
    });

    tx.send(7)?;
    sleep(Duration::from_millis(50)).await;

    // Act
    token.cancel();

    // Assert: the subscription ends even though the sender is still alive
    timeout(Duration::from_millis(500), handle).await???;
    assert_eq!(*results.lock().unwrap(), vec![7]);
    drop(tx);
    Ok(())
}

#[tokio::test]
async fn test_subscribe_handler_can_cancel_the_subscription() -> anyhow::Result<()> {
    // Arrange
    let results = Arc::new(StdMutex::new(Vec::new()));
    let token = CancellationToken::new();
    let func = {
        let results = results.clone();
        move |item: i32, token: CancellationToken| {
            let results = results.clone();
            async move {
                results.lock().unwrap().push(item);
                if item == 2 {
                    token.cancel();
                }
                Ok::<(), Rejected>(())
            }
        }
    };

    // Act
    futures::stream::iter(1..=5)
        .subscribe(func, Some(token.clone()), None::<fn(Rejected)>)
        .await?;

    // Assert
    assert_eq!(*results.lock().unwrap(), vec![1, 2]);
    assert!(token.is_cancelled());
    Ok(())
}

#[tokio::test]
async fn test_subscribe_drives_a_subject_stream() -> anyhow::Result<()> {
    // Arrange
    let subject = Subject::<i32>::new();
    let stream = subject.subscribe()?;
    let (results, func) = recorder();
    let handle = tokio::spawn(async move {
        stream
            .map(unwrap_value_item)
            .subscribe(func, None, None::<fn(Rejected)>)
            .await
    });

    // Act
    subject.next(1)?;
    subject.next(2)?;
    subject.close();

    // Assert
    timeout(Duration::from_millis(500), handle).await???;
    assert_eq!(*results.lock().unwrap(), vec![1, 2]);
    Ok(())
}

fn unwrap_value_item(item: storeless_core::StreamItem<i32>) -> i32 {
    unwrap_value(Some(item))
}
