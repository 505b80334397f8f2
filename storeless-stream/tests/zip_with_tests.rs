// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::{stream, StreamExt};
use storeless_core::{StorelessError, StreamItem, Subject};
use storeless_stream::prelude::*;
use storeless_test_utils::{
    assert_no_element_emitted, collect_values, test_channel, test_channel_with_errors,
    unwrap_stream, unwrap_value,
};

#[tokio::test]
async fn test_zip_with_waits_for_both_sides_before_emitting() -> anyhow::Result<()> {
    let (left_tx, left) = test_channel::<i32>();
    let (right_tx, right) = test_channel::<char>();
    let mut zipped = Box::pin(left.zip_with(right, |n, c| format!("{n}{c}")));

    left_tx.send(1)?;
    assert_no_element_emitted(&mut zipped, 50).await;

    right_tx.send('a')?;
    assert_eq!(unwrap_value(Some(unwrap_stream(&mut zipped, 500).await)), "1a");
    Ok(())
}

#[tokio::test]
async fn test_zip_with_pairs_by_position_not_by_recency() -> anyhow::Result<()> {
    let (left_tx, left) = test_channel::<i32>();
    let (right_tx, right) = test_channel::<i32>();
    let mut zipped = Box::pin(left.zip_with(right, |l, r| (l, r)));

    left_tx.send(1)?;
    left_tx.send(2)?;
    left_tx.send(3)?;
    right_tx.send(10)?;
    right_tx.send(20)?;

    assert_eq!(
        collect_values(&mut zipped, 2, 500).await,
        vec![(1, 10), (2, 20)]
    );
    assert_no_element_emitted(&mut zipped, 50).await;

    right_tx.send(30)?;
    assert_eq!(unwrap_value(Some(unwrap_stream(&mut zipped, 500).await)), (3, 30));
    Ok(())
}

#[tokio::test]
async fn test_zip_with_completes_when_shorter_side_is_drained() {
    let left = stream::iter(vec![1, 2, 3].into_iter().map(StreamItem::Value));
    let right = stream::iter(vec!['x', 'y'].into_iter().map(StreamItem::Value));

    let collected: Vec<_> = left.zip_with(right, |n, c| (n, c)).collect().await;

    assert_eq!(
        collected,
        vec![StreamItem::Value((1, 'x')), StreamItem::Value((2, 'y'))]
    );
}

#[tokio::test]
async fn test_zip_with_ended_side_still_pairs_its_buffered_values() -> anyhow::Result<()> {
    let (left_tx, left) = test_channel::<i32>();
    let (right_tx, right) = test_channel::<i32>();
    let mut zipped = Box::pin(left.zip_with(right, |l, r| l + r));

    left_tx.send(1)?;
    left_tx.send(2)?;
    drop(left_tx);
    right_tx.send(10)?;

    assert_eq!(unwrap_value(Some(unwrap_stream(&mut zipped, 500).await)), 11);

    right_tx.send(20)?;
    assert_eq!(unwrap_value(Some(unwrap_stream(&mut zipped, 500).await)), 22);
    assert!(zipped.next().await.is_none());
    Ok(())
}

#[tokio::test]
async fn test_zip_with_error_from_either_side_is_emitted_immediately() -> anyhow::Result<()> {
    let (left_tx, left) = test_channel_with_errors::<i32>();
    let (right_tx, right) = test_channel::<i32>();
    let mut zipped = Box::pin(left.zip_with(right, |l, r| l * r));

    left_tx.send(StreamItem::Value(2))?;
    left_tx.send(StreamItem::Error(StorelessError::stream_error("left failed")))?;

    assert!(unwrap_stream(&mut zipped, 500).await.is_error());

    // The buffered value survives the error
    right_tx.send(5)?;
    assert_eq!(unwrap_value(Some(unwrap_stream(&mut zipped, 500).await)), 10);
    Ok(())
}

#[tokio::test]
async fn test_zip_with_two_scans_over_one_subject_stay_aligned() -> anyhow::Result<()> {
    let subject = Subject::<i32>::new();
    let evens = subject
        .subscribe()?
        .scan_state(0, |count: &mut i32, x: &i32| {
            if x % 2 == 0 {
                *count += 1;
            }
            *count
        });
    let total = subject
        .subscribe()?
        .scan_state(0, |sum: &mut i32, x: &i32| {
            *sum += x;
            *sum
        });
    let mut combined = Box::pin(evens.zip_with(total, |evens, total| (evens, total)));

    for n in [1, 2, 3, 4] {
        subject.next(n)?;
    }

    assert_eq!(
        collect_values(&mut combined, 4, 500).await,
        vec![(0, 1), (1, 3), (1, 6), (2, 10)]
    );
    Ok(())
}
