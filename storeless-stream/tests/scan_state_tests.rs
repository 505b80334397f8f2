// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use storeless_core::{StorelessError, StreamItem};
use storeless_stream::ScanStateExt;
use storeless_test_utils::{
    collect_values, test_channel, test_channel_with_errors, unwrap_stream, unwrap_value,
};

#[tokio::test]
async fn test_scan_state_emits_running_accumulation_per_item() -> anyhow::Result<()> {
    let (tx, stream) = test_channel::<i32>();
    let mut sums = Box::pin(stream.scan_state(0, |acc: &mut i32, x: &i32| {
        *acc += x;
        *acc
    }));

    tx.send(10)?;
    tx.send(20)?;
    tx.send(30)?;

    assert_eq!(collect_values(&mut sums, 3, 500).await, vec![10, 30, 60]);
    Ok(())
}

#[tokio::test]
async fn test_scan_state_emits_even_when_accumulator_is_unchanged() -> anyhow::Result<()> {
    let (tx, stream) = test_channel::<&'static str>();
    let mut kept = Box::pin(stream.scan_state(Vec::<String>::new(), |list, word: &&str| {
        if word.starts_with('k') {
            list.push((*word).to_string());
        }
        list.clone()
    }));

    tx.send("keep")?;
    tx.send("drop")?;

    assert_eq!(
        unwrap_value(Some(unwrap_stream(&mut kept, 500).await)),
        vec!["keep".to_string()]
    );
    assert_eq!(
        unwrap_value(Some(unwrap_stream(&mut kept, 500).await)),
        vec!["keep".to_string()]
    );
    Ok(())
}

#[tokio::test]
async fn test_scan_state_transforms_output_type() -> anyhow::Result<()> {
    let (tx, stream) = test_channel::<char>();
    let mut labels = Box::pin(stream.scan_state(0u32, |count: &mut u32, c: &char| {
        *count += 1;
        format!("#{count}: {c}")
    }));

    tx.send('a')?;
    tx.send('b')?;

    assert_eq!(
        collect_values(&mut labels, 2, 500).await,
        vec!["#1: a".to_string(), "#2: b".to_string()]
    );
    Ok(())
}

#[tokio::test]
async fn test_scan_state_error_passes_through_without_resetting_state() -> anyhow::Result<()> {
    let (tx, stream) = test_channel_with_errors::<i32>();
    let mut sums = Box::pin(stream.scan_state(0, |acc: &mut i32, x: &i32| {
        *acc += x;
        *acc
    }));

    tx.send(StreamItem::Value(1))?;
    tx.send(StreamItem::Error(StorelessError::stream_error("glitch")))?;
    tx.send(StreamItem::Value(2))?;

    assert_eq!(unwrap_value(Some(unwrap_stream(&mut sums, 500).await)), 1);
    assert!(unwrap_stream(&mut sums, 500).await.is_error());
    assert_eq!(unwrap_value(Some(unwrap_stream(&mut sums, 500).await)), 3);
    Ok(())
}
