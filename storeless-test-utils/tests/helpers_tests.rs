// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::StreamExt;
use storeless_core::{StorelessError, StreamItem};
use storeless_test_utils::{
    assert_no_element_emitted, collect_values, test_channel, test_channel_with_errors,
    unwrap_stream, unwrap_value, ErrorInjectingStream,
};

#[tokio::test]
async fn test_test_channel_wraps_values() -> anyhow::Result<()> {
    let (tx, mut stream) = test_channel::<&'static str>();

    tx.send("hello")?;

    assert_eq!(unwrap_value(stream.next().await), "hello");
    Ok(())
}

#[tokio::test]
async fn test_test_channel_ends_when_sender_dropped() {
    let (tx, mut stream) = test_channel::<u8>();
    drop(tx);

    assert!(stream.next().await.is_none());
}

#[tokio::test]
async fn test_test_channel_with_errors_forwards_errors() -> anyhow::Result<()> {
    let (tx, mut stream) = test_channel_with_errors::<u8>();

    tx.send(StreamItem::Error(StorelessError::stream_error("boom")))?;

    assert!(unwrap_stream(&mut stream, 100).await.is_error());
    Ok(())
}

#[tokio::test]
async fn test_assert_no_element_emitted_passes_on_silence() {
    let (_tx, mut stream) = test_channel::<u8>();

    assert_no_element_emitted(&mut stream, 20).await;
}

#[tokio::test]
#[should_panic(expected = "Unexpected item emitted")]
async fn test_assert_no_element_emitted_panics_on_item() {
    let (tx, mut stream) = test_channel::<u8>();
    tx.send(1).unwrap();

    assert_no_element_emitted(&mut stream, 100).await;
}

#[tokio::test]
#[should_panic(expected = "Timed out")]
async fn test_unwrap_stream_panics_on_timeout() {
    let (_tx, mut stream) = test_channel::<u8>();

    let _ = unwrap_stream(&mut stream, 20).await;
}

#[test]
#[should_panic(expected = "Expected a value, got error")]
fn test_unwrap_value_panics_on_error() {
    let _ = unwrap_value::<u8>(Some(StreamItem::Error(StorelessError::SubjectClosed)));
}

#[tokio::test]
async fn test_collect_values_reads_in_order() -> anyhow::Result<()> {
    let (tx, mut stream) = test_channel::<u32>();
    for n in 1..=3 {
        tx.send(n)?;
    }

    assert_eq!(collect_values(&mut stream, 3, 100).await, vec![1, 2, 3]);
    Ok(())
}

#[tokio::test]
async fn test_error_injecting_stream_inserts_error_between_values() {
    let inner = futures::stream::iter(vec![1, 2]);
    let items: Vec<_> = ErrorInjectingStream::new(inner, 1).collect().await;

    assert_eq!(items.len(), 3);
    assert_eq!(items[0], StreamItem::Value(1));
    assert!(items[1].is_error());
    assert_eq!(items[2], StreamItem::Value(2));
}
