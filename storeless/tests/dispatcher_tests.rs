// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use storeless::{Action, Dispatcher, FilterAction, TodoAction, VisibilityFilter};
use storeless_core::SubjectError;
use storeless_test_utils::{assert_no_element_emitted, collect_values};

#[tokio::test]
async fn test_dispatch_reaches_every_subscriber() -> anyhow::Result<()> {
    let dispatcher = Dispatcher::<Action>::new();
    let mut first = dispatcher.actions()?;
    let mut second = dispatcher.clone().actions()?;

    dispatcher.dispatch(TodoAction::Toggle { id: 1 })?;
    dispatcher.dispatch(FilterAction::SetVisibilityFilter(VisibilityFilter::ShowActive))?;

    let expected = vec![
        Action::toggle_todo(1),
        Action::set_visibility_filter(VisibilityFilter::ShowActive),
    ];
    assert_eq!(collect_values(&mut first, 2, 500).await, expected);
    assert_eq!(collect_values(&mut second, 2, 500).await, expected);
    Ok(())
}

#[tokio::test]
async fn test_dispatch_without_subscribers_is_dropped() -> anyhow::Result<()> {
    let dispatcher = Dispatcher::<Action>::new();

    dispatcher.dispatch(Action::add_todo(0, "nobody listens"))?;

    let mut late = dispatcher.actions()?;
    assert_no_element_emitted(&mut late, 50).await;
    Ok(())
}

#[tokio::test]
async fn test_dispatch_after_close_fails() {
    let dispatcher = Dispatcher::<Action>::new();
    dispatcher.close();
    dispatcher.close();

    assert!(dispatcher.is_closed());
    assert_eq!(
        dispatcher.dispatch(Action::toggle_todo(0)),
        Err(SubjectError::Closed)
    );
    assert!(dispatcher.actions().is_err());
}

#[test]
fn test_action_slices() {
    let add = Action::add_todo(2, "x");
    let filter = Action::set_visibility_filter(VisibilityFilter::ShowCompleted);

    assert_eq!(
        add.as_todo(),
        Some(&TodoAction::Add {
            todo_id: 2,
            text: "x".to_string()
        })
    );
    assert!(add.as_filter().is_none());
    assert_eq!(
        filter.as_filter(),
        Some(&FilterAction::SetVisibilityFilter(VisibilityFilter::ShowCompleted))
    );
    assert!(filter.as_todo().is_none());
}
