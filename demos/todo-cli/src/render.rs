// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use storeless::{visible_todos, AppState, FilterLink, TodoItem};

/// Renders the visible to-dos followed by the footer, with the active link as `_Label_`.
pub fn render(state: &AppState, links: &[FilterLink]) -> String {
    let mut out = String::new();

    let rows: Vec<TodoItem> = visible_todos(&state.todos, state.visibility_filter)
        .iter()
        .map(TodoItem::from)
        .collect();
    if rows.is_empty() {
        out.push_str("  (nothing to show)\n");
    }
    for row in &rows {
        let mark = if row.line_through { 'x' } else { ' ' };
        out.push_str(&format!("  [{mark}] {}: {}\n", row.id, row.text));
    }

    out.push_str("Show:");
    for link in links {
        let label = if link.filter() == state.visibility_filter {
            format!(" _{}_", link.label())
        } else {
            format!(" {}", link.label())
        };
        out.push_str(&label);
    }
    out
}
