// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Interactive to-do list.
//!
//! Reads one command per line from stdin and prints the state published by
//! the container after each action.
//!
//! ```text
//! $ todo-cli
//!   (nothing to show)
//! Show: _All_ Active Completed
//! > add buy milk
//!   [ ] 0: buy milk
//! Show: _All_ Active Completed
//! > toggle 0
//!   [x] 0: buy milk
//! Show: _All_ Active Completed
//! > filter active
//!   (nothing to show)
//! Show: All _Active_ Completed
//! ```

mod command;
mod render;

use anyhow::Context;
use clap::Parser;
use command::{Command, HELP};
use futures::StreamExt;
use render::render;
use std::path::PathBuf;
use storeless::{AddTodoError, AppState, StorelessConfig, StreamItem, TodoApp};
use storeless_core::SubjectStream;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "todo-cli", version, about = "A to-do list without a store")]
struct Cli {
    /// JSON file with the initial state and first to-do id
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log filter, e.g. `debug` or `storeless=trace`. Overrides RUST_LOG.
    #[arg(long)]
    log_level: Option<String>,
}

fn init_tracing(log_level: Option<&str>) -> anyhow::Result<()> {
    let filter = match log_level {
        Some(directives) => EnvFilter::try_new(directives)
            .with_context(|| format!("invalid log filter `{directives}`"))?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
    Ok(())
}

async fn next_state(states: &mut SubjectStream<AppState>) -> anyhow::Result<Option<AppState>> {
    states
        .next()
        .await
        .map(StreamItem::into_result)
        .transpose()
        .context("state pipeline failed")
}

async fn print(stdout: &mut tokio::io::Stdout, text: &str) -> anyhow::Result<()> {
    stdout.write_all(text.as_bytes()).await?;
    stdout.write_all(b"\n").await?;
    stdout.flush().await?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_level.as_deref())?;

    let config = match &cli.config {
        Some(path) => StorelessConfig::load(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => StorelessConfig::default(),
    };
    info!(todos = config.initial_state.todos.len(), "starting");

    let app = TodoApp::new(&config)?;
    let mut states = app.container().state()?;
    let mut stdout = tokio::io::stdout();

    if let Some(state) = next_state(&mut states).await? {
        print(&mut stdout, &render(&state, app.footer().links())).await?;
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(err) => {
                warn!(%line, "rejected input");
                print(&mut stdout, &format!("error: {err}")).await?;
                continue;
            }
        };

        match command {
            Command::Add(text) => match app.add_todo().add_todo(text) {
                Ok(_) => {}
                Err(err @ AddTodoError::IdsExhausted) => {
                    print(&mut stdout, &format!("error: {err}")).await?;
                    continue;
                }
                Err(err) => return Err(err.into()),
            },
            Command::Toggle(id) => app.todo_list().toggle(id)?,
            Command::Filter(filter) => app.footer().link(filter).select()?,
            Command::Show => {
                let state = app.container().snapshot();
                print(&mut stdout, &render(&state, app.footer().links())).await?;
                continue;
            }
            Command::Help => {
                print(&mut stdout, HELP).await?;
                continue;
            }
            Command::Quit => break,
            Command::Empty => continue,
        }

        // Every dispatched action publishes exactly one state
        match next_state(&mut states).await? {
            Some(state) => print(&mut stdout, &render(&state, app.footer().links())).await?,
            None => break,
        }
    }

    app.dispatcher().close();
    info!("bye");
    Ok(())
}
