// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::str::FromStr;
use storeless::{ParseFilterError, VisibilityFilter};

/// One line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(String),
    Toggle(u64),
    Filter(VisibilityFilter),
    Show,
    Help,
    Quit,
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("unknown command `{0}` (try `help`)")]
    Unknown(String),
    #[error("`{0}` needs an argument")]
    MissingArgument(&'static str),
    #[error("invalid id `{0}`")]
    InvalidId(String),
    #[error(transparent)]
    Filter(#[from] ParseFilterError),
}

pub const HELP: &str = "\
commands:
  add <text>                      add a to-do
  toggle <id>                     mark a to-do done or not done
  filter <all|active|completed>   choose which to-dos are shown
  show                            print the current list
  quit                            exit";

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        match verb.to_ascii_lowercase().as_str() {
            "" => Ok(Self::Empty),
            "add" if rest.is_empty() => Err(CommandError::MissingArgument("add")),
            "add" => Ok(Self::Add(rest.to_string())),
            "toggle" if rest.is_empty() => Err(CommandError::MissingArgument("toggle")),
            "toggle" => rest
                .parse()
                .map(Self::Toggle)
                .map_err(|_| CommandError::InvalidId(rest.to_string())),
            "filter" if rest.is_empty() => Err(CommandError::MissingArgument("filter")),
            "filter" => Ok(Self::Filter(rest.parse()?)),
            "show" | "ls" => Ok(Self::Show),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" | "q" => Ok(Self::Quit),
            _ => Err(CommandError::Unknown(verb.to_string())),
        }
    }
}
