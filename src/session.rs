// src/session.rs
// =============================================================================
// Interactive mode: the browser stays open and every line typed at the
// prompt acts like an input event on a filter control.
//
// The list is fetched once per `user` command and kept in memory; every
// other command only re-derives and re-renders the view, so changing
// filters never touches the network.
//
// Commands:
//   user NAME                    fetch NAME's repositories (resets filters)
//   language LANG | any          exact language match, or no language filter
//   stars N                      minimum star count
//   query [TEXT]                 substring match on name + description
//   forks on|off                 include forked repositories
//   homepage on|off              only repositories with a homepage
//   sort name|stars|updated [asc|desc]
//   direction asc|desc
//   languages                    list the languages in the current list
//   reset | show | help | quit
//
// Rust concepts:
// - FromStr: Parsing a line into a typed Command
// - Generic I/O (BufRead / Write): Tests drive the session with byte slices
// =============================================================================

use std::io::{BufRead, Write};
use std::str::FromStr;

use anyhow::Result;
use clap::ValueEnum;
use thiserror::Error;
use tracing::debug;

use crate::browser::{RepoBrowser, Target};
use crate::github::validate_username;
use crate::render::OutputFormat;
use crate::view::{FilterConfig, SortDirection, SortKey};

const HELP: &str = "\
Commands:
  user NAME                           fetch a user's repositories
  language LANG | any                 filter by primary language
  stars N                             minimum star count
  query [TEXT]                        search name and description (empty clears)
  forks on|off                        include forks
  homepage on|off                     require a homepage
  sort name|stars|updated [asc|desc]  change ordering
  direction asc|desc                  change sort direction
  languages                           list available languages
  reset                               restore default filters
  show                                render the current view
  help                                show this message
  quit                                leave";

/// One parsed line of input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    User(String),
    Language(Option<String>),
    Stars(u64),
    Query(String),
    Forks(bool),
    Homepage(bool),
    Sort(SortKey, Option<SortDirection>),
    Direction(SortDirection),
    Languages,
    Reset,
    Show,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("unknown command '{0}' (type 'help' for a list)")]
    UnknownCommand(String),

    #[error("'{command}' needs {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },

    #[error("'{value}' is not valid for '{command}' (expected {expected})")]
    InvalidValue {
        command: &'static str,
        value: String,
        expected: &'static str,
    },
}

impl FromStr for Command {
    type Err = SessionError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match word.to_lowercase().as_str() {
            // An empty name is passed through so the fetch layer can reject it
            "user" => Command::User(rest.to_string()),
            "language" | "lang" => match rest {
                "" => {
                    return Err(SessionError::MissingArgument {
                        command: "language",
                        expected: "a language or 'any'",
                    })
                }
                r if r.eq_ignore_ascii_case("any") => Command::Language(None),
                r => Command::Language(Some(r.to_string())),
            },
            "stars" => Command::Stars(parse_stars(rest)?),
            "query" | "q" => Command::Query(rest.to_string()),
            "forks" => Command::Forks(parse_toggle("forks", rest)?),
            "homepage" => Command::Homepage(parse_toggle("homepage", rest)?),
            "sort" => {
                let mut parts = rest.split_whitespace();
                let key = parts.next().ok_or(SessionError::MissingArgument {
                    command: "sort",
                    expected: "name, stars or updated",
                })?;
                let key = parse_choice::<SortKey>("sort", key, "name, stars or updated")?;
                let direction = parts
                    .next()
                    .map(|d| parse_choice::<SortDirection>("sort", d, "asc or desc"))
                    .transpose()?;
                Command::Sort(key, direction)
            }
            "direction" | "dir" => {
                Command::Direction(parse_choice("direction", rest, "asc or desc")?)
            }
            "languages" => Command::Languages,
            "reset" => Command::Reset,
            "show" | "" => Command::Show,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => return Err(SessionError::UnknownCommand(other.to_string())),
        };
        Ok(command)
    }
}

fn parse_stars(value: &str) -> Result<u64, SessionError> {
    if value.is_empty() {
        return Err(SessionError::MissingArgument {
            command: "stars",
            expected: "a number",
        });
    }
    value.parse().map_err(|_| SessionError::InvalidValue {
        command: "stars",
        value: value.to_string(),
        expected: "a non-negative whole number",
    })
}

fn parse_toggle(command: &'static str, value: &str) -> Result<bool, SessionError> {
    match value.to_lowercase().as_str() {
        "on" | "yes" | "true" => Ok(true),
        "off" | "no" | "false" => Ok(false),
        "" => Err(SessionError::MissingArgument {
            command,
            expected: "on or off",
        }),
        _ => Err(SessionError::InvalidValue {
            command,
            value: value.to_string(),
            expected: "on or off",
        }),
    }
}

fn parse_choice<T: ValueEnum>(
    command: &'static str,
    value: &str,
    expected: &'static str,
) -> Result<T, SessionError> {
    if value.is_empty() {
        return Err(SessionError::MissingArgument { command, expected });
    }
    <T as ValueEnum>::from_str(value, true).map_err(|_| SessionError::InvalidValue {
        command,
        value: value.to_string(),
        expected,
    })
}

/// Drives a RepoBrowser from line commands until `quit` or end of input.
pub struct Session<'a> {
    browser: &'a mut RepoBrowser,
    format: OutputFormat,
    target: Target,
}

impl<'a> Session<'a> {
    pub fn new(browser: &'a mut RepoBrowser, format: OutputFormat, target: Target) -> Self {
        Self {
            browser,
            format,
            target,
        }
    }

    /// Reads commands from `input`, writing prompts, views and errors to
    /// `out`. Command errors are reported and the session carries on;
    /// only I/O failures end it early.
    pub async fn run(&mut self, mut input: impl BufRead, out: &mut impl Write) -> Result<()> {
        writeln!(out, "Type 'help' for commands.")?;
        let mut line = String::new();

        loop {
            write!(out, "{}> ", self.browser.username().unwrap_or(""))?;
            out.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                writeln!(out)?;
                break;
            }

            let command = match line.parse::<Command>() {
                Ok(command) => command,
                Err(e) => {
                    writeln!(out, "❌ {}", e)?;
                    continue;
                }
            };
            debug!(?command, "session command");

            if command == Command::Quit {
                break;
            }
            self.execute(command, out).await?;
        }

        Ok(())
    }

    /// Applies one command and re-renders the view when a filter changed
    /// or a new list was loaded.
    pub async fn execute(&mut self, command: Command, out: &mut impl Write) -> Result<()> {
        match command {
            Command::User(name) => {
                let username = match validate_username(&name) {
                    Ok(username) => username,
                    Err(e) => {
                        writeln!(out, "❌ {}", e)?;
                        return Ok(());
                    }
                };
                writeln!(out, "🔍 Fetching repositories for {}", username)?;
                match self.browser.load(username).await {
                    Ok(count) => writeln!(out, "📄 Found {} repositor{}", count, plural(count))?,
                    Err(e) => {
                        // The previous list stays loaded; nothing to re-render
                        writeln!(out, "❌ {}", e)?;
                        return Ok(());
                    }
                }
            }
            Command::Languages => {
                let languages = self.browser.languages();
                if languages.is_empty() {
                    writeln!(out, "No languages detected.")?;
                } else {
                    writeln!(out, "{}", languages.join(", "))?;
                }
                return Ok(());
            }
            Command::Help => {
                writeln!(out, "{}", HELP)?;
                return Ok(());
            }
            Command::Quit => return Ok(()),
            Command::Show => {}
            other => update_filters(self.browser.filters_mut(), other),
        }

        // A failed render (e.g. an unwritable --output path) is reported
        // like any other command error
        if let Err(e) = self.browser.render_to(self.format, &self.target, out) {
            writeln!(out, "❌ {:#}", e)?;
        }
        Ok(())
    }
}

// Applies a filter-changing command; anything else is ignored
fn update_filters(filters: &mut FilterConfig, command: Command) {
    match command {
        Command::Language(language) => filters.language = language,
        Command::Stars(n) => filters.min_stars = n,
        Command::Query(text) => filters.query = text,
        Command::Forks(on) => filters.include_forks = on,
        Command::Homepage(on) => filters.require_homepage = on,
        Command::Sort(key, direction) => {
            filters.sort_key = key;
            if let Some(direction) = direction {
                filters.direction = direction;
            }
        }
        Command::Direction(direction) => filters.direction = direction,
        Command::Reset => *filters = FilterConfig::default(),
        _ => {}
    }
}

fn plural(count: usize) -> &'static str {
    if count == 1 {
        "y"
    } else {
        "ies"
    }
}
