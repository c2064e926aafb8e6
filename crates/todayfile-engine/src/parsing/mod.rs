//! Streaming parser for the todayfile format.
//!
//! The format is line-oriented: four sections introduced by fixed header
//! lines, each parsed with one line of lookahead so a section parser can
//! stop at the next header without consuming it. A malformed line inside
//! a section is logged and skipped; a section header that never appears
//! fails the whole parse.

mod lines;
mod status;

use std::io::BufRead;
use std::sync::OnceLock;

use regex::Regex;

use crate::models::{Document, ListItem, Status, Task, TaskList};
use lines::LineReader;
use status::parse_status;

pub const STARTUP_HEADER: &str = "Morning Start Up:";
pub const NOTES_HEADER: &str = "Notes:";
pub const LOG_HEADER: &str = "Log:";
pub const TASKS_HEADER: &str = "TODO:";
/// Terminates the task section before end of input.
pub const END_MARKER: &str = "END";

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// A required section header never appeared before the input ended.
    #[error("missing {0:?} section header")]
    MissingSection(&'static str),
    #[error("read error: {0}")]
    Io(#[from] std::io::Error),
}

/// Startup checklist entry: optional `1.`-style ordinal, description,
/// optional trailing status bracket.
fn item_regex() -> &'static Regex {
    static ITEM_REGEX: OnceLock<Regex> = OnceLock::new();
    ITEM_REGEX.get_or_init(|| {
        Regex::new(r"^(?:([0-9]+)\.)?\s*(.*?)(?:\[([^\[\]]*)\])?$").expect("invalid item regex")
    })
}

/// Task head line: optional `PREFIX-123 -` identifier, description,
/// optional trailing status bracket.
fn task_regex() -> &'static Regex {
    static TASK_REGEX: OnceLock<Regex> = OnceLock::new();
    TASK_REGEX.get_or_init(|| {
        Regex::new(r"^(?:([A-Z]+-[0-9]+)\s+-)?(.*?)(?:\[([^\[\]]*)\])?$")
            .expect("invalid task regex")
    })
}

fn is_header(line: &str, header: &str) -> bool {
    line.trim().starts_with(header)
}

/// Parser over a stream of today-file text. Consumed by [`Parser::parse`].
pub struct Parser<R> {
    lines: LineReader<R>,
}

impl<R: BufRead> Parser<R> {
    pub fn new(input: R) -> Self {
        Parser {
            lines: LineReader::new(input),
        }
    }

    /// Parses the four sections in their fixed order.
    pub fn parse(mut self) -> Result<Document, ParseError> {
        self.seek_header(STARTUP_HEADER)?;
        let startup = self.parse_list(NOTES_HEADER);
        self.seek_header(NOTES_HEADER)?;
        let notes = self.parse_lines(LOG_HEADER);
        self.seek_header(LOG_HEADER)?;
        let log = self.parse_lines(TASKS_HEADER);
        self.seek_header(TASKS_HEADER)?;
        let tasks = self.parse_tasks(END_MARKER);
        Ok(Document {
            startup,
            notes,
            log,
            tasks: TaskList::new(tasks),
        })
    }

    /// Consumes lines up to and including the `header` line.
    fn seek_header(&mut self, header: &'static str) -> Result<(), ParseError> {
        while let Some(line) = self.lines.next_line()? {
            if is_header(&line, header) {
                return Ok(());
            }
        }
        Err(ParseError::MissingSection(header))
    }

    /// True once the current section is exhausted: next section header
    /// reached (left unconsumed), end of input, or a read failure.
    fn at_section_end(&mut self, next_section: &str) -> bool {
        match self.lines.peek() {
            Ok(None) => true,
            Ok(Some(line)) => is_header(line, next_section),
            Err(err) => {
                log::warn!("read error while scanning section: {err}");
                true
            }
        }
    }

    fn parse_list(&mut self, next_section: &str) -> Vec<ListItem> {
        let mut items = Vec::new();
        while !self.at_section_end(next_section) {
            if let Some(item) = self.parse_list_item() {
                items.push(item);
            }
        }
        items
    }

    fn parse_list_item(&mut self) -> Option<ListItem> {
        let line = match self.lines.next_line() {
            Ok(line) => line?,
            Err(err) => {
                log::warn!("unexpected error while parsing list item: {err}");
                return None;
            }
        };
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        let caps = item_regex().captures(line)?;
        let number = match caps.get(1) {
            None => 0,
            Some(digits) => match digits.as_str().parse() {
                Ok(number) => number,
                Err(err) => {
                    log::warn!("skipping list item with bad number {:?}: {err}", line);
                    return None;
                }
            },
        };

        Some(ListItem {
            number,
            description: caps.get(2).map_or("", |m| m.as_str()).trim().to_string(),
            status: bracket_status(caps.get(3).map(|m| m.as_str())),
        })
    }

    fn parse_lines(&mut self, next_section: &str) -> Vec<String> {
        let mut collected = Vec::new();
        while !self.at_section_end(next_section) {
            let Ok(Some(line)) = self.lines.next_line() else {
                break;
            };
            if !line.trim().is_empty() {
                collected.push(line);
            }
        }
        collected
    }

    fn parse_tasks(&mut self, next_section: &str) -> Vec<Task> {
        let mut tasks: Vec<Task> = Vec::new();
        while !self.at_section_end(next_section) {
            if let Some(task) = self.parse_task() {
                tasks.push(task);
            }
        }
        // The last task never keeps a blank-line separator.
        if let Some(last) = tasks.last_mut() {
            last.blank_below = false;
        }
        tasks
    }

    fn parse_task(&mut self) -> Option<Task> {
        let head = match self.lines.next_line() {
            Ok(line) => line?,
            Err(err) => {
                log::warn!("unexpected error while parsing task: {err}");
                return None;
            }
        };
        let head = head.trim();
        if head.is_empty() {
            return None;
        }

        let caps = task_regex().captures(head)?;
        let mut task = Task {
            id: caps.get(1).map_or("", |m| m.as_str()).to_string(),
            description: caps.get(2).map_or("", |m| m.as_str()).trim().to_string(),
            status: bracket_status(caps.get(3).map(|m| m.as_str())),
            comments: Vec::new(),
            blank_below: false,
        };

        loop {
            let line = match self.lines.next_line() {
                Ok(Some(line)) => line,
                Ok(None) => return Some(task),
                Err(err) => {
                    log::warn!("unexpected error while reading task comments: {err}");
                    return Some(task);
                }
            };
            if line.starts_with('\t') {
                task.comments.push(line.trim().to_string());
            } else if line.trim().is_empty() {
                task.blank_below = true;
            } else {
                // Head line of the next task; hand it back.
                self.lines.unget(line);
                return Some(task);
            }
        }
    }
}

fn bracket_status(bracket: Option<&str>) -> Status {
    match bracket {
        Some(text) => parse_status(text.trim()),
        None => Status::default(),
    }
}
