use std::io::{self, BufRead, Write};

use chrono::{Local, NaiveDateTime};

use crate::models::{Status, TaskList};
use crate::parsing::{ParseError, Parser};
use crate::priority::PriorityTable;
use crate::writing;

/// One entry of the morning startup checklist.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListItem {
    /// 1-based position in the checklist. Recomputed on every update
    /// pass from list order; the parsed value is not authoritative.
    pub number: u32,
    pub description: String,
    pub status: Status,
}

/// One day's note file: a startup checklist, free-form notes, a
/// timestamped log, and the task list. The four sections always appear
/// in this order, exactly once each.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    pub startup: Vec<ListItem>,
    pub notes: Vec<String>,
    pub log: Vec<String>,
    pub tasks: TaskList,
}

impl Document {
    /// Parses a document from a stream.
    pub fn parse<R: BufRead>(input: R) -> Result<Self, ParseError> {
        Parser::new(input).parse()
    }

    /// Serializes the document in the exact textual form
    /// [`Document::parse`] accepts.
    pub fn write<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writing::write_document(self, out)
    }

    /// [`Document::update_at`] against the wall clock.
    pub fn update(&mut self) {
        self.update_at(Local::now().naive_local());
    }

    /// Renumbers the startup checklist, then fills in missing task
    /// identifiers, status dates, and status names, logging each dated
    /// move of a triaged task.
    pub fn update_at(&mut self, now: NaiveDateTime) {
        for (i, item) in self.startup.iter_mut().enumerate() {
            item.number = (i + 1) as u32;
        }
        self.tasks.update(&mut self.log, now);
    }

    /// [`Document::sort_at`] against the wall clock.
    pub fn sort(&mut self) {
        self.sort_at(Local::now().naive_local());
    }

    /// Sorts the task list by priority. The other sections keep their
    /// written order.
    pub fn sort_at(&mut self, now: NaiveDateTime) {
        self.tasks.sort(&PriorityTable::default(), now);
    }

    /// Drops finished tasks, resets every startup item's status, and
    /// empties the log, leaving the document ready for a fresh day.
    pub fn clear(&mut self) {
        self.tasks.clear();
        for item in &mut self.startup {
            item.status = Status::default();
        }
        self.log.clear();
    }
}
