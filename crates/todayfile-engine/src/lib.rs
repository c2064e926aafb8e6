//! Core engine for the todayfile format: a plain-text daily note divided
//! into four fixed sections (a morning startup checklist, free-form
//! notes, a timestamped log, and a task list with status tracking).
//!
//! The engine parses a note into a [`Document`], mutates it in memory
//! (checklist renumbering, identifier and date assignment, priority
//! sorting, clearing of finished work) and serializes it back in the
//! exact textual form the parser accepts, so a file can be rewritten day
//! after day without drift.

pub mod io;
pub mod models;
pub mod parsing;
pub mod priority;
pub mod writing;

// Re-export key types for easier usage
pub use models::{Document, ListItem, STATUS_DATE_FORMAT, Status, TASK_PREFIX, Task, TaskList};
pub use parsing::{ParseError, Parser};
pub use priority::PriorityTable;
