//! Exact-format serializer for [`Document`].
//!
//! The output is the wire format: whatever this module writes, the
//! parser must read back into an equal document. Formatting details down
//! to trailing spaces and blank-line placement are load-bearing.

use std::io::{self, Write};

use crate::models::{Document, ListItem, STATUS_DATE_FORMAT, Status, Task};
use crate::parsing::{LOG_HEADER, NOTES_HEADER, STARTUP_HEADER, TASKS_HEADER};

/// Renders `doc` with the fixed section order and headers, one blank
/// line before every header except the first, and one trailing blank
/// line after the task section.
pub fn write_document<W: Write>(doc: &Document, out: &mut W) -> io::Result<()> {
    writeln!(out, "{STARTUP_HEADER}")?;
    for item in &doc.startup {
        write_list_item(item, out)?;
    }

    writeln!(out, "\n{NOTES_HEADER}")?;
    for note in &doc.notes {
        writeln!(out, "{note}")?;
    }

    writeln!(out, "\n{LOG_HEADER}")?;
    for entry in &doc.log {
        writeln!(out, "{entry}")?;
    }

    writeln!(out, "\n{TASKS_HEADER}")?;
    for task in &doc.tasks.tasks {
        write_task(task, out)?;
    }
    writeln!(out)
}

fn write_list_item<W: Write>(item: &ListItem, out: &mut W) -> io::Result<()> {
    // The trailing space stays even when no status bracket follows.
    write!(out, "{}. {} ", item.number, item.description)?;
    if !item.status.is_empty() {
        write!(out, "{}", render_status(&item.status))?;
    }
    writeln!(out)
}

fn write_task<W: Write>(task: &Task, out: &mut W) -> io::Result<()> {
    if !task.id.is_empty() {
        write!(out, "{} - ", task.id)?;
    }
    if !task.description.is_empty() {
        write!(out, "{} ", task.description)?;
    }
    if !task.status.is_empty() {
        write!(out, "{}", render_status(&task.status))?;
    }
    writeln!(out)?;
    for comment in &task.comments {
        writeln!(out, "\t{comment}")?;
    }
    if task.blank_below {
        writeln!(out)?;
    }
    Ok(())
}

/// Bracketed form of a non-empty status. The ` - ` separator appears
/// only between two non-empty segments.
fn render_status(status: &Status) -> String {
    let date = status
        .date
        .map(|d| d.format(STATUS_DATE_FORMAT).to_string());
    let segments = [
        (!status.name.is_empty()).then_some(status.name.as_str()),
        (!status.comment.is_empty()).then_some(status.comment.as_str()),
        date.as_deref(),
    ];
    let joined = segments.into_iter().flatten().collect::<Vec<_>>().join(" - ");
    format!("[{joined}]")
}
