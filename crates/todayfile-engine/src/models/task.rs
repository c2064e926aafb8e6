use chrono::NaiveDateTime;

use crate::models::Status;
use crate::models::status::LOG_CLOCK_FORMAT;
use crate::priority::PriorityTable;

/// Prefix for automatically assigned task identifiers.
pub const TASK_PREFIX: &str = "TASK";

/// One tracked task. In a note file a task looks like
///
/// ```text
/// TASK-1 - Description [STATUS NAME - comment - Jun  7, 2020]
///     first comment
///     second comment
/// ```
///
/// The identifier is an all-caps token, a hyphen, and a number
/// (`[A-Z]+-[0-9]+`), which makes external issue-tracker ids usable as
/// task names. A bare line of text is also a valid task; update gives it
/// a generated identifier and an untriaged status.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Task {
    pub id: String,
    pub description: String,
    pub status: Status,
    /// Tab-indented lines under the task head, kept in order.
    pub comments: Vec<String>,
    /// Whether a blank line separates this task from the next in the
    /// file. Cosmetic; preserved on write.
    pub blank_below: bool,
}

/// The ordered task section of a document, together with the smallest
/// number guaranteed not to collide with any existing `TASK-n`
/// identifier.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskList {
    pub tasks: Vec<Task>,
    next_id: u32,
}

impl TaskList {
    /// Builds a list from parsed tasks, deriving `next_id` from the
    /// identifiers already present.
    pub fn new(tasks: Vec<Task>) -> Self {
        let next_id = tasks
            .iter()
            .filter_map(|task| auto_id_number(&task.id))
            .map(|n| n + 1)
            .max()
            .unwrap_or(0);
        TaskList { tasks, next_id }
    }

    pub fn next_id(&self) -> u32 {
        self.next_id
    }

    /// Fills in missing identifiers and status dates. Whenever a date is
    /// stamped onto a status that already has a meaningful name, a line
    /// recording the move is appended to `log`.
    pub fn update(&mut self, log: &mut Vec<String>, now: NaiveDateTime) {
        for task in &mut self.tasks {
            if task.id.is_empty() {
                task.id = format!("{TASK_PREFIX}-{}", self.next_id);
                self.next_id += 1;
            }
            if task.status.date.is_none() {
                task.status.date = Some(now.date());
                if !task.status.is_unknown() {
                    let clock = now.format(LOG_CLOCK_FORMAT);
                    let entry = if task.status.comment.is_empty() {
                        // Two spaces before the name when there is no
                        // comment; existing files carry this form.
                        format!(
                            "{clock} - Moved {} ({}) to  {}",
                            task.id, task.description, task.status.name
                        )
                    } else {
                        format!(
                            "{clock} - Moved {} ({}) to {} ({})",
                            task.id, task.description, task.status.name, task.status.comment
                        )
                    };
                    log.push(entry);
                }
            }
            if task.status.name.is_empty() {
                task.status.name = "?".to_string();
            }
        }
    }

    /// Stable-sorts tasks by priority bucket, then by status date (oldest
    /// first). Equal keys keep their relative order so repeated runs do
    /// not churn the file.
    pub fn sort(&mut self, table: &PriorityTable, now: NaiveDateTime) {
        self.tasks
            .sort_by(|a, b| table.compare(&a.status, &b.status, now));
    }

    /// Drops every task whose status name is exactly `DONE`, preserving
    /// the order of the survivors.
    pub fn clear(&mut self) {
        self.tasks.retain(|task| task.status.name != "DONE");
    }
}

/// Number of an automatically assigned identifier (7 for `TASK-7`);
/// `None` for foreign or empty identifiers.
fn auto_id_number(id: &str) -> Option<u32> {
    id.strip_prefix(TASK_PREFIX)?
        .strip_prefix('-')?
        .parse()
        .ok()
}
