mod document;
mod status;
mod task;

pub use document::{Document, ListItem};
pub use status::{STATUS_DATE_FORMAT, Status};
pub use task::{TASK_PREFIX, Task, TaskList};
