use chrono::NaiveDate;

/// Date format used inside status brackets, e.g. `Jun  7, 2020`. Days are
/// space-padded to two columns on output; parsing accepts both `Jun 7`
/// and `Jun  7`.
pub const STATUS_DATE_FORMAT: &str = "%b %e, %Y";

/// Clock format for log entries written by update: 12-hour, no leading
/// zero, e.g. `9:05`.
pub(crate) const LOG_CLOCK_FORMAT: &str = "%-I:%M";

/// The bracketed `[NAME - comment - date]` annotation carried by startup
/// items and tasks. Any subset of the three fields may be present; an
/// all-empty status renders as no bracket at all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Status {
    /// Uppercase status name such as `IN PROGRESS` or `HOLD`. Empty or
    /// `?` means the task has not been triaged yet.
    pub name: String,
    /// Free-form annotation. May contain ` - ` itself; only a trailing
    /// segment that parses as a date is treated as one.
    pub comment: String,
    pub date: Option<NaiveDate>,
}

impl Status {
    /// A status that has not been given a meaningful name yet.
    pub fn is_unknown(&self) -> bool {
        self.name.is_empty() || self.name == "?"
    }

    /// True when no field is set.
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.comment.is_empty() && self.date.is_none()
    }
}
