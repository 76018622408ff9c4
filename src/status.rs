// src/status.rs
use std::fmt;

use chrono::NaiveDate;

/// Submission status of one announcement.
///
/// `Open`/`Closed`/`Unknown` are only ever *derived* (KOITA) or fixed (NIA).
/// Sites that publish their own status keep it verbatim in `Reported`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Status {
    Open,
    Closed,
    Unknown,
    Reported(String),
}

impl Status {
    /// Derive a status from deadline text in `YYYY-MM-DD` form, compared to `today`.
    ///
    /// Empty or unparseable text is `Unknown`, never an error.
    /// The deadline day itself still counts as open.
    pub fn from_deadline(deadline: &str, today: NaiveDate) -> Self {
        if deadline.is_empty() {
            return Status::Unknown;
        }
        match NaiveDate::parse_from_str(deadline, "%Y-%m-%d") {
            Ok(date) if date >= today => Status::Open,
            Ok(_) => Status::Closed,
            Err(_) => Status::Unknown,
        }
    }

    /// Text shown in the exported table.
    pub fn label(&self) -> &str {
        match self {
            Status::Open => "접수중",
            Status::Closed => "접수완료",
            Status::Unknown => "확인바람",
            Status::Reported(s) => s,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Today's local calendar date.
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
