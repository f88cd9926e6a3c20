//! The four fixed board lanes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Identifier of one of the board's lanes.
///
/// The set is closed: tasks can never reference a lane outside of it, and
/// the wire form is the kebab-case name (`"in-progress"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColumnId {
    Backlog,
    InProgress,
    Review,
    Done,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown column '{0}' (expected one of: backlog, in-progress, review, done)")]
pub struct UnknownColumn(pub String);

impl ColumnId {
    /// All lanes in display order.
    pub const ALL: [ColumnId; 4] = [
        ColumnId::Backlog,
        ColumnId::InProgress,
        ColumnId::Review,
        ColumnId::Done,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ColumnId::Backlog => "backlog",
            ColumnId::InProgress => "in-progress",
            ColumnId::Review => "review",
            ColumnId::Done => "done",
        }
    }

    /// Header shown above the lane.
    pub fn title(self) -> &'static str {
        match self {
            ColumnId::Backlog => "Refine",
            ColumnId::InProgress => "Jules Working",
            ColumnId::Review => "Review & Test",
            ColumnId::Done => "Deployed",
        }
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColumnId {
    type Err = UnknownColumn;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ColumnId::ALL
            .into_iter()
            .find(|column| column.as_str() == s)
            .ok_or_else(|| UnknownColumn(s.to_string()))
    }
}
