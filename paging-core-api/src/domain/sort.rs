use std::fmt;

use serde::{Deserialize, Serialize};

/// Result ordering direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    /// Parse a direction token. Only the exact strings `asc` and `desc`
    /// are recognized.
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "asc" => Some(SortOrder::Asc),
            "desc" => Some(SortOrder::Desc),
            _ => None,
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::Asc => f.write_str("asc"),
            SortOrder::Desc => f.write_str("desc"),
        }
    }
}

/// A field name plus direction describing result ordering.
///
/// The serialized form is `"<field> <asc|desc>"`. Field and direction are
/// always present together; an invalid specification is represented by the
/// absence of the whole value, never by half of one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub by: String,
    pub order: SortOrder,
}

impl SortSpec {
    /// Parse a `"<field> <asc|desc>"` string.
    ///
    /// Splits on the first space. Returns `None` for anything the format
    /// does not cover: an empty string, a missing direction token, an
    /// empty field name, or a direction that is not exactly `asc`/`desc`.
    pub fn parse(value: &str) -> Option<Self> {
        let (by, order) = value.split_once(' ')?;
        if by.is_empty() {
            return None;
        }
        let order = SortOrder::parse(order)?;
        Some(Self {
            by: by.to_string(),
            order,
        })
    }
}

impl fmt::Display for SortSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.by, self.order)
    }
}
