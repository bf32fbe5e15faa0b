use serde::{Deserialize, Serialize};

/// Values emitted when the user moves to another page or changes the
/// page size.
///
/// Pure transport record, no behavior. `length` carries the total record
/// count when the emitter knows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageEvent {
    pub page_index: i64,
    pub previous_page_index: Option<i64>,
    pub page_size: i64,
    pub length: Option<i64>,
}
