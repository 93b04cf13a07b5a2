use serde::{Deserialize, Serialize};

use super::error::ErrorEvent;

/// A pipeline event. Only events carrying an error are keyed.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Event {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorEvent>,
}

impl Event {
    pub fn from_error(error: ErrorEvent) -> Self {
        Self { error: Some(error) }
    }
}

/// An ordered batch of events, mutated in place by processors.
pub type Batch = Vec<Event>;
