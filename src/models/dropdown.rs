use serde::{Deserialize, Serialize};

/// A label/value pair for populating filter dropdowns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DropdownOption {
    pub label: String,
    pub value: String,
}
