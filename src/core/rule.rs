//! Client label rule value
//!
//! [`LabelClientRule`] is the rule condition bound into the selector by the
//! enclosing rule form: match clients carrying the named label. The form
//! framework owns serialization; this crate defines the schema and acts as the
//! write-back target for the dropdown.

use serde::{Deserialize, Serialize};

/// Rule condition matching clients by assigned label.
///
/// `label_name` stays absent until the operator picks a label.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelClientRule {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_name: Option<String>,
}

impl LabelClientRule {
    /// Rule already bound to a label, as loaded from an existing rule set.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            label_name: Some(name.into()),
        }
    }
}
