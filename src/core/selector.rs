//! Label selector component state
//!
//! Pure state and transition logic for the label dropdown: which options are
//! rendered, which one is selected, and how the bound rule value is read and
//! written. Widget rendering lives in the GUI shell; nothing here depends on
//! the toolkit, so every observable behavior is unit-testable.

use crate::core::labels::Label;
use crate::core::rule::LabelClientRule;

/// Load status of the directory listing backing the dropdown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadStatus {
    /// Fetch issued, response not yet delivered
    #[default]
    Loading,
    /// Listing installed; the options reflect the directory
    Loaded,
    /// Fetch failed; options are empty and the message explains why
    Failed(String),
}

/// Dropdown state for picking a client label.
///
/// Options are rendered in directory order, without deduplication. The bound
/// rule value is owned by the enclosing form and passed in by reference on
/// every operation that reads or writes it.
#[derive(Debug, Clone, Default)]
pub struct LabelSelector {
    options: Vec<String>,
    status: LoadStatus,
    generation: u64,
}

impl LabelSelector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a fetch and returns its generation tag.
    ///
    /// Responses must hand the tag back to [`apply_loaded`](Self::apply_loaded)
    /// or [`apply_failed`](Self::apply_failed); a response carrying a
    /// superseded tag is dropped, so a reload can never interleave stale
    /// options into a newer listing.
    pub fn begin_fetch(&mut self) -> u64 {
        self.status = LoadStatus::Loading;
        self.generation += 1;
        self.generation
    }

    /// Installs a fetched label listing.
    ///
    /// Options replace the previous list wholesale, never append, so a double
    /// delivery cannot duplicate entries. Returns whether the listing was
    /// installed.
    pub fn apply_loaded(&mut self, generation: u64, labels: Vec<Label>) -> bool {
        if generation != self.generation {
            return false;
        }
        self.options = labels.into_iter().map(|label| label.name).collect();
        self.status = LoadStatus::Loaded;
        true
    }

    /// Records a failed fetch. The options list empties so no spurious
    /// entries survive from before the failure.
    pub fn apply_failed(&mut self, generation: u64, message: impl Into<String>) -> bool {
        if generation != self.generation {
            return false;
        }
        self.options.clear();
        self.status = LoadStatus::Failed(message.into());
        true
    }

    /// Resolves the active selection for the bound rule.
    ///
    /// A bound name equal to a rendered option wins; otherwise the first
    /// option is the default, and an empty list has no selection. The
    /// fallback never writes through to the rule.
    pub fn selection(&self, rule: &LabelClientRule) -> Option<String> {
        if let Some(name) = &rule.label_name
            && self.options.iter().any(|option| option == name)
        {
            return Some(name.clone());
        }
        self.options.first().cloned()
    }

    /// Writes the operator's pick through to the bound rule so the enclosing
    /// form reads the choice back out.
    pub fn pick(&self, name: String, rule: &mut LabelClientRule) {
        // The dropdown only offers rendered options
        debug_assert!(self.options.iter().any(|option| option == &name));
        rule.label_name = Some(name);
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status == LoadStatus::Loading
    }
}
