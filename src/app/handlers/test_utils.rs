//! Shared test utilities for handler modules
//!
//! Provides common test helpers to avoid duplication across handler test suites.

#[cfg(test)]
pub fn create_test_state() -> crate::app::State {
    create_test_state_with(
        &["label_1", "label_2"],
        crate::core::rule::LabelClientRule::default(),
    )
}

#[cfg(test)]
pub fn create_test_state_with(
    names: &[&str],
    rule: crate::core::rule::LabelClientRule,
) -> crate::app::State {
    use crate::core::labels::StaticLabelSource;
    use std::sync::Arc;

    // The startup fetch Task is dropped; tests deliver listings by hand so the
    // selector sits at generation 1 in Loading state.
    crate::app::State::with_source(
        Arc::new(StaticLabelSource::new(names)),
        rule,
        "test-directory".to_string(),
    )
    .0
}
