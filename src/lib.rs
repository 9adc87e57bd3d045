//! fleetlabel - Client Label Rule Editor
//!
//! A desktop editor for client-label rule conditions in a fleet
//! investigation console, backed by a label-directory service.
//!
//! # Architecture
//!
//! - [`core`] - Selector logic, rule values, and label directory access
//! - [`config`] - Configuration persistence
//! - [`utils`] - Utility functions (XDG directories, etc.)
//!
//! # Behavior
//!
//! - Labels are fetched once per selector instantiation from the fixed
//!   `/clients/labels` endpoint and rendered in directory order
//! - A bound rule naming a fetched label is pre-selected; otherwise the
//!   selection falls back to the first option
//! - Picking a label writes it back to the bound rule value
//! - Fetch failures surface as a translated error state, never a crash

// Allow pedantic clippy warnings that are not worth fixing for this codebase
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::missing_errors_doc)]

pub mod config;
pub mod core;
pub mod utils;

// Re-export commonly used types
pub use core::error::{Error, Result};
pub use core::labels::{HttpLabelSource, Label, LabelSource, StaticLabelSource};
pub use core::rule::LabelClientRule;
pub use core::selector::{LabelSelector, LoadStatus};
