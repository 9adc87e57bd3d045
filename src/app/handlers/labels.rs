//! Label directory fetch and selection handlers
//!
//! Drives the dropdown's lifecycle:
//! - Initial fetch on startup and manual reloads
//! - Installing or rejecting delivered listings by generation
//! - Writing the operator's pick back to the bound rule value

use crate::app::{Message, State};
use crate::core::error::ErrorInfo;
use crate::core::labels::Label;
use iced::Task;
use tracing::{debug, warn};

/// Issues a directory fetch for the selector's next generation.
pub(crate) fn start_fetch(state: &mut State) -> Task<Message> {
    let generation = state.selector.begin_fetch();
    let source = state.source.clone();

    Task::perform(
        async move { source.fetch_labels().await.map_err(|e| e.to_string()) },
        move |result| Message::LabelsLoaded(generation, result),
    )
}

/// Handles a delivered label listing or fetch failure
pub(crate) fn handle_labels_loaded(
    state: &mut State,
    generation: u64,
    result: Result<Vec<Label>, String>,
) -> Task<Message> {
    match result {
        Ok(labels) => {
            if state.selector.apply_loaded(generation, labels) {
                state.last_error = None;
                debug!(
                    count = state.selector.options().len(),
                    "client labels loaded"
                );
            } else {
                debug!("dropped label listing from superseded fetch");
            }
        }
        Err(message) => {
            if state.selector.apply_failed(generation, message.clone()) {
                warn!("failed to load client labels: {message}");
                state.last_error = Some(ErrorInfo::new(message));
            } else {
                debug!("dropped failure from superseded fetch");
            }
        }
    }
    Task::none()
}

/// Handles the operator picking a label from the dropdown
pub(crate) fn handle_label_picked(state: &mut State, name: String) -> Task<Message> {
    state.selector.pick(name, &mut state.rule);
    Task::none()
}

/// Handles the reload button: clears the error banner and re-fetches
pub(crate) fn handle_reload_clicked(state: &mut State) -> Task<Message> {
    state.last_error = None;
    start_fetch(state)
}
