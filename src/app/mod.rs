pub mod handlers;
pub mod view;

use crate::core::error::ErrorInfo;
use crate::core::labels::{HttpLabelSource, LabelSource, StaticLabelSource};
use crate::core::rule::LabelClientRule;
use crate::core::selector::LabelSelector;
use iced::{Element, Task};
use std::sync::Arc;

pub struct State {
    /// Dropdown state: options, load status, fetch generation
    pub selector: LabelSelector,
    /// Rule value bound by the enclosing form; mutated only by user picks
    pub rule: LabelClientRule,
    /// Injected label directory capability
    pub source: Arc<dyn LabelSource>,
    pub last_error: Option<ErrorInfo>,
    /// Where the labels come from, for the status line
    pub server_display: String,
}

#[derive(Debug, Clone)]
pub enum Message {
    /// Directory fetch finished; tagged with the generation that issued it
    LabelsLoaded(u64, Result<Vec<crate::core::labels::Label>, String>),
    /// Operator picked a label from the dropdown
    LabelPicked(String),
    ReloadClicked,
}

impl State {
    pub fn new(server_override: Option<String>) -> (Self, Task<Message>) {
        let config = crate::config::load_config_blocking();
        let server_url = server_override.unwrap_or(config.server_url);

        let source: Arc<dyn LabelSource> = match HttpLabelSource::for_server(&server_url) {
            Ok(source) => Arc::new(source),
            Err(e) => {
                // Let the fetch path report it through the normal error banner
                tracing::error!("rejected directory server URL: {e}");
                Arc::new(StaticLabelSource::failing(e.to_string()))
            }
        };

        Self::with_source(source, LabelClientRule::default(), server_url)
    }

    /// Builds the shell around an injected label source and an existing bound
    /// rule value. Tests substitute an in-memory source here.
    pub fn with_source(
        source: Arc<dyn LabelSource>,
        rule: LabelClientRule,
        server_display: String,
    ) -> (Self, Task<Message>) {
        let mut state = Self {
            selector: LabelSelector::new(),
            rule,
            source,
            last_error: None,
            server_display,
        };
        let fetch = handlers::start_fetch(&mut state);
        (state, fetch)
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::LabelsLoaded(generation, result) => {
                handlers::handle_labels_loaded(self, generation, result)
            }
            Message::LabelPicked(name) => handlers::handle_label_picked(self, name),
            Message::ReloadClicked => handlers::handle_reload_clicked(self),
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }
}
