//! GUI layout for the label rule editor

use crate::app::{Message, State};
use crate::core::selector::LoadStatus;
use iced::widget::{button, column, container, pick_list, text};
use iced::{Border, Color, Element, Length};

const BG_BASE: Color = Color {
    r: 0.11,
    g: 0.11,
    b: 0.11,
    a: 1.0,
};
const BG_SURFACE: Color = Color {
    r: 0.16,
    g: 0.16,
    b: 0.16,
    a: 1.0,
};
const BORDER: Color = Color {
    r: 0.28,
    g: 0.28,
    b: 0.28,
    a: 1.0,
};
const ACCENT: Color = Color {
    r: 0.56,
    g: 0.75,
    b: 0.49,
    a: 1.0,
};
const DANGER: Color = Color {
    r: 0.98,
    g: 0.29,
    b: 0.20,
    a: 1.0,
};
const TEXT_DIM: Color = Color {
    r: 0.63,
    g: 0.60,
    b: 0.52,
    a: 1.0,
};
const TEXT_BRIGHT: Color = Color {
    r: 0.92,
    g: 0.86,
    b: 0.70,
    a: 1.0,
};

pub fn view(state: &State) -> Element<'_, Message> {
    let header = column![
        text("Client Label Rule").size(22).color(ACCENT),
        text("Match clients by assigned label.")
            .size(12)
            .color(TEXT_DIM)
    ]
    .spacing(4);

    let selector = column![
        text("CLIENT LABEL").size(10).color(TEXT_DIM),
        pick_list(
            state.selector.options().to_vec(),
            state.selector.selection(&state.rule),
            Message::LabelPicked
        )
        .placeholder("Select a client label...")
        .width(Length::Fill)
        .padding(10)
    ]
    .spacing(6);

    let status: Element<'_, Message> = match state.selector.status() {
        LoadStatus::Loading => text("Loading labels...").size(12).color(TEXT_DIM).into(),
        LoadStatus::Loaded => {
            let count = state.selector.options().len();
            let summary = match count {
                0 => format!("No labels defined on {}", state.server_display),
                1 => format!("1 label from {}", state.server_display),
                n => format!("{n} labels from {}", state.server_display),
            };
            text(summary).size(12).color(TEXT_DIM).into()
        }
        LoadStatus::Failed(_) => view_error_banner(state),
    };

    let reload = button(text("Reload").size(14))
        .on_press(Message::ReloadClicked)
        .padding([8, 16])
        .style(button::secondary);

    let card = container(
        column![header, selector, status, reload]
            .spacing(16)
            .width(Length::Fill),
    )
    .padding(24)
    .width(Length::Fill)
    .style(|_theme| container::Style {
        background: Some(BG_SURFACE.into()),
        border: Border {
            color: BORDER,
            width: 1.0,
            radius: 8.0.into(),
        },
        ..Default::default()
    });

    container(card)
        .padding(24)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(|_theme| container::Style {
            background: Some(BG_BASE.into()),
            text_color: Some(TEXT_BRIGHT),
            ..Default::default()
        })
        .into()
}

fn view_error_banner(state: &State) -> Element<'_, Message> {
    let mut banner = column![text("Failed to load labels").size(13).color(DANGER)].spacing(4);

    if let Some(error) = &state.last_error {
        banner = banner.push(
            text(error.translation.user_message.clone())
                .size(12)
                .color(TEXT_BRIGHT),
        );
        for suggestion in &error.translation.suggestions {
            banner = banner.push(text(format!("- {suggestion}")).size(11).color(TEXT_DIM));
        }
        if let Some(url) = &error.translation.help_url {
            banner = banner.push(text(format!("More info: {url}")).size(11).color(TEXT_DIM));
        }
        // Raw transport error for bug reports
        banner = banner.push(text(error.message.clone()).size(10).color(TEXT_DIM));
    }

    container(banner)
        .padding(12)
        .width(Length::Fill)
        .style(|_theme| container::Style {
            border: Border {
                color: DANGER,
                width: 1.0,
                radius: 4.0.into(),
            },
            ..Default::default()
        })
        .into()
}
