//! Terminal rendering.

pub mod components;
pub mod hints;
pub mod screens;
pub mod theme;

use crate::app::state::AppState;
use crate::domain::Route;
use crate::ui::components::{footer, header};
use ratatui::{
    Frame,
    layout::{Constraint, Layout},
};

const HEADER_HEIGHT: u16 = 3;

pub fn render(frame: &mut Frame<'_>, state: &AppState) {
    let area = frame.area();
    let hint_text = hints::build(state);
    let footer_height = footer::required_height(area.width, &hint_text);

    let rows = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Min(0),
        Constraint::Length(footer_height),
    ])
    .split(area);

    header::render(frame, rows[0], &header_model(state));

    match state.route {
        Route::Home => screens::home::render(frame, rows[1], state),
        Route::Results => screens::results::render(frame, rows[1], state),
    }

    footer::render(frame, rows[2], &hint_text);
}

fn header_model(state: &AppState) -> header::HeaderModel {
    let context_label = match state.route {
        Route::Home => "price comparison".to_owned(),
        Route::Results => state
            .results
            .as_ref()
            .map(|results| format!("results for \"{}\"", results.display_term))
            .unwrap_or_else(|| "results".to_owned()),
    };

    header::HeaderModel {
        layout: state.header_layout(),
        app_label: "🛒 fitsch".to_owned(),
        context_label,
        operation: state.operation_display(),
        error: state.error_message.clone(),
        query: state.search_query().to_owned(),
        search_focused: state.is_search_focused(),
    }
}
