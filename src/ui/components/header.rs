//! Responsive header bar shared by the home and results screens.
//!
//! Which regions render is decided entirely by the precomputed
//! [`HeaderLayout`]; this module only applies the visibility assignment.

use crate::app::state::HeaderLayout;
use crate::ui::{components::search_box, theme};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

const SEARCH_ENTRY_WIDTH: u16 = 42;
const SEARCH_TRIGGER_WIDTH: u16 = 12;

/// Header payload consumed by the renderer.
#[derive(Debug, Clone)]
pub struct HeaderModel {
    pub layout: HeaderLayout,
    pub app_label: String,
    pub context_label: String,
    pub operation: Option<String>,
    pub error: Option<String>,
    pub query: String,
    pub search_focused: bool,
}

/// Renders the header bar: title, search entry, and/or the compact trigger.
pub fn render(frame: &mut Frame<'_>, area: Rect, model: &HeaderModel) {
    let layout = model.layout;

    if layout.title && layout.search_entry {
        let columns = Layout::horizontal([
            Constraint::Min(16),
            Constraint::Length(SEARCH_ENTRY_WIDTH.min(area.width / 2)),
        ])
        .split(area);
        render_title(frame, columns[0], model);
        render_search_entry(frame, columns[1], model);
        return;
    }

    if layout.title && layout.search_trigger {
        let columns = Layout::horizontal([
            Constraint::Min(16),
            Constraint::Length(SEARCH_TRIGGER_WIDTH.min(area.width / 2)),
        ])
        .split(area);
        render_title(frame, columns[0], model);
        render_search_trigger(frame, columns[1]);
        return;
    }

    // Narrow and focused: the entry takes the full bar.
    render_search_entry(frame, area, model);
}

fn render_title(frame: &mut Frame<'_>, area: Rect, model: &HeaderModel) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::border());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut spans = vec![
        Span::styled(format!(" {}", model.app_label), theme::title()),
        Span::styled(format!(" {}", model.context_label), theme::dim()),
    ];
    if let Some(error) = &model.error {
        spans.push(Span::styled(format!("  error: {error}"), theme::error()));
    } else if let Some(operation) = &model.operation {
        spans.push(Span::styled(format!("  {operation}"), theme::info()));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), inner);
}

fn render_search_entry(frame: &mut Frame<'_>, area: Rect, model: &HeaderModel) {
    search_box::render(
        frame,
        area,
        search_box::SearchBoxProps {
            title: " Search ",
            query: &model.query,
            focused: model.search_focused,
            placeholder: "search products...",
            right_hint: Some("[⏎/␛]"),
        },
    );
}

fn render_search_trigger(frame: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::border());

    let line = Line::from(vec![
        Span::styled(" [/]", theme::info()),
        Span::styled(" 🔍", theme::dim()),
    ]);

    frame.render_widget(Paragraph::new(line).block(block), area);
}
