//! Home screen renderer.

use crate::{app::state::AppState, ui::theme};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState) {
    let block = Block::default()
        .title(Line::from(Span::styled(" Home ", theme::title())))
        .borders(Borders::ALL)
        .border_style(theme::border());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = vec![
        Line::from(" "),
        Line::styled("Compare grocery prices across Irish stores.", theme::text()),
        Line::from(" "),
        Line::from(vec![
            Span::styled("Catalogue: ", theme::dim()),
            Span::styled(state.catalogue_label.clone(), theme::text()),
        ]),
        Line::from(" "),
        Line::from(vec![
            Span::styled("Press ", theme::dim()),
            Span::styled("[s]", theme::info()),
            Span::styled(" or ", theme::dim()),
            Span::styled("[/]", theme::info()),
            Span::styled(" to search for a product, then ", theme::dim()),
            Span::styled("[⏎]", theme::info()),
            Span::styled(" to run the search.", theme::dim()),
        ]),
    ];

    if let Some(error) = &state.error_message {
        lines.push(Line::from(" "));
        lines.push(Line::styled(format!("error: {error}"), theme::error()));
    }

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}
