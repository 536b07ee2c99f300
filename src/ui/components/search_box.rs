//! Bordered single-line search entry box.

use crate::ui::theme;
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

pub struct SearchBoxProps<'a> {
    pub title: &'a str,
    pub query: &'a str,
    pub focused: bool,
    pub placeholder: &'a str,
    /// Right-aligned hint shown only while focused, e.g. `[⏎/␛]`.
    pub right_hint: Option<&'a str>,
}

pub fn render(frame: &mut Frame<'_>, area: Rect, props: SearchBoxProps<'_>) {
    let accent = if props.focused {
        theme::info()
    } else {
        theme::border()
    };
    let title_style = if props.focused {
        theme::info()
    } else {
        theme::title()
    };
    let block = Block::default()
        .title(Line::from(Span::styled(props.title, title_style)))
        .borders(Borders::ALL)
        .border_style(accent);

    let line = content_line(&props, area.width);
    frame.render_widget(Paragraph::new(line).block(block), area);
}

fn content_line(props: &SearchBoxProps<'_>, box_width: u16) -> Line<'static> {
    let showing_placeholder = props.query.is_empty() && !props.focused;

    let mut left = String::from("  ");
    if showing_placeholder {
        left.push_str(props.placeholder);
    } else {
        left.push_str(props.query);
    }
    if props.focused {
        left.push('|');
    }

    let left_style = if showing_placeholder {
        theme::dim()
    } else {
        theme::text()
    };
    let mut spans = vec![Span::styled(left.clone(), left_style)];

    if props.focused
        && let Some(hint) = props.right_hint
    {
        let hint = format!(" {hint}");
        let used = left.chars().count() + hint.chars().count();
        let inner = usize::from(box_width.saturating_sub(2));
        if inner > used + 1 {
            spans.push(Span::raw(" ".repeat(inner - used)));
        }
        spans.push(Span::styled(hint, theme::info()));
    }

    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::{SearchBoxProps, content_line};

    fn props<'a>(query: &'a str, focused: bool) -> SearchBoxProps<'a> {
        SearchBoxProps {
            title: " Search ",
            query,
            focused,
            placeholder: "search products...",
            right_hint: Some("[⏎/␛]"),
        }
    }

    #[test]
    fn unfocused_empty_query_shows_placeholder() {
        let line = content_line(&props("", false), 42);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(text.contains("search products..."));
        assert!(!text.contains('|'));
    }

    #[test]
    fn focused_query_gets_cursor_and_hint() {
        let line = content_line(&props("milk", true), 42);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(text.contains("milk|"));
        assert!(text.contains("[⏎/␛]"));
    }
}
