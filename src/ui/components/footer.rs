//! Bottom bar rendering keybinding hints.

use crate::ui::theme;
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

const TOKEN_GAP: usize = 2;

/// Returns the footer height needed to fit every hint token at the given width.
pub fn required_height(screen_width: u16, hints: &str) -> u16 {
    wrap_tokens(hints, usize::from(screen_width.max(1)))
        .len()
        .max(1) as u16
}

/// Renders the hint tokens, wrapping onto extra lines when the terminal is narrow.
pub fn render(frame: &mut Frame<'_>, area: Rect, hints: &str) {
    let rows = wrap_tokens(hints, usize::from(area.width.max(1)));
    let text: Vec<Line<'static>> = if rows.is_empty() {
        vec![Line::from(" ")]
    } else {
        rows.into_iter().map(hint_line).collect()
    };

    frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), area);
}

/// A `[key] description` pair. Tokens without a bracketed key keep the whole
/// text in `desc`.
#[derive(Debug, Clone)]
struct Token {
    key: String,
    desc: String,
}

impl Token {
    fn parse(text: &str) -> Self {
        if let Some(rest) = text.strip_prefix('[')
            && let Some((key, desc)) = rest.split_once(']')
        {
            return Self {
                key: format!("[{key}]"),
                desc: desc.trim().to_owned(),
            };
        }

        Self {
            key: String::new(),
            desc: text.to_owned(),
        }
    }

    fn width(&self) -> usize {
        let key = self.key.chars().count();
        let desc = self.desc.chars().count();
        match (key, desc) {
            (0, d) => d,
            (k, 0) => k,
            (k, d) => k + 1 + d,
        }
    }
}

/// Greedy wrap: tokens are separated by a double space and never split.
fn wrap_tokens(hints: &str, width: usize) -> Vec<Vec<Token>> {
    let mut rows: Vec<Vec<Token>> = Vec::new();
    let mut row_width = 0usize;

    for piece in hints.split("  ").map(str::trim).filter(|p| !p.is_empty()) {
        let token = Token::parse(piece);
        let gap = if row_width == 0 { 0 } else { TOKEN_GAP };

        match rows.last_mut() {
            Some(row) if row_width + gap + token.width() <= width => {
                row_width += gap + token.width();
                row.push(token);
            }
            _ => {
                row_width = token.width().min(width);
                rows.push(vec![token]);
            }
        }
    }

    rows
}

fn hint_line(tokens: Vec<Token>) -> Line<'static> {
    let mut spans = Vec::<Span<'static>>::new();
    for (index, token) in tokens.into_iter().enumerate() {
        if index > 0 {
            spans.push(Span::styled("  ", theme::dim()));
        }
        let has_key = !token.key.is_empty();
        if has_key {
            spans.push(Span::styled(token.key, theme::info()));
        }
        if !token.desc.is_empty() {
            if has_key {
                spans.push(Span::styled(" ", theme::dim()));
            }
            spans.push(Span::styled(token.desc, theme::dim()));
        }
    }
    if spans.is_empty() {
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::wrap_tokens;

    #[test]
    fn tokens_wrap_at_narrow_widths() {
        let hints = "[j/k] move  [enter] search  [q] quit";
        assert_eq!(wrap_tokens(hints, 120).len(), 1);
        assert!(wrap_tokens(hints, 16).len() > 1);
    }

    #[test]
    fn empty_hints_produce_no_rows() {
        assert!(wrap_tokens("", 80).is_empty());
    }

    #[test]
    fn bare_text_tokens_survive_parsing() {
        let rows = wrap_tokens("plain note  [q] quit", 80);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].len(), 2);
    }
}
