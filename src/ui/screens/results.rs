//! Search results screen renderer.

use crate::{
    app::state::{AppState, ResultsScreenState},
    domain::{StoreId, Unit},
    ui::{components::shared::short_preview, theme},
};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{
        Block, Borders, Cell, HighlightSpacing, Paragraph, Row, Scrollbar, ScrollbarOrientation,
        ScrollbarState, Table, TableState,
    },
};

const STORE_TAG_COL_WIDTH: u16 = 2;
const PRICE_COL_WIDTH: u16 = 9;
const PER_UNIT_COL_WIDTH: u16 = 14;
const COLUMN_SPACING: u16 = 1;

const STORE_BOX_WIDTH: u16 = 20;

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState) {
    let Some(results) = state.results.as_ref() else {
        let msg = Paragraph::new(Line::styled("No results loaded yet.", theme::dim()));
        frame.render_widget(msg, area);
        return;
    };

    let rows = Layout::vertical([Constraint::Length(3), Constraint::Min(6)]).split(area);
    render_store_filters(frame, rows[0], results);
    render_listings(frame, rows[1], results);
}

fn render_store_filters(frame: &mut Frame<'_>, area: Rect, results: &ResultsScreenState) {
    let box_width = STORE_BOX_WIDTH.min(area.width / StoreId::ALL.len() as u16);
    let constraints: Vec<Constraint> = StoreId::ALL
        .iter()
        .map(|_| Constraint::Length(box_width))
        .chain([Constraint::Min(0)])
        .collect();
    let columns = Layout::horizontal(constraints).split(area);

    for (index, store) in StoreId::ALL.into_iter().enumerate() {
        let enabled = results.stores.has(store);
        let border_style = if enabled { theme::border() } else { theme::dim() };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style);

        let label_style = if enabled {
            theme::store_tag()
        } else {
            theme::dim()
        };
        let line = Line::from(vec![
            Span::styled(format!(" [{}]", index + 1), theme::info()),
            Span::styled(format!(" {}", store.label()), label_style),
        ]);

        frame.render_widget(Paragraph::new(line).block(block), columns[index]);
    }
}

fn render_listings(frame: &mut Frame<'_>, area: Rect, results: &ResultsScreenState) {
    let title = Line::from(vec![
        Span::styled(
            format!(" Results for \"{}\" ", results.display_term),
            theme::title(),
        ),
        Span::styled(format!("({}) ", results.count_label()), theme::dim()),
    ]);

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(theme::border());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let (list_area, scrollbar_area) = if inner.width > 1 {
        let columns = Layout::horizontal([Constraint::Min(1), Constraint::Length(1)]).split(inner);
        (columns[0], Some(columns[1]))
    } else {
        (inner, None)
    };

    if results.visible_count() == 0 {
        let text = if results.stores.is_empty() {
            "All stores are filtered out. Press [1-5] to re-enable a store."
        } else {
            "No listings match this query."
        };
        frame.render_widget(Paragraph::new(Line::styled(text, theme::dim())), list_area);
        return;
    }

    // The highlight symbol "▸ " occupies 2 columns; 3 inter-column gaps each cost COLUMN_SPACING.
    let fixed = STORE_TAG_COL_WIDTH + PRICE_COL_WIDTH + PER_UNIT_COL_WIDTH;
    let overhead = COLUMN_SPACING * 3 + 2;
    let name_width = usize::from(list_area.width.saturating_sub(fixed + overhead));

    let widths = [
        Constraint::Length(STORE_TAG_COL_WIDTH),
        Constraint::Fill(1),
        Constraint::Length(PRICE_COL_WIDTH),
        Constraint::Length(PER_UNIT_COL_WIDTH),
    ];

    let table_rows: Vec<Row<'_>> = results
        .visible_products()
        .map(|product| {
            let per_unit = match product.price_per_unit.unit {
                Unit::None => String::new(),
                _ => product.price_per_unit.to_string(),
            };

            Row::new([
                Cell::new(Span::styled(product.store.tag(), theme::store_tag())),
                Cell::new(Span::styled(
                    short_preview(&product.name, name_width.max(8)),
                    theme::text(),
                )),
                Cell::new(
                    Line::styled(product.item_price.to_string(), theme::price())
                        .alignment(Alignment::Right),
                ),
                Cell::new(Span::styled(per_unit, theme::dim())),
            ])
        })
        .collect();

    let table = Table::new(table_rows, widths)
        .column_spacing(COLUMN_SPACING)
        .row_highlight_style(theme::selected())
        .highlight_symbol("▸ ")
        .highlight_spacing(HighlightSpacing::Always);

    let mut table_state = TableState::default();
    table_state.select(Some(results.selected_row));

    frame.render_stateful_widget(table, list_area, &mut table_state);

    let viewport_height = usize::from(list_area.height);
    let content_height = results.visible_count();

    if content_height > viewport_height
        && let Some(scrollbar_area) = scrollbar_area
    {
        let max_scroll = content_height.saturating_sub(viewport_height);
        let scroll = table_state.offset().min(max_scroll);
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(None)
            .end_symbol(None)
            .track_style(theme::dim())
            .thumb_style(theme::title());
        let scroll_positions = max_scroll.saturating_add(1);
        let mut scrollbar_state = ScrollbarState::new(scroll_positions)
            .viewport_content_length(viewport_height)
            .position(scroll);
        frame.render_stateful_widget(scrollbar, scrollbar_area, &mut scrollbar_state);
    }
}
