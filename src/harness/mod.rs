//! Visual harness for deterministic rendering snapshots.

use crate::app::dispatch;
use crate::app::state::AppState;
use crate::catalogue::query::run_query;
use crate::fixtures;
use crate::ui;
use anyhow::Context;
use ratatui::Terminal;
use ratatui::backend::TestBackend;

/// Renders demo home and results screens into plain text.
pub fn render_demo_dump(width: u16, height: u16) -> anyhow::Result<String> {
    let home = render_demo_home(width, height)?;
    let results = render_demo_results(width, height)?;

    Ok(format!(
        "=== HOME SCREEN ===\n{home}\n\n=== RESULTS SCREEN ===\n{results}\n"
    ))
}

fn render_demo_home(width: u16, height: u16) -> anyhow::Result<String> {
    let catalogue = fixtures::demo_catalogue();
    let mut state = AppState::new(width, 80);
    state.set_catalogue_label(format!("demo ({} products)", catalogue.len()));
    render_state_to_string(&state, width, height)
}

fn render_demo_results(width: u16, height: u16) -> anyhow::Result<String> {
    let catalogue = fixtures::demo_catalogue();
    let mut state = AppState::new(width, 80);
    state.set_catalogue_label(format!("demo ({} products)", catalogue.len()));

    let results = run_query(&catalogue, "Butter");
    let path = dispatch::search_path("Butter").context("demo query produced no path")?;
    state.open_results(path, results);
    render_state_to_string(&state, width, height)
}

fn render_state_to_string(state: &AppState, width: u16, height: u16) -> anyhow::Result<String> {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).context("failed to create test terminal")?;

    terminal
        .draw(|frame| ui::render(frame, state))
        .context("failed to render frame")?;

    let buffer = terminal.backend().buffer().clone();

    let mut out = String::new();
    for y in 0..height {
        for x in 0..width {
            out.push_str(buffer[(x, y)].symbol());
        }
        while out.ends_with(' ') {
            out.pop();
        }
        out.push('\n');
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::render_demo_dump;

    #[test]
    fn demo_dump_contains_both_screens() {
        let dump = render_demo_dump(120, 36).expect("render should succeed");
        assert!(dump.contains("=== HOME SCREEN ==="));
        assert!(dump.contains("=== RESULTS SCREEN ==="));
        assert!(dump.contains("fitsch"));
        assert!(dump.contains("Butter"));
    }

    #[test]
    fn narrow_demo_dump_collapses_search_box() {
        let dump = render_demo_dump(60, 36).expect("render should succeed");
        assert!(dump.contains("[/]"));
        assert!(!dump.contains("search products..."));
    }
}
