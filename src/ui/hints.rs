//! Footer hint composition for each route and interaction mode.

use crate::{app::state::AppState, domain::Route};

pub fn build(state: &AppState) -> String {
    if state.is_search_focused() {
        return "[type] edit query  [backspace] delete  [enter] search  [esc] unfocus".to_owned();
    }

    match state.route {
        Route::Home => {
            "[s or /] focus search  [enter] search  [q] quit".to_owned()
        }
        Route::Results => {
            "[j/k/up/down] navigate  [1-5] toggle store  [s or /] focus search  [r] refresh  [b] back  [q] quit"
                .to_owned()
        }
    }
}
