//! Application state models and route-local behavior.

mod header;
mod listing_filter;
mod search_input;

pub use self::header::{DEFAULT_NARROW_BREAKPOINT, HeaderLayout, HeaderState, WidthClass};
pub use self::search_input::SearchInputState;
use self::listing_filter::{count_label, filter_listings};
use crate::catalogue::query::QueryResults;
use crate::domain::{Product, Route, StoreId, StoreSelection};

/// Spinner frames used for active async operations.
pub const SPINNER_FRAMES: [&str; 8] = ["⢎⡰", "⢎⡡", "⢎⡑", "⢎⠱", "⠎⡱", "⢊⡱", "⢌⡱", "⢆⡱"];

/// Top-level mutable application state.
#[derive(Debug)]
pub struct AppState {
    pub route: Route,
    pub should_quit: bool,
    pub error_message: Option<String>,
    pub catalogue_label: String,
    pub header: HeaderState,
    pub search_input: SearchInputState,
    pub results: Option<ResultsScreenState>,
    operation: Option<OperationState>,
}

impl AppState {
    /// Initial state, derived once from the current terminal width.
    pub fn new(width: u16, breakpoint: u16) -> Self {
        Self {
            route: Route::Home,
            should_quit: false,
            error_message: None,
            catalogue_label: "(loading catalogue)".to_owned(),
            header: HeaderState::new(width, breakpoint),
            search_input: SearchInputState::default(),
            results: None,
            operation: None,
        }
    }

    pub fn set_catalogue_label(&mut self, label: String) {
        self.catalogue_label = label;
    }

    /// Focuses the search entry. The header transition re-shows the entry
    /// box when the terminal is narrow.
    pub fn focus_search(&mut self) {
        self.search_input.focus();
        self.header.handle_focus();
    }

    /// Clears search focus and recomputes the header layout directly.
    pub fn blur_search(&mut self) {
        self.search_input.unfocus();
        self.header.handle_blur();
    }

    pub fn is_search_focused(&self) -> bool {
        self.search_input.is_focused()
    }

    pub fn search_query(&self) -> &str {
        self.search_input.query()
    }

    pub fn handle_resize(&mut self, width: u16) {
        self.header.handle_resize(width);
    }

    pub fn header_layout(&self) -> HeaderLayout {
        self.header.compute_layout()
    }

    pub fn open_results(&mut self, path: String, results: QueryResults) {
        self.results = Some(ResultsScreenState::new(path, results));
        self.route = Route::Results;
    }

    /// Returns to the home route with a blurred, empty search entry.
    pub fn back_to_home(&mut self) {
        self.route = Route::Home;
        self.blur_search();
        self.search_input.clear();
    }

    pub fn begin_operation(&mut self, label: impl Into<String>) {
        self.operation = Some(OperationState {
            label: label.into(),
            spinner_index: 0,
        });
    }

    pub fn end_operation(&mut self) {
        self.operation = None;
    }

    pub fn is_busy(&self) -> bool {
        self.operation.is_some()
    }

    pub fn advance_spinner(&mut self) {
        if let Some(operation) = self.operation.as_mut() {
            operation.spinner_index = (operation.spinner_index + 1) % SPINNER_FRAMES.len();
        }
    }

    pub fn operation_display(&self) -> Option<String> {
        let operation = self.operation.as_ref()?;
        let frame = SPINNER_FRAMES
            .get(operation.spinner_index)
            .copied()
            .unwrap_or("⢎⡰");
        Some(format!("{frame} {}", operation.label))
    }
}

#[derive(Debug, Clone)]
struct OperationState {
    label: String,
    spinner_index: usize,
}

/// Route-local state for the results screen.
#[derive(Debug, Clone)]
pub struct ResultsScreenState {
    /// Navigation path recorded by the dispatcher, e.g. `/search/shoes`.
    pub path: String,
    pub display_term: String,
    pub term: String,
    pub stores: StoreSelection,
    pub selected_row: usize,
    /// Ordered query results as they arrived; the source of truth for
    /// every re-filter.
    original: Vec<Product>,
    /// Indices into `original`, in original order.
    visible: Vec<usize>,
}

impl ResultsScreenState {
    pub fn new(path: String, results: QueryResults) -> Self {
        let stores = StoreSelection::default();
        let visible = filter_listings(&results.products, &stores);

        Self {
            path,
            display_term: results.display_term,
            term: results.term,
            stores,
            selected_row: 0,
            original: results.products,
            visible,
        }
    }

    /// Replaces the listing payload while preserving the store selection.
    pub fn set_results(&mut self, results: QueryResults) {
        self.display_term = results.display_term;
        self.term = results.term;
        self.original = results.products;
        self.refilter();
    }

    pub fn toggle_store(&mut self, store: StoreId) {
        self.stores.toggle(store);
        self.refilter();
    }

    /// Re-derives the visible subset from the original ordered sequence.
    fn refilter(&mut self) {
        self.visible = filter_listings(&self.original, &self.stores);

        if self.selected_row >= self.visible.len() {
            self.selected_row = self.visible.len().saturating_sub(1);
        }
    }

    pub fn visible_products(&self) -> impl Iterator<Item = &Product> {
        self.visible
            .iter()
            .filter_map(|index| self.original.get(*index))
    }

    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    pub fn count_label(&self) -> String {
        count_label(self.visible.len())
    }

    pub fn selected_product(&self) -> Option<&Product> {
        let index = *self.visible.get(self.selected_row)?;
        self.original.get(index)
    }

    pub fn move_down(&mut self) {
        if self.visible.is_empty() {
            self.selected_row = 0;
            return;
        }

        self.selected_row = (self.selected_row + 1).min(self.visible.len() - 1);
    }

    pub fn move_up(&mut self) {
        if self.visible.is_empty() {
            self.selected_row = 0;
            return;
        }

        self.selected_row = self.selected_row.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::{AppState, ResultsScreenState};
    use crate::catalogue::query::QueryResults;
    use crate::domain::{Price, Product, Route, StoreId};

    fn product(id: &str, store: StoreId) -> Product {
        Product {
            id: id.to_owned(),
            name: id.to_owned(),
            description: String::new(),
            image_url: String::new(),
            url: String::new(),
            item_price: Price::eur(100),
            price_per_unit: Default::default(),
            store,
            timestamp: 0,
        }
    }

    fn results(products: Vec<Product>) -> ResultsScreenState {
        ResultsScreenState::new(
            "/search/test".to_owned(),
            QueryResults {
                display_term: "test".to_owned(),
                term: "test".to_owned(),
                products,
            },
        )
    }

    #[test]
    fn store_toggle_refilters_from_original() {
        let mut screen = results(vec![
            product("a", StoreId::SuperValu),
            product("b", StoreId::Lidl),
            product("c", StoreId::SuperValu),
        ]);
        assert_eq!(screen.visible_count(), 3);

        screen.toggle_store(StoreId::Lidl);
        let ids: Vec<&str> = screen
            .visible_products()
            .map(|product| product.id.as_str())
            .collect();
        assert_eq!(ids, vec!["a", "c"]);
        assert_eq!(screen.count_label(), "2 results");

        screen.toggle_store(StoreId::Lidl);
        assert_eq!(screen.visible_count(), 3);
    }

    #[test]
    fn selection_clamps_when_filter_shrinks() {
        let mut screen = results(vec![
            product("a", StoreId::SuperValu),
            product("b", StoreId::Lidl),
        ]);
        screen.move_down();
        assert_eq!(screen.selected_product().map(|p| p.id.as_str()), Some("b"));

        screen.toggle_store(StoreId::Lidl);
        assert_eq!(screen.selected_product().map(|p| p.id.as_str()), Some("a"));
    }

    #[test]
    fn focus_and_blur_keep_header_and_input_in_step() {
        let mut state = AppState::new(40, 80);
        assert!(!state.header_layout().search_entry);

        state.focus_search();
        assert!(state.is_search_focused());
        assert!(state.header_layout().search_entry);
        assert!(!state.header_layout().title);

        state.blur_search();
        assert!(!state.is_search_focused());
        assert!(state.header_layout().search_trigger);
    }

    #[test]
    fn back_to_home_blurs_and_clears_search() {
        let mut state = AppState::new(120, 80);
        state.open_results(
            "/search/x".to_owned(),
            QueryResults {
                display_term: "x".to_owned(),
                term: "x".to_owned(),
                products: Vec::new(),
            },
        );
        state.focus_search();
        state.search_input.push_char('x');

        state.back_to_home();
        assert_eq!(state.route, Route::Home);
        assert!(!state.is_search_focused());
        assert!(state.search_query().is_empty());
    }
}
