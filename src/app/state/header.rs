//! Responsive header layout state machine.
//!
//! The header owns three regions: the app title, the search entry box, and a
//! compact search trigger shown instead of the box on narrow terminals. Which
//! regions are visible is a pure function of terminal width and search focus;
//! the renderer applies the computed layout and mutates nothing else.

/// Default width (in columns) below which the header collapses.
pub const DEFAULT_NARROW_BREAKPOINT: u16 = 80;

/// Width classification against the configured breakpoint.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum WidthClass {
    Wide,
    Narrow,
}

impl WidthClass {
    pub fn from_width(width: u16, breakpoint: u16) -> Self {
        if width < breakpoint {
            Self::Narrow
        } else {
            Self::Wide
        }
    }
}

/// Visibility assignment for the three header regions.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct HeaderLayout {
    pub title: bool,
    pub search_entry: bool,
    pub search_trigger: bool,
}

/// Header state: width class plus search-entry focus.
#[derive(Debug, Clone, Copy)]
pub struct HeaderState {
    breakpoint: u16,
    width_class: WidthClass,
    focused: bool,
}

impl HeaderState {
    /// Initial state, derived once at startup from the current width.
    /// Focus starts cleared.
    pub fn new(width: u16, breakpoint: u16) -> Self {
        Self {
            breakpoint,
            width_class: WidthClass::from_width(width, breakpoint),
            focused: false,
        }
    }

    pub fn width_class(&self) -> WidthClass {
        self.width_class
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Re-derives the width class from a resize notification. Focus is
    /// carried over unchanged, so the next layout is computed from the
    /// current focus state with no intermediate frame.
    pub fn handle_resize(&mut self, width: u16) {
        self.width_class = WidthClass::from_width(width, self.breakpoint);
    }

    /// Focus moved into the search entry. At narrow widths this re-shows the
    /// entry box so it can legally hold focus.
    pub fn handle_focus(&mut self) {
        self.focused = true;
    }

    /// Focus left the search entry. The layout is recomputed directly from
    /// the current width class; the entry box is never hidden first.
    pub fn handle_blur(&mut self) {
        self.focused = false;
    }

    /// Pure layout function of `(width_class, focused)`.
    ///
    /// At narrow widths exactly one of the search entry and the trigger is
    /// visible; at wide widths both entry and title are shown and the
    /// trigger is redundant.
    pub fn compute_layout(&self) -> HeaderLayout {
        match (self.width_class, self.focused) {
            (WidthClass::Wide, _) => HeaderLayout {
                title: true,
                search_entry: true,
                search_trigger: false,
            },
            (WidthClass::Narrow, false) => HeaderLayout {
                title: true,
                search_entry: false,
                search_trigger: true,
            },
            (WidthClass::Narrow, true) => HeaderLayout {
                title: false,
                search_entry: true,
                search_trigger: false,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{HeaderLayout, HeaderState, WidthClass};

    const BREAKPOINT: u16 = 500;

    fn layout(width: u16, focused: bool) -> HeaderLayout {
        let mut state = HeaderState::new(width, BREAKPOINT);
        if focused {
            state.handle_focus();
        }
        state.compute_layout()
    }

    #[test]
    fn wide_layout_ignores_focus() {
        for width in [500, 501, 1200] {
            for focused in [false, true] {
                let layout = layout(width, focused);
                assert!(layout.title);
                assert!(layout.search_entry);
                assert!(!layout.search_trigger);
            }
        }
    }

    #[test]
    fn narrow_unfocused_shows_trigger_only() {
        for width in [0, 120, 499] {
            let layout = layout(width, false);
            assert!(layout.title);
            assert!(!layout.search_entry);
            assert!(layout.search_trigger);
        }
    }

    #[test]
    fn narrow_focused_gives_entry_full_width() {
        let layout = layout(499, true);
        assert!(!layout.title);
        assert!(layout.search_entry);
        assert!(!layout.search_trigger);
    }

    #[test]
    fn narrow_shows_exactly_one_of_entry_and_trigger() {
        for focused in [false, true] {
            let layout = layout(300, focused);
            assert_ne!(layout.search_entry, layout.search_trigger);
        }
    }

    #[test]
    fn compute_layout_is_idempotent() {
        let mut state = HeaderState::new(480, BREAKPOINT);
        state.handle_focus();
        assert_eq!(state.compute_layout(), state.compute_layout());

        state.handle_resize(480);
        let first = state.compute_layout();
        state.handle_resize(480);
        assert_eq!(first, state.compute_layout());
    }

    #[test]
    fn resize_wide_to_narrow_lands_directly_on_trigger_layout() {
        let mut state = HeaderState::new(900, BREAKPOINT);
        assert_eq!(state.width_class(), WidthClass::Wide);

        state.handle_resize(320);
        let layout = state.compute_layout();
        assert!(layout.title);
        assert!(layout.search_trigger);
        assert!(!layout.search_entry);
    }

    #[test]
    fn focus_at_narrow_reshows_entry_and_blur_recomputes() {
        let mut state = HeaderState::new(320, BREAKPOINT);
        state.handle_focus();
        assert!(state.compute_layout().search_entry);

        state.handle_blur();
        let layout = state.compute_layout();
        assert!(layout.title);
        assert!(layout.search_trigger);
        assert!(!layout.search_entry);
    }

    #[test]
    fn blur_at_wide_keeps_entry_visible() {
        let mut state = HeaderState::new(900, BREAKPOINT);
        state.handle_focus();
        state.handle_blur();
        assert!(state.compute_layout().search_entry);
    }
}
