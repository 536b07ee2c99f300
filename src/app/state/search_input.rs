/// Search entry buffer plus its focus flag. The header state machine holds
/// its own copy of the focus bit; `AppState` keeps the two in step.
#[derive(Debug, Clone, Default)]
pub struct SearchInputState {
    query: String,
    focused: bool,
}

impl SearchInputState {
    pub fn focus(&mut self) {
        self.focused = true;
    }

    pub fn unfocus(&mut self) {
        self.focused = false;
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn push_char(&mut self, ch: char) {
        self.query.push(ch);
    }

    pub fn backspace(&mut self) {
        self.query.pop();
    }

    /// Resets the buffer, e.g. when navigating back to a fresh home screen.
    pub fn clear(&mut self) {
        self.query.clear();
    }
}
