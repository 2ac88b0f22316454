use serde::Serialize;

/// How a fetch was started; decides which spinner is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchMode {
    Initial,
    Refresh,
}

/// View state shared by the list screens
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ListState<T> {
    pub loading: bool,
    pub refreshing: bool,
    pub error: Option<String>,
    pub show_list: bool,
    pub data: T,
}

impl<T: Default> ListState<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self, mode: FetchMode) {
        match mode {
            FetchMode::Initial => self.loading = true,
            FetchMode::Refresh => self.refreshing = true,
        }
        self.error = None;
    }

    pub fn succeed(&mut self, data: T) {
        self.data = data;
        self.error = None;
        self.finish();
    }

    /// Empties the list and keeps the message for the user; a refresh may retry
    pub fn fail(&mut self, message: impl Into<String>) {
        self.data = T::default();
        self.error = Some(message.into());
        self.finish();
    }

    pub fn is_busy(&self) -> bool {
        self.loading || self.refreshing
    }

    fn finish(&mut self) {
        self.loading = false;
        self.refreshing = false;
        self.show_list = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_resets_data() {
        let mut state: ListState<Vec<i32>> = ListState::new();
        state.begin(FetchMode::Initial);
        assert!(state.loading);
        assert!(!state.show_list);

        state.succeed(vec![1, 2]);
        assert!(!state.is_busy());
        assert!(state.show_list);

        state.begin(FetchMode::Refresh);
        assert!(state.refreshing);
        assert!(!state.loading);

        state.fail("falhou");
        assert!(state.data.is_empty());
        assert_eq!(state.error.as_deref(), Some("falhou"));
        assert!(!state.is_busy());
    }

    #[test]
    fn test_begin_clears_previous_error() {
        let mut state: ListState<Vec<i32>> = ListState::new();
        state.fail("falhou");
        state.begin(FetchMode::Refresh);
        assert!(state.error.is_none());
    }
}
