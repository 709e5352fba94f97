//! Per-tab shell state: working directory, history, and history cursor.

use termfolio_types::input::HistoryDirection;

/// State for one independent shell instance (tab).
///
/// `cursor` is always in `0..=history.len()`; `history.len()` means "past the
/// newest entry", where recall yields an empty input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    id: String,
    name: String,
    cwd: String,
    history: Vec<String>,
    cursor: usize,
}

impl Session {
    /// A fresh session whose cwd is `home`. The display name defaults to the id.
    pub fn new(id: impl Into<String>, home: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            cwd: home.into(),
            history: Vec::new(),
            cursor: 0,
        }
    }

    /// Set the display name used by the welcome banner.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn cwd(&self) -> &str {
        &self.cwd
    }

    /// Only commands move the cwd, and only to a directory they looked up.
    pub(crate) fn set_cwd(&mut self, cwd: String) {
        self.cwd = cwd;
    }

    /// Submitted lines, oldest first.
    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Append a submitted line and park the cursor past the newest entry.
    ///
    /// Blank lines are ignored. Returns whether the line was recorded.
    pub fn record(&mut self, line: &str) -> bool {
        let line = line.trim();
        if line.is_empty() {
            return false;
        }
        self.history.push(line.to_string());
        self.cursor = self.history.len();
        true
    }

    /// Move the history cursor and return the line to show in the input.
    ///
    /// Returns `None` (leave the input alone) when there is no history.
    /// Otherwise returns the entry under the cursor, or an empty string once
    /// the cursor moves past the newest entry.
    pub fn navigate(&mut self, direction: HistoryDirection) -> Option<String> {
        if self.history.is_empty() {
            return None;
        }
        self.cursor = match direction {
            HistoryDirection::Up => self.cursor.saturating_sub(1),
            HistoryDirection::Down => (self.cursor + 1).min(self.history.len()),
        };
        log::trace!("session {} history cursor -> {}", self.id, self.cursor);
        Some(self.history.get(self.cursor).cloned().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use termfolio_types::input::HistoryDirection::{Down, Up};

    fn with_history(lines: &[&str]) -> Session {
        let mut s = Session::new("tab-1", "/home/guest");
        for l in lines {
            s.record(l);
        }
        s
    }

    #[test]
    fn new_session_starts_at_home() {
        let s = Session::new("tab-1", "/home/guest");
        assert_eq!(s.cwd(), "/home/guest");
        assert_eq!(s.name(), "tab-1");
        assert!(s.history().is_empty());
        assert_eq!(s.cursor(), 0);
    }

    #[test]
    fn named_overrides_display_name() {
        let s = Session::new("tab-1", "/").named("main");
        assert_eq!(s.id(), "tab-1");
        assert_eq!(s.name(), "main");
    }

    #[test]
    fn record_trims_and_moves_cursor() {
        let mut s = Session::new("t", "/");
        assert!(s.record("  ls -la  "));
        assert_eq!(s.history(), ["ls -la".to_string()]);
        assert_eq!(s.cursor(), 1);
    }

    #[test]
    fn record_ignores_blank() {
        let mut s = with_history(&["a"]);
        assert!(!s.record(""));
        assert!(!s.record(" \t "));
        assert_eq!(s.history().len(), 1);
    }

    #[test]
    fn record_keeps_duplicates() {
        let s = with_history(&["pwd", "pwd"]);
        assert_eq!(s.history().len(), 2);
    }

    #[test]
    fn round_trip_up_up_up_down() {
        let mut s = with_history(&["a", "b", "c"]);
        let recalled: Vec<String> = [Up, Up, Up, Down]
            .into_iter()
            .filter_map(|d| s.navigate(d))
            .collect();
        assert_eq!(recalled, vec!["c", "b", "a", "b"]);
    }

    #[test]
    fn up_clamps_at_oldest() {
        let mut s = with_history(&["a", "b"]);
        s.navigate(Up);
        s.navigate(Up);
        assert_eq!(s.navigate(Up).as_deref(), Some("a"));
        assert_eq!(s.cursor(), 0);
    }

    #[test]
    fn down_past_newest_clears_input() {
        let mut s = with_history(&["a", "b"]);
        s.navigate(Up);
        assert_eq!(s.navigate(Down).as_deref(), Some(""));
        assert_eq!(s.navigate(Down).as_deref(), Some(""));
        assert_eq!(s.cursor(), 2);
    }

    #[test]
    fn empty_history_is_noop() {
        let mut s = Session::new("t", "/");
        assert_eq!(s.navigate(Up), None);
        assert_eq!(s.navigate(Down), None);
        assert_eq!(s.cursor(), 0);
    }

    #[test]
    fn record_resets_cursor_after_navigation() {
        let mut s = with_history(&["a", "b"]);
        s.navigate(Up);
        s.navigate(Up);
        s.record("c");
        assert_eq!(s.cursor(), 3);
        assert_eq!(s.navigate(Up).as_deref(), Some("c"));
    }

    mod prop {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn cursor_stays_in_range(
                lines in proptest::collection::vec("[a-z]{1,5}", 0..8),
                moves in proptest::collection::vec(any::<bool>(), 0..30),
            ) {
                let mut s = Session::new("t", "/");
                for l in &lines {
                    s.record(l);
                }
                for up in moves {
                    s.navigate(if up { Up } else { Down });
                    prop_assert!(s.cursor() <= s.history().len());
                }
            }
        }
    }
}
