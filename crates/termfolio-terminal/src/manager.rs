//! Ordered set of open sessions, one per tab.
//!
//! The first tab is `tab-1` named `main`. Later tabs are `tab-2`, `tab-3`,
//! and so on. Numbers are never reused, and there is always at least one
//! open tab.

use crate::session::Session;

/// Owns the open sessions and tracks which one is active.
#[derive(Debug, Clone)]
pub struct SessionManager {
    home: String,
    /// Open sessions in the order they were opened.
    sessions: Vec<Session>,
    active: String,
    next_index: usize,
}

impl SessionManager {
    /// Open the initial `main` tab, rooted at `home`.
    pub fn new(home: impl Into<String>) -> Self {
        let home = home.into();
        let first = Session::new("tab-1", home.as_str()).named("main");
        Self {
            active: first.id().to_string(),
            sessions: vec![first],
            home,
            next_index: 2,
        }
    }

    /// Open a new tab, make it active, and return its id.
    pub fn open(&mut self) -> String {
        let id = format!("tab-{}", self.next_index);
        self.next_index += 1;
        self.sessions.push(Session::new(id.as_str(), self.home.as_str()));
        self.active = id.clone();
        log::debug!("opened {id}");
        id
    }

    /// Close a tab. Unknown ids are ignored.
    ///
    /// Closing the last tab opens a fresh one. Closing the active tab
    /// activates the most recently opened remaining tab.
    pub fn close(&mut self, id: &str) {
        let Some(pos) = self.sessions.iter().position(|s| s.id() == id) else {
            return;
        };
        self.sessions.remove(pos);
        log::debug!("closed {id}");

        if self.sessions.is_empty() {
            self.open();
            return;
        }
        if self.active == id
            && let Some(last) = self.sessions.last()
        {
            self.active = last.id().to_string();
        }
    }

    /// Make a tab active. Returns `false` for unknown ids.
    pub fn activate(&mut self, id: &str) -> bool {
        if self.get(id).is_none() {
            return false;
        }
        self.active = id.to_string();
        true
    }

    pub fn active_id(&self) -> &str {
        &self.active
    }

    pub fn get(&self, id: &str) -> Option<&Session> {
        self.sessions.iter().find(|s| s.id() == id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Session> {
        self.sessions.iter_mut().find(|s| s.id() == id)
    }

    pub fn active(&self) -> Option<&Session> {
        self.get(&self.active)
    }

    pub fn active_mut(&mut self) -> Option<&mut Session> {
        let id = self.active.clone();
        self.get_mut(&id)
    }

    /// Ids of open tabs, in opening order.
    pub fn ids(&self) -> Vec<&str> {
        self.sessions.iter().map(Session::id).collect()
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Always `false`: closing the last tab opens another.
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Banner printed when a tab opens.
    pub fn welcome(&self, id: &str) -> Option<Vec<String>> {
        let session = self.get(id)?;
        Some(vec![
            format!("Welcome to {}!", session.name()),
            "Type 'help' to see what you can do.".to_string(),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_main_tab() {
        let mgr = SessionManager::new("/home/guest");
        assert_eq!(mgr.ids(), vec!["tab-1"]);
        assert_eq!(mgr.active_id(), "tab-1");
        assert_eq!(mgr.active().unwrap().name(), "main");
        assert_eq!(mgr.active().unwrap().cwd(), "/home/guest");
    }

    #[test]
    fn open_numbers_from_two_and_activates() {
        let mut mgr = SessionManager::new("/");
        assert_eq!(mgr.open(), "tab-2");
        assert_eq!(mgr.open(), "tab-3");
        assert_eq!(mgr.active_id(), "tab-3");
        assert_eq!(mgr.get("tab-2").unwrap().name(), "tab-2");
    }

    #[test]
    fn numbers_not_reused() {
        let mut mgr = SessionManager::new("/");
        let id = mgr.open();
        mgr.close(&id);
        assert_eq!(mgr.open(), "tab-3");
    }

    #[test]
    fn closing_active_falls_back_to_last_opened() {
        let mut mgr = SessionManager::new("/");
        mgr.open();
        mgr.open();
        mgr.activate("tab-2");
        mgr.close("tab-2");
        assert_eq!(mgr.active_id(), "tab-3");
        assert_eq!(mgr.ids(), vec!["tab-1", "tab-3"]);
    }

    #[test]
    fn closing_inactive_keeps_active() {
        let mut mgr = SessionManager::new("/");
        mgr.open();
        mgr.close("tab-1");
        assert_eq!(mgr.active_id(), "tab-2");
        assert_eq!(mgr.len(), 1);
    }

    #[test]
    fn closing_last_tab_opens_fresh_one() {
        let mut mgr = SessionManager::new("/");
        mgr.close("tab-1");
        assert_eq!(mgr.ids(), vec!["tab-2"]);
        assert_eq!(mgr.active_id(), "tab-2");
        assert!(!mgr.is_empty());
    }

    #[test]
    fn unknown_ids_ignored() {
        let mut mgr = SessionManager::new("/");
        mgr.close("tab-9");
        assert!(!mgr.activate("tab-9"));
        assert_eq!(mgr.active_id(), "tab-1");
        assert!(mgr.welcome("tab-9").is_none());
    }

    #[test]
    fn welcome_uses_display_name() {
        let mut mgr = SessionManager::new("/");
        let id = mgr.open();
        assert_eq!(
            mgr.welcome("tab-1").unwrap(),
            vec!["Welcome to main!", "Type 'help' to see what you can do."]
        );
        assert_eq!(mgr.welcome(&id).unwrap()[0], "Welcome to tab-2!");
    }

    #[test]
    fn sessions_are_isolated() {
        let mut mgr = SessionManager::new("/");
        mgr.open();
        mgr.get_mut("tab-1").unwrap().record("pwd");
        assert_eq!(mgr.get("tab-1").unwrap().history().len(), 1);
        assert!(mgr.get("tab-2").unwrap().history().is_empty());
        assert!(mgr.active_mut().unwrap().history().is_empty());
    }
}
