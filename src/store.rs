//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Holds only what
//! every screen shares: the session, the active view and the notice banner.
//! Screen data stays local to each screen.

use leptos::prelude::*;
use reactive_stores::Store;
use sis_core::view::{self, View};
use sis_core::Session;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Warning,
}

/// Banner message shown above the active screen
#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Signed-in identity; `None` renders the login form
    pub session: Option<Session>,
    /// Screen currently rendered by the router
    pub view: View,
    pub notice: Option<Notice>,
}

impl AppState {
    /// Initial state for a session restored from storage
    pub fn restore(session: Option<Session>) -> Self {
        let view = session.as_ref().map(View::home).unwrap_or_default();
        Self {
            session,
            view,
            notice: None,
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

// ========================
// Store Helper Functions
// ========================

pub fn store_sign_in(store: &AppStore, session: Session) {
    store.view().set(View::home(&session));
    store.notice().set(None);
    store.session().set(Some(session));
}

pub fn store_sign_out(store: &AppStore) {
    store.session().set(None);
    store.view().set(View::default());
    store.notice().set(None);
}

/// Switch screens through the role gate
pub fn store_navigate(store: &AppStore, requested: View) {
    let Some(session) = store.session().get_untracked() else {
        return;
    };
    let routed = view::route(requested, &session);
    if let Some(warning) = routed.warning {
        store_notify(store, NoticeKind::Warning, warning);
    }
    store.view().set(routed.view);
}

pub fn store_notify(store: &AppStore, kind: NoticeKind, text: impl Into<String>) {
    store.notice().set(Some(Notice {
        kind,
        text: text.into(),
    }));
}

pub fn store_dismiss_notice(store: &AppStore) {
    store.notice().set(None);
}

#[cfg(test)]
mod tests {
    use super::*;
    use sis_core::Role;

    fn student_store(id: u32) -> AppStore {
        Store::new(AppState::restore(Some(Session {
            id,
            role: Role::Student,
            token: "t".to_string(),
        })))
    }

    #[test]
    fn test_foreign_details_redirect_posts_warning() {
        let owner = Owner::new();
        owner.set();
        let store = student_store(4);

        store_navigate(&store, View::StudentDetails(9));
        assert_eq!(store.view().get_untracked(), View::StudentDetails(4));
        let notice = store.notice().get_untracked().unwrap();
        assert_eq!(notice.kind, NoticeKind::Warning);
        assert!(notice.text.contains("student #4"));

        // Already home: no second warning
        store_dismiss_notice(&store);
        store_navigate(&store, View::StudentDetails(4));
        assert_eq!(store.notice().get_untracked(), None);
    }

    #[test]
    fn test_faculty_screen_redirects_silently() {
        let owner = Owner::new();
        owner.set();
        let store = student_store(4);

        store_navigate(&store, View::Courses);
        assert_eq!(store.view().get_untracked(), View::StudentDetails(4));
        assert_eq!(store.notice().get_untracked(), None);
    }

    #[test]
    fn test_sign_out_drops_session_and_notice() {
        let owner = Owner::new();
        owner.set();
        let store = student_store(4);
        store_notify(&store, NoticeKind::Success, "Grade added successfully!");

        store_sign_out(&store);
        assert_eq!(store.session().get_untracked(), None);
        assert_eq!(store.notice().get_untracked(), None);
        assert_eq!(store.view().get_untracked(), View::Students);

        // Navigation without a session is ignored
        store_navigate(&store, View::Courses);
        assert_eq!(store.view().get_untracked(), View::Students);
    }
}
