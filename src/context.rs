//! Application Context
//!
//! The explicit session context handed to every screen via the Leptos
//! Context API. Screens build their API client from it and report back to
//! the router through it.

use leptos::prelude::*;
use sis_core::{authorize, permits, session, Action, ClientResult, Config, Session, View};

use crate::api::ApiClient;
use crate::storage::BrowserStorage;
use crate::store::{
    store_navigate, store_notify, store_sign_in, store_sign_out, AppStateStoreFields, AppStore,
    NoticeKind,
};

#[derive(Clone, Copy)]
pub struct AppContext {
    pub store: AppStore,
    config: StoredValue<Config>,
}

impl AppContext {
    pub fn new(store: AppStore, config: Config) -> Self {
        Self {
            store,
            config: StoredValue::new(config),
        }
    }

    /// Current session, read without subscribing
    pub fn session(&self) -> Option<Session> {
        self.store.session().get_untracked()
    }

    /// Role gate check for the current session; anonymous may do nothing
    pub fn permits(&self, action: Action) -> bool {
        self.session().is_some_and(|s| permits(&s, action))
    }

    /// Client for a gated mutation; refused locally without a request
    pub fn api_for(&self, action: Action) -> ClientResult<ApiClient> {
        authorize(self.session().as_ref(), action)?;
        Ok(self.api())
    }

    /// Client carrying the current session's bearer token
    pub fn api(&self) -> ApiClient {
        let base_url = self.config.with_value(|c| c.api_base_url.clone());
        ApiClient::new(base_url).for_session(self.session().as_ref())
    }

    pub fn navigate(&self, view: View) {
        store_navigate(&self.store, view);
    }

    pub fn notify_success(&self, text: impl Into<String>) {
        store_notify(&self.store, NoticeKind::Success, text);
    }

    /// Persist and activate a fresh session
    pub fn sign_in(&self, session: Session) {
        if let Err(e) = session::save(&BrowserStorage::open(), &session) {
            log::warn!("[SESSION] Could not persist session: {}", e);
        }
        store_sign_in(&self.store, session);
    }

    /// Forget the session everywhere, even if storage misbehaves
    pub fn sign_out(&self) {
        if let Err(e) = session::clear(&BrowserStorage::open()) {
            log::warn!("[SESSION] Could not clear stored session: {}", e);
        }
        store_sign_out(&self.store);
        log::info!("[SESSION] Signed out");
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
