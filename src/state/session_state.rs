// ============================================================================
// SESSION STATE - Explicit session context over persisted storage
// ============================================================================
// Every read goes to storage, so another tab's login/logout is seen on the
// next mount. Nothing is cached in memory.
// ============================================================================

use std::rc::Rc;

use crate::errors::SessionError;
use crate::models::User;
use crate::utils::{KeyValueStore, AUTH_TOKEN_KEY, USER_KEY};

#[derive(Clone)]
pub struct SessionContext {
    store: Rc<dyn KeyValueStore>,
}

impl SessionContext {
    pub fn new(store: Rc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Session token; blank values and unreadable storage count as absent
    pub fn token(&self) -> Option<String> {
        match self.store.get(AUTH_TOKEN_KEY) {
            Ok(token) => token.filter(|t| !t.trim().is_empty()),
            Err(e) => {
                log::warn!("⚠️ [SESSION] Could not read token: {}", e);
                None
            }
        }
    }

    pub fn has_token(&self) -> bool {
        self.token().is_some()
    }

    /// Stored user record. `Ok(None)` when there is none.
    pub fn user(&self) -> Result<Option<User>, SessionError> {
        let raw = match self.store.get(USER_KEY)? {
            Some(raw) => raw,
            None => return Ok(None),
        };
        serde_json::from_str::<User>(&raw)
            .map(Some)
            .map_err(|e| SessionError::CorruptUser(e.to_string()))
    }

    /// Write token and user record
    pub fn persist(&self, token: &str, user: &User) -> Result<(), SessionError> {
        let user_json =
            serde_json::to_string(user).map_err(|e| SessionError::Write(e.to_string()))?;
        self.store.set(AUTH_TOKEN_KEY, token)?;
        if let Err(e) = self.store.set(USER_KEY, &user_json) {
            // Half-written session must not grant access
            let _ = self.store.remove(AUTH_TOKEN_KEY);
            return Err(e);
        }
        log::info!("💾 [SESSION] Session persisted");
        Ok(())
    }

    /// Remove both entries. Both removals are attempted even if the first fails.
    pub fn clear(&self) -> Result<(), SessionError> {
        let token = self.store.remove(AUTH_TOKEN_KEY);
        let user = self.store.remove(USER_KEY);
        log::info!("🗑️ [SESSION] Session cleared");
        token.and(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::MemoryStore;

    fn context() -> (SessionContext, MemoryStore) {
        let store = MemoryStore::new();
        (SessionContext::new(Rc::new(store.clone())), store)
    }

    #[test]
    fn persist_then_read_back() {
        let (session, store) = context();
        session
            .persist("abc123", &User::with_full_name("Admin User"))
            .unwrap();

        assert_eq!(session.token().as_deref(), Some("abc123"));
        assert_eq!(store.get(AUTH_TOKEN_KEY).unwrap().as_deref(), Some("abc123"));
        let user = session.user().unwrap().unwrap();
        assert_eq!(user.display_name(), Some("Admin User"));
    }

    #[test]
    fn clear_removes_both_entries() {
        let (session, store) = context();
        session.persist("abc123", &User::default()).unwrap();
        session.clear().unwrap();

        assert!(store.is_empty());
        assert!(!session.has_token());
        assert_eq!(session.user().unwrap(), None);
    }

    #[test]
    fn blank_token_is_absent() {
        let (session, store) = context();
        store.set(AUTH_TOKEN_KEY, "  ").unwrap();
        assert_eq!(session.token(), None);
    }

    #[test]
    fn malformed_user_is_an_error() {
        let (session, store) = context();
        store.set(AUTH_TOKEN_KEY, "abc123").unwrap();
        store.set(USER_KEY, "{not json").unwrap();
        assert!(matches!(session.user(), Err(SessionError::CorruptUser(_))));
    }

    #[test]
    fn reads_see_writes_from_other_handles() {
        // Another tab sharing the same storage logs out
        let (session, store) = context();
        session.persist("abc123", &User::default()).unwrap();
        let other_tab = SessionContext::new(Rc::new(store.clone()));
        other_tab.clear().unwrap();
        assert!(!session.has_token());
    }
}
