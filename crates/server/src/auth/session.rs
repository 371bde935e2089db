use chrono::{DateTime, Duration, Utc};
use shared_types::AuthUser;
use std::collections::HashMap;
use std::sync::{OnceLock, PoisonError, RwLock};

#[derive(Debug, Clone)]
struct SessionRecord {
    user: AuthUser,
    expires_at: DateTime<Utc>,
}

/// In-memory map from opaque session token to the signed-in user.
///
/// Tokens are random UUIDs and carry no meaning of their own. Expired
/// entries are dropped lazily on lookup and in bulk by [`SessionStore::purge_expired`].
#[derive(Debug)]
pub struct SessionStore {
    sessions: RwLock<HashMap<String, SessionRecord>>,
    ttl: Duration,
}

impl SessionStore {
    pub fn new(ttl_minutes: i64) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            ttl: Duration::minutes(ttl_minutes),
        }
    }

    pub fn ttl_minutes(&self) -> i64 {
        self.ttl.num_minutes()
    }

    /// Open a session for `user` and return its token.
    pub fn create(&self, user: AuthUser) -> String {
        self.create_at(user, Utc::now())
    }

    fn create_at(&self, user: AuthUser, now: DateTime<Utc>) -> String {
        let token = uuid::Uuid::new_v4().to_string();
        let record = SessionRecord {
            user,
            expires_at: now + self.ttl,
        };
        self.sessions
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(token.clone(), record);
        token
    }

    /// The user behind `token`, if the session exists and has not expired.
    pub fn resolve(&self, token: &str) -> Option<AuthUser> {
        self.resolve_at(token, Utc::now())
    }

    fn resolve_at(&self, token: &str, now: DateTime<Utc>) -> Option<AuthUser> {
        let expired = {
            let sessions = self.sessions.read().unwrap_or_else(PoisonError::into_inner);
            match sessions.get(token) {
                Some(record) if record.expires_at > now => return Some(record.user.clone()),
                Some(_) => true,
                None => false,
            }
        };
        if expired {
            self.revoke(token);
        }
        None
    }

    /// End a session. Returns whether it existed.
    pub fn revoke(&self, token: &str) -> bool {
        self.sessions
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(token)
            .is_some()
    }

    /// Drop every expired session and return how many were removed.
    pub fn purge_expired(&self) -> usize {
        self.purge_expired_at(Utc::now())
    }

    fn purge_expired_at(&self, now: DateTime<Utc>) -> usize {
        let mut sessions = self.sessions.write().unwrap_or_else(PoisonError::into_inner);
        let before = sessions.len();
        sessions.retain(|_, record| record.expires_at > now);
        before - sessions.len()
    }

    pub fn len(&self) -> usize {
        self.sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

static STORE: OnceLock<SessionStore> = OnceLock::new();

/// Process-wide session store, sized by `SESSION_TTL_MINUTES` on first use.
pub fn store() -> &'static SessionStore {
    STORE.get_or_init(|| SessionStore::new(crate::config::session_ttl_minutes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(username: &str) -> AuthUser {
        AuthUser {
            id: 1,
            username: username.into(),
            role: "user".into(),
        }
    }

    #[test]
    fn created_session_resolves() {
        let store = SessionStore::new(30);
        let token = store.create(user("al"));
        assert_eq!(store.resolve(&token).map(|u| u.username), Some("al".into()));
    }

    #[test]
    fn tokens_are_unique() {
        let store = SessionStore::new(30);
        let a = store.create(user("al"));
        let b = store.create(user("al"));
        assert_ne!(a, b);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn unknown_token_resolves_to_none() {
        let store = SessionStore::new(30);
        assert!(store.resolve("not-a-session").is_none());
    }

    #[test]
    fn expired_session_is_dropped_on_lookup() {
        let store = SessionStore::new(30);
        let start = Utc::now();
        let token = store.create_at(user("al"), start);
        assert!(store.resolve_at(&token, start + Duration::minutes(29)).is_some());
        assert!(store.resolve_at(&token, start + Duration::minutes(31)).is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn revoke_reports_existence() {
        let store = SessionStore::new(30);
        let token = store.create(user("al"));
        assert!(store.revoke(&token));
        assert!(!store.revoke(&token));
        assert!(store.resolve(&token).is_none());
    }

    #[test]
    fn purge_removes_only_expired() {
        let store = SessionStore::new(30);
        let start = Utc::now();
        store.create_at(user("old"), start - Duration::minutes(60));
        let fresh = store.create_at(user("new"), start);
        assert_eq!(store.purge_expired_at(start), 1);
        assert!(store.resolve_at(&fresh, start).is_some());
    }
}
