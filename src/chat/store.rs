//! In-memory chat session storage.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};
use std::time::Duration;

use tracing::{debug, info};
use uuid::Uuid;

use super::message::Message;
use super::mode::Mode;
use super::reply::ReplyService;
use super::session::ChatSession;

/// Greeting shown at the top of a new conversation.
pub const DEFAULT_GREETING: &str =
    "As-salamu alaykum! I am IlmAI. How can I assist you with your Islamic studies?";

/// Label attached to the greeting message.
pub const GREETING_LABEL: &str = "IlmAI Pro";

/// Settings applied to every new session.
#[derive(Debug, Clone)]
pub struct SessionDefaults {
    /// Active mode of a fresh session.
    pub mode: Mode,
    /// Optional first assistant message.
    pub greeting: Option<String>,
}

impl Default for SessionDefaults {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            greeting: Some(DEFAULT_GREETING.to_string()),
        }
    }
}

/// Thread-safe store for chat sessions.
///
/// Sessions live only in memory; restarting the process forgets them.
#[derive(Debug, Clone)]
pub struct SessionStore {
    inner: Arc<SessionStoreInner>,
}

#[derive(Debug)]
struct SessionStoreInner {
    sessions: RwLock<HashMap<String, ChatSession>>,
    replies: Arc<dyn ReplyService>,
    defaults: SessionDefaults,
}

impl SessionStore {
    /// Create a store whose sessions fetch replies from `replies`.
    pub fn new(replies: Arc<dyn ReplyService>, defaults: SessionDefaults) -> Self {
        Self {
            inner: Arc::new(SessionStoreInner {
                sessions: RwLock::new(HashMap::new()),
                replies,
                defaults,
            }),
        }
    }

    /// Create a new session and return it.
    #[must_use]
    pub fn create(&self) -> ChatSession {
        self.create_with_id(Uuid::new_v4().to_string())
    }

    /// Create a new session with a specific ID, replacing any existing one.
    #[must_use]
    pub fn create_with_id(&self, id: impl Into<String>) -> ChatSession {
        let id = id.into();
        let history = self
            .inner
            .defaults
            .greeting
            .as_ref()
            .map(|text| vec![Message::assistant(text.clone(), GREETING_LABEL)])
            .unwrap_or_default();

        let session = ChatSession::with_history(
            id.clone(),
            self.inner.defaults.mode,
            Arc::clone(&self.inner.replies),
            history,
        );
        self.write().insert(id, session.clone());
        info!(name: "session.created", session_id = %session.id(), "Chat session created");
        session
    }

    /// Get a session by ID.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<ChatSession> {
        self.read().get(id).cloned()
    }

    /// Get a session by ID, creating a fresh one under a new ID if it is unknown.
    ///
    /// Client supplied IDs are never adopted.
    #[must_use]
    pub fn get_or_create(&self, id: Option<&str>) -> ChatSession {
        if let Some(session) = id.and_then(|id| self.get(id)) {
            return session;
        }
        debug!(requested = ?id, "Unknown session, creating a new one");
        self.create()
    }

    /// Remove a session by ID.
    pub fn remove(&self, id: &str) -> Option<ChatSession> {
        self.write().remove(id)
    }

    /// Get the number of active sessions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Check if there are no sessions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove sessions that have been inactive longer than the timeout.
    ///
    /// Returns the number of sessions removed.
    pub fn cleanup_expired_with_timeout(&self, timeout: Duration) -> usize {
        let mut guard = self.write();
        let before = guard.len();
        guard.retain(|id, session| {
            let expired = session.is_expired_with_timeout(timeout);
            if expired {
                info!(name: "session.expired", session_id = %id, "Chat session expired");
            }
            !expired
        });
        before - guard.len()
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, HashMap<String, ChatSession>> {
        self.inner
            .sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, HashMap<String, ChatSession>> {
        self.inner
            .sessions
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::message::Role;
    use crate::error::ReplyError;
    use async_trait::async_trait;

    #[derive(Debug)]
    struct Echo;

    #[async_trait]
    impl ReplyService for Echo {
        async fn reply(&self, message: &str) -> Result<String, ReplyError> {
            Ok(message.to_string())
        }
    }

    fn store(defaults: SessionDefaults) -> SessionStore {
        SessionStore::new(Arc::new(Echo), defaults)
    }

    #[test]
    fn new_session_starts_with_greeting() {
        let store = store(SessionDefaults::default());
        let session = store.create();

        let messages = session.messages();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].role, Role::Assistant);
        assert_eq!(messages[0].text, DEFAULT_GREETING);
        assert_eq!(messages[0].model_label.as_deref(), Some(GREETING_LABEL));
        assert_eq!(session.active_mode(), Mode::Pro);
    }

    #[test]
    fn greeting_can_be_disabled() {
        let store = store(SessionDefaults {
            mode: Mode::Fast,
            greeting: None,
        });
        let session = store.create();
        assert_eq!(session.message_count(), 0);
        assert_eq!(session.active_mode(), Mode::Fast);
    }

    #[test]
    fn get_returns_same_conversation() {
        let store = store(SessionDefaults::default());
        let session = store.create();
        session.set_input("draft");

        let again = store.get(session.id()).unwrap();
        assert_eq!(again.input(), "draft");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn unknown_id_gets_a_fresh_session() {
        let store = store(SessionDefaults::default());
        let session = store.get_or_create(Some("not-a-real-id"));
        assert_ne!(session.id(), "not-a-real-id");
        assert!(store.get("not-a-real-id").is_none());

        let same = store.get_or_create(Some(session.id()));
        assert_eq!(same.id(), session.id());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn remove_forgets_session() {
        let store = store(SessionDefaults::default());
        let session = store.create();
        assert!(store.remove(session.id()).is_some());
        assert!(store.is_empty());
    }

    #[test]
    fn cleanup_spares_active_sessions() {
        let store = store(SessionDefaults::default());
        let idle = store.create();
        let busy = store.create();
        let _pending = busy.begin_submit("still waiting").unwrap();

        std::thread::sleep(Duration::from_millis(5));
        let removed = store.cleanup_expired_with_timeout(Duration::from_millis(1));

        assert_eq!(removed, 1);
        assert!(store.get(idle.id()).is_none());
        assert!(store.get(busy.id()).is_some());
    }
}
