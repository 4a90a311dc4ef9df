//! Chat session controller.
//!
//! A [`ChatSession`] owns the message list, the input buffer, the loading
//! flag and the active mode for one conversation. All of it sits behind a
//! single mutex so that checking and raising the loading flag is one step:
//! two submits racing on the same session produce exactly one request.
//!
//! The reply call itself happens outside the lock. A submit is split in two:
//! [`ChatSession::begin_submit`] does the synchronous bookkeeping and hands
//! back a [`PendingReply`], whose [`PendingReply::settle`] awaits the reply
//! service. [`ChatSession::submit`] does both.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock};
use std::time::Duration;

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use super::message::Message;
use super::mode::Mode;
use super::reply::ReplyService;

/// Description shown when the reply service cannot be reached.
pub const CONNECTION_FAILED: &str = "Failed to connect to IlmAI. Please try again later.";

/// Visual style of a notification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NotificationVariant {
    #[default]
    Default,
    /// Error styling.
    Destructive,
}

/// Transient message for the user, shown once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub variant: NotificationVariant,
}

impl Notification {
    /// The notification raised when a reply could not be fetched.
    #[must_use]
    pub fn connection_failed() -> Self {
        Self {
            title: "Error".to_string(),
            description: CONNECTION_FAILED.to_string(),
            variant: NotificationVariant::Destructive,
        }
    }
}

/// Why a submit did nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ignored {
    /// The text was empty or whitespace only.
    EmptyInput,
    /// Another request for this session has not settled yet.
    RequestInFlight,
}

impl Ignored {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::EmptyInput => "empty_input",
            Self::RequestInFlight => "request_in_flight",
        }
    }
}

/// Result of a submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Nothing was appended and no request was made.
    Ignored(Ignored),
    /// The user message and the assistant reply were appended.
    Replied,
    /// The user message was appended, the reply could not be fetched.
    Failed,
}

/// Read-only copy of a session's state for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatSnapshot {
    pub messages: Vec<Message>,
    pub input: String,
    pub loading: bool,
    pub mode: Mode,
}

impl ChatSnapshot {
    /// Placeholder text for the message input.
    #[must_use]
    pub fn placeholder(&self) -> String {
        placeholder_for(self.mode)
    }
}

fn placeholder_for(mode: Mode) -> String {
    format!("Message IlmAI ({})...", mode.label())
}

#[derive(Debug)]
struct ChatState {
    messages: Vec<Message>,
    input: String,
    loading: bool,
    mode: Mode,
    notification: Option<Notification>,
}

#[derive(Debug)]
struct SessionInner {
    /// Unique session identifier.
    id: String,
    /// Last activity time.
    last_activity: RwLock<DateTime<Utc>>,
    state: Mutex<ChatState>,
    replies: Arc<dyn ReplyService>,
}

impl SessionInner {
    fn lock(&self) -> MutexGuard<'_, ChatState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// A single chat conversation.
///
/// Cloning is cheap and every clone refers to the same conversation.
#[derive(Debug, Clone)]
pub struct ChatSession {
    inner: Arc<SessionInner>,
}

impl ChatSession {
    /// Create an empty session.
    pub fn new(id: impl Into<String>, mode: Mode, replies: Arc<dyn ReplyService>) -> Self {
        Self::with_history(id, mode, replies, Vec::new())
    }

    /// Create a session that starts with `history` already displayed.
    pub fn with_history(
        id: impl Into<String>,
        mode: Mode,
        replies: Arc<dyn ReplyService>,
        history: Vec<Message>,
    ) -> Self {
        let now = Utc::now();
        Self {
            inner: Arc::new(SessionInner {
                id: id.into(),
                last_activity: RwLock::new(now),
                state: Mutex::new(ChatState {
                    messages: history,
                    input: String::new(),
                    loading: false,
                    mode,
                    notification: None,
                }),
                replies,
            }),
        }
    }

    /// Get the session ID.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.inner.id
    }

    /// Replace the input buffer.
    pub fn set_input(&self, text: impl Into<String>) {
        self.inner.lock().input = text.into();
    }

    /// Current input buffer.
    #[must_use]
    pub fn input(&self) -> String {
        self.inner.lock().input.clone()
    }

    /// Whether a reply is outstanding.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.inner.lock().loading
    }

    #[must_use]
    pub fn active_mode(&self) -> Mode {
        self.inner.lock().mode
    }

    /// All messages, oldest first.
    #[must_use]
    pub fn messages(&self) -> Vec<Message> {
        self.inner.lock().messages.clone()
    }

    #[must_use]
    pub fn message_count(&self) -> usize {
        self.inner.lock().messages.len()
    }

    /// Consistent copy of everything a view needs.
    #[must_use]
    pub fn snapshot(&self) -> ChatSnapshot {
        let state = self.inner.lock();
        ChatSnapshot {
            messages: state.messages.clone(),
            input: state.input.clone(),
            loading: state.loading,
            mode: state.mode,
        }
    }

    /// Placeholder text for the message input.
    #[must_use]
    pub fn placeholder(&self) -> String {
        placeholder_for(self.active_mode())
    }

    /// Switch the active mode.
    ///
    /// Only replies requested after this call carry the new label.
    pub fn select_mode(&self, mode: Mode) {
        let previous = std::mem::replace(&mut self.inner.lock().mode, mode);
        self.touch();
        info!(
            name: "chat.mode.selected",
            session_id = %self.id(),
            from = %previous,
            to = %mode,
            "Assistant mode selected"
        );
    }

    /// Take the pending notification, if any. It is returned only once.
    pub fn take_notification(&self) -> Option<Notification> {
        self.inner.lock().notification.take()
    }

    /// Start a submit.
    ///
    /// On success the user message is already appended, the input buffer is
    /// cleared and the session is loading until the returned
    /// [`PendingReply`] is settled or dropped.
    pub fn begin_submit(&self, text: &str) -> Result<PendingReply, Ignored> {
        let accepted = if text.trim().is_empty() {
            Err(Ignored::EmptyInput)
        } else {
            let mut state = self.inner.lock();
            if state.loading {
                Err(Ignored::RequestInFlight)
            } else {
                state.messages.push(Message::user(text));
                state.input.clear();
                state.loading = true;
                Ok(state.mode)
            }
        };

        let mode = match accepted {
            Ok(mode) => mode,
            Err(reason) => {
                debug!(
                    name: "chat.submit.ignored",
                    session_id = %self.id(),
                    reason = reason.as_str(),
                    "Submit ignored"
                );
                return Err(reason);
            }
        };

        self.touch();
        info!(
            name: "chat.submit.accepted",
            session_id = %self.id(),
            mode = %mode,
            message_length = text.len(),
            "Submit accepted"
        );
        tracing::trace!(session_id = %self.id(), message = %text, "User message");

        Ok(PendingReply {
            session: self.clone(),
            message: text.to_string(),
            mode,
            loading: LoadingGuard {
                inner: Arc::clone(&self.inner),
                armed: true,
            },
        })
    }

    /// Submit `text` and wait for the outcome.
    pub async fn submit(&self, text: &str) -> SubmitOutcome {
        match self.begin_submit(text) {
            Ok(pending) => pending.settle().await,
            Err(reason) => SubmitOutcome::Ignored(reason),
        }
    }

    /// Time since the session was last used.
    #[must_use]
    pub fn idle_for(&self) -> Duration {
        let last = *self
            .inner
            .last_activity
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        (Utc::now() - last).to_std().unwrap_or(Duration::ZERO)
    }

    /// Whether the session has been idle longer than `timeout`.
    ///
    /// A session waiting on a reply never counts as expired.
    #[must_use]
    pub fn is_expired_with_timeout(&self, timeout: Duration) -> bool {
        !self.is_loading() && self.idle_for() > timeout
    }

    /// Update the last activity timestamp.
    pub(crate) fn touch(&self) {
        let mut guard = self
            .inner
            .last_activity
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        *guard = Utc::now();
    }
}

/// Clears the loading flag when dropped, unless disarmed.
#[derive(Debug)]
struct LoadingGuard {
    inner: Arc<SessionInner>,
    armed: bool,
}

impl LoadingGuard {
    fn disarm(&mut self) {
        self.armed = false;
    }
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        if self.armed {
            self.inner.lock().loading = false;
            debug!(session_id = %self.inner.id, "Pending reply dropped before settling");
        }
    }
}

/// An accepted submit whose reply has not been fetched yet.
#[derive(Debug)]
#[must_use = "the session stays loading until the pending reply is settled or dropped"]
pub struct PendingReply {
    session: ChatSession,
    message: String,
    mode: Mode,
    loading: LoadingGuard,
}

impl PendingReply {
    /// Mode captured when the submit was accepted.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Fetch the reply and record the outcome.
    pub async fn settle(self) -> SubmitOutcome {
        let Self {
            session,
            message,
            mode,
            mut loading,
        } = self;

        let result = session.inner.replies.reply(&message).await;

        let mut state = session.inner.lock();
        let outcome = match result {
            Ok(reply) => {
                info!(
                    name: "chat.reply.received",
                    session_id = %session.id(),
                    mode = %mode,
                    reply_length = reply.len(),
                    "Reply received"
                );
                state.messages.push(Message::assistant(reply, mode.label()));
                SubmitOutcome::Replied
            }
            Err(err) => {
                warn!(
                    name: "chat.reply.failed",
                    session_id = %session.id(),
                    error = %err,
                    "Failed to get reply"
                );
                // The user message stays in the conversation.
                state.notification = Some(Notification::connection_failed());
                SubmitOutcome::Failed
            }
        };
        state.loading = false;
        loading.disarm();
        drop(state);
        session.touch();

        outcome
    }
}
