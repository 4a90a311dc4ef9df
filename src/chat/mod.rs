//! Chat session management.
//!
//! This module holds the only stateful part of the application: the chat
//! session controller and the in-memory store that maps browser sessions to
//! conversations.
//!
//! # Architecture
//!
//! - [`ChatSession`]: one conversation, its input buffer and loading flag
//! - [`SessionStore`]: thread-safe store for all active sessions
//! - [`ReplyService`]: source of assistant replies, [`HttpReplyClient`] in production
//! - [`Mode`]: the fixed set of assistant modes
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use ilmai::chat::{HttpReplyClient, SessionDefaults, SessionStore, SubmitOutcome};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let replies = Arc::new(HttpReplyClient::new("http://localhost:5000")?);
//! let store = SessionStore::new(replies, SessionDefaults::default());
//!
//! let session = store.create();
//! if session.submit("What is Zakat?").await == SubmitOutcome::Replied {
//!     println!("{:?}", session.messages().last());
//! }
//! # Ok(())
//! # }
//! ```

mod message;
mod mode;
mod reply;
mod session;
mod store;

pub use message::{Message, Role};
pub use mode::Mode;
pub use reply::{CHAT_PATH, ChatReply, ChatRequest, HttpReplyClient, ReplyService};
pub use session::{
    CONNECTION_FAILED, ChatSession, ChatSnapshot, Ignored, Notification, NotificationVariant,
    PendingReply, SubmitOutcome,
};
pub use store::{DEFAULT_GREETING, GREETING_LABEL, SessionDefaults, SessionStore};
