//! Conversation domain.
//!
//! The canvasser and the mark never share a context window. Each party owns
//! its own append-only [`ConversationLog`]; an utterance produced by one
//! party is copied into the other party's log with its role relabelled
//! before that party speaks next.
//!
//! ```text
//!   canvasser log                      mark log
//!   ─────────────                      ────────
//!   user:      Hello, this is …   ◀──  assistant: Hello, this is …
//!   assistant: Hi! I'm calling …  ──▶  user:      Hi! I'm calling …
//!   user:      Not sure yet …     ◀──  assistant: Not sure yet …
//! ```
//!
//! - [`entities::Party`] — who is speaking (canvasser or mark)
//! - [`entities::Message`] — a single chat message as seen by one model
//! - [`log::ConversationLog`] — one party's private history
//! - [`log::Conversation`] — the pair of logs plus the neutral transcript

pub mod entities;
pub mod log;

pub use entities::{ChatRole, Message, Party, Utterance};
pub use log::{Conversation, ConversationLog};
