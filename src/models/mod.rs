//! Domain models for the task manager.
//!
//! The only entity is [`Task`], owned entirely by the remote store —
//! nothing here persists locally. [`TaskDraft`] is the field set a
//! form submission carries, used for create and update alike.

mod task;

pub use task::*;
