//! Core types for the returndesk triage screen.
//!
//! This crate holds everything about return requests that does not touch a
//! terminal or a file: the data model, the classifier that keeps raw feed
//! values inside closed enumerations, the board buckets, the dispatch of
//! detail editors, the creation flow, and the editor's local state.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`request`]: The `ReturnRequest` entity and its enumerations
//! - [`line_item`]: Order lines and their damage classification
//! - [`classify`]: Total classification with named fallbacks
//! - [`store`]: The request store and its feed format
//! - [`bucket`]: Board buckets and per-bucket expansion
//! - [`selection`]: Selection and dispatch of detail editors
//! - [`creation`]: Staging and submitting new requests
//! - [`editor`]: Transient state of an open detail editor
//! - [`role`]: Viewer roles and their views
//! - [`client`]: The client table projection
//! - [`summary`]: Aggregate figures
//! - [`message`]: TUI event messages
//! - [`error`]: Error types for protocol operations
//!
//! # Examples
//!
//! Creating a request and opening its editor:
//!
//! ```
//! use returndesk_protocol::{
//!     CreationFlow, DispatchState, ReturnType, SelectionController,
//! };
//!
//! let mut creation = CreationFlow::new();
//! let mut dispatch = SelectionController::new();
//!
//! creation.open();
//! creation.set_type(ReturnType::Damage);
//! creation.submit(&mut dispatch);
//!
//! assert_eq!(dispatch.state(), DispatchState::DamageOpen);
//! if let Some(editor) = dispatch.editor_mut() {
//!     editor.click_star(4);
//!     editor.push_note_char('!');
//! }
//!
//! // Closing discards everything the editor held.
//! dispatch.close();
//! assert!(dispatch.selected_request().is_none());
//! ```

pub mod bucket;
pub mod classify;
pub mod client;
pub mod creation;
pub mod dummy;
pub mod editor;
pub mod error;
mod lenient;
pub mod line_item;
pub mod message;
pub mod request;
pub mod role;
pub mod selection;
pub mod store;
pub mod summary;

// Re-export primary types at crate root for convenience
pub use bucket::{Affordance, Bucket, BucketViewState, Buckets, VISIBLE_LIMIT};
pub use classify::{
    Classify, FALLBACK_DAMAGE_TYPE, FALLBACK_RETURN_MODE, FALLBACK_RETURN_TYPE, FALLBACK_STATUS,
};
pub use client::{CLIENT_TABLE_LIMIT, ClientHealth, ClientRow, SATISFACTION_OFFSET, client_rows};
pub use creation::CreationFlow;
pub use editor::{DetailEditor, EditProposal};
pub use error::{ProtocolError, Result};
pub use line_item::{DamageType, LineItem};
pub use message::Message;
pub use request::{Progress, Rating, RequestStatus, ReturnMode, ReturnRequest, ReturnType};
pub use role::{Role, ViewKind};
pub use selection::{DetailEditorState, DispatchState, SelectionController};
pub use store::RequestStore;
pub use summary::Summary;
