#![cfg_attr(test, allow(unused_crate_dependencies))]
//! Record editor core for the catalog admin shell.
//!
//! This crate implements the logic behind the multi-step catalog-item editor:
//! the wizard step machine, validation-gated navigation, ordered
//! sub-collection editing with position renumbering, and synchronization of
//! asynchronous upload results into entry state.
//!
//! # Main Types
//!
//! - [`RecordEditorFacade`] - Owner of the working record and derived state
//! - [`WizardController`] - Step machine gating forward navigation
//! - [`CollectionController`] - Add/remove/move/renumber for one sub-collection
//! - [`UploadSyncAdapter`] - Drives uploads and emits completion messages
//!
//! # Architecture
//!
//! ```text
//! Shell action ──► WizardController / CollectionController ──► Record (facade-owned)
//! Upload task  ──► EditorMsg::UploadDone ──► drain ──► EditorMsg::apply(&mut facade)
//! ```
//!
//! All mutations are synchronous except uploads, which suspend on the upload
//! collaborator and re-enter through the session message channel. Illegal
//! wizard transitions are silent no-ops by contract; only collaborator I/O
//! (upload, submit, tag creation) surfaces errors.

/// Generic ordered-collection editing with position renumbering.
pub mod collection;
/// Error types for collaborator-facing operations.
pub mod error;
/// Facade owning the working record and its derived state.
pub mod facade;
/// Per-step validation gates.
pub mod gate;
/// Session options supplied by the embedding shell.
pub mod options;
/// Derived preview cache for asset-bearing entries.
pub mod preview;
/// Async message bus and session liveness.
pub mod session;
/// Tag-creation collaborator seam for the Links step.
pub mod tags;
/// Upload synchronization between the async collaborator and entry state.
pub mod upload;
/// Step state machine for the record editor wizard.
pub mod wizard;

pub use collection::{CollectionController, MoveDirection, OrderedEntry};
pub use error::{SubmitError, TagError, UploadError};
pub use facade::RecordEditorFacade;
pub use gate::step_ready;
pub use options::SessionOptions;
pub use preview::{PreviewCache, PreviewHandle};
pub use session::{EditorMsg, MsgReceiver, MsgSender, channel};
pub use tags::{Tag, TagCollaborator, TagOptions};
pub use upload::{FileHandle, UploadCollaborator, UploadDoneMsg, UploadSyncAdapter, UploadedAsset};
pub use wizard::{Step, SubmitCollaborator, WizardController};
