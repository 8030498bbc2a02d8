//! Error types for collaborator-facing operations.
//!
//! Navigation and structural mutations never error; disallowed transitions
//! are silent no-ops and the shell disables the corresponding controls. Only
//! collaborator I/O produces values of these types, and none of it is retried
//! inside this crate.

use thiserror::Error;

/// Errors from an upload that resolved unsuccessfully.
///
/// The target entry is left unchanged; the shell may re-invoke the upload.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UploadError {
	/// The upload collaborator rejected or failed the transfer.
	#[error("upload failed: {0}")]
	Collaborator(String),
}

/// Errors from the persistence hand-off.
///
/// Wizard state and the record are unchanged; the user stays on the terminal
/// step and may retry.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SubmitError {
	/// The persistence collaborator rejected the assembled record.
	#[error("submit rejected: {0}")]
	Collaborator(String),
}

/// Errors from opportunistic tag creation on the Links step.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TagError {
	/// The tag collaborator failed to create the tag.
	#[error("tag creation failed: {0}")]
	Collaborator(String),
}
