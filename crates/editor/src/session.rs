//! Async message bus and session liveness.
//!
//! Uploads are the editor's only suspension point. Their resolutions re-enter
//! through this channel: background tasks send [`EditorMsg`] variants, and the
//! shell drains the receiver between interactions, applying each message to
//! the facade. Application order is resolution order, so concurrent uploads to
//! the same entry resolve last-writer-wins by design.

use tokio::sync::mpsc;

use crate::error::UploadError;
use crate::facade::RecordEditorFacade;
use crate::upload::UploadDoneMsg;

/// Channel sender for background tasks.
pub type MsgSender = mpsc::UnboundedSender<EditorMsg>;

/// Channel receiver for the shell's drain loop.
pub type MsgReceiver = mpsc::UnboundedReceiver<EditorMsg>;

/// Creates a new message channel pair.
#[must_use]
pub fn channel() -> (MsgSender, MsgReceiver) {
	mpsc::unbounded_channel()
}

/// Top-level message enum applied to the facade between interactions.
#[derive(Debug)]
pub enum EditorMsg {
	/// An upload resolved, successfully or not.
	UploadDone(UploadDoneMsg),
}

impl EditorMsg {
	/// Applies this message to the facade.
	///
	/// Returns the error to surface when the underlying operation failed; the
	/// record is untouched in that case.
	pub fn apply(self, facade: &mut RecordEditorFacade) -> Result<(), UploadError> {
		match self {
			Self::UploadDone(msg) => msg.apply(facade),
		}
	}
}

impl From<UploadDoneMsg> for EditorMsg {
	fn from(msg: UploadDoneMsg) -> Self {
		Self::UploadDone(msg)
	}
}
