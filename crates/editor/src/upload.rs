//! Upload synchronization between the async collaborator and entry state.
//!
//! The adapter never writes entry state itself: it captures the target
//! position when the upload begins, suspends on the collaborator, and emits
//! an [`UploadDoneMsg`] whose [`apply`](UploadDoneMsg::apply) is the single
//! writer, running on the shell's drain loop.

use std::sync::Arc;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};
use vitrine_record::{AssetKind, classify};

use crate::error::UploadError;
use crate::facade::RecordEditorFacade;
use crate::preview::PreviewHandle;
use crate::session::{EditorMsg, MsgSender};

/// File selected by the user for upload.
#[derive(Debug, Clone)]
pub struct FileHandle {
	/// Shell-provided filename; classification fallback and logging only.
	pub name: String,
	/// Declared media type, authoritative for classification.
	pub content_type: Option<String>,
	/// Local preview handle minted by the shell before the upload starts.
	pub preview: Option<PreviewHandle>,
	/// File contents handed through to the collaborator.
	pub data: Vec<u8>,
}

/// Successful upload result from the collaborator.
#[derive(Debug, Clone)]
pub struct UploadedAsset {
	/// Stored handle for the transferred file.
	pub url: String,
}

/// External upload transport; size limits, retries, and auth live with the
/// shell, not here.
#[async_trait]
pub trait UploadCollaborator: Send + Sync {
	async fn upload(&self, file: &FileHandle) -> Result<UploadedAsset, UploadError>;
}

/// Drives one upload at a time per call and synchronizes its result into
/// entry state via the session channel.
pub struct UploadSyncAdapter<U> {
	collaborator: Arc<U>,
	sender: MsgSender,
	liveness: CancellationToken,
}

impl<U: UploadCollaborator> UploadSyncAdapter<U> {
	/// Binds the adapter to a session's channel and liveness token
	/// (see [`RecordEditorFacade::liveness`]).
	pub fn new(collaborator: Arc<U>, sender: MsgSender, liveness: CancellationToken) -> Self {
		Self {
			collaborator,
			sender,
			liveness,
		}
	}

	/// Begins an upload targeting the page at `position` (1-based).
	///
	/// Suspends until the collaborator resolves; the rest of the editor stays
	/// interactive, and multiple uploads may be in flight with no mutual
	/// exclusion. The write target is the position captured here: a
	/// structural mutation while the upload is in flight can renumber the
	/// collection so the eventual write lands on a different logical entry.
	/// That race is accepted, not corrected.
	///
	/// Resolutions after the session closed are dropped.
	pub async fn begin_upload(&self, position: u32, file: FileHandle) {
		// classification uses the declared media type (with the filename as
		// fallback), never the returned handle
		let kind = classify(file.content_type.as_deref(), &file.name);
		let result = tokio::select! {
			() = self.liveness.cancelled() => {
				debug!(position, file = %file.name, "session closed mid-upload, dropping");
				return;
			}
			result = self.collaborator.upload(&file) => result,
		};
		if self.liveness.is_cancelled() {
			debug!(position, file = %file.name, "session closed before resolution applied, dropping");
			return;
		}
		let msg = UploadDoneMsg {
			position,
			kind,
			preview: file.preview,
			result,
		};
		if self.sender.send(EditorMsg::UploadDone(msg)).is_err() {
			warn!(position, "session receiver dropped, upload result discarded");
		}
	}
}

/// Result of a resolved upload, applied to the facade by the drain loop.
#[derive(Debug)]
pub struct UploadDoneMsg {
	/// Write target captured when the upload began.
	pub position: u32,
	/// Kind classified from the file's declared media type; authoritative for
	/// the entry once applied.
	pub kind: AssetKind,
	/// Local preview handle carried through from the [`FileHandle`].
	pub preview: Option<PreviewHandle>,
	/// The collaborator's resolution.
	pub result: Result<UploadedAsset, UploadError>,
}

impl UploadDoneMsg {
	/// Writes the resolved asset into the entry at the captured position.
	///
	/// On failure the entry is left unchanged and the error is returned for
	/// surfacing; the shell may re-invoke the upload. A resolution whose
	/// position no longer exists is dropped.
	pub fn apply(self, facade: &mut RecordEditorFacade) -> Result<(), UploadError> {
		let asset = match self.result {
			Ok(asset) => asset,
			Err(error) => {
				debug!(position = self.position, %error, "upload failed, entry unchanged");
				return Err(error);
			}
		};
		if !facade.complete_upload(self.position, asset.url, self.kind, self.preview) {
			warn!(position = self.position, "upload resolved for a vanished page, dropping");
		}
		Ok(())
	}
}
