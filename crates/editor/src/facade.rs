//! Facade owning the working record and its derived state.
//!
//! One facade per editing session. It is the only component permitted to
//! replace top-level record fields; collection controllers borrow its live
//! vectors, and upload resolutions write back through it, so every component
//! observes consistent state after any mutation.

use tokio_util::sync::CancellationToken;
use tracing::debug;
use vitrine_record::{
	AssetKind, BenefitEntry, LinkRef, PageEntry, Record, RecordPatch, RecordPayload, RecordSource,
};

use crate::collection::CollectionController;
use crate::options::SessionOptions;
use crate::preview::{PreviewCache, PreviewHandle};

/// Owner of the working [`Record`] for one editing session.
pub struct RecordEditorFacade {
	record: Record,
	preview: PreviewCache,
	liveness: CancellationToken,
	options: SessionOptions,
}

impl Default for RecordEditorFacade {
	fn default() -> Self {
		Self::new()
	}
}

impl RecordEditorFacade {
	/// Opens a create-mode session around an empty record.
	#[must_use]
	pub fn new() -> Self {
		Self::with_options(SessionOptions::default())
	}

	#[must_use]
	pub fn with_options(options: SessionOptions) -> Self {
		Self {
			record: Record::empty(),
			preview: PreviewCache::new(),
			liveness: CancellationToken::new(),
			options,
		}
	}

	/// Replaces the entire working record from a fetched source (edit mode).
	///
	/// Legacy-shape normalization (missing page kinds, join-row links) happens
	/// here and nowhere else.
	pub fn hydrate(&mut self, source: RecordSource) {
		self.record = source.normalize();
		self.preview.rebuild(&self.record.pages);
		debug!(
			id = self.record.id.as_deref().unwrap_or("<new>"),
			pages = self.record.pages.len(),
			"record hydrated"
		);
	}

	#[must_use]
	pub fn record(&self) -> &Record {
		&self.record
	}

	#[must_use]
	pub fn preview(&self) -> &PreviewCache {
		&self.preview
	}

	#[must_use]
	pub fn options(&self) -> &SessionOptions {
		&self.options
	}

	/// Shallow-merges scalar field updates.
	pub fn patch(&mut self, patch: RecordPatch) {
		self.record.apply_patch(patch);
	}

	/// Live controller for the pages collection.
	///
	/// Every structural mutation rebuilds the preview cache.
	pub fn pages(&mut self) -> CollectionController<'_, PageEntry> {
		let preview = &mut self.preview;
		CollectionController::with_observer(&mut self.record.pages, move |pages| preview.rebuild(pages))
	}

	/// Live controller for the benefits collection.
	pub fn benefits(&mut self) -> CollectionController<'_, BenefitEntry> {
		CollectionController::new(&mut self.record.benefits)
	}

	/// Adds a category/tag link; duplicates leave the set unchanged.
	pub fn add_link(&mut self, target_id: impl Into<String>) -> bool {
		self.record.add_link(target_id)
	}

	/// Removes a link; an absent id is a no-op.
	pub fn remove_link(&mut self, target_id: &str) -> bool {
		self.record.remove_link(target_id)
	}

	#[must_use]
	pub fn links(&self) -> &[LinkRef] {
		&self.record.links
	}

	/// Flattens the record back to its transport shape for hand-off.
	#[must_use]
	pub fn assemble(&self) -> RecordPayload {
		RecordPayload::from_record(&self.record)
	}

	/// Token shared with upload tasks; cancelled on [`close`](Self::close).
	#[must_use]
	pub fn liveness(&self) -> CancellationToken {
		self.liveness.clone()
	}

	/// Ends the session. In-flight uploads resolving after this are dropped;
	/// transport-level aborts are the collaborator's concern.
	pub fn close(&self) {
		self.liveness.cancel();
	}

	/// Writes a resolved upload into the page at `position` (1-based).
	///
	/// Returns `false` when the position no longer exists. The resolved kind
	/// overrides any placeholder; image previews are cached at the position,
	/// document previews are cleared.
	pub(crate) fn complete_upload(
		&mut self,
		position: u32,
		asset_ref: String,
		kind: AssetKind,
		preview: Option<PreviewHandle>,
	) -> bool {
		let Some(page) = (position as usize)
			.checked_sub(1)
			.and_then(|index| self.record.pages.get_mut(index))
		else {
			return false;
		};
		page.asset_ref = asset_ref;
		page.kind = kind;
		match (kind, preview) {
			(AssetKind::Image, Some(handle)) => self.preview.set(position, handle),
			(AssetKind::Image, None) => {}
			(AssetKind::Document, _) => self.preview.clear_at(position),
		}
		true
	}
}
