//! Derived preview cache for asset-bearing entries.

use rustc_hash::FxHashMap;
use vitrine_record::{AssetKind, PageEntry};

/// Local preview handle minted by the shell (e.g. an object URL).
pub type PreviewHandle = String;

/// Position-keyed preview cache for the pages collection.
///
/// Derived and ephemeral: rebuilt whenever pages change, never persisted, and
/// never authoritative. On disagreement with an entry's `asset_ref`, the entry
/// wins.
#[derive(Debug, Default)]
pub struct PreviewCache {
	handles: FxHashMap<u32, PreviewHandle>,
}

impl PreviewCache {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	#[must_use]
	pub fn get(&self, position: u32) -> Option<&str> {
		self.handles.get(&position).map(String::as_str)
	}

	pub fn set(&mut self, position: u32, handle: PreviewHandle) {
		self.handles.insert(position, handle);
	}

	pub fn clear_at(&mut self, position: u32) {
		self.handles.remove(&position);
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.handles.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.handles.is_empty()
	}

	/// Drops handles whose position no longer maps to an image-bearing page.
	///
	/// Called after every structural mutation of the pages collection.
	pub fn rebuild(&mut self, pages: &[PageEntry]) {
		self.handles.retain(|position, _| {
			(*position as usize)
				.checked_sub(1)
				.and_then(|index| pages.get(index))
				.is_some_and(|page| page.kind == AssetKind::Image)
		});
	}
}
