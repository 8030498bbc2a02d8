//! Ordered page entries.

use serde::{Deserialize, Serialize};

use crate::AssetKind;

/// One page of a catalog record.
///
/// Display order is semantically meaningful: after any structural mutation of
/// the pages collection, `position` equals the entry's index plus one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageEntry {
	/// 1-based display position.
	pub position: u32,
	/// Opaque upload handle; empty until an upload completes.
	pub asset_ref: String,
	/// Placeholder until an upload completes; authoritative afterwards.
	pub kind: AssetKind,
}

impl PageEntry {
	/// Creates an empty page at `position`, awaiting its upload.
	#[must_use]
	pub fn new(position: u32) -> Self {
		Self {
			position,
			asset_ref: String::new(),
			kind: AssetKind::Image,
		}
	}

	/// True once an upload has written a handle.
	#[must_use]
	pub fn has_asset(&self) -> bool {
		!self.asset_ref.is_empty()
	}
}
