//! The working record and scalar patching.

use serde::{Deserialize, Serialize};

use crate::{BenefitEntry, PageEntry};

/// Reference to a category or tag linked to the record.
///
/// Uniqueness by `target_id` is enforced by [`Record::add_link`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkRef {
	pub target_id: String,
}

/// The composite catalog item being created or edited.
///
/// Created empty for a new item or hydrated from a fetched source, mutated in
/// place for the editing session, and handed off whole on submit. Price fields
/// hold raw form text; parsing lives in [`crate::pricing`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
	/// Persistence id; absent in create mode.
	pub id: Option<String>,
	pub title: String,
	pub description: String,
	pub price: String,
	pub discount_percent: String,
	pub published: bool,
	/// Primary category selection, required by the Info step gate.
	pub category_id: Option<String>,
	/// Record-level cover asset, edited on the Files step.
	pub cover_ref: String,
	/// Record-level sample document, edited on the Files step.
	pub sample_ref: String,
	pub pages: Vec<PageEntry>,
	pub benefits: Vec<BenefitEntry>,
	/// Insertion-ordered, unique by `target_id`.
	pub links: Vec<LinkRef>,
}

impl Record {
	/// Creates an empty record for create mode.
	#[must_use]
	pub fn empty() -> Self {
		Self::default()
	}

	/// Adds a link unless its target is already present.
	///
	/// Returns whether the collection changed.
	pub fn add_link(&mut self, target_id: impl Into<String>) -> bool {
		let target_id = target_id.into();
		if self.has_link(&target_id) {
			return false;
		}
		self.links.push(LinkRef { target_id });
		true
	}

	/// Removes the link with `target_id`; removing an absent id is a no-op.
	///
	/// Returns whether the collection changed.
	pub fn remove_link(&mut self, target_id: &str) -> bool {
		let before = self.links.len();
		self.links.retain(|link| link.target_id != target_id);
		self.links.len() != before
	}

	#[must_use]
	pub fn has_link(&self, target_id: &str) -> bool {
		self.links.iter().any(|link| link.target_id == target_id)
	}

	/// Shallow-merges scalar field updates; `None` fields are untouched.
	pub fn apply_patch(&mut self, patch: RecordPatch) {
		let RecordPatch {
			title,
			description,
			price,
			discount_percent,
			published,
			category_id,
			cover_ref,
			sample_ref,
		} = patch;
		if let Some(title) = title {
			self.title = title;
		}
		if let Some(description) = description {
			self.description = description;
		}
		if let Some(price) = price {
			self.price = price;
		}
		if let Some(discount_percent) = discount_percent {
			self.discount_percent = discount_percent;
		}
		if let Some(published) = published {
			self.published = published;
		}
		if let Some(category_id) = category_id {
			self.category_id = category_id;
		}
		if let Some(cover_ref) = cover_ref {
			self.cover_ref = cover_ref;
		}
		if let Some(sample_ref) = sample_ref {
			self.sample_ref = sample_ref;
		}
	}
}

/// Scalar-field update for [`Record::apply_patch`].
///
/// Sub-collections are mutated through their controllers, never patched.
#[derive(Debug, Clone, Default)]
pub struct RecordPatch {
	pub title: Option<String>,
	pub description: Option<String>,
	pub price: Option<String>,
	pub discount_percent: Option<String>,
	pub published: Option<bool>,
	/// `Some(None)` clears the selection.
	pub category_id: Option<Option<String>>,
	pub cover_ref: Option<String>,
	pub sample_ref: Option<String>,
}
