//! Transport shapes at the hydration/persistence boundary.
//!
//! Fetched records may predate explicit asset kinds and wrap link references
//! as join rows; [`RecordSource::normalize`] back-fills both so the rest of
//! the editor never sees a legacy shape. [`RecordPayload`] is the inverse
//! flattening performed at hand-off.

use serde::{Deserialize, Serialize};

use crate::{AssetKind, BenefitEntry, LinkRef, PageEntry, Record, classify};

/// Link reference in its join-row transport shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkRow {
	pub target_id: String,
}

/// Page entry as fetched; `kind` is absent on records created before kinds
/// were tracked explicitly.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageSource {
	pub position: Option<u32>,
	pub asset_ref: String,
	pub kind: Option<AssetKind>,
}

/// Benefit entry as fetched; unknown icon names fall back to the default.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BenefitSource {
	pub title: String,
	pub icon: Option<String>,
	pub description: String,
}

/// Record shape delivered by the fetch collaborator when entering edit mode.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RecordSource {
	pub id: Option<String>,
	pub title: String,
	pub description: String,
	pub price: String,
	pub discount_percent: String,
	pub published: bool,
	pub category_id: Option<String>,
	pub cover_ref: String,
	pub sample_ref: String,
	pub pages: Vec<PageSource>,
	pub benefits: Vec<BenefitSource>,
	pub links: Vec<LinkRow>,
}

impl RecordSource {
	/// Normalizes the fetched shape into a working [`Record`].
	///
	/// Pages keep their source order and are renumbered contiguously; missing
	/// kinds are back-filled by classifying the stored handle. Link rows are
	/// unwrapped and deduplicated by target, first occurrence winning.
	#[must_use]
	pub fn normalize(self) -> Record {
		let pages = self
			.pages
			.into_iter()
			.enumerate()
			.map(|(index, page)| PageEntry {
				position: u32::try_from(index).unwrap_or(u32::MAX).saturating_add(1),
				kind: page.kind.unwrap_or_else(|| classify(None, &page.asset_ref)),
				asset_ref: page.asset_ref,
			})
			.collect();
		let benefits = self
			.benefits
			.into_iter()
			.map(|benefit| BenefitEntry {
				title: benefit.title,
				icon: benefit.icon.and_then(|name| name.parse().ok()).unwrap_or_default(),
				description: benefit.description,
			})
			.collect();
		let mut record = Record {
			id: self.id,
			title: self.title,
			description: self.description,
			price: self.price,
			discount_percent: self.discount_percent,
			published: self.published,
			category_id: self.category_id,
			cover_ref: self.cover_ref,
			sample_ref: self.sample_ref,
			pages,
			benefits,
			links: Vec::new(),
		};
		for row in self.links {
			record.add_link(row.target_id);
		}
		record
	}
}

/// Record shape handed to the persistence collaborator on submit.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordPayload {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub id: Option<String>,
	pub title: String,
	pub description: String,
	pub price: String,
	pub discount_percent: String,
	pub published: bool,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub category_id: Option<String>,
	pub cover_ref: String,
	pub sample_ref: String,
	pub pages: Vec<PageEntry>,
	pub benefits: Vec<BenefitEntry>,
	/// Links re-wrapped into their join-row shape.
	pub links: Vec<LinkRow>,
}

impl RecordPayload {
	/// Flattens the working record back to its transport shape.
	#[must_use]
	pub fn from_record(record: &Record) -> Self {
		Self {
			id: record.id.clone(),
			title: record.title.clone(),
			description: record.description.clone(),
			price: record.price.clone(),
			discount_percent: record.discount_percent.clone(),
			published: record.published,
			category_id: record.category_id.clone(),
			cover_ref: record.cover_ref.clone(),
			sample_ref: record.sample_ref.clone(),
			pages: record.pages.clone(),
			benefits: record.benefits.clone(),
			links: record.links.iter().map(LinkRow::from).collect(),
		}
	}
}

impl From<&LinkRef> for LinkRow {
	fn from(link: &LinkRef) -> Self {
		Self {
			target_id: link.target_id.clone(),
		}
	}
}
