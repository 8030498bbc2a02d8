#![cfg_attr(test, allow(unused_crate_dependencies))]
//! Catalog record data model.
//!
//! This crate defines the composite record edited by the multi-step editor:
//! scalar fields plus three sub-collections (ordered pages, ordered benefits,
//! unique category/tag links), the asset-kind classifier, and the transport
//! shapes exchanged with the fetch/persistence collaborators.
//!
//! # Main Types
//!
//! - [`Record`] - The working record, mutated in place for an editing session
//! - [`PageEntry`] / [`BenefitEntry`] / [`LinkRef`] - Sub-collection entries
//! - [`AssetKind`] / [`classify`] - Image/document inference for uploads
//! - [`RecordSource`] / [`RecordPayload`] - Hydration input and hand-off output

/// Asset kind and classification heuristics.
pub mod asset;
/// Benefit entries and the known icon catalog.
pub mod benefit;
/// Ordered page entries.
pub mod page;
/// Price and discount field arithmetic.
pub mod pricing;
/// The working record and scalar patching.
pub mod record;
/// Transport shapes at the hydration/persistence boundary.
pub mod transport;

pub use asset::{AssetKind, classify};
pub use benefit::{BenefitEntry, IconId};
pub use page::PageEntry;
pub use record::{LinkRef, Record, RecordPatch};
pub use transport::{BenefitSource, LinkRow, PageSource, RecordPayload, RecordSource};
