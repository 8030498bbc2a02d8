//! Asset kind classification for uploaded files.

use serde::{Deserialize, Serialize};

/// Kind of asset a page entry carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
	#[default]
	Image,
	Document,
}

/// Media-type prefix identifying images.
const IMAGE_MIME_PREFIX: &str = "image/";
/// Document media type recognized by the classifier.
const DOCUMENT_MIME: &str = "application/pdf";
/// Handle substrings marking a document when no media type is available.
const DOCUMENT_HANDLE_MARKERS: &[&str] = &[".pdf", "application/pdf"];

/// Infers an asset's kind from its declared media type and opaque handle.
///
/// A declared media type wins: `image/*` is an image, `application/pdf` a
/// document. Without a usable media type the handle is scanned for document
/// markers (a `.pdf` extension or an `application/pdf` data-reference).
///
/// Total by contract: fully unknown input yields [`AssetKind::Image`]. That
/// default is deliberate and must not be changed to fail-closed without
/// product confirmation.
#[must_use]
pub fn classify(content_type: Option<&str>, handle: &str) -> AssetKind {
	if let Some(mime) = content_type {
		if mime.starts_with(IMAGE_MIME_PREFIX) {
			return AssetKind::Image;
		}
		if mime == DOCUMENT_MIME {
			return AssetKind::Document;
		}
	}
	if DOCUMENT_HANDLE_MARKERS.iter().any(|marker| handle.contains(marker)) {
		return AssetKind::Document;
	}
	AssetKind::Image
}
