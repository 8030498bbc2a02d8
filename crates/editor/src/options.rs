//! Session options supplied by the embedding shell.

use serde::Deserialize;

/// Per-session knobs for the editor core.
///
/// Deserialized from the shell's configuration; all fields have defaults so
/// an absent section yields a usable session.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SessionOptions {
	/// How many uploads the shell should allow in flight at once. Recorded
	/// for the shell's benefit; this core performs no mutual exclusion
	/// between uploads.
	pub max_concurrent_uploads: usize,
}

impl Default for SessionOptions {
	fn default() -> Self {
		Self {
			max_concurrent_uploads: 4,
		}
	}
}
