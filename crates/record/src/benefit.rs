//! Benefit entries and the known icon catalog.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Icons the shell can render next to a benefit.
///
/// Hydration values outside this catalog fall back to [`IconId::Star`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumString, EnumIter)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum IconId {
	#[default]
	Star,
	Truck,
	Shield,
	Gift,
	Clock,
	BookOpen,
}

/// One benefit line of a catalog record.
///
/// Benefits keep stable array order matching the user-perceived sequence but
/// carry no position field, so structural mutations never renumber them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BenefitEntry {
	pub title: String,
	pub icon: IconId,
	pub description: String,
}

impl BenefitEntry {
	/// Creates an empty benefit line.
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}
}
