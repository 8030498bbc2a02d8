//! Per-step validation gates.
//!
//! A gate is a pure predicate over the current record, consulted only for
//! forward navigation; backward navigation never validates. Gates check the
//! step's own required fields and local formats, never cross-step
//! consistency, and there is no partial-pass state.

use vitrine_record::{Record, pricing};

use crate::wizard::Step;

/// Returns whether forward navigation away from `step` is permitted.
///
/// Sub-collection steps never require non-emptiness: a record with zero
/// pages or zero benefits is a valid, gate-passing state.
#[must_use]
pub fn step_ready(step: Step, record: &Record) -> bool {
	match step {
		Step::Info => {
			!record.title.trim().is_empty()
				&& record.category_id.is_some()
				&& pricing::parse_non_negative(&record.price).is_some()
				&& (record.discount_percent.trim().is_empty()
					|| pricing::parse_percent(&record.discount_percent).is_some())
		}
		// optional assets, optional links, any number of pages
		Step::Links | Step::Files | Step::Pages => true,
		Step::Benefits => record.benefits.iter().all(|benefit| !benefit.title.trim().is_empty()),
	}
}
