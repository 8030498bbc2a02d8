//! Step state machine for the record editor wizard.

use async_trait::async_trait;
use strum::{Display, EnumIter};
use tracing::debug;
use vitrine_record::RecordPayload;

use crate::error::SubmitError;
use crate::facade::RecordEditorFacade;
use crate::gate;

/// Wizard steps in fixed display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Display, EnumIter)]
#[strum(serialize_all = "title_case")]
pub enum Step {
	Info,
	Links,
	Files,
	Benefits,
	Pages,
}

impl Default for Step {
	fn default() -> Self {
		Self::Info
	}
}

impl Step {
	/// All steps in navigation order.
	pub const ALL: [Self; 5] = [Self::Info, Self::Links, Self::Files, Self::Benefits, Self::Pages];

	/// True for the step from which submit is reachable.
	#[must_use]
	pub fn is_terminal(self) -> bool {
		self == Self::Pages
	}

	const fn following(self) -> Option<Self> {
		match self {
			Self::Info => Some(Self::Links),
			Self::Links => Some(Self::Files),
			Self::Files => Some(Self::Benefits),
			Self::Benefits => Some(Self::Pages),
			Self::Pages => None,
		}
	}

	const fn preceding(self) -> Option<Self> {
		match self {
			Self::Info => None,
			Self::Links => Some(Self::Info),
			Self::Files => Some(Self::Links),
			Self::Benefits => Some(Self::Files),
			Self::Pages => Some(Self::Benefits),
		}
	}
}

/// Persistence hand-off target for the assembled record.
#[async_trait]
pub trait SubmitCollaborator: Send + Sync {
	/// Persists the assembled record. Retry and backoff live with the shell.
	async fn submit(&self, payload: RecordPayload) -> Result<(), SubmitError>;
}

/// Tracks the active step and enforces validation-gated forward navigation.
///
/// Disallowed transitions are silent no-ops by contract, never errors: the
/// shell disables the corresponding controls rather than handling failures.
#[derive(Debug, Default)]
pub struct WizardController {
	active: Step,
}

impl WizardController {
	/// Starts on the first step.
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	#[must_use]
	pub fn active(&self) -> Step {
		self.active
	}

	/// Advances to the following step if the active step's gate passes.
	///
	/// Returns whether the step changed; a refusal leaves the caller to
	/// surface why the gate failed. A `next` on the last step is a no-op.
	pub fn next(&mut self, facade: &RecordEditorFacade) -> bool {
		if !gate::step_ready(self.active, facade.record()) {
			debug!(step = %self.active, "forward navigation refused by gate");
			return false;
		}
		match self.active.following() {
			Some(step) => {
				debug!(from = %self.active, to = %step, "wizard advanced");
				self.active = step;
				true
			}
			None => false,
		}
	}

	/// Moves to the preceding step unconditionally; never validated.
	///
	/// Returns whether the step changed (`false` only on the first step).
	pub fn back(&mut self) -> bool {
		match self.active.preceding() {
			Some(step) => {
				self.active = step;
				true
			}
			None => false,
		}
	}

	/// Returns to an already-visited step.
	///
	/// Jumping ahead of the active step is a no-op; returns whether the step
	/// changed.
	pub fn go_to(&mut self, step: Step) -> bool {
		if step >= self.active {
			return false;
		}
		self.active = step;
		true
	}

	/// Hands the assembled record to the persistence collaborator.
	///
	/// A no-op returning `Ok(false)` unless the terminal step is active. On
	/// success the state does not advance; on failure the error bubbles and
	/// both the wizard and the record are unchanged, so the caller may retry.
	/// Rapid repeat calls are not debounced here; serializing them is the
	/// caller's responsibility.
	pub async fn submit<C>(&self, facade: &RecordEditorFacade, collaborator: &C) -> Result<bool, SubmitError>
	where
		C: SubmitCollaborator + ?Sized,
	{
		if !self.active.is_terminal() {
			return Ok(false);
		}
		collaborator.submit(facade.assemble()).await?;
		Ok(true)
	}
}
