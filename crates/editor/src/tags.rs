//! Tag-creation collaborator seam for the Links step.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::error::TagError;

/// Tag option available for linking.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
	pub id: String,
	pub name: String,
}

/// Creates tags on demand from the Links step.
#[async_trait]
pub trait TagCollaborator: Send + Sync {
	async fn create_tag(&self, name: &str) -> Result<Tag, TagError>;
}

/// Selectable tag options, merged opportunistically as tags are created.
#[derive(Debug, Clone, Default)]
pub struct TagOptions {
	options: Vec<Tag>,
}

impl TagOptions {
	#[must_use]
	pub fn new(options: Vec<Tag>) -> Self {
		Self { options }
	}

	#[must_use]
	pub fn as_slice(&self) -> &[Tag] {
		&self.options
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.options.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.options.is_empty()
	}

	/// Adds a tag unless its id is already present.
	///
	/// Returns whether the option list changed.
	pub fn merge(&mut self, tag: Tag) -> bool {
		if self.options.iter().any(|existing| existing.id == tag.id) {
			return false;
		}
		self.options.push(tag);
		true
	}

	/// Creates a tag via the collaborator and merges it on success.
	///
	/// Failure bubbles to the caller for surfacing; the option list is
	/// unchanged and nothing is retried here.
	pub async fn create_and_merge<C>(&mut self, collaborator: &C, name: &str) -> Result<Tag, TagError>
	where
		C: TagCollaborator + ?Sized,
	{
		let tag = collaborator.create_tag(name).await?;
		debug!(id = %tag.id, name = %tag.name, "tag created");
		self.merge(tag.clone());
		Ok(tag)
	}
}
