//! Generic ordered-collection editing with position renumbering.
//!
//! Controllers are borrow-scoped: they operate directly on the facade's live
//! entry vector, so every component observes consistent state after any
//! mutation. Structural mutations unconditionally renumber positions and fire
//! the observer hook (used to rebuild the preview cache for asset-bearing
//! collections).

use vitrine_record::{BenefitEntry, PageEntry};

/// Entry stored in an ordered sub-collection.
pub trait OrderedEntry {
	/// Rewrites the entry's 1-based position after a structural change.
	///
	/// Entries without a position field ignore this.
	fn renumber(&mut self, position: u32) {
		let _ = position;
	}
}

impl OrderedEntry for PageEntry {
	fn renumber(&mut self, position: u32) {
		self.position = position;
	}
}

impl OrderedEntry for BenefitEntry {}

/// Direction for [`CollectionController::move_at`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
	Up,
	Down,
}

/// Borrow-scoped editor for one ordered sub-collection.
pub struct CollectionController<'a, T: OrderedEntry> {
	entries: &'a mut Vec<T>,
	observer: Option<Box<dyn FnMut(&[T]) + 'a>>,
}

impl<'a, T: OrderedEntry> CollectionController<'a, T> {
	pub fn new(entries: &'a mut Vec<T>) -> Self {
		Self { entries, observer: None }
	}

	/// Attaches an observer fired after every structural mutation.
	pub fn with_observer(entries: &'a mut Vec<T>, observer: impl FnMut(&[T]) + 'a) -> Self {
		Self {
			entries,
			observer: Some(Box::new(observer)),
		}
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn entries(&self) -> &[T] {
		self.entries
	}

	/// Appends an entry created by `factory`, which receives the new entry's
	/// 1-based position (`len + 1`). Always succeeds; returns the new entry.
	pub fn append(&mut self, factory: impl FnOnce(u32) -> T) -> &T {
		let index = self.entries.len();
		let position = u32::try_from(index).unwrap_or(u32::MAX).saturating_add(1);
		self.entries.push(factory(position));
		self.notify();
		&self.entries[index]
	}

	/// Removes the entry at `index`; out of range is a no-op.
	///
	/// Remaining entries are unconditionally renumbered to `index + 1`.
	pub fn remove_at(&mut self, index: usize) {
		if index >= self.entries.len() {
			return;
		}
		self.entries.remove(index);
		self.renumber_all();
		self.notify();
	}

	/// Swaps the entry at `index` with its neighbor in `direction`.
	///
	/// A move past either boundary is a no-op. After the swap every entry is
	/// renumbered, so positions stay contiguous in the new order.
	pub fn move_at(&mut self, index: usize, direction: MoveDirection) {
		if index >= self.entries.len() {
			return;
		}
		let neighbor = match direction {
			MoveDirection::Up => {
				let Some(neighbor) = index.checked_sub(1) else {
					return;
				};
				neighbor
			}
			MoveDirection::Down => {
				if index + 1 >= self.entries.len() {
					return;
				}
				index + 1
			}
		};
		self.entries.swap(index, neighbor);
		self.renumber_all();
		self.notify();
	}

	fn renumber_all(&mut self) {
		for (index, entry) in self.entries.iter_mut().enumerate() {
			entry.renumber(u32::try_from(index).unwrap_or(u32::MAX).saturating_add(1));
		}
	}

	fn notify(&mut self) {
		if let Some(observer) = self.observer.as_mut() {
			observer(self.entries);
		}
	}
}
