use derive_more::Display;

use crate::ResourceToken;
use crate::RouteGrammar;
use crate::entry::find_entry;
use crate::entry::prepend_entry;
use crate::entry::remove_entry_at;
use crate::locator::locate;

/// What to do with a resource's entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Operation {
	#[display("add")]
	Add,
	#[display("remove")]
	Remove,
}

/// What a transform did to the router content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Status {
	/// An entry was added.
	#[display("created")]
	Created,
	/// An entry was removed.
	#[display("removed")]
	Removed,
	/// Nothing changed.
	#[display("identical")]
	Identical,
}

/// The content produced by a transform and what happened to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationResult {
	pub content: String,
	pub status: Status,
}

impl OperationResult {
	fn identical(content: &str) -> Self {
		Self {
			content: content.to_string(),
			status: Status::Identical,
		}
	}

	/// Returns true if the content differs from the input.
	pub fn is_changed(&self) -> bool {
		self.status != Status::Identical
	}
}

/// Add or remove the entry for `token` in the routes block of `content`.
///
/// This never fails. A missing block, an entry that is already present on
/// add, or an entry that is absent on remove all return the content
/// unchanged with [`Status::Identical`].
pub fn apply(
	content: &str,
	token: &ResourceToken,
	operation: Operation,
	grammar: &RouteGrammar,
) -> OperationResult {
	let Some(document) = locate(content, grammar) else {
		return OperationResult::identical(content);
	};

	let existing = find_entry(&document, token, grammar);

	let result = match (operation, existing) {
		(Operation::Add, None) => {
			let body = prepend_entry(&document, token, grammar);
			OperationResult {
				content: document.render_with(&body),
				status: Status::Created,
			}
		}
		(Operation::Remove, Some(index)) => {
			let body = remove_entry_at(&document.body, index);
			OperationResult {
				content: document.render_with(&body),
				status: Status::Removed,
			}
		}
		(Operation::Add, Some(_)) | (Operation::Remove, None) => OperationResult::identical(content),
	};

	tracing::debug!(%token, %operation, status = %result.status, "synchronized routes block");
	result
}

/// Add an entry for `token` using the default router grammar.
pub fn add_entry(content: &str, token: &ResourceToken) -> OperationResult {
	apply(content, token, Operation::Add, &RouteGrammar::default())
}

/// Remove the entry for `token` using the default router grammar.
pub fn remove_entry(content: &str, token: &ResourceToken) -> OperationResult {
	apply(content, token, Operation::Remove, &RouteGrammar::default())
}
