use derive_more::Deref;
use derive_more::Display;

use crate::ScaffoldError;
use crate::ScaffoldResult;

/// The canonical name identifying a resource's entry inside the routes
/// block, e.g. `users` for a `user` resource.
///
/// Tokens are written verbatim between single quotes, so they may not
/// contain quotes, backslashes or whitespace. No pluralisation happens here:
/// callers pass the final token (see [`crate::naming::resource_token`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Deref, Display)]
pub struct ResourceToken(String);

impl ResourceToken {
	pub fn new(token: impl Into<String>) -> ScaffoldResult<Self> {
		let token = token.into();

		let reason = if token.is_empty() {
			Some("token is empty")
		} else if token.chars().any(char::is_whitespace) {
			Some("token contains whitespace")
		} else if token.contains(['\'', '"', '`']) {
			Some("token contains a quote character")
		} else if token.contains('\\') {
			Some("token contains a backslash")
		} else {
			None
		};

		match reason {
			Some(reason) => {
				Err(ScaffoldError::InvalidResourceToken {
					token,
					reason: reason.to_string(),
				})
			}
			None => Ok(Self(token)),
		}
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl AsRef<str> for ResourceToken {
	fn as_ref(&self) -> &str {
		&self.0
	}
}
