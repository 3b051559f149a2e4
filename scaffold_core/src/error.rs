use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Diagnostic, Error)]
#[non_exhaustive]
pub enum ScaffoldError {
	#[error(transparent)]
	#[diagnostic(code(scaffold::io_error))]
	Io(#[from] std::io::Error),

	#[error("failed to parse config file: {0}")]
	#[diagnostic(
		code(scaffold::config_parse),
		help("check that scaffold.toml is valid TOML with an optional [router] section")
	)]
	ConfigParse(String),

	#[error("resource name must not be empty")]
	#[diagnostic(
		code(scaffold::empty_resource_name),
		help("pass the resource name, e.g. `scaffold generate user`")
	)]
	EmptyResourceName,

	#[error("invalid resource token `{token}`: {reason}")]
	#[diagnostic(
		code(scaffold::invalid_resource_token),
		help("resource tokens are written as `'<token>'` and may not contain quotes, backslashes or whitespace")
	)]
	InvalidResourceToken { token: String, reason: String },

	#[error("invalid entry call `{0}`")]
	#[diagnostic(
		code(scaffold::invalid_entry_call),
		help("`router.entry_call` must be a plain identifier such as `resource` or `route`")
	)]
	InvalidEntryCall(String),

	#[error("invalid map call `{0}`")]
	#[diagnostic(
		code(scaffold::invalid_map_call),
		help("`router.map_call` must be a dotted identifier path such as `Router.map`")
	)]
	InvalidMapCall(String),
}

pub type ScaffoldResult<T> = Result<T, ScaffoldError>;
pub type AnyError = Box<dyn std::error::Error>;
pub type AnyEmptyResult = Result<(), AnyError>;
pub type AnyResult<T> = Result<T, AnyError>;
