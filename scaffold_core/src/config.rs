use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;

use crate::RouteGrammar;
use crate::ScaffoldError;
use crate::ScaffoldResult;
use crate::grammar::DEFAULT_ENTRY_CALL;
use crate::grammar::DEFAULT_INDENT;
use crate::grammar::DEFAULT_MAP_CALL;

/// Supported config file locations in discovery order (highest precedence
/// first).
pub const CONFIG_FILE_CANDIDATES: [&str; 3] =
	["scaffold.toml", ".scaffold.toml", ".config/scaffold.toml"];

/// Default router file location relative to the project root.
pub const DEFAULT_ROUTER_PATH: &str = "app/router.js";

/// Configuration loaded from a `scaffold.toml` file.
///
/// ```toml
/// [router]
/// path = "app/router.js"
/// map_call = "Router.map"
/// entry_call = "resource"
/// indent = "  "
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScaffoldConfig {
	/// Router file settings.
	#[serde(default)]
	pub router: RouterConfig,
}

/// The `[router]` section.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RouterConfig {
	/// Router file path, relative to the project root.
	pub path: PathBuf,
	/// Dotted callee that opens the routes block.
	pub map_call: String,
	/// Method called by each entry line, as in `this.<entry_call>('users');`.
	pub entry_call: String,
	/// One indentation level, used when the routes block is empty.
	pub indent: String,
}

impl Default for RouterConfig {
	fn default() -> Self {
		Self {
			path: PathBuf::from(DEFAULT_ROUTER_PATH),
			map_call: DEFAULT_MAP_CALL.to_string(),
			entry_call: DEFAULT_ENTRY_CALL.to_string(),
			indent: DEFAULT_INDENT.to_string(),
		}
	}
}

impl RouterConfig {
	/// Build the router grammar described by this section.
	pub fn grammar(&self) -> ScaffoldResult<RouteGrammar> {
		RouteGrammar::new(&self.map_call, self.entry_call.clone(), self.indent.clone())
	}
}

impl ScaffoldConfig {
	/// Resolve the config path from known discovery candidates.
	#[must_use]
	pub fn resolve_path(root: &Path) -> Option<PathBuf> {
		CONFIG_FILE_CANDIDATES
			.iter()
			.map(|candidate| root.join(candidate))
			.find(|path| path.is_file())
	}

	/// Load the config from the first discovered config file at `root`.
	/// Returns `None` if no config file exists.
	pub fn load(root: &Path) -> ScaffoldResult<Option<ScaffoldConfig>> {
		let Some(config_path) = Self::resolve_path(root) else {
			return Ok(None);
		};

		tracing::debug!(path = %config_path.display(), "loading config");
		let content = std::fs::read_to_string(&config_path)?;
		let config: ScaffoldConfig =
			toml::from_str(&content).map_err(|e| ScaffoldError::ConfigParse(e.to_string()))?;

		Ok(Some(config))
	}

	/// Load the config at `root`, falling back to defaults when absent.
	pub fn load_or_default(root: &Path) -> ScaffoldResult<ScaffoldConfig> {
		Ok(Self::load(root)?.unwrap_or_default())
	}
}
