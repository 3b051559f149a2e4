//! `scaffold_core` is the core library for the `scaffold` resource
//! generator. Its main job is keeping the routes block of a hand-edited
//! router file in sync with the resources that have been scaffolded, without
//! touching anything else in the file.
//!
//! ## Processing Pipeline
//!
//! ```text
//! Router file content
//!   → Lexer (logos tokens with byte spans, comments skipped)
//!   → Block locator (prefix / body lines / suffix around `Router.map(function() { … })`)
//!   → Entry matcher (finds `this.resource('<token>');` for the resource)
//!   → Entry inserter or remover (new body)
//!   → Transform driver (reassembles the file, reports created / removed / identical)
//! ```
//!
//! ## Modules
//!
//! - [`config`]: Configuration loading from `scaffold.toml`.
//! - [`naming`]: Dash-casing and pluralizing resource names into tokens.
//! - [`blueprint`]: Lifecycle hooks, including the router-file I/O boundary.
//!
//! ## Quick Start
//!
//! ```rust
//! use scaffold_core::ResourceToken;
//! use scaffold_core::Status;
//! use scaffold_core::add_entry;
//!
//! let router = "Router.map(function() {\n});\n";
//! let token = ResourceToken::new("users").unwrap();
//! let result = add_entry(router, &token);
//!
//! assert_eq!(result.status, Status::Created);
//! assert_eq!(
//! 	result.content,
//! 	"Router.map(function() {\n  this.resource('users');\n});\n"
//! );
//! ```

pub use config::*;
pub use entry::*;
pub use error::*;
pub use grammar::*;
pub use locator::*;
pub use resource::*;
pub use transform::*;

pub mod blueprint;
pub mod config;
mod entry;
#[allow(unused_assignments)]
mod error;
mod grammar;
pub(crate) mod lexer;
mod locator;
pub mod naming;
mod resource;
pub(crate) mod tokens;
mod transform;

#[cfg(test)]
mod __fixtures;
