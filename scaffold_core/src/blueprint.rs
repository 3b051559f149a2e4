//! Blueprint lifecycle hooks.
//!
//! A [`Blueprint`] is an ordered list of [`Hook`]s run for an install or an
//! uninstall. Hooks run one after another; the first error stops the chain
//! and steps that already ran are left as they are. [`RouterSync`] is the
//! hook that keeps the router file's routes block in sync.

use std::fmt;
use std::path::Path;
use std::path::PathBuf;

use derive_more::Display;

use crate::Operation;
use crate::ResourceToken;
use crate::ScaffoldConfig;
use crate::ScaffoldResult;
use crate::Status;
use crate::apply;

/// The lifecycle phase a blueprint runs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Phase {
	#[display("install")]
	Install,
	#[display("uninstall")]
	Uninstall,
}

impl Phase {
	/// The routes-block operation performed in this phase.
	pub fn operation(self) -> Operation {
		match self {
			Phase::Install => Operation::Add,
			Phase::Uninstall => Operation::Remove,
		}
	}
}

/// Everything a hook needs to know about the current run.
#[derive(Debug, Clone)]
pub struct HookContext {
	/// Project root directory.
	pub root: PathBuf,
	/// The resource name as given by the user.
	pub entity_name: String,
	/// The routes-block token for the resource.
	pub token: ResourceToken,
	/// Loaded (or default) configuration.
	pub config: ScaffoldConfig,
	/// When true, hooks report what they would do without writing.
	pub dry_run: bool,
}

impl HookContext {
	pub fn new(
		root: impl Into<PathBuf>,
		entity_name: impl Into<String>,
		token: ResourceToken,
		config: ScaffoldConfig,
	) -> Self {
		Self {
			root: root.into(),
			entity_name: entity_name.into(),
			token,
			config,
			dry_run: false,
		}
	}

	#[must_use]
	pub fn with_dry_run(mut self, dry_run: bool) -> Self {
		self.dry_run = dry_run;
		self
	}
}

/// File content before and after a step changed it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentChange {
	pub before: String,
	pub after: String,
}

/// The outcome of one hook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepReport {
	pub status: Status,
	/// Path of the affected file, relative to the project root.
	pub path: PathBuf,
	/// Present when the file content changed (or would change on a dry run).
	pub change: Option<ContentChange>,
}

/// A side-effect step run by a [`Blueprint`].
pub trait Hook {
	/// Short name used in logs.
	fn name(&self) -> &str;

	/// Run the step. `Ok(None)` means the step had nothing to act on.
	fn run(&self, ctx: &HookContext, phase: Phase) -> ScaffoldResult<Option<StepReport>>;
}

/// A named, ordered chain of hooks.
pub struct Blueprint {
	name: String,
	hooks: Vec<Box<dyn Hook>>,
}

impl fmt::Debug for Blueprint {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let hooks: Vec<&str> = self.hooks.iter().map(|hook| hook.name()).collect();
		f.debug_struct("Blueprint")
			.field("name", &self.name)
			.field("hooks", &hooks)
			.finish()
	}
}

impl Blueprint {
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			hooks: Vec::new(),
		}
	}

	#[must_use]
	pub fn with_hook(mut self, hook: impl Hook + 'static) -> Self {
		self.hooks.push(Box::new(hook));
		self
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn install(&self, ctx: &HookContext) -> ScaffoldResult<Vec<StepReport>> {
		self.run(ctx, Phase::Install)
	}

	pub fn uninstall(&self, ctx: &HookContext) -> ScaffoldResult<Vec<StepReport>> {
		self.run(ctx, Phase::Uninstall)
	}

	/// Run every hook for `phase` in order, collecting their reports.
	pub fn run(&self, ctx: &HookContext, phase: Phase) -> ScaffoldResult<Vec<StepReport>> {
		let mut reports = Vec::new();

		for hook in &self.hooks {
			tracing::debug!(blueprint = %self.name, hook = hook.name(), %phase, "running hook");
			if let Some(report) = hook.run(ctx, phase)? {
				reports.push(report);
			}
		}

		Ok(reports)
	}
}

/// Adds the resource's entry to the router file on install and removes it
/// on uninstall. A missing router file is skipped.
#[derive(Debug, Clone, Copy, Default)]
pub struct RouterSync;

impl Hook for RouterSync {
	fn name(&self) -> &str {
		"router-sync"
	}

	fn run(&self, ctx: &HookContext, phase: Phase) -> ScaffoldResult<Option<StepReport>> {
		let router = &ctx.config.router;
		let path = ctx.root.join(&router.path);

		if !path.is_file() {
			tracing::debug!(path = %path.display(), "router file not found, skipping");
			return Ok(None);
		}

		let grammar = router.grammar()?;
		let original = std::fs::read_to_string(&path)?;
		let result = apply(&original, &ctx.token, phase.operation(), &grammar);
		tracing::debug!(
			entity = %ctx.entity_name,
			token = %ctx.token,
			path = %path.display(),
			status = %result.status,
			"synchronized router entry"
		);

		let change = if result.is_changed() {
			if !ctx.dry_run {
				write_router(&path, &result.content)?;
			}
			Some(ContentChange {
				before: original,
				after: result.content,
			})
		} else {
			None
		};

		Ok(Some(StepReport {
			status: result.status,
			path: router.path.clone(),
			change,
		}))
	}
}

fn write_router(path: &Path, content: &str) -> ScaffoldResult<()> {
	tracing::debug!(path = %path.display(), "writing router file");
	std::fs::write(path, content)?;
	Ok(())
}

/// The default `scaffold` blueprint.
pub fn scaffold_blueprint() -> Blueprint {
	Blueprint::new("scaffold").with_hook(RouterSync)
}
