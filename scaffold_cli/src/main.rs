use std::path::Path;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use owo_colors::OwoColorize;
use scaffold_cli::Commands;
use scaffold_cli::OutputFormat;
use scaffold_cli::ResourceArgs;
use scaffold_cli::ScaffoldCli;
use scaffold_core::AnyEmptyResult;
use scaffold_core::AnyResult;
use scaffold_core::ListedEntry;
use scaffold_core::ResourceToken;
use scaffold_core::ScaffoldConfig;
use scaffold_core::ScaffoldResult;
use scaffold_core::Status;
use scaffold_core::blueprint::HookContext;
use scaffold_core::blueprint::Phase;
use scaffold_core::blueprint::StepReport;
use scaffold_core::blueprint::scaffold_blueprint;
use scaffold_core::locate;
use scaffold_core::naming::resource_token;
use serde::Serialize;
use similar::ChangeTag;
use similar::TextDiff;
use tracing_subscriber::EnvFilter;

static USE_COLOR: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(true);

fn color_enabled() -> bool {
	USE_COLOR.load(std::sync::atomic::Ordering::Relaxed)
}

/// Apply ANSI color codes only when color is enabled.
macro_rules! colored {
	($text:expr,red) => {
		if color_enabled() {
			format!("{}", $text.red())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,green) => {
		if color_enabled() {
			format!("{}", $text.green())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,yellow) => {
		if color_enabled() {
			format!("{}", $text.yellow())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,bold) => {
		if color_enabled() {
			format!("{}", $text.bold())
		} else {
			format!("{}", $text)
		}
	};
}

const SAMPLE_CONFIG: &str = "# scaffold configuration\n\n# Where the routes block lives and how its \
                             entries are written.\n# [router]\n# path = \"app/router.js\"\n# \
                             map_call = \"Router.map\"\n# entry_call = \"resource\"\n# indent = \
                             \"  \"\n";

fn main() {
	let args = ScaffoldCli::parse();

	// Respect NO_COLOR env var and --no-color flag.
	let use_color = !args.no_color && std::env::var_os("NO_COLOR").is_none();
	if !use_color {
		USE_COLOR.store(false, std::sync::atomic::Ordering::Relaxed);
	}

	init_tracing(args.verbose);

	// Install miette's fancy handler for rich error diagnostics.
	miette::set_hook(Box::new(move |_| {
		Box::new(
			miette::MietteHandlerOpts::new()
				.color(use_color)
				.unicode(use_color)
				.build(),
		)
	}))
	.ok();

	let result = match &args.command {
		Some(Commands::Init) => run_init(&args),
		Some(Commands::Generate(resource)) => run_resource(&args, resource, Phase::Install),
		Some(Commands::Destroy(resource)) => run_resource(&args, resource, Phase::Uninstall),
		Some(Commands::List { format }) => run_list(&args, *format),
		None => {
			eprintln!("No subcommand specified. Run `scaffold --help` for usage.");
			process::exit(1);
		}
	};

	if let Err(e) = result {
		// Try to render through miette for rich diagnostics with help text
		// and error codes.
		match e.downcast::<scaffold_core::ScaffoldError>() {
			Ok(scaffold_err) => {
				let report: miette::Report = (*scaffold_err).into();
				eprintln!("{report:?}");
			}
			Err(e) => {
				eprintln!("{} {e}", colored!("error:", red));
			}
		}
		process::exit(2);
	}
}

/// Log to stderr. `SCAFFOLD_LOG` takes precedence over `--verbose`.
fn init_tracing(verbose: bool) {
	let default_filter = if verbose {
		"warn,scaffold_core=debug,scaffold=debug"
	} else {
		"warn"
	};
	let filter = EnvFilter::try_from_env("SCAFFOLD_LOG")
		.unwrap_or_else(|_| EnvFilter::new(default_filter));

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_target(false)
		.without_time()
		.try_init()
		.ok();
}

fn resolve_root(args: &ScaffoldCli) -> PathBuf {
	args.path
		.clone()
		.unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}

/// Load `scaffold.toml` (or defaults) and apply command-line overrides.
fn load_config(args: &ScaffoldCli, root: &Path) -> ScaffoldResult<ScaffoldConfig> {
	let mut config = ScaffoldConfig::load_or_default(root)?;
	if let Some(router) = &args.router {
		config.router.path.clone_from(router);
	}
	Ok(config)
}

fn run_init(args: &ScaffoldCli) -> AnyEmptyResult {
	let root = resolve_root(args);

	if let Some(existing) = ScaffoldConfig::resolve_path(&root) {
		println!("Config file already exists: {}", existing.display());
		return Ok(());
	}

	let config_path = root.join("scaffold.toml");
	std::fs::write(&config_path, SAMPLE_CONFIG)?;
	println!("Created {}", config_path.display());

	Ok(())
}

fn run_resource(
	args: &ScaffoldCli,
	resource: &ResourceArgs,
	phase: Phase,
) -> AnyEmptyResult {
	let root = resolve_root(args);
	let config = load_config(args, &root)?;
	let token = match &resource.token {
		Some(token) => ResourceToken::new(token.clone())?,
		None => resource_token(&resource.name)?,
	};

	tracing::debug!(name = %resource.name, %token, %phase, "resolved resource token");

	let ctx = HookContext::new(&root, &resource.name, token, config).with_dry_run(resource.dry_run);
	let reports = scaffold_blueprint().run(&ctx, phase)?;

	if reports.is_empty() {
		eprintln!(
			"{} router file `{}` not found, skipping",
			colored!("warning:", yellow),
			ctx.config.router.path.display()
		);
		return Ok(());
	}

	for report in &reports {
		print_report(report, resource.dry_run);

		if resource.diff {
			if let Some(change) = &report.change {
				print_diff(&change.before, &change.after);
			}
		}
	}

	Ok(())
}

/// Print `  <status> <path>` with the status colored by what happened.
fn print_report(report: &StepReport, dry_run: bool) {
	let status = report.status.to_string();
	let status = match report.status {
		Status::Created => colored!(status, green),
		Status::Removed => colored!(status, red),
		Status::Identical => colored!(status, yellow),
	};
	let suffix = if dry_run && report.change.is_some() {
		" (dry run)"
	} else {
		""
	};

	println!("  {status} {}{suffix}", report.path.display());
}

#[derive(Serialize)]
struct ListOutput<'a> {
	router: String,
	entries: &'a [ListedEntry],
}

/// Read the router file and list its entries, along with the router path
/// relative to the project root.
fn router_entries(args: &ScaffoldCli) -> AnyResult<(String, Vec<ListedEntry>)> {
	let root = resolve_root(args);
	let config = load_config(args, &root)?;
	let grammar = config.router.grammar()?;
	let router = config.router.path.display().to_string();
	let path = root.join(&config.router.path);

	if !path.is_file() {
		return Err(format!("router file not found: {router}").into());
	}

	let content = std::fs::read_to_string(&path)?;
	let Some(document) = locate(&content, &grammar) else {
		return Err(format!(
			"no `{}(function() {{ ... }})` block found in {router}",
			config.router.map_call
		)
		.into());
	};
	let entries = document.entries(&grammar);

	Ok((router, entries))
}

fn run_list(args: &ScaffoldCli, format: OutputFormat) -> AnyEmptyResult {
	let (router, entries) = router_entries(args)?;

	match format {
		OutputFormat::Json => {
			let output = ListOutput {
				router,
				entries: &entries,
			};
			println!("{}", serde_json::to_string(&output)?);
		}
		OutputFormat::Text => {
			if entries.is_empty() {
				println!("No resources found in {router}.");
				return Ok(());
			}

			println!("{}", colored!("Resources:", bold));
			for entry in &entries {
				println!("  {} {router}:{}", entry.token, entry.line);
			}
			println!("\n{} resource(s)", entries.len());
		}
	}

	Ok(())
}

fn print_diff(current: &str, expected: &str) {
	let diff = TextDiff::from_lines(current, expected);
	for change in diff.iter_all_changes() {
		match change.tag() {
			ChangeTag::Delete => {
				print!("  {}", colored!(format!("-{change}"), red));
			}
			ChangeTag::Insert => {
				print!("  {}", colored!(format!("+{change}"), green));
			}
			ChangeTag::Equal => {
				print!("   {change}");
			}
		}
	}
}
