use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;

#[derive(Parser)]
#[command(
	author,
	version,
	about = "Generate and destroy resources while keeping the router in sync.",
	long_about = "scaffold generates and destroys resources and keeps the routes block of your \
	              router file (app/router.js by default) in sync with them.\n\nEntries are \
	              added to and removed from the `Router.map(function() { ... })` block without \
	              touching anything else in the file.\n\nQuick start:\n  scaffold generate \
	              user  Add this.resource('users') to the router\n  scaffold destroy user   \
	              Remove it again\n  scaffold list           Show the resources in the router"
)]
pub struct ScaffoldCli {
	#[command(subcommand)]
	pub command: Option<Commands>,

	/// Path to the project root directory.
	#[arg(long, short, global = true)]
	pub path: Option<PathBuf>,

	/// Router file to edit, relative to the project root. Overrides
	/// `router.path` from scaffold.toml.
	#[arg(long, global = true)]
	pub router: Option<PathBuf>,

	/// Enable verbose output.
	#[arg(long, short, global = true, default_value_t = false)]
	pub verbose: bool,

	/// Disable colored output.
	#[arg(long, global = true, default_value_t = false)]
	pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
	/// Create a sample `scaffold.toml` in the project root.
	///
	/// If the file already exists, this command is a no-op and exits
	/// successfully.
	Init,
	/// Generate a resource and add its entry to the router.
	///
	/// The resource name is dasherized and pluralized to form the router
	/// token (`user` → `users`, `BlogPost` → `blog-posts`), and
	/// `this.resource('<token>');` is added as the first line of the routes
	/// block. Running it again for the same resource changes nothing.
	#[command(visible_alias = "g")]
	Generate(ResourceArgs),
	/// Destroy a resource and remove its entry from the router.
	///
	/// Removes the `this.resource('<token>');` line from the routes block.
	/// Other entries, comments and formatting are left untouched.
	#[command(visible_alias = "d")]
	Destroy(ResourceArgs),
	/// List the resource entries in the router's routes block.
	List {
		/// Output format. Use `text` for human-readable output or `json` for
		/// programmatic consumption.
		#[arg(long, value_enum, default_value_t = OutputFormat::Text)]
		format: OutputFormat,
	},
}

#[derive(clap::Args)]
pub struct ResourceArgs {
	/// The resource name, e.g. `user` or `BlogPost`.
	pub name: String,

	/// Use this router token instead of deriving one from the name.
	#[arg(long)]
	pub token: Option<String>,

	/// Show what would change without writing any files.
	#[arg(long, default_value_t = false)]
	pub dry_run: bool,

	/// Show a line diff of each changed file.
	#[arg(long, default_value_t = false)]
	pub diff: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
	/// Human-readable text output.
	Text,
	/// JSON output for programmatic consumption.
	Json,
}
