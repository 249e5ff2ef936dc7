use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;

#[derive(Debug, Parser)]
#[command(
	author,
	version,
	about = "Regenerate delimited text blocks, such as license headers, across a project.",
	long_about = "updblock finds blocks of lines bounded by a start and an end marker, such as \
	              license headers, and replaces them with a freshly rendered, fixed-width \
	              block.\n\nFiletypes, blocks, texts and the actions binding them are read from \
	              `updblock.ini`.\n\nQuick start:\n  updblock update   Regenerate every block\n  \
	              updblock check    Verify every block is up to date\n  updblock render   \
	              Print the block of one action"
)]
pub struct UpdblockCli {
	#[command(subcommand)]
	pub command: Option<Commands>,

	/// Path to the project root directory.
	#[arg(long, short, global = true)]
	pub path: Option<PathBuf>,

	/// Path to the configuration file. Defaults to the first of
	/// `updblock.ini`, `.updblock.ini` and `.config/updblock.ini` found in the
	/// project root.
	#[arg(long, short, global = true)]
	pub config: Option<PathBuf>,

	/// Enable verbose output.
	#[arg(long, short, global = true, default_value_t = false)]
	pub verbose: bool,

	/// Disable colored output.
	#[arg(long, global = true, default_value_t = false)]
	pub no_color: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
	/// Regenerate every block in the project.
	///
	/// Walks the project root, skipping hidden and gitignored files, and
	/// replaces each block found in a file matched by an action's filetypes.
	Update {
		/// Print the files which would change without writing them.
		#[arg(long, default_value_t = false)]
		dry_run: bool,
	},
	/// Check that every block is up to date.
	///
	/// Exits with a non-zero status code if any file would change. Ideal for
	/// CI pipelines.
	Check {
		/// Show a unified diff for each stale file.
		#[arg(long, default_value_t = false)]
		diff: bool,
	},
	/// Print the parsed configuration with every default resolved.
	Dump {
		/// Output format. Use `text` for an INI-like listing or `json` for
		/// programmatic consumption.
		#[arg(long, value_enum, default_value_t = OutputFormat::Text)]
		format: OutputFormat,
	},
	/// Print the block an action renders, using its first filetype.
	Render {
		/// Name of the action, as in `[action:<name>]`.
		action: String,
	},
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
	/// Human-readable text output.
	Text,
	/// JSON output for programmatic consumption.
	Json,
}
