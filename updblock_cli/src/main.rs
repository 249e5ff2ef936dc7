use std::path::Path;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use owo_colors::OwoColorize;
use similar::ChangeTag;
use similar::TextDiff;
use tracing_subscriber::EnvFilter;
use updblock_cli::Commands;
use updblock_cli::OutputFormat;
use updblock_cli::UpdblockCli;
use updblock_core::AnyError;
use updblock_core::Config;
use updblock_core::UpdblockError;
use updblock_core::compute_updates;
use updblock_core::render_action;
use updblock_core::write_updates;

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
	($text:expr,bold) => {
		if color_enabled() {
			format!("{}", $text.bold())
		} else {
			format!("{}", $text)
		}
	};
}

fn main() {
	let args = UpdblockCli::parse();

	// Respect NO_COLOR env var and --no-color flag.
	let use_color = !args.no_color && std::env::var_os("NO_COLOR").is_none();
	if !use_color {
		USE_COLOR.store(false, std::sync::atomic::Ordering::Relaxed);
	}

	init_tracing(args.verbose, use_color);

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
		Some(Commands::Update { dry_run }) => run_update(&args, *dry_run),
		Some(Commands::Check { diff }) => run_check(&args, *diff),
		Some(Commands::Dump { format }) => run_dump(&args, *format),
		Some(Commands::Render { action }) => run_render(&args, action),
		None => {
			eprintln!("No subcommand specified. Run `updblock --help` for usage.");
			process::exit(1);
		}
	};

	if let Err(e) = result {
		match e.downcast::<UpdblockError>() {
			Ok(error) => {
				let report: miette::Report = (*error).into();
				eprintln!("{report:?}");
			}
			Err(e) => {
				eprintln!("{} {e}", colored!("error:", red));
			}
		}
		process::exit(2);
	}
}

/// Log to stderr. `RUST_LOG` takes precedence over `--verbose`.
fn init_tracing(verbose: bool, use_color: bool) {
	let default_level = if verbose { "debug" } else { "warn" };
	let filter =
		EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_ansi(use_color)
		.with_target(false)
		.without_time()
		.init();
}

fn resolve_root(args: &UpdblockCli) -> PathBuf {
	args.path
		.clone()
		.unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}

fn load_config(args: &UpdblockCli) -> Result<Config, AnyError> {
	let config = match &args.config {
		Some(path) => Config::load(path)?,
		None => Config::find(&resolve_root(args))?,
	};

	tracing::debug!(
		filetypes = config.filetypes().count(),
		blocks = config.blocks().count(),
		actions = config.actions().count(),
		"configuration ready"
	);

	Ok(config)
}

fn run_update(args: &UpdblockCli, dry_run: bool) -> Result<(), AnyError> {
	let config = load_config(args)?;
	let root = resolve_root(args);
	let updates = compute_updates(&config, &root)?;

	if updates.is_up_to_date() {
		println!("All blocks are already up to date.");
		return Ok(());
	}

	if dry_run {
		println!(
			"Dry run: would update {} file(s):",
			updates.updated_files.len()
		);
		for update in &updates.updated_files {
			println!("  {}", make_relative(&update.path, &root));
		}
		return Ok(());
	}

	write_updates(&updates)?;
	for update in &updates.updated_files {
		println!(
			"{} {}",
			colored!("updated", green),
			make_relative(&update.path, &root)
		);
	}
	println!(
		"Updated {} file(s), {} block(s) in {} matched file(s).",
		updates.updated_files.len(),
		updates.blocks,
		updates.matched
	);

	Ok(())
}

fn run_check(args: &UpdblockCli, show_diff: bool) -> Result<(), AnyError> {
	let config = load_config(args)?;
	let root = resolve_root(args);
	let updates = compute_updates(&config, &root)?;

	if updates.is_up_to_date() {
		println!(
			"All blocks are up to date ({} file(s) checked).",
			updates.matched
		);
		return Ok(());
	}

	eprintln!(
		"{} {} file(s) out of date:",
		colored!("error:", red),
		updates.updated_files.len()
	);
	for update in &updates.updated_files {
		eprintln!("  {}", colored!(make_relative(&update.path, &root), bold));
		if show_diff {
			print_diff(&update.original, &update.updated);
		}
	}
	eprintln!();
	eprintln!("Run `updblock update` to regenerate them.");

	process::exit(1);
}

fn run_dump(args: &UpdblockCli, format: OutputFormat) -> Result<(), AnyError> {
	let config = load_config(args)?;
	let summary = config.describe();

	if format == OutputFormat::Json {
		println!("{}", serde_json::to_string_pretty(&summary)?);
		return Ok(());
	}

	let sections = [
		("filetype", &summary.filetypes),
		("block", &summary.blocks),
		("action", &summary.actions),
	];
	for (kind, entries) in sections {
		for (name, values) in entries {
			println!("{}", colored!(format!("[{kind}:{name}]"), bold));
			for (key, value) in values {
				println!("{} = {value}", key.replace('_', "-"));
			}
			println!();
		}
	}

	let texts = [
		("text-blocks", config.text_blocks()),
		("text-files", config.text_files()),
	];
	for (header, entries) in texts {
		if entries.is_empty() {
			continue;
		}
		println!("{}", colored!(format!("[{header}]"), bold));
		for (key, value) in entries.items() {
			println!("{key} = {value:?}");
		}
		println!();
	}

	Ok(())
}

fn run_render(args: &UpdblockCli, action: &str) -> Result<(), AnyError> {
	let config = load_config(args)?;

	for line in render_action(&config, action)? {
		println!("{line}");
	}

	Ok(())
}

/// Print a unified diff between two strings, colorized.
fn print_diff(current: &str, expected: &str) {
	let diff = TextDiff::from_lines(current, expected);
	for change in diff.iter_all_changes() {
		match change.tag() {
			ChangeTag::Delete => {
				eprint!("  {}", colored!(format!("-{change}"), red));
			}
			ChangeTag::Insert => {
				eprint!("  {}", colored!(format!("+{change}"), green));
			}
			ChangeTag::Equal => {
				eprint!("   {change}");
			}
		}
	}
}

/// Make a path relative to root for display purposes.
fn make_relative(path: &Path, root: &Path) -> String {
	path.strip_prefix(root)
		.unwrap_or(path)
		.display()
		.to_string()
}
