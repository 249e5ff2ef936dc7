use std::path::Path;
use std::path::PathBuf;

use globset::GlobSet;
use ignore::WalkBuilder;

use crate::BlockScanner;
use crate::Config;
use crate::UpdblockError;
use crate::UpdblockResult;
use crate::generate_block;

/// A filetype an action applies to, with the scanner for the action's block
/// and text already built.
#[derive(Debug, Clone)]
pub struct ActionTarget {
	/// Name of the action.
	pub action: String,
	/// Name of the filetype whose extensions matched.
	pub filetype: String,
	matcher: GlobSet,
	scanner: BlockScanner,
}

impl ActionTarget {
	pub fn matches(&self, path: &Path) -> bool {
		path.file_name()
			.is_some_and(|file_name| self.matcher.is_match(file_name))
	}

	pub fn scanner(&self) -> &BlockScanner {
		&self.scanner
	}
}

/// Decides which actions apply to which files.
///
/// Every action is resolved up front: its filetypes, block and text must all
/// exist and its patterns must compile before any file is touched.
#[derive(Debug, Clone)]
pub struct ActionPlan {
	/// Targets grouped by action, in action name order and then filetype
	/// declaration order.
	actions: Vec<Vec<ActionTarget>>,
}

impl ActionPlan {
	pub fn new(config: &Config) -> UpdblockResult<Self> {
		let mut actions = Vec::new();

		for (name, action) in config.actions() {
			let block = config.block(action.block_name())?;
			let text = config.resolve_text(action.text_name())?;
			let mut targets = Vec::new();

			for filetype_name in action.filetypes() {
				let filetype = config.filetype(filetype_name)?;
				targets.push(ActionTarget {
					action: name.to_string(),
					filetype: filetype_name.clone(),
					matcher: filetype.matcher()?,
					scanner: BlockScanner::new(filetype, block, &text)?,
				});
			}

			actions.push(targets);
		}

		Ok(Self { actions })
	}

	/// Targets which apply to `path`: for every action, the first of its
	/// filetypes whose extensions match the file name.
	pub fn resolve(&self, path: &Path) -> Vec<&ActionTarget> {
		self.actions
			.iter()
			.filter_map(|targets| targets.iter().find(|target| target.matches(path)))
			.collect()
	}
}

/// A file whose content changes when its blocks are regenerated.
#[derive(Debug, Clone)]
pub struct FileUpdate {
	pub path: PathBuf,
	pub original: String,
	pub updated: String,
}

/// Result of regenerating the blocks of every file below a root.
#[derive(Debug, Default)]
pub struct UpdateResult {
	/// Files whose content changed, in walk order.
	pub updated_files: Vec<FileUpdate>,
	/// Number of files visited.
	pub visited: usize,
	/// Number of files at least one action applied to.
	pub matched: usize,
	/// Number of matched files skipped because they are not valid UTF-8.
	pub skipped: usize,
	/// Number of blocks found and rendered, whether or not they changed.
	pub blocks: usize,
}

impl UpdateResult {
	/// Returns true if every file is already up to date.
	pub fn is_up_to_date(&self) -> bool {
		self.updated_files.is_empty()
	}
}

/// Walk `root`, skipping gitignored and hidden files, and compute the new
/// content of every file an action applies to.
pub fn compute_updates(config: &Config, root: &Path) -> UpdblockResult<UpdateResult> {
	let plan = ActionPlan::new(config)?;
	let mut result = UpdateResult::default();

	let walker = WalkBuilder::new(root)
		.sort_by_file_name(|a, b| a.cmp(b))
		.build();

	for entry in walker {
		let entry = entry.map_err(|e| {
			UpdblockError::Walk {
				path: root.display().to_string(),
				reason: e.to_string(),
			}
		})?;

		if !entry.file_type().is_some_and(|file_type| file_type.is_file()) {
			continue;
		}

		result.visited += 1;
		let path = entry.path();
		let targets = plan.resolve(path);
		tracing::debug!(path = %path.display(), actions = targets.len(), "visited file");
		if targets.is_empty() {
			continue;
		}

		let original = match std::fs::read_to_string(path) {
			Ok(original) => original,
			Err(e) if e.kind() == std::io::ErrorKind::InvalidData => {
				tracing::warn!(path = %path.display(), "skipping file which is not valid UTF-8");
				result.skipped += 1;
				continue;
			}
			Err(e) => {
				return Err(UpdblockError::ReadFile {
					path: path.display().to_string(),
					reason: e.to_string(),
				});
			}
		};

		result.matched += 1;
		let mut content = original.clone();

		for target in targets {
			let rewrite = target.scanner().rewrite(&content);
			tracing::debug!(
				path = %path.display(),
				action = %target.action,
				filetype = %target.filetype,
				blocks = rewrite.blocks,
				"applied action"
			);

			if rewrite.unterminated {
				tracing::warn!(
					path = %path.display(),
					action = %target.action,
					"block is not terminated"
				);
			}

			result.blocks += rewrite.blocks;
			content = rewrite.content;
		}

		if content != original {
			tracing::info!(path = %path.display(), "block out of date");
			result.updated_files.push(FileUpdate {
				path: path.to_path_buf(),
				original,
				updated: content,
			});
		}
	}

	Ok(result)
}

/// Write the updated contents back to disk.
pub fn write_updates(updates: &UpdateResult) -> UpdblockResult<()> {
	for update in &updates.updated_files {
		std::fs::write(&update.path, &update.updated)?;
	}
	Ok(())
}

/// Render the block of action `name` using its first filetype.
pub fn render_action(config: &Config, name: &str) -> UpdblockResult<Vec<String>> {
	let action = config.action(name)?;
	let filetype_name = action
		.filetypes()
		.first()
		.ok_or_else(|| UpdblockError::ActionWithoutFileType(name.to_string()))?;

	let filetype = config.filetype(filetype_name)?;
	let block = config.block(action.block_name())?;
	let text = config.resolve_text(action.text_name())?;

	generate_block(filetype, block, &text)
}
