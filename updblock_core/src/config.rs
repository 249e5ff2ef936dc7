use std::collections::BTreeMap;
use std::path::Path;
use std::path::PathBuf;

use serde::Serialize;

use crate::Action;
use crate::AttributeValue;
use crate::Block;
use crate::FileType;
use crate::KeyedAttributes;
use crate::TextPayload;
use crate::UpdblockError;
use crate::UpdblockResult;
use crate::ini::IniSection;
use crate::ini::parse_ini;

/// Supported config file locations in discovery order (highest precedence
/// first).
pub const CONFIG_FILE_CANDIDATES: [&str; 3] =
	["updblock.ini", ".updblock.ini", ".config/updblock.ini"];

/// The kind of a configuration section, decided by its header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind<'a> {
	/// `[filetype:<name>]`
	FileType(&'a str),
	/// `[block:<name>]`
	Block(&'a str),
	/// `[action:<name>]`
	Action(&'a str),
	/// `[text-blocks]`
	TextBlocks,
	/// `[text-files]`
	TextFiles,
}

impl<'a> SectionKind<'a> {
	pub fn parse(header: &'a str) -> UpdblockResult<Self> {
		if let Some(name) = header.strip_prefix("filetype:") {
			return Ok(Self::FileType(name));
		}
		if let Some(name) = header.strip_prefix("block:") {
			return Ok(Self::Block(name));
		}
		if let Some(name) = header.strip_prefix("action:") {
			return Ok(Self::Action(name));
		}

		match header {
			"text-blocks" => Ok(Self::TextBlocks),
			"text-files" => Ok(Self::TextFiles),
			other => Err(UpdblockError::UnknownSection(other.to_string())),
		}
	}
}

/// Every filetype, block, action and text read from a configuration source.
///
/// Sections sharing a header merge into the same value, so a key which
/// appears in two `[filetype:c]` sections behaves as if both entries were
/// written in one.
#[derive(Debug, Clone, Default)]
pub struct Config {
	filetypes: BTreeMap<String, FileType>,
	blocks: BTreeMap<String, Block>,
	actions: BTreeMap<String, Action>,
	text_blocks: KeyedAttributes,
	text_files: KeyedAttributes,
	/// Directory `text-files` paths are relative to.
	base_dir: Option<PathBuf>,
}

impl Config {
	/// Build a config from INI source text.
	pub fn parse(source: &str) -> UpdblockResult<Self> {
		let mut config = Self::default();
		config.apply(&parse_ini(source)?)?;

		Ok(config)
	}

	/// Read and parse the config file at `path`. Paths in `[text-files]` are
	/// resolved relative to the file's directory.
	pub fn load(path: &Path) -> UpdblockResult<Self> {
		let source = std::fs::read_to_string(path)?;
		let mut config = Self::parse(&source)?;
		config.base_dir = path.parent().map(Path::to_path_buf);

		tracing::debug!(path = %path.display(), "loaded config");
		Ok(config)
	}

	/// Resolve the config path from known discovery candidates.
	#[must_use]
	pub fn resolve_path(root: &Path) -> Option<PathBuf> {
		CONFIG_FILE_CANDIDATES
			.iter()
			.map(|candidate| root.join(candidate))
			.find(|path| path.is_file())
	}

	/// Load the first discovered config file at `root`. Returns `None` if none
	/// of the candidates exist.
	pub fn discover(root: &Path) -> UpdblockResult<Option<Self>> {
		let Some(path) = Self::resolve_path(root) else {
			return Ok(None);
		};

		Self::load(&path).map(Some)
	}

	/// Like [`Config::discover`], but a missing config file is an error.
	pub fn find(root: &Path) -> UpdblockResult<Self> {
		Self::discover(root)?.ok_or_else(|| {
			UpdblockError::MissingConfig {
				root: root.display().to_string(),
			}
		})
	}

	/// Set the directory `[text-files]` paths are relative to.
	#[must_use]
	pub fn with_base_dir(mut self, base_dir: impl Into<PathBuf>) -> Self {
		self.base_dir = Some(base_dir.into());
		self
	}

	fn apply(&mut self, sections: &[IniSection]) -> UpdblockResult<()> {
		for section in sections {
			tracing::debug!(
				section = %section.name,
				line = section.line,
				entries = section.entries.len(),
				"applying config section"
			);

			let entries = section.entries.iter().map(|(k, v)| (k, v));
			match SectionKind::parse(&section.name)? {
				SectionKind::FileType(name) => {
					self.filetypes
						.entry(name.to_string())
						.or_insert_with(|| FileType::new(name))
						.update(entries)?;
				}
				SectionKind::Block(name) => {
					self.blocks
						.entry(name.to_string())
						.or_insert_with(|| Block::new(name))
						.update(entries)?;
				}
				SectionKind::Action(name) => {
					self.actions
						.entry(name.to_string())
						.or_insert_with(|| Action::new(name))
						.update(entries)?;
				}
				SectionKind::TextBlocks => self.text_blocks.update(entries),
				SectionKind::TextFiles => self.text_files.update(entries),
			}
		}

		Ok(())
	}

	pub fn filetype(&self, name: &str) -> UpdblockResult<&FileType> {
		self.filetypes
			.get(name)
			.ok_or_else(|| UpdblockError::MissingFileType(name.to_string()))
	}

	pub fn block(&self, name: &str) -> UpdblockResult<&Block> {
		self.blocks
			.get(name)
			.ok_or_else(|| UpdblockError::MissingBlock(name.to_string()))
	}

	pub fn action(&self, name: &str) -> UpdblockResult<&Action> {
		self.actions
			.get(name)
			.ok_or_else(|| UpdblockError::MissingAction(name.to_string()))
	}

	/// Inline text registered under `name` in `[text-blocks]`.
	pub fn text_block(&self, name: &str) -> UpdblockResult<&str> {
		self.text_blocks
			.get(name)
			.ok_or_else(|| UpdblockError::MissingText(name.to_string()))
	}

	/// File reference registered under `name` in `[text-files]`.
	pub fn text_file(&self, name: &str) -> UpdblockResult<&str> {
		self.text_files
			.get(name)
			.ok_or_else(|| UpdblockError::MissingText(name.to_string()))
	}

	pub fn filetypes(&self) -> impl Iterator<Item = (&str, &FileType)> {
		self.filetypes.iter().map(|(name, ft)| (name.as_str(), ft))
	}

	pub fn blocks(&self) -> impl Iterator<Item = (&str, &Block)> {
		self.blocks.iter().map(|(name, block)| (name.as_str(), block))
	}

	pub fn actions(&self) -> impl Iterator<Item = (&str, &Action)> {
		self.actions.iter().map(|(name, action)| (name.as_str(), action))
	}

	pub fn text_blocks(&self) -> &KeyedAttributes {
		&self.text_blocks
	}

	pub fn text_files(&self) -> &KeyedAttributes {
		&self.text_files
	}

	/// Resolve the text payload named `name`.
	///
	/// `[text-blocks]` is searched first. Otherwise the `[text-files]` entry is
	/// read from disk, relative to the config file's directory when the config
	/// was loaded from a file.
	pub fn resolve_text(&self, name: &str) -> UpdblockResult<TextPayload> {
		if let Some(text) = self.text_blocks.get(name) {
			return Ok(TextPayload::from_text(text));
		}

		let file = self.text_file(name)?;
		let path = match &self.base_dir {
			Some(base_dir) => base_dir.join(file),
			None => PathBuf::from(file),
		};

		let content = std::fs::read_to_string(&path).map_err(|e| {
			UpdblockError::TextFile {
				path: path.display().to_string(),
				reason: e.to_string(),
			}
		})?;

		Ok(TextPayload::from_text(&content))
	}

	/// A serializable snapshot of every section and its resolved values.
	pub fn describe(&self) -> ConfigSummary {
		fn values<'a, T>(
			entries: impl Iterator<Item = (&'a str, &'a T)>,
		) -> BTreeMap<String, BTreeMap<String, AttributeValue>>
		where
			T: std::ops::Deref<Target = crate::AttributeSection> + 'a,
		{
			entries
				.map(|(name, section)| (name.to_string(), section.values()))
				.collect()
		}

		ConfigSummary {
			filetypes: values(self.filetypes()),
			blocks: values(self.blocks()),
			actions: values(self.actions()),
			text_blocks: self.text_blocks.clone(),
			text_files: self.text_files.clone(),
		}
	}
}

/// Snapshot of a [`Config`], as produced by [`Config::describe`].
#[derive(Debug, Clone, Serialize)]
pub struct ConfigSummary {
	pub filetypes: BTreeMap<String, BTreeMap<String, AttributeValue>>,
	pub blocks: BTreeMap<String, BTreeMap<String, AttributeValue>>,
	pub actions: BTreeMap<String, BTreeMap<String, AttributeValue>>,
	#[serde(rename = "text-blocks")]
	pub text_blocks: KeyedAttributes,
	#[serde(rename = "text-files")]
	pub text_files: KeyedAttributes,
}
