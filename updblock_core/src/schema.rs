use derive_more::Deref;
use derive_more::DerefMut;
use globset::Glob;
use globset::GlobSet;
use globset::GlobSetBuilder;
use regex::Regex;

use crate::Attribute;
use crate::AttributeSection;
use crate::UpdblockError;
use crate::UpdblockResult;

/// Default width every rendered line is stretched to.
pub const DEFAULT_LINE_MINLENGTH: usize = 80;
/// Default number of padding lines around the text body.
pub const DEFAULT_LINE_PADDING: usize = 1;

/// The three shapes of line a rendered block is made of.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineRole {
	/// The line carrying the block's start marker.
	First,
	/// Padding lines and the lines carrying the text payload.
	Middle,
	/// The line carrying the block's end marker.
	Last,
}

impl LineRole {
	fn prefix(self) -> &'static str {
		match self {
			Self::First => "firstline",
			Self::Middle => "midline",
			Self::Last => "lastline",
		}
	}
}

/// Resolved decoration for one [`LineRole`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineStyle<'a> {
	pub start: &'a str,
	pub end: &'a str,
	pub prepad: &'a str,
	pub postpad: &'a str,
	/// First character of the configured filler, if any.
	pub filler: Option<char>,
	pub center: bool,
}

/// Formatting rules for one family of block delimiters, read from a
/// `[filetype:<name>]` section.
#[derive(Debug, Clone, Deref, DerefMut)]
pub struct FileType {
	section: AttributeSection,
}

impl FileType {
	pub fn new(name: &str) -> Self {
		let minlength = DEFAULT_LINE_MINLENGTH.to_string();
		let padding = DEFAULT_LINE_PADDING.to_string();

		Self {
			section: AttributeSection::new(
				format!("filetype:{name}"),
				[
					("extensions", Attribute::list()),
					("line_minlength", Attribute::value(minlength)),
					("line_padding", Attribute::value(padding)),
					("firstline_start", Attribute::value("")),
					("firstline_end", Attribute::value("")),
					("firstline_prepad", Attribute::value(" ")),
					("firstline_postpad", Attribute::value(" ")),
					("firstline_filler", Attribute::value("#")),
					("firstline_center", Attribute::flag(true)),
					("lastline_start", Attribute::value("")),
					("lastline_end", Attribute::value("")),
					("lastline_prepad", Attribute::value(" ")),
					("lastline_postpad", Attribute::value(" ")),
					("lastline_filler", Attribute::value("#")),
					("lastline_center", Attribute::flag(true)),
					("midline_start", Attribute::value("")),
					("midline_end", Attribute::value("")),
					// Accepted so configs may set them, but the layout ignores them.
					("midline_prepad", Attribute::value(" ")),
					("midline_postpad", Attribute::value(" ")),
					("midline_center", Attribute::flag(false)),
				],
			),
		}
	}

	pub fn extensions(&self) -> &[String] {
		self.list("extensions")
	}

	pub fn line_minlength(&self) -> UpdblockResult<usize> {
		self.number("line_minlength")
	}

	pub fn line_padding(&self) -> UpdblockResult<usize> {
		self.number("line_padding")
	}

	/// Decoration of the given line role.
	///
	/// Middle lines never have a filler: their gaps are always spaces.
	pub fn line(&self, role: LineRole) -> LineStyle<'_> {
		let prefix = role.prefix();
		let field = |name: &str| self.text(&format!("{prefix}_{name}"));
		let filler = match role {
			LineRole::Middle => None,
			LineRole::First | LineRole::Last => field("filler").chars().next(),
		};

		LineStyle {
			start: field("start"),
			end: field("end"),
			prepad: field("prepad"),
			postpad: field("postpad"),
			filler,
			center: self.flag(&format!("{prefix}_center")),
		}
	}

	pub fn firstline(&self) -> LineStyle<'_> {
		self.line(LineRole::First)
	}

	pub fn midline(&self) -> LineStyle<'_> {
		self.line(LineRole::Middle)
	}

	pub fn lastline(&self) -> LineStyle<'_> {
		self.line(LineRole::Last)
	}

	/// Build a matcher for file names from `extensions`. `c`, `.c` and `*.c`
	/// all select files ending in `.c`.
	pub fn matcher(&self) -> UpdblockResult<GlobSet> {
		let mut builder = GlobSetBuilder::new();

		for extension in self.extensions() {
			let pattern = extension_glob(extension);
			let glob = Glob::new(&pattern).map_err(|e| {
				UpdblockError::InvalidGlob {
					pattern: pattern.clone(),
					reason: e.to_string(),
				}
			})?;
			builder.add(glob);
		}

		builder.build().map_err(|e| {
			UpdblockError::InvalidGlob {
				pattern: self.extensions().join(","),
				reason: e.to_string(),
			}
		})
	}
}

fn extension_glob(extension: &str) -> String {
	let extension = extension.trim();
	if extension.contains('*') || extension.contains('?') {
		extension.to_string()
	} else {
		format!("*.{}", extension.trim_start_matches('.'))
	}
}

/// Detection patterns and marker text of a block, read from a
/// `[block:<name>]` section.
#[derive(Debug, Clone, Deref, DerefMut)]
pub struct Block {
	section: AttributeSection,
}

impl Block {
	pub fn new(name: &str) -> Self {
		Self {
			section: AttributeSection::new(
				format!("block:{name}"),
				[
					("start_pattern", Attribute::value("")),
					("end_pattern", Attribute::value("")),
					("start", Attribute::value("")),
					("end", Attribute::value("")),
				],
			),
		}
	}

	pub fn start_pattern(&self) -> &str {
		self.text("start_pattern")
	}

	pub fn end_pattern(&self) -> &str {
		self.text("end_pattern")
	}

	/// Marker text embedded in the rendered first line.
	pub fn start(&self) -> &str {
		self.text("start")
	}

	/// Marker text embedded in the rendered last line.
	pub fn end(&self) -> &str {
		self.text("end")
	}

	/// Compile the pattern detecting the first line of a block.
	pub fn start_regex(&self) -> UpdblockResult<Regex> {
		compile_line_pattern(self.start_pattern(), self.start())
	}

	/// Compile the pattern detecting the last line of a block.
	pub fn end_regex(&self) -> UpdblockResult<Regex> {
		compile_line_pattern(self.end_pattern(), self.end())
	}
}

/// Compile `pattern` so it only matches at the start of a line. An empty
/// pattern is derived from the marker text instead: the marker may appear
/// anywhere on the line and its inner whitespace matches any run of
/// whitespace.
fn compile_line_pattern(pattern: &str, marker: &str) -> UpdblockResult<Regex> {
	let source = if pattern.is_empty() {
		let words: Vec<String> = marker.split_whitespace().map(regex::escape).collect();
		if words.is_empty() {
			return Err(UpdblockError::InvalidPattern {
				pattern: String::new(),
				reason: "the pattern is empty and there is no marker text to derive it from"
					.to_string(),
			});
		}

		format!(".*?{}", words.join(r"\s+"))
	} else {
		pattern.to_string()
	};

	Regex::new(&format!("^(?:{source})")).map_err(|e| {
		UpdblockError::InvalidPattern {
			pattern: source,
			reason: e.to_string(),
		}
	})
}

/// A rule binding filetypes to a block and a text, read from an
/// `[action:<name>]` section.
#[derive(Debug, Clone, Deref, DerefMut)]
pub struct Action {
	section: AttributeSection,
}

impl Action {
	pub fn new(name: &str) -> Self {
		Self {
			section: AttributeSection::new(
				format!("action:{name}"),
				[
					("filetype", Attribute::list()),
					("text", Attribute::value("")),
					("block", Attribute::value("")),
				],
			),
		}
	}

	/// Names of the filetypes this action applies to, in declaration order.
	pub fn filetypes(&self) -> &[String] {
		self.list("filetype")
	}

	/// Name of the text payload.
	pub fn text_name(&self) -> &str {
		self.text("text")
	}

	/// Name of the block.
	pub fn block_name(&self) -> &str {
		self.text("block")
	}
}
