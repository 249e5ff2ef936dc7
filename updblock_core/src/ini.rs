use crate::UpdblockError;
use crate::UpdblockResult;

/// Prefixes which turn a whole line into a comment.
const COMMENT_PREFIXES: [char; 2] = ['#', ';'];
/// Characters separating a key from its value. The first one on the line
/// wins.
const KEY_DELIMITERS: [char; 2] = ['=', ':'];

/// One `[section]` of an INI source.
///
/// Sections and keys are not deduplicated: a header which appears twice
/// produces two sections and a key which appears twice produces two entries,
/// in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IniSection {
	/// Text between the brackets of the header, trimmed.
	pub name: String,
	/// 1-indexed line of the header.
	pub line: usize,
	/// Lowercased keys and their trimmed values.
	pub entries: Vec<(String, String)>,
}

impl IniSection {
	fn new(name: &str, line: usize) -> Self {
		Self {
			name: name.to_string(),
			line,
			entries: Vec::new(),
		}
	}
}

/// Tracks the entry which indented continuation lines extend.
struct OpenValue {
	/// Indentation of the line holding the key.
	indent: usize,
	/// Blank lines seen since the last continuation line. They only become
	/// part of the value when another continuation line follows.
	pending_blank_lines: usize,
}

/// Split an INI source into sections.
///
/// - `[name]` starts a section; every entry must follow one.
/// - `key = value` or `key: value` adds an entry.
/// - Lines starting with `#` or `;` are comments.
/// - Lines indented deeper than their key continue its value, joined with
///   `\n`.
pub fn parse_ini(source: &str) -> UpdblockResult<Vec<IniSection>> {
	let mut sections: Vec<IniSection> = Vec::new();
	let mut open_value: Option<OpenValue> = None;

	for (index, line) in source.lines().enumerate() {
		let number = index + 1;
		let trimmed = line.trim();

		if trimmed.starts_with(COMMENT_PREFIXES) {
			continue;
		}

		if trimmed.is_empty() {
			if let Some(open) = open_value.as_mut() {
				open.pending_blank_lines += 1;
			}
			continue;
		}

		let indent = line.len() - line.trim_start().len();

		if let Some(open) = open_value.as_mut() {
			if indent > open.indent {
				let entry = sections
					.last_mut()
					.and_then(|section| section.entries.last_mut());
				if let Some((_, value)) = entry {
					if !value.is_empty() {
						value.push('\n');
						for _ in 0..open.pending_blank_lines {
							value.push('\n');
						}
					}
					value.push_str(trimmed);
				}
				open.pending_blank_lines = 0;
				continue;
			}
		}

		open_value = None;

		if let Some(header) = trimmed.strip_prefix('[') {
			let name = header
				.strip_suffix(']')
				.map(str::trim)
				.ok_or_else(|| syntax_error(number, "section header is missing `]`"))?;

			if name.is_empty() {
				return Err(syntax_error(number, "section header has no name"));
			}

			sections.push(IniSection::new(name, number));
			continue;
		}

		let Some((key, value)) = trimmed.split_once(KEY_DELIMITERS) else {
			return Err(syntax_error(
				number,
				format!("expected `key = value`, found `{trimmed}`"),
			));
		};

		let key = key.trim().to_lowercase();
		if key.is_empty() {
			return Err(syntax_error(number, "entry has no key"));
		}

		let Some(section) = sections.last_mut() else {
			return Err(syntax_error(
				number,
				format!("entry `{key}` appears before any section header"),
			));
		};

		section.entries.push((key, value.trim().to_string()));
		open_value = Some(OpenValue {
			indent,
			pending_blank_lines: 0,
		});
	}

	Ok(sections)
}

fn syntax_error(line: usize, message: impl Into<String>) -> UpdblockError {
	UpdblockError::IniSyntax {
		line,
		message: message.into(),
	}
}
