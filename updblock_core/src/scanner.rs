use regex::Regex;

use crate::Block;
use crate::FileType;
use crate::TextPayload;
use crate::UpdblockResult;
use crate::generate_block;

/// Context states for the scanner's state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
	/// Lines are passed through unchanged.
	Outside,
	/// Lines belong to a block and are dropped.
	Inside,
}

/// Result of scanning a sequence of lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanOutcome {
	/// The input with every block replaced by the rendered block.
	pub lines: Vec<String>,
	/// Number of blocks which were replaced.
	pub blocks: usize,
	/// Whether the input ended inside a block.
	pub unterminated: bool,
}

/// Result of rewriting a whole file body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rewrite {
	pub content: String,
	pub blocks: usize,
	pub unterminated: bool,
}

/// Replaces blocks in a stream of lines with a freshly rendered block.
///
/// Patterns are compiled and the block is rendered when the scanner is
/// built, so a scan itself cannot fail.
#[derive(Debug, Clone)]
pub struct BlockScanner {
	start: Regex,
	end: Regex,
	rendered: Vec<String>,
}

impl BlockScanner {
	pub fn new(filetype: &FileType, block: &Block, text: &TextPayload) -> UpdblockResult<Self> {
		Ok(Self {
			start: block.start_regex()?,
			end: block.end_regex()?,
			rendered: generate_block(filetype, block, text)?,
		})
	}

	/// The block emitted in place of every block found.
	pub fn rendered(&self) -> &[String] {
		&self.rendered
	}

	/// Pass lines outside of blocks through and substitute every block,
	/// including its start and end lines, with the rendered block.
	///
	/// Input which ends inside a block still receives the rendered block, as
	/// if the end line had been found.
	pub fn scan<I, S>(&self, lines: I) -> ScanOutcome
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let mut outcome = ScanOutcome::default();
		let mut state = ScanState::Outside;

		for line in lines {
			let line = line.as_ref();

			match state {
				ScanState::Outside if self.start.is_match(line) => {
					state = ScanState::Inside;
				}
				ScanState::Outside => outcome.lines.push(line.to_string()),
				ScanState::Inside if self.end.is_match(line) => {
					state = ScanState::Outside;
					self.emit(&mut outcome);
				}
				ScanState::Inside => {}
			}
		}

		if state == ScanState::Inside {
			tracing::warn!("input ended inside a block, treating end of input as the block end");
			outcome.unterminated = true;
			self.emit(&mut outcome);
		}

		outcome
	}

	/// Scan a whole file body, keeping its line ending style and whether it
	/// ended with a line break.
	pub fn rewrite(&self, content: &str) -> Rewrite {
		let line_ending = if content.contains("\r\n") { "\r\n" } else { "\n" };
		let outcome = self.scan(content.lines());

		let mut rewritten = outcome.lines.join(line_ending);
		if content.ends_with('\n') && !outcome.lines.is_empty() {
			rewritten.push_str(line_ending);
		}

		Rewrite {
			content: rewritten,
			blocks: outcome.blocks,
			unterminated: outcome.unterminated,
		}
	}

	fn emit(&self, outcome: &mut ScanOutcome) {
		outcome.lines.extend(self.rendered.iter().cloned());
		outcome.blocks += 1;
		tracing::debug!(block = outcome.blocks, "replaced block");
	}
}

/// Replace every block in `lines` with the block rendered from `filetype`,
/// `block` and `text`.
pub fn apply_block<I, S>(
	lines: I,
	filetype: &FileType,
	block: &Block,
	text: &TextPayload,
) -> UpdblockResult<Vec<String>>
where
	I: IntoIterator<Item = S>,
	S: AsRef<str>,
{
	let scanner = BlockScanner::new(filetype, block, text)?;
	Ok(scanner.scan(lines).lines)
}

/// Replace every block in a whole file body.
pub fn update_content(
	content: &str,
	filetype: &FileType,
	block: &Block,
	text: &TextPayload,
) -> UpdblockResult<String> {
	let scanner = BlockScanner::new(filetype, block, text)?;
	Ok(scanner.rewrite(content).content)
}
