use std::iter::repeat_n;

use crate::Block;
use crate::FileType;
use crate::LineStyle;
use crate::TextPayload;
use crate::UpdblockResult;
use crate::determine_length;
use crate::layout::width;

/// Split `filler` characters between the left and right gap of a line.
///
/// A centered line gives the left gap half of the filler, rounded down, and
/// the right gap the rest. Otherwise everything goes to the right gap.
pub fn split_filler(filler: usize, center: bool) -> (usize, usize) {
	if center {
		let left = filler / 2;
		(left, filler - left)
	} else {
		(0, filler)
	}
}

fn fill(character: char, count: usize) -> String {
	repeat_n(character, count).collect()
}

/// Render the line carrying a block marker: `start`, left gap, `prepad`,
/// marker, `postpad`, right gap, `end`. The gaps use the style's filler and
/// stay empty when it has none.
pub fn frame_line(style: &LineStyle<'_>, marker: &str, length: usize) -> String {
	let total = width(style.start)
		+ width(style.prepad)
		+ width(marker)
		+ width(style.postpad)
		+ width(style.end);

	let (left, right) = match style.filler {
		Some(character) if total < length => {
			let (left, right) = split_filler(length - total, style.center);
			(fill(character, left), fill(character, right))
		}
		_ => (String::new(), String::new()),
	};

	format!(
		"{}{left}{}{marker}{}{right}{}",
		style.start, style.prepad, style.postpad, style.end
	)
}

/// Render a padding line. Spaces only separate `start` from `end` when
/// there is an `end` to align.
pub fn padding_line(style: &LineStyle<'_>, length: usize) -> String {
	let total = width(style.start) + width(style.end);
	let gap = if !style.end.is_empty() && total < length {
		fill(' ', length - total)
	} else {
		String::new()
	};

	format!("{}{gap}{}", style.start, style.end)
}

/// Render one line of the text payload.
///
/// Without an `end` and without centering the line is emitted as is, with
/// no trailing alignment.
pub fn middle_line(style: &LineStyle<'_>, line: &str, length: usize) -> String {
	let has_end = !style.end.is_empty();
	let total = width(style.start) + width(line) + width(style.end);
	let mut left = 0;
	let mut right = 0;

	if (has_end || style.center) && total < length {
		let mut filler = length - total;

		if style.center && (has_end || !line.is_empty()) {
			left = filler / 2;
			filler -= left;
		}

		if has_end {
			right = filler;
		}
	}

	format!(
		"{}{}{line}{}{}",
		style.start,
		fill(' ', left),
		fill(' ', right),
		style.end
	)
}

/// Render a complete block: the first line, `line-padding` padding lines,
/// one middle line per payload line, `line-padding` padding lines and the
/// last line.
pub fn generate_block(
	filetype: &FileType,
	block: &Block,
	text: &TextPayload,
) -> UpdblockResult<Vec<String>> {
	let length = determine_length(filetype, block, text)?;
	let padding = filetype.line_padding()?;
	let midline = filetype.midline();
	let blank = padding_line(&midline, length);

	tracing::debug!(
		filetype = filetype.name(),
		block = block.name(),
		length,
		padding,
		lines = text.len(),
		"rendering block"
	);

	let mut lines = Vec::new();
	lines.push(frame_line(&filetype.firstline(), block.start(), length));
	lines.extend(repeat_n(blank.clone(), padding));
	lines.extend(text.iter().map(|line| middle_line(&midline, line, length)));
	lines.extend(repeat_n(blank, padding));
	lines.push(frame_line(&filetype.lastline(), block.end(), length));

	Ok(lines)
}
