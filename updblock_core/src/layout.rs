use crate::Block;
use crate::FileType;
use crate::LineStyle;
use crate::TextPayload;
use crate::UpdblockResult;

/// Number of characters in `text`.
pub(crate) fn width(text: &str) -> usize {
	text.chars().count()
}

/// Width of the fixed parts of a first or last line framing `marker`.
fn furniture_width(style: &LineStyle<'_>, marker: &str) -> usize {
	width(style.start) + width(style.end) + width(style.prepad) + width(style.postpad) + width(marker)
}

/// Compute the single width every line of a rendered block is laid out to.
///
/// This is the widest of the first line's furniture, the last line's
/// furniture, the middle line decoration around the longest text line, and
/// the filetype's `line-minlength`.
pub fn determine_length(
	filetype: &FileType,
	block: &Block,
	text: &TextPayload,
) -> UpdblockResult<usize> {
	let firstline = furniture_width(&filetype.firstline(), block.start());
	let lastline = furniture_width(&filetype.lastline(), block.end());

	let midline_style = filetype.midline();
	let midline = width(midline_style.start) + width(midline_style.end) + text.longest_line();

	let minlength = filetype.line_minlength()?;

	Ok(firstline.max(midline).max(lastline).max(minlength))
}
