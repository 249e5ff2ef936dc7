use derive_more::Deref;

/// The ordered lines rendered into the body of a block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deref)]
pub struct TextPayload(Vec<String>);

impl TextPayload {
	pub fn new(lines: Vec<String>) -> Self {
		Self(lines)
	}

	/// Split `text` into lines. A trailing line break does not produce an
	/// empty last line.
	pub fn from_text(text: &str) -> Self {
		text.lines().collect()
	}

	/// Character count of the longest line, `0` for an empty payload.
	pub fn longest_line(&self) -> usize {
		self.0
			.iter()
			.map(|line| line.chars().count())
			.max()
			.unwrap_or(0)
	}

	pub fn into_lines(self) -> Vec<String> {
		self.0
	}
}

impl<S: Into<String>> FromIterator<S> for TextPayload {
	fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
		Self(iter.into_iter().map(Into::into).collect())
	}
}
