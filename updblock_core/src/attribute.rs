use std::fmt;

use serde::Serialize;

/// Separator used by list attributes unless declared otherwise.
pub const DEFAULT_LIST_SEPARATOR: char = ',';

/// Words which coerce a boolean attribute to `false`. Every other value,
/// including the empty string, is `true`.
const FALSE_WORDS: [&str; 4] = ["0", "false", "no", "off"];

/// A single configurable attribute and its merge behavior.
///
/// Every variant starts at its declared default and is mutated in place by
/// [`Attribute::set`] each time a matching key is read from the
/// configuration source.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Attribute {
	/// Each `set` splits the raw value on `separator`, trims the parts, drops
	/// empty ones and appends the rest.
	Accumulate { separator: char, items: Vec<String> },
	/// Each `set` replaces the previous value.
	Replace(String),
	/// Each `set` coerces the raw value to a boolean.
	BoolCoerce(bool),
}

impl Attribute {
	/// An empty list attribute split on commas.
	pub fn list() -> Self {
		Self::list_with_separator(DEFAULT_LIST_SEPARATOR)
	}

	pub fn list_with_separator(separator: char) -> Self {
		Self::Accumulate {
			separator,
			items: Vec::new(),
		}
	}

	/// A last-write-wins attribute starting at `default`.
	pub fn value(default: impl Into<String>) -> Self {
		Self::Replace(default.into())
	}

	/// A boolean attribute starting at `default`.
	pub fn flag(default: bool) -> Self {
		Self::BoolCoerce(default)
	}

	/// Apply a raw configuration value. Never fails: every string is accepted
	/// by every variant.
	pub fn set(&mut self, raw: &str) {
		match self {
			Self::Accumulate { separator, items } => {
				items.extend(
					raw.split(*separator)
						.map(str::trim)
						.filter(|part| !part.is_empty())
						.map(ToString::to_string),
				);
			}
			Self::Replace(value) => raw.clone_into(value),
			Self::BoolCoerce(value) => *value = coerce_bool(raw),
		}
	}

	/// Resolve the current value.
	pub fn get(&self) -> AttributeValue {
		match self {
			Self::Accumulate { items, .. } => AttributeValue::List(items.clone()),
			Self::Replace(value) => AttributeValue::Text(unquote(value).to_string()),
			Self::BoolCoerce(value) => AttributeValue::Bool(*value),
		}
	}

	/// The current text of a [`Attribute::Replace`] attribute with one pair of
	/// surrounding double quotes removed. Other variants have no text.
	pub fn as_text(&self) -> Option<&str> {
		match self {
			Self::Replace(value) => Some(unquote(value)),
			_ => None,
		}
	}

	pub fn as_list(&self) -> Option<&[String]> {
		match self {
			Self::Accumulate { items, .. } => Some(items),
			_ => None,
		}
	}

	pub fn as_bool(&self) -> Option<bool> {
		match self {
			Self::BoolCoerce(value) => Some(*value),
			_ => None,
		}
	}
}

/// A resolved attribute value, as exposed by [`Attribute::get`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum AttributeValue {
	List(Vec<String>),
	Text(String),
	Bool(bool),
}

impl fmt::Display for AttributeValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::List(items) => write!(f, "{items:?}"),
			Self::Text(text) => write!(f, "{text:?}"),
			Self::Bool(value) => write!(f, "{value}"),
		}
	}
}

/// Coerce a raw string to a boolean. Only `0`, `false`, `no` and `off`
/// (trimmed, case-insensitive) are `false`.
pub fn coerce_bool(raw: &str) -> bool {
	let normalized = raw.trim().to_lowercase();
	!FALSE_WORDS.contains(&normalized.as_str())
}

/// Remove a single pair of double quotes bounding `value` on both ends. A
/// lone `"` both starts and ends the value, so it unquotes to `""`.
pub fn unquote(value: &str) -> &str {
	if value.starts_with('"') && value.ends_with('"') {
		value.get(1..value.len() - 1).unwrap_or_default()
	} else {
		value
	}
}
