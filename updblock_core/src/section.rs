use std::collections::BTreeMap;

use serde::Serialize;

use crate::Attribute;
use crate::AttributeValue;
use crate::UpdblockError;
use crate::UpdblockResult;

/// Map a configuration key (`firstline-start`) to its attribute name
/// (`firstline_start`).
pub fn normalize_key(key: &str) -> String {
	key.replace('-', "_")
}

/// Largest value a numeric attribute such as `line-padding` accepts.
pub const MAX_ATTRIBUTE_NUMBER: u16 = u16::MAX;

/// A fixed set of named attributes.
///
/// The set of names is declared when the section is built and never grows:
/// updating a key that was not declared is an error.
#[derive(Debug, Clone)]
pub struct AttributeSection {
	/// Header of the section which created this value, e.g. `filetype:c`.
	/// Only used to make error messages point at the right place.
	name: String,
	attributes: BTreeMap<&'static str, Attribute>,
}

impl AttributeSection {
	pub fn new(
		name: impl Into<String>,
		attributes: impl IntoIterator<Item = (&'static str, Attribute)>,
	) -> Self {
		Self {
			name: name.into(),
			attributes: attributes.into_iter().collect(),
		}
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	/// Apply each `(key, value)` pair in order.
	///
	/// Stops at the first key which is not part of the section.
	pub fn update<K, V>(&mut self, pairs: impl IntoIterator<Item = (K, V)>) -> UpdblockResult<()>
	where
		K: AsRef<str>,
		V: AsRef<str>,
	{
		for (key, value) in pairs {
			let key = key.as_ref();
			let attribute = self
				.attributes
				.get_mut(normalize_key(key).as_str())
				.ok_or_else(|| {
					UpdblockError::UnknownAttribute {
						section: self.name.clone(),
						key: key.to_string(),
					}
				})?;
			attribute.set(value.as_ref());
		}

		Ok(())
	}

	pub fn attribute(&self, name: &str) -> Option<&Attribute> {
		self.attributes.get(name)
	}

	/// Resolved value of the attribute `name`, if declared.
	pub fn get(&self, name: &str) -> Option<AttributeValue> {
		self.attributes.get(name).map(Attribute::get)
	}

	/// Text of a declared value attribute. Undeclared names read as empty.
	pub fn text(&self, name: &str) -> &str {
		self.attributes
			.get(name)
			.and_then(Attribute::as_text)
			.unwrap_or_default()
	}

	/// Items of a declared list attribute. Undeclared names read as empty.
	pub fn list(&self, name: &str) -> &[String] {
		self.attributes
			.get(name)
			.and_then(Attribute::as_list)
			.unwrap_or_default()
	}

	/// Value of a declared boolean attribute. Undeclared names read as
	/// `false`.
	pub fn flag(&self, name: &str) -> bool {
		self.attributes
			.get(name)
			.and_then(Attribute::as_bool)
			.unwrap_or_default()
	}

	/// Parse a value attribute as an integer between 0 and
	/// [`MAX_ATTRIBUTE_NUMBER`].
	pub fn number(&self, name: &str) -> UpdblockResult<usize> {
		let value = self.text(name);
		value
			.trim()
			.parse::<u16>()
			.map(usize::from)
			.map_err(|_| {
				UpdblockError::InvalidNumber {
					key: name.replace('_', "-"),
					value: value.to_string(),
				}
			})
	}

	/// Every attribute and its resolved value, ordered by name.
	pub fn values(&self) -> BTreeMap<String, AttributeValue> {
		self.attributes
			.iter()
			.map(|(name, attribute)| ((*name).to_string(), attribute.get()))
			.collect()
	}
}

/// An open-ended collection of value attributes keyed by name.
///
/// A key seen for the first time gets a fresh attribute built from the
/// collection's default; repeated keys keep mutating the same attribute.
#[derive(Debug, Clone, Default)]
pub struct KeyedAttributes {
	default: String,
	entries: BTreeMap<String, Attribute>,
}

impl KeyedAttributes {
	pub fn new(default: impl Into<String>) -> Self {
		Self {
			default: default.into(),
			entries: BTreeMap::new(),
		}
	}

	pub fn update<K, V>(&mut self, pairs: impl IntoIterator<Item = (K, V)>)
	where
		K: AsRef<str>,
		V: AsRef<str>,
	{
		for (key, value) in pairs {
			self.entries
				.entry(key.as_ref().to_string())
				.or_insert_with(|| Attribute::value(self.default.as_str()))
				.set(value.as_ref());
		}
	}

	pub fn get(&self, key: &str) -> Option<&str> {
		self.entries.get(key).and_then(Attribute::as_text)
	}

	pub fn contains(&self, key: &str) -> bool {
		self.entries.contains_key(key)
	}

	/// Snapshot of every key and its resolved value.
	pub fn items(&self) -> Vec<(String, String)> {
		self.entries
			.iter()
			.map(|(key, attribute)| {
				(
					key.clone(),
					attribute.as_text().unwrap_or_default().to_string(),
				)
			})
			.collect()
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

impl Serialize for KeyedAttributes {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: serde::Serializer,
	{
		serializer.collect_map(
			self.entries
				.iter()
				.map(|(key, attribute)| (key, attribute.get())),
		)
	}
}
