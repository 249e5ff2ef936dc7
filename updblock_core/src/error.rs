use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Diagnostic, Error)]
#[non_exhaustive]
pub enum UpdblockError {
	#[error(transparent)]
	#[diagnostic(code(updblock::io_error))]
	Io(#[from] std::io::Error),

	#[error("failed to walk `{path}`: {reason}")]
	#[diagnostic(code(updblock::walk))]
	Walk { path: String, reason: String },

	#[error("no configuration file found in `{root}`")]
	#[diagnostic(
		code(updblock::missing_config),
		help("create `updblock.ini`, `.updblock.ini` or `.config/updblock.ini`, or pass `--config`")
	)]
	MissingConfig { root: String },

	#[error("invalid configuration syntax on line {line}: {message}")]
	#[diagnostic(
		code(updblock::ini_syntax),
		help("sections look like `[filetype:c]` and entries like `key = value`")
	)]
	IniSyntax { line: usize, message: String },

	#[error("unknown section: `{0}`")]
	#[diagnostic(
		code(updblock::unknown_section),
		help(
			"supported sections: [filetype:<name>], [block:<name>], [action:<name>], \
			 [text-blocks], [text-files]"
		)
	)]
	UnknownSection(String),

	#[error("unknown attribute `{key}` in section `{section}`")]
	#[diagnostic(code(updblock::unknown_attribute))]
	UnknownAttribute { section: String, key: String },

	#[error("invalid pattern `{pattern}`: {reason}")]
	#[diagnostic(
		code(updblock::invalid_pattern),
		help("`start-pattern` and `end-pattern` must be valid regular expressions")
	)]
	InvalidPattern { pattern: String, reason: String },

	#[error("invalid extension glob `{pattern}`: {reason}")]
	#[diagnostic(code(updblock::invalid_glob))]
	InvalidGlob { pattern: String, reason: String },

	#[error("attribute `{key}` expects an integer between 0 and 65535, got `{value}`")]
	#[diagnostic(code(updblock::invalid_number))]
	InvalidNumber { key: String, value: String },

	#[error("no filetype named `{0}`")]
	#[diagnostic(
		code(updblock::missing_filetype),
		help("define it with a `[filetype:{0}]` section")
	)]
	MissingFileType(String),

	#[error("no block named `{0}`")]
	#[diagnostic(
		code(updblock::missing_block),
		help("define it with a `[block:{0}]` section")
	)]
	MissingBlock(String),

	#[error("no action named `{0}`")]
	#[diagnostic(
		code(updblock::missing_action),
		help("define it with an `[action:{0}]` section")
	)]
	MissingAction(String),

	#[error("action `{0}` does not list any filetype")]
	#[diagnostic(
		code(updblock::action_without_filetype),
		help("add `filetype = <name>` to the `[action:{0}]` section")
	)]
	ActionWithoutFileType(String),

	#[error("no text named `{0}`")]
	#[diagnostic(
		code(updblock::missing_text),
		help("add `{0} = ...` to the [text-blocks] or [text-files] section")
	)]
	MissingText(String),

	#[error("failed to read `{path}`: {reason}")]
	#[diagnostic(code(updblock::read_file))]
	ReadFile { path: String, reason: String },

	#[error("failed to read text file `{path}`: {reason}")]
	#[diagnostic(code(updblock::text_file))]
	TextFile { path: String, reason: String },
}

pub type UpdblockResult<T> = Result<T, UpdblockError>;
pub type AnyError = Box<dyn std::error::Error>;
pub type AnyEmptyResult = Result<(), AnyError>;
