use crate::Block;
use crate::Config;
use crate::FileType;
use crate::TextPayload;

/// A plain filetype with a 20 character minimum width, no padding lines and
/// `#` fillers around `LICENSE-START` / `LICENSE-END`.
pub const PLAIN_CONFIG: &str = r"
[filetype:plain]
extensions = txt
line-minlength = 20
line-padding = 0
firstline-filler = #
firstline-center = true
lastline-filler = #
midline-center = false

[block:license]
start-pattern = #+ LICENSE-START
end-pattern = #+ LICENSE-END
start = LICENSE-START
end = LICENSE-END

[text-blocks]
short = X

[action:plain-license]
filetype = plain
block = license
text = short
";

/// A C comment filetype with a centered, right-aligned middle frame.
pub const C_CONFIG: &str = r#"
; C style comments
[filetype:c]
extensions = c, .h
line-minlength = 24
firstline-start = /*
firstline-filler = *
midline-start = " *"
midline-end = *
midline-center = yes
lastline-start = " "
lastline-end = */
lastline-filler = *
lastline-center = off

[block:license]
start-pattern = /\*+ LICENSE-START
end-pattern = \s+LICENSE-END
start = LICENSE-START
end = LICENSE-END

[text-blocks]
notice = Hello

  Wide text here!

[action:c-license]
filetype = c
block = license
text = notice
"#;

pub fn plain_config() -> Config {
	Config::parse(PLAIN_CONFIG).unwrap()
}

pub fn c_config() -> Config {
	Config::parse(C_CONFIG).unwrap()
}

pub fn plain_parts(config: &Config) -> (&FileType, &Block) {
	(
		config.filetype("plain").unwrap(),
		config.block("license").unwrap(),
	)
}

pub fn c_parts(config: &Config) -> (&FileType, &Block) {
	(
		config.filetype("c").unwrap(),
		config.block("license").unwrap(),
	)
}

pub fn payload(lines: &[&str]) -> TextPayload {
	lines.iter().copied().collect()
}

/// The block rendered for [`C_CONFIG`] with the `notice` text.
pub fn c_rendered() -> Vec<String> {
	[
		"/**** LICENSE-START ****",
		" *                     *",
		" *        Hello        *",
		" *                     *",
		" *   Wide text here!   *",
		" *                     *",
		"  LICENSE-END *********/",
	]
	.map(String::from)
	.to_vec()
}
