#![allow(dead_code)]

use std::path::Path;

use assert_cmd::Command;
use insta_cmd::get_cargo_bin;
use updblock_core::AnyEmptyResult;

pub const CONFIG: &str = r#"[filetype:c]
extensions = c, h
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

pub const RENDERED: &str = "/**** LICENSE-START ****
 *                     *
 *        Hello        *
 *                     *
 *   Wide text here!   *
 *                     *
  LICENSE-END *********/
";

pub const STALE_SOURCE: &str = "/** LICENSE-START\n * old text\n  LICENSE-END */\nint main(void);\n";

pub fn updblock_cmd() -> Command {
	let mut cmd = Command::new(get_cargo_bin("updblock"));
	cmd.env("NO_COLOR", "1");
	cmd.env_remove("RUST_LOG");
	cmd
}

/// Write `updblock.ini` and a C file with a stale block into `root`.
pub fn write_stale_project(root: &Path) -> AnyEmptyResult {
	std::fs::write(root.join("updblock.ini"), CONFIG)?;
	std::fs::write(root.join("main.c"), STALE_SOURCE)?;

	Ok(())
}

/// The content of `main.c` once its block is regenerated.
pub fn updated_source() -> String {
	format!("{RENDERED}int main(void);\n")
}
