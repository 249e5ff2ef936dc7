mod common;

use predicates::prelude::PredicateBooleanExt;
use updblock_core::AnyEmptyResult;

#[test]
fn check_passes_when_up_to_date() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::write(tmp.path().join("updblock.ini"), common::CONFIG)?;
	std::fs::write(tmp.path().join("main.c"), common::updated_source())?;

	common::updblock_cmd()
		.arg("check")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(predicates::str::contains("up to date"));

	Ok(())
}

#[test]
fn check_fails_when_stale() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_stale_project(tmp.path())?;

	common::updblock_cmd()
		.arg("check")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.code(1)
		.stderr(predicates::str::contains("1 file(s) out of date"))
		.stderr(predicates::str::contains("main.c"))
		.stderr(predicates::str::contains("- * old text").not());

	let content = std::fs::read_to_string(tmp.path().join("main.c"))?;
	similar_asserts::assert_eq!(content, common::STALE_SOURCE);

	Ok(())
}

#[test]
fn check_diff_shows_changes() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_stale_project(tmp.path())?;

	common::updblock_cmd()
		.arg("check")
		.arg("--diff")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.code(1)
		.stderr(predicates::str::contains("- * old text"))
		.stderr(predicates::str::contains("+ *        Hello        *"))
		.stderr(predicates::str::contains("   int main(void);"));

	Ok(())
}

#[test]
fn check_fails_without_config() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;

	common::updblock_cmd()
		.arg("check")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.code(2)
		.stderr(predicates::str::contains("no configuration file found"));

	Ok(())
}

#[test]
fn check_warns_about_unterminated_block() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::write(tmp.path().join("updblock.ini"), common::CONFIG)?;
	std::fs::write(tmp.path().join("main.c"), "/** LICENSE-START\n * never closed\n")?;

	common::updblock_cmd()
		.arg("check")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.code(1)
		.stderr(predicates::str::contains("block is not terminated"));

	Ok(())
}
