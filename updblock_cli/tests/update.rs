mod common;

use updblock_core::AnyEmptyResult;

#[test]
fn update_rewrites_stale_blocks() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_stale_project(tmp.path())?;

	common::updblock_cmd()
		.arg("update")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(predicates::str::contains("updated main.c"))
		.stdout(predicates::str::contains("Updated 1 file(s)"));

	let content = std::fs::read_to_string(tmp.path().join("main.c"))?;
	similar_asserts::assert_eq!(content, common::updated_source());

	Ok(())
}

#[test]
fn update_is_idempotent() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_stale_project(tmp.path())?;

	common::updblock_cmd()
		.arg("update")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success();

	common::updblock_cmd()
		.arg("update")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(predicates::str::contains("already up to date"));

	let content = std::fs::read_to_string(tmp.path().join("main.c"))?;
	similar_asserts::assert_eq!(content, common::updated_source());

	Ok(())
}

#[test]
fn update_dry_run_does_not_write() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_stale_project(tmp.path())?;

	common::updblock_cmd()
		.arg("update")
		.arg("--dry-run")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(predicates::str::contains("would update 1 file(s)"))
		.stdout(predicates::str::contains("main.c"));

	let content = std::fs::read_to_string(tmp.path().join("main.c"))?;
	similar_asserts::assert_eq!(content, common::STALE_SOURCE);

	Ok(())
}

#[test]
fn update_skips_files_without_matching_filetype() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_stale_project(tmp.path())?;
	std::fs::write(tmp.path().join("notes.txt"), common::STALE_SOURCE)?;

	common::updblock_cmd()
		.arg("update")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success();

	let notes = std::fs::read_to_string(tmp.path().join("notes.txt"))?;
	similar_asserts::assert_eq!(notes, common::STALE_SOURCE);

	Ok(())
}

#[test]
fn update_skips_gitignored_files() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_stale_project(tmp.path())?;
	std::fs::create_dir(tmp.path().join(".git"))?;
	std::fs::create_dir(tmp.path().join("vendor"))?;
	std::fs::write(tmp.path().join(".gitignore"), "vendor/\n")?;
	std::fs::write(tmp.path().join("vendor/lib.c"), common::STALE_SOURCE)?;

	common::updblock_cmd()
		.arg("update")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success();

	let vendored = std::fs::read_to_string(tmp.path().join("vendor/lib.c"))?;
	similar_asserts::assert_eq!(vendored, common::STALE_SOURCE);

	Ok(())
}

#[test]
fn update_reports_unknown_section() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::write(tmp.path().join("updblock.ini"), "[bogus:x]\nkey = value\n")?;

	common::updblock_cmd()
		.arg("update")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.code(2)
		.stderr(predicates::str::contains("unknown section"))
		.stderr(predicates::str::contains("bogus:x"));

	Ok(())
}

#[test]
fn update_reports_invalid_pattern_before_writing() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_stale_project(tmp.path())?;
	let config = common::CONFIG.replace(r"/\*+ LICENSE-START", "(unclosed");
	std::fs::write(tmp.path().join("updblock.ini"), config)?;

	common::updblock_cmd()
		.arg("update")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.code(2)
		.stderr(predicates::str::contains("invalid pattern"));

	let content = std::fs::read_to_string(tmp.path().join("main.c"))?;
	similar_asserts::assert_eq!(content, common::STALE_SOURCE);

	Ok(())
}
