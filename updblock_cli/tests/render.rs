mod common;

use updblock_core::AnyEmptyResult;

#[test]
fn render_prints_the_block_of_an_action() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::write(tmp.path().join("updblock.ini"), common::CONFIG)?;

	let output = common::updblock_cmd()
		.arg("render")
		.arg("c-license")
		.arg("--path")
		.arg(tmp.path())
		.output()?;

	assert!(output.status.success());
	similar_asserts::assert_eq!(String::from_utf8(output.stdout)?, common::RENDERED);

	Ok(())
}

#[test]
fn render_reads_text_files_relative_to_config() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let config_dir = tmp.path().join("settings");
	std::fs::create_dir(&config_dir)?;
	std::fs::write(config_dir.join("NOTICE"), "Hello\n\nWide text here!\n")?;

	let config = common::CONFIG
		.replace("notice = Hello\n\n  Wide text here!\n", "")
		.replace("[text-blocks]", "[text-files]\nnotice = NOTICE");
	let config_path = config_dir.join("custom.ini");
	std::fs::write(&config_path, config)?;

	let output = common::updblock_cmd()
		.arg("render")
		.arg("c-license")
		.arg("--config")
		.arg(&config_path)
		.arg("--path")
		.arg(tmp.path())
		.output()?;

	assert!(output.status.success());
	similar_asserts::assert_eq!(String::from_utf8(output.stdout)?, common::RENDERED);

	Ok(())
}

#[test]
fn render_reports_missing_action() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::write(tmp.path().join("updblock.ini"), common::CONFIG)?;

	common::updblock_cmd()
		.arg("render")
		.arg("python-license")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.code(2)
		.stderr(predicates::str::contains("no action named `python-license`"));

	Ok(())
}
