mod common;

use clap::Parser;
use rstest::rstest;
use updblock_cli::Commands;
use updblock_cli::OutputFormat;
use updblock_cli::UpdblockCli;
use updblock_core::AnyEmptyResult;

#[rstest]
#[case::dot_file(".updblock.ini")]
#[case::config_dir(".config/updblock.ini")]
fn check_discovers_config_candidates(#[case] candidate: &str) -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::create_dir_all(tmp.path().join(".config"))?;
	std::fs::write(tmp.path().join(candidate), common::CONFIG)?;
	std::fs::write(tmp.path().join("main.c"), common::updated_source())?;

	common::updblock_cmd()
		.arg("check")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(predicates::str::contains("1 file(s) checked"));

	Ok(())
}

#[test]
fn updblock_ini_takes_precedence() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::write(tmp.path().join("updblock.ini"), common::CONFIG)?;
	std::fs::write(tmp.path().join(".updblock.ini"), "[bogus]\n")?;

	common::updblock_cmd()
		.arg("render")
		.arg("c-license")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success();

	Ok(())
}

#[test]
fn parses_global_flags_after_subcommand() -> AnyEmptyResult {
	let cli = UpdblockCli::try_parse_from([
		"updblock",
		"dump",
		"--format",
		"json",
		"--verbose",
		"--config",
		"custom.ini",
	])?;

	assert!(cli.verbose);
	assert_eq!(cli.config.as_deref(), Some(std::path::Path::new("custom.ini")));
	assert!(matches!(
		cli.command,
		Some(Commands::Dump {
			format: OutputFormat::Json
		})
	));

	Ok(())
}

#[test]
fn render_requires_an_action() {
	assert!(UpdblockCli::try_parse_from(["updblock", "render"]).is_err());
}
