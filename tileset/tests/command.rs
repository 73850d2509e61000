mod test_utilities;
use assert_cmd::{Command, cargo};
use predicates::str;
use rstest::rstest;
use test_utilities::BINARY_NAME;

#[test]
fn command() -> Result<(), Box<dyn std::error::Error>> {
	let mut cmd = Command::new(cargo::cargo_bin!());
	cmd.assert()
		.failure()
		.code(2)
		.stdout(str::is_empty())
		.stderr(str::contains(format!("Usage: {BINARY_NAME} [OPTIONS] <COMMAND>")));
	Ok(())
}

#[rstest]
#[case("run", "[OPTIONS] <CONFIG>")]
#[case("extract", "[OPTIONS] <TILE_FILE>")]
#[case("render", "[OPTIONS] <JSON_FILE> <PNG_FILE>")]
#[case("pack", "[OPTIONS] <JSON_FILE> <OUTPUT_FILE>")]
fn subcommand(#[case] sub_command: &str, #[case] usage: &str) -> Result<(), Box<dyn std::error::Error>> {
	Command::new(cargo::cargo_bin!())
		.args(sub_command.split(" "))
		.assert()
		.failure()
		.code(2)
		.stdout(str::is_empty())
		.stderr(str::contains(format!("Usage: {BINARY_NAME} {sub_command} {usage}")));
	Ok(())
}

#[test]
fn unknown_subcommand() {
	Command::new(cargo::cargo_bin!())
		.arg("convert")
		.assert()
		.failure()
		.code(2)
		.stderr(str::contains("unrecognized subcommand 'convert'"));
}
