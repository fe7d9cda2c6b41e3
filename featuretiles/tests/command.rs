use rstest::rstest;
use test_utilities::*;

#[test]
fn command() {
	let o = featuretiles_output("");
	assert!(!o.success);
	assert_eq!(o.code, 2);
	assert!(o.stdout.is_empty());
	assert_contains!(o.stderr, &format!("Usage: {BINARY_NAME} [OPTIONS] <COMMAND>"));
}

#[rstest]
#[case("render", "[OPTIONS] <CONFIG> <LEVEL> <X> <Y>")]
#[case("probe", "[OPTIONS] <CONFIG>")]
fn subcommand(#[case] sub_command: &str, #[case] usage: &str) {
	let o = featuretiles_output(sub_command);
	assert!(!o.success);
	assert_eq!(o.code, 2);
	assert!(o.stdout.is_empty());
	assert_contains!(o.stderr, &format!("Usage: {BINARY_NAME} {sub_command} {usage}"));
}
