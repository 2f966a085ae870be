use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

fn fastfood() -> Command {
    let mut cmd = Command::cargo_bin("fastfood").unwrap();
    cmd.env_remove("FASTFOOD_LOG")
        .env_remove("FASTFOOD_OUTPUT")
        .env_remove("FASTFOOD_CURRENCY");
    cmd
}

#[test]
fn total_from_stdin() {
    fastfood()
        .arg("total")
        .write_stdin(
            r#"[{"price": 10.5, "quantity": 2},
                {"price": 5.0, "quantity": 1},
                {"price": 2.25, "quantity": 4}]"#,
        )
        .assert()
        .success()
        .stdout("35.00\n");
}

#[test]
fn total_from_file_with_currency() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, r#"[{{"price": 15.0, "quantity": 1}}]"#).unwrap();

    fastfood()
        .env("FASTFOOD_CURRENCY", "€")
        .args(["total", "--file"])
        .arg(file.path())
        .assert()
        .success()
        .stdout("€15.00\n");
}

#[test]
fn empty_list_exits_with_domain_code() {
    fastfood()
        .arg("total")
        .write_stdin("[]")
        .assert()
        .code(3)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("error[domain]: line item list cannot be empty"));
}

#[test]
fn non_numeric_price_exits_with_type_code() {
    fastfood()
        .args(["--format", "json", "total"])
        .write_stdin(r#"[{"price": "dix", "quantity": 2}]"#)
        .assert()
        .code(2)
        .stdout(predicate::str::contains(r#""kind":"type""#));
}

#[test]
fn invalid_json_is_a_process_error() {
    fastfood()
        .arg("total")
        .write_stdin("[{")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("line items are not valid JSON"));
}

#[test]
fn allowed_transition() {
    fastfood()
        .args(["transition", "  PENDING ", "confirmed"])
        .assert()
        .success()
        .stdout("ok: pending -> confirmed\n");
}

#[test]
fn rejected_transition_lists_options() {
    fastfood()
        .args(["transition", "pending", "ready"])
        .assert()
        .code(5)
        .stderr(predicate::str::contains("valid transitions: [confirmed, cancelled]"));
}

#[test]
fn unknown_status_exits_with_value_code() {
    fastfood()
        .env("FASTFOOD_OUTPUT", "json")
        .args(["transition", "shipped", "delivered"])
        .assert()
        .code(4)
        .stdout(predicate::str::contains(r#""kind":"value""#));
}

#[test]
fn statuses_table() {
    fastfood()
        .arg("statuses")
        .assert()
        .success()
        .stdout(predicate::str::contains("ready          -> delivered"))
        .stdout(predicate::str::contains("cancelled      -> (terminal)"));
}

#[test]
fn bad_output_config_fails() {
    fastfood()
        .env("FASTFOOD_OUTPUT", "yaml")
        .arg("statuses")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid value for FASTFOOD_OUTPUT"));
}

#[test]
fn format_flag_overrides_bad_output_config() {
    fastfood()
        .env("FASTFOOD_OUTPUT", "yaml")
        .args(["--format", "json", "statuses"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""transitions""#));
}
