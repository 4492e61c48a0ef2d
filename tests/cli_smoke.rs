use assert_cmd::Command;
use predicates::str::contains;

#[test]
fn td_help_works() {
    Command::cargo_bin("td")
        .expect("binary")
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("validated todo lists"));
}

#[test]
fn subcommand_help_works() {
    let subcommands = ["add", "rm", "edit", "done", "clear", "list"];

    for cmd in subcommands {
        Command::cargo_bin("td")
            .expect("binary")
            .arg(cmd)
            .arg("--help")
            .assert()
            .success();
    }
}
