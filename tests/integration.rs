use assert_cmd::Command;
use predicates::boolean::PredicateBooleanExt;
use predicates::str::contains;

const BINARY_NAME: &str = "kibitz";

#[test]
fn starting_position_moves() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).expect("Binary should be built");

    drop(
        cmd.write_stdin("moves g1\nmoves e2\nquit\n")
            .assert()
            .success()
            .stdout("g1h3 g1f3\ne2e3 e2e4\n"),
    );
}

#[test]
fn custom_placement() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).expect("Binary should be built");

    drop(
        cmd.args(["--placement", "8/8/8/8/8/8/8/N7"])
            .write_stdin("moves a1\nd\n")
            .assert()
            .success()
            .stdout(contains("a1b3 a1c2").and(contains("Placement: 8/8/8/8/8/8/8/N7"))),
    );
}

#[test]
fn permissive_pawn_push() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).expect("Binary should be built");

    drop(
        cmd.args(["--placement", "8/8/8/8/8/4p3/4P3/8", "--permissive-pawn-push"])
            .write_stdin("moves e2\n")
            .assert()
            .success()
            .stdout("e2e3\n"),
    );
}

#[test]
fn build_info() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).expect("Binary should be built");

    drop(
        cmd.write_stdin("info\n")
            .assert()
            .success()
            .stdout(contains("kibitz").and(contains("Release build"))),
    );
}

#[test]
fn invalid_placement() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).expect("Binary should be built");

    drop(
        cmd.args(["--placement", "8/8"])
            .assert()
            .failure()
            .stderr(contains("there should be 8 ranks")),
    );
}

#[test]
fn version_logged_at_startup() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).expect("Binary should be built");

    drop(
        cmd.env_remove("RUST_LOG")
            .write_stdin("\n")
            .assert()
            .success()
            .stdout("")
            .stderr(contains("[INFO]").and(contains("kibitz"))),
    );
}
