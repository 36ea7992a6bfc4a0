use assert_cmd::Command;
use predicates::prelude::*;

fn rig() -> Command {
    let mut cmd = Command::cargo_bin("rig").unwrap();
    cmd.env_remove("RUST_LOG").env_remove("LOG_LEVEL");
    cmd
}

#[test]
fn test_demo_prints_exact_sequence() {
    rig().assert().success().stdout(
        "Initial PC: CPU: Intel i9, GPU: RTX 4080, RAM: 32GB\n\
         Modified PC: CPU: AMD Ryzen 9, GPU: RX 7900, RAM: 64GB\n\
         Restored PC: CPU: Intel i9, GPU: RTX 4080, RAM: 32GB\n\
         Installing Linux drivers for: CPU: Intel i9, GPU: RTX 4080, RAM: 32GB\n",
    );
}

#[test]
fn test_logs_stay_off_stdout() {
    rig()
        .env("LOG_LEVEL", "debug")
        .assert()
        .success()
        .stdout(predicate::str::contains("snapshot").not())
        .stdout(predicate::str::starts_with("Initial PC: "));
}

#[test]
fn test_version_flag() {
    rig()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("rig"));
}

#[test]
fn test_unexpected_argument_is_rejected() {
    rig().arg("--os").assert().failure();
}
