use std::process::Command;

#[test]
fn help_exits_successfully() {
    let output = Command::new(env!("CARGO_BIN_EXE_pentamark"))
        .arg("--help")
        .output()
        .expect("failed to run pentamark --help");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--size"));
    assert!(stdout.contains("--still"));
}

#[test]
fn version_exits_successfully() {
    let status = Command::new(env!("CARGO_BIN_EXE_pentamark"))
        .arg("--version")
        .status()
        .expect("failed to run pentamark --version");

    assert!(status.success());
}

#[test]
fn malformed_size_fails_before_opening_a_window() {
    let output = Command::new(env!("CARGO_BIN_EXE_pentamark"))
        .args(["--size", "not-a-size"])
        .output()
        .expect("failed to run pentamark with a bad --size");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("--size") || stderr.contains("size"),
        "stderr should mention the size argument: {stderr}"
    );
}
