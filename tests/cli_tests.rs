mod common;

use common::run_recap;

#[test]
fn recap_help_shows_usage() {
    let output = run_recap(&["--help"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(
        output.status.success(),
        "--help should succeed\nstdout:\n{}\nstderr:\n{}",
        stdout,
        stderr
    );
    assert!(stdout.contains("Usage:"));
    assert!(stdout.contains("Commands:"));
    assert!(
        !stderr.contains("No config file found"),
        "--help should not log config fallback noise\nstderr:\n{}",
        stderr
    );
}

#[test]
fn recap_version_shows_version() {
    let output = run_recap(&["--version"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(
        output.status.success(),
        "--version should succeed\nstdout:\n{}\nstderr:\n{}",
        stdout,
        stderr
    );
    assert!(stdout.contains("recap "));
}

#[test]
fn completions_bash_outputs_script() {
    let output = run_recap(&["completions", "bash"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(
        output.status.success(),
        "completions bash should succeed\nstdout:\n{}\nstderr:\n{}",
        stdout,
        stderr
    );
    assert!(
        stdout.contains("recap"),
        "expected completion output to reference command name\nstdout:\n{}",
        stdout
    );
}

#[test]
fn config_show_prints_defaults() {
    let output = run_recap(&["config", "show"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("[llm]"));
    assert!(stdout.contains("provider = \"groq\""));
    assert!(stdout.contains("qwen/qwen3-32b"));
}

#[test]
fn config_init_then_show_round_trips() {
    let env = common::TestEnv::new();

    let output = env.run(&["config", "init"]);
    assert!(
        output.status.success(),
        "config init should succeed\nstderr:\n{}",
        String::from_utf8_lossy(&output.stderr)
    );

    let output = env.run(&["config", "init"]);
    assert!(
        !output.status.success(),
        "second init without --force should fail"
    );

    let output = env.run(&["config", "init", "--force"]);
    assert!(output.status.success());
}

#[test]
fn list_on_empty_history_reports_none() {
    let output = run_recap(&["list"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("No summaries found"));
}

#[test]
fn runtime_commands_create_the_data_dir() {
    let env = common::TestEnv::new();

    let output = env.run(&["list"]);
    assert!(output.status.success());

    assert!(
        env.data_path().join("recap").is_dir(),
        "expected the data directory to be created on startup"
    );
}

#[test]
fn view_unknown_id_fails() {
    let output = run_recap(&["view", "does-not-exist"]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Summary not found"),
        "expected missing summary error, got:\n{}",
        stderr
    );
}
