// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use tempfile::TempDir;

fn sh(script: &str) -> Invocation {
    Invocation::new("sh", ["-c", script])
}

fn runner_with_fixture(name: &str, content: &str) -> (TempDir, CommandRunner<Vec<u8>>) {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join(name), content).unwrap();
    let runner = CommandRunner::new(FixtureDir::new(tmp.path()), Vec::new());
    (tmp, runner)
}

fn printed(runner: CommandRunner<Vec<u8>>) -> String {
    String::from_utf8(runner.into_writer()).unwrap()
}

#[test]
fn expected_exit_codes() {
    assert_eq!(ExpectedExit::Success.code(), 0);
    assert_eq!(ExpectedExit::Failure.code(), 1);
}

#[tokio::test]
async fn matching_exit_code_returns_output() {
    let mut runner = CommandRunner::new(FixtureDir::default(), Vec::new());
    let out = runner
        .call(ExpectedExit::Success, &Invocation::new("echo", ["hi"]), "echo failed", None)
        .await
        .unwrap();
    assert_eq!(out, "hi\n");
    assert_eq!(printed(runner), "");
}

#[tokio::test]
async fn expected_failure_returns_output() {
    let mut runner = CommandRunner::new(FixtureDir::default(), Vec::new());
    let out = runner
        .call(ExpectedExit::Failure, &sh("echo bad input >&2; exit 1"), "should fail", None)
        .await
        .unwrap();
    assert_eq!(out, "bad input\n");
}

#[tokio::test]
async fn unexpected_exit_code_reports_message_and_output() {
    let mut runner = CommandRunner::new(FixtureDir::default(), Vec::new());
    let err = runner
        .call(ExpectedExit::Success, &sh("echo partial; exit 2"), "compile step", None)
        .await
        .unwrap_err();

    match err {
        HarnessError::UnexpectedExitCode {
            expected,
            actual,
            ref message,
            ref output,
        } => {
            assert_eq!(expected, 0);
            assert_eq!(actual, 2);
            assert_eq!(message, "compile step");
            assert_eq!(output, "partial\n");
        }
        ref other => panic!("unexpected error: {other}"),
    }
    assert!(err.is_reported());

    let text = printed(runner);
    assert!(text.contains("FAILURE: compile step\n"));
    assert!(text.contains("Program output:\npartial\n"));
}

#[tokio::test]
async fn success_when_failure_expected_is_an_error() {
    let mut runner = CommandRunner::new(FixtureDir::default(), Vec::new());
    let err = runner
        .call(ExpectedExit::Failure, &Invocation::new("true", Vec::<String>::new()), "must reject", None)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        HarnessError::UnexpectedExitCode { expected: 1, actual: 0, .. }
    ));
}

#[tokio::test]
async fn fixture_match_ignores_trailing_whitespace() {
    let (_tmp, mut runner) = runner_with_fixture("lines.txt", "line1\nline2\n");
    let out = runner
        .call(ExpectedExit::Success, &sh("printf 'line1 \\nline2\\n'"), "printf", Some("lines.txt"))
        .await
        .unwrap();
    assert_eq!(out, "line1 \nline2\n");
}

#[tokio::test]
async fn fixture_match_tolerates_crlf_fixture() {
    let (_tmp, mut runner) = runner_with_fixture("crlf.txt", "a\r\nb\r\n");
    runner
        .call(ExpectedExit::Success, &sh("printf 'a\\nb\\n'"), "printf", Some("crlf.txt"))
        .await
        .unwrap();
}

#[tokio::test]
async fn fixture_match_tolerates_lone_cr_fixture() {
    let (_tmp, mut runner) = runner_with_fixture("cr.txt", "a\rb\r");
    runner
        .call(ExpectedExit::Success, &sh("printf 'a\\nb\\n'"), "printf", Some("cr.txt"))
        .await
        .unwrap();
}

#[tokio::test]
async fn mismatch_diff_splits_lone_cr_output() {
    let (_tmp, mut runner) = runner_with_fixture("cr.txt", "a\nb\nc\n");
    let err = runner
        .call(ExpectedExit::Success, &sh("printf 'a\\rb\\rx\\r'"), "printf", Some("cr.txt"))
        .await
        .unwrap_err();

    let HarnessError::FixtureMismatch { diff, .. } = err else {
        panic!("unexpected error: {err}");
    };
    assert!(diff.contains("*** 1,3 ****\n  a\n  b\n! x\n"));
    assert!(diff.contains("--- 1,3 ----\n  a\n  b\n! c\n"));
}

#[tokio::test]
async fn fixture_mismatch_prints_context_diff() {
    let (_tmp, mut runner) = runner_with_fixture("greeting.txt", "hello\nworld\n");
    let err = runner
        .call(ExpectedExit::Success, &sh("printf 'hello\\nthere\\n'"), "greet", Some("greeting.txt"))
        .await
        .unwrap_err();

    let diff = match err {
        HarnessError::FixtureMismatch { name, diff } => {
            assert_eq!(name, "greeting.txt");
            diff
        }
        other => panic!("unexpected error: {other}"),
    };
    assert!(diff.starts_with("*** generated\n--- expected\n"));
    assert!(diff.contains("! there\n"));
    assert!(diff.contains("! world\n"));

    let text = printed(runner);
    assert!(text.contains("Output doesn't match fixture!"));
    assert!(text.contains("Diff:\n*** generated"));
}

#[tokio::test]
async fn missing_fixture_is_an_error() {
    let tmp = TempDir::new().unwrap();
    let mut runner = CommandRunner::new(FixtureDir::new(tmp.path()), Vec::new());
    let err = runner
        .call(ExpectedExit::Success, &Invocation::new("echo", ["hi"]), "echo", Some("absent.txt"))
        .await
        .unwrap_err();
    assert!(matches!(err, HarnessError::MissingFixture { .. }));
    assert!(!err.is_reported());
}

#[tokio::test]
async fn exit_code_is_checked_before_fixture() {
    let tmp = TempDir::new().unwrap();
    let mut runner = CommandRunner::new(FixtureDir::new(tmp.path()), Vec::new());
    let err = runner
        .call(ExpectedExit::Success, &sh("exit 3"), "exits", Some("absent.txt"))
        .await
        .unwrap_err();
    assert!(matches!(err, HarnessError::UnexpectedExitCode { actual: 3, .. }));
}

#[tokio::test]
async fn repeated_calls_give_identical_results() {
    let (_tmp, mut runner) = runner_with_fixture("hi.txt", "hi\n");
    let inv = Invocation::new("echo", ["hi"]);
    let first = runner
        .call(ExpectedExit::Success, &inv, "echo", Some("hi.txt"))
        .await
        .unwrap();
    let second = runner
        .call(ExpectedExit::Success, &inv, "echo", Some("hi.txt"))
        .await
        .unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn expect_success_announces_command() {
    let mut runner = CommandRunner::new(FixtureDir::default(), Vec::new());
    runner
        .expect_success(&Invocation::new("echo", ["hi"]), "echo", None)
        .await
        .unwrap();
    assert_eq!(printed(runner), "Expecting success from: \"echo hi\"\n");
}

#[tokio::test]
async fn expect_failure_announces_command() {
    let mut runner = CommandRunner::new(FixtureDir::default(), Vec::new());
    runner
        .expect_failure(&sh("exit 1"), "should fail", None)
        .await
        .unwrap();
    assert_eq!(printed(runner), "Expecting failure from: \"sh -c exit 1\"\n");
}

#[tokio::test]
async fn missing_program_surfaces_capture_error() {
    let mut runner = CommandRunner::new(FixtureDir::default(), Vec::new());
    let err = runner
        .call(
            ExpectedExit::Success,
            &Invocation::new("goldcheck-no-such-program", Vec::<String>::new()),
            "spawn",
            None,
        )
        .await
        .unwrap_err();
    assert!(matches!(err, HarnessError::Capture(_)));
}
