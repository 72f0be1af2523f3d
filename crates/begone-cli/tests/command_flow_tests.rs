//! End-to-end command tests with a temporary credentials file and scripted input

use std::io::Cursor;
use std::path::Path;

use begone_cli::{Cli, CliError, CommandDispatcher, FileConfigStore, LinePrompter};
use begone_core::{CredentialField, CredentialRecord, ResolveError};
use clap::Parser;

type ScriptedPrompter = LinePrompter<Cursor<Vec<u8>>, Vec<u8>>;

fn scripted(input: &str) -> ScriptedPrompter {
    LinePrompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
}

fn parse(config: &Path, args: &[&str]) -> Cli {
    let config = config.to_str().unwrap();
    let mut argv = vec!["begone", "--config", config];
    argv.extend_from_slice(args);
    Cli::try_parse_from(argv).unwrap()
}

fn run(config: &Path, args: &[&str], input: &str) -> (Result<(), CliError>, String) {
    let mut out = Vec::new();
    let result = CommandDispatcher::execute_with(parse(config, args), scripted(input), &mut out);
    (result, String::from_utf8(out).unwrap())
}

#[test]
fn test_login_prompts_and_saves() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");

    let (result, _) = run(&path, &["login"], "alice\nsecret\n");
    result.unwrap();

    let saved = FileConfigStore::new(&path).load_record().unwrap();
    assert_eq!(saved, CredentialRecord::new("alice", "secret"));
}

#[test]
fn test_emoji_uses_saved_and_explicit_credentials() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    FileConfigStore::new(&path)
        .save(&CredentialRecord::new("alice", ""))
        .unwrap();

    let (result, output) = run(
        &path,
        &[
            "-p",
            "secret",
            "--non-interactive",
            "emoji",
            "friends",
            "-m",
            "staircase",
            "-n",
            "3",
            "--seed",
            "5",
        ],
        "",
    );
    result.unwrap();

    let lengths: Vec<usize> = output
        .lines()
        .map(|line| line.strip_prefix("friends: ").unwrap().chars().count())
        .collect();
    assert_eq!(lengths, vec![1, 2, 3]);

    // Explicit credentials are not written back by a send run
    let saved = FileConfigStore::new(&path).load_record().unwrap();
    assert_eq!(saved, CredentialRecord::new("alice", ""));
}

#[test]
fn test_non_interactive_missing_password() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    FileConfigStore::new(&path)
        .save(&CredentialRecord::new("alice", ""))
        .unwrap();

    let (result, output) = run(&path, &["--non-interactive", "emoji", "friends", "-n", "1"], "");

    match result {
        Err(CliError::Resolve(err)) => {
            assert_eq!(err.missing_field(), Some(CredentialField::Password));
        }
        other => panic!("expected missing password, got {other:?}"),
    }
    assert!(output.is_empty());
}

#[test]
fn test_malformed_username_is_a_build_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");

    let (result, _) = run(&path, &["-u", "al ice", "-p", "pw", "login"], "");

    assert!(matches!(result, Err(CliError::Resolve(ResolveError::Build(_)))));
    assert!(!path.exists());
}

#[test]
fn test_logout_removes_saved_credentials() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    FileConfigStore::new(&path)
        .save(&CredentialRecord::new("alice", "secret"))
        .unwrap();

    let (result, _) = run(&path, &["logout"], "");
    result.unwrap();
    assert!(!path.exists());

    // A second logout is not an error
    let (result, _) = run(&path, &["logout"], "");
    result.unwrap();
}
