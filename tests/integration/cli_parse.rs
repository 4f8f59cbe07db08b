use batchsh::tooling::cli::{Cli, Commands};
use clap::{CommandFactory, Parser};
use std::path::PathBuf;

#[test]
fn parse_valid_command_matrix() {
    let cases: Vec<Vec<&str>> = vec![
        vec!["batchsh"],
        vec!["batchsh", "repl"],
        vec!["batchsh", "run", "script.bat"],
        vec!["batchsh", "run", "script.bat", "--format", "json"],
        vec!["batchsh", "exec", "ls"],
        vec!["batchsh", "exec", "mkdir docs", "ls", "--navigate"],
        vec!["batchsh", "config", "--log-level", "debug"],
        vec!["batchsh", "--config", "shell.toml", "repl"],
    ];

    for args in cases {
        let parsed = Cli::try_parse_from(args.clone());
        assert!(parsed.is_ok(), "expected valid parse for args: {args:?}");
    }
}

#[test]
fn parse_defaults_to_no_subcommand() {
    let cli = Cli::try_parse_from(["batchsh"]).unwrap();
    assert!(cli.command.is_none());
    assert!(!cli.navigate);
}

#[test]
fn parse_run_arguments() {
    let cli = Cli::try_parse_from(["batchsh", "run", "demo.bat", "--format", "json"]).unwrap();
    assert_eq!(
        cli.command,
        Some(Commands::Run {
            script: PathBuf::from("demo.bat"),
            format: "json".to_string(),
        })
    );
}

#[test]
fn parse_rejects_exec_without_lines() {
    assert!(Cli::try_parse_from(["batchsh", "exec"]).is_err());
}

#[test]
fn help_mentions_subcommands() {
    let mut command = Cli::command();
    let mut output = Vec::new();
    command.write_long_help(&mut output).unwrap();
    let output = String::from_utf8(output).unwrap();
    for token in ["repl", "run", "exec", "config", "--navigate"] {
        assert!(output.contains(token), "help should mention {token}");
    }
}
