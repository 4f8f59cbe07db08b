//! batchsh CLI Binary
//!
//! Interactive shell by default; `run`, `exec` and `config` for non-interactive use.

use batchsh::logging::init_logging;
use batchsh::tooling::cli::{Cli, CliContext, Commands};
use clap::Parser;
use std::process;

fn main() {
    let cli = Cli::parse();

    let context = match CliContext::new(&cli) {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("Error initializing shell: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = init_logging(&context.config().logging) {
        eprintln!("Error initializing logging: {}", e);
        process::exit(1);
    }

    if let Err(e) = run(&cli, &context) {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn run(cli: &Cli, context: &CliContext) -> anyhow::Result<()> {
    match cli.command.as_ref().unwrap_or(&Commands::Repl) {
        Commands::Repl => {
            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            context.repl(&mut stdin.lock(), stdout.lock())?;
        }
        command => {
            let output = context.execute(command)?;
            println!("{}", output);
        }
    }
    Ok(())
}
