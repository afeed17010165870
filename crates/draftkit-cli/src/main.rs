use clap::Parser;
use draftkit_cli::{CliArgs, DraftkitCli};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = CliArgs::parse();
    let result = DraftkitCli::from_args("draftkit", &args).and_then(|cli| cli.run(args));
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
