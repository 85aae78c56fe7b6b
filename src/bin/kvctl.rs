use std::process;

use clap::CommandFactory;
use kvctl::ctl::exit::{exit_with_error, ExitStatusCode};
use kvctl::ctl::KvCtl;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // stdout carries command output, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let matches = match KvCtl::command().try_get_matches() {
        Ok(matches) => matches,
        Err(e) => {
            let code = if e.use_stderr() {
                ExitStatusCode::BadArgs
            } else {
                ExitStatusCode::Success
            };
            let _ = e.print();
            process::exit(code.into());
        }
    };

    if let Err(e) = kvctl::ctl::run(&matches).await {
        exit_with_error(&e);
    }
}
