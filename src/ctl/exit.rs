use std::process;

use tracing::debug;

use crate::ctl::types::KvCtlError;

/// Process exit codes, numbered the way the etcdctl family numbers them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitStatusCode {
    Success = 0,
    Error = 1,
    BadConnection = 2,
    BadArgs = 128,
}

impl From<ExitStatusCode> for i32 {
    fn from(code: ExitStatusCode) -> Self {
        code as i32
    }
}

/// Prints the error and terminates with its category.
///
/// Only `main` should call this; everything below it returns `KvCtlError`.
pub fn exit_with_error(err: &KvCtlError) -> ! {
    let code = err.exit_code();
    debug!(?code, "exiting on error");
    eprintln!("Error: {}", err);
    process::exit(code.into())
}
