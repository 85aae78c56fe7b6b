use std::io::Read;

use tracing::debug;

use crate::ctl::types::KvCtlError;

/// Returns `args[index]`, or all of `stdin` when there is no such argument.
///
/// Reading stdin blocks until it is closed. An empty argument is valid input;
/// empty stdin is not.
pub fn arg_or_stdin<R: Read>(args: &[String], mut stdin: R, index: usize) -> Result<Vec<u8>, KvCtlError> {
    if let Some(arg) = args.get(index) {
        return Ok(arg.as_bytes().to_vec());
    }

    debug!(index, "argument missing, reading stdin");
    let mut buf = Vec::new();
    match stdin.read_to_end(&mut buf) {
        Ok(_) if !buf.is_empty() => Ok(buf),
        Ok(_) => Err(KvCtlError::NoInput),
        Err(err) => {
            debug!(%err, "stdin read failed");
            Err(KvCtlError::NoInput)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    /// Fails the test if the stream is touched.
    struct Untouched;

    impl Read for Untouched {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            panic!("stdin must not be read");
        }
    }

    struct Broken;

    impl Read for Broken {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
    }

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_in_bounds_arg_skips_stdin() {
        let got = arg_or_stdin(&args(&["a", "b"]), Untouched, 0).unwrap();
        assert_eq!(got, b"a");
        let got = arg_or_stdin(&args(&["a", "b"]), Untouched, 1).unwrap();
        assert_eq!(got, b"b");
    }

    #[test]
    fn test_falls_back_to_stdin() {
        let got = arg_or_stdin(&[], &b"hello"[..], 0).unwrap();
        assert_eq!(got, b"hello");
    }

    #[test]
    fn test_empty_stdin_is_no_input() {
        let err = arg_or_stdin(&[], io::empty(), 0).unwrap_err();
        assert!(matches!(err, KvCtlError::NoInput));
    }

    #[test]
    fn test_stdin_error_is_no_input() {
        let err = arg_or_stdin(&[], Broken, 0).unwrap_err();
        assert!(matches!(err, KvCtlError::NoInput));
    }

    #[test]
    fn test_empty_arg_is_valid() {
        let got = arg_or_stdin(&args(&["", "b"]), Untouched, 0).unwrap();
        assert!(got.is_empty());
    }

    #[test]
    fn test_far_out_of_bounds_index_reads_stdin() {
        let got = arg_or_stdin(&args(&["a"]), &b"x"[..], 5).unwrap();
        assert_eq!(got, b"x");
    }

    #[test]
    fn test_repeated_calls_agree() {
        let values = args(&["a", "b"]);
        let first = arg_or_stdin(&values, Untouched, 1).unwrap();
        let second = arg_or_stdin(&values, Untouched, 1).unwrap();
        assert_eq!(first, second);
        assert_eq!(values, args(&["a", "b"]));
    }

    #[test]
    fn test_stdin_read_in_full() {
        let data = vec![b'z'; 64 * 1024];
        let got = arg_or_stdin(&[], io::Cursor::new(data.clone()), 0).unwrap();
        assert_eq!(got, data);
    }
}
