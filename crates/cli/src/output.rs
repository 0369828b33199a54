use std::io::{self, BufWriter, StdoutLock, Write};

/// Run `write` against buffered stdout and flush it.
///
/// A reader that closes the pipe early (`mediascan ... | head -1`) is not an
/// error: the write stops and the process still exits successfully.
pub fn to_stdout<F>(write: F) -> anyhow::Result<()>
where
    F: FnOnce(&mut BufWriter<StdoutLock<'static>>) -> anyhow::Result<()>,
{
    let mut out = BufWriter::new(io::stdout().lock());
    let result = write(&mut out).and_then(|()| out.flush().map_err(anyhow::Error::from));

    match result {
        Err(e) if is_broken_pipe(&e) => {
            tracing::debug!("stdout closed by reader");
            Ok(())
        }
        other => other,
    }
}

/// True when the error was caused by the reader of stdout going away.
pub fn is_broken_pipe(error: &anyhow::Error) -> bool {
    error
        .chain()
        .filter_map(|cause| cause.downcast_ref::<io::Error>())
        .any(|e| e.kind() == io::ErrorKind::BrokenPipe)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;
    use mediascan_core::MediaError;

    #[test]
    fn test_broken_pipe_found_through_context() {
        let write_error = MediaError::WriteError(io::Error::from(io::ErrorKind::BrokenPipe));
        let error = Err::<(), _>(write_error).context("Failed to write report").unwrap_err();

        assert!(is_broken_pipe(&error));
    }

    #[test]
    fn test_other_io_errors_are_not_broken_pipe() {
        let write_error = MediaError::WriteError(io::Error::from(io::ErrorKind::PermissionDenied));
        let error = Err::<(), _>(write_error).context("Failed to write report").unwrap_err();

        assert!(!is_broken_pipe(&error));
        assert!(!is_broken_pipe(&anyhow::anyhow!("unrelated")));
    }
}
