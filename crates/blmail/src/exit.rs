use std::process::ExitCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ExitStatus {
    Success,
    Error,
}

/// Outcome of a command: a status plus an optional summary line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exit {
    status: ExitStatus,
    message: Option<String>,
}

impl Exit {
    #[must_use]
    pub fn success() -> Self {
        Self {
            status: ExitStatus::Success,
            message: None,
        }
    }

    #[must_use]
    pub fn error() -> Self {
        Self {
            status: ExitStatus::Error,
            message: None,
        }
    }

    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status == ExitStatus::Success
    }

    /// Print the summary line, if any, and convert to a process exit code.
    ///
    /// Failures are reported on stderr so stdout stays machine-readable.
    pub fn report(self) -> ExitCode {
        match (self.status, self.message) {
            (ExitStatus::Success, Some(message)) => println!("{message}"),
            (ExitStatus::Error, Some(message)) => eprintln!("{message}"),
            (_, None) => {}
        }
        self.status.into()
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::SUCCESS,
            ExitStatus::Error => ExitCode::FAILURE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builders() {
        assert!(Exit::success().is_success());
        assert!(!Exit::error().with_message("Found 1 error.").is_success());
        assert_eq!(
            Exit::error().with_message("x").message.as_deref(),
            Some("x")
        );
    }
}
