use super::error::CommandError;
use std::collections::HashMap;
use std::process::Command;

/// Abstraction for command execution to enable testing without real commands
pub trait CommandRunner {
    /// Run `name` with `args` and return its standard output
    fn run(&self, name: &str, args: &[&str]) -> Result<Vec<u8>, CommandError>;
}

/// Real command runner using std::process::Command
#[derive(Debug, Clone, Copy, Default)]
pub struct RealCommandRunner;

impl CommandRunner for RealCommandRunner {
    fn run(&self, name: &str, args: &[&str]) -> Result<Vec<u8>, CommandError> {
        tracing::debug!(command = name, ?args, "running command");

        let output = Command::new(name)
            .args(args)
            .output()
            .map_err(|e| {
                tracing::warn!(command = name, error = %e, "command could not be started");
                CommandError::Spawn(e)
            })?;

        if output.status.success() {
            Ok(output.stdout)
        } else {
            tracing::warn!(command = name, status = %output.status, "command failed");
            Err(CommandError::failed(
                name,
                output.status,
                output.stdout,
                output.stderr,
            ))
        }
    }
}

/// Configurable stand-in for [`RealCommandRunner`]
///
/// Outputs in `return_output_for_command` are keyed by the full command
/// line joined with single spaces, e.g. `"zpool list -H"`.
#[derive(Default)]
pub struct MockCommandRunner {
    pub throw_error: bool,
    pub return_output: Option<Vec<u8>>,
    pub return_output_for_command: HashMap<String, Vec<u8>>,
    /// Called with the program name and arguments before output is chosen
    pub validate: Option<Box<dyn Fn(&str, &[&str])>>,
}

impl MockCommandRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_output(mut self, output: impl Into<Vec<u8>>) -> Self {
        self.return_output = Some(output.into());
        self
    }

    pub fn with_output_for(mut self, command_line: &str, output: impl Into<Vec<u8>>) -> Self {
        self.return_output_for_command
            .insert(command_line.to_string(), output.into());
        self
    }

    fn command_line(name: &str, args: &[&str]) -> String {
        std::iter::once(name)
            .chain(args.iter().copied())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl CommandRunner for MockCommandRunner {
    fn run(&self, name: &str, args: &[&str]) -> Result<Vec<u8>, CommandError> {
        if self.throw_error {
            tracing::trace!(command = name, "mock command forced to fail");
            return Err(CommandError::Simulated);
        }

        if let Some(validate) = &self.validate {
            validate(name, args);
        }

        if let Some(output) = self
            .return_output_for_command
            .get(&Self::command_line(name, args))
        {
            return Ok(output.clone());
        }

        Ok(self.return_output.clone().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_real_run_captures_stdout() {
        let output = RealCommandRunner.run("echo", &["hello", "world"]).unwrap();
        assert_eq!(output, b"hello world\n");
    }

    #[test]
    fn test_real_run_keeps_output_on_non_zero_exit() {
        let err = RealCommandRunner
            .run("sh", &["-c", "printf partial; printf oops >&2; exit 3"])
            .unwrap_err();

        match &err {
            CommandError::Failed {
                command,
                status,
                stderr,
                ..
            } => {
                assert_eq!(command, "sh");
                assert_eq!(status.code(), Some(3));
                assert_eq!(stderr, b"oops");
            }
            other => panic!("expected a failed run, got {:?}", other),
        }
        assert_eq!(err.stdout(), Some(&b"partial"[..]));
    }

    #[test]
    fn test_real_run_missing_binary() {
        let err = RealCommandRunner
            .run("definitely-not-a-real-binary-4821", &[])
            .unwrap_err();

        match err {
            CommandError::Spawn(source) => {
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound)
            }
            other => panic!("expected a spawn error, got {:?}", other),
        }
    }

    #[test]
    fn test_mock_throw_error() {
        let mock = MockCommandRunner {
            throw_error: true,
            ..MockCommandRunner::new().with_output("ignored")
        };
        assert!(matches!(mock.run("ls", &[]), Err(CommandError::Simulated)));
    }

    #[test]
    fn test_mock_per_command_output_beats_fixed_output() {
        let mock = MockCommandRunner::new()
            .with_output("fallback")
            .with_output_for("zpool list -H", "data\n");

        assert_eq!(mock.run("zpool", &["list", "-H"]).unwrap(), b"data\n");
        assert_eq!(mock.run("zpool", &["status"]).unwrap(), b"fallback");
    }

    #[test]
    fn test_mock_unconfigured_returns_empty_output() {
        assert!(MockCommandRunner::new().run("uname", &["-a"]).unwrap().is_empty());
    }

    #[test]
    fn test_mock_validation_sees_arguments() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let seen = Rc::clone(&calls);
        let mock = MockCommandRunner {
            validate: Some(Box::new(move |name: &str, args: &[&str]| {
                seen.borrow_mut().push(format!("{} {:?}", name, args))
            })),
            ..MockCommandRunner::default()
        };

        mock.run("git", &["status", "--short"]).unwrap();
        assert_eq!(*calls.borrow(), vec![r#"git ["status", "--short"]"#]);
    }
}
