use std::io::Write;
use std::process::Command;

use tempfile::NamedTempFile;
use tracing::debug;

use crate::errors::ScanError;
use crate::templates;

/// Environment override for the interpreter program. Used by hermetic tests
/// to substitute a stub for the real `ruby`.
pub const INTERPRETER_ENV: &str = "AUTOIMPORT_RUBY";

/// A constant discovered in the target package, parsed from one CSV line of
/// probe output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constant {
    pub name: String,
    pub value: Option<String>,
}

/// Enumerates the constants a Ruby package defines by running the embedded
/// probe script in an interpreter subprocess.
#[derive(Debug, Clone)]
pub struct ConstantScanner {
    program: String,
}

impl ConstantScanner {
    /// Scanner using `ruby`, or the [`INTERPRETER_ENV`] override when set.
    pub fn new() -> Self {
        let program = std::env::var(INTERPRETER_ENV).unwrap_or_else(|_| "ruby".to_string());
        Self { program }
    }

    /// Scanner using an explicit interpreter program.
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Runs the probe against `package` under `base` and parses its output.
    ///
    /// Blocks until the child exits; stdout is captured in full before any
    /// parsing happens. No retries and no timeout.
    pub fn scan(&self, base: &str, package: &str) -> Result<Vec<Constant>, ScanError> {
        let mut probe = NamedTempFile::new().map_err(ScanError::Probe)?;
        probe
            .write_all(templates::CONSTANTS_PROBE_RB.as_bytes())
            .map_err(ScanError::Probe)?;
        probe.flush().map_err(ScanError::Probe)?;

        debug!(
            program = %self.program,
            base,
            package,
            "invoking constants probe"
        );
        let output = Command::new(&self.program)
            .arg("--disable-did_you_mean")
            .arg("--disable-gems")
            .arg(probe.path())
            .arg(base)
            .arg(package)
            .output()
            .map_err(|source| ScanError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(ScanError::Interpreter {
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        let stdout = String::from_utf8(output.stdout)?;
        let constants = parse_constants(&stdout);
        debug!(count = constants.len(), package, "discovered constants");
        Ok(constants)
    }
}

impl Default for ConstantScanner {
    fn default() -> Self {
        Self::new()
    }
}

/// Parses probe stdout: one constant per non-empty line, name and value
/// separated by the first comma. A line without a comma (or with an empty
/// value field) yields a bare name.
pub fn parse_constants(stdout: &str) -> Vec<Constant> {
    stdout
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| match line.split_once(',') {
            Some((name, value)) if !value.is_empty() => Constant {
                name: name.to_string(),
                value: Some(value.to_string()),
            },
            Some((name, _)) => Constant {
                name: name.to_string(),
                value: None,
            },
            None => Constant {
                name: line.to_string(),
                value: None,
            },
        })
        .collect()
}
