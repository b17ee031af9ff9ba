use std::process::ExitStatus;

/// Failure while enumerating constants through the interpreter subprocess.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    /// The probe script could not be materialized on disk.
    #[error("failed to write constants probe: {0}")]
    Probe(#[source] std::io::Error),

    /// The interpreter could not be spawned or its output not collected.
    #[error("failed to invoke interpreter `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The interpreter exited non-zero; stderr is carried for diagnostics.
    #[error("interpreter exited with {status}: {stderr}")]
    Interpreter { status: ExitStatus, stderr: String },

    /// The interpreter emitted bytes that are not valid UTF-8.
    #[error("interpreter output is not valid UTF-8")]
    Encoding(#[from] std::string::FromUtf8Error),
}

/// Violation of the single-assignment contract on a publish slot.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum SlotError {
    #[error("value already published")]
    AlreadyPublished,

    #[error("subscriber already installed")]
    AlreadySubscribed,
}
