use thiserror::Error;

/// Input validation failures raised before any extraction runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    #[error("invalid time format: '{0}' (expected m:ss or h:mm:ss, e.g. 1:30)")]
    InvalidTimeFormat(String),

    #[error("invalid range: start {start}s must be before end {end}s")]
    InvalidRange { start: u64, end: u64 },
}

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("failed to launch '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed writing to '{program}': {source}")]
    Write {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("'{program}' exited with {status}")]
    Exit { program: String, status: String },

    #[error("no clipboard command configured")]
    NoCommands,

    #[error("all clipboard commands failed (last: {last})")]
    AllFailed { last: String },
}
