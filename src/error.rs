use thiserror::Error;

#[derive(Debug, Error)]
pub enum SiftError {
    #[error("no input: pipe the items to choose from into sift, one per line")]
    NoInput,
    #[error("unknown log level {0:?} (expected off, error, warn, info, debug or trace)")]
    UnknownLogLevel(String),
}
