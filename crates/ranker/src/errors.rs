use thiserror::Error;

/// Library-level error type.
///
/// The engine defaults missing fields and tolerates degenerate data, so the
/// only fatal condition is a record field carrying a fundamentally wrong type.
/// That one propagates — silently coercing it could mask upstream corruption.
#[derive(Debug, Error)]
pub enum RankerError {
    #[error("malformed project record at index {index}: {source}")]
    MalformedRecord {
        index: usize,
        #[source]
        source: serde_json::Error,
    },
}
