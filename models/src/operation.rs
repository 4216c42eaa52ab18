use serde::Serialize;

/// A remote operation: a JSON payload bound to a fixed endpoint path.
pub trait Operation: Serialize {
    /// Absolute path on the service, e.g. `/api/scrape/`.
    const ENDPOINT: &'static str;

    /// Short name used in log lines.
    const NAME: &'static str;
}
