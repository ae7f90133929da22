/// An external ledger/knowledge-graph publisher.
///
/// `publish` stores a JSON-like record and returns an opaque locator.
/// Failures must not abort the detection or consensus pipeline; callers
/// log them and continue unanchored.
pub trait LedgerPublisher: Send + Sync {
    /// Publish `record` and return its locator.
    fn publish(&self, record: &serde_json::Value) -> Result<String, String>;
}
