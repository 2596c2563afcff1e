/// In-memory, append-only log of past requests.
///
/// Entries are plain human-readable strings in call order. The history lives
/// only for the duration of the session; nothing is persisted across runs.
#[derive(Debug, Clone, Default)]
pub struct RequestHistory {
    entries: Vec<String>,
}

impl RequestHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, entry: impl Into<String>) {
        self.entries.push(entry.into());
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}
