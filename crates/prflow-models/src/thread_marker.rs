/// Text of the root chat message of a pull request thread, `<repo>-<number>`.
///
/// Threads are discovered by exact match on this text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ThreadMarker(String);

impl ThreadMarker {
    pub fn new(repository_name: &str, number: u64) -> Self {
        Self(format!("{repository_name}-{number}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn matches(&self, text: &str) -> bool {
        self.0 == text
    }
}

impl std::fmt::Display for ThreadMarker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<ThreadMarker> for String {
    fn from(marker: ThreadMarker) -> Self {
        marker.0
    }
}
