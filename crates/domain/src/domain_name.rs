use std::fmt;

/// Longest label the wire format can carry.
pub const MAX_LABEL_LEN: usize = 63;

/// A fully qualified name kept as its raw labels.
///
/// Labels are arbitrary bytes: a label may contain `.` or bytes that are not
/// UTF-8, and those survive a decode/encode round trip untouched. Equality is
/// byte-exact, so it is case-sensitive. The text form (labels joined by `.`
/// with a trailing `.`, the root being `.`) is for matching and logging only
/// and is lossy for such labels.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct DomainName {
    labels: Vec<Vec<u8>>,
}

impl DomainName {
    pub fn root() -> Self {
        Self { labels: Vec::new() }
    }

    pub fn from_labels<I, L>(labels: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: AsRef<[u8]>,
    {
        Self {
            labels: labels
                .into_iter()
                .map(|label| label.as_ref().to_vec())
                .collect(),
        }
    }

    /// Splits dot-separated text into labels. The trailing `.` is optional;
    /// `""` and `"."` are the root.
    pub fn parse(text: &str) -> Self {
        let trimmed = text.strip_suffix('.').unwrap_or(text);
        if trimmed.is_empty() {
            return Self::root();
        }
        Self::from_labels(trimmed.split('.'))
    }

    pub fn labels(&self) -> impl Iterator<Item = &[u8]> + '_ {
        self.labels.iter().map(Vec::as_slice)
    }

    pub fn num_labels(&self) -> usize {
        self.labels.len()
    }

    pub fn is_root(&self) -> bool {
        self.labels.is_empty()
    }
}

impl fmt::Display for DomainName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.labels.is_empty() {
            return f.write_str(".");
        }
        for label in &self.labels {
            write!(f, "{}.", String::from_utf8_lossy(label))?;
        }
        Ok(())
    }
}

impl fmt::Debug for DomainName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("DomainName").field(&self.labels).finish()
    }
}

impl From<&str> for DomainName {
    fn from(text: &str) -> Self {
        Self::parse(text)
    }
}

impl From<String> for DomainName {
    fn from(text: String) -> Self {
        Self::parse(&text)
    }
}

impl PartialEq<str> for DomainName {
    fn eq(&self, other: &str) -> bool {
        *self == Self::parse(other)
    }
}

impl PartialEq<&str> for DomainName {
    fn eq(&self, other: &&str) -> bool {
        *self == Self::parse(other)
    }
}
