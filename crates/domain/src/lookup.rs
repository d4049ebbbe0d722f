use std::collections::HashMap;
use std::fmt;

/// How a single reverse lookup ended. Only used for diagnostics: every
/// non-`Resolved` outcome falls back to the address itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    Resolved,
    NoRecord,
    Failed(String),
    TimedOut,
}

impl LookupOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Resolved => "resolved",
            Self::NoRecord => "no_record",
            Self::Failed(_) => "failed",
            Self::TimedOut => "timed_out",
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved)
    }
}

impl fmt::Display for LookupOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Failed(reason) => write!(f, "failed: {}", reason),
            other => f.write_str(other.as_str()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupResult {
    pub address: String,
    pub resolved_name: String,
    pub outcome: LookupOutcome,
}

impl LookupResult {
    pub fn resolved(address: impl Into<String>, hostname: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            resolved_name: hostname.into(),
            outcome: LookupOutcome::Resolved,
        }
    }

    /// Builds a result whose name is the address itself.
    pub fn fallback(address: impl Into<String>, outcome: LookupOutcome) -> Self {
        let address = address.into();
        Self {
            resolved_name: address.clone(),
            address,
            outcome,
        }
    }
}

/// Address to resolved-name mapping, assembled once all lookups reported.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultTable {
    names: HashMap<String, String>,
}

impl ResultTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, result: LookupResult) {
        self.names.insert(result.address, result.resolved_name);
    }

    /// Resolved name for `address`, or the address itself when absent.
    pub fn name_for<'a>(&'a self, address: &'a str) -> &'a str {
        self.names
            .get(address)
            .map(String::as_str)
            .unwrap_or(address)
    }

    pub fn contains(&self, address: &str) -> bool {
        self.names.contains_key(address)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.names.iter().map(|(a, n)| (a.as_str(), n.as_str()))
    }
}

impl FromIterator<LookupResult> for ResultTable {
    fn from_iter<I: IntoIterator<Item = LookupResult>>(iter: I) -> Self {
        let mut table = Self::new();
        for result in iter {
            table.insert(result);
        }
        table
    }
}
