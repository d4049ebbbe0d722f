use std::net::IpAddr;

/// Classification of a single raw input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputLine {
    /// Blank line or `#` comment.
    Skipped,
    Invalid(String),
    Address { text: String, ip: IpAddr },
}

impl InputLine {
    pub fn classify(line: &str) -> Self {
        let text = line.trim();
        if text.is_empty() || text.starts_with('#') {
            return Self::Skipped;
        }

        match text.parse::<IpAddr>() {
            Ok(ip) => Self::Address {
                text: text.to_string(),
                ip,
            },
            Err(_) => Self::Invalid(text.to_string()),
        }
    }

    pub fn is_address(&self) -> bool {
        matches!(self, Self::Address { .. })
    }
}

/// Returns true when the trimmed line is a syntactically valid IPv4 or IPv6
/// address. Blank lines and `#` comments are never valid.
pub fn is_valid_address(line: &str) -> bool {
    InputLine::classify(line).is_address()
}
