use std::fmt;

/// Marker `p4 changes` prints for changelists that are not submitted yet.
pub const PENDING_MARKER: &str = "*pending*";

/// Raw text of one `p4 changes -l` entry. Nothing is parsed out of it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeRecord(pub String);

impl ChangeRecord {
    pub fn from_latin1(bytes: &[u8]) -> Self {
        Self(decode_latin1(bytes))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_pending(&self) -> bool {
        self.0.contains(PENDING_MARKER)
    }
}

/// ISO-8859-1 decoding: every byte maps to the code point of the same value,
/// so arbitrary bytes never fail to decode.
pub fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&byte| byte as char).collect()
}

impl From<&str> for ChangeRecord {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for ChangeRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_non_utf8_bytes() {
        let record = ChangeRecord::from_latin1(b"Change 7 by ren\xe9@ws \xff\xfe");
        assert_eq!(record.as_str(), "Change 7 by rené@ws ÿþ");
    }

    #[test]
    fn detects_pending_marker() {
        assert!(ChangeRecord::from("Change 101 on 2024/01/01 by alice@ws *pending*").is_pending());
        assert!(!ChangeRecord::from("Change 101 on 2024/01/01 by alice@ws").is_pending());
        assert!(!ChangeRecord::default().is_pending());
    }
}
