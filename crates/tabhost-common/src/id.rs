use serde::{Deserialize, Serialize};
use std::fmt;

/// Eight hex digits taken from a v4 uuid.
fn random_suffix() -> String {
    let mut simple = uuid::Uuid::new_v4().simple().to_string();
    simple.truncate(8);
    simple
}

/// Opaque tab identifier: creation time in milliseconds plus a random
/// suffix. Unique within a session, not globally.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TabId(String);

impl TabId {
    pub fn new() -> Self {
        let millis = chrono::Utc::now().timestamp_millis();
        Self(format!("tab-{millis}-{}", random_suffix()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for TabId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&str> for TabId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for TabId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suffix_is_short_hex() {
        let suffix = random_suffix();
        assert_eq!(suffix.len(), 8);
        assert!(suffix.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn tab_id_has_time_and_suffix() {
        let id = TabId::new();
        let parts: Vec<&str> = id.as_str().split('-').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "tab");
        assert!(parts[1].parse::<i64>().is_ok());
        assert_eq!(parts[2].len(), 8);
    }

    #[test]
    fn tab_ids_do_not_collide() {
        use std::collections::HashSet;
        let ids: HashSet<TabId> = (0..500).map(|_| TabId::new()).collect();
        assert_eq!(ids.len(), 500);
    }

    #[test]
    fn tab_id_serializes_as_plain_string() {
        let id = TabId::from("tab-1-abcd0123");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"tab-1-abcd0123\"");
        let back: TabId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn tab_id_display() {
        let id = TabId::from("tab-7-00ff00ff");
        assert_eq!(id.to_string(), "tab-7-00ff00ff");
    }
}
