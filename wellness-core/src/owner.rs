use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Identity used by single-user deployments when none is configured
pub const DEFAULT_OWNER_ID: &str = "550e8400-e29b-41d4-a716-446655440000";

/// Identity all weight, food and checklist records are scoped to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OwnerId(Uuid);

impl OwnerId {
    pub fn new(id: Uuid) -> Self {
        Self(id)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    pub(crate) fn as_value(&self) -> serde_json::Value {
        serde_json::Value::from(self.0.to_string())
    }
}

impl Default for OwnerId {
    fn default() -> Self {
        Self(Uuid::from_u128(0x550e8400_e29b_41d4_a716_446655440000))
    }
}

impl fmt::Display for OwnerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for OwnerId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim()).map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_constant() {
        assert_eq!(OwnerId::default().to_string(), DEFAULT_OWNER_ID);
        assert_eq!(DEFAULT_OWNER_ID.parse::<OwnerId>().unwrap(), OwnerId::default());
    }

    #[test]
    fn test_rejects_malformed_id() {
        assert!("not-a-uuid".parse::<OwnerId>().is_err());
    }
}
