//! Identifier types for the facility registry
//!
//! This module contains the facility identifier and the monotonic sequence that
//! issues it. Identifiers render as `BLD-<n>`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

const FACILITY_PREFIX: &str = "BLD-";

/// Unique identifier for a facility within one registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FacilityId(pub u64);

impl FacilityId {
    /// Sequence number backing this identifier
    pub fn sequence(self) -> u64 {
        self.0
    }
}

impl fmt::Display for FacilityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", FACILITY_PREFIX, self.0)
    }
}

impl FromStr for FacilityId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.trim().strip_prefix(FACILITY_PREFIX).unwrap_or(s.trim());
        digits
            .parse::<u64>()
            .map(FacilityId)
            .map_err(|_| format!("Invalid facility id: {}", s))
    }
}

impl Serialize for FacilityId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for FacilityId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Monotonic source of [`FacilityId`]s
///
/// Identifiers are never handed out twice, so an id removed from a registry
/// is not reused by facilities created later by the same sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdSequence {
    next: u64,
}

impl IdSequence {
    /// Create a sequence whose first id is `BLD-1`
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Issue the next identifier
    pub fn next_id(&mut self) -> FacilityId {
        let id = FacilityId(self.next);
        self.next += 1;
        id
    }

    /// Number of identifiers issued so far
    pub fn issued(&self) -> u64 {
        self.next - 1
    }
}

impl Default for IdSequence {
    fn default() -> Self {
        Self::new()
    }
}
