//! Strongly-typed identifiers for domain entities
//!
//! Bags, passengers and claims are keyed by natural identifiers issued by
//! airline systems (bag tags, passenger ids, claim references). These are
//! wrapped in newtypes that reject blank input, so a `BagTag` can never be
//! passed where a `PaxId` is expected. Checkpoint ids are either issued by
//! the scanning station (`"S01"`) or generated as time-ordered UUIDs.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::CoreError;

macro_rules! define_key {
    ($name:ident, $label:literal) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Creates a key from a raw value, trimming surrounding whitespace
            pub fn new(value: impl Into<String>) -> Result<Self, CoreError> {
                let value = value.into();
                let trimmed = value.trim();
                if trimmed.is_empty() {
                    return Err(CoreError::validation(concat!($label, " cannot be empty")));
                }
                Ok(Self(trimmed.to_string()))
            }

            /// Returns the key as a string slice
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl FromStr for $name {
            type Err = CoreError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }

        impl TryFrom<String> for $name {
            type Error = CoreError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = CoreError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(key: $name) -> String {
                key.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

// Natural keys issued by airline systems
define_key!(BagTag, "Bag tag");
define_key!(PaxId, "Passenger id");
define_key!(ClaimId, "Claim id");

// Scan ids: issued by station scanners, or generated for scans recorded here
define_key!(CheckpointId, "Checkpoint id");

impl CheckpointId {
    /// Generates a time-ordered id of the form `CHK-<uuid v7>`
    pub fn generate() -> Self {
        Self(format!("CHK-{}", Uuid::now_v7()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bag_tag_trims_input() {
        let tag = BagTag::new("  BAG101 ").unwrap();
        assert_eq!(tag.as_str(), "BAG101");
        assert_eq!(tag.to_string(), "BAG101");
    }

    #[test]
    fn test_blank_key_rejected() {
        assert!(PaxId::new("   ").is_err());
        assert!("".parse::<ClaimId>().is_err());
    }

    #[test]
    fn test_generated_checkpoint_id() {
        let id = CheckpointId::generate();
        assert!(id.as_str().starts_with("CHK-"));
        assert_ne!(id, CheckpointId::generate());
    }

    #[test]
    fn test_station_checkpoint_id() {
        let id: CheckpointId = " S01 ".parse().unwrap();
        assert_eq!(id.as_str(), "S01");
    }
}
