//! Station identifier type.

use std::fmt;

use serde::Serialize;

/// Error returned when parsing an invalid station id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station id: {reason}")]
pub struct InvalidStationId {
    reason: &'static str,
}

/// A station key such as `M1A1` or `B1A13`.
///
/// Ids are the line-scoped keys the network loader assigns, and this type
/// guarantees that any `StationId` value is usable as one: non-empty, with
/// no whitespace.
///
/// # Examples
///
/// ```
/// use metro_planner::domain::StationId;
///
/// let yenikapi = StationId::parse("M1A1").unwrap();
/// assert_eq!(yenikapi.as_str(), "M1A1");
///
/// // Empty keys are rejected
/// assert!(StationId::parse("").is_err());
///
/// // Whitespace is rejected
/// assert!(StationId::parse("M1 A1").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct StationId(String);

impl StationId {
    /// Parse a station id from a string.
    ///
    /// The input must be non-empty and contain no whitespace.
    pub fn parse(s: &str) -> Result<Self, InvalidStationId> {
        if s.is_empty() {
            return Err(InvalidStationId {
                reason: "must not be empty",
            });
        }

        if s.chars().any(char::is_whitespace) {
            return Err(InvalidStationId {
                reason: "must not contain whitespace",
            });
        }

        Ok(StationId(s.to_string()))
    }

    /// Returns the station id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationId({})", self.0)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_ids() {
        assert!(StationId::parse("M1A1").is_ok());
        assert!(StationId::parse("B1A43").is_ok());
        assert!(StationId::parse("X").is_ok());
        assert!(StationId::parse("depot-7").is_ok());
    }

    #[test]
    fn reject_empty() {
        assert!(StationId::parse("").is_err());
    }

    #[test]
    fn reject_whitespace() {
        assert!(StationId::parse("M1 A1").is_err());
        assert!(StationId::parse(" M1A1").is_err());
        assert!(StationId::parse("M1A1\t").is_err());
        assert!(StationId::parse("M1\nA1").is_err());
    }

    #[test]
    fn as_str_roundtrip() {
        let id = StationId::parse("M2A7").unwrap();
        assert_eq!(id.as_str(), "M2A7");
    }

    #[test]
    fn display() {
        let id = StationId::parse("M4A2").unwrap();
        assert_eq!(format!("{}", id), "M4A2");
    }

    #[test]
    fn debug() {
        let id = StationId::parse("M5A1").unwrap();
        assert_eq!(format!("{:?}", id), "StationId(M5A1)");
    }

    #[test]
    fn equality() {
        let a = StationId::parse("M1A1").unwrap();
        let b = StationId::parse("M1A1").unwrap();
        let c = StationId::parse("M1A2").unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn hash_consistent_with_eq() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(StationId::parse("M1A1").unwrap());
        assert!(set.contains(&StationId::parse("M1A1").unwrap()));
        assert!(!set.contains(&StationId::parse("M1A2").unwrap()));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Strategy for generating valid station ids: non-empty, no whitespace
    fn valid_id_string() -> impl Strategy<Value = String> {
        proptest::string::string_regex("[A-Za-z0-9-]{1,8}").unwrap()
    }

    proptest! {
        /// Roundtrip: parse then as_str returns the original
        #[test]
        fn roundtrip(s in valid_id_string()) {
            let id = StationId::parse(&s).unwrap();
            prop_assert_eq!(id.as_str(), s.as_str());
        }

        /// Any valid id can be parsed
        #[test]
        fn valid_always_parses(s in valid_id_string()) {
            prop_assert!(StationId::parse(&s).is_ok());
        }

        /// Ids containing whitespace are always rejected
        #[test]
        fn whitespace_rejected(s in "[A-Z0-9]{0,3} [A-Z0-9]{0,3}") {
            prop_assert!(StationId::parse(&s).is_err());
        }
    }
}
