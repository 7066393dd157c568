//! Module and package versions.
//!
//! Versions follow the `major.minor.micro[.qualifier]` layout used by module
//! manifests. Missing numeric segments default to zero, so `"1"` and
//! `"1.0.0"` compare equal. The qualifier is compared lexically.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Deserializer};

/// An ordered, comparable version.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub micro: u64,
    pub qualifier: String,
}

impl Version {
    pub fn new(major: u64, minor: u64, micro: u64) -> Self {
        Self {
            major,
            minor,
            micro,
            qualifier: String::new(),
        }
    }
}

impl FromStr for Version {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            bail!("Version string is empty");
        }

        let mut parts = s.splitn(4, '.');
        let mut numeric = [0u64; 3];
        for (index, slot) in numeric.iter_mut().enumerate() {
            match parts.next() {
                Some(part) => {
                    *slot = part.parse().with_context(|| {
                        format!("Invalid segment {} in version '{}'", index + 1, s)
                    })?;
                }
                None => break,
            }
        }

        let qualifier = parts.next().unwrap_or_default().to_string();
        if s.matches('.').count() >= 3 && qualifier.is_empty() {
            bail!("Empty qualifier in version '{}'", s);
        }

        Ok(Self {
            major: numeric[0],
            minor: numeric[1],
            micro: numeric[2],
            qualifier,
        })
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.micro)?;
        if !self.qualifier.is_empty() {
            write!(f, ".{}", self.qualifier)?;
        }
        Ok(())
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.major
            .cmp(&other.major)
            .then(self.minor.cmp(&other.minor))
            .then(self.micro.cmp(&other.micro))
            .then_with(|| self.qualifier.cmp(&other.qualifier))
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<'de> Deserialize<'de> for Version {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_version() {
        let v: Version = "1.2.3.SNAPSHOT".parse().unwrap();
        assert_eq!(
            v,
            Version {
                qualifier: "SNAPSHOT".to_string(),
                ..Version::new(1, 2, 3)
            }
        );
        assert_eq!(v.to_string(), "1.2.3.SNAPSHOT");
    }

    #[test]
    fn test_parse_short_version_pads_with_zero() {
        let v: Version = "2".parse().unwrap();
        assert_eq!(v, Version::new(2, 0, 0));
        assert_eq!(v.to_string(), "2.0.0");

        let v: Version = "1.5".parse().unwrap();
        assert_eq!(v.to_string(), "1.5.0");
    }

    #[test]
    fn test_qualifier_may_contain_dots() {
        let v: Version = "1.0.0.rc.1".parse().unwrap();
        assert_eq!(v.qualifier, "rc.1");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("".parse::<Version>().is_err());
        assert!("abc".parse::<Version>().is_err());
        assert!("1.x.0".parse::<Version>().is_err());
        assert!("1.0.0.".parse::<Version>().is_err());
    }

    #[test]
    fn test_ordering() {
        let v1: Version = "1.0.0".parse().unwrap();
        let v2: Version = "1.10.0".parse().unwrap();
        let v3: Version = "1.2.0".parse().unwrap();
        let q: Version = "1.0.0.beta".parse().unwrap();

        assert!(v1 < v3);
        assert!(v3 < v2); // numeric, not lexical
        assert!(v1 < q); // any qualifier sorts after none
    }

    #[test]
    fn test_deserialize_from_string() {
        let v: Version = serde_json::from_str("\"3.1.4\"").unwrap();
        assert_eq!(v, Version::new(3, 1, 4));
        assert!(serde_json::from_str::<Version>("\"3.x\"").is_err());
        assert!(serde_json::from_str::<Version>("3").is_err());
    }
}
