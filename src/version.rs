//! # Release Versions
//!
//! This module provides the version model used to stamp aggregated
//! documentation and packaged artifacts. A version has the shape
//! `MAJOR.MINOR.MICRO[-TAG]`; any tag marks the version as a pre-release,
//! and pre-releases are always rendered with the `-SNAPSHOT` suffix.
//!
//! ## Ordering
//!
//! Versions are compared by `(major, minor, micro)` only. A release and the
//! corresponding pre-release compare as equal, which is why `Version` offers
//! [`Version::compare`] instead of implementing `Ord`: the derived equality
//! still distinguishes the pre-release flag.
//!
//! ## Example
//!
//! ```
//! use doc_aggregate::version::Version;
//!
//! let version: Version = "8.1.0-SNAPSHOT".parse().unwrap();
//! assert!(version.is_prerelease());
//! assert_eq!(version.to_string(), "8.1.0-SNAPSHOT");
//! assert_eq!(version.minor_series(), "8.1");
//! assert_eq!(version.stamp("project", Some("jar")), "project-8.1.0-SNAPSHOT.jar");
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Error, Result};

/// Suffix appended to the display form of every pre-release version.
pub const SNAPSHOT_SUFFIX: &str = "-SNAPSHOT";

/// A three-component release version with an optional pre-release marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Version {
    major: u32,
    minor: u32,
    micro: u32,
    prerelease: bool,
}

impl Version {
    /// Create a version from its components.
    pub fn new(major: u32, minor: u32, micro: u32, prerelease: bool) -> Self {
        Self {
            major,
            minor,
            micro,
            prerelease,
        }
    }

    /// Parse a `MAJOR.MINOR.MICRO[-TAG]` string.
    ///
    /// Only ASCII digits are accepted in the numeric segments, so signs and
    /// whitespace are rejected. The tag must be non-empty and may not contain
    /// a further `-`.
    pub fn parse(text: &str) -> Result<Self> {
        let format_error = |message: String| Error::Format {
            input: text.to_string(),
            message,
        };

        let segments: Vec<&str> = text.split('.').collect();
        if segments.len() != 3 {
            return Err(format_error(format!(
                "expected 3 dot-separated segments, found {}",
                segments.len()
            )));
        }

        let (micro_text, prerelease) = match segments[2].split_once('-') {
            Some((micro, tag)) => {
                if tag.is_empty() || tag.contains('-') {
                    return Err(format_error(format!(
                        "invalid pre-release tag '{}'",
                        tag
                    )));
                }
                (micro, true)
            }
            None => (segments[2], false),
        };

        let number = |name: &str, segment: &str| -> Result<u32> {
            if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
                return Err(format_error(format!(
                    "{} segment '{}' is not a non-negative integer",
                    name, segment
                )));
            }
            segment
                .parse()
                .map_err(|e| format_error(format!("{} segment '{}': {}", name, segment, e)))
        };

        Ok(Self {
            major: number("major", segments[0])?,
            minor: number("minor", segments[1])?,
            micro: number("micro", micro_text)?,
            prerelease,
        })
    }

    pub fn major(&self) -> u32 {
        self.major
    }

    pub fn minor(&self) -> u32 {
        self.minor
    }

    pub fn micro(&self) -> u32 {
        self.micro
    }

    pub fn is_prerelease(&self) -> bool {
        self.prerelease
    }

    /// Compare by `(major, minor, micro)`, ignoring the pre-release flag.
    pub fn compare(&self, other: &Version) -> Ordering {
        self.major
            .cmp(&other.major)
            .then_with(|| self.minor.cmp(&other.minor))
            .then_with(|| self.micro.cmp(&other.micro))
    }

    /// The `MAJOR.MINOR` release series, used to key documentation
    /// cross-links between releases.
    pub fn minor_series(&self) -> String {
        format!("{}.{}", self.major, self.minor)
    }

    /// Stamp an artifact name with this version.
    ///
    /// `stamp("core", Some("jar"))` yields `core-1.2.3.jar`; without an
    /// extension the result is just `core-1.2.3`.
    pub fn stamp(&self, base: &str, extension: Option<&str>) -> String {
        match extension {
            Some(ext) => format!("{}-{}.{}", base, self, ext),
            None => format!("{}-{}", base, self),
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.micro)?;
        if self.prerelease {
            f.write_str(SNAPSHOT_SUFFIX)?;
        }
        Ok(())
    }
}

impl FromStr for Version {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Version::parse(s)
    }
}

impl Serialize for Version {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Version {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Version::parse(&text).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parse_release() {
        let version = Version::parse("1.2.3").unwrap();
        assert_eq!(version, Version::new(1, 2, 3, false));
    }

    #[test]
    fn test_parse_snapshot() {
        let version = Version::parse("1.2.3-SNAPSHOT").unwrap();
        assert_eq!(version, Version::new(1, 2, 3, true));
    }

    #[test]
    fn test_parse_other_tag_is_prerelease() {
        let version = Version::parse("4.0.0-rc1").unwrap();
        assert!(version.is_prerelease());
        assert_eq!(version.to_string(), "4.0.0-SNAPSHOT");
    }

    #[test]
    fn test_parse_rejects_wrong_segment_count() {
        assert!(matches!(Version::parse("1.2"), Err(Error::Format { .. })));
        assert!(matches!(Version::parse("1.2.3.4"), Err(Error::Format { .. })));
        assert!(matches!(Version::parse(""), Err(Error::Format { .. })));
    }

    #[test]
    fn test_parse_rejects_non_numeric() {
        assert!(matches!(Version::parse("1.2.x"), Err(Error::Format { .. })));
        assert!(matches!(Version::parse("a.2.3"), Err(Error::Format { .. })));
        assert!(matches!(Version::parse("1.b.3"), Err(Error::Format { .. })));
        assert!(matches!(Version::parse("+1.2.3"), Err(Error::Format { .. })));
        assert!(matches!(Version::parse("-1.2.3"), Err(Error::Format { .. })));
        assert!(matches!(Version::parse("1..3"), Err(Error::Format { .. })));
    }

    #[test]
    fn test_parse_rejects_bad_tags() {
        assert!(matches!(Version::parse("1.2.3-"), Err(Error::Format { .. })));
        assert!(matches!(Version::parse("1.2.3-a-b"), Err(Error::Format { .. })));
        assert!(matches!(Version::parse("1.2-SNAPSHOT.3"), Err(Error::Format { .. })));
    }

    #[test]
    fn test_compare_ignores_prerelease() {
        let release = Version::new(1, 2, 3, false);
        let snapshot = Version::new(1, 2, 3, true);
        assert_eq!(release.compare(&snapshot), Ordering::Equal);
        assert_ne!(release, snapshot);
    }

    #[test]
    fn test_compare_short_circuits() {
        let a = Version::new(2, 0, 0, false);
        let b = Version::new(1, 9, 9, false);
        assert_eq!(a.compare(&b), Ordering::Greater);
        assert_eq!(b.compare(&a), Ordering::Less);
        assert_eq!(
            Version::new(1, 2, 3, false).compare(&Version::new(1, 2, 4, false)),
            Ordering::Less
        );
    }

    #[test]
    fn test_minor_series() {
        assert_eq!(Version::new(8, 1, 0, true).minor_series(), "8.1");
    }

    #[test]
    fn test_stamp() {
        let version = Version::new(2, 0, 1, false);
        assert_eq!(version.stamp("core", Some("jar")), "core-2.0.1.jar");
        assert_eq!(version.stamp("core", None), "core-2.0.1");
    }

    #[test]
    fn test_serde_as_string() {
        let version: Version = serde_yaml::from_str("\"3.1.4-SNAPSHOT\"").unwrap();
        assert_eq!(version, Version::new(3, 1, 4, true));
        assert_eq!(serde_json::to_string(&version).unwrap(), "\"3.1.4-SNAPSHOT\"");
        assert!(serde_yaml::from_str::<Version>("\"3.1\"").is_err());
    }

    fn version_strategy() -> impl Strategy<Value = Version> {
        (0u32..50, 0u32..50, 0u32..50, any::<bool>())
            .prop_map(|(major, minor, micro, pre)| Version::new(major, minor, micro, pre))
    }

    proptest! {
        /// Property: parse followed by display round-trips release versions
        #[test]
        fn parse_display_round_trip(major in any::<u32>(), minor in any::<u32>(), micro in any::<u32>()) {
            let text = format!("{}.{}.{}", major, minor, micro);
            let version = Version::parse(&text).unwrap();
            prop_assert_eq!(version.to_string(), text);
        }

        /// Property: compare is antisymmetric
        #[test]
        fn compare_is_antisymmetric(a in version_strategy(), b in version_strategy()) {
            prop_assert_eq!(a.compare(&b), b.compare(&a).reverse());
        }

        /// Property: compare is transitive
        #[test]
        fn compare_is_transitive(a in version_strategy(), b in version_strategy(), c in version_strategy()) {
            if a.compare(&b) != Ordering::Greater && b.compare(&c) != Ordering::Greater {
                prop_assert_ne!(a.compare(&c), Ordering::Greater);
            }
        }
    }
}
