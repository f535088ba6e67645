use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::{Result, VbumpError};

/// Semantic version representation (major.minor.patch, no pre-release or build metadata)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

fn numeric_component() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[0-9]+$").expect("static regex is valid"))
}

impl Version {
    /// Create a new version
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
        }
    }

    /// Parse a version string of the exact form `X.Y.Z`.
    ///
    /// Every component must consist of ASCII digits only, so signs, whitespace,
    /// pre-release and build suffixes are all rejected.
    pub fn parse(version: &str) -> Result<Self> {
        let parts: Vec<&str> = version.split('.').collect();
        if parts.len() != 3 {
            return Err(VbumpError::invalid_version(
                version,
                format!("expected X.Y.Z, found {} component(s)", parts.len()),
            ));
        }

        let component = |name: &str, raw: &str| -> Result<u64> {
            if !numeric_component().is_match(raw) {
                return Err(VbumpError::invalid_version(
                    version,
                    format!("{} component '{}' is not a non-negative integer", name, raw),
                ));
            }
            raw.parse::<u64>().map_err(|_| {
                VbumpError::invalid_version(
                    version,
                    format!("{} component '{}' is out of range", name, raw),
                )
            })
        };

        Ok(Version {
            major: component("major", parts[0])?,
            minor: component("minor", parts[1])?,
            patch: component("patch", parts[2])?,
        })
    }

    /// Bump version according to bump kind.
    ///
    /// Lower tiers reset to zero; there is no carry between tiers.
    pub fn bump(&self, kind: BumpKind) -> Result<Self> {
        let overflow = || {
            VbumpError::invalid_version(self.to_string(), format!("{} component overflows", kind))
        };

        let bumped = match kind {
            BumpKind::Major => Version::new(self.major.checked_add(1).ok_or_else(overflow)?, 0, 0),
            BumpKind::Minor => Version::new(
                self.major,
                self.minor.checked_add(1).ok_or_else(overflow)?,
                0,
            ),
            BumpKind::Patch => Version::new(
                self.major,
                self.minor,
                self.patch.checked_add(1).ok_or_else(overflow)?,
            ),
        };
        Ok(bumped)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for Version {
    type Err = VbumpError;

    fn from_str(s: &str) -> Result<Self> {
        Version::parse(s)
    }
}

/// Which semantic-version tier to increment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BumpKind {
    Major,
    Minor,
    Patch,
}

impl fmt::Display for BumpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BumpKind::Major => "major",
            BumpKind::Minor => "minor",
            BumpKind::Patch => "patch",
        };
        f.write_str(name)
    }
}

impl FromStr for BumpKind {
    type Err = VbumpError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "major" => Ok(BumpKind::Major),
            "minor" => Ok(BumpKind::Minor),
            "patch" => Ok(BumpKind::Patch),
            _ => Err(VbumpError::InvalidBumpKind(s.to_string())),
        }
    }
}

/// Computes the next version for `current` under `kind`.
///
/// # Example
/// ```
/// use vbump::domain::{calculate_new_version, BumpKind, Version};
///
/// let next = calculate_new_version("1.2.3", BumpKind::Minor).unwrap();
/// assert_eq!(next, Version::new(1, 3, 0));
/// ```
pub fn calculate_new_version(current: &str, kind: BumpKind) -> Result<Version> {
    Version::parse(current)?.bump(kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_parse() {
        let v = Version::parse("1.2.3").unwrap();
        assert_eq!(v.major, 1);
        assert_eq!(v.minor, 2);
        assert_eq!(v.patch, 3);
    }

    #[test]
    fn test_version_parse_leading_zeros_normalized() {
        assert_eq!(Version::parse("01.002.3").unwrap(), Version::new(1, 2, 3));
    }

    #[test]
    fn test_version_parse_invalid() {
        for input in ["1.2", "1.2.3.4", "1.a.3", "", "v1.2.3", "+1.2.3", "1.-2.3", "1.2.3-beta", "1..3", " 1.2.3"] {
            match Version::parse(input) {
                Err(VbumpError::InvalidVersionFormat { version, .. }) => assert_eq!(version, input),
                other => panic!("expected InvalidVersionFormat for {:?}, got {:?}", input, other),
            }
        }
    }

    #[test]
    fn test_version_parse_out_of_range() {
        assert!(Version::parse("1.2.99999999999999999999999").is_err());
    }

    #[test]
    fn test_calculate_major() {
        assert_eq!(
            calculate_new_version("1.2.3", BumpKind::Major).unwrap(),
            Version::new(2, 0, 0)
        );
    }

    #[test]
    fn test_calculate_minor() {
        assert_eq!(
            calculate_new_version("1.2.3", BumpKind::Minor).unwrap(),
            Version::new(1, 3, 0)
        );
    }

    #[test]
    fn test_calculate_patch() {
        assert_eq!(
            calculate_new_version("1.2.3", BumpKind::Patch).unwrap(),
            Version::new(1, 2, 4)
        );
    }

    #[test]
    fn test_calculate_over_many_versions() {
        for (x, y, z) in [(0, 0, 0), (0, 9, 9), (10, 0, 41), (3, 14, 159)] {
            let current = format!("{}.{}.{}", x, y, z);
            assert_eq!(
                calculate_new_version(&current, BumpKind::Major).unwrap().to_string(),
                format!("{}.0.0", x + 1)
            );
            assert_eq!(
                calculate_new_version(&current, BumpKind::Minor).unwrap().to_string(),
                format!("{}.{}.0", x, y + 1)
            );
            assert_eq!(
                calculate_new_version(&current, BumpKind::Patch).unwrap().to_string(),
                format!("{}.{}.{}", x, y, z + 1)
            );
        }
    }

    #[test]
    fn test_bump_overflow_is_rejected() {
        let v = Version::new(1, 2, u64::MAX);
        assert!(v.bump(BumpKind::Patch).is_err());
        assert_eq!(v.bump(BumpKind::Minor).unwrap(), Version::new(1, 3, 0));
    }

    #[test]
    fn test_bump_kind_from_str() {
        assert_eq!("major".parse::<BumpKind>().unwrap(), BumpKind::Major);
        assert_eq!("Minor".parse::<BumpKind>().unwrap(), BumpKind::Minor);
        assert_eq!("PATCH".parse::<BumpKind>().unwrap(), BumpKind::Patch);
        assert!(matches!(
            "build".parse::<BumpKind>(),
            Err(VbumpError::InvalidBumpKind(kind)) if kind == "build"
        ));
    }

    #[test]
    fn test_version_display() {
        let v = Version::new(1, 2, 3);
        assert_eq!(v.to_string(), "1.2.3");
    }
}
