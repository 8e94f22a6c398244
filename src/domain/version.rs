use crate::error::{AutomatorError, Result};
use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

/// The three numeric components extracted from a `MAJOR.MINOR.PATCH` string
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

fn version_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(\d+)\.(\d+)\.(\d+)").expect("version pattern is a valid regex")
    })
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

    /// Extract the first `MAJOR.MINOR.PATCH` triple found in `input`.
    ///
    /// The match is unanchored, so `"3.9.2"` and `"release 3.9.2"` both parse.
    pub fn parse(input: &str) -> Result<Self> {
        let captures = version_pattern().captures(input).ok_or_else(|| {
            AutomatorError::version(format!(
                "'{}' does not contain a MAJOR.MINOR.PATCH version",
                input
            ))
        })?;

        let component = |index: usize, label: &str| -> Result<u64> {
            captures[index].parse::<u64>().map_err(|_| {
                AutomatorError::version(format!(
                    "{} component of '{}' is out of range",
                    label, input
                ))
            })
        };

        Ok(Version {
            major: component(1, "Major")?,
            minor: component(2, "Minor")?,
            patch: component(3, "Patch")?,
        })
    }

    /// Next patch release
    pub fn bump_patch(&self) -> Result<Self> {
        let patch = self.patch.checked_add(1).ok_or_else(|| {
            AutomatorError::version(format!("patch component of {} overflows", self))
        })?;
        Ok(Version { patch, ..*self })
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Bumps the patch component of a semantic version string.
///
/// `"3.9.2"` becomes `"3.9.3"`. Fails when no numeric `MAJOR.MINOR.PATCH`
/// triple can be found, rather than producing an empty version.
///
/// # Example
/// ```
/// use lae_automator::domain::version::bump;
/// assert_eq!(bump("19.0.9").unwrap(), "19.0.10");
/// assert!(bump("19.0.x").is_err());
/// ```
pub fn bump(version: &str) -> Result<String> {
    Ok(Version::parse(version)?.bump_patch()?.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_parse() {
        let v = Version::parse("3.9.2").unwrap();
        assert_eq!(v, Version::new(3, 9, 2));
    }

    #[test]
    fn test_version_parse_unanchored() {
        let v = Version::parse("v19.0.3-beta").unwrap();
        assert_eq!(v, Version::new(19, 0, 3));
    }

    #[test]
    fn test_version_parse_invalid() {
        assert!(Version::parse("3.9").is_err());
        assert!(Version::parse("3.9.x").is_err());
        assert!(Version::parse("").is_err());
    }

    #[test]
    fn test_bump_patch() {
        assert_eq!(bump("3.9.2").unwrap(), "3.9.3");
        assert_eq!(bump("19.0.2").unwrap(), "19.0.3");
    }

    #[test]
    fn test_bump_carries_into_new_digit() {
        assert_eq!(bump("3.11.9").unwrap(), "3.11.10");
        assert_eq!(bump("19.0.99").unwrap(), "19.0.100");
    }

    #[test]
    fn test_bump_drops_leading_zeros() {
        assert_eq!(bump("3.9.07").unwrap(), "3.9.8");
    }

    #[test]
    fn test_bump_non_numeric_patch_fails() {
        let err = bump("3.9.beta").unwrap_err();
        assert!(err.to_string().contains("Cannot derive version"));
        assert!(err.to_string().contains("3.9.beta"));
    }

    #[test]
    fn test_bump_holds_for_a_range_of_patches() {
        for major in [0, 3, 19] {
            for minor in [0, 9, 11] {
                for patch in [0, 1, 9, 41] {
                    let input = format!("{}.{}.{}", major, minor, patch);
                    let expected = format!("{}.{}.{}", major, minor, patch + 1);
                    assert_eq!(bump(&input).unwrap(), expected);
                }
            }
        }
    }

    #[test]
    fn test_version_display() {
        assert_eq!(Version::new(19, 0, 3).to_string(), "19.0.3");
    }
}
