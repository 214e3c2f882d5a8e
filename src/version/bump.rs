//! Semver increment by strategy.

use semver::Version;

use crate::error::VersionError;

/// Increment strategy: which version component advances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Strategy {
    #[default]
    Patch,
    Minor,
    Major,
}

impl Strategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Patch => "patch",
            Strategy::Minor => "minor",
            Strategy::Major => "major",
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Exact, case-sensitive strategy names.
impl std::str::FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "major" => Ok(Self::Major),
            "minor" => Ok(Self::Minor),
            "patch" => Ok(Self::Patch),
            _ => Err(format!("Unknown strategy: {}", s)),
        }
    }
}

/// Increment a version according to the strategy.
///
/// - Major: bump major, reset minor and patch
/// - Minor: bump minor, reset patch
/// - Patch: bump patch
///
/// Fails with `VersionError::Overflow` when the bumped component is already `u64::MAX`.
pub fn increment(version: &Version, strategy: Strategy) -> Result<Version, VersionError> {
    let overflow = || VersionError::Overflow {
        version: version.to_string(),
        strategy,
    };

    let next = match strategy {
        Strategy::Major => Version::new(version.major.checked_add(1).ok_or_else(overflow)?, 0, 0),
        Strategy::Minor => Version::new(
            version.major,
            version.minor.checked_add(1).ok_or_else(overflow)?,
            0,
        ),
        Strategy::Patch => Version::new(
            version.major,
            version.minor,
            version.patch.checked_add(1).ok_or_else(overflow)?,
        ),
    };

    Ok(next)
}
