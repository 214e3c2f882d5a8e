//! Version token extraction from target text.

use std::sync::LazyLock;

use regex_lite::Regex;
use semver::Version;
use tracing::debug;

use crate::error::VersionError;

/// `this.version = "X.Y.Z"` with single or double quotes; group 1 is the raw version.
pub(crate) static VERSION_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"this\.version = ["']([^"']+)["']"#).expect("version token pattern is valid")
});

/// Positional defaults for absent components: major, minor, patch.
///
/// Major defaults to 1 while minor and patch default to 0.
const COMPONENT_DEFAULTS: [u64; 3] = [1, 0, 0];

/// The version token found in a target file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionToken {
    /// The version exactly as written, e.g. `1.2` or `1.2.16`.
    pub raw: String,
    pub version: Version,
}

/// Locate the first version token in `text` and parse it.
pub fn extract_version(text: &str) -> Result<VersionToken, VersionError> {
    let raw = VERSION_TOKEN
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .ok_or(VersionError::TokenNotFound)?;

    let version = parse_components(&raw)?;
    debug!("Found version token '{}' -> {}", raw, version);

    Ok(VersionToken { raw, version })
}

/// Parse a dotted version string into three components.
///
/// Components past the third are ignored. Missing ones take the
/// positional default from [`COMPONENT_DEFAULTS`].
pub fn parse_components(raw: &str) -> Result<Version, VersionError> {
    let parts: Vec<&str> = raw.split('.').collect();
    let mut components = COMPONENT_DEFAULTS;

    for (slot, part) in components.iter_mut().zip(parts.iter()) {
        let trimmed = part.trim();
        if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid(raw, part));
        }
        *slot = trimmed.parse::<u64>().map_err(|_| invalid(raw, part))?;
    }

    let [major, minor, patch] = components;
    Ok(Version::new(major, minor, patch))
}

fn invalid(raw: &str, component: &str) -> VersionError {
    VersionError::InvalidFormat {
        raw: raw.to_string(),
        component: component.to_string(),
    }
}
