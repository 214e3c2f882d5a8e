//! Token substitution in target text.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex_lite::{NoExpand, Regex};
use semver::Version;
use tracing::debug;

use crate::version::parse::VERSION_TOKEN;

/// `this.buildDate = "YYYY-MM-DD"` with single or double quotes.
static BUILD_DATE_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"this\.buildDate = ["'][^"']+["']"#).expect("build date token pattern is valid")
});

/// Rewrite the version and build-date tokens in `text`.
///
/// Only the first occurrence of each token is replaced. A missing build-date
/// token leaves the rest of the text untouched.
pub fn apply_to_text(text: &str, new_version: &Version, new_date: NaiveDate) -> String {
    let version_line = format!(
        "this.version = \"{}.{}.{}\"",
        new_version.major, new_version.minor, new_version.patch
    );
    let date_line = format!("this.buildDate = \"{}\"", new_date.format("%Y-%m-%d"));

    let with_version = VERSION_TOKEN.replacen(text, 1, NoExpand(&version_line));

    if !BUILD_DATE_TOKEN.is_match(&with_version) {
        debug!("No build date token found, leaving it out");
    }

    BUILD_DATE_TOKEN
        .replacen(&with_version, 1, NoExpand(&date_line))
        .into_owned()
}
