//! Version token parsing, strategy resolution and semver bumping.

pub mod bump;
pub mod markers;
pub mod parse;

pub use bump::{increment, Strategy};
pub use markers::{marker_strategy, resolve_strategy};
pub use parse::{extract_version, parse_components, VersionToken};
