//! Status lines printed after a bump.

use super::BumpOutcome;

/// Format the status report for a bump outcome, one line per entry.
pub fn format_report(outcome: &BumpOutcome) -> Vec<String> {
    let closing = if outcome.written {
        "✨ Ready to commit!".to_string()
    } else {
        format!("🔍 Dry run: {} was not modified", outcome.target.display())
    };

    vec![
        format!("🎮 {} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
        format!(
            "📦 Version updated: {} -> {} ({})",
            outcome.previous, outcome.version, outcome.strategy
        ),
        format!("📅 Build date updated: {}", outcome.build_date.format("%Y-%m-%d")),
        closing,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::version::Strategy;
    use chrono::NaiveDate;
    use semver::Version;

    fn outcome(written: bool) -> BumpOutcome {
        BumpOutcome {
            target: "game.js".into(),
            previous: "1.2".to_string(),
            version: Version::new(1, 3, 0),
            strategy: Strategy::Minor,
            build_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            written,
        }
    }

    #[test]
    fn test_report_lines() {
        let lines = format_report(&outcome(true));
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("🎮 verbump "));
        assert_eq!(lines[1], "📦 Version updated: 1.2 -> 1.3.0 (minor)");
        assert_eq!(lines[2], "📅 Build date updated: 2024-01-15");
        assert_eq!(lines[3], "✨ Ready to commit!");
    }

    #[test]
    fn test_dry_run_report() {
        let lines = format_report(&outcome(false));
        assert_eq!(lines[3], "🔍 Dry run: game.js was not modified");
    }
}
