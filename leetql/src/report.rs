//! Per-year submission counts.

use std::collections::BTreeMap;
use std::fmt::Write;

use chrono::Datelike;

use crate::error::Result;
use crate::types::Submission;

/// Count submissions per calendar year (UTC), years ascending.
pub fn submissions_by_year(submissions: &[Submission]) -> Result<BTreeMap<i32, usize>> {
    let mut years = BTreeMap::new();
    for sub in submissions {
        let year = sub.timestamp.to_datetime()?.year();
        *years.entry(year).or_insert(0) += 1;
    }
    Ok(years)
}

/// Render the year table printed after a fetch.
pub fn render_year_table(years: &BTreeMap<i32, usize>) -> String {
    let mut out = String::from("Submissions by year:\n");
    for (year, count) in years {
        // Writing to a String cannot fail.
        let _ = writeln!(out, "  {year}: {count}");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Timestamp;

    fn sub(id: &str, timestamp: Timestamp) -> Submission {
        Submission {
            id: id.into(),
            title: "Two Sum".into(),
            title_slug: "two-sum".into(),
            status: 10,
            status_display: "Accepted".into(),
            lang: "rust".into(),
            runtime: "0 ms".into(),
            timestamp,
            url: format!("/submissions/detail/{id}/"),
        }
    }

    #[test]
    fn test_groups_by_year_ascending() {
        // 2022-01-01 listed first; output must still be ascending.
        let subs = vec![
            sub("2", Timestamp::Text("1640995200".into())),
            sub("1", Timestamp::Number(1609459200)),
        ];
        let years = submissions_by_year(&subs).unwrap();
        assert_eq!(years.into_iter().collect::<Vec<_>>(), vec![(2021, 1), (2022, 1)]);
    }

    #[test]
    fn test_year_boundary_is_utc() {
        // 2021-12-31T23:59:59Z
        let subs = vec![sub("1", Timestamp::Number(1640995199))];
        let years = submissions_by_year(&subs).unwrap();
        assert_eq!(years.get(&2021), Some(&1));
    }

    #[test]
    fn test_counts_multiple_per_year() {
        let subs = vec![
            sub("1", Timestamp::Number(1609459200)),
            sub("2", Timestamp::Number(1612137600)),
            sub("3", Timestamp::Number(1640995200)),
        ];
        let years = submissions_by_year(&subs).unwrap();
        assert_eq!(years[&2021], 2);
        assert_eq!(years[&2022], 1);
    }

    #[test]
    fn test_empty_history() {
        let years = submissions_by_year(&[]).unwrap();
        assert!(years.is_empty());
        assert_eq!(render_year_table(&years), "Submissions by year:\n");
    }

    #[test]
    fn test_invalid_timestamp_rejected() {
        let subs = vec![sub("1", Timestamp::Text("yesterday".into()))];
        assert!(submissions_by_year(&subs).is_err());
    }

    #[test]
    fn test_render_year_table() {
        let years = BTreeMap::from([(2021, 1), (2022, 14)]);
        assert_eq!(
            render_year_table(&years),
            "Submissions by year:\n  2021: 1\n  2022: 14\n"
        );
    }
}
