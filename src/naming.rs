//! Trip directory naming convention.
//!
//! Trip directories are named `YYYY-MM-location-words`:
//! - `2023-07-paris-france` → "July 2023, Paris France"
//! - `2019-11-new-york` → "November 2019, New York"
//!
//! The parser is best-effort and never fails. A month that is not a number
//! in 1–12 is shown verbatim, and missing parts become empty segments, so a
//! badly named directory still gets a (possibly odd) heading instead of
//! stopping the build.

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Map a month number (`"07"`, `"7"`) to its English name.
///
/// Returns `None` for anything that is not an integer in 1–12.
pub fn month_name(raw: &str) -> Option<&'static str> {
    let n: usize = raw.trim().parse().ok()?;
    if (1..=12).contains(&n) {
        Some(MONTHS[n - 1])
    } else {
        None
    }
}

/// Format a trip directory name as a display heading.
///
/// - `"2023-07-paris-france"` → `"July 2023, Paris France"`
/// - `"2023-13-nowhere"` → `"13 2023, Nowhere"` (month kept verbatim)
/// - `"2021-05-new york"` → `"May 2021, New York"`
/// - `"2022-08-iceland-by-ATV"` → `"August 2022, Iceland By ATV"`
pub fn format_trip_name(dir_name: &str) -> String {
    let mut parts = dir_name.split('-');
    let year = parts.next().unwrap_or_default();
    let month = parts.next().unwrap_or_default();
    let month = month_name(month).unwrap_or(month);
    let location = capitalize_words(&parts.collect::<Vec<_>>().join(" "));

    format!("{month} {year}, {location}")
}

/// Upper-case the first character of every space-separated word.
///
/// Only spaces delimit words, and the rest of each word keeps its casing.
fn capitalize_words(text: &str) -> String {
    text.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_year_month_location() {
        assert_eq!(format_trip_name("2023-07-paris-france"), "July 2023, Paris France");
    }

    #[test]
    fn single_word_location() {
        assert_eq!(format_trip_name("2020-01-tokyo"), "January 2020, Tokyo");
    }

    #[test]
    fn month_without_leading_zero() {
        assert_eq!(format_trip_name("2018-3-lisbon"), "March 2018, Lisbon");
    }

    #[test]
    fn december_is_last_entry() {
        assert_eq!(format_trip_name("2022-12-oslo"), "December 2022, Oslo");
    }

    #[test]
    fn out_of_range_month_kept_verbatim() {
        assert_eq!(format_trip_name("2023-13-nowhere"), "13 2023, Nowhere");
    }

    #[test]
    fn zero_month_kept_verbatim() {
        assert_eq!(format_trip_name("2023-00-nowhere"), "00 2023, Nowhere");
    }

    #[test]
    fn non_numeric_month_kept_verbatim() {
        assert_eq!(format_trip_name("2023-summer-rome"), "summer 2023, Rome");
    }

    #[test]
    fn spaces_inside_location_also_split_words() {
        assert_eq!(format_trip_name("2021-05-new york"), "May 2021, New York");
    }

    #[test]
    fn existing_casing_preserved() {
        assert_eq!(
            format_trip_name("2022-08-iceland-by-ATV"),
            "August 2022, Iceland By ATV"
        );
        assert_eq!(format_trip_name("2022-08-mcDonald"), "August 2022, McDonald");
    }

    #[test]
    fn non_ascii_first_letter_upper_cased() {
        assert_eq!(format_trip_name("2019-06-östersund"), "June 2019, Östersund");
    }

    #[test]
    fn missing_location_leaves_empty_segment() {
        assert_eq!(format_trip_name("2023-07"), "July 2023, ");
    }

    #[test]
    fn bare_word_has_empty_month_and_location() {
        assert_eq!(format_trip_name("misc"), " misc, ");
    }

    #[test]
    fn empty_name_does_not_panic() {
        assert_eq!(format_trip_name(""), " , ");
    }

    #[test]
    fn month_name_table() {
        assert_eq!(month_name("01"), Some("January"));
        assert_eq!(month_name("12"), Some("December"));
        assert_eq!(month_name("13"), None);
        assert_eq!(month_name("-1"), None);
        assert_eq!(month_name("x"), None);
    }
}
