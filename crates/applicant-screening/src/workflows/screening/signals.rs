//! Pure extractors turning raw answer text into typed evidence.

use serde::{Deserialize, Serialize};

/// Yes/no reading of a free-text answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriState {
    Yes,
    No,
    Unknown,
}

/// First maximal run of ASCII digits in `text`, or zero when there is none.
///
/// "10 years ago I worked..." yields 10: the first number wins regardless of context.
pub fn numeric_years(text: Option<&str>) -> u32 {
    let Some(text) = text else {
        return 0;
    };

    let digits: String = text
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(char::is_ascii_digit)
        .collect();

    digits
        .chars()
        .filter_map(|c| c.to_digit(10))
        .fold(0u32, |total, digit| {
            total.saturating_mul(10).saturating_add(digit)
        })
}

/// Whole-word, case-insensitive yes/no detection. The first `yes` or `no` word decides.
pub fn tri_state(text: Option<&str>) -> TriState {
    let Some(text) = text else {
        return TriState::Unknown;
    };

    text.split(|c: char| !c.is_alphanumeric())
        .find_map(|token| {
            if token.eq_ignore_ascii_case("yes") {
                Some(TriState::Yes)
            } else if token.eq_ignore_ascii_case("no") {
                Some(TriState::No)
            } else {
                None
            }
        })
        .unwrap_or(TriState::Unknown)
}

/// First configured keyword contained (case-insensitively) in `text`.
pub fn keyword_hit<'k>(text: Option<&str>, keywords: &'k [String]) -> Option<&'k str> {
    let haystack = text?.to_lowercase();
    if haystack.trim().is_empty() {
        return None;
    }

    keywords
        .iter()
        .map(String::as_str)
        .filter(|keyword| !keyword.trim().is_empty())
        .find(|keyword| haystack.contains(&keyword.to_lowercase()))
}

/// Whether a free-text answer is long enough to count as a real description.
pub fn is_substantive(text: Option<&str>, min_chars: usize) -> bool {
    text.map(|text| text.trim().chars().count() > min_chars)
        .unwrap_or(false)
}

/// Declared years from the structured profile field. Blank, malformed or negative values are zero.
pub fn declared_years(raw: Option<&str>) -> f64 {
    raw.and_then(|value| value.trim().parse::<f64>().ok())
        .filter(|years| years.is_finite() && *years > 0.0)
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_years_takes_the_first_run() {
        assert_eq!(numeric_years(Some("I have 4 years, previously 10")), 4);
        assert_eq!(numeric_years(Some("10 years ago I worked in retail")), 10);
        assert_eq!(numeric_years(Some("about 12")), 12);
    }

    #[test]
    fn numeric_years_defaults_to_zero() {
        assert_eq!(numeric_years(Some("")), 0);
        assert_eq!(numeric_years(Some("none")), 0);
        assert_eq!(numeric_years(None), 0);
    }

    #[test]
    fn numeric_years_saturates_on_overflow() {
        assert_eq!(numeric_years(Some("99999999999999999999")), u32::MAX);
    }

    #[test]
    fn tri_state_matches_whole_words_only() {
        assert_eq!(tri_state(Some("Yes")), TriState::Yes);
        assert_eq!(tri_state(Some("no, never")), TriState::No);
        assert_eq!(tri_state(Some("NO")), TriState::No);
        assert_eq!(tri_state(Some("I know the rules")), TriState::Unknown);
        assert_eq!(tri_state(Some("noted, eyes open")), TriState::Unknown);
        assert_eq!(tri_state(Some("N/A")), TriState::Unknown);
        assert_eq!(tri_state(None), TriState::Unknown);
    }

    #[test]
    fn tri_state_uses_the_first_decisive_word() {
        assert_eq!(tri_state(Some("Yes, no issues")), TriState::Yes);
        assert_eq!(tri_state(Some("No. Yes I would retest")), TriState::No);
    }

    #[test]
    fn keyword_hit_is_case_insensitive_containment() {
        let keywords = vec!["cna".to_string(), "home health".to_string()];
        assert_eq!(keyword_hit(Some("Certified CNA"), &keywords), Some("cna"));
        assert_eq!(
            keyword_hit(Some("Sunrise Home Health LLC"), &keywords),
            Some("home health")
        );
        assert_eq!(keyword_hit(Some("Cashier"), &keywords), None);
        assert_eq!(keyword_hit(None, &keywords), None);
    }

    #[test]
    fn keyword_hit_ignores_blank_keywords() {
        let keywords = vec![String::new(), "  ".to_string()];
        assert_eq!(keyword_hit(Some("anything"), &keywords), None);
    }

    #[test]
    fn substantive_requires_more_than_minimum() {
        assert!(!is_substantive(Some("   short answer here   "), 20));
        assert!(is_substantive(
            Some("Cared for dementia patients in assisted living"),
            20
        ));
        assert!(!is_substantive(None, 20));
    }

    #[test]
    fn declared_years_parses_decimal_values() {
        assert_eq!(declared_years(Some("2.5")), 2.5);
        assert_eq!(declared_years(Some(" 5 ")), 5.0);
        assert_eq!(declared_years(Some("five")), 0.0);
        assert_eq!(declared_years(Some("-3")), 0.0);
        assert_eq!(declared_years(None), 0.0);
    }
}
