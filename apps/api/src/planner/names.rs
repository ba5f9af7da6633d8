/// Noise terms stripped from USDA descriptions before display.
const NOISE_TERMS: &[&str] = &[
    "raw",
    "unprepared",
    "prepared",
    "unenriched",
    "cooked",
    "generic",
    "canned",
    "usda",
    "frozen",
];

/// Cleans a raw ingredient description for display: strips noise terms,
/// capitalizes the first letter, truncates at the first comma. Runs only
/// when materializing the final result list — no effect on filtering or
/// scoring.
pub fn clean_name(raw: &str) -> String {
    let mut cleaned = raw.trim().to_string();
    for term in NOISE_TERMS {
        cleaned = cleaned
            .replace(&format!(", {term}"), "")
            .replace(&format!(" {term}"), "")
            .replace(&format!(",{term}"), "");
    }

    let mut chars = cleaned.chars();
    let capitalized = match chars.next() {
        None => return String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
    };

    capitalized
        .split(',')
        .next()
        .unwrap_or_default()
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_noise_suffix_and_truncates_at_comma() {
        assert_eq!(clean_name("Flour, wheat, all-purpose, unenriched"), "Flour");
    }

    #[test]
    fn test_capitalizes_first_letter() {
        assert_eq!(clean_name("chicken breast"), "Chicken breast");
    }

    #[test]
    fn test_removes_space_prefixed_noise_terms() {
        assert_eq!(clean_name("Tomato canned"), "Tomato");
    }

    #[test]
    fn test_plain_name_unchanged() {
        assert_eq!(clean_name("Chicken Breast"), "Chicken Breast");
    }

    #[test]
    fn test_comma_truncation_keeps_head_only() {
        assert_eq!(clean_name("Rice, white, long-grain"), "Rice");
    }

    #[test]
    fn test_noise_matching_is_case_sensitive() {
        // Uppercase "Raw" is not a noise term.
        assert_eq!(clean_name("Chicken Breast (Raw)"), "Chicken Breast (Raw)");
    }

    #[test]
    fn test_empty_input_is_empty() {
        assert_eq!(clean_name(""), "");
        assert_eq!(clean_name("   "), "");
    }
}
