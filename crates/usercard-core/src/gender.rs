//! Gender icon policy.
//!
//! Binary on purpose: exactly "male" (any case) picks [`GenderIcon::Male`],
//! everything else, including empty or unexpected values, falls back to
//! [`GenderIcon::Female`]. There is no neutral variant.

/// Which icon the card shows next to the gender label.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GenderIcon {
    Male,
    /// Also the fallback for any value that is not "male"
    Female,
}

impl GenderIcon {
    pub fn from_gender(gender: &str) -> Self {
        if gender.eq_ignore_ascii_case("male") {
            GenderIcon::Male
        } else {
            GenderIcon::Female
        }
    }

    /// Mars / Venus symbol
    pub fn glyph(&self) -> &'static str {
        match self {
            GenderIcon::Male => "\u{2642}",
            GenderIcon::Female => "\u{2640}",
        }
    }

    /// CSS class carrying the accent colour
    pub fn class(&self) -> &'static str {
        match self {
            GenderIcon::Male => "gender-icon gender-icon--male",
            GenderIcon::Female => "gender-icon gender-icon--female",
        }
    }
}

/// Capitalise the first letter for display ("female" -> "Female").
pub fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn male_matches_any_case() {
        for input in ["Male", "MALE", "male", "mALe"] {
            assert_eq!(GenderIcon::from_gender(input), GenderIcon::Male, "{input}");
        }
    }

    #[test]
    fn everything_else_falls_back_to_female() {
        for input in ["female", "unknown", "", " male", "males"] {
            assert_eq!(GenderIcon::from_gender(input), GenderIcon::Female, "{input:?}");
        }
    }

    #[test]
    fn glyphs_and_classes() {
        assert_eq!(GenderIcon::Male.glyph(), "♂");
        assert_eq!(GenderIcon::Female.glyph(), "♀");
        assert!(GenderIcon::Male.class().ends_with("--male"));
    }

    #[test]
    fn capitalize_label() {
        assert_eq!(capitalize("female"), "Female");
        assert_eq!(capitalize(""), "");
    }
}
