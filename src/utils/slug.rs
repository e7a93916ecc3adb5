//! Canonical slug derivation for prefixes and custom short paths.

/// Turns arbitrary text into a canonical slug.
///
/// Surrounding whitespace is dropped, letters are transliterated to ASCII
/// where a mapping exists, everything is lowercased, and each run of
/// characters outside `[a-z0-9]` collapses into a single hyphen. Leading and
/// trailing hyphens are removed.
///
/// The function never fails. An empty result means no usable slug could be
/// derived, and callers decide what that means for them.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(normalize("My Slug!"), "my-slug");
/// assert_eq!(normalize("Crème brûlée"), "creme-brulee");
/// assert_eq!(normalize("!!!"), "");
/// ```
pub fn normalize(text: &str) -> String {
    ::slug::slugify(text.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_and_hyphenates() {
        assert_eq!(normalize("My Slug!"), "my-slug");
        assert_eq!(normalize("Summer Sale 2026"), "summer-sale-2026");
    }

    #[test]
    fn test_trims_whitespace_and_edge_hyphens() {
        assert_eq!(normalize("   padded   "), "padded");
        assert_eq!(normalize("--edges--"), "edges");
        assert_eq!(normalize("\t tab\n"), "tab");
    }

    #[test]
    fn test_collapses_separator_runs() {
        assert_eq!(normalize("a__b--c  d"), "a-b-c-d");
        assert_eq!(normalize("one/two?three"), "one-two-three");
    }

    #[test]
    fn test_folds_diacritics() {
        assert_eq!(normalize("Crème Brûlée"), "creme-brulee");
        assert_eq!(normalize("Ångström"), "angstrom");
        assert_eq!(normalize("ZAŻÓŁĆ"), "zazolc");
    }

    #[test]
    fn test_empty_when_nothing_usable() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
        assert_eq!(normalize("!!!"), "");
        assert_eq!(normalize("-_-"), "");
    }

    #[test]
    fn test_already_canonical_is_unchanged() {
        assert_eq!(normalize("my-slug"), "my-slug");
        assert_eq!(normalize("go"), "go");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let inputs = [
            "My Slug!",
            "  Crème Brûlée ",
            "a__b--c",
            "UPPER_case-Mixed 123",
            "///",
            "日本語",
            "émoji 🦀 crab",
            "",
        ];

        for input in inputs {
            let once = normalize(input);
            assert_eq!(normalize(&once), once, "not idempotent for {input:?}");
        }
    }

    #[test]
    fn test_output_alphabet() {
        let out = normalize("Ünïcödé & Spaces -- Everywhere!");
        assert!(
            out.chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        );
        assert!(!out.starts_with('-') && !out.ends_with('-'));
        assert!(!out.contains("--"));
    }
}
