//! Slugs and comma-separated lists

/// Normalize free text into a URL and path safe slug
///
/// Lowercases the input, replaces every maximal run of characters outside
/// `[a-z0-9]` with a single `-`, and strips a leading or trailing `-`.
pub fn slugify(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    let mut pending_separator = false;

    for c in input.to_lowercase().chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push(c);
        } else {
            pending_separator = true;
        }
    }

    slug
}

/// Split a comma-separated field, trimming entries and dropping empty ones
pub fn split_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_punctuation() {
        assert_eq!(slugify("Hello, World!"), "hello-world");
    }

    #[test]
    fn test_slugify_trims_edges() {
        assert_eq!(slugify("  --Photon Drift--  "), "photon-drift");
        assert_eq!(slugify("!!!"), "");
        assert_eq!(slugify(""), "");
    }

    #[test]
    fn test_slugify_keeps_digits() {
        assert_eq!(slugify("Model v2.5 (beta)"), "model-v2-5-beta");
    }

    #[test]
    fn test_slugify_non_ascii_collapses() {
        assert_eq!(slugify("Café Über Straße"), "caf-ber-stra-e");
        assert_eq!(slugify("東京"), "");
    }

    #[test]
    fn test_slugify_idempotent() {
        let inputs = [
            "Hello, World!",
            "  a  b  ",
            "--x--",
            "Ünïcödé tïtlé",
            "already-a-slug",
            "MiXeD_Case__123",
            "",
        ];
        for input in inputs {
            let once = slugify(input);
            assert_eq!(slugify(&once), once, "not idempotent for {input:?}");
        }
    }

    #[test]
    fn test_slugify_output_alphabet() {
        let slug = slugify("  Some -- weird //\\ input ?? 42 ");
        assert!(
            slug.chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        );
        assert!(!slug.contains("--"));
        assert!(!slug.starts_with('-') && !slug.ends_with('-'));
    }

    #[test]
    fn test_split_list() {
        assert_eq!(split_list("a, b ,, c"), vec!["a", "b", "c"]);
        assert!(split_list("").is_empty());
        assert!(split_list(" , ,").is_empty());
        assert_eq!(split_list("Ada"), vec!["Ada"]);
    }
}
