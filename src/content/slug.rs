//! Blog post slugs

use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;

lazy_static! {
    static ref DISALLOWED: Regex = Regex::new(r"[^\p{L}\p{N}\s-]").unwrap();
}

/// Normalize a title into a URL-safe slug candidate.
///
/// Punctuation is dropped without leaving a separator, then the rest is
/// transliterated to ASCII, so the result only holds `[a-z0-9-]`.
///
/// ```
/// use mortorq_site::content::slugify_title;
/// assert_eq!(slugify_title("Welcome to Our Team!"), "welcome-to-our-team");
/// assert_eq!(slugify_title("Über Robots"), "uber-robots");
/// ```
pub fn slugify_title(title: &str) -> String {
    let stripped = DISALLOWED.replace_all(title.trim(), "");
    ::slug::slugify(stripped)
}

/// Make every slug in `candidates` unique, in order.
///
/// The first occurrence keeps its slug, later ones get `-2`, `-3`, ...
/// skipping any suffixed slug that is already taken.
pub fn disambiguate<I>(candidates: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let candidates: Vec<String> = candidates.into_iter().collect();
    let mut taken: HashSet<String> = HashSet::with_capacity(candidates.len());
    let mut result = Vec::with_capacity(candidates.len());

    for candidate in candidates {
        let slug = if taken.contains(&candidate) {
            (2..)
                .map(|n| format!("{}-{}", candidate, n))
                .find(|s| !taken.contains(s))
                .unwrap_or_default()
        } else {
            candidate
        };
        taken.insert(slug.clone());
        result.push(slug);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_title() {
        assert_eq!(slugify_title("Welcome to Our Team"), "welcome-to-our-team");
        assert_eq!(slugify_title("welcome to our team!"), "welcome-to-our-team");
        assert_eq!(slugify_title("  Build  Season -- Week 3 "), "build-season-week-3");
        assert_eq!(slugify_title("Don't Panic: FRC 2024"), "dont-panic-frc-2024");
        assert_eq!(slugify_title("Über Robots"), "uber-robots");
        assert_eq!(slugify_title("!!!"), "");
    }

    #[test]
    fn test_slugify_title_is_ascii() {
        for title in ["Über Robots 日本", "Équipe Générale", "Роботы", "Café — Night"] {
            let slug = slugify_title(title);
            assert!(!slug.is_empty(), "empty slug for {:?}", title);
            assert!(
                slug.chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'),
                "{:?} -> {:?}",
                title,
                slug
            );
            assert!(!slug.starts_with('-') && !slug.ends_with('-'));
            assert!(!slug.contains("--"));
        }
        assert!(slugify_title("Über Robots 日本").starts_with("uber-robots-"));
    }

    #[test]
    fn test_disambiguate_keeps_first() {
        let slugs = disambiguate(vec!["a".to_string(), "b".to_string(), "a".to_string()]);
        assert_eq!(slugs, vec!["a", "b", "a-2"]);
    }

    #[test]
    fn test_disambiguate_many_collisions() {
        let slugs = disambiguate(vec!["x".to_string(); 4]);
        assert_eq!(slugs, vec!["x", "x-2", "x-3", "x-4"]);
    }

    #[test]
    fn test_disambiguate_skips_taken_suffix() {
        let slugs = disambiguate(vec!["a-2".to_string(), "a".to_string(), "a".to_string()]);
        assert_eq!(slugs, vec!["a-2", "a", "a-3"]);

        let unique: HashSet<_> = slugs.iter().collect();
        assert_eq!(unique.len(), slugs.len());
    }

    #[test]
    fn test_disambiguate_is_deterministic() {
        let input = vec!["t".to_string(), "t".to_string(), "t-2".to_string()];
        assert_eq!(disambiguate(input.clone()), disambiguate(input));
    }
}
