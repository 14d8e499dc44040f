//! Page name allocation. Pure string work, no I/O.
//!
//! Page entries are named `<prefix><number><suffix>` where the prefix is
//! derived from the book title, the number is a fixed-width zero-padded
//! field seeded at `0001` by the first page, and the suffix is one of the
//! recognized image extensions. Fixed width keeps lexicographic order
//! equal to numeric order, so the next number comes from incrementing the
//! lexicographically last existing name. The width is never widened; a
//! carry that cannot resolve inside it is an error.

use crate::error::{Error, Result};

/// Image suffixes recognized as page entries (exact, case-sensitive tail match)
pub const IMAGE_SUFFIXES: [&str; 3] = [".png", ".jpeg", ".jpg"];

/// The recognized image suffix of `name`, if it has one
pub fn image_suffix(name: &str) -> Option<&'static str> {
    IMAGE_SUFFIXES
        .iter()
        .find(|suffix| name.ends_with(*suffix))
        .copied()
}

pub fn is_page_name(name: &str) -> bool {
    image_suffix(name).is_some()
}

/// Title-derived prefix prepended to every page name: lowercased, spaces
/// replaced with underscores, trailing underscore. Empty title, empty prefix.
pub fn page_prefix(title: &str) -> String {
    if title.is_empty() {
        return String::new();
    }
    title.to_lowercase().replace(' ', "_") + "_"
}

/// Computes the name for the next page given the pages already in the book
/// (in ascending lexicographic order) and the source file being added.
///
/// The suffix comes from `source`; the number comes from carry-incrementing
/// the last existing name. Fails with [`Error::InvalidImageFormat`] if the
/// source has no recognized suffix, or [`Error::PageNumbersExhausted`] if
/// the numeric field has no room left.
pub fn next_page_name(existing: &[String], prefix: &str, source: &str) -> Result<String> {
    let suffix =
        image_suffix(source).ok_or_else(|| Error::InvalidImageFormat(source.to_string()))?;

    let Some(last) = existing.last() else {
        return Ok(format!("{prefix}0001{suffix}"));
    };

    let stem = match image_suffix(last) {
        Some(last_suffix) => &last[..last.len() - last_suffix.len()],
        None => last.as_str(),
    };
    Ok(increment_stem(stem)? + suffix)
}

/// Carry-increment over the numeric tail of a page name stem. Scans from
/// the last character leftward, never touching index 0: a `'9'` is a carry
/// position, a `'0'..='8'` is incremented and every carry position reset to
/// `'0'`. Hitting anything else means the scan has run into the prefix.
fn increment_stem(stem: &str) -> Result<String> {
    let mut name: Vec<char> = stem.chars().collect();
    for i in (1..name.len()).rev() {
        match name[i] {
            '9' => continue,
            c @ '0'..='8' => {
                name[i] = (c as u8 + 1) as char;
                for carry in name[i + 1..].iter_mut() {
                    *carry = '0';
                }
                return Ok(name.into_iter().collect());
            }
            _ => return Err(Error::PageNumbersExhausted),
        }
    }
    Err(Error::PageNumbersExhausted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_lowercases_and_joins_with_underscores() {
        assert_eq!(page_prefix("The Walking Dead"), "the_walking_dead_");
        assert_eq!(page_prefix("Akira"), "akira_");
        assert_eq!(page_prefix(""), "");
    }

    #[test]
    fn suffix_match_is_exact_and_case_sensitive() {
        assert_eq!(image_suffix("cover.png"), Some(".png"));
        assert_eq!(image_suffix("cover.jpeg"), Some(".jpeg"));
        assert_eq!(image_suffix("cover.jpg"), Some(".jpg"));
        assert_eq!(image_suffix("cover.JPG"), None);
        assert_eq!(image_suffix("cover.gif"), None);
    }

    #[test]
    fn first_page_seeds_the_field_at_0001() {
        let name = next_page_name(&[], "akira_", "scan.jpg").unwrap();
        assert_eq!(name, "akira_0001.jpg");

        let name = next_page_name(&[], "", "scan.png").unwrap();
        assert_eq!(name, "0001.png");
    }

    #[test]
    fn plain_increment() {
        let pages = vec!["akira_0001.jpg".to_string()];
        let name = next_page_name(&pages, "akira_", "scan.jpg").unwrap();
        assert_eq!(name, "akira_0002.jpg");
    }

    #[test]
    fn suffix_comes_from_the_source_not_the_last_page() {
        let pages = vec!["akira_0001.png".to_string()];
        let name = next_page_name(&pages, "akira_", "scan.jpg").unwrap();
        assert_eq!(name, "akira_0002.jpg");
    }

    #[test]
    fn carry_ripples_through_trailing_nines() {
        let pages = vec!["akira_0999.png".to_string()];
        let name = next_page_name(&pages, "akira_", "scan.png").unwrap();
        assert_eq!(name, "akira_1000.png");

        let pages = vec!["akira_0009.png".to_string()];
        let name = next_page_name(&pages, "akira_", "scan.png").unwrap();
        assert_eq!(name, "akira_0010.png");
    }

    #[test]
    fn exhausted_when_the_field_is_all_nines() {
        let pages = vec!["akira_9999.png".to_string()];
        let err = next_page_name(&pages, "akira_", "scan.png").unwrap_err();
        assert!(matches!(err, Error::PageNumbersExhausted));
    }

    #[test]
    fn exhausted_when_the_carry_reaches_the_first_character() {
        // No prefix: index 0 is excluded from the scan, so 9999 cannot roll over.
        let pages = vec!["9999.png".to_string()];
        let err = next_page_name(&pages, "", "scan.png").unwrap_err();
        assert!(matches!(err, Error::PageNumbersExhausted));
    }

    #[test]
    fn unrecognized_source_suffix_is_rejected() {
        let err = next_page_name(&[], "", "page.gif").unwrap_err();
        assert!(matches!(err, Error::InvalidImageFormat(_)));
    }
}
