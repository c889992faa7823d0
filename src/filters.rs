//! Custom askama filters, picked up by templates through `use crate::filters`.

use std::borrow::Borrow;

/// Rating as filled and empty stars, e.g. `★★★★☆`.
pub fn stars(rating: impl Borrow<u8>) -> askama::Result<String> {
    let filled = usize::from((*rating.borrow()).min(5));
    Ok(format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled)))
}

/// Character count shown under the testimonial textarea.
pub fn char_count(value: impl AsRef<str>) -> askama::Result<usize> {
    Ok(value.as_ref().chars().count())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stars_fill_to_rating() {
        assert_eq!(stars(3u8).unwrap(), "★★★☆☆");
        assert_eq!(stars(&9u8).unwrap(), "★★★★★");
    }

    #[test]
    fn counts_chars_not_bytes() {
        assert_eq!(char_count("héllo").unwrap(), 5);
        assert_eq!(char_count(&String::from("ab")).unwrap(), 2);
    }
}
