//! Title-to-slug conversion for generated URLs.
//!
//! A slug is a lower-case, hyphen-separated projection of a title. It is
//! recomputed from the title whenever needed and never edited by hand.

/// Maximum slug length, in characters.
pub const MAX_SLUG_LEN: usize = 100;

/// Convert a title to a URL-safe slug.
///
/// Lower-cases the title, drops everything that is not a word character
/// (letter, digit, underscore), whitespace, or hyphen, collapses runs of
/// whitespace and hyphens into a single hyphen, trims hyphens from both ends,
/// and truncates to [`MAX_SLUG_LEN`] characters.
///
/// # Examples
///
/// ```
/// use ecg_content_catalog::slug::slugify;
///
/// assert_eq!(
///     slugify("Atrial Fibrillation (AF): Irregularly Irregular"),
///     "atrial-fibrillation-af-irregularly-irregular"
/// );
/// assert_eq!(slugify("  --  "), "");
/// ```
pub fn slugify(title: &str) -> String {
    let lowered = title.to_lowercase();
    let mut slug = String::with_capacity(lowered.len());
    let mut pending_separator = false;
    let mut len = 0usize;

    for c in lowered.chars() {
        if is_separator(c) {
            pending_separator = true;
        } else if c.is_alphanumeric() || c == '_' {
            if pending_separator && !slug.is_empty() {
                if len == MAX_SLUG_LEN {
                    break;
                }
                slug.push('-');
                len += 1;
            }
            pending_separator = false;
            if len == MAX_SLUG_LEN {
                break;
            }
            slug.push(c);
            len += 1;
        }
        // Punctuation is dropped without ending a separator run.
    }

    // Truncation can land right after a separator.
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

/// Whitespace or hyphen. The information separators U+001C..=U+001F count as
/// whitespace even though Unicode does not list them as such.
fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c) || c == '-'
}

/// Returns true if `s` is already in slug form (`slugify(s) == s`).
pub fn is_slug(s: &str) -> bool {
    !s.is_empty() && slugify(s) == s
}
