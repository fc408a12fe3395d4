//! Canonical names for presentations.
//!
//! Every presentation is published under a slug derived from its body file
//! stem. The slug is both the output directory name and the `?p=` link target
//! in the index, so it has to be stable across runs:
//!
//! - `My Talk!.md` → `my-talk`
//! - `Café Déjà Vu.md` → `cafe-deja-vu`
//! - `  multiple   spaces--and-hyphens .md` → `multiple-spaces-and-hyphens`
//!
//! ## Rules
//!
//! 1. ASCII mode normalizes to NFKD and drops everything outside 7-bit ASCII,
//!    so accents decompose into a base letter plus a combining mark that is
//!    then discarded. Unicode mode normalizes to NFKC and keeps everything.
//! 2. Only letters, digits, `_`, `-` and whitespace survive.
//! 3. Surrounding whitespace is trimmed and the result lowercased.
//! 4. Each run of hyphens and/or whitespace becomes a single `-`.

use unicode_normalization::UnicodeNormalization;

/// Convert a raw presentation name into its canonical slug.
pub fn slugify(value: &str, allow_unicode: bool) -> String {
    let normalized: String = if allow_unicode {
        value.nfkc().collect()
    } else {
        value.nfkd().filter(char::is_ascii).collect()
    };

    let kept: String = normalized
        .chars()
        .filter(|&c| is_word_char(c) || c == '-' || c.is_whitespace())
        .collect();
    let lowered = kept.trim().to_lowercase();

    let mut slug = String::with_capacity(lowered.len());
    let mut in_separator = false;
    for c in lowered.chars() {
        if c == '-' || c.is_whitespace() {
            if !in_separator {
                slug.push('-');
                in_separator = true;
            }
        } else {
            slug.push(c);
            in_separator = false;
        }
    }
    slug
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
