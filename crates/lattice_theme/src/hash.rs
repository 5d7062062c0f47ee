//! Stable name hashing for CSS custom properties
//!
//! The same logical token must produce the same `--name` across builds and
//! processes, so generated stylesheets stay byte-compatible with anything
//! already shipped. `FxHasher` is seed-free and deterministic, which makes it
//! usable as a build-stable digest here.

use std::hash::Hasher;

use rustc_hash::FxHasher;

/// Hash a key into a CSS-identifier-safe name of bounded length.
///
/// Valid identifier characters (`[A-Za-z0-9_-]`) are kept in order, up to
/// `max_len`, so generated names stay readable. If any character was skipped
/// or dropped, a fixed-width 64-bit digest of the whole input is appended,
/// keeping distinct keys distinct.
///
/// ```rust
/// use lattice_theme::simple_hash;
///
/// assert_eq!(simple_hash("background", 40), "background");
/// // Deterministic across calls and builds.
/// assert_eq!(simple_hash("space.4", 40), simple_hash("space.4", 40));
/// ```
pub fn simple_hash(input: &str, max_len: usize) -> String {
    let mut prefix = String::new();
    let mut lossy = false;

    for ch in input.chars() {
        let valid = ch.is_ascii_alphanumeric() || ch == '_' || ch == '-';
        if valid && prefix.len() < max_len {
            prefix.push(ch);
        } else {
            lossy = true;
        }
    }

    if !lossy {
        return prefix;
    }

    let mut hasher = FxHasher::default();
    hasher.write(input.as_bytes());
    format!("{prefix}{:016x}", hasher.finish())
}
