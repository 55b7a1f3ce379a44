//! Case transformation between parameter-key and lookup-name conventions.

use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Matches an upper-snake lookup name: uppercase-letter segments separated
/// by single underscores (`NAME`, `MAX_SIZE`).
static UPPER_SNAKE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Z]+_)*[A-Z]+$").expect("static pattern"));

static UNDERSCORE_SEGMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"_(\w)").expect("static pattern"));

static UPPERCASE_LETTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Z]").expect("static pattern"));

/// Convert a key name between lowercase-camel and upper-snake form.
///
/// An upper-snake input is lowercased and the letter after the first
/// underscore is capitalized (`MAX_SIZE` → `maxSize`); anything else is
/// treated as camel, and an underscore is inserted before the first
/// uppercase letter before uppercasing the whole string (`maxSize` →
/// `MAX_SIZE`).
///
/// Only the *first* underscore or uppercase letter is transformed; later
/// ones pass through unchanged, so keys with more than one word boundary do
/// not round-trip (`maxPoolSize` → `MAX_POOLSIZE`). All current parameter
/// keys have at most one boundary and are unaffected.
pub fn transform_case(input: &str) -> String {
    if UPPER_SNAKE.is_match(input) {
        let lowered = input.to_lowercase();
        UNDERSCORE_SEGMENT
            .replace(&lowered, |caps: &Captures<'_>| caps[1].to_uppercase())
            .into_owned()
    } else {
        UPPERCASE_LETTER.replace(input, "_${0}").to_uppercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── camel → upper-snake ───────────────────────────────────────────────

    #[test]
    fn single_word_key_uppercases() {
        assert_eq!(transform_case("protocol"), "PROTOCOL");
        assert_eq!(transform_case("name"), "NAME");
    }

    #[test]
    fn single_hump_key_gains_underscore() {
        assert_eq!(transform_case("maxSize"), "MAX_SIZE");
    }

    #[test]
    fn leading_uppercase_gains_leading_underscore() {
        // Not a camel key, but the camel branch still applies.
        assert_eq!(transform_case("Name"), "_NAME");
    }

    // ── upper-snake → camel ───────────────────────────────────────────────

    #[test]
    fn single_segment_lookup_lowercases() {
        assert_eq!(transform_case("PROTOCOL"), "protocol");
        assert_eq!(transform_case("PORT"), "port");
    }

    #[test]
    fn two_segment_lookup_camelizes() {
        assert_eq!(transform_case("MAX_SIZE"), "maxSize");
    }

    // ── round trips ───────────────────────────────────────────────────────

    #[test]
    fn default_parameter_keys_round_trip() {
        for key in ["protocol", "secure", "host", "port", "name"] {
            assert_eq!(transform_case(&transform_case(key)), key, "key: {key}");
        }
    }

    #[test]
    fn single_hump_key_round_trips() {
        assert_eq!(transform_case(&transform_case("maxSize")), "maxSize");
    }

    // ── first-boundary-only limitation, pinned ────────────────────────────
    //
    // Keys with more than one word boundary only transform their first
    // boundary. Extending the key set past single-hump keys requires
    // revisiting transform_case; these tests make the limitation visible.

    #[test]
    fn multi_hump_key_only_transforms_first_boundary() {
        assert_eq!(transform_case("maxPoolSize"), "MAX_POOLSIZE");
    }

    #[test]
    fn multi_segment_lookup_only_transforms_first_boundary() {
        assert_eq!(transform_case("MAX_POOL_SIZE"), "maxPool_size");
    }

    #[test]
    fn multi_hump_key_does_not_round_trip() {
        assert_ne!(transform_case(&transform_case("maxPoolSize")), "maxPoolSize");
    }

    // ── edge cases ────────────────────────────────────────────────────────

    #[test]
    fn empty_string_passes_through() {
        assert_eq!(transform_case(""), "");
    }

    #[test]
    fn digits_fall_through_to_camel_branch() {
        // A digit disqualifies the upper-snake pattern, so the whole string
        // is uppercased via the camel branch.
        assert_eq!(transform_case("PORT2"), "_PORT2");
    }
}
