//! Identifier case classification and conversion.

use regex::Regex;
use std::sync::LazyLock;

static LOWER_SNAKE_CASE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[a-z0-9_]+$").unwrap());

/// Whether `name` is already lower_snake_case.
///
/// Only ASCII lowercase letters, ASCII digits and `_` are allowed; the empty
/// string is not a valid identifier.
pub fn is_lower_snake_case(name: &str) -> bool {
    LOWER_SNAKE_CASE.is_match(name)
}

/// Convert an arbitrary identifier into lower_snake_case.
///
/// A `_` is inserted before every uppercase letter that follows a lowercase
/// letter or a digit, every other non-alphanumeric character becomes `_`, and
/// runs of `_` collapse into one. The conversion is idempotent and, for
/// non-empty input, always satisfies [`is_lower_snake_case`].
pub fn to_lower_snake(token: &str) -> String {
    let mut out = String::with_capacity(token.len() + 4);
    let mut prev: Option<char> = None;

    for c in token.chars() {
        if c.is_ascii_uppercase() {
            if prev.is_some_and(|p| p.is_ascii_lowercase() || p.is_ascii_digit()) {
                push_separator(&mut out);
            }
            out.push(c.to_ascii_lowercase());
        } else if c.is_ascii_alphanumeric() {
            out.push(c);
        } else {
            push_separator(&mut out);
        }
        prev = Some(c);
    }

    out
}

fn push_separator(out: &mut String) {
    if !out.ends_with('_') {
        out.push('_');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_lower_snake_case() {
        for name in ["user_id", "id", "field2", "v2_name", "_private", "a__b"] {
            assert!(is_lower_snake_case(name), "{name} should be accepted");
        }
    }

    #[test]
    fn rejects_other_styles() {
        for name in ["userId", "UserMap", "USER_ID", "user-id", "user id", "üser", ""] {
            assert!(!is_lower_snake_case(name), "{name:?} should be rejected");
        }
    }

    #[test]
    fn converts_camel_and_pascal_case() {
        assert_eq!(to_lower_snake("userId"), "user_id");
        assert_eq!(to_lower_snake("UserMap"), "user_map");
        assert_eq!(to_lower_snake("myOneOfField"), "my_one_of_field");
        assert_eq!(to_lower_snake("userID"), "user_id");
    }

    #[test]
    fn converts_screaming_and_separated_names() {
        assert_eq!(to_lower_snake("USER_ID"), "user_id");
        assert_eq!(to_lower_snake("user-id"), "user_id");
        assert_eq!(to_lower_snake("user--Id"), "user_id");
        assert_eq!(to_lower_snake("User Name"), "user_name");
    }

    #[test]
    fn splits_after_digits() {
        assert_eq!(to_lower_snake("v2Name"), "v2_name");
        assert_eq!(to_lower_snake("ipv4Address"), "ipv4_address");
    }

    #[test]
    fn collapses_separator_runs() {
        assert_eq!(to_lower_snake("a__B"), "a_b");
        assert_eq!(to_lower_snake("__Leading"), "_leading");
    }

    #[test]
    fn conversion_is_idempotent() {
        for name in ["userId", "UserMap", "HTTPServer", "a-b_C", "x__Y--z", "Ünïcode"] {
            let once = to_lower_snake(name);
            assert_eq!(to_lower_snake(&once), once, "not idempotent for {name}");
        }
    }

    #[test]
    fn conversion_satisfies_classifier() {
        for name in ["userId", "UserMap", "HTTPServer", "a-b_C", "x__Y--z", "Ünïcode", "9Lives"] {
            let converted = to_lower_snake(name);
            assert!(
                is_lower_snake_case(&converted),
                "{name} -> {converted} is not lower_snake_case"
            );
        }
    }
}
