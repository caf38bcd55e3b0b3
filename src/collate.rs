//! Name collation
//!
//! The process locale is read once at startup and turned into a
//! [`Collation`] value that is handed to the sort step, so tests can pick a
//! deterministic ordering instead of depending on the environment.

use std::cmp::Ordering;

/// How display names are compared when sorting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Collation {
    /// Plain code point order, as in the `C`/`POSIX` locale.
    #[default]
    Codepoint,
    /// Dictionary order, approximating the collation of common UTF-8
    /// locales: punctuation is ignored and case only breaks ties, with
    /// lowercase first.
    Dictionary,
}

impl Collation {
    /// Determine the collation from `LC_ALL`, `LC_COLLATE` and `LANG`, in
    /// that order of precedence.
    pub fn from_env() -> Self {
        let locale = ["LC_ALL", "LC_COLLATE", "LANG"]
            .iter()
            .filter_map(|var| std::env::var(var).ok())
            .find(|value| !value.is_empty());

        let collation = match locale {
            Some(name) => Self::from_locale_name(&name),
            None => Self::Codepoint,
        };
        tracing::debug!(?collation, "collation selected");
        collation
    }

    /// Map a locale name such as `en_US.UTF-8` or `C` to a collation.
    pub fn from_locale_name(name: &str) -> Self {
        let base = name.split(['.', '@']).next().unwrap_or(name);
        match base {
            "" | "C" | "POSIX" => Self::Codepoint,
            _ => Self::Dictionary,
        }
    }

    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        match self {
            Self::Codepoint => a.cmp(b),
            Self::Dictionary => dictionary_cmp(a, b),
        }
    }
}

/// Letters and digits only, case-folded.
fn primary_key(s: &str) -> impl Iterator<Item = char> + '_ {
    s.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
}

fn dictionary_cmp(a: &str, b: &str) -> Ordering {
    primary_key(a)
        .cmp(primary_key(b))
        .then_with(|| {
            // lowercase sorts before uppercase on otherwise equal names
            let case = |s: &str| s.chars().map(char::is_uppercase).collect::<Vec<_>>();
            case(a).cmp(&case(b))
        })
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_names() {
        assert_eq!(Collation::from_locale_name("C"), Collation::Codepoint);
        assert_eq!(Collation::from_locale_name("POSIX"), Collation::Codepoint);
        assert_eq!(Collation::from_locale_name("C.UTF-8"), Collation::Codepoint);
        assert_eq!(
            Collation::from_locale_name("en_US.UTF-8"),
            Collation::Dictionary
        );
        assert_eq!(
            Collation::from_locale_name("de_DE@euro"),
            Collation::Dictionary
        );
    }

    #[test]
    fn test_codepoint_puts_uppercase_first() {
        let c = Collation::Codepoint;
        assert_eq!(c.compare("Zebra", "apple"), Ordering::Less);
        assert_eq!(c.compare(".hidden", "visible"), Ordering::Less);
    }

    #[test]
    fn test_dictionary_ignores_case_and_punctuation() {
        let c = Collation::Dictionary;
        assert_eq!(c.compare("apple", "Zebra"), Ordering::Less);
        assert_eq!(c.compare(".bashrc", "alpha"), Ordering::Greater);
        assert_eq!(c.compare("a_b", "ab"), Ordering::Greater);
    }

    #[test]
    fn test_dictionary_lowercase_before_uppercase() {
        let c = Collation::Dictionary;
        assert_eq!(c.compare("readme", "README"), Ordering::Less);
        assert_eq!(c.compare("README", "readme"), Ordering::Greater);
    }

    #[test]
    fn test_dictionary_is_total_on_equal_primaries() {
        let c = Collation::Dictionary;
        assert_ne!(c.compare("./", "../"), Ordering::Equal);
        assert_eq!(c.compare("same", "same"), Ordering::Equal);
    }
}
