//! Identifier casing transforms
//!
//! Every command derives its file names and in-code identifiers from a raw
//! user-supplied name through these functions, so their output format has to
//! stay stable: camelCase for identifiers, UpperCamelCase for file and class
//! names, dash-case for package-name-safe strings.
//!
//! All functions are pure and total over `&str`: malformed or empty input
//! yields a defined (possibly empty) result, never an error. Only ASCII
//! letters and digits participate in casing; other characters pass through.

/// The three canonical forms derived from one raw name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalNames {
    /// lowerCamelCase, for in-code identifiers
    pub camel: String,
    /// UpperCamelCase, for file and class names
    pub upper_camel: String,
    /// dash-case, for package-descriptor fields
    pub dash: String,
}

impl CanonicalNames {
    pub fn derive(raw: &str) -> Self {
        let upper_camel = upper_camelize(raw);
        Self {
            camel: camelize(raw),
            dash: camel_case_to_dash(&upper_camel),
            upper_camel,
        }
    }
}

/// Returns true iff `input` is a valid camelCase identifier: an ASCII
/// lowercase letter followed only by ASCII letters and digits.
pub fn is_camel_case(input: &str) -> bool {
    let mut chars = input.chars();
    match chars.next() {
        Some(first) if first.is_ascii_lowercase() => chars.all(|c| c.is_ascii_alphanumeric()),
        _ => false,
    }
}

/// Split into words at separators (dash, underscore, whitespace) and at every
/// ASCII uppercase letter. Consecutive separators never produce empty words.
fn split_words(input: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();

    for c in input.chars() {
        if c == '-' || c == '_' || c.is_ascii_whitespace() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
        } else if c.is_ascii_uppercase() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            current.push(c);
        } else {
            current.push(c);
        }
    }

    if !current.is_empty() {
        words.push(current);
    }

    words
}

fn push_capitalized(out: &mut String, word: &str) {
    let mut chars = word.chars();
    if let Some(first) = chars.next() {
        out.push(first.to_ascii_uppercase());
        for c in chars {
            out.push(c.to_ascii_lowercase());
        }
    }
}

/// Normalize arbitrary input into lowerCamelCase.
///
/// The first word is lowercased in full; every later word is capitalized.
/// Idempotent: feeding the output back in returns it unchanged, and input
/// that already satisfies [`is_camel_case`] is returned as-is.
pub fn camelize(input: &str) -> String {
    let words = split_words(input);
    let mut out = String::with_capacity(input.len());

    for (i, word) in words.iter().enumerate() {
        if i == 0 {
            for c in word.chars() {
                out.push(c.to_ascii_lowercase());
            }
        } else {
            push_capitalized(&mut out, word);
        }
    }

    out
}

/// Same segmentation as [`camelize`], but the first word is capitalized too.
pub fn upper_camelize(input: &str) -> String {
    let words = split_words(input);
    let mut out = String::with_capacity(input.len());

    for word in &words {
        push_capitalized(&mut out, word);
    }

    out
}

/// Convert camelCase or UpperCamelCase into dash-case: a dash goes before
/// every ASCII uppercase letter that follows a lowercase letter or digit,
/// then everything is lowercased. A leading uppercase letter gets no dash,
/// and input with no uppercase letters comes back unchanged.
pub fn camel_case_to_dash(input: &str) -> String {
    let mut out = String::with_capacity(input.len() + 4);
    let mut at_boundary = false;

    for c in input.chars() {
        if c.is_ascii_uppercase() {
            if at_boundary {
                out.push('-');
            }
            out.push(c.to_ascii_lowercase());
            at_boundary = false;
        } else {
            out.push(c);
            at_boundary = c.is_ascii_lowercase() || c.is_ascii_digit();
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifier_accepts_camel_case_only() {
        assert!(is_camel_case("myApp"));
        assert!(is_camel_case("a"));
        assert!(is_camel_case("my2App"));
        assert!(!is_camel_case("MyApp"));
        assert!(!is_camel_case("my-app"));
        assert!(!is_camel_case("my_app"));
        assert!(!is_camel_case("my app"));
        assert!(!is_camel_case("1myApp"));
        assert!(!is_camel_case(""));
    }

    #[test]
    fn camelize_joins_separated_words() {
        assert_eq!(camelize("my-app-name"), "myAppName");
        assert_eq!(camelize("my_app_name"), "myAppName");
        assert_eq!(camelize("my app name"), "myAppName");
        assert_eq!(camelize("MyAppName"), "myAppName");
        // uppercase runs are preserved per letter, so a fully uppercased
        // word keeps its interior capitals after the lowercased first letter
        assert_eq!(camelize("FOO-bar"), "fOOBar");
    }

    #[test]
    fn upper_camelize_capitalizes_first_word() {
        assert_eq!(upper_camelize("my-app-name"), "MyAppName");
        assert_eq!(upper_camelize("myAppName"), "MyAppName");
        assert_eq!(upper_camelize("intro"), "Intro");
    }

    #[test]
    fn dash_conversion_marks_word_boundaries() {
        assert_eq!(camel_case_to_dash("MyAppName"), "my-app-name");
        assert_eq!(camel_case_to_dash("myAppName"), "my-app-name");
        assert_eq!(camel_case_to_dash("intro"), "intro");
        // idempotent on already-dashed lowercase input
        assert_eq!(camel_case_to_dash("my-app-name"), "my-app-name");
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert_eq!(camelize(""), "");
        assert_eq!(upper_camelize(""), "");
        assert_eq!(camel_case_to_dash(""), "");
        assert!(!is_camel_case(""));
    }

    #[test]
    fn separator_only_input_collapses_to_empty() {
        assert_eq!(camelize("---"), "");
        assert_eq!(camelize("_ -_ "), "");
        assert_eq!(upper_camelize("___"), "");
    }

    #[test]
    fn consecutive_separators_collapse() {
        assert_eq!(camelize("my--app__name"), "myAppName");
        assert_eq!(upper_camelize("my--app  name"), "MyAppName");
    }

    #[test]
    fn digits_stay_word_internal() {
        assert_eq!(camelize("my2-app"), "my2App");
        assert_eq!(camelize("my2App"), "my2App");
        assert_eq!(camel_case_to_dash("my2App"), "my2-app");
        assert_eq!(camelize("1my-app"), "1myApp");
        assert_eq!(upper_camelize("1my-app"), "1myApp");
    }

    #[test]
    fn camelize_is_idempotent() {
        let samples = [
            "my-app-name",
            "My App Name",
            "already camelCase",
            "FOO-bar",
            "a_b-c d",
            "my2App",
            "1leading-digit",
            "--weird__input  ",
            "x",
            "",
        ];
        for s in samples {
            let once = camelize(s);
            assert_eq!(camelize(&once), once, "camelize not idempotent for {s:?}");
            let upper_once = upper_camelize(s);
            assert_eq!(
                upper_camelize(&upper_once),
                upper_once,
                "upper_camelize not idempotent for {s:?}"
            );
        }
    }

    #[test]
    fn camelize_preserves_valid_camel_case() {
        for s in ["myApp", "myAppName", "a", "my2App", "aBCd", "xY"] {
            assert!(is_camel_case(s));
            assert_eq!(camelize(s), s);
        }
    }

    #[test]
    fn dash_round_trips_through_camel() {
        for d in ["my-app-name", "app", "my2-app", "some-long-name"] {
            assert_eq!(camel_case_to_dash(&camelize(d)), d);
            assert_eq!(camel_case_to_dash(&upper_camelize(d)), d);
        }
    }

    #[test]
    fn hostile_input_never_panics() {
        let long = "aB-".repeat(10_000);
        let _ = camelize(&long);
        let _ = upper_camelize(&long);
        let _ = camel_case_to_dash(&long);
        let _ = is_camel_case(&long);

        let nul = "my\0app-Name";
        let _ = camelize(nul);
        let _ = upper_camelize(nul);
        let _ = camel_case_to_dash(nul);
        assert!(!is_camel_case(nul));
    }

    #[test]
    fn canonical_names_are_consistent() {
        let names = CanonicalNames::derive("my-app-name");
        assert_eq!(names.camel, "myAppName");
        assert_eq!(names.upper_camel, "MyAppName");
        assert_eq!(names.dash, "my-app-name");
        // pure: equal input, equal output
        assert_eq!(names, CanonicalNames::derive("my-app-name"));
    }
}
