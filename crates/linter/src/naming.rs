//! Case checks and word splitting for GraphQL names
//!
//! GraphQL names are restricted to `[_A-Za-z0-9]`, so every check here works
//! on ASCII and treats anything else as a violation.

/// Split a camelCase, PascalCase or snake_case name into words
///
/// Acronyms stay together: `HTTPServer` splits into `HTTP` and `Server`.
#[must_use]
pub fn split_words(name: &str) -> Vec<&str> {
    let bytes = name.as_bytes();
    let mut words = Vec::new();
    let mut start = 0;

    for (i, &c) in bytes.iter().enumerate() {
        if c == b'_' || c == b'-' {
            if start < i {
                words.push(&name[start..i]);
            }
            start = i + 1;
            continue;
        }

        if i > start && c.is_ascii_uppercase() {
            let prev = bytes[i - 1];
            let next_is_lower = bytes.get(i + 1).is_some_and(u8::is_ascii_lowercase);
            if prev.is_ascii_lowercase()
                || prev.is_ascii_digit()
                || (prev.is_ascii_uppercase() && next_is_lower)
            {
                words.push(&name[start..i]);
                start = i;
            }
        }
    }

    if start < bytes.len() {
        words.push(&name[start..]);
    }
    words
}

#[must_use]
pub fn first_word(name: &str) -> Option<&str> {
    split_words(name).into_iter().next()
}

#[must_use]
pub fn last_word(name: &str) -> Option<&str> {
    split_words(name).pop()
}

/// The remainder of `name` after a leading verb word, e.g. `User` for
/// `createUser` and `create`. `None` when the name doesn't open with that
/// word or nothing follows it.
#[must_use]
pub fn strip_verb<'a>(name: &'a str, verb: &str) -> Option<&'a str> {
    let rest = name.strip_prefix(verb)?;
    (first_word(name)? == verb && !rest.is_empty()).then_some(rest)
}

/// Starts with an uppercase letter, then only letters and digits
#[must_use]
pub fn is_pascal_case(name: &str) -> bool {
    let mut chars = name.chars();
    chars.next().is_some_and(|c| c.is_ascii_uppercase())
        && chars.all(|c| c.is_ascii_alphanumeric())
}

/// Starts with a lowercase letter, then only letters and digits
#[must_use]
pub fn is_camel_case(name: &str) -> bool {
    let mut chars = name.chars();
    chars.next().is_some_and(|c| c.is_ascii_lowercase())
        && chars.all(|c| c.is_ascii_alphanumeric())
}

/// Check if a name is in `SCREAMING_SNAKE_CASE` format
///
/// - Only uppercase letters, digits and underscores
/// - No leading, trailing or consecutive underscores
/// - At least one letter
#[must_use]
pub fn is_screaming_snake_case(name: &str) -> bool {
    if name.is_empty() || name.starts_with('_') || name.ends_with('_') {
        return false;
    }
    if !name.chars().any(|c| c.is_ascii_alphabetic()) {
        return false;
    }

    let mut prev_was_underscore = false;
    for ch in name.chars() {
        match ch {
            'A'..='Z' | '0'..='9' => prev_was_underscore = false,
            '_' if !prev_was_underscore => prev_was_underscore = true,
            _ => return false,
        }
    }
    true
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

#[must_use]
pub fn to_pascal_case(name: &str) -> String {
    split_words(name).into_iter().map(capitalize).collect()
}

#[must_use]
pub fn to_camel_case(name: &str) -> String {
    let words = split_words(name);
    let Some((first, rest)) = words.split_first() else {
        return String::new();
    };

    let mut out = first.to_ascii_lowercase();
    for word in rest {
        out.push_str(&capitalize(word));
    }
    out
}

#[must_use]
pub fn to_screaming_snake_case(name: &str) -> String {
    split_words(name)
        .into_iter()
        .map(str::to_ascii_uppercase)
        .collect::<Vec<_>>()
        .join("_")
}
