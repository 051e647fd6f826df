//! Small string helpers used when building and matching place names.

/// Capitalizes the first letter of every word and lowercases the rest.
///
/// A word starts after any character that is not a letter, so `"24-hour"` becomes
/// `"24-Hour"` and `"mcdonald's"` becomes `"Mcdonald'S"`.
pub fn title_case(value: &str) -> String {
    let mut result = String::with_capacity(value.len());
    let mut previous_is_letter = false;

    for ch in value.chars() {
        if ch.is_alphabetic() {
            if previous_is_letter {
                result.extend(ch.to_lowercase());
            } else {
                result.extend(ch.to_uppercase());
            }
            previous_is_letter = true;
        } else {
            result.push(ch);
            previous_is_letter = false;
        }
    }

    result
}
