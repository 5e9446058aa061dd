//! Label helpers shared by the presentation mapper.

/// Display label for a day key: a space goes between the first run of
/// non-digits and the digits that follow it (`day1` -> `day 1`).
///
/// Display only. Days are never ordered by this label.
pub fn day_label(key: &str) -> String {
    let Some(start) = key.find(|c: char| !c.is_ascii_digit()) else {
        return key.to_string();
    };
    match key[start..].find(|c: char| c.is_ascii_digit()) {
        Some(offset) => {
            let split = start + offset;
            format!("{} {}", &key[..split], &key[split..])
        }
        None => key.to_string(),
    }
}

/// Upper-case the first character, leaving the rest untouched.
pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
