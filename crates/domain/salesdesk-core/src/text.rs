/// Re-case `value` so that casing alternates by character position.
///
/// With `lower_first` set, even positions (0-based) are lowercased and odd
/// positions uppercased; otherwise the assignment is inverted. Characters
/// without case pass through, and so do characters whose case mapping would
/// change the character count, so the output always has as many characters
/// as the input.
pub fn alternate_case(value: &str, lower_first: bool) -> String {
    value
        .chars()
        .enumerate()
        .map(|(i, c)| {
            let upper = (i % 2 != 0) == lower_first;
            if upper {
                single(c.to_uppercase()).unwrap_or(c)
            } else {
                single(c.to_lowercase()).unwrap_or(c)
            }
        })
        .collect()
}

fn single(mut mapped: impl Iterator<Item = char>) -> Option<char> {
    let first = mapped.next()?;
    match mapped.next() {
        Some(_) => None,
        None => Some(first),
    }
}
