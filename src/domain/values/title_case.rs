/// Upper-cases the first letter of every word that starts with a lowercase
/// ASCII letter. A word is a maximal run of `[A-Za-z0-9_]`; anything else,
/// including non-ASCII letters, separates words.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_word = false;

    for c in s.chars() {
        let is_word = c.is_ascii_alphanumeric() || c == '_';
        if is_word && !in_word {
            out.push(c.to_ascii_uppercase());
        } else {
            out.push(c);
        }
        in_word = is_word;
    }

    out
}
