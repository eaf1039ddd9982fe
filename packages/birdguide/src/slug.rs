/// Turn a free-text species name into the guide's page slug.
///
/// Words are capitalized and joined with `_`; apostrophes are dropped because
/// the site leaves them out of URLs (`swainson's thrush` -> `Swainsons_Thrush`).
pub fn species_slug(name: &str) -> String {
    name.split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join("_")
        .replace(['\'', '\u{2019}'], "")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
