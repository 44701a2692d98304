//! Text normalization shared by the search term and every searchable field.

/// Strip angle brackets and surrounding whitespace.
///
/// Values pass through this before they are echoed back into markup.
pub fn sanitize(value: &str) -> String {
    value.replace(['<', '>'], "").trim().to_string()
}

/// Fold text into its comparison form.
///
/// # Steps
/// - Transliterate to ASCII with `deunicode` so accents disappear ("Café" → "Cafe").
/// - Lower-case.
/// - Drop `<` and `>` (transliteration can produce them, e.g. "«" → "<<").
/// - Trim.
///
/// The output is ASCII without angle brackets, so a second pass is a no-op.
pub fn normalize(value: &str) -> String {
    let folded = deunicode::deunicode(value).to_ascii_lowercase();
    sanitize(&folded)
}
