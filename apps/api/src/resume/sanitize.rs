//! Typographic-punctuation normalization for document output.
//!
//! The document's monospace font cannot render smart punctuation, so a
//! fixed substitution table maps it to plain ASCII. Every replacement is
//! itself ASCII, which makes the pass idempotent.

const SUBSTITUTIONS: &[(char, &str)] = &[
    ('\u{2013}', "-"),   // en dash
    ('\u{2014}', "-"),   // em dash
    ('\u{201C}', "\""),  // left smart quote
    ('\u{201D}', "\""),  // right smart quote
    ('\u{2018}', "'"),   // left smart apostrophe
    ('\u{2019}', "'"),   // right smart apostrophe
    ('\u{2022}', "-"),   // bullet
    ('\u{2026}', "..."), // ellipsis
];

pub fn sanitize_for_document(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match SUBSTITUTIONS.iter().find(|(from, _)| *from == c) {
            Some((_, replacement)) => out.push_str(replacement),
            None => out.push(c),
        }
    }
    out
}
