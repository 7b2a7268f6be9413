//! HTML entity decoding for question text.
//!
//! The trivia source HTML-escapes its strings, so questions and
//! answers arrive as e.g. `What&#039;s &quot;d&eacute;j&agrave; vu&quot;?`.
//! This is a plain text transform with an explicit entity table, so it
//! works the same everywhere and is trivially testable.

/// Named entities the trivia source is known to produce, plus the
/// standard XML set. Anything not listed passes through verbatim.
const NAMED_ENTITIES: &[(&str, &str)] = &[
    ("amp", "&"),
    ("lt", "<"),
    ("gt", ">"),
    ("quot", "\""),
    ("apos", "'"),
    ("nbsp", "\u{a0}"),
    ("shy", "\u{ad}"),
    ("ndash", "\u{2013}"),
    ("mdash", "\u{2014}"),
    ("lsquo", "\u{2018}"),
    ("rsquo", "\u{2019}"),
    ("ldquo", "\u{201c}"),
    ("rdquo", "\u{201d}"),
    ("hellip", "\u{2026}"),
    ("prime", "\u{2032}"),
    ("deg", "\u{b0}"),
    ("pound", "\u{a3}"),
    ("euro", "\u{20ac}"),
    ("sup2", "\u{b2}"),
    ("sup3", "\u{b3}"),
    ("frac12", "\u{bd}"),
    ("aacute", "\u{e1}"),
    ("agrave", "\u{e0}"),
    ("acirc", "\u{e2}"),
    ("auml", "\u{e4}"),
    ("aring", "\u{e5}"),
    ("ccedil", "\u{e7}"),
    ("eacute", "\u{e9}"),
    ("egrave", "\u{e8}"),
    ("ecirc", "\u{ea}"),
    ("iacute", "\u{ed}"),
    ("ntilde", "\u{f1}"),
    ("oacute", "\u{f3}"),
    ("ocirc", "\u{f4}"),
    ("ouml", "\u{f6}"),
    ("oslash", "\u{f8}"),
    ("uacute", "\u{fa}"),
    ("uuml", "\u{fc}"),
];

/// Longest entity body we bother scanning for before giving up on a
/// stray `&`.
const MAX_ENTITY_LEN: usize = 8;

/// Decode HTML entities (named, decimal, and hex numeric) in `raw`.
///
/// Unknown names and malformed sequences are left untouched rather
/// than dropped, so the output is never shorter than the meaning of
/// the input.
pub fn decode_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;

    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        rest = &rest[amp..];

        match entity_at(rest) {
            Some((decoded, consumed)) => {
                out.push_str(&decoded);
                rest = &rest[consumed..];
            }
            None => {
                out.push('&');
                rest = &rest[1..];
            }
        }
    }

    out.push_str(rest);
    out
}

/// Try to decode an entity at the start of `s` (which begins with `&`).
/// Returns the replacement text and the number of bytes consumed.
fn entity_at(s: &str) -> Option<(String, usize)> {
    let semi = s[1..].find(';')?;
    let body = &s[1..1 + semi];
    if body.is_empty() || body.len() > MAX_ENTITY_LEN {
        return None;
    }

    let decoded = if let Some(num) = body.strip_prefix('#') {
        decode_numeric(num)?
    } else {
        let (_, text) = NAMED_ENTITIES.iter().find(|(name, _)| *name == body)?;
        (*text).to_string()
    };

    Some((decoded, body.len() + 2))
}

fn decode_numeric(num: &str) -> Option<String> {
    let code = match num.strip_prefix(['x', 'X']) {
        Some(hex) => u32::from_str_radix(hex, 16).ok()?,
        None => num.parse::<u32>().ok()?,
    };
    char::from_u32(code).map(String::from)
}
