//! Body decoding.
//!
//! Pick an encoding from the `Content-Type` charset first, then (for HTML)
//! from a `<meta>` declaration near the top of the document, else UTF-8.
//! A byte-order mark overrides all of these.

use encoding_rs::{Encoding, UTF_8};

/// How far into an HTML body to look for a `<meta>` charset.
const META_SNIFF_LEN: usize = 1024;

/// Decode `body` as text.
pub(super) fn decode(body: &[u8], content_type: Option<&str>, sniff_meta: bool) -> String {
    let label = content_type
        .and_then(header_charset)
        .or_else(|| if sniff_meta { meta_charset(body) } else { None });

    let encoding = label
        .and_then(|label| Encoding::for_label(label.as_bytes()))
        .unwrap_or(UTF_8);

    let (text, _, _) = encoding.decode(body);
    text.into_owned()
}

/// `charset` parameter of a `Content-Type` value.
fn header_charset(content_type: &str) -> Option<String> {
    content_type.split(';').skip(1).find_map(|param| {
        let (name, value) = param.split_once('=')?;
        if !name.trim().eq_ignore_ascii_case("charset") {
            return None;
        }
        let value = value.trim().trim_matches(|c| c == '"' || c == '\'');
        (!value.is_empty()).then(|| value.to_string())
    })
}

/// Charset declared by a `<meta charset>` or `<meta http-equiv>` tag.
fn meta_charset(body: &[u8]) -> Option<String> {
    let head = &body[..body.len().min(META_SNIFF_LEN)];
    let head = String::from_utf8_lossy(head).to_ascii_lowercase();

    head.match_indices("<meta")
        .filter_map(|(start, _)| {
            let tag = &head[start..];
            let tag = &tag[..tag.find('>').unwrap_or(tag.len())];
            let value = &tag[tag.find("charset=")? + "charset=".len()..];
            let value = value.trim_start_matches(['"', '\'']);
            let end = value
                .find(|c: char| matches!(c, '"' | '\'' | ';' | '/' | '>') || c.is_whitespace())
                .unwrap_or(value.len());
            (end > 0).then(|| value[..end].to_string())
        })
        .next()
}
