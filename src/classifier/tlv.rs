// TLV scanner
//------------------------------------------------------------------------------

/// Scans a flat tag-length-value string into an ordered list of (tag, value)
/// pairs: 2-char tag, 2-digit decimal length, then that many chars of value.
///
/// The scan is best-effort by design. Damaged stickers and partial reads make
/// malformed payloads common, and a partial classification beats none: if
/// fewer than 4 chars remain, the length field is not a non-negative integer,
/// or the value would run past the end of the input, the scanner stops and
/// returns the pairs accumulated so far. It never panics and never reads out
/// of bounds, including on multi-byte UTF-8 input.
pub fn scan(data: &str) -> Vec<(String, String)> {
    let chars: Vec<char> = data.chars().collect();
    let mut entries = Vec::new();
    let mut index = 0;

    while index + 4 <= chars.len() {
        let tag: String = chars[index..index + 2].iter().collect();
        let len_field: String = chars[index + 2..index + 4].iter().collect();
        let len = match len_field.parse::<usize>() {
            Ok(l) => l,
            Err(_) => break,
        };
        let end = index + 4 + len;
        if end > chars.len() {
            break;
        }
        entries.push((tag, chars[index + 4..end].iter().collect()));
        index = end;
    }

    entries
}

/// Looks up a tag with mapping semantics: when a tag repeats, the last
/// occurrence wins.
pub fn lookup<'a>(entries: &'a [(String, String)], tag: &str) -> Option<&'a str> {
    entries.iter().rev().find(|(t, _)| t == tag).map(|(_, v)| v.as_str())
}
