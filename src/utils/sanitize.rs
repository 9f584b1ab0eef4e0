// Text cleanup for recipe content coming from the online source
use std::borrow::Cow;

/// Tags removed from instruction text; anything else is left as-is
const BASIC_MARKUP_TAGS: [&str; 4] = ["<p>", "</p>", "<li>", "</li>"];

/// Remove paragraph and list-item tags
pub fn strip_basic_markup(text: &str) -> String {
    BASIC_MARKUP_TAGS
        .iter()
        .fold(text.to_string(), |acc, tag| acc.replace(tag, ""))
}

/// Percent-decode text; bytes that do not form UTF-8 become U+FFFD
pub fn percent_decode(text: &str) -> Cow<'_, str> {
    if !text.contains('%') {
        return Cow::Borrowed(text);
    }
    let bytes = urlencoding::decode_binary(text.as_bytes());
    Cow::Owned(String::from_utf8_lossy(&bytes).into_owned())
}

/// Split on '.' and rejoin the non-empty segments with ". "
pub fn resegment_sentences(text: &str) -> String {
    text.split('.')
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join(". ")
}

/// Full cleanup applied to online instruction text
pub fn clean_instructions(raw: &str) -> String {
    let stripped = strip_basic_markup(raw);
    let decoded = percent_decode(&stripped);
    resegment_sentences(&decoded)
}

/// Truncate text to a maximum number of characters
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let kept: String = text.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}
