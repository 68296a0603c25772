use aho_corasick::AhoCorasick;
use std::{borrow::Cow, sync::LazyLock};

/// Tag name the document root must carry.
pub(crate) const ROOT_TAG_NAME: &str = "svg";

static ENTITIES: [&str; 5] = ["&lt;", "&gt;", "&amp;", "&quot;", "&apos;"];
static ENTITY_REPLACEMENTS: [&str; 5] = ["<", ">", "&", "\"", "'"];

pub(crate) static UNESCAPING_AC: LazyLock<AhoCorasick> =
    LazyLock::new(|| AhoCorasick::new(ENTITIES).unwrap());

/// Decode the predefined XML entities. Unknown references are kept as written.
pub(crate) fn unescape_attr_value(raw: &str) -> Cow<'_, str> {
    if memchr::memchr(b'&', raw.as_bytes()).is_some() {
        Cow::from(UNESCAPING_AC.replace_all(raw, &ENTITY_REPLACEMENTS))
    } else {
        Cow::from(raw)
    }
}

pub(crate) fn is_tag_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.' || c == ':' || !c.is_ascii()
}

pub(crate) fn is_attr_name_char(c: char) -> bool {
    !matches!(c, '"' | '\'' | '>' | '/' | '=' | '<') && !c.is_ascii_whitespace()
}
