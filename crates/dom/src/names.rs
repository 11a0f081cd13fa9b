//! Name validation and property reflection tables.

/// Element names must start with an ASCII letter and may not contain
/// whitespace, `/`, `>` or NUL.
pub fn is_valid_element_name(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    first.is_ascii_alphabetic()
        && chars.all(|c| !c.is_ascii_whitespace() && !matches!(c, '/' | '>' | '\0'))
}

/// Attribute names follow the XML `Name` production, restricted to the
/// characters that matter in practice: a letter, `_` or `:` first, then
/// letters, digits, `-`, `.`, `_` or `:`. Non-ASCII letters are accepted.
pub fn is_valid_attribute_name(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    let start_ok = first.is_ascii_alphabetic() || matches!(first, '_' | ':') || !first.is_ascii();
    start_ok
        && chars.all(|c| {
            c.is_ascii_alphanumeric() || matches!(c, '-' | '.' | '_' | ':') || !c.is_ascii()
        })
}

/// Attribute backing a reflected element property, if any.
///
/// Assigning one of these properties writes the attribute; reading it reads
/// the attribute back.
pub fn reflected_attribute(property: &str) -> Option<&'static str> {
    let attr = match property {
        "id" => "id",
        "className" => "class",
        "htmlFor" => "for",
        "title" => "title",
        "lang" => "lang",
        "dir" => "dir",
        "type" => "type",
        "name" => "name",
        "href" => "href",
        "src" => "src",
        "alt" => "alt",
        "rel" => "rel",
        "placeholder" => "placeholder",
        _ => return None,
    };
    Some(attr)
}

pub fn is_void_element(name: &str) -> bool {
    matches!(
        name,
        "area"
            | "base"
            | "br"
            | "col"
            | "embed"
            | "hr"
            | "img"
            | "input"
            | "link"
            | "meta"
            | "source"
            | "track"
            | "wbr"
    )
}

/// Elements whose text children serialize without escaping.
pub fn is_raw_text_element(name: &str) -> bool {
    matches!(
        name,
        "style" | "script" | "xmp" | "iframe" | "noembed" | "noframes" | "plaintext"
    )
}
