//! Property-name spelling conversions.
//!
//! Style properties can be addressed either by their CSS name
//! (`border-color`, `float`) or by the camel-cased attribute form exposed on
//! style objects (`borderColor`, `cssFloat`). Both spellings name the same
//! property; these helpers map between them.

/// Convert a property name in either spelling to its camel-cased form.
///
/// `border-color` -> `borderColor`, `float` -> `cssFloat`,
/// `-webkit-transition` -> `WebkitTransition`, `-ms-transform` -> `msTransform`.
/// Names that are already camel-cased come back unchanged.
pub fn camel_case_property(name: &str) -> String {
    if name == "float" {
        return "cssFloat".to_string();
    }
    if name.starts_with("--") || !name.contains('-') {
        return name.to_string();
    }

    // "-ms-" is the one vendor prefix whose camel form starts lowercase.
    let (body, capitalize_first) = match name.strip_prefix('-') {
        Some(rest) if rest.starts_with("ms-") => (rest, false),
        Some(rest) => (rest, true),
        None => (name, false),
    };

    let mut out = String::with_capacity(body.len());
    for (i, segment) in body.split('-').filter(|s| !s.is_empty()).enumerate() {
        if i == 0 && !capitalize_first {
            out.push_str(segment);
        } else {
            push_capitalized(&mut out, segment);
        }
    }
    out
}

/// Convert a property name in either spelling to its CSS (hyphenated) form.
///
/// `borderColor` -> `border-color`, `cssFloat` -> `float`,
/// `WebkitTransition` -> `-webkit-transition`, `msTransform` -> `-ms-transform`.
pub fn hyphenate_property(name: &str) -> String {
    if name == "cssFloat" {
        return "float".to_string();
    }
    if name.starts_with("--") {
        return name.to_string();
    }
    if name.contains('-') {
        return name.to_ascii_lowercase();
    }

    let mut out = String::with_capacity(name.len() + 4);
    if name.starts_with("ms") && name[2..].starts_with(|c: char| c.is_ascii_uppercase()) {
        out.push('-');
    }
    for c in name.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

const VENDOR_PREFIXES: [&str; 4] = ["webkit-", "moz-", "ms-", "o-"];

/// Whether `name`, in CSS (hyphenated) spelling, can name a property in a
/// declaration block: a `--custom` name, or lowercase alphanumeric segments
/// joined by single hyphens, optionally behind a vendor prefix.
///
/// `-width` (from the camel form `Width`) and the empty name are rejected.
pub fn is_property_name(name: &str) -> bool {
    if let Some(custom) = name.strip_prefix("--") {
        return !custom.is_empty()
            && !custom.contains(|c: char| c.is_whitespace() || matches!(c, ':' | ';' | '!'));
    }
    let body = match name.strip_prefix('-') {
        Some(rest) => match VENDOR_PREFIXES.iter().find_map(|p| rest.strip_prefix(p)) {
            Some(body) => body,
            None => return false,
        },
        None => name,
    };
    body.starts_with(|c: char| c.is_ascii_lowercase())
        && body.split('-').all(|segment| {
            !segment.is_empty()
                && segment
                    .bytes()
                    .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit())
        })
}

fn push_capitalized(out: &mut String, segment: &str) {
    let mut chars = segment.chars();
    if let Some(first) = chars.next() {
        out.push(first.to_ascii_uppercase());
        out.push_str(chars.as_str());
    }
}
