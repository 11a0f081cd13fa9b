//! Shared helpers for fixture-driven tests: loading build cases from TOML or
//! JSON files and rendering readable diffs of serialized markup.

use serde::Deserialize;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

pub const FIXTURE_FORMAT_V1: &str = "dombuild-fixtures-v1";

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
struct FixtureFile {
    format: String,
    #[serde(rename = "case")]
    cases: Vec<BuildCase>,
}

/// One descriptor and the markup it must build to.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct BuildCase {
    pub name: String,
    /// Descriptor as JSON text.
    pub descriptor: String,
    /// Expected `outer_html` of the built node. With `fragment = true` the
    /// result is appended to a `<div>` and the div's `inner_html` compared.
    pub html: String,
    #[serde(default)]
    pub fragment: bool,
}

#[derive(Clone, Debug)]
pub struct LoadedCase {
    pub path: PathBuf,
    pub case: BuildCase,
}

/// Load every `*.toml` and `*.json` fixture file under `dir`, sorted by file
/// name. Panics with the offending path on unreadable or malformed files and
/// on duplicate case names.
pub fn load_build_cases(dir: &Path) -> Vec<LoadedCase> {
    let mut paths: Vec<PathBuf> = fs::read_dir(dir)
        .unwrap_or_else(|err| panic!("failed to read fixture dir {dir:?}: {err}"))
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| {
            matches!(
                path.extension().and_then(|e| e.to_str()),
                Some("toml") | Some("json")
            )
        })
        .collect();
    paths.sort();

    let mut seen = BTreeSet::new();
    let mut out = Vec::new();
    for path in paths {
        let file = read_fixture_file(&path);
        assert_eq!(
            file.format, FIXTURE_FORMAT_V1,
            "unsupported fixture format in {path:?}"
        );
        for case in file.cases {
            assert!(
                seen.insert(case.name.clone()),
                "duplicate fixture case name in {path:?}: {}",
                case.name
            );
            out.push(LoadedCase {
                path: path.clone(),
                case,
            });
        }
    }
    out
}

fn read_fixture_file(path: &Path) -> FixtureFile {
    let content = fs::read_to_string(path)
        .unwrap_or_else(|err| panic!("failed to read fixture {path:?}: {err}"));
    if path.extension().and_then(|e| e.to_str()) == Some("json") {
        serde_json::from_str(&content)
            .unwrap_or_else(|err| panic!("failed to parse fixture JSON {path:?}: {err}"))
    } else {
        toml::from_str(&content)
            .unwrap_or_else(|err| panic!("failed to parse fixture TOML {path:?}: {err}"))
    }
}

/// Split serialized markup so each tag starts a new line, with control
/// characters made visible. Used to feed [`diff_lines`].
pub fn markup_lines(html: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for ch in html.chars() {
        if ch == '<' && !current.is_empty() {
            lines.push(escape_text(&current));
            current.clear();
        }
        current.push(ch);
        if ch == '>' {
            lines.push(escape_text(&current));
            current.clear();
        }
    }
    if !current.is_empty() {
        lines.push(escape_text(&current));
    }
    lines
}

pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{a0}' => out.push_str("\\u{A0}"),
            ch if ch < ' ' => {
                use std::fmt::Write;
                let _ = write!(&mut out, "\\u{{{:02X}}}", ch as u32);
            }
            _ => out.push(ch),
        }
    }
    out
}

/// Describe the first mismatch between two line lists, with two lines of
/// context. When they agree only the line counts are reported.
pub fn diff_lines(expected: &[String], actual: &[String]) -> String {
    use std::fmt::Write;
    let max = expected.len().max(actual.len());
    let missing = "<missing>";
    let line = |lines: &[String], i: usize| lines.get(i).map_or(missing, String::as_str).to_string();
    let mut out = String::new();

    let mismatch = (0..max).find(|&i| line(expected, i) != line(actual, i));
    if let Some(i) = mismatch {
        let start = i.saturating_sub(2);
        let end = (i + 3).min(max);
        let _ = writeln!(
            &mut out,
            "first mismatch at line {} (showing {}..={}):",
            i + 1,
            start + 1,
            end
        );
        for idx in start..end {
            let marker = if idx == i { ">" } else { " " };
            let _ = writeln!(&mut out, "{marker} {:>4}  expected: {}", idx + 1, line(expected, idx));
            let _ = writeln!(&mut out, "{marker} {:>4}    actual: {}", idx + 1, line(actual, idx));
        }
    }
    let _ = writeln!(
        &mut out,
        "expected {} lines, actual {} lines",
        expected.len(),
        actual.len()
    );
    out
}
