use std::collections::BTreeMap;
use std::path::Path;

use axle_util::errors::AxleError;

/// Loads a `.axle.env` file (shell-style `KEY=value` format).
///
/// `.axle.env` holds build secrets (keystore passwords, CI tokens). Values are
/// available via `${env:VAR}` interpolation in `Axle.toml`.
pub fn load_env_file(path: &Path) -> Result<BTreeMap<String, String>, AxleError> {
    let mut map = BTreeMap::new();
    if !path.is_file() {
        return Ok(map);
    }
    let content = axle_util::fs::read_to_string(path)?;
    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        if let Some((key, value)) = trimmed.split_once('=') {
            map.insert(key.trim().to_string(), value.trim().to_string());
        }
    }
    Ok(map)
}

/// Interpolate `${env:VAR}` references in a string.
///
/// Looks up values first from the provided `env_overrides` map (populated
/// from `.axle.env`), then falls back to actual process environment variables.
/// Unknown variables expand to the empty string.
pub fn interpolate(input: &str, env_overrides: &BTreeMap<String, String>) -> String {
    let mut result = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(start) = rest.find("${env:") {
        let Some(len) = rest[start..].find('}') else {
            break;
        };
        let key = &rest[start + 6..start + len];
        let value = env_overrides
            .get(key)
            .cloned()
            .or_else(|| std::env::var(key).ok())
            .unwrap_or_default();
        result.push_str(&rest[..start]);
        result.push_str(&value);
        rest = &rest[start + len + 1..];
    }
    result.push_str(rest);
    result
}

/// Parse Java `.properties` content.
///
/// Keys end at the first unescaped `=`, `:` or whitespace (`key value`).
/// A line ending in an odd number of backslashes continues on the next line,
/// whose leading whitespace is dropped. Handles `#` and `!` comments and the
/// backslash escapes found in generated files such as `local.properties`
/// (`C\:\\Users\\dev`).
pub fn parse_properties(content: &str) -> BTreeMap<String, String> {
    let mut map = BTreeMap::new();
    for line in logical_lines(content) {
        let (key, value) = split_entry(&line);
        map.insert(unescape(key), unescape(value));
    }
    map
}

/// Read and parse a `.properties` file.
pub fn load_properties_file(path: &Path) -> Result<BTreeMap<String, String>, AxleError> {
    let content = axle_util::fs::read_to_string(path)?;
    Ok(parse_properties(&content))
}

/// Join continued lines and drop blanks and comments.
fn logical_lines(content: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut pending: Option<String> = None;
    for raw in content.lines() {
        let trimmed = raw.trim_start();
        let mut line = match pending.take() {
            Some(mut head) => {
                head.push_str(trimmed);
                head
            }
            None => {
                if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with('!') {
                    continue;
                }
                trimmed.to_string()
            }
        };
        if continues(&line) {
            line.pop();
            pending = Some(line);
        } else {
            lines.push(line);
        }
    }
    if let Some(last) = pending {
        lines.push(last);
    }
    lines
}

fn continues(line: &str) -> bool {
    line.chars().rev().take_while(|&c| c == '\\').count() % 2 == 1
}

/// Split a logical line into raw key and value.
fn split_entry(line: &str) -> (&str, &str) {
    let mut escaped = false;
    for (i, ch) in line.char_indices() {
        match ch {
            '\\' if !escaped => escaped = true,
            '=' | ':' if !escaped => return (&line[..i], line[i + 1..].trim_start()),
            c if c.is_whitespace() && !escaped => {
                let rest = line[i..].trim_start();
                let rest = rest
                    .strip_prefix(&['=', ':'][..])
                    .map(str::trim_start)
                    .unwrap_or(rest);
                return (&line[..i], rest);
            }
            _ => escaped = false,
        }
    }
    (line, "")
}

fn unescape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some(other) => out.push(other),
            None => {}
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interpolate_prefers_overrides() {
        let mut overrides = BTreeMap::new();
        overrides.insert("AXLE_TEST_STORE_PASS".to_string(), "hunter2".to_string());
        let out = interpolate("store = \"${env:AXLE_TEST_STORE_PASS}\"", &overrides);
        assert_eq!(out, "store = \"hunter2\"");
    }

    #[test]
    fn interpolate_unknown_is_empty() {
        let out = interpolate("a${env:AXLE_TEST_SURELY_UNSET_VAR}b", &BTreeMap::new());
        assert_eq!(out, "ab");
    }

    #[test]
    fn interpolate_does_not_rescan_substituted_values() {
        let mut overrides = BTreeMap::new();
        overrides.insert("A".to_string(), "${env:A}".to_string());
        assert_eq!(interpolate("${env:A}", &overrides), "${env:A}");
    }

    #[test]
    fn interpolate_unterminated_reference_is_kept() {
        assert_eq!(interpolate("x ${env:OOPS", &BTreeMap::new()), "x ${env:OOPS");
    }

    #[test]
    fn parse_local_properties() {
        let props = parse_properties(
            "## This file is generated\n\
             sdk.dir=C\\:\\\\Users\\\\dev\\\\Android\\\\sdk\n\
             flutter.sdk=/opt/flutter\n\
             flutter.versionCode = 7\n\
             ! bang comment\n\
             flutter.versionName: 1.2.0\n",
        );
        assert_eq!(props["sdk.dir"], "C:\\Users\\dev\\Android\\sdk");
        assert_eq!(props["flutter.sdk"], "/opt/flutter");
        assert_eq!(props["flutter.versionCode"], "7");
        assert_eq!(props["flutter.versionName"], "1.2.0");
        assert_eq!(props.len(), 4);
    }

    #[test]
    fn whitespace_separates_key_and_value() {
        let props = parse_properties("flutter.versionName 1.2.0\nflutter.versionCode  =  7\n");
        assert_eq!(props["flutter.versionName"], "1.2.0");
        assert_eq!(props["flutter.versionCode"], "7");
        assert_eq!(props.len(), 2);
    }

    #[test]
    fn trailing_backslash_continues_the_value() {
        let props = parse_properties(
            "flutter.buildMode=re\\\n    lease\n\
             sdk.dir=C\\:\\\\sdk\\\\\n\
             next=1\n",
        );
        assert_eq!(props["flutter.buildMode"], "release");
        assert_eq!(props["sdk.dir"], "C:\\sdk\\");
        assert_eq!(props["next"], "1");
        assert_eq!(props.len(), 3);
    }

    #[test]
    fn escaped_space_stays_in_key() {
        let props = parse_properties("my\\ key = value\n");
        assert_eq!(props["my key"], "value");
    }
}
