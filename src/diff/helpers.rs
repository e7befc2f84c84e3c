//! Helper functions for reading paths out of git diff headers.

/// Parse the post-image path from the rest of a "diff --git " line.
///
/// Handles:
/// - "a/path/to/file b/path/to/file" (normal)
/// - "a/old b/renamed" (rename)
/// - "\"a/with\ttab\" \"b/with\ttab\"" (C-quoted paths)
///
/// Returns the path without the "b/" prefix, or None if parsing fails.
pub(super) fn parse_diff_git_line(rest: &str) -> Option<String> {
    let rest = rest.trim_end_matches(['\r', '\n']);

    if rest.ends_with('"') {
        if let Some(q_pos) = rest.rfind(" \"b/") {
            let quoted = unquote_path(&rest[q_pos + 1..])?;
            return quoted.strip_prefix("b/").map(String::from);
        }
    }

    // Paths may contain spaces; the last " b/" separates the two sides
    if let Some(b_pos) = rest.rfind(" b/") {
        return Some(rest[b_pos + 3..].to_string());
    }

    None
}

/// Parse the path from the rest of a "+++ " line.
///
/// Returns `Some(None)` for "/dev/null" (file deleted), `Some(Some(path))` for
/// "b/<path>", and `None` when the line cannot be interpreted.
pub(super) fn parse_new_file_line(rest: &str) -> Option<Option<String>> {
    let rest = rest.trim_end_matches(['\r', '\n']);

    if rest == "/dev/null" {
        return Some(None);
    }

    let path = if rest.starts_with('"') {
        unquote_path(rest)?
    } else {
        rest.to_string()
    };

    path.strip_prefix("b/").map(|p| Some(p.to_string()))
}

/// Undo git's C-style quoting of a path: "\"dir/a\\tb\"" -> "dir/a\tb".
///
/// Octal escapes are decoded as raw bytes and the result re-read as UTF-8.
pub(super) fn unquote_path(quoted: &str) -> Option<String> {
    let inner = quoted.strip_prefix('"')?.strip_suffix('"')?;
    let mut bytes = Vec::with_capacity(inner.len());
    let mut iter = inner.bytes().peekable();

    while let Some(b) = iter.next() {
        if b != b'\\' {
            bytes.push(b);
            continue;
        }
        match iter.next()? {
            b'n' => bytes.push(b'\n'),
            b't' => bytes.push(b'\t'),
            b'r' => bytes.push(b'\r'),
            b'a' => bytes.push(0x07),
            b'b' => bytes.push(0x08),
            b'f' => bytes.push(0x0c),
            b'v' => bytes.push(0x0b),
            b'"' => bytes.push(b'"'),
            b'\\' => bytes.push(b'\\'),
            d @ b'0'..=b'7' => {
                let mut value = u32::from(d - b'0');
                for _ in 0..2 {
                    match iter.peek() {
                        Some(&n @ b'0'..=b'7') => {
                            value = value * 8 + u32::from(n - b'0');
                            iter.next();
                        }
                        _ => break,
                    }
                }
                bytes.push(u8::try_from(value).ok()?);
            }
            _ => return None,
        }
    }

    Some(String::from_utf8_lossy(&bytes).into_owned())
}
