//! Path resolution.

/// Removes dot segments from a path, per [RFC 3986 §5.2.4].
///
/// Excess `..` segments at the root are dropped rather than erroring,
/// so the result never escapes above the root. A trailing slash left
/// behind by a removed `.` or `..` segment is preserved, keeping the
/// directory-ness of the input visible in the output. Relative inputs
/// stay relative.
///
/// [RFC 3986 §5.2.4]: https://datatracker.ietf.org/doc/html/rfc3986/#section-5.2.4
pub(crate) fn remove_dot_segments(path: &str) -> String {
    let relative = !path.starts_with('/');
    let mut input = path;
    let mut out = String::with_capacity(path.len());

    while !input.is_empty() {
        if let Some(rest) = input.strip_prefix("../") {
            input = rest;
        } else if let Some(rest) = input.strip_prefix("./") {
            input = rest;
        } else if input.starts_with("/./") {
            input = &input[2..];
        } else if input == "/." {
            input = "/";
        } else if input.starts_with("/../") {
            input = &input[3..];
            truncate_last_segment(&mut out);
        } else if input == "/.." {
            input = "/";
            truncate_last_segment(&mut out);
        } else if input == "." || input == ".." {
            input = "";
        } else {
            // Move the first segment, including any leading slash, to
            // the output.
            let start = usize::from(input.starts_with('/'));
            let end = match input[start..].find('/') {
                Some(i) => start + i,
                None => input.len(),
            };
            out.push_str(&input[..end]);
            input = &input[end..];
        }
    }

    // Popping the first segment of a relative path can leave the next
    // segment's slash at the front; "a/../b" resolves to "b", not "/b".
    if relative && out.starts_with('/') {
        out.remove(0);
    }
    out
}

/// Resolves the replacement path against the base path.
///
/// An absolute replacement always replaces the base outright, join or
/// not. A relative replacement replaces unless `join` is set, in which
/// case it is appended to the directory of the base (the base up to and
/// including its final slash, per [RFC 3986 §5.2.3]). The result is
/// always dot-normalized, including a kept base path that contained
/// literal dot segments.
///
/// [RFC 3986 §5.2.3]: https://datatracker.ietf.org/doc/html/rfc3986/#section-5.2.3
pub(crate) fn resolve_path(
    base: &str,
    input: Option<&str>,
    join: bool,
    has_authority: bool,
) -> String {
    match input {
        None => remove_dot_segments(base),
        Some(p) if p.starts_with('/') || !join => remove_dot_segments(p),
        Some(p) => {
            let mut merged = String::with_capacity(base.len() + p.len());
            if base.is_empty() {
                if has_authority {
                    merged.push('/');
                }
            } else if let Some(i) = base.rfind('/') {
                merged.push_str(&base[..=i]);
            }
            merged.push_str(p);
            remove_dot_segments(&merged)
        }
    }
}

fn truncate_last_segment(out: &mut String) {
    match out.rfind('/') {
        Some(i) => out.truncate(i),
        None => out.clear(),
    }
}
