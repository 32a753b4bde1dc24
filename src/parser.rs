//! URL reference parsing.

use crate::encoding::table::{ALPHA, SCHEME};
use crate::error::ParseError;
use crate::parts::UrlParts;
use crate::query::Query;

type Result<T> = std::result::Result<T, ParseError>;

/// Returns immediately with an error.
macro_rules! err {
    ($index:expr, $kind:ident) => {
        return Err(crate::error::ParseError {
            index: $index,
            kind: crate::error::ParseErrorKind::$kind,
        })
    };
}

/// Splits a URL reference into parts.
///
/// Parsing is deliberately lenient: anything that can be read as a
/// relative reference or opaque path is. The hard failures are control
/// bytes anywhere in the input and a non-numeric or out-of-range port.
pub(crate) fn parse(s: &str) -> Result<UrlParts> {
    if let Some(i) = s.bytes().position(|x| x.is_ascii_control()) {
        err!(i, UnexpectedChar);
    }

    let mut parts = UrlParts::new();
    let mut rest = s;
    let mut pos = 0;

    if let Some(i) = rest.find('#') {
        if i + 1 < rest.len() {
            parts.fragment = Some(rest[i + 1..].to_owned());
        }
        rest = &rest[..i];
    }

    if let Some(i) = rest.find('?') {
        if i + 1 < rest.len() {
            parts.query = Some(Query::Raw(rest[i + 1..].to_owned()));
        }
        rest = &rest[..i];
    }

    // scheme = ALPHA *( ALPHA / DIGIT / "+" / "-" / "." ), terminated by
    // the first ":" before any slash.
    if let Some(i) = rest.find(':') {
        if i < rest.find('/').unwrap_or(rest.len()) && is_scheme(&rest[..i]) {
            parts.scheme = Some(rest[..i].to_owned());
            rest = &rest[i + 1..];
            pos += i + 1;
        }
    }

    if let Some(after) = rest.strip_prefix("//") {
        pos += 2;
        let end = after.find('/').unwrap_or(after.len());
        parse_authority(&after[..end], pos, &mut parts)?;
        rest = &after[end..];
    }

    if !rest.is_empty() {
        parts.path = Some(rest.to_owned());
    }
    Ok(parts)
}

fn is_scheme(s: &str) -> bool {
    match s.as_bytes() {
        [] => false,
        [first, rest @ ..] => ALPHA.allows(*first) && SCHEME.validate(rest),
    }
}

fn parse_authority(s: &str, offset: usize, parts: &mut UrlParts) -> Result<()> {
    let (hostport, hp_offset) = match s.find('@') {
        Some(i) => {
            let userinfo = &s[..i];
            match userinfo.split_once(':') {
                Some((user, pass)) => {
                    parts.user = Some(user.to_owned());
                    parts.pass = Some(pass.to_owned());
                }
                None => parts.user = Some(userinfo.to_owned()),
            }
            (&s[i + 1..], offset + i + 1)
        }
        None => (s, offset),
    };

    // An IP literal keeps its brackets; a port may follow the closing
    // bracket only.
    let (host, port) = if hostport.starts_with('[') {
        match hostport.find(']') {
            Some(i) => match hostport[i + 1..].strip_prefix(':') {
                Some(p) => (&hostport[..=i], Some((p, hp_offset + i + 2))),
                None if hostport[i + 1..].is_empty() => (hostport, None),
                None => err!(hp_offset + i + 1, UnexpectedChar),
            },
            None => err!(hp_offset, UnexpectedChar),
        }
    } else {
        match hostport.split_once(':') {
            Some((host, p)) => (host, Some((p, hp_offset + host.len() + 1))),
            None => (hostport, None),
        }
    };

    parts.host = Some(host.to_owned());
    if let Some((p, p_offset)) = port {
        // An empty port ("host:") is dropped rather than rejected.
        if !p.is_empty() {
            parts.port = Some(parse_port(p, p_offset)?);
        }
    }
    Ok(())
}

fn parse_port(s: &str, offset: usize) -> Result<u16> {
    if !s.bytes().all(|x| x.is_ascii_digit()) {
        err!(offset, InvalidPort);
    }
    match s.parse::<u16>() {
        Ok(port) if port != 0 => Ok(port),
        _ => err!(offset, InvalidPort),
    }
}
