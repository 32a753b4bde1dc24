//! The build/merge pipeline.

use crate::error::BuildError;
use crate::flags::{Flags, MergeOptions};
use crate::parser;
use crate::parts::{UrlInput, UrlParts};
use crate::query::{merge_query, Query};
use crate::resolve::resolve_path;

/// Builds a URL from a base and a set of replacement parts.
///
/// Both inputs may be given as strings or as [`UrlParts`]; the two
/// forms are equivalent. With [`Flags::REPLACE`] every component
/// present in the replacement overwrites the base's; `STRIP_*` and
/// `JOIN_*` flags change that per component, as described on [`Flags`].
///
/// The output is a normalized URL string: dot segments are resolved,
/// component data is percent-encoded (never doubly so), queries are
/// re-serialized canonically, and a port matching the final scheme's
/// well-known default is dropped.
///
/// ```
/// use http_build_url::{build_url, Flags, UrlParts};
///
/// let url = build_url(
///     "https://example.com/",
///     "/a/b/c/./../../g",
///     Flags::REPLACE,
/// )?;
/// assert_eq!(url, "https://example.com/a/g");
///
/// let url = build_url(
///     "http://example.com/path/page?id=3",
///     UrlParts {
///         query: Some("sort=asc".into()),
///         ..UrlParts::new()
///     },
///     Flags::JOIN_QUERY,
/// )?;
/// assert_eq!(url, "http://example.com/path/page?id=3&sort=asc");
/// # Ok::<_, http_build_url::BuildError>(())
/// ```
pub fn build_url<'a, 'b>(
    base: impl Into<UrlInput<'a>>,
    replace: impl Into<UrlInput<'b>>,
    flags: Flags,
) -> Result<String, BuildError> {
    let (url, _) = build_url_with_parts(base, replace, flags)?;
    Ok(url)
}

/// Builds a URL and also returns its final decomposition.
///
/// The returned parts decompose the returned string exactly: parsing
/// the string back yields the same parts. On error nothing is
/// produced.
///
/// ```
/// use http_build_url::{build_url_with_parts, Flags, UrlParts};
///
/// let (url, parts) =
///     build_url_with_parts("http://example.com:80/a?x=1", UrlParts::new(), Flags::REPLACE)?;
/// assert_eq!(url, "http://example.com/a?x=1");
/// assert_eq!(parts.port, None);
/// assert_eq!(parts, UrlParts::parse(&url)?);
/// # Ok::<_, http_build_url::BuildError>(())
/// ```
pub fn build_url_with_parts<'a, 'b>(
    base: impl Into<UrlInput<'a>>,
    replace: impl Into<UrlInput<'b>>,
    flags: Flags,
) -> Result<(String, UrlParts), BuildError> {
    let base = base.into().into_parts()?;
    let replace = replace.into().into_parts()?;

    let merged = merge(base, replace, MergeOptions::from(flags));
    let url = merged.to_string();
    let parts = parser::parse(&url).expect("a rendered URL always reparses");
    Ok((url, parts))
}

/// Merges the replacement into the base, component by component, in a
/// fixed order. Stripping is applied to both sides first, so a
/// replacement never resurrects a stripped component.
fn merge(mut base: UrlParts, replace: UrlParts, o: MergeOptions) -> UrlParts {
    // Scheme has no strip flag: replace-or-keep only.
    if let Some(scheme) = replace.scheme {
        base.scheme = Some(scheme);
    }

    base.user = merge_component(base.user, replace.user, o.strip_user);
    base.pass = merge_component(base.pass, replace.pass, o.strip_pass);

    if let Some(host) = replace.host {
        base.host = Some(host);
    }

    base.port = merge_component(base.port, replace.port, o.strip_port);

    base.path = if o.strip_path {
        None
    } else {
        let resolved = resolve_path(
            base.path.as_deref().unwrap_or(""),
            replace.path.as_deref(),
            o.join_path,
            base.host.is_some(),
        );
        Some(resolved).filter(|p| !p.is_empty())
    };

    base.query = if o.strip_query {
        None
    } else {
        merged_query(base.query.take(), replace.query, o.join_query)
    };

    base.fragment = merge_component(base.fragment, replace.fragment, o.strip_fragment);
    base
}

fn merge_component<T>(base: Option<T>, replace: Option<T>, strip: bool) -> Option<T> {
    if strip {
        None
    } else {
        replace.or(base)
    }
}

fn merged_query(base: Option<Query>, replace: Option<Query>, join: bool) -> Option<Query> {
    let map = match (base, replace) {
        (Some(b), Some(r)) if join => {
            let mut map = b.into_map();
            merge_query(&mut map, r.into_map());
            map
        }
        (_, Some(r)) => r.into_map(),
        (Some(b), None) => b.into_map(),
        (None, None) => return None,
    };
    if map.is_empty() {
        None
    } else {
        Some(Query::Map(map))
    }
}
