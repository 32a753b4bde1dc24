//! Base-rooted URL generation.

use crate::build::build_url_with_parts;
use crate::error::BuildError;
use crate::flags::Flags;
use crate::parts::{UrlInput, UrlParts};
use crate::query::{build_query, QueryMap};

/// Generates URLs rooted at a fixed base URL.
///
/// The base's scheme, authority, and port carry over to every generated
/// URL; its path, query, and fragment do not. Non-root paths are
/// rendered without a trailing slash, the root always with one:
///
/// ```
/// use http_build_url::UrlGenerator;
///
/// let g = UrlGenerator::new("https://www.example.com/path/?query=arg#fragment")?;
/// assert_eq!(g.to(""), "https://www.example.com/");
/// assert_eq!(g.to("/"), "https://www.example.com/");
/// assert_eq!(g.to("/test"), "https://www.example.com/test");
/// assert_eq!(g.to("/test/"), "https://www.example.com/test");
/// # Ok::<_, http_build_url::BuildError>(())
/// ```
#[derive(Clone, Debug)]
pub struct UrlGenerator {
    base: UrlParts,
}

impl UrlGenerator {
    /// Creates a generator from a base URL.
    pub fn new<'a>(base: impl Into<UrlInput<'a>>) -> Result<UrlGenerator, BuildError> {
        Ok(UrlGenerator {
            base: base.into().into_parts()?,
        })
    }

    /// Returns the parts of the base URL.
    #[must_use]
    pub fn base(&self) -> &UrlParts {
        &self.base
    }

    /// Builds the URL for the given path.
    ///
    /// The base's query and fragment are stripped; an empty path (or a
    /// bare `/`) yields the root.
    #[must_use]
    pub fn to(&self, path: &str) -> String {
        let replace = UrlParts {
            path: Some(path.to_owned()),
            ..UrlParts::new()
        };
        let flags = Flags::STRIP_QUERY | Flags::STRIP_FRAGMENT;
        let (mut url, parts) = build_url_with_parts(self.base.clone(), replace, flags)
            .expect("the base was validated on construction");
        if parts.path.as_deref() != Some("/") && url.ends_with('/') {
            url.pop();
        }
        url
    }

    /// Builds the URL for the given path plus a query.
    ///
    /// An empty map yields no `?` at all.
    #[must_use]
    pub fn to_with_query(&self, path: &str, query: &QueryMap) -> String {
        let mut url = self.to(path);
        let text = build_query(query);
        if !text.is_empty() {
            url.push('?');
            url.push_str(&text);
        }
        url
    }
}
