#![warn(missing_debug_implementations, missing_docs, rust_2018_idioms)]
#![forbid(unsafe_code)]

//! A pure URL build/merge engine implementing the PECL
//! [`http_build_url()`] semantics over [RFC 3986] URI references.
//!
//! [`http_build_url()`]: https://php-legacy-docs.zend.com/manual/php5/en/function.http-build-url
//! [RFC 3986]: https://datatracker.ietf.org/doc/html/rfc3986/
//!
//! The entry point is [`build_url`]: it takes a base URL and a set of
//! replacement parts (each given either as a string or as structured
//! [`UrlParts`]) plus a set of [`Flags`] choosing per component between
//! replace, strip, and join, and produces a normalized,
//! percent-encoded URL. [`build_url_with_parts`] additionally returns
//! the decomposition of the result.
//!
//! Query strings follow PHP's `$_GET` conventions: repeated keys
//! without brackets squash (last occurrence wins), `a[]=1&a[]=2`
//! accumulates a list, and `a[k]` builds nested maps; see
//! [`parse_query`] and [`build_query`].
//!
//! # Examples
//!
//! ```
//! use http_build_url::{build_url, Flags, UrlParts};
//!
//! // Replace the path, drop the fragment, keep everything else.
//! let url = build_url(
//!     "https://user@example.com:8080/old?page=2#top",
//!     UrlParts {
//!         path: Some("/new".into()),
//!         ..UrlParts::new()
//!     },
//!     Flags::STRIP_FRAGMENT,
//! )?;
//! assert_eq!(url, "https://user@example.com:8080/new?page=2");
//!
//! // Join a relative path onto the base's directory and merge queries.
//! let url = build_url(
//!     "http://example.com/docs/index.html?lang=en",
//!     "guide.html?page=3",
//!     Flags::JOIN_PATH | Flags::JOIN_QUERY,
//! )?;
//! assert_eq!(url, "http://example.com/docs/guide.html?lang=en&page=3");
//! # Ok::<_, http_build_url::BuildError>(())
//! ```
//!
//! The whole crate is a pure computation: no I/O, no shared state, and
//! identical inputs always produce identical outputs.
//!
//! # Feature flags
//!
//! - `serde`: `Serialize`/`Deserialize` implementations for
//!   [`UrlParts`], [`Query`], [`QueryValue`], and [`Flags`].

mod build;
mod encoding;
mod error;
mod flags;
mod generator;
mod parser;
mod parts;
mod query;
mod resolve;

pub use build::{build_url, build_url_with_parts};
pub use encoding::encode_component;
pub use error::{BuildError, ParseError};
pub use flags::Flags;
pub use generator::UrlGenerator;
pub use parts::{UrlInput, UrlParts};
pub use query::{build_query, merge_query, parse_query, Query, QueryMap, QueryValue};
