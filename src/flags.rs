//! Merge flags.

use std::fmt;
use std::ops::{BitOr, BitOrAssign};

/// A bitmask of independent switches governing how [`build_url`] merges
/// the replacement into the base, one component each.
///
/// With no flags set ([`Flags::REPLACE`], the default), every component
/// present in the replacement overwrites the corresponding base
/// component and everything else is kept. `STRIP_*` flags clear a
/// component from both sides, so a replacement cannot resurrect it.
/// `JOIN_*` flags merge the old and new values of a component instead
/// of replacing.
///
/// ```
/// use http_build_url::{build_url, Flags, UrlParts};
///
/// let flags = Flags::STRIP_QUERY | Flags::STRIP_FRAGMENT;
/// let url = build_url("http://example.com/a?b=c#d", UrlParts::new(), flags)?;
/// assert_eq!(url, "http://example.com/a");
/// # Ok::<_, http_build_url::BuildError>(())
/// ```
///
/// [`build_url`]: crate::build_url
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[must_use]
pub struct Flags(u32);

impl Flags {
    /// Plain per-component replacement. This is the default, and is a
    /// named value on purpose: passing no flags means "replace", never
    /// "strip everything".
    pub const REPLACE: Flags = Flags(0);

    /// Joins the replacement path onto the directory of the base path
    /// instead of replacing it, when the replacement path is relative.
    pub const JOIN_PATH: Flags = Flags(1);

    /// Merges the replacement query into the base query key by key
    /// instead of replacing it.
    pub const JOIN_QUERY: Flags = Flags(1 << 1);

    /// Strips the user from the result.
    pub const STRIP_USER: Flags = Flags(1 << 2);

    /// Strips the password from the result.
    pub const STRIP_PASS: Flags = Flags(1 << 3);

    /// Strips both credentials; equivalent to `STRIP_USER | STRIP_PASS`.
    pub const STRIP_AUTH: Flags = Flags(Flags::STRIP_USER.0 | Flags::STRIP_PASS.0);

    /// Strips the port from the result.
    pub const STRIP_PORT: Flags = Flags(1 << 4);

    /// Strips the path from the result. A host-bearing result keeps `/`.
    pub const STRIP_PATH: Flags = Flags(1 << 5);

    /// Strips the query from the result.
    pub const STRIP_QUERY: Flags = Flags(1 << 6);

    /// Strips the fragment from the result.
    pub const STRIP_FRAGMENT: Flags = Flags(1 << 7);

    /// Every `STRIP_*` flag at once. Scheme and host are kept: a full
    /// URL strips down to `scheme://host/`.
    pub const STRIP_ALL: Flags = Flags(
        Flags::STRIP_AUTH.0
            | Flags::STRIP_PORT.0
            | Flags::STRIP_PATH.0
            | Flags::STRIP_QUERY.0
            | Flags::STRIP_FRAGMENT.0,
    );

    /// Checks whether `self` contains all flags set in `other`.
    #[inline]
    #[must_use]
    pub const fn contains(self, other: Flags) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns the raw bit value.
    #[inline]
    #[must_use]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Converts a raw bit value back into flags, ignoring unknown bits.
    #[inline]
    pub const fn from_bits(bits: u32) -> Flags {
        Flags(bits & (Flags::STRIP_ALL.0 | Flags::JOIN_PATH.0 | Flags::JOIN_QUERY.0))
    }
}

impl BitOr for Flags {
    type Output = Flags;

    #[inline]
    fn bitor(self, rhs: Flags) -> Flags {
        Flags(self.0 | rhs.0)
    }
}

impl BitOrAssign for Flags {
    #[inline]
    fn bitor_assign(&mut self, rhs: Flags) {
        self.0 |= rhs.0;
    }
}

impl fmt::Debug for Flags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const NAMES: [(Flags, &str); 8] = [
            (Flags::JOIN_PATH, "JOIN_PATH"),
            (Flags::JOIN_QUERY, "JOIN_QUERY"),
            (Flags::STRIP_USER, "STRIP_USER"),
            (Flags::STRIP_PASS, "STRIP_PASS"),
            (Flags::STRIP_PORT, "STRIP_PORT"),
            (Flags::STRIP_PATH, "STRIP_PATH"),
            (Flags::STRIP_QUERY, "STRIP_QUERY"),
            (Flags::STRIP_FRAGMENT, "STRIP_FRAGMENT"),
        ];

        if self.0 == 0 {
            return f.write_str("REPLACE");
        }
        let mut first = true;
        for (flag, name) in NAMES {
            if self.contains(flag) {
                if !first {
                    f.write_str(" | ")?;
                }
                f.write_str(name)?;
                first = false;
            }
        }
        Ok(())
    }
}

/// The flag bitmask unpacked into named booleans.
///
/// The merge pipeline only ever reads these fields; bit testing stops
/// at this boundary.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct MergeOptions {
    pub(crate) strip_user: bool,
    pub(crate) strip_pass: bool,
    pub(crate) strip_port: bool,
    pub(crate) strip_path: bool,
    pub(crate) strip_query: bool,
    pub(crate) strip_fragment: bool,
    pub(crate) join_path: bool,
    pub(crate) join_query: bool,
}

impl From<Flags> for MergeOptions {
    fn from(flags: Flags) -> Self {
        MergeOptions {
            strip_user: flags.contains(Flags::STRIP_USER),
            strip_pass: flags.contains(Flags::STRIP_PASS),
            strip_port: flags.contains(Flags::STRIP_PORT),
            strip_path: flags.contains(Flags::STRIP_PATH),
            strip_query: flags.contains(Flags::STRIP_QUERY),
            strip_fragment: flags.contains(Flags::STRIP_FRAGMENT),
            join_path: flags.contains(Flags::JOIN_PATH),
            join_query: flags.contains(Flags::JOIN_QUERY),
        }
    }
}
