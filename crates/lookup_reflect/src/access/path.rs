use alloc::borrow::Cow;
use alloc::boxed::Box;
use alloc::string::ToString;
use core::fmt;

use lookup_utils::vec::FastVec;

use crate::Reflect;
use crate::access::{LookupError, Options, Resolved};

// -----------------------------------------------------------------------------
// Segment

/// One component of a [`Path`]: a name and an optional sequence index.
///
/// `Cast[2]` is parsed as name `Cast` with index `2`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Segment<'a> {
    pub name: Cow<'a, str>,
    pub index: Option<usize>,
}

impl<'a> Segment<'a> {
    /// Parses a single segment, without any separator handling.
    ///
    /// Only the first `[`...`]` pair is considered.
    ///
    /// # Examples
    ///
    /// ```
    /// use lookup_reflect::access::{LookupError, Segment};
    ///
    /// let seg = Segment::parse("Cast[1]").unwrap();
    /// assert_eq!(seg.name, "Cast");
    /// assert_eq!(seg.index, Some(1));
    ///
    /// let seg = Segment::parse("Role").unwrap();
    /// assert_eq!(seg.index, None);
    ///
    /// assert!(matches!(
    ///     Segment::parse("Cast[x]"),
    ///     Err(LookupError::MalformedIndex { .. }),
    /// ));
    /// ```
    pub fn parse(piece: &'a str) -> Result<Self, LookupError> {
        let malformed = || LookupError::MalformedIndex {
            segment: piece.to_string(),
        };

        match (piece.find('['), piece.find(']')) {
            (None, None) => Ok(Self {
                name: Cow::Borrowed(piece),
                index: None,
            }),
            (Some(start), Some(end)) if start < end => {
                let index = piece[start + 1..end]
                    .parse::<usize>()
                    .map_err(|_| malformed())?;

                // The bracketed text is removed, anything after `]` is kept.
                let name = if end + 1 == piece.len() {
                    Cow::Borrowed(&piece[..start])
                } else {
                    let mut name = piece[..start].to_string();
                    name.push_str(&piece[end + 1..]);
                    Cow::Owned(name)
                };

                Ok(Self {
                    name,
                    index: Some(index),
                })
            }
            _ => Err(malformed()),
        }
    }

    /// Converts the segment into one that owns its name.
    pub fn into_owned(self) -> Segment<'static> {
        Segment {
            name: Cow::Owned(self.name.into_owned()),
            index: self.index,
        }
    }
}

impl fmt::Display for Segment<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        if let Some(index) = self.index {
            write!(f, "[{index}]")?;
        }
        Ok(())
    }
}

// -----------------------------------------------------------------------------
// Path

/// A parsed lookup path, reusable across values.
///
/// [`lookup`](crate::access::lookup) parses its path on every call; parse a
/// `Path` once to run the same query many times.
///
/// # Examples
///
/// ```
/// use lookup_reflect::access::{Options, Path};
///
/// let path = Path::parse("Cast[0].Role", ".").unwrap();
/// assert_eq!(path.len(), 2);
/// assert_eq!(path.to_string(), "Cast[0].Role");
///
/// let path = Path::parse("a/b", "/").unwrap();
/// assert_eq!(path.segments()[1].name, "b");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Path<'a>(Box<[Segment<'a>]>);

impl<'a> Path<'a> {
    /// Splits `path` on `split_token` and parses every piece.
    ///
    /// An empty `split_token` keeps the whole path as one segment.
    pub fn parse(path: &'a str, split_token: &str) -> Result<Self, LookupError> {
        let mut vec: FastVec<Segment<'a>, 8> = FastVec::new();
        let data = vec.get();

        if split_token.is_empty() {
            data.push(Segment::parse(path)?);
        } else {
            for piece in path.split(split_token) {
                data.push(Segment::parse(piece)?);
            }
        }

        Ok(Self(vec.into_boxed_slice()))
    }

    /// Returns the parsed segments in path order.
    #[inline]
    pub fn segments(&self) -> &[Segment<'a>] {
        &self.0
    }

    /// Returns the number of segments.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Converts the path into one that owns all segment names.
    pub fn into_owned(self) -> Path<'static> {
        Path(self.0.into_iter().map(Segment::into_owned).collect())
    }

    /// Resolves this path against `value`.
    ///
    /// See [`lookup`](crate::access::lookup) for the resolution rules;
    /// [`Options::split_token`] is ignored since the path is already split.
    #[inline]
    pub fn lookup<'r>(
        &self,
        value: &'r dyn Reflect,
        options: &Options,
    ) -> Result<Resolved<'r>, LookupError> {
        crate::access::walk::run(value, &self.0, options)
    }
}

impl fmt::Display for Path<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            fmt::Display::fmt(segment, f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use alloc::borrow::Cow;
    use alloc::string::ToString;

    use super::{Path, Segment};
    use crate::access::LookupError;

    fn malformed(piece: &str) -> bool {
        matches!(Segment::parse(piece), Err(LookupError::MalformedIndex { .. }))
    }

    #[test]
    fn dangling_brackets_are_malformed() {
        assert!(malformed("foo["));
        assert!(malformed("foo]"));
        assert!(malformed("foo[]"));
        assert!(malformed("foo]1["));
        assert!(malformed("foo[-1]"));
        assert!(malformed("foo[ 1]"));
    }

    #[test]
    fn only_first_bracket_pair_counts() {
        // `[2]` is left inside the name and can never match a field.
        let seg = Segment::parse("foo[1][2]").unwrap();
        assert_eq!(seg.name, "foo[2]");
        assert_eq!(seg.index, Some(1));
    }

    #[test]
    fn names_borrow_when_possible() {
        let seg = Segment::parse("Cast[3]").unwrap();
        assert!(matches!(seg.name, Cow::Borrowed("Cast")));
        assert_eq!(seg.to_string(), "Cast[3]");
    }

    #[test]
    fn split_tokens() {
        let path = Path::parse("A-Team.Cast.Role", ".").unwrap();
        assert_eq!(path.len(), 3);
        assert_eq!(path.segments()[0].name, "A-Team");

        let path = Path::parse("a::b::c[0]", "::").unwrap();
        assert_eq!(path.len(), 3);
        assert_eq!(path.segments()[2].index, Some(0));

        let path = Path::parse("a.b", "").unwrap();
        assert_eq!(path.len(), 1);
        assert_eq!(path.segments()[0].name, "a.b");

        let path = Path::parse("", ".").unwrap();
        assert_eq!(path.len(), 1);
        assert_eq!(path.segments()[0].name, "");
    }

    #[test]
    fn malformed_segment_fails_whole_path() {
        let err = Path::parse("a.b[.c", ".").unwrap_err();
        assert_eq!(
            err,
            LookupError::MalformedIndex {
                segment: "b[".to_string()
            }
        );
    }

    #[test]
    fn owned_path_outlives_input() {
        let owned = {
            let text = "x.y[4]".to_string();
            Path::parse(&text, ".").unwrap().into_owned()
        };
        assert_eq!(owned.to_string(), "x.y[4]");
    }
}
