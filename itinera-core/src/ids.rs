//! Identifier newtypes shared across the engine.
//!
//! Upstream sources hand identifiers over in mixed shapes (numeric columns,
//! textual keys). Wrapping them forces every comparison onto one canonical
//! representation at load time; a `RegionId` can only ever be compared with
//! another `RegionId`, never with a raw number or string.

use std::fmt;

/// Unique identifier of a [`Tour`](crate::Tour).
///
/// # Examples
/// ```
/// use itinera_core::TourId;
///
/// let id = TourId(7);
/// assert_eq!(id.to_string(), "7");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct TourId(pub u64);

impl fmt::Display for TourId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier of an [`Attraction`](crate::Attraction).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct AttractionId(pub u64);

impl fmt::Display for AttractionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Canonical identifier of a geographic region.
///
/// Regions are keyed textually; numeric region codes must be rendered into
/// this type when records are loaded rather than coerced per comparison.
///
/// # Examples
/// ```
/// use itinera_core::RegionId;
///
/// let region = RegionId::new("liguria");
/// assert_eq!(region, RegionId::new(String::from("liguria")));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct RegionId(pub String);

impl RegionId {
    /// Construct a region identifier from anything string-like.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl From<&str> for RegionId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
