//! Error types for HEALPix operations.
//!
//! Every failure is a caller contract violation detected before any geometry
//! runs; there is no recovery path and no partial result. The `Display`
//! strings are stable and exact — downstream code and the test suite match
//! on them verbatim.
//!
//! | Variant | Contract violated |
//! |---------|-------------------|
//! | [`InvalidResolution`](HealpixError::InvalidResolution) | `nside` not a positive power of two (or above [`MAX_NSIDE`](crate::constants::MAX_NSIDE)) |
//! | [`InvalidPixelCount`](HealpixError::InvalidPixelCount) | `npix` not of the form `12 * nside^2` |
//! | [`IndexOutOfRange`](HealpixError::IndexOutOfRange) | pixel index outside `[0, npix)` |
//! | [`OffsetOutOfRange`](HealpixError::OffsetOutOfRange) | `dx`/`dy` outside `[0, 1]` |
//! | [`InvalidOrder`](HealpixError::InvalidOrder) | ordering name not `"nested"` or `"ring"` |

use std::fmt;
use thiserror::Error;

/// Distinguishes the two ways a pixel count can fail validation.
///
/// Used with [`HealpixError::InvalidPixelCount`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelCountKind {
    /// `npix` is not a multiple of 12.
    NotDivisible,
    /// `npix / 12` is not the square of a power of two.
    NotSquare,
}

impl fmt::Display for PixelCountKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotDivisible => write!(f, "Number of pixels should be divisible by 12"),
            Self::NotSquare => write!(f, "Number of pixels is not of the form 12 * nside ** 2"),
        }
    }
}

/// Unified error type for HEALPix validation failures.
///
/// Use the constructor methods ([`invalid_resolution`](Self::invalid_resolution),
/// [`index_out_of_range`](Self::index_out_of_range), etc.) for consistent
/// error creation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HealpixError {
    /// `nside` is not a positive power of two within the supported range.
    #[error("nside should be a power of two")]
    InvalidResolution,

    /// `npix` does not correspond to any valid `nside`.
    #[error("{kind}")]
    InvalidPixelCount { kind: PixelCountKind },

    /// Pixel index outside `[0, npix)` for the given resolution.
    #[error("healpix_index should be in the range [0:{npix}]")]
    IndexOutOfRange { npix: i64 },

    /// Sub-pixel offset outside `[0, 1]`; `axis` is `"dx"` or `"dy"`.
    #[error("{axis} should be in the range [0:1]")]
    OffsetOutOfRange { axis: &'static str },

    /// Ordering name is neither `"nested"` nor `"ring"`.
    #[error("order should be 'nested' or 'ring'")]
    InvalidOrder,
}

/// Convenience alias for `Result<T, HealpixError>`.
pub type HealpixResult<T> = Result<T, HealpixError>;

impl HealpixError {
    /// Creates an [`InvalidResolution`](Self::InvalidResolution) error.
    pub fn invalid_resolution() -> Self {
        Self::InvalidResolution
    }

    /// Creates an [`InvalidPixelCount`](Self::InvalidPixelCount) with the given kind.
    pub fn invalid_pixel_count(kind: PixelCountKind) -> Self {
        Self::InvalidPixelCount { kind }
    }

    /// Creates an [`IndexOutOfRange`](Self::IndexOutOfRange) for a tessellation
    /// of `npix` pixels.
    pub fn index_out_of_range(npix: i64) -> Self {
        Self::IndexOutOfRange { npix }
    }

    /// Creates an [`OffsetOutOfRange`](Self::OffsetOutOfRange) for the named axis.
    pub fn offset_out_of_range(axis: &'static str) -> Self {
        Self::OffsetOutOfRange { axis }
    }
}
