//! Resolution arithmetic: `nside` ↔ `npix` and derived pixel sizes.
//!
//! A resolution parameter `nside` (a positive power of two) tessellates the
//! sphere into `npix = 12 * nside^2` equal-area pixels. This module converts
//! between the two, derives pixel solid angle and approximate linear size,
//! and hosts the shared validation helpers used by every public operation.
//!
//! | Function | Output |
//! |----------|--------|
//! | [`nside_to_npix`] | pixel count |
//! | [`npix_to_nside`] | resolution parameter |
//! | [`nside_to_pixel_area`] | steradians |
//! | [`nside_to_pixel_resolution`] | arcminutes |

use crate::constants::{FOUR_PI, MAX_NSIDE, RAD_TO_ARCMIN};
use crate::errors::{HealpixError, HealpixResult, PixelCountKind};

/// Validates that `nside` is a positive power of two no larger than
/// [`MAX_NSIDE`](crate::constants::MAX_NSIDE).
pub(crate) fn validate_nside(nside: i64) -> HealpixResult<()> {
    if nside < 1 || nside > MAX_NSIDE || nside & (nside - 1) != 0 {
        return Err(HealpixError::invalid_resolution());
    }
    Ok(())
}

/// Validates that `index` lies in `[0, npix)` for the given (already
/// validated) `nside`.
pub(crate) fn validate_index(index: i64, nside: i64) -> HealpixResult<()> {
    let npix = 12 * nside * nside;
    if index < 0 || index >= npix {
        return Err(HealpixError::index_out_of_range(npix));
    }
    Ok(())
}

/// Validates that a sub-pixel offset lies in `[0, 1]`; `axis` names the
/// offending parameter in the error message.
pub(crate) fn validate_offset(value: f64, axis: &'static str) -> HealpixResult<()> {
    if !(0.0..=1.0).contains(&value) {
        return Err(HealpixError::offset_out_of_range(axis));
    }
    Ok(())
}

/// Returns the number of pixels for a given resolution.
///
/// # Errors
///
/// [`HealpixError::InvalidResolution`] if `nside` is not a positive power of
/// two.
///
/// # Example
///
/// ```
/// use celestial_healpix::nside_to_npix;
///
/// assert_eq!(nside_to_npix(4).unwrap(), 192);
/// ```
pub fn nside_to_npix(nside: i64) -> HealpixResult<i64> {
    validate_nside(nside)?;
    Ok(12 * nside * nside)
}

/// Elementwise [`nside_to_npix`] over a slice.
///
/// Every element is validated before any result is produced.
pub fn nside_to_npix_batch(nside: &[i64]) -> HealpixResult<Vec<i64>> {
    for &n in nside {
        validate_nside(n)?;
    }
    Ok(nside.iter().map(|&n| 12 * n * n).collect())
}

/// Returns the resolution parameter for a given pixel count.
///
/// # Errors
///
/// [`HealpixError::InvalidPixelCount`] if `npix` is not divisible by 12, or
/// if `npix / 12` is not the square of a power of two. The two causes carry
/// distinct messages.
pub fn npix_to_nside(npix: i64) -> HealpixResult<i64> {
    if npix <= 0 || npix % 12 != 0 {
        return Err(HealpixError::invalid_pixel_count(PixelCountKind::NotDivisible));
    }
    let square = npix / 12;
    let nside = isqrt(square);
    if nside * nside != square || validate_nside(nside).is_err() {
        return Err(HealpixError::invalid_pixel_count(PixelCountKind::NotSquare));
    }
    Ok(nside)
}

/// Elementwise [`npix_to_nside`] over a slice.
pub fn npix_to_nside_batch(npix: &[i64]) -> HealpixResult<Vec<i64>> {
    npix.iter().map(|&n| npix_to_nside(n)).collect()
}

/// Returns the solid angle of a single pixel, in steradians.
///
/// Every pixel of a tessellation has the same area: `4π / npix`.
pub fn nside_to_pixel_area(nside: i64) -> HealpixResult<f64> {
    let npix = nside_to_npix(nside)?;
    Ok(FOUR_PI / npix as f64)
}

/// Returns the approximate linear pixel size, in arcminutes.
///
/// Defined as the square root of the pixel solid angle — the side of a
/// square of equal area.
pub fn nside_to_pixel_resolution(nside: i64) -> HealpixResult<f64> {
    let area = nside_to_pixel_area(nside)?;
    Ok(libm::sqrt(area) * RAD_TO_ARCMIN)
}

/// Integer square root, exact for the pixel-count magnitudes in range.
///
/// The float estimate is taken off `sqrt` and nudged, so a value one ULP
/// either side of a perfect square cannot report the wrong root.
pub(crate) fn isqrt(value: i64) -> i64 {
    debug_assert!(value >= 0);
    let mut root = libm::sqrt(value as f64 + 0.5) as i64;
    while root > 0 && root * root > value {
        root -= 1;
    }
    while (root + 1) * (root + 1) <= value {
        root += 1;
    }
    root
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_nside_to_npix() {
        assert_eq!(nside_to_npix(1).unwrap(), 12);
        assert_eq!(nside_to_npix(4).unwrap(), 192);
        assert_eq!(nside_to_npix(256).unwrap(), 786432);
    }

    #[test]
    fn test_nside_to_npix_rejects_non_power_of_two() {
        for bad in [0, -4, 3, 15] {
            let err = nside_to_npix(bad).unwrap_err();
            assert_eq!(err.to_string(), "nside should be a power of two");
        }
    }

    #[test]
    fn test_nside_to_npix_rejects_oversized_power_of_two() {
        assert!(nside_to_npix(1 << 30).is_err());
    }

    #[test]
    fn test_nside_to_npix_batch_matches_scalar() {
        assert_eq!(nside_to_npix_batch(&[4, 4]).unwrap(), vec![192, 192]);
        assert!(nside_to_npix_batch(&[4, 15]).is_err());
    }

    #[test]
    fn test_npix_to_nside() {
        assert_eq!(npix_to_nside(12).unwrap(), 1);
        assert_eq!(npix_to_nside(192).unwrap(), 4);
    }

    #[test]
    fn test_npix_to_nside_not_divisible() {
        let err = npix_to_nside(7).unwrap_err();
        assert_eq!(err.to_string(), "Number of pixels should be divisible by 12");
    }

    #[test]
    fn test_npix_to_nside_not_square() {
        let err = npix_to_nside(12 * 8 * 9).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Number of pixels is not of the form 12 * nside ** 2"
        );
    }

    #[test]
    fn test_npix_nside_round_trip() {
        for k in 0..16 {
            let nside = 1i64 << k;
            assert_eq!(npix_to_nside(nside_to_npix(nside).unwrap()).unwrap(), nside);
        }
    }

    #[test]
    fn test_pixel_area_nside_256() {
        let area = nside_to_pixel_area(256).unwrap();
        assert_abs_diff_eq!(area, 1.5978966540475428e-05, epsilon = 1e-18);
    }

    #[test]
    fn test_pixel_resolution_nside_256() {
        let res = nside_to_pixel_resolution(256).unwrap();
        assert_abs_diff_eq!(res, 13.741945647269624, epsilon = 1e-10);
    }

    #[test]
    fn test_isqrt_around_perfect_squares() {
        for v in [0i64, 1, 2, 3, 4, 15, 16, 17, 255, 256, 257, 1 << 40] {
            let r = isqrt(v);
            assert!(r * r <= v && (r + 1) * (r + 1) > v, "isqrt({v}) = {r}");
        }
    }
}
