//! Bilinear interpolation of a pixel-sampled field.
//!
//! A query position falls inside one pixel; together with up to three
//! adjacent pixels (chosen per axis by which side of the center the
//! position sits on) the four surrounding pixel centers span a bilinear
//! patch in the facet frame, and the field is averaged with the usual
//! product weights.
//!
//! For corner pixels beside one of the eight singular vertices (three
//! facets meeting) the diagonal partner may not exist. Its weight is
//! dropped and the remaining weights renormalized to unit sum; the
//! enclosing pixel always contributes (weight ≥ 1/4), so the normalizer
//! never vanishes. A constant field therefore interpolates to the constant
//! everywhere, singular corners included.

use crate::errors::HealpixResult;
use crate::facet::FacetCoord;
use crate::order::Order;
use crate::proj::{sphere_to_facet, SpherePoint};
use crate::resolution::npix_to_nside;

/// The four bilinear contributors around one query position: the enclosing
/// pixel plus its partner in x, in y, and diagonally.
fn bilinear_terms(
    lon: f64,
    lat: f64,
    nside: i64,
    order: Order,
) -> [(Option<i64>, f64); 4] {
    let f = sphere_to_facet(SpherePoint::from_lonlat(lon, lat));
    let xs = f.x * nside as f64;
    let ys = f.y * nside as f64;
    let ix = (xs as i64).min(nside - 1);
    let iy = (ys as i64).min(nside - 1);
    let dx = xs - ix as f64;
    let dy = ys - iy as f64;

    // partner side and axis weight: distance of the offset from the center
    let (sx, ax) = if dx > 0.5 { (1, dx - 0.5) } else { (-1, 0.5 - dx) };
    let (sy, ay) = if dy > 0.5 { (1, dy - 0.5) } else { (-1, 0.5 - dy) };

    let base = FacetCoord { x: ix, y: iy, facet: f.facet };
    let encode = |c: Option<FacetCoord>| c.map(|c| c.encode(nside, order));

    [
        (Some(base.encode(nside, order)), (1.0 - ax) * (1.0 - ay)),
        (encode(base.displaced(sx, 0, nside)), ax * (1.0 - ay)),
        (encode(base.displaced(0, sy, nside)), (1.0 - ax) * ay),
        (encode(base.displaced(sx, sy, nside)), ax * ay),
    ]
}

/// Interpolates `values` (one per pixel of some valid resolution) at each
/// query position. Returns one value per position, in input order.
///
/// `lon` and `lat` are radians. The resolution is inferred from
/// `values.len()`, which must equal `12 * nside^2` for a valid `nside`.
///
/// # Errors
///
/// [`InvalidPixelCount`](crate::HealpixError::InvalidPixelCount) if
/// `values.len()` is not a valid pixel count.
///
/// # Panics
///
/// If `lon` and `lat` differ in length.
pub fn interpolate_bilinear(
    lon: &[f64],
    lat: &[f64],
    values: &[f64],
    order: Order,
) -> HealpixResult<Vec<f64>> {
    assert_eq!(lon.len(), lat.len(), "batched inputs must share a common length");
    let nside = npix_to_nside(values.len() as i64)?;

    let mut result = Vec::with_capacity(lon.len());
    for (&l, &b) in lon.iter().zip(lat) {
        let mut weighted = 0.0;
        let mut total = 0.0;
        for (pixel, weight) in bilinear_terms(l, b, nside, order) {
            if let Some(pixel) = pixel {
                weighted += values[pixel as usize] * weight;
                total += weight;
            }
        }
        result.push(weighted / total);
    }
    Ok(result)
}
