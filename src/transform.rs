//! Bidirectional conversion between pixel indices and sky positions.
//!
//! Composes the discrete codecs of [`crate::facet`] with the continuous
//! projection of [`crate::proj`]. A pixel index plus a sub-pixel offset
//! `(dx, dy) ∈ [0, 1]²` addresses an exact point: `(0.5, 0.5)` is the pixel
//! center, and the offset survives a round trip through the sky to floating
//! precision because both directions share one projection.
//!
//! Longitudes come back wrapped to `[0, 2π)` radians; latitudes in
//! `[-π/2, π/2]` radians.
//!
//! Validation is eager: every element of every input is checked before any
//! conversion runs, so a failing call produces no partial results.

use crate::errors::HealpixResult;
use crate::facet::FacetCoord;
use crate::order::Order;
use crate::proj::{facet_to_sphere, sphere_to_facet, FacetPoint, SpherePoint};
use crate::resolution::{validate_index, validate_nside, validate_offset};

/// Center of the pixel: offset `(0.5, 0.5)`.
const CENTER: f64 = 0.5;

fn index_to_lonlat(index: i64, nside: i64, dx: f64, dy: f64, order: Order) -> (f64, f64) {
    let c = FacetCoord::decode(index, nside, order);
    let p = FacetPoint {
        x: (c.x as f64 + dx) / nside as f64,
        y: (c.y as f64 + dy) / nside as f64,
        facet: c.facet,
    };
    facet_to_sphere(p).to_lonlat()
}

fn lonlat_to_index(lon: f64, lat: f64, nside: i64, order: Order) -> (i64, f64, f64) {
    let f = sphere_to_facet(SpherePoint::from_lonlat(lon, lat));
    let xs = f.x * nside as f64;
    let ys = f.y * nside as f64;
    // cells on the far facet edge belong to the last row/column
    let ix = (xs as i64).min(nside - 1);
    let iy = (ys as i64).min(nside - 1);
    let c = FacetCoord {
        x: ix,
        y: iy,
        facet: f.facet,
    };
    (c.encode(nside, order), xs - ix as f64, ys - iy as f64)
}

/// Converts a pixel index to the sky position of its center.
///
/// Returns `(lon, lat)` in radians, longitude wrapped to `[0, 2π)`.
///
/// # Errors
///
/// [`InvalidResolution`](crate::HealpixError::InvalidResolution) if `nside`
/// is not a positive power of two;
/// [`IndexOutOfRange`](crate::HealpixError::IndexOutOfRange) if `index` is
/// outside `[0, npix)`.
pub fn healpix_to_lonlat(index: i64, nside: i64, order: Order) -> HealpixResult<(f64, f64)> {
    healpix_to_lonlat_with_offset(index, nside, CENTER, CENTER, order)
}

/// Converts a pixel index plus sub-pixel offset to a sky position.
///
/// `(dx, dy)` address a point inside the pixel in its facet frame, each in
/// `[0, 1]`, with `(0.5, 0.5)` the center.
///
/// # Errors
///
/// As [`healpix_to_lonlat`], plus
/// [`OffsetOutOfRange`](crate::HealpixError::OffsetOutOfRange) if `dx` or
/// `dy` falls outside `[0, 1]`.
pub fn healpix_to_lonlat_with_offset(
    index: i64,
    nside: i64,
    dx: f64,
    dy: f64,
    order: Order,
) -> HealpixResult<(f64, f64)> {
    validate_nside(nside)?;
    validate_index(index, nside)?;
    validate_offset(dx, "dx")?;
    validate_offset(dy, "dy")?;
    Ok(index_to_lonlat(index, nside, dx, dy, order))
}

/// Elementwise [`healpix_to_lonlat`] over a slice of indices.
///
/// Equivalent to calling the scalar form per element in input order.
pub fn healpix_to_lonlat_batch(
    indices: &[i64],
    nside: i64,
    order: Order,
) -> HealpixResult<(Vec<f64>, Vec<f64>)> {
    validate_nside(nside)?;
    for &index in indices {
        validate_index(index, nside)?;
    }
    let mut lon = Vec::with_capacity(indices.len());
    let mut lat = Vec::with_capacity(indices.len());
    for &index in indices {
        let (l, b) = index_to_lonlat(index, nside, CENTER, CENTER, order);
        lon.push(l);
        lat.push(b);
    }
    Ok((lon, lat))
}

/// Elementwise [`healpix_to_lonlat_with_offset`] over equal-length slices.
///
/// # Panics
///
/// If `indices`, `dx` and `dy` do not share a common length.
pub fn healpix_to_lonlat_batch_with_offsets(
    indices: &[i64],
    nside: i64,
    dx: &[f64],
    dy: &[f64],
    order: Order,
) -> HealpixResult<(Vec<f64>, Vec<f64>)> {
    assert_eq!(indices.len(), dx.len(), "batched inputs must share a common length");
    assert_eq!(indices.len(), dy.len(), "batched inputs must share a common length");
    validate_nside(nside)?;
    for &index in indices {
        validate_index(index, nside)?;
    }
    for &v in dx {
        validate_offset(v, "dx")?;
    }
    for &v in dy {
        validate_offset(v, "dy")?;
    }
    let mut lon = Vec::with_capacity(indices.len());
    let mut lat = Vec::with_capacity(indices.len());
    for i in 0..indices.len() {
        let (l, b) = index_to_lonlat(indices[i], nside, dx[i], dy[i], order);
        lon.push(l);
        lat.push(b);
    }
    Ok((lon, lat))
}

/// Converts a sky position to the index of its enclosing pixel.
///
/// `lon` and `lat` are radians; `lon` may be any value (it is wrapped) and
/// `lat` must lie in `[-π/2, π/2]`.
///
/// # Errors
///
/// [`InvalidResolution`](crate::HealpixError::InvalidResolution) if `nside`
/// is not a positive power of two.
pub fn lonlat_to_healpix(lon: f64, lat: f64, nside: i64, order: Order) -> HealpixResult<i64> {
    validate_nside(nside)?;
    Ok(lonlat_to_index(lon, lat, nside, order).0)
}

/// As [`lonlat_to_healpix`], also returning the sub-pixel offset of the
/// position within the enclosing pixel.
pub fn lonlat_to_healpix_with_offsets(
    lon: f64,
    lat: f64,
    nside: i64,
    order: Order,
) -> HealpixResult<(i64, f64, f64)> {
    validate_nside(nside)?;
    Ok(lonlat_to_index(lon, lat, nside, order))
}

/// Elementwise [`lonlat_to_healpix`] over equal-length slices.
///
/// # Panics
///
/// If `lon` and `lat` differ in length.
pub fn lonlat_to_healpix_batch(
    lon: &[f64],
    lat: &[f64],
    nside: i64,
    order: Order,
) -> HealpixResult<Vec<i64>> {
    assert_eq!(lon.len(), lat.len(), "batched inputs must share a common length");
    validate_nside(nside)?;
    Ok(lon
        .iter()
        .zip(lat)
        .map(|(&l, &b)| lonlat_to_index(l, b, nside, order).0)
        .collect())
}

/// Elementwise [`lonlat_to_healpix_with_offsets`] over equal-length slices.
///
/// # Panics
///
/// If `lon` and `lat` differ in length.
pub fn lonlat_to_healpix_batch_with_offsets(
    lon: &[f64],
    lat: &[f64],
    nside: i64,
    order: Order,
) -> HealpixResult<(Vec<i64>, Vec<f64>, Vec<f64>)> {
    assert_eq!(lon.len(), lat.len(), "batched inputs must share a common length");
    validate_nside(nside)?;
    let mut indices = Vec::with_capacity(lon.len());
    let mut dx = Vec::with_capacity(lon.len());
    let mut dy = Vec::with_capacity(lon.len());
    for (&l, &b) in lon.iter().zip(lat) {
        let (index, x, y) = lonlat_to_index(l, b, nside, order);
        indices.push(index);
        dx.push(x);
        dy.push(y);
    }
    Ok((indices, dx, dy))
}
