//! 8-neighbor lookup on the tessellation.
//!
//! Neighbors come back in the fixed canonical order SW, W, NW, N, NE, E,
//! SE, S. Eight positions are always emitted; the sentinel `-1` fills the
//! slot of an absent neighbor. Absences occur only next to the eight
//! singular vertices where three base facets meet (at latitudes ±41.8°):
//! each of the three corner pixels touching such a vertex is missing the
//! diagonal neighbor that would lie across it.

use crate::errors::HealpixResult;
use crate::facet::{FacetCoord, NEIGHBOR_DX, NEIGHBOR_DY};
use crate::order::Order;
use crate::resolution::{validate_index, validate_nside};

/// Sentinel emitted for a geometrically absent neighbor.
pub const NO_NEIGHBOR: i64 = -1;

fn neighbors_of(coord: FacetCoord, nside: i64, order: Order) -> [i64; 8] {
    let mut result = [NO_NEIGHBOR; 8];
    for (slot, (&dx, &dy)) in NEIGHBOR_DX.iter().zip(&NEIGHBOR_DY).enumerate() {
        if let Some(n) = coord.displaced(dx, dy, nside) {
            result[slot] = n.encode(nside, order);
        }
    }
    result
}

/// Returns the up-to-8 pixels adjacent to `index`, in SW, W, NW, N, NE, E,
/// SE, S order, with [`NO_NEIGHBOR`] for absent entries.
///
/// The pixel is converted to facet coordinates, displaced one cell in each
/// of the eight directions (crossing facet edges with the proper
/// reflection), and each result re-encoded in the requested ordering.
///
/// # Errors
///
/// [`InvalidResolution`](crate::HealpixError::InvalidResolution) if `nside`
/// is not a positive power of two;
/// [`IndexOutOfRange`](crate::HealpixError::IndexOutOfRange) if `index` is
/// outside `[0, npix)`.
pub fn healpix_neighbors(index: i64, nside: i64, order: Order) -> HealpixResult<[i64; 8]> {
    validate_nside(nside)?;
    validate_index(index, nside)?;
    Ok(neighbors_of(FacetCoord::decode(index, nside, order), nside, order))
}

/// Elementwise [`healpix_neighbors`]: one 8-wide row per input pixel.
pub fn healpix_neighbors_batch(
    indices: &[i64],
    nside: i64,
    order: Order,
) -> HealpixResult<Vec<[i64; 8]>> {
    validate_nside(nside)?;
    for &index in indices {
        validate_index(index, nside)?;
    }
    Ok(indices
        .iter()
        .map(|&index| neighbors_of(FacetCoord::decode(index, nside, order), nside, order))
        .collect())
}
