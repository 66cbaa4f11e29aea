//! Discrete facet coordinates and the nested/ring pixel codecs.
//!
//! Every pixel of an `nside` tessellation is identified internally by a
//! [`FacetCoord`]: one of the 12 base facets plus an `(x, y)` cell position
//! inside that facet's `nside × nside` grid. The `x` axis of a facet points
//! south-east on the sky, the `y` axis north-east, so `(nside-1, nside-1)`
//! is the facet's northernmost cell.
//!
//! Both public index orderings are codecs over this one representation:
//!
//! - *nested*: `facet * nside^2` plus the Z-order (Morton) interleave of the
//!   `x` and `y` bits — each bit pair encodes one level of quad-tree
//!   subdivision.
//! - *ring*: cumulative pixel counts along iso-latitude rings — the north
//!   polar cap rings hold `4·i` pixels each, the equatorial belt rings a
//!   constant `4·nside`, and the south cap mirrors the north.
//!
//! The module also owns the fixed adjacency graph of the 12 base facets,
//! used to step across a facet edge with the correct axis reflection.

use crate::order::Order;

/// North-to-south facet row of each base facet, scaled so the equator sits
/// at 2: rows 0–3 are the north polar facets, 4–7 equatorial, 8–11 south.
pub(crate) const JRLL: [i64; 12] = [2, 2, 2, 2, 3, 3, 3, 3, 4, 4, 4, 4];

/// Longitude position of each base facet center, in units of π/4.
pub(crate) const JPLL: [i64; 12] = [1, 3, 5, 7, 0, 2, 4, 6, 1, 3, 5, 7];

/// Neighbor displacement directions in the canonical output order
/// SW, W, NW, N, NE, E, SE, S, expressed in the facet `(x, y)` frame.
pub(crate) const NEIGHBOR_DX: [i64; 8] = [-1, -1, -1, 0, 1, 1, 1, 0];
pub(crate) const NEIGHBOR_DY: [i64; 8] = [-1, 0, 1, 1, 1, 0, -1, -1];

/// Facet reached when a step leaves the current facet across a given edge.
///
/// Rows are indexed by the edge code `4 + ex + 3*ey` where `ex, ey ∈ {-1, 0, 1}`
/// indicate which coordinate(s) ran off the grid; columns by the facet left
/// behind. `-1` marks the eight singular corners where no facet exists.
const FACET_ACROSS: [[i64; 12]; 9] = [
    [8, 9, 10, 11, -1, -1, -1, -1, 10, 11, 8, 9],
    [5, 6, 7, 4, 8, 9, 10, 11, 9, 10, 11, 8],
    [-1, -1, -1, -1, 5, 6, 7, 4, -1, -1, -1, -1],
    [4, 5, 6, 7, 11, 8, 9, 10, 11, 8, 9, 10],
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11],
    [1, 2, 3, 0, 0, 1, 2, 3, 5, 6, 7, 4],
    [-1, -1, -1, -1, 7, 4, 5, 6, -1, -1, -1, -1],
    [3, 0, 1, 2, 3, 0, 1, 2, 4, 5, 6, 7],
    [2, 3, 0, 1, -1, -1, -1, -1, 0, 1, 2, 3],
];

/// Axis transformation applied when crossing the corresponding
/// [`FACET_ACROSS`] edge: bit 0 flips `x`, bit 1 flips `y`, bit 2 swaps the
/// axes. Columns select the facet family (north, equatorial, south).
const FACET_SWAP: [[u8; 3]; 9] = [
    [0, 0, 3],
    [0, 0, 6],
    [0, 0, 0],
    [0, 0, 5],
    [0, 0, 0],
    [5, 0, 0],
    [0, 0, 0],
    [6, 0, 0],
    [3, 0, 0],
];

/// Position of a pixel as (base facet, cell column, cell row).
///
/// Valid when `facet ∈ [0, 12)` and `x, y ∈ [0, nside)` for the owning
/// resolution; the resolution itself is carried by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FacetCoord {
    pub x: i64,
    pub y: i64,
    pub facet: i64,
}

impl FacetCoord {
    /// Decodes a pixel index in the given ordering.
    pub fn decode(index: i64, nside: i64, order: Order) -> Self {
        match order {
            Order::Nested => Self::from_nested(index, nside),
            Order::Ring => Self::from_ring(index, nside),
        }
    }

    /// Encodes back into a pixel index in the given ordering.
    pub fn encode(&self, nside: i64, order: Order) -> i64 {
        match order {
            Order::Nested => self.to_nested(nside),
            Order::Ring => self.to_ring(nside),
        }
    }

    /// Steps `(dx, dy)` cells, crossing into the adjacent base facet with
    /// the appropriate reflection when the step leaves the grid.
    ///
    /// Returns `None` when the step crosses one of the eight singular
    /// vertices where only three facets meet, so no facet lies across the
    /// corner. `dx` and `dy` must be in `{-1, 0, 1}`.
    pub fn displaced(&self, dx: i64, dy: i64, nside: i64) -> Option<FacetCoord> {
        debug_assert!((-1..=1).contains(&dx) && (-1..=1).contains(&dy));
        let mut x = self.x + dx;
        let mut y = self.y + dy;
        let mut edge = 4i64;
        if x < 0 {
            x += nside;
            edge -= 1;
        } else if x >= nside {
            x -= nside;
            edge += 1;
        }
        if y < 0 {
            y += nside;
            edge -= 3;
        } else if y >= nside {
            y -= nside;
            edge += 3;
        }
        let facet = FACET_ACROSS[edge as usize][self.facet as usize];
        if facet < 0 {
            return None;
        }
        let swap = FACET_SWAP[edge as usize][(self.facet >> 2) as usize];
        if swap & 1 != 0 {
            x = nside - 1 - x;
        }
        if swap & 2 != 0 {
            y = nside - 1 - y;
        }
        if swap & 4 != 0 {
            std::mem::swap(&mut x, &mut y);
        }
        Some(FacetCoord { x, y, facet })
    }

    /// Decodes a nested index: the high bits select the facet, the low
    /// `2·log2(nside)` bits de-interleave into `(x, y)`.
    fn from_nested(index: i64, nside: i64) -> Self {
        let order = nside.trailing_zeros();
        let facet = index >> (2 * order);
        let within = index & (nside * nside - 1);
        let (x, y) = deinterleave_bits(within, order);
        FacetCoord { x, y, facet }
    }

    fn to_nested(&self, nside: i64) -> i64 {
        let order = nside.trailing_zeros();
        (self.facet << (2 * order)) | interleave_bits(self.x, self.y, order)
    }

    /// Decodes a ring index via cumulative ring pixel counts.
    ///
    /// The north polar cap (rings `1..nside`) holds `2·i·(i-1)` pixels above
    /// ring `i`; the equatorial belt rings are `4·nside` wide with a
    /// half-pixel phase shift alternating per ring; the south cap mirrors
    /// the north.
    fn from_ring(index: i64, nside: i64) -> Self {
        let ncap = 2 * nside * (nside - 1);
        let npix = 12 * nside * nside;

        let (ring, iphi, kshift, ring_len, facet) = if index < ncap {
            // north polar cap
            let ring = (1 + crate::resolution::isqrt(1 + 2 * index)) >> 1;
            let iphi = (index + 1) - 2 * ring * (ring - 1);
            (ring, iphi, 0, ring, (iphi - 1) / ring)
        } else if index < npix - ncap {
            // equatorial belt
            let ip = index - ncap;
            let row = ip / (4 * nside);
            let ring = row + nside;
            let iphi = ip - row * 4 * nside + 1;
            let kshift = (ring + nside) & 1;
            // facet from the two edge-line indices bounding the cell
            let ire = ring - nside + 1;
            let irm = 2 * nside + 2 - ire;
            let ifm = (iphi - ire / 2 + nside - 1) / nside;
            let ifp = (iphi - irm / 2 + nside - 1) / nside;
            let facet = match ifp.cmp(&ifm) {
                std::cmp::Ordering::Equal => (ifp & 3) + 4,
                std::cmp::Ordering::Less => ifp,
                std::cmp::Ordering::Greater => ifm + 8,
            };
            (ring, iphi, kshift, nside, facet)
        } else {
            // south polar cap
            let ip = npix - index;
            let s_ring = (1 + crate::resolution::isqrt(2 * ip - 1)) >> 1;
            let iphi = 4 * s_ring + 1 - (ip - 2 * s_ring * (s_ring - 1));
            let facet = 8 + (iphi - 1) / s_ring;
            (4 * nside - s_ring, iphi, 0, s_ring, facet)
        };

        let irt = ring - JRLL[facet as usize] * nside + 1;
        let mut ipt = 2 * iphi - JPLL[facet as usize] * ring_len - kshift - 1;
        if ipt >= 2 * nside {
            ipt -= 8 * nside;
        }
        FacetCoord {
            x: (ipt - irt) >> 1,
            y: (-ipt - irt) >> 1,
            facet,
        }
    }

    fn to_ring(&self, nside: i64) -> i64 {
        let nl4 = 4 * nside;
        let ring = JRLL[self.facet as usize] * nside - self.x - self.y - 1;

        let (n_before, ring_len, kshift) = if ring < nside {
            // north polar cap
            (2 * ring * (ring - 1), ring, 0)
        } else if ring > 3 * nside {
            // south polar cap
            let len = nl4 - ring;
            (12 * nside * nside - 2 * (len + 1) * len, len, 0)
        } else {
            // equatorial belt
            let ncap = 2 * nside * (nside - 1);
            (ncap + (ring - nside) * nl4, nside, (ring - nside) & 1)
        };

        let mut jp = (JPLL[self.facet as usize] * ring_len + self.x - self.y + 1 + kshift) / 2;
        if jp > nl4 {
            jp -= nl4;
        } else if jp < 1 {
            jp += nl4;
        }
        n_before + jp - 1
    }
}

/// Z-order interleave of the low `order` bits of `x` (even positions) and
/// `y` (odd positions).
fn interleave_bits(x: i64, y: i64, order: u32) -> i64 {
    let mut result = 0i64;
    for i in 0..order {
        let bit_x = (x >> i) & 1;
        let bit_y = (y >> i) & 1;
        result |= (bit_x << (2 * i)) | (bit_y << (2 * i + 1));
    }
    result
}

/// Inverse of [`interleave_bits`].
fn deinterleave_bits(z: i64, order: u32) -> (i64, i64) {
    let mut x = 0i64;
    let mut y = 0i64;
    for i in 0..order {
        x |= ((z >> (2 * i)) & 1) << i;
        y |= ((z >> (2 * i + 1)) & 1) << i;
    }
    (x, y)
}
