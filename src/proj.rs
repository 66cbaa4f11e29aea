//! Continuous HEALPix equal-area projection.
//!
//! Maps between a point on the unit sphere and a position in the plane of a
//! base facet: `(x, y, facet)` with `x, y ∈ [0, 1]` spanning the facet in
//! the same south-east/north-east axes as [`crate::facet`]. Two closed-form
//! regimes share the `|z| = 2/3` boundary:
//!
//! - **equatorial belt** (`|z| ≤ 2/3`): cylindrical equal-area, `z` linear
//!   in the facet diagonal;
//! - **polar caps** (`|z| > 2/3`): Collignon collapse, `1 - |z| = r²/3`
//!   with `r` the distance from the pole in facet units.
//!
//! Latitude is carried alongside `z` as `sin_theta = cos(lat)` so positions
//! close to the poles keep full precision (at `|z| → 1` the value of `z`
//! alone loses the small colatitude).

use crate::constants::{HALF_PI, QUARTER_PI, TRANSITION_Z, TWOPI};
use crate::facet::{JPLL, JRLL};

/// A point on the unit sphere: `z = sin(lat)`, `sin_theta = cos(lat) ≥ 0`,
/// `phi` = longitude in radians.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SpherePoint {
    pub z: f64,
    pub sin_theta: f64,
    pub phi: f64,
}

impl SpherePoint {
    pub fn from_lonlat(lon: f64, lat: f64) -> Self {
        let (z, sin_theta) = libm::sincos(lat);
        SpherePoint {
            z,
            sin_theta,
            phi: lon,
        }
    }

    pub fn to_lonlat(self) -> (f64, f64) {
        let mut lon = libm::fmod(self.phi, TWOPI);
        if lon < 0.0 {
            lon += TWOPI;
        }
        (lon, libm::atan2(self.z, self.sin_theta))
    }
}

/// Fractional position within a base facet.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FacetPoint {
    /// In `[0, 1]`, south-east axis.
    pub x: f64,
    /// In `[0, 1]`, north-east axis.
    pub y: f64,
    pub facet: i64,
}

/// Inverse projection: facet plane → sphere.
pub(crate) fn facet_to_sphere(p: FacetPoint) -> SpherePoint {
    let jr = JRLL[p.facet as usize] as f64 - p.x - p.y;

    let (z, sin_theta, ring_scale) = if jr < 1.0 {
        // north polar cap
        let t = jr * jr / 3.0;
        (1.0 - t, libm::sqrt(t * (2.0 - t)), jr)
    } else if jr > 3.0 {
        // south polar cap
        let nr = 4.0 - jr;
        let t = nr * nr / 3.0;
        (t - 1.0, libm::sqrt(t * (2.0 - t)), nr)
    } else {
        // equatorial belt
        let z = (2.0 - jr) * TRANSITION_Z;
        (z, libm::sqrt((1.0 + z) * (1.0 - z)), 1.0)
    };

    let mut t = JPLL[p.facet as usize] as f64 * ring_scale + p.x - p.y;
    if t < 0.0 {
        t += 8.0;
    } else if t >= 8.0 {
        t -= 8.0;
    }
    // the facet corner on the pole itself has no defined longitude
    let phi = if ring_scale < 1e-15 {
        0.0
    } else {
        QUARTER_PI * t / ring_scale
    };

    SpherePoint { z, sin_theta, phi }
}

/// Forward projection: sphere → facet plane.
pub(crate) fn sphere_to_facet(p: SpherePoint) -> FacetPoint {
    let za = libm::fabs(p.z);
    // longitude in quadrant units [0, 4)
    let mut tt = libm::fmod(p.phi, TWOPI) / HALF_PI;
    if tt < 0.0 {
        tt += 4.0;
    }

    if za <= TRANSITION_Z {
        // equatorial belt: locate the cell between the ascending and
        // descending facet edge lines
        let temp1 = 0.5 + tt;
        let temp2 = p.z * 0.75;
        let jp = temp1 - temp2;
        let jm = temp1 + temp2;
        let ifp = jp as i64; // ascending edge line index, in [0, 4]
        let ifm = jm as i64;
        let facet = match ifp.cmp(&ifm) {
            std::cmp::Ordering::Equal => ifp | 4,
            std::cmp::Ordering::Less => ifp,
            std::cmp::Ordering::Greater => ifm + 8,
        };
        FacetPoint {
            x: jm - ifm as f64,
            y: 1.0 - (jp - ifp as f64),
            facet,
        }
    } else {
        // polar caps
        let mut quadrant = tt as i64;
        if quadrant >= 4 {
            quadrant = 3;
        }
        let tp = tt - quadrant as f64;
        // distance from the pole in facet units, via sin(theta) for
        // precision near |z| = 1
        let r = p.sin_theta / libm::sqrt((1.0 + za) / 3.0);

        let jp = (tp * r).min(1.0);
        let jm = ((1.0 - tp) * r).min(1.0);
        if p.z >= 0.0 {
            FacetPoint {
                x: 1.0 - jm,
                y: 1.0 - jp,
                facet: quadrant,
            }
        } else {
            FacetPoint {
                x: jp,
                y: jm,
                facet: quadrant + 8,
            }
        }
    }
}
