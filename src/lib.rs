//! HEALPix sphere pixelization: the Hierarchical Equal Area iso-Latitude
//! tessellation and its index geometry.
//!
//! The sphere is divided into 12 base facets, each subdivided into an
//! `nside × nside` grid of equal-area pixels (`npix = 12 * nside^2`, with
//! `nside` a power of two). Two index orderings address the same pixels:
//! *ring* (along iso-latitude rings, north to south) and *nested*
//! (quad-tree within each facet). Every operation is a pure function of its
//! inputs; there is no state and no I/O.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`resolution`] | `nside` ↔ `npix`, pixel area (sr) and resolution (arcmin) |
//! | [`transform`] | pixel index (+ sub-pixel offset) ↔ (lon, lat), both orderings |
//! | [`neighbors`] | the 8 adjacent pixels in a fixed canonical order |
//! | [`interpolate`] | bilinear interpolation of a pixel-sampled field |
//! | [`order`] | the [`Order`] enum (`nested` / `ring`) |
//! | [`errors`] | [`HealpixError`] with exact, stable messages |
//! | [`constants`] | angle conversions and HEALPix constants |
//!
//! # Conventions
//!
//! Angles are `f64` radians: longitudes wrapped to `[0, 2π)`, latitudes in
//! `[-π/2, π/2]`. Pixel indices are `i64`; `-1` is the sentinel for an
//! absent neighbor. The maximum supported resolution is `nside = 2^29`
//! (see [`constants::MAX_NSIDE`]).
//!
//! # Quick Start
//!
//! ```
//! use celestial_healpix::{healpix_to_lonlat, lonlat_to_healpix, Order};
//!
//! let (lon, lat) = healpix_to_lonlat(42, 4, Order::Ring)?;
//! assert_eq!(lonlat_to_healpix(lon, lat, 4, Order::Ring)?, 42);
//! # Ok::<(), celestial_healpix::HealpixError>(())
//! ```
//!
//! Batched entry points (`*_batch`) are elementwise-equivalent to the
//! scalar forms and validate every input before computing anything.
//!
//! # Features
//!
//! - **`serde`** — `Serialize`/`Deserialize` for [`Order`].

pub mod constants;
pub mod errors;
mod facet;
pub mod interpolate;
pub mod neighbors;
pub mod order;
mod proj;
pub mod resolution;
pub mod transform;

pub use errors::{HealpixError, HealpixResult, PixelCountKind};
pub use interpolate::interpolate_bilinear;
pub use neighbors::{healpix_neighbors, healpix_neighbors_batch, NO_NEIGHBOR};
pub use order::Order;
pub use resolution::{
    npix_to_nside, npix_to_nside_batch, nside_to_npix, nside_to_npix_batch, nside_to_pixel_area,
    nside_to_pixel_resolution,
};
pub use transform::{
    healpix_to_lonlat, healpix_to_lonlat_batch, healpix_to_lonlat_batch_with_offsets,
    healpix_to_lonlat_with_offset, lonlat_to_healpix, lonlat_to_healpix_batch,
    lonlat_to_healpix_batch_with_offsets, lonlat_to_healpix_with_offsets,
};
