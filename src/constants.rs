//! Numerical constants for HEALPix geometry.
//!
//! Angle-conversion factors follow the convention of writing out more digits
//! than an `f64` can hold, so the compiler rounds rather than us.

#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const PI: f64 = 3.141592653589793238462643;

#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const TWOPI: f64 = 6.283185307179586476925287;

#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const HALF_PI: f64 = 1.5707963267948966192313216;

#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const QUARTER_PI: f64 = 0.7853981633974483096156608;

/// Total solid angle of the sphere in steradians.
#[allow(clippy::excessive_precision)]
pub const FOUR_PI: f64 = 12.56637061435917295385057;

#[allow(clippy::excessive_precision)]
pub const DEG_TO_RAD: f64 = 1.745329251994329576923691e-2;

#[allow(clippy::excessive_precision)]
pub const RAD_TO_DEG: f64 = 57.29577951308232087679815;

#[allow(clippy::excessive_precision)]
pub const RAD_TO_ARCMIN: f64 = 3437.746770784939252607889;

/// |z| boundary between the equatorial belt and the polar caps of the
/// HEALPix equal-area projection.
pub const TRANSITION_Z: f64 = 2.0 / 3.0;

/// Largest supported resolution parameter.
///
/// `npix = 12 * nside^2` must fit the `i64` pixel-index width, which caps
/// `nside` at `2^29`.
pub const MAX_NSIDE: i64 = 1 << 29;
