//! End-to-end exercise of the public HEALPix API: golden values, error
//! contracts, round trips, neighbors, and interpolation.

use approx::assert_abs_diff_eq;
use celestial_healpix::constants::DEG_TO_RAD;
use celestial_healpix::{
    healpix_neighbors_batch, healpix_to_lonlat_batch, healpix_to_lonlat_batch_with_offsets,
    interpolate_bilinear, lonlat_to_healpix_batch, lonlat_to_healpix_batch_with_offsets,
    npix_to_nside, npix_to_nside_batch, nside_to_npix, nside_to_npix_batch, nside_to_pixel_area,
    nside_to_pixel_resolution, Order,
};

const ORDERS: [Order; 2] = [Order::Nested, Order::Ring];

#[test]
fn nside_to_pixel_area_golden() {
    let area = nside_to_pixel_area(256).unwrap();
    assert_abs_diff_eq!(area, 1.5978966540475428e-05, epsilon = 1e-18);
}

#[test]
fn nside_to_pixel_resolution_golden() {
    let resolution = nside_to_pixel_resolution(256).unwrap();
    assert_abs_diff_eq!(resolution, 13.741945647269624, epsilon = 1e-10);
}

#[test]
fn nside_to_npix_scalar_and_batch() {
    assert_eq!(nside_to_npix(4).unwrap(), 192);
    assert_eq!(nside_to_npix_batch(&[4, 4]).unwrap(), vec![192, 192]);

    let err = nside_to_npix(15).unwrap_err();
    assert_eq!(err.to_string(), "nside should be a power of two");
}

#[test]
fn npix_to_nside_scalar_and_batch() {
    assert_eq!(npix_to_nside(192).unwrap(), 4);
    assert_eq!(npix_to_nside_batch(&[192, 192]).unwrap(), vec![4, 4]);

    let err = npix_to_nside(7).unwrap_err();
    assert_eq!(err.to_string(), "Number of pixels should be divisible by 12");

    let err = npix_to_nside(12 * 8 * 9).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Number of pixels is not of the form 12 * nside ** 2"
    );
}

#[test]
fn healpix_to_lonlat_round_trip() {
    for order in ORDERS {
        let (lon, lat) = healpix_to_lonlat_batch(&[1, 2, 3], 4, order).unwrap();

        let index = lonlat_to_healpix_batch(&lon, &lat, 4, order).unwrap();
        assert_eq!(index, vec![1, 2, 3]);
    }
}

#[test]
fn healpix_to_lonlat_round_trip_with_offsets() {
    for order in ORDERS {
        let (lon, lat) = healpix_to_lonlat_batch_with_offsets(
            &[1, 2, 3],
            4,
            &[0.1, 0.2, 0.3],
            &[0.5, 0.4, 0.7],
            order,
        )
        .unwrap();

        let (index, dx, dy) = lonlat_to_healpix_batch_with_offsets(&lon, &lat, 4, order).unwrap();

        assert_eq!(index, vec![1, 2, 3]);
        for (recovered, expected) in dx.iter().zip([0.1, 0.2, 0.3]) {
            assert_abs_diff_eq!(*recovered, expected, epsilon = 1e-10);
        }
        for (recovered, expected) in dy.iter().zip([0.5, 0.4, 0.7]) {
            assert_abs_diff_eq!(*recovered, expected, epsilon = 1e-10);
        }
    }
}

#[test]
fn healpix_to_lonlat_invalid() {
    let err = healpix_to_lonlat_batch(&[-1, 2, 3], 4, Order::Ring).unwrap_err();
    assert_eq!(err.to_string(), "healpix_index should be in the range [0:192]");

    let err = healpix_to_lonlat_batch(&[1, 2, 3], 5, Order::Ring).unwrap_err();
    assert_eq!(err.to_string(), "nside should be a power of two");

    let err = "banana".parse::<Order>().unwrap_err();
    assert_eq!(err.to_string(), "order should be 'nested' or 'ring'");

    let dx = [0.1, 0.4, 0.9];
    let dy = [0.4, 0.3, 0.2];

    let err =
        healpix_to_lonlat_batch_with_offsets(&[1, 2, 3], 4, &[-0.1, 0.4, 0.5], &dy, Order::Ring)
            .unwrap_err();
    assert_eq!(err.to_string(), "dx should be in the range [0:1]");

    let err =
        healpix_to_lonlat_batch_with_offsets(&[1, 2, 3], 4, &dx, &[-0.1, 0.4, 0.5], Order::Ring)
            .unwrap_err();
    assert_eq!(err.to_string(), "dy should be in the range [0:1]");
}

#[test]
fn interpolate_bilinear_constant_field() {
    let values = vec![3.0; 192];
    let lon: Vec<f64> = [1.0, 3.0, 4.0].iter().map(|d| d * DEG_TO_RAD).collect();
    let lat: Vec<f64> = [3.0, 2.0, 6.0].iter().map(|d| d * DEG_TO_RAD).collect();

    for order in ORDERS {
        let result = interpolate_bilinear(&lon, &lat, &values, order).unwrap();
        assert_eq!(result.len(), 3);
        for value in result {
            assert_abs_diff_eq!(value, 3.0, epsilon = 1e-12);
        }
    }
}

#[test]
fn interpolate_bilinear_invalid() {
    let lon: Vec<f64> = [1.0, 3.0, 4.0].iter().map(|d| d * DEG_TO_RAD).collect();
    let lat: Vec<f64> = [3.0, 2.0, 6.0].iter().map(|d| d * DEG_TO_RAD).collect();

    let err = interpolate_bilinear(&lon, &lat, &vec![1.0; 133], Order::Ring).unwrap_err();
    assert_eq!(err.to_string(), "Number of pixels should be divisible by 12");
}

#[test]
fn healpix_neighbors_golden_nested() {
    let neighbors = healpix_neighbors_batch(&[1, 2, 3], 4, Order::Nested).unwrap();
    let expected = [
        [90, 0, 2, 3, 6, 4, 94, 91],
        [69, 71, 77, 8, 9, 3, 1, 0],
        [0, 2, 8, 9, 12, 6, 4, 1],
    ];
    assert_eq!(neighbors, expected);
}

#[test]
fn healpix_neighbors_golden_ring() {
    let neighbors = healpix_neighbors_batch(&[1, 2, 3], 4, Order::Ring).unwrap();
    let expected = [
        [16, 6, 5, 0, 3, 2, 8, 7],
        [19, 8, 7, 1, 0, 3, 10, 9],
        [22, 10, 9, 2, 1, 0, 4, 11],
    ];
    assert_eq!(neighbors, expected);
}

#[test]
fn healpix_neighbors_invalid() {
    let err = healpix_neighbors_batch(&[-1, 2, 3], 4, Order::Ring).unwrap_err();
    assert_eq!(err.to_string(), "healpix_index should be in the range [0:192]");

    let err = healpix_neighbors_batch(&[1, 2, 3], 5, Order::Ring).unwrap_err();
    assert_eq!(err.to_string(), "nside should be a power of two");
}

#[test]
fn orderings_index_the_same_tessellation() {
    // the pixel containing a position has the same center under both
    // orderings, whatever the index ordering calls it
    for (lon_deg, lat_deg) in [(33.0, 55.0), (120.0, -12.0), (301.0, -80.0)] {
        let lon = lon_deg * DEG_TO_RAD;
        let lat = lat_deg * DEG_TO_RAD;
        let mut centers = Vec::new();
        for order in ORDERS {
            let index = celestial_healpix::lonlat_to_healpix(lon, lat, 16, order).unwrap();
            centers.push(celestial_healpix::healpix_to_lonlat(index, 16, order).unwrap());
        }
        assert_abs_diff_eq!(centers[0].0, centers[1].0, epsilon = 1e-12);
        assert_abs_diff_eq!(centers[0].1, centers[1].1, epsilon = 1e-12);
    }
}
