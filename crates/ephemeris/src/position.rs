//! Low-precision equatorial coordinates of the sun and moon.

use std::f64::consts::PI;

const RAD: f64 = PI / 180.0;
/// Obliquity of the ecliptic.
const OBLIQUITY: f64 = RAD * 23.4397;
/// Mean Earth-Sun distance in km.
pub(crate) const SUN_DISTANCE_KM: f64 = 149_598_000.0;

/// Right ascension, declination (radians) and distance (km).
#[derive(Debug, Clone, Copy)]
pub(crate) struct Equatorial {
    pub ra: f64,
    pub dec: f64,
    pub dist: f64,
}

fn right_ascension(l: f64, b: f64) -> f64 {
    (l.sin() * OBLIQUITY.cos() - b.tan() * OBLIQUITY.sin()).atan2(l.cos())
}

fn declination(l: f64, b: f64) -> f64 {
    (b.sin() * OBLIQUITY.cos() + b.cos() * OBLIQUITY.sin() * l.sin()).asin()
}

fn solar_mean_anomaly(d: f64) -> f64 {
    RAD * (357.5291 + 0.985_600_28 * d)
}

fn ecliptic_longitude(m: f64) -> f64 {
    // equation of center
    let c = RAD * (1.9148 * m.sin() + 0.02 * (2.0 * m).sin() + 0.0003 * (3.0 * m).sin());
    // perihelion of the Earth
    let p = RAD * 102.9372;
    m + c + p + PI
}

/// Sun position `d` days after J2000.
pub(crate) fn sun_coords(d: f64) -> Equatorial {
    let m = solar_mean_anomaly(d);
    let l = ecliptic_longitude(m);
    Equatorial {
        ra: right_ascension(l, 0.0),
        dec: declination(l, 0.0),
        dist: SUN_DISTANCE_KM,
    }
}

/// Moon position `d` days after J2000.
pub(crate) fn moon_coords(d: f64) -> Equatorial {
    let mean_longitude = RAD * (218.316 + 13.176_396 * d);
    let mean_anomaly = RAD * (134.963 + 13.064_993 * d);
    let argument_of_latitude = RAD * (93.272 + 13.229_350 * d);

    let l = mean_longitude + RAD * 6.289 * mean_anomaly.sin();
    let b = RAD * 5.128 * argument_of_latitude.sin();
    let dist = 385_001.0 - 20_905.0 * mean_anomaly.cos();

    Equatorial {
        ra: right_ascension(l, b),
        dec: declination(l, b),
        dist,
    }
}
