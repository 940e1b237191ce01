//! Scalar FAO-56 kernels (Allen et al., 1998), one time step at a time.
//! Out-of-domain inputs produce `NaN` rather than panicking.

use std::f64::consts::PI;

use chrono::{Datelike, NaiveDate};

use crate::types::HourAngles;

/// Truncated π used by the declination, distance and daily radiation equations.
pub const FAO_PI: f64 = 3.141592654;

pub const DECLINATION_AMPLITUDE: f64 = 0.4093;
pub const DECLINATION_PHASE: f64 = 1.39;
pub const ECCENTRICITY_TERM: f64 = 0.033;

/// 1/15 h per degree of longitude, as published.
pub const HOURS_PER_DEGREE: f64 = 0.06667;

/// 24·60·Gsc with Gsc = 0.0820 MJ m⁻² min⁻¹.
pub const DAILY_RADIATION_FACTOR: f64 = 118.08;

/// MJ m⁻² h⁻¹.
pub const SOLAR_CONSTANT_HOURLY: f64 = 4.92;

pub const MIDPOINT_HOUR_ANGLE: f64 = PI / 12.0;
pub const HALF_HOUR_ANGLE: f64 = PI / 24.0;

const OMEGA1_FLOOR: f64 = -100_000_000.0;

pub fn deg_to_rad(deg: f64) -> f64 {
    deg * (PI / 180.0)
}

pub fn rad_to_deg(rad: f64) -> f64 {
    rad * (180.0 / PI)
}

/// `None` for dates that do not exist in the Gregorian calendar.
pub fn ordinal_day(year: i32, month: u32, day: u32) -> Option<i32> {
    NaiveDate::from_ymd_opt(year, month, day).map(|d| d.ordinal() as i32)
}

pub fn solar_declination(j: f64) -> f64 {
    DECLINATION_AMPLITUDE * (2.0 * FAO_PI / 365.0 * j - DECLINATION_PHASE).sin()
}

pub fn relative_distance(j: f64) -> f64 {
    1.0 + ECCENTRICITY_TERM * ((2.0 * FAO_PI / 365.0) * j).cos()
}

/// `NaN` when `|tan(sol_dec)·tan(lat)| > 1`, i.e. polar day or night.
/// `f64::acos` already returns `NaN` outside `[-1, 1]`.
pub fn sunset_angle(sol_dec: f64, lat: f64) -> f64 {
    (-sol_dec.tan() * lat.tan()).acos()
}

pub fn daylight_hours(j: f64, lat: f64) -> f64 {
    let sangle = sunset_angle(solar_declination(j), lat);
    round_to(24.0 / PI * sangle, 1)
}

pub fn seasonal_correction(j: f64) -> f64 {
    let b = 2.0 * PI * (j - 81.0) / 364.0;
    0.1645 * (2.0 * b).sin() - 0.1255 * b.cos() - 0.025 * b.sin()
}

/// Solar time [hour] relative to solar noon at the midpoint of the hour
/// starting at `hour` (eq. 31, without the ×π/12 scaling).
///
/// `lz` is the longitude of the centre of the local time zone and `lm`
/// the longitude of the site, both in degrees west of Greenwich.
pub fn solar_time(hour: f64, lz: f64, lm: f64, sc: f64) -> f64 {
    let t = hour + 0.5;
    t + HOURS_PER_DEGREE * (lz - lm) + sc - 12.0
}

/// Hour-angle bounds for the hour starting at `hour` on day `j`.
///
/// The reference hour angle is the constant [`MIDPOINT_HOUR_ANGLE`]; it
/// is not derived from the computed solar time. Eq. 31 would use
/// `solar_time * PI / 12.0` here.
pub fn hour_angles(j: f64, hour: f64, lz: f64, lm: f64, lat: f64, sol_dec: f64) -> HourAngles {
    let sc = seasonal_correction(j);
    let sol_t = solar_time(hour, lz, lm, sc);
    let omega = MIDPOINT_HOUR_ANGLE;
    let omega1 = omega - HALF_HOUR_ANGLE;
    let omega2 = omega + HALF_HOUR_ANGLE;
    let omegas = sunset_angle(lat, sol_dec);

    let omega1 = clip(omega1, -omegas, omegas);
    let omega2 = clip(omega2, -omegas, omegas);
    // No-op: maximum of omega1 with itself. Likely meant to bound omega1
    // by zero or by omega2; left as is.
    let omega1 = nan_max(omega1, omega1);
    let omega1 = clip(omega1, OMEGA1_FLOOR, omega2);

    HourAngles {
        solar_time: sol_t,
        omega1,
        omega2,
    }
}

/// MJ m⁻² day⁻¹.
pub fn extraterrestrial_r(j: f64, lat: f64) -> f64 {
    let dr = relative_distance(j);
    let sol_dec = solar_declination(j);
    // Arguments in (lat, sol_dec) order; the product under acos commutes.
    let omega = sunset_angle(lat, sol_dec);
    let xx = sol_dec.sin() * lat.sin();
    let yy = sol_dec.cos() * lat.cos();
    DAILY_RADIATION_FACTOR / FAO_PI * dr * (omega * xx + yy * omega.sin())
}

/// MJ m⁻² hour⁻¹.
pub fn extraterrestrial_r_hour(j: f64, hour: f64, lat: f64, lz: f64, lm: f64) -> f64 {
    let dr = relative_distance(j);
    let sol_dec = solar_declination(j);
    let angles = hour_angles(j, hour, lz, lm, lat, sol_dec);
    hourly_radiation(dr, sol_dec, lat, angles.omega1, angles.omega2)
}

pub(crate) fn hourly_radiation(
    dr: f64,
    sol_dec: f64,
    lat: f64,
    omega1: f64,
    omega2: f64,
) -> f64 {
    let xx = sol_dec.sin() * lat.sin();
    let yy = sol_dec.cos() * lat.cos();
    12.0 / PI
        * SOLAR_CONSTANT_HOURLY
        * dr
        * ((omega2 - omega1) * xx + yy * (omega2.sin() - omega1.sin()))
}

/// Element-wise clip that propagates `NaN` from the value or either bound.
///
/// Computed as `min(max(x, lo), hi)`, so `lo > hi` yields `hi`.
pub(crate) fn clip(x: f64, lo: f64, hi: f64) -> f64 {
    nan_min(nan_max(x, lo), hi)
}

fn nan_max(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.max(b)
    }
}

fn nan_min(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.min(b)
    }
}

// Half to even.
pub(crate) fn round_to(x: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (x * scale).round_ties_even() / scale
}
