use chrono::{Datelike, Timelike};
use log::{debug, log_enabled, Level};

use crate::angles;
use crate::types::HourAngleSeries;

/// Latitude in radians, constant or per time step.
///
/// Per-step latitudes are indexed directly; a slice shorter than the time
/// index panics.
pub trait Latitude {
    fn at(&self, i: usize) -> f64;
}

impl Latitude for f64 {
    fn at(&self, _i: usize) -> f64 {
        *self
    }
}

impl Latitude for [f64] {
    fn at(&self, i: usize) -> f64 {
        self[i]
    }
}

impl Latitude for Vec<f64> {
    fn at(&self, i: usize) -> f64 {
        self[i]
    }
}

/// Taken from each timestamp's own calendar date; no UTC conversion.
pub fn day_of_year<T: Datelike>(index: &[T]) -> Vec<i32> {
    index.iter().map(|t| t.ordinal() as i32).collect()
}

pub fn hour_of_day<T: Timelike>(index: &[T]) -> Vec<u32> {
    index.iter().map(|t| t.hour()).collect()
}

pub fn solar_declination(j: &[i32]) -> Vec<f64> {
    j.iter().map(|&n| angles::solar_declination(n as f64)).collect()
}

pub fn relative_distance(j: &[i32]) -> Vec<f64> {
    j.iter().map(|&n| angles::relative_distance(n as f64)).collect()
}

pub fn sunset_angle<L: Latitude + ?Sized>(sol_dec: &[f64], lat: &L) -> Vec<f64> {
    let out: Vec<f64> = sol_dec
        .iter()
        .enumerate()
        .map(|(i, &d)| angles::sunset_angle(d, lat.at(i)))
        .collect();
    log_undefined("sunset_angle", &out);
    out
}

/// `sol_dec` must be aligned with `index`, usually
/// `solar_declination(&day_of_year(index))`. See [`angles::hour_angles`]
/// for the per-step computation.
pub fn sunset_angle_hour<T, L>(
    index: &[T],
    lz: f64,
    lm: f64,
    lat: &L,
    sol_dec: &[f64],
) -> HourAngleSeries
where
    T: Datelike + Timelike,
    L: Latitude + ?Sized,
{
    let j = day_of_year(index);
    let hours = hour_of_day(index);
    let mut omega1 = Vec::with_capacity(index.len());
    let mut omega2 = Vec::with_capacity(index.len());
    for i in 0..index.len() {
        let (day, hour) = (j[i] as f64, hours[i] as f64);
        let a = angles::hour_angles(day, hour, lz, lm, lat.at(i), sol_dec[i]);
        omega1.push(a.omega1);
        omega2.push(a.omega2);
    }
    log_undefined("sunset_angle_hour", &omega2);
    HourAngleSeries { omega1, omega2 }
}

/// Daylight hours, rounded to one decimal.
pub fn daylight_hours<T: Datelike, L: Latitude + ?Sized>(index: &[T], lat: &L) -> Vec<f64> {
    let j = day_of_year(index);
    let sol_dec = solar_declination(&j);
    sunset_angle(&sol_dec, lat)
        .into_iter()
        .map(|sangle| angles::round_to(24.0 / std::f64::consts::PI * sangle, 1))
        .collect()
}

pub fn extraterrestrial_r<T: Datelike, L: Latitude + ?Sized>(index: &[T], lat: &L) -> Vec<f64> {
    let out: Vec<f64> = day_of_year(index)
        .into_iter()
        .enumerate()
        .map(|(i, n)| angles::extraterrestrial_r(n as f64, lat.at(i)))
        .collect();
    log_undefined("extraterrestrial_r", &out);
    out
}

/// `lz` and `lm` are 0 for a site on the Greenwich meridian.
pub fn extraterrestrial_r_hour<T, L>(index: &[T], lat: &L, lz: f64, lm: f64) -> Vec<f64>
where
    T: Datelike + Timelike,
    L: Latitude + ?Sized,
{
    let j = day_of_year(index);
    let dr = relative_distance(&j);
    let sol_dec = solar_declination(&j);
    let bounds = sunset_angle_hour(index, lz, lm, lat, &sol_dec);
    (0..index.len())
        .map(|i| {
            let (omega1, omega2) = (bounds.omega1[i], bounds.omega2[i]);
            angles::hourly_radiation(dr[i], sol_dec[i], lat.at(i), omega1, omega2)
        })
        .collect()
}

fn log_undefined(op: &str, values: &[f64]) {
    if !log_enabled!(Level::Debug) {
        return;
    }
    let undefined = values.iter().filter(|v| v.is_nan()).count();
    if undefined > 0 {
        debug!(
            "{}: sunset angle undefined for {} of {} steps",
            op,
            undefined,
            values.len()
        );
    }
}
