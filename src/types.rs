use chrono::{Datelike, Timelike};
use log::debug;

use crate::angles;
use crate::error::{Result, SolarError};
use crate::series;

/// Hour-angle bounds of one hourly period, in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HourAngles {
    /// Solar time [hour] relative to solar noon at the midpoint of the period.
    pub solar_time: f64,
    /// Hour angle at the start of the period.
    pub omega1: f64,
    /// Hour angle at the end of the period.
    pub omega2: f64,
}

/// Hour-angle bounds over a time index, aligned with it.
#[derive(Debug, Clone, PartialEq)]
pub struct HourAngleSeries {
    pub omega1: Vec<f64>,
    pub omega2: Vec<f64>,
}

impl HourAngleSeries {
    pub fn len(&self) -> usize {
        self.omega1.len()
    }

    pub fn is_empty(&self) -> bool {
        self.omega1.is_empty()
    }

    /// Returns `(omega2, omega1)`, end bound first.
    pub fn into_pair(self) -> (Vec<f64>, Vec<f64>) {
        (self.omega2, self.omega1)
    }
}

/// Site parameters shared by the series operations.
///
/// `latitude` is in radians. `lz` and `lm` are longitudes in degrees west
/// of Greenwich: `lz` for the centre of the local time zone, `lm` for the
/// measurement site.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SiteConfig {
    pub latitude: f64,
    pub lz: f64,
    pub lm: f64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            latitude: 0.0,
            lz: 0.0,
            lm: 0.0,
        }
    }
}

impl SiteConfig {
    /// Builds a site from a latitude in degrees, checking it lies in
    /// `[-90, 90]` and that all values are finite.
    pub fn from_degrees(latitude_deg: f64, lz: f64, lm: f64) -> Result<Self> {
        for (name, value) in [("latitude", latitude_deg), ("lz", lz), ("lm", lm)] {
            if !value.is_finite() {
                return Err(SolarError::NonFinite { name, value });
            }
        }
        if !(-90.0..=90.0).contains(&latitude_deg) {
            return Err(SolarError::InvalidLatitude(latitude_deg));
        }
        let site = Self {
            latitude: angles::deg_to_rad(latitude_deg),
            lz,
            lm,
        };
        debug!(
            "site latitude {:.4} rad ({}°), lz={}, lm={}",
            site.latitude, latitude_deg, lz, lm
        );
        Ok(site)
    }

    pub fn daylight_hours<T: Datelike>(&self, index: &[T]) -> Vec<f64> {
        series::daylight_hours(index, &self.latitude)
    }

    pub fn extraterrestrial_r<T: Datelike>(&self, index: &[T]) -> Vec<f64> {
        series::extraterrestrial_r(index, &self.latitude)
    }

    pub fn extraterrestrial_r_hour<T: Datelike + Timelike>(&self, index: &[T]) -> Vec<f64> {
        series::extraterrestrial_r_hour(index, &self.latitude, self.lz, self.lm)
    }

    pub fn sunset_angle_hour<T: Datelike + Timelike>(
        &self,
        index: &[T],
        sol_dec: &[f64],
    ) -> HourAngleSeries {
        series::sunset_angle_hour(index, self.lz, self.lm, &self.latitude, sol_dec)
    }
}
