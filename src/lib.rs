//! FAO-56 solar geometry and extraterrestrial radiation.
//!
//! Day of year, solar declination, inverse relative earth–sun distance,
//! sunset hour angle, daylight hours and extraterrestrial radiation
//! (daily and hourly) following Allen et al. (1998), computed over a
//! time index of `chrono` timestamps.
//!
//! Angles are in radians; converting a latitude from degrees is up to the
//! caller ([`deg_to_rad`] or [`SiteConfig::from_degrees`]).
//!
//! ```
//! use chrono::NaiveDate;
//! use fao56_solar::{deg_to_rad, extraterrestrial_r};
//!
//! let index = [NaiveDate::from_ymd_opt(2026, 9, 3).unwrap()];
//! let ra = extraterrestrial_r(&index, &deg_to_rad(-20.0));
//! assert!((ra[0] - 32.2).abs() < 0.05);
//! ```

pub mod angles;
pub mod error;
pub mod series;
pub mod types;

pub use angles::{deg_to_rad, rad_to_deg, FAO_PI, SOLAR_CONSTANT_HOURLY};

pub use error::{Result, SolarError};

pub use series::{
    day_of_year, daylight_hours, extraterrestrial_r, extraterrestrial_r_hour, hour_of_day,
    relative_distance, solar_declination, sunset_angle, sunset_angle_hour, Latitude,
};

pub use types::{HourAngleSeries, HourAngles, SiteConfig};
