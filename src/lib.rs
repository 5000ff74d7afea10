//! # Sunrise Almanac
//!
//! Approximate sunrise, sunset and twilight times from the classic almanac solar-position
//! algorithm.

#![cfg_attr(not(feature = "std"), no_std)]
//!
//! The algorithm derives the sun's mean anomaly, true longitude, right ascension and
//! declination for the day, and from these the local hour angle at which the sun crosses a
//! chosen horizon. It needs no ephemeris tables and no ΔT value, and is accurate to a few
//! minutes, which is plenty for scheduling and display purposes.
//!
//! ## Features
//!
//! - Official sunrise/sunset plus civil, nautical and astronomical twilight
//! - Polar day and polar night reported as results, not errors
//! - Validated inputs: impossible dates and out-of-range coordinates are rejected
//! - Thread-safe: Stateless, immutable data structures
//!
//! ## Feature Flags
//!
//! - `std` (default): Use standard library for native math functions
//! - `chrono` (default): Enable the `NaiveDate` → `DateTime<FixedOffset>` convenience API
//! - `libm`: Use pure Rust math for `no_std` environments
//!
//! **Configuration examples:**
//! ```toml
//! # Default: std + chrono
//! sunrise-almanac = "0.1"
//!
//! # Minimal no_std (pure numeric API)
//! sunrise-almanac = { version = "0.1", default-features = false, features = ["libm"] }
//! ```
//!
//! ## Reference
//!
//! - Nautical Almanac Office, United States Naval Observatory (1990).
//!   Almanac for Computers. Washington, DC.
//!
//! ## Quick Start
//!
//! ### Sunrise and Sunset (numeric API)
//! ```rust
//! use sunrise_almanac::{almanac, CalendarDate, GeoCoordinate, Horizon, SunriseResult};
//!
//! let result = almanac::sunrise_sunset_local(
//!     CalendarDate::new(1990, 6, 25).unwrap(),
//!     GeoCoordinate::new(40.9, -74.3).unwrap(),
//!     Horizon::SunriseSunset,
//! )
//! .unwrap();
//!
//! match result {
//!     SunriseResult::RegularDay { sunrise, sunset } => {
//!         println!("Sunrise: {sunrise}");
//!         println!("Sunset: {sunset}");
//!     }
//!     _ => println!("No sunrise/sunset (polar day/night)"),
//! }
//! ```
//!
//! ### Sunrise and Sunset (with chrono)
//! ```rust
//! # #[cfg(feature = "chrono")] {
//! use sunrise_almanac::{almanac, Horizon};
//! use chrono::NaiveDate;
//!
//! let date = NaiveDate::from_ymd_opt(2024, 12, 21).unwrap();
//! let result = almanac::sunrise_sunset(date, 78.0, 15.0, Horizon::SunriseSunset).unwrap();
//! assert!(result.is_polar_night());
//! # }
//! ```
//!
//! ## Local Time
//!
//! Local times use a zone offset of `trunc(longitude / 15)` whole hours. This is not a real
//! time zone: there is no daylight saving and no political boundary lookup.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery, clippy::cargo, clippy::all)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cargo_common_metadata,
    clippy::multiple_crate_versions, // Acceptable for dev-dependencies
    clippy::float_cmp, // Exact comparisons of mathematical constants in tests
)]

// Public API exports
pub use crate::error::{Error, Result};
pub use crate::types::{
    CalendarDate, GeoCoordinate, Horizon, HoursUtc, LocalHours, SolarEvent, SunriseResult,
};

// Algorithm module
pub mod almanac;

// Core modules
pub mod error;
pub mod types;

// Internal modules
mod math;
