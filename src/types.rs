//! Core data types for sunrise/sunset calculations.

use crate::error::{check_coordinates, check_date};
use crate::math::floor;
use crate::Result;
use core::fmt;

/// Predefined horizon definitions for sunrise/sunset calculations.
///
/// Each variant maps to a fixed zenith angle: the angular distance from directly overhead
/// at which the sun's centre is considered to cross the horizon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Horizon {
    /// Official sunrise/sunset (zenith 90.833°, includes refraction and the sun's radius)
    SunriseSunset,
    /// Civil twilight (sun is 6° below horizon)
    CivilTwilight,
    /// Nautical twilight (sun is 12° below horizon)
    NauticalTwilight,
    /// Astronomical twilight (sun is 18° below horizon)
    AstronomicalTwilight,
}

impl Horizon {
    /// All horizon definitions, ordered from the shallowest to the deepest.
    pub const ALL: [Self; 4] = [
        Self::SunriseSunset,
        Self::CivilTwilight,
        Self::NauticalTwilight,
        Self::AstronomicalTwilight,
    ];

    /// Gets the zenith angle in degrees for this horizon definition.
    #[must_use]
    pub const fn zenith_angle(&self) -> f64 {
        match self {
            Self::SunriseSunset => 90.833,
            Self::CivilTwilight => 96.0,
            Self::NauticalTwilight => 102.0,
            Self::AstronomicalTwilight => 108.0,
        }
    }

    /// Gets the elevation angle in degrees for this horizon definition.
    ///
    /// Negative values indicate the sun is below the horizon.
    #[must_use]
    pub const fn elevation_angle(&self) -> f64 {
        90.0 - self.zenith_angle()
    }
}

/// The two horizon crossings computed for each day.
///
/// Each crossing seeds the approximate time differently and takes the hour angle from a
/// different side of the meridian, so sunset is computed independently of sunrise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolarEvent {
    /// The sun crosses the horizon upwards.
    Sunrise,
    /// The sun crosses the horizon downwards.
    Sunset,
}

impl SolarEvent {
    /// Local hour used to seed the approximate time of the event.
    #[must_use]
    pub const fn seed_hour(&self) -> f64 {
        match self {
            Self::Sunrise => 6.0,
            Self::Sunset => 18.0,
        }
    }

    /// Places the hour angle `h` (degrees, 0 to 180) on the correct side of the meridian.
    #[must_use]
    pub const fn hour_angle(&self, h: f64) -> f64 {
        match self {
            Self::Sunrise => 360.0 - h,
            Self::Sunset => h,
        }
    }
}

/// A validated proleptic Gregorian calendar date.
///
/// # Example
/// ```
/// # use sunrise_almanac::types::CalendarDate;
/// let date = CalendarDate::new(1990, 6, 25).unwrap();
/// assert_eq!(date.day_of_year(), 176);
///
/// assert!(CalendarDate::new(2023, 2, 29).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CalendarDate {
    year: i32,
    month: u32,
    day: u32,
}

impl CalendarDate {
    /// Creates a calendar date after checking that it exists.
    ///
    /// # Errors
    /// Returns `InvalidDate` for months outside 1-12 or days beyond the month's length.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self> {
        check_date(year, month, day)?;
        Ok(Self { year, month, day })
    }

    /// Gets the year.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Gets the month (1-12).
    #[must_use]
    pub const fn month(&self) -> u32 {
        self.month
    }

    /// Gets the day of month (1-31).
    #[must_use]
    pub const fn day(&self) -> u32 {
        self.day
    }

    /// Day of the year (1 = January 1st) from the closed-form almanac approximation.
    ///
    /// Only `year mod 4` enters the leap-year term, so 1900 and 2100 count as leap years here.
    #[must_use]
    pub const fn day_of_year(&self) -> u32 {
        let n1 = 275 * self.month / 9;
        let n2 = (self.month + 9) / 12;
        let n3 = 1 + (self.year.rem_euclid(4).unsigned_abs() + 2) / 3;
        n1 + self.day - 30 - n2 * n3
    }
}

#[cfg(feature = "chrono")]
impl From<chrono::NaiveDate> for CalendarDate {
    fn from(date: chrono::NaiveDate) -> Self {
        use chrono::Datelike;

        Self {
            year: date.year(),
            month: date.month(),
            day: date.day(),
        }
    }
}

/// A validated observer location in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoCoordinate {
    latitude: f64,
    longitude: f64,
}

impl GeoCoordinate {
    /// Creates a location from latitude and longitude in degrees.
    ///
    /// # Errors
    /// Returns `InvalidLatitude` or `InvalidLongitude` for out-of-range or non-finite values.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        check_coordinates(latitude, longitude)?;
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Gets the latitude in degrees (-90 to +90, positive north).
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Gets the longitude in degrees (-180 to +180, positive east).
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }
}

/// Splits decimal hours into whole hours and whole minutes, truncating both.
#[allow(clippy::cast_sign_loss)]
fn truncated_hour_minute(hours: f64) -> (u32, u32) {
    let whole = floor(hours);
    let minutes = floor((hours - whole) * 60.0);
    (whole as u32, minutes as u32)
}

/// Local clock time in decimal hours, 0.0 to < 24.0.
///
/// The local zone is approximated from longitude as whole hours `trunc(longitude / 15)`.
///
/// # Example
/// ```
/// # use sunrise_almanac::types::LocalHours;
/// let time = LocalHours::from_hours(5.4414);
/// assert_eq!(time.hour(), 5);
/// assert_eq!(time.minute(), 26);
/// assert_eq!(time.to_string(), "05:26");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct LocalHours(f64);

impl LocalHours {
    /// Creates a new `LocalHours` from decimal hours since local midnight.
    #[must_use]
    pub const fn from_hours(hours: f64) -> Self {
        Self(hours)
    }

    /// Gets the raw decimal hours value.
    #[must_use]
    pub const fn hours(&self) -> f64 {
        self.0
    }

    /// Whole hour of the clock time (truncated).
    #[must_use]
    pub fn hour(&self) -> u32 {
        truncated_hour_minute(self.0).0
    }

    /// Whole minute of the clock time (truncated, never rounded).
    #[must_use]
    pub fn minute(&self) -> u32 {
        truncated_hour_minute(self.0).1
    }
}

impl fmt::Display for LocalHours {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (hour, minute) = truncated_hour_minute(self.0);
        write!(f, "{hour:02}:{minute:02}")
    }
}

/// Time of day in UTC as decimal hours, 0.0 to < 24.0.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct HoursUtc(f64);

impl HoursUtc {
    /// Creates a new `HoursUtc` from decimal hours since midnight UTC.
    #[must_use]
    pub const fn from_hours(hours: f64) -> Self {
        Self(hours)
    }

    /// Gets the raw decimal hours value.
    #[must_use]
    pub const fn hours(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for HoursUtc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (hour, minute) = truncated_hour_minute(self.0);
        write!(f, "{hour:02}:{minute:02}Z")
    }
}

/// Result of sunrise/sunset calculations for a given day.
///
/// At high latitudes the sun may stay on one side of the chosen horizon for the
/// whole day; these cases are reported as `AllDay` or `AllNight` rather than as errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SunriseResult<T = ()> {
    /// Regular day with distinct sunrise and sunset times
    RegularDay {
        /// Time of sunrise
        sunrise: T,
        /// Time of sunset
        sunset: T,
    },
    /// Polar day - sun remains above the specified horizon all day
    AllDay,
    /// Polar night - sun remains below the specified horizon all day
    AllNight,
}

impl<T> SunriseResult<T> {
    /// Checks if this represents a regular day with sunrise and sunset.
    pub const fn is_regular_day(&self) -> bool {
        matches!(self, Self::RegularDay { .. })
    }

    /// Checks if this represents a polar day (sun never sets).
    pub const fn is_polar_day(&self) -> bool {
        matches!(self, Self::AllDay)
    }

    /// Checks if this represents a polar night (sun never rises).
    pub const fn is_polar_night(&self) -> bool {
        matches!(self, Self::AllNight)
    }

    /// Checks if the sun does not cross the horizon at all on this day.
    pub const fn is_no_event(&self) -> bool {
        matches!(self, Self::AllDay | Self::AllNight)
    }

    /// Gets sunrise time if this is a regular day.
    pub const fn sunrise(&self) -> Option<&T> {
        if let Self::RegularDay { sunrise, .. } = self {
            Some(sunrise)
        } else {
            None
        }
    }

    /// Gets sunset time if this is a regular day.
    pub const fn sunset(&self) -> Option<&T> {
        if let Self::RegularDay { sunset, .. } = self {
            Some(sunset)
        } else {
            None
        }
    }

    /// Converts the event times, keeping polar results as they are.
    pub fn map<U, F: FnMut(T) -> U>(self, mut f: F) -> SunriseResult<U> {
        match self {
            Self::RegularDay { sunrise, sunset } => SunriseResult::RegularDay {
                sunrise: f(sunrise),
                sunset: f(sunset),
            },
            Self::AllDay => SunriseResult::AllDay,
            Self::AllNight => SunriseResult::AllNight,
        }
    }
}
