//! Almanac sunrise/sunset algorithm.
//!
//! Low-accuracy solar event times from the sun's mean anomaly, true longitude, right
//! ascension and declination, as published in the "Almanac for Computers" (Nautical Almanac
//! Office, United States Naval Observatory, 1990). Results are typically within a few
//! minutes of high-precision algorithms for years 1800 to 2100 outside the polar regions.
//!
//! Sunrise and sunset are computed by two independent passes of the same step sequence,
//! each with its own approximate time and hour-angle side. Local times use a zone offset of
//! `trunc(longitude / 15)` whole hours instead of a real time zone.

#![allow(clippy::many_single_char_names)]
#![allow(clippy::unreadable_literal)]

use crate::math::{
    acos_deg, asin, atan_deg, cos, cos_deg, floor, normalize_hours_0_to_24, sin_deg, tan_deg,
    trunc,
};
use crate::types::{CalendarDate, GeoCoordinate, Horizon, HoursUtc, LocalHours, SolarEvent};
use crate::{Error, Result, SunriseResult};

#[cfg(feature = "chrono")]
use chrono::{DateTime, FixedOffset, NaiveDate, TimeZone};

/// Mean daily motion of the sun's mean anomaly in degrees.
const MEAN_ANOMALY_RATE: f64 = 0.9856;

/// Mean anomaly offset in degrees.
const MEAN_ANOMALY_OFFSET: f64 = 3.289;

/// Longitude of perihelion plus 180° in degrees.
const PERIHELION_LONGITUDE: f64 = 282.634;

/// cos(obliquity of the ecliptic), used for the right ascension.
const COS_OBLIQUITY: f64 = 0.91764;

/// sin(obliquity of the ecliptic), used for the declination.
const SIN_OBLIQUITY: f64 = 0.39782;

/// Sidereal correction per day of the approximate time, in hours.
const SIDEREAL_RATE: f64 = 0.06571;

/// Sidereal time offset in hours.
const SIDEREAL_OFFSET: f64 = 6.622;

/// Degrees of longitude (or hour angle) per hour.
const DEGREES_PER_HOUR: f64 = 15.0;

/// Outcome of a single pass for one solar event.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Crossing {
    /// The event happens at the given UTC hours (0 to < 24).
    At(f64),
    /// The sun stays above the horizon (cos H < -1).
    NeverSets,
    /// The sun stays below the horizon (cos H > 1).
    NeverRises,
}

/// Calculate sunrise and sunset as local clock times.
///
/// The local zone is approximated as `trunc(longitude / 15)` whole hours from UTC; no
/// daylight saving is applied. Minutes are truncated when the result is shown as `HH:MM`.
///
/// # Arguments
/// * `date` - Calendar date of the events
/// * `location` - Observer location
/// * `horizon` - Horizon definition (official sunrise/sunset or a twilight)
///
/// # Returns
/// `SunriseResult<LocalHours>`: a regular day, or `AllDay`/`AllNight` when the sun does not
/// cross the horizon
///
/// # Errors
/// Returns `ComputationError` if an intermediate value is not finite.
///
/// # Example
/// ```
/// use sunrise_almanac::{almanac, CalendarDate, GeoCoordinate, Horizon, SunriseResult};
///
/// let result = almanac::sunrise_sunset_local(
///     CalendarDate::new(1990, 6, 25).unwrap(),
///     GeoCoordinate::new(40.9, -74.3).unwrap(), // Wayne, New Jersey
///     Horizon::SunriseSunset,
/// )
/// .unwrap();
///
/// if let SunriseResult::RegularDay { sunrise, sunset } = result {
///     assert_eq!(sunrise.to_string(), "05:26");
///     assert_eq!(sunset.to_string(), "20:33");
/// }
/// ```
pub fn sunrise_sunset_local(
    date: CalendarDate,
    location: GeoCoordinate,
    horizon: Horizon,
) -> Result<SunriseResult<LocalHours>> {
    let offset = f64::from(zone_offset_hours(location.longitude()));
    let utc = sunrise_sunset_utc(date, location, horizon)?;

    Ok(utc.map(|ut| utc_to_local(ut, offset)))
}

/// Calculate sunrise and sunset as UTC times of day.
///
/// # Errors
/// Returns `ComputationError` if an intermediate value is not finite.
///
/// # Example
/// ```
/// use sunrise_almanac::{almanac, CalendarDate, GeoCoordinate, Horizon};
///
/// let result = almanac::sunrise_sunset_utc(
///     CalendarDate::new(1990, 6, 25).unwrap(),
///     GeoCoordinate::new(40.9, -74.3).unwrap(),
///     Horizon::SunriseSunset,
/// )
/// .unwrap();
///
/// let sunrise = result.sunrise().unwrap();
/// assert!((sunrise.hours() - 9.441).abs() < 0.001);
/// ```
pub fn sunrise_sunset_utc(
    date: CalendarDate,
    location: GeoCoordinate,
    horizon: Horizon,
) -> Result<SunriseResult<HoursUtc>> {
    calculate_sunrise_sunset_core(
        f64::from(date.day_of_year()),
        location.latitude(),
        location.longitude(),
        horizon.zenith_angle(),
    )
}

/// Calculate sunrise and sunset as timestamps on the given date.
///
/// Both timestamps carry a fixed offset of `trunc(longitude / 15)` hours and have their
/// seconds set to zero.
///
/// # Arguments
/// * `date` - Calendar date of the events
/// * `latitude` - Observer latitude in degrees (-90 to +90)
/// * `longitude` - Observer longitude in degrees (-180 to +180)
/// * `horizon` - Horizon definition
///
/// # Errors
/// Returns error for invalid coordinates (latitude outside ±90°, longitude outside ±180°)
///
/// # Example
/// ```rust
/// use sunrise_almanac::{almanac, Horizon};
/// use chrono::{NaiveDate, Timelike};
///
/// let date = NaiveDate::from_ymd_opt(1990, 6, 25).unwrap();
/// let result = almanac::sunrise_sunset(date, 40.9, -74.3, Horizon::SunriseSunset).unwrap();
///
/// let sunrise = result.sunrise().unwrap();
/// assert_eq!((sunrise.hour(), sunrise.minute()), (5, 26));
/// assert_eq!(sunrise.offset().local_minus_utc(), -4 * 3600);
/// ```
#[cfg(feature = "chrono")]
pub fn sunrise_sunset(
    date: NaiveDate,
    latitude: f64,
    longitude: f64,
    horizon: Horizon,
) -> Result<SunriseResult<DateTime<FixedOffset>>> {
    let location = GeoCoordinate::new(latitude, longitude)?;
    let local = sunrise_sunset_local(CalendarDate::from(date), location, horizon)?;

    let offset = FixedOffset::east_opt(zone_offset_hours(longitude) * 3600)
        .ok_or(Error::computation_error("zone offset out of range"))?;
    let at_local_time = |time: LocalHours| -> Result<DateTime<FixedOffset>> {
        let naive = date
            .and_hms_opt(time.hour(), time.minute(), 0)
            .ok_or(Error::computation_error("local time out of range"))?;
        offset
            .from_local_datetime(&naive)
            .single()
            .ok_or(Error::computation_error("ambiguous local time"))
    };

    match local {
        SunriseResult::RegularDay { sunrise, sunset } => Ok(SunriseResult::RegularDay {
            sunrise: at_local_time(sunrise)?,
            sunset: at_local_time(sunset)?,
        }),
        SunriseResult::AllDay => Ok(SunriseResult::AllDay),
        SunriseResult::AllNight => Ok(SunriseResult::AllNight),
    }
}

/// Calculate sunrise/sunset local times for several horizons on the same day.
///
/// Returns an iterator that yields `(Horizon, SunriseResult)` pairs; the day of year is
/// computed once for all horizons.
///
/// # Example
/// ```rust
/// use sunrise_almanac::{almanac, CalendarDate, GeoCoordinate, Horizon};
///
/// # fn main() -> Result<(), sunrise_almanac::Error> {
/// let results: Result<Vec<_>, _> = almanac::sunrise_sunset_multiple(
///     CalendarDate::new(2023, 3, 21)?,
///     GeoCoordinate::new(48.21, 16.37)?, // Vienna
///     Horizon::ALL,
/// )
/// .collect();
///
/// for (horizon, result) in results? {
///     println!("{horizon:?}: {result:?}");
/// }
/// # Ok(())
/// # }
/// ```
pub fn sunrise_sunset_multiple<H>(
    date: CalendarDate,
    location: GeoCoordinate,
    horizons: H,
) -> impl Iterator<Item = Result<(Horizon, SunriseResult<LocalHours>)>>
where
    H: IntoIterator<Item = Horizon>,
{
    let day_of_year = f64::from(date.day_of_year());
    let offset = f64::from(zone_offset_hours(location.longitude()));

    horizons.into_iter().map(move |horizon| {
        let utc = calculate_sunrise_sunset_core(
            day_of_year,
            location.latitude(),
            location.longitude(),
            horizon.zenith_angle(),
        )?;
        Ok((horizon, utc.map(|ut| utc_to_local(ut, offset))))
    })
}

/// Whole-hour zone offset approximated from longitude: `trunc(longitude / 15)`.
///
/// Truncates toward zero, so -74.3° gives -4 rather than -5.
#[must_use]
pub fn zone_offset_hours(longitude: f64) -> i32 {
    trunc(longitude / DEGREES_PER_HOUR) as i32
}

/// Calculate sunrise and sunset local times from plain latitude/longitude values.
///
/// # Errors
/// Returns error for invalid coordinates (latitude outside ±90°, longitude outside ±180°)
pub fn sunrise_sunset_from_degrees(
    date: CalendarDate,
    latitude: f64,
    longitude: f64,
    horizon: Horizon,
) -> Result<SunriseResult<LocalHours>> {
    sunrise_sunset_local(date, GeoCoordinate::new(latitude, longitude)?, horizon)
}

/// Shifts a UTC time of day by the whole-hour zone offset, wrapping into [0, 24).
fn utc_to_local(ut: HoursUtc, offset_hours: f64) -> LocalHours {
    LocalHours::from_hours(normalize_hours_0_to_24(ut.hours() + offset_hours))
}

/// Runs the sunrise pass and then the sunset pass.
///
/// The first pass without a horizon crossing decides the polar result.
fn calculate_sunrise_sunset_core(
    day_of_year: f64,
    latitude: f64,
    longitude: f64,
    zenith: f64,
) -> Result<SunriseResult<HoursUtc>> {
    let crossing = |event| solar_event_utc(day_of_year, latitude, longitude, zenith, event);

    let sunrise = match crossing(SolarEvent::Sunrise)? {
        Crossing::At(hours) => HoursUtc::from_hours(hours),
        Crossing::NeverSets => return Ok(SunriseResult::AllDay),
        Crossing::NeverRises => return Ok(SunriseResult::AllNight),
    };
    let sunset = match crossing(SolarEvent::Sunset)? {
        Crossing::At(hours) => HoursUtc::from_hours(hours),
        Crossing::NeverSets => return Ok(SunriseResult::AllDay),
        Crossing::NeverRises => return Ok(SunriseResult::AllNight),
    };

    Ok(SunriseResult::RegularDay { sunrise, sunset })
}

/// One pass of the almanac algorithm for a single event, in UTC hours.
fn solar_event_utc(
    day_of_year: f64,
    latitude: f64,
    longitude: f64,
    zenith: f64,
    event: SolarEvent,
) -> Result<Crossing> {
    let lng_hour = longitude / DEGREES_PER_HOUR;
    let t = approximate_time(day_of_year, lng_hour, event);

    let m = MEAN_ANOMALY_RATE * t - MEAN_ANOMALY_OFFSET;
    let l = sun_true_longitude(m);
    let ra = right_ascension_hours(l);

    let sin_dec = SIN_OBLIQUITY * sin_deg(l);
    let cos_dec = cos(asin(sin_dec));

    let cos_h = (cos_deg(zenith) - sin_dec * sin_deg(latitude)) / (cos_dec * cos_deg(latitude));
    if cos_h.is_nan() {
        return Err(Error::computation_error("local hour angle is not finite"));
    }
    if cos_h > 1.0 {
        return Ok(Crossing::NeverRises);
    }
    if cos_h < -1.0 {
        return Ok(Crossing::NeverSets);
    }

    let h = event.hour_angle(acos_deg(cos_h)) / DEGREES_PER_HOUR;
    let local_mean_time = h + ra - SIDEREAL_RATE * t - SIDEREAL_OFFSET;
    let ut = normalize_hours_0_to_24(local_mean_time - lng_hour);

    if !ut.is_finite() {
        return Err(Error::computation_error("event time is not finite"));
    }
    Ok(Crossing::At(ut))
}

/// Approximate time of the event in days since the start of the year.
fn approximate_time(day_of_year: f64, lng_hour: f64, event: SolarEvent) -> f64 {
    day_of_year + (event.seed_hour() - lng_hour) / 24.0
}

/// Sun's true longitude in degrees from its mean anomaly.
///
/// Reduced by a single 360° step; the result is never negative for days of the year.
fn sun_true_longitude(mean_anomaly: f64) -> f64 {
    let l = mean_anomaly
        + 1.916 * sin_deg(mean_anomaly)
        + 0.020 * sin_deg(2.0 * mean_anomaly)
        + PERIHELION_LONGITUDE;
    if l >= 360.0 { l - 360.0 } else { l }
}

/// Sun's right ascension in hours, placed in the same quadrant as the true longitude.
fn right_ascension_hours(true_longitude: f64) -> f64 {
    let mut ra = atan_deg(COS_OBLIQUITY * tan_deg(true_longitude));
    if ra < 0.0 {
        ra += 360.0;
    }

    let l_quadrant = floor(true_longitude / 90.0) * 90.0;
    let ra_quadrant = floor(ra / 90.0) * 90.0;
    (ra + (l_quadrant - ra_quadrant)) / DEGREES_PER_HOUR
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-6;

    fn wayne_nj() -> (CalendarDate, GeoCoordinate) {
        (
            CalendarDate::new(1990, 6, 25).unwrap(),
            GeoCoordinate::new(40.9, -74.3).unwrap(),
        )
    }

    #[test]
    fn test_intermediate_values_of_reference_case() {
        let lng_hour = -74.3 / 15.0;
        let t = approximate_time(176.0, lng_hour, SolarEvent::Sunrise);
        assert!((t - 176.456389).abs() < EPSILON);

        let m = MEAN_ANOMALY_RATE * t - MEAN_ANOMALY_OFFSET;
        assert!((m - 170.626417).abs() < EPSILON);

        let l = sun_true_longitude(m);
        assert!((l - 93.566050).abs() < EPSILON);

        let ra = right_ascension_hours(l);
        assert!((ra - 6.259011).abs() < EPSILON);
    }

    #[test]
    fn test_approximate_time_seeds() {
        let rise = approximate_time(100.0, 0.0, SolarEvent::Sunrise);
        let set = approximate_time(100.0, 0.0, SolarEvent::Sunset);
        assert!((rise - 100.25).abs() < EPSILON);
        assert!((set - 100.75).abs() < EPSILON);
    }

    #[test]
    fn test_sun_true_longitude_wraps_once() {
        let l = sun_true_longitude(358.0);
        assert!((0.0..360.0).contains(&l));
        assert!(sun_true_longitude(0.0) > 282.0);
    }

    #[test]
    fn test_right_ascension_follows_longitude_quadrant() {
        for (l, expected) in [
            (10.0, 0.612738),
            (100.0, 6.725131),
            (200.0, 13.231266),
            (300.0, 20.145121),
            (359.9, 23.993882),
        ] {
            let ra = right_ascension_hours(l);
            assert!(
                (ra - expected).abs() < EPSILON,
                "L={l}: got {ra}, expected {expected}"
            );
            assert_eq!(floor(ra / 6.0), floor(l / 90.0));
        }
    }

    #[test]
    fn test_reference_case_utc() {
        let (date, location) = wayne_nj();
        let result = sunrise_sunset_utc(date, location, Horizon::SunriseSunset).unwrap();

        let sunrise = result.sunrise().unwrap().hours();
        let sunset = result.sunset().unwrap().hours();
        assert!((sunrise - 9.441433).abs() < EPSILON);
        assert!((sunset - 0.550085).abs() < EPSILON);
    }

    #[test]
    fn test_reference_case_local() {
        let (date, location) = wayne_nj();
        let result = sunrise_sunset_local(date, location, Horizon::SunriseSunset).unwrap();

        let SunriseResult::RegularDay { sunrise, sunset } = result else {
            panic!("expected regular day, got {result:?}");
        };
        assert!((sunrise.hours() - 5.441433).abs() < EPSILON);
        assert!((sunset.hours() - 20.550085).abs() < EPSILON);
        assert_eq!((sunrise.hour(), sunrise.minute()), (5, 26));
        assert_eq!((sunset.hour(), sunset.minute()), (20, 33));
    }

    #[test]
    fn test_sunset_is_not_sunrise_plus_twelve_hours() {
        let (date, location) = wayne_nj();
        let result = sunrise_sunset_local(date, location, Horizon::SunriseSunset).unwrap();

        let day_length = result.sunset().unwrap().hours() - result.sunrise().unwrap().hours();
        assert!(day_length > 15.0, "June day length in New Jersey was {day_length}");
    }

    #[test]
    fn test_midnight_sun_and_polar_night() {
        let location = GeoCoordinate::new(78.0, 15.0).unwrap();

        let june = CalendarDate::new(2024, 6, 21).unwrap();
        assert_eq!(
            sunrise_sunset_local(june, location, Horizon::SunriseSunset).unwrap(),
            SunriseResult::AllDay
        );

        let december = CalendarDate::new(2024, 12, 21).unwrap();
        assert_eq!(
            sunrise_sunset_local(december, location, Horizon::SunriseSunset).unwrap(),
            SunriseResult::AllNight
        );
        assert!(
            sunrise_sunset_local(december, location, Horizon::AstronomicalTwilight)
                .unwrap()
                .is_regular_day()
        );
    }

    #[test]
    fn test_zone_offset_truncates_toward_zero() {
        assert_eq!(zone_offset_hours(-74.3), -4);
        assert_eq!(zone_offset_hours(74.3), 4);
        assert_eq!(zone_offset_hours(14.9), 0);
        assert_eq!(zone_offset_hours(-14.9), 0);
        assert_eq!(zone_offset_hours(180.0), 12);
        assert_eq!(zone_offset_hours(-180.0), -12);
    }

    #[test]
    fn test_multiple_matches_single_calls() {
        let (date, location) = wayne_nj();
        let results: Vec<_> = sunrise_sunset_multiple(date, location, Horizon::ALL)
            .collect::<Result<Vec<_>>>()
            .unwrap();

        assert_eq!(results.len(), 4);
        for (horizon, result) in results {
            assert_eq!(
                result,
                sunrise_sunset_local(date, location, horizon).unwrap()
            );
        }
    }

    #[test]
    fn test_from_degrees_validates_coordinates() {
        let (date, _) = wayne_nj();
        assert_eq!(
            sunrise_sunset_from_degrees(date, 91.0, 0.0, Horizon::SunriseSunset),
            Err(Error::invalid_latitude(91.0))
        );
        assert_eq!(
            sunrise_sunset_from_degrees(date, 0.0, 200.0, Horizon::SunriseSunset),
            Err(Error::invalid_longitude(200.0))
        );
        assert!(sunrise_sunset_from_degrees(date, 40.9, -74.3, Horizon::SunriseSunset).is_ok());
    }

    #[test]
    #[cfg(feature = "chrono")]
    fn test_chrono_timestamps_on_given_date() {
        use chrono::{Datelike, Timelike};

        let date = NaiveDate::from_ymd_opt(1990, 6, 25).unwrap();
        let result = sunrise_sunset(date, 40.9, -74.3, Horizon::SunriseSunset).unwrap();

        let SunriseResult::RegularDay { sunrise, sunset } = result else {
            panic!("expected regular day, got {result:?}");
        };
        assert_eq!(sunrise.date_naive(), date);
        assert_eq!(sunset.day(), 25);
        assert_eq!((sunrise.hour(), sunrise.minute(), sunrise.second()), (5, 26, 0));
        assert_eq!((sunset.hour(), sunset.minute()), (20, 33));
        assert_eq!(sunrise.offset().local_minus_utc(), -4 * 3600);
    }

    #[test]
    #[cfg(feature = "chrono")]
    fn test_chrono_rejects_invalid_coordinates() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 21).unwrap();
        assert!(sunrise_sunset(date, -95.0, 0.0, Horizon::CivilTwilight).is_err());
        assert!(sunrise_sunset(date, 0.0, f64::NAN, Horizon::CivilTwilight).is_err());
    }
}
