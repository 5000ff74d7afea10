//! Example printing sunrise/sunset and twilight times for a few places.

use chrono::NaiveDate;
use sunrise_almanac::{CalendarDate, GeoCoordinate, Horizon, SunriseResult, almanac};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Worked example of the almanac: Wayne, New Jersey, 25 June 1990
    let date = CalendarDate::new(1990, 6, 25)?;
    let location = GeoCoordinate::new(40.9, -74.3)?;

    println!("Wayne, NJ, 1990-06-25 (UTC{:+}):", almanac::zone_offset_hours(-74.3));
    for item in almanac::sunrise_sunset_multiple(date, location, Horizon::ALL) {
        let (horizon, result) = item?;
        match result {
            SunriseResult::RegularDay { sunrise, sunset } => {
                println!("  {horizon:?}: {sunrise} - {sunset}");
            }
            SunriseResult::AllDay => println!("  {horizon:?}: sun never sets"),
            SunriseResult::AllNight => println!("  {horizon:?}: sun never rises"),
        }
    }

    // Same calculation with chrono timestamps
    println!("\nLongyearbyen, Svalbard:");
    for day in ["2024-06-21", "2024-12-21", "2024-03-20"] {
        let date = day.parse::<NaiveDate>()?;
        match almanac::sunrise_sunset(date, 78.22, 15.65, Horizon::SunriseSunset)? {
            SunriseResult::RegularDay { sunrise, sunset } => {
                println!("  {day}: sunrise {sunrise}, sunset {sunset}");
            }
            SunriseResult::AllDay => println!("  {day}: midnight sun"),
            SunriseResult::AllNight => println!("  {day}: polar night"),
        }
    }

    Ok(())
}
