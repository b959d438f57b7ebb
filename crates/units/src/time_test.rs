use approx::assert_relative_eq;

use crate::constants::SECONDS_PER_YEAR;
use crate::time::Time;

#[test]
fn gyr_round_trip() {
    let age = Time::from_gyr(4.6);
    assert_relative_eq!(age.to_years(), 4.6e9);
    assert_relative_eq!(age.to_gyr(), 4.6);
}

#[test]
fn seconds_per_year() {
    assert_relative_eq!(Time::from_years(1.0).to_seconds(), SECONDS_PER_YEAR);
    assert_relative_eq!(Time::from_seconds(SECONDS_PER_YEAR).to_years(), 1.0);
}

#[test]
fn a_day_is_24_hours() {
    let day = Time::from_hours(24.0);
    assert_relative_eq!(day.to_hours(), 24.0, max_relative = 1e-12);
    assert_relative_eq!(day.to_years() * 365.25, 1.0, max_relative = 1e-12);
}
