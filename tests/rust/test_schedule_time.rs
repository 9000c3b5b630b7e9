use super::*;

use approx::assert_relative_eq;

#[test]
fn test_time_to_decimal() {
    assert_relative_eq!(time_to_decimal("09:30").unwrap(), 9.5);
    assert_relative_eq!(time_to_decimal("00:00").unwrap(), 0.0);
    assert_relative_eq!(time_to_decimal("13:45").unwrap(), 13.75);
    assert_relative_eq!(time_to_decimal("08:20").unwrap(), 8.0 + 20.0 / 60.0);
}

#[test]
fn test_time_to_decimal_rejects_garbage() {
    assert_eq!(time_to_decimal("nine"), None);
    assert_eq!(time_to_decimal("09"), None);
    assert_eq!(time_to_decimal("ab:cd"), None);
    assert_eq!(time_to_decimal(""), None);
}

#[test]
fn test_hour_of() {
    assert_eq!(hour_of("09:59"), Some(9));
    assert_eq!(hour_of("17:00"), Some(17));
    assert_eq!(hour_of("x:00"), None);
}

#[test]
fn test_clock_time_parse() {
    let t: ClockTime = "07:05".parse().unwrap();
    assert_eq!(t, ClockTime { hour: 7, minute: 5 });
    assert_eq!(t.minutes_since_midnight(), 425);
    assert_eq!(t.to_string(), "07:05");
}

#[test]
fn test_clock_time_requires_two_digits() {
    assert!("7:05".parse::<ClockTime>().is_err());
    assert!("07:5".parse::<ClockTime>().is_err());
    assert!(" 07:05".parse::<ClockTime>().is_err());
    assert!("07:05:00".parse::<ClockTime>().is_err());
}

#[test]
fn test_clock_time_range() {
    assert!("23:59".parse::<ClockTime>().is_ok());
    assert!("24:00".parse::<ClockTime>().is_err());
    assert!("12:60".parse::<ClockTime>().is_err());
    assert_eq!(ClockTime::new(24, 0), None);
}

#[test]
fn test_clock_time_ordering() {
    let a = ClockTime::new(9, 59).unwrap();
    let b = ClockTime::new(10, 0).unwrap();
    assert!(a < b);
    assert_relative_eq!(b.as_decimal() - a.as_decimal(), 1.0 / 60.0, epsilon = 1e-12);
}
