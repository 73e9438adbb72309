//! Pattern 5: Dates and Times
//! Example: The chrono Types
//!
//! Run with: cargo run --bin p10_datetime

use std::time::SystemTime;

use chrono::{DateTime, Datelike, Days, FixedOffset, NaiveDate, NaiveTime, Timelike, Utc};

const HOUR: i32 = 3600;

fn main() {
    println!("=== The Current Instant ===\n");

    let now = Utc::now();
    println!("epoch milliseconds: {}", now.timestamp_millis());

    // Round trip through the OS clock type.
    let system: SystemTime = SystemTime::from(now);
    let back: DateTime<Utc> = system.into();
    println!("via SystemTime: {}", back);

    println!("\n=== Offsets ===");

    // Standard-time offsets; chrono carries no zone-rule database.
    let berlin = FixedOffset::east_opt(HOUR).unwrap();
    let brasilia = FixedOffset::west_opt(3 * HOUR).unwrap();

    println!("berlin:   {}", now.with_timezone(&berlin));
    println!("brasilia: {}", now.with_timezone(&brasilia));

    let berlin_clock = now.with_timezone(&berlin).time();
    let brasilia_clock = now.with_timezone(&brasilia).time();
    println!(
        "berlin wall clock is before brasilia's: {}",
        berlin_clock < brasilia_clock
    );

    let gap = brasilia_clock.signed_duration_since(berlin_clock);
    println!("hours between: {}", gap.num_hours());
    println!("minutes between: {}", gap.num_minutes());

    println!("\n=== NaiveTime ===");

    let late = NaiveTime::from_hms_opt(23, 59, 59).unwrap();
    println!("late: {}", late); // 23:59:59

    let leet = NaiveTime::parse_from_str("06:13", "%H:%M").unwrap();
    println!("leet: {}", leet);

    println!("\n=== NaiveDate ===");

    let today = Utc::now().date_naive();
    let tomorrow = today + Days::new(1);
    let yesterday = tomorrow - Days::new(2);
    println!("today: {}, tomorrow: {}, yesterday: {}", today, tomorrow, yesterday);

    let independence_day = NaiveDate::from_ymd_opt(2014, 7, 4).unwrap();
    println!("2014-07-04 was a {}", independence_day.format("%A")); // Friday

    let xmas = NaiveDate::parse_from_str("24.12.2014", "%d.%m.%Y").unwrap();
    println!("xmas: {}", xmas); // 2014-12-24

    println!("\n=== NaiveDateTime ===");

    let sylvester = NaiveDate::from_ymd_opt(2014, 12, 31)
        .unwrap()
        .and_hms_opt(23, 59, 59)
        .unwrap();
    println!("day of week: {}", sylvester.format("%A")); // Wednesday
    println!("month: {}", sylvester.format("%B")); // December

    let minute_of_day = sylvester.hour() * 60 + sylvester.minute();
    println!("minute of day: {}", minute_of_day); // 1439

    // Pin the local datetime to an offset to get a real instant.
    let in_berlin = sylvester.and_local_timezone(berlin).unwrap();
    println!("in berlin: {}", in_berlin);

    println!("\n=== Key Points ===");
    println!("1. Naive types carry no offset; DateTime<Tz> is an instant");
    println!("2. parse_from_str takes explicit format strings");
    println!("3. Date arithmetic goes through Days, never raw seconds");
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Weekday};

    #[test]
    fn independence_day_2014_was_a_friday() {
        let day = NaiveDate::from_ymd_opt(2014, 7, 4).unwrap();
        assert_eq!(day.weekday(), Weekday::Fri);
    }

    #[test]
    fn day_first_format_parses() {
        let xmas = NaiveDate::parse_from_str("24.12.2014", "%d.%m.%Y").unwrap();
        assert_eq!(xmas, NaiveDate::from_ymd_opt(2014, 12, 24).unwrap());
    }

    #[test]
    fn sylvester_minute_of_day() {
        let sylvester = NaiveDate::from_ymd_opt(2014, 12, 31)
            .unwrap()
            .and_hms_opt(23, 59, 59)
            .unwrap();
        assert_eq!(sylvester.weekday(), Weekday::Wed);
        assert_eq!(sylvester.month(), 12);
        assert_eq!(sylvester.hour() * 60 + sylvester.minute(), 1439);
    }

    #[test]
    fn clock_time_parses_without_seconds() {
        let leet = NaiveTime::parse_from_str("06:13", "%H:%M").unwrap();
        assert_eq!(leet, NaiveTime::from_hms_opt(6, 13, 0).unwrap());
    }

    #[test]
    fn offset_rendering_shifts_the_clock() {
        let utc = Utc.with_ymd_and_hms(2014, 12, 31, 12, 0, 0).unwrap();
        let berlin = FixedOffset::east_opt(HOUR).unwrap();
        assert_eq!(utc.with_timezone(&berlin).hour(), 13);
    }
}
