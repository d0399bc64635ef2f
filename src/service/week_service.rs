use chrono::{Datelike, Duration, NaiveDate};

/// Monday-to-Saturday window around `date`.
///
/// The offset follows the old client's `getDay()` math (Sunday = 0), so a
/// Sunday reference starts the window on the *following* Monday.
pub fn week_range(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let offset = date.weekday().num_days_from_sunday() as i64;
    let start = date + Duration::days(1 - offset);
    (start, start + Duration::days(5))
}

pub fn prev_week(date: NaiveDate) -> NaiveDate {
    date - Duration::days(7)
}

pub fn next_week(date: NaiveDate) -> NaiveDate {
    date + Duration::days(7)
}

/// `"4th November 2024"`. Suffixes follow the shipped rule (1/21/31 -> st,
/// 2/22 -> nd, 3/23 -> rd, everything else th); 11, 12 and 13 fall through
/// to "th" by accident rather than design, which happens to be correct.
pub fn format_long_date(date: NaiveDate) -> String {
    let day = date.day();
    let suffix = match day {
        1 | 21 | 31 => "st",
        2 | 22 => "nd",
        3 | 23 => "rd",
        _ => "th",
    };
    format!("{}{} {}", day, suffix, date.format("%B %Y"))
}

/// Full English weekday name, the day tag of weekly-screen activities.
pub fn weekday_name(date: NaiveDate) -> String {
    date.format("%A").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn wednesday_reference_spans_monday_to_saturday() {
        let (start, end) = week_range(date(2024, 11, 6));
        assert_eq!(start, date(2024, 11, 4));
        assert_eq!(end, date(2024, 11, 9));
        assert_eq!(format_long_date(start), "4th November 2024");
        assert_eq!(format_long_date(end), "9th November 2024");
    }

    #[test]
    fn monday_reference_starts_on_itself() {
        let (start, end) = week_range(date(2024, 11, 4));
        assert_eq!(start, date(2024, 11, 4));
        assert_eq!(end, date(2024, 11, 9));
    }

    #[test]
    fn sunday_reference_jumps_to_the_next_monday() {
        let (start, end) = week_range(date(2024, 11, 10));
        assert_eq!(start, date(2024, 11, 11));
        assert_eq!(end, date(2024, 11, 16));
    }

    #[test]
    fn week_navigation_shifts_by_seven_days() {
        let reference = date(2024, 11, 6);
        assert_eq!(prev_week(reference), date(2024, 10, 30));
        assert_eq!(next_week(reference), date(2024, 11, 13));
    }

    #[test]
    fn ordinal_suffixes() {
        assert_eq!(format_long_date(date(2024, 11, 1)), "1st November 2024");
        assert_eq!(format_long_date(date(2024, 11, 2)), "2nd November 2024");
        assert_eq!(format_long_date(date(2024, 11, 3)), "3rd November 2024");
        assert_eq!(format_long_date(date(2024, 11, 11)), "11th November 2024");
        assert_eq!(format_long_date(date(2024, 11, 21)), "21st November 2024");
        assert_eq!(format_long_date(date(2024, 11, 22)), "22nd November 2024");
        assert_eq!(format_long_date(date(2024, 11, 23)), "23rd November 2024");
        assert_eq!(format_long_date(date(2024, 12, 31)), "31st December 2024");
    }

    #[test]
    fn weekday_names_are_full_english() {
        assert_eq!(weekday_name(date(2024, 11, 4)), "Monday");
        assert_eq!(weekday_name(date(2024, 11, 9)), "Saturday");
    }
}
