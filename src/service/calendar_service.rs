use chrono::{Datelike, NaiveDate, Weekday};

/// Position of the monthly screen; month stays in 1..=12 via `prev`/`next`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthCursor {
    pub year: i32,
    pub month: u32,
}

impl MonthCursor {
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn prev(self) -> Self {
        if self.month == 1 {
            Self { year: self.year - 1, month: 12 }
        } else {
            Self { year: self.year, month: self.month - 1 }
        }
    }

    pub fn next(self) -> Self {
        if self.month == 12 {
            Self { year: self.year + 1, month: 1 }
        } else {
            Self { year: self.year, month: self.month + 1 }
        }
    }

    /// Header of the monthly screen, e.g. "November 2024".
    pub fn title(&self) -> String {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .map(|d| d.format("%B %Y").to_string())
            .unwrap_or_default()
    }
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|d| d.pred_opt())
        .map(|d| d.day())
        .unwrap_or(0)
}

/// Builds the monthly grid: week rows of 7 signed day cells. Positive cells
/// belong to the displayed month; negative cells are adjacent-month padding
/// whose absolute value is the day to render.
///
/// The first row is front-filled with the tail of the previous month when day
/// 1 is not a Monday. A partial last row is back-filled with next-month days
/// 1, 2, 3... unless the month's last day is a Sunday, in which case the
/// short row is kept as-is. A Sunday always lands in the 7th cell, so that
/// branch never actually fires, but the shipped behavior is kept.
pub fn month_grid(year: i32, month: u32) -> Vec<Vec<i32>> {
    let Some(first_day) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return Vec::new();
    };
    // Monday=1 .. Sunday=7
    let start_weekday = first_day.weekday().number_from_monday();
    let current_days = days_in_month(year, month);

    let mut rows: Vec<Vec<i32>> = Vec::new();
    let mut row: Vec<i32> = Vec::new();

    if start_weekday > 1 {
        let prev = MonthCursor { year, month }.prev();
        let prev_days = days_in_month(prev.year, prev.month);
        let lead_start = prev_days - start_weekday + 2;
        for day in lead_start..=prev_days {
            row.push(-(day as i32));
        }
    }

    for day in 1..=current_days {
        row.push(day as i32);
        if row.len() == 7 {
            rows.push(std::mem::take(&mut row));
        }
    }

    if !row.is_empty() {
        let ends_on_sunday = first_day
            .with_day(current_days)
            .map(|d| d.weekday() == Weekday::Sun)
            .unwrap_or(false);
        if !ends_on_sunday {
            let mut next_month_day = 1;
            while row.len() < 7 {
                row.push(-next_month_day);
                next_month_day += 1;
            }
        }
        rows.push(row);
    }

    rows
}

/// Only meaningful for positive (current-month) cells.
pub fn is_today(day: i32, cursor: MonthCursor, today: NaiveDate) -> bool {
    day > 0
        && day as u32 == today.day()
        && cursor.month == today.month()
        && cursor.year == today.year()
}

/// The unpadded `M-D-YYYY` key used to tag and look up monthly activities.
pub fn date_key(cursor: MonthCursor, day: u32) -> String {
    format!("{}-{}-{}", cursor.month, day, cursor.year)
}
