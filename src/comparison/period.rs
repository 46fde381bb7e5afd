//! Calendar month shifting for period-over-period comparison.

use chrono::{Datelike, Days, NaiveDate};

use crate::core::{Error, FilterParams, Result};
use crate::normalize::parse_calendar_date;

/// Shift a date by whole months, keeping the day of month.
///
/// Days that do not exist in the target month roll over into the following
/// month instead of clamping: 2024-03-31 shifted back one month is
/// 2024-02-31, which normalizes to 2024-03-02. `None` only when the result
/// leaves chrono's representable range.
pub fn shift_date(date: NaiveDate, delta_months: i32) -> Option<NaiveDate> {
    let months = date.year() * 12 + date.month0() as i32 + delta_months;
    let year = months.div_euclid(12);
    let month = months.rem_euclid(12) as u32 + 1;

    NaiveDate::from_ymd_opt(year, month, 1)?.checked_add_days(Days::new(u64::from(date.day() - 1)))
}

/// [`shift_date`] over `YYYY-MM-DD` strings.
pub fn shift_period(date_ymd: &str, delta_months: i32) -> Result<String> {
    let date = parse_calendar_date(date_ymd).ok_or_else(|| Error::invalid_date(date_ymd))?;
    let shifted = shift_date(date, delta_months).ok_or_else(|| Error::invalid_date(date_ymd))?;
    Ok(shifted.format("%Y-%m-%d").to_string())
}

/// Filters for the month before the selected range.
///
/// Only a closed range has a previous period; every other dimension is kept
/// identical.
pub fn previous_period(filters: &FilterParams) -> Option<FilterParams> {
    let (from, to) = filters.date_range()?;
    Some(FilterParams {
        from: Some(shift_date(from, -1)?),
        to: Some(shift_date(to, -1)?),
        ..filters.clone()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_shift_keeps_day_of_month() {
        assert_eq!(shift_period("2024-03-15", -1).unwrap(), "2024-02-15");
        assert_eq!(shift_period("2024-01-15", -1).unwrap(), "2023-12-15");
        assert_eq!(shift_period("2023-12-15", 1).unwrap(), "2024-01-15");
        assert_eq!(shift_period("2024-05-01", 0).unwrap(), "2024-05-01");
    }

    #[test]
    fn test_shift_rolls_over_missing_days() {
        // Leap year: February has 29 days, so the 31st lands two days into March.
        assert_eq!(shift_period("2024-03-31", -1).unwrap(), "2024-03-02");
        assert_eq!(shift_period("2023-03-31", -1).unwrap(), "2023-03-03");
        assert_eq!(shift_period("2024-05-31", -1).unwrap(), "2024-05-01");
        assert_eq!(shift_period("2024-03-30", -1).unwrap(), "2024-03-01");
    }

    #[test]
    fn test_shift_across_several_years() {
        assert_eq!(shift_date(date("2024-02-29"), -24), Some(date("2022-03-01")));
        assert_eq!(shift_date(date("2020-06-10"), 30), Some(date("2022-12-10")));
    }

    #[test]
    fn test_shift_period_rejects_invalid_input() {
        assert!(shift_period("2024-13-01", -1).is_err());
        assert!(shift_period("last month", -1).is_err());
    }

    #[test]
    fn test_previous_period_requires_closed_range() {
        let open = FilterParams::new().with_from(Some(date("2024-03-01")));
        assert_eq!(previous_period(&open), None);
        assert_eq!(previous_period(&FilterParams::new()), None);
    }

    #[test]
    fn test_previous_period_keeps_other_dimensions() {
        let filters = FilterParams::new()
            .with_from(Some(date("2024-03-01")))
            .with_to(Some(date("2024-03-31")))
            .with_centros(["Norte"])
            .with_estados(["Asignado", "Pendiente"]);

        let previous = previous_period(&filters).unwrap();
        assert_eq!(previous.from, Some(date("2024-02-01")));
        assert_eq!(previous.to, Some(date("2024-03-02")));
        assert_eq!(previous.centro, filters.centro);
        assert_eq!(previous.estado, filters.estado);
        assert_eq!(previous.especialidad, None);
    }
}
