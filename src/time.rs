// src/time.rs
//
// Kickoff times arrive as a UTC date (`dateEvent`) plus an optional UTC time
// (`strTime`). They are shown in Western Indonesia Time (WIB, UTC+7) with
// Indonesian month names, e.g. "17 Agustus 2024 pukul 02.00".

use chrono::{
    DateTime, Datelike, Days, Duration, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Offset,
    Utc, Weekday,
};

use crate::config::consts::WIB_OFFSET_HOURS;

const MONTHS_ID: [&str; 12] = [
    "Januari", "Februari", "Maret", "April", "Mei", "Juni",
    "Juli", "Agustus", "September", "Oktober", "November", "Desember",
];

fn wib() -> FixedOffset {
    FixedOffset::east_opt(WIB_OFFSET_HOURS * 3600).unwrap_or_else(|| Utc.fix())
}

/// `15:00:00`, `15:00`, `15:00:00+00:00` → 15:00:00. Anything else → None.
fn parse_time(t: &str) -> Option<NaiveTime> {
    let t = t.trim();
    let head = t.get(..8).unwrap_or(t);
    NaiveTime::parse_from_str(head, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(t.get(..5).unwrap_or(t), "%H:%M"))
        .ok()
}

/// Kickoff as a UTC instant. Missing or unreadable time means midnight.
pub fn kickoff_utc(date: &str, time: Option<&str>) -> Option<DateTime<Utc>> {
    let d = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d").ok()?;
    let t = time.and_then(parse_time).unwrap_or(NaiveTime::MIN);
    Some(NaiveDateTime::new(d, t).and_utc())
}

/// Kickoff in WIB.
pub fn kickoff_wib(date: &str, time: Option<&str>) -> Option<DateTime<FixedOffset>> {
    kickoff_utc(date, time).map(|k| k.with_timezone(&wib()))
}

/// Calendar day of the kickoff in WIB (grouping key for fixture lists).
pub fn wib_date(date: &str, time: Option<&str>) -> Option<NaiveDate> {
    kickoff_wib(date, time).map(|k| k.date_naive())
}

/// Today's date in WIB.
pub fn today_wib() -> NaiveDate {
    Utc::now().with_timezone(&wib()).date_naive()
}

/// "17 Agustus 2024 pukul 02.00". Unparseable dates come back unchanged.
pub fn to_wib_display(date: &str, time: Option<&str>) -> String {
    match kickoff_wib(date, time) {
        Some(k) => format!(
            "{} {} {} pukul {}",
            k.day(),
            MONTHS_ID[k.month0() as usize],
            k.year(),
            k.format("%H.%M")
        ),
        None => {
            logd!("Time: could not parse {:?} {:?}", date, time);
            s!(date)
        }
    }
}

/// "17 Agustus 2024" for a plain date (section headers).
pub fn date_display(d: NaiveDate) -> String {
    format!("{} {} {}", d.day(), MONTHS_ID[d.month0() as usize], d.year())
}

/// Sunday-start week containing `anchor`, both ends inclusive.
pub fn week_bounds(anchor: NaiveDate) -> (NaiveDate, NaiveDate) {
    let start = anchor.week(Weekday::Sun).first_day();
    let end = start.checked_add_days(Days::new(6)).unwrap_or(NaiveDate::MAX);
    (start, end)
}

/// Move `anchor` by whole weeks (negative goes back).
pub fn shift_weeks(anchor: NaiveDate, weeks: i64) -> NaiveDate {
    anchor
        .checked_add_signed(Duration::weeks(weeks))
        .unwrap_or(anchor)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn late_kickoff_rolls_into_next_wib_day() {
        assert_eq!(
            to_wib_display("2024-08-16", Some("19:00:00")),
            "17 Agustus 2024 pukul 02.00"
        );
        assert_eq!(wib_date("2024-08-16", Some("19:00:00")), Some(d(2024, 8, 17)));
    }

    #[test]
    fn missing_time_is_midnight_utc() {
        assert_eq!(to_wib_display("2025-01-04", None), "4 Januari 2025 pukul 07.00");
        assert_eq!(to_wib_display("2025-01-04", Some("")), "4 Januari 2025 pukul 07.00");
    }

    #[test]
    fn time_with_offset_suffix_and_short_form() {
        assert_eq!(
            to_wib_display("2024-12-26", Some("12:30:00+00:00")),
            "26 Desember 2024 pukul 19.30"
        );
        assert_eq!(to_wib_display("2024-12-26", Some("17:30")), "27 Desember 2024 pukul 00.30");
    }

    #[test]
    fn garbage_date_is_returned_unchanged() {
        assert_eq!(to_wib_display("TBD", Some("15:00:00")), "TBD");
        assert_eq!(wib_date("", None), None);
    }

    #[test]
    fn weeks_start_on_sunday() {
        // 2024-08-17 is a Saturday
        let (start, end) = week_bounds(d(2024, 8, 17));
        assert_eq!(start, d(2024, 8, 11));
        assert_eq!(end, d(2024, 8, 17));

        let (start, end) = week_bounds(d(2024, 8, 18));
        assert_eq!(start, d(2024, 8, 18));
        assert_eq!(end, d(2024, 8, 24));

        assert_eq!(shift_weeks(d(2024, 8, 18), -1), d(2024, 8, 11));
    }
}
