//! Formato de fecha, hora y dígitos en bengalí.

use chrono::{DateTime, Datelike, TimeZone, Timelike};

const BENGALI_ZERO: u32 = 0x09E6;

pub const BENGALI_MONTHS: [&str; 12] = [
    "জানুয়ারি", "ফেব্রুয়ারি", "মার্চ", "এপ্রিল", "মে", "জুন",
    "জুলাই", "আগস্ট", "সেপ্টেম্বর", "অক্টোবর", "নভেম্বর", "ডিসেম্বর",
];

const AM: &str = "পূর্বাহ্ন";
const PM: &str = "অপরাহ্ন";

/// Sustituye los dígitos ASCII por dígitos bengalíes; el resto queda igual
pub fn to_bengali_digits(text: &str) -> String {
    text.chars()
        .map(|c| match c.to_digit(10) {
            Some(d) if c.is_ascii_digit() => char::from_u32(BENGALI_ZERO + d).unwrap_or(c),
            _ => c,
        })
        .collect()
}

/// `"১৬ অক্টোবর ২০২৬"`
pub fn format_date<Tz: TimeZone>(dt: &DateTime<Tz>) -> String {
    let month = BENGALI_MONTHS[dt.month0() as usize];
    format!(
        "{} {} {}",
        to_bengali_digits(&dt.day().to_string()),
        month,
        to_bengali_digits(&dt.year().to_string()),
    )
}

/// Reloj de 12 horas: `"৩:০৫:০৯ অপরাহ্ন"`
pub fn format_time<Tz: TimeZone>(dt: &DateTime<Tz>) -> String {
    let (is_pm, hour12) = dt.hour12();
    let clock = format!("{}:{:02}:{:02}", hour12, dt.minute(), dt.second());
    format!("{} {}", to_bengali_digits(&clock), if is_pm { PM } else { AM })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn converts_only_ascii_digits() {
        assert_eq!(to_bengali_digits("12:05"), "১২:০৫");
        assert_eq!(to_bengali_digits("abc ৭"), "abc ৭");
        assert_eq!(to_bengali_digits(""), "");
    }

    #[test]
    fn formats_date_with_month_name() {
        let dt = Utc.with_ymd_and_hms(2026, 10, 6, 8, 0, 0).unwrap();
        assert_eq!(format_date(&dt), "৬ অক্টোবর ২০২৬");
    }

    #[test]
    fn formats_time_on_a_twelve_hour_clock() {
        let afternoon = Utc.with_ymd_and_hms(2026, 1, 1, 15, 5, 9).unwrap();
        assert_eq!(format_time(&afternoon), "৩:০৫:০৯ অপরাহ্ন");

        let midnight = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(format_time(&midnight), "১২:০০:০০ পূর্বাহ্ন");

        let noon = Utc.with_ymd_and_hms(2026, 1, 1, 12, 30, 0).unwrap();
        assert_eq!(format_time(&noon), "১২:৩০:০০ অপরাহ্ন");
    }
}
