use crate::utils::bengali::to_bengali_digits;

/// Hora de oración de ejemplo mostrada en el inicio
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrayerTime {
    pub name: &'static str,
    pub time: String,
    pub current: bool,
}

/// Horario fijo de ejemplo; `current` se deriva de la hora local (0-23).
/// No es un cálculo astronómico real.
pub fn sample_prayer_times(hour: u32) -> Vec<PrayerTime> {
    let table: [(&'static str, &str, bool); 6] = [
        ("ফজর", "4:30", (4..6).contains(&hour)),
        ("সূর্যোদয়", "5:54", false),
        ("যোহর", "12:10", (12..15).contains(&hour)),
        ("আসর", "3:45", (15..18).contains(&hour)),
        ("মাগরিব", "6:15", hour == 18),
        ("ইশা", "7:30", hour >= 19 || hour < 4),
    ];

    table
        .into_iter()
        .map(|(name, time, current)| PrayerTime {
            name,
            time: to_bengali_digits(time),
            current,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn current_name(hour: u32) -> Option<&'static str> {
        sample_prayer_times(hour).into_iter().find(|p| p.current).map(|p| p.name)
    }

    #[test]
    fn times_are_rendered_in_bengali_digits() {
        let times = sample_prayer_times(10);
        assert_eq!(times.len(), 6);
        assert_eq!(times[0].time, "৪:৩০");
        assert_eq!(times[2].time, "১২:১০");
    }

    #[test]
    fn current_prayer_follows_the_hour() {
        assert_eq!(current_name(5), Some("ফজর"));
        assert_eq!(current_name(13), Some("যোহর"));
        assert_eq!(current_name(16), Some("আসর"));
        assert_eq!(current_name(18), Some("মাগরিব"));
        assert_eq!(current_name(23), Some("ইশা"));
        assert_eq!(current_name(2), Some("ইশা"));
        // Entre el amanecer y el mediodía no hay oración en curso
        assert_eq!(current_name(9), None);
    }

    #[test]
    fn sunrise_is_never_current() {
        for hour in 0..24 {
            assert!(!sample_prayer_times(hour)[1].current);
        }
    }
}
