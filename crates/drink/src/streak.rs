use std::collections::BTreeSet;

use time::{Date, Duration, OffsetDateTime};

/// Consecutive UTC days with at least one logged drink, counting back from
/// `today`. A run that ended yesterday still counts; anything older is 0.
pub fn current_streak(timestamps: impl IntoIterator<Item = i64>, today: Date) -> u32 {
    let days = timestamps
        .into_iter()
        .filter_map(|ts| OffsetDateTime::from_unix_timestamp(ts).ok())
        .map(|dt| dt.date())
        .collect::<BTreeSet<_>>();

    let mut day = if days.contains(&today) {
        today
    } else {
        match today.previous_day() {
            Some(yesterday) if days.contains(&yesterday) => yesterday,
            _ => return 0,
        }
    };

    let mut streak = 0;
    while days.contains(&day) {
        streak += 1;
        day = match day.checked_sub(Duration::days(1)) {
            Some(prev) => prev,
            None => break,
        };
    }

    streak
}
