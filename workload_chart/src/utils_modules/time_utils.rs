use crate::common::*;

#[doc = "Parses an IANA timezone name such as `America/New_York`"]
pub fn parse_reference_timezone(name: &str) -> anyhow::Result<Tz> {
    name.parse::<Tz>().map_err(|e| {
        anyhow!(
            "[time_utils->parse_reference_timezone] Unknown timezone '{}': {}",
            name,
            e
        )
    })
}

#[doc = r#"
    Civil (wall-calendar) date of an instant in the reference timezone.

    Every "what day is it" question in the program goes through here: today's date,
    the x-axis labels and the day offset of each task. DST transitions are handled by
    the tz database instead of a hardcoded UTC offset.
"#]
pub fn civil_date_of(instant: DateTime<Utc>, tz: Tz) -> NaiveDate {
    instant.with_timezone(&tz).date_naive()
}

#[doc = "Today's civil date in the reference timezone"]
pub fn civil_today(tz: Tz) -> NaiveDate {
    civil_date_of(Utc::now(), tz)
}

#[doc = r#"
    Converts a Notion date string into a civil date in the reference timezone.

    Notion sends either a bare date (`2024-03-09`) or a timestamp with an offset
    (`2024-03-09T22:30:00.000-05:00`). A bare date is already a civil date and is kept
    as-is; a timestamp is moved into the reference timezone first.

    # Returns
    * `Option<NaiveDate>` - `None` when the string matches neither form
"#]
pub fn parse_notion_date(raw: &str, tz: Tz) -> Option<NaiveDate> {
    let raw: &str = raw.trim();

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }

    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| civil_date_of(dt.with_timezone(&Utc), tz))
}

#[doc = "Whole civil days from `from` to `to` (negative when `to` is earlier)"]
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days()
}

#[doc = r#"
    X-axis labels for a window of `num_days` days starting at `today`.

    Label 0 is `Today M/D`, label 1 is `Tomorrow M/D`, the rest are the abbreviated
    weekday followed by `M/D`. Dates are produced by stepping the calendar one day at a
    time, so month and year rollover come out right.
"#]
pub fn make_day_labels(today: NaiveDate, num_days: usize) -> Vec<String> {
    today
        .iter_days()
        .take(num_days)
        .enumerate()
        .map(|(idx, date)| {
            let month_day: String = format!("{}/{}", date.month(), date.day());
            match idx {
                0 => format!("Today {}", month_day),
                1 => format!("Tomorrow {}", month_day),
                _ => format!("{} {}", date.format("%a"), month_day),
            }
        })
        .collect()
}
