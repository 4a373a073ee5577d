use pantryplan_shared::mealplan::{DAYS_PER_WEEK, Day};
use time::{Date, Duration, OffsetDateTime, Weekday};

pub fn today() -> Date {
    OffsetDateTime::now_utc().date()
}

pub fn day_of(date: Date) -> Day {
    match date.weekday() {
        Weekday::Monday => Day::Monday,
        Weekday::Tuesday => Day::Tuesday,
        Weekday::Wednesday => Day::Wednesday,
        Weekday::Thursday => Day::Thursday,
        Weekday::Friday => Day::Friday,
        Weekday::Saturday => Day::Saturday,
        Weekday::Sunday => Day::Sunday,
    }
}

/// Monday of the week containing `date`.
pub fn monday_of(date: Date) -> Date {
    date - Duration::days(day_of(date).index() as i64)
}

/// Calendar dates of the plan slots for the week containing `date`.
pub fn week_dates(date: Date) -> [Date; DAYS_PER_WEEK] {
    let monday = monday_of(date);
    let mut dates = [monday; DAYS_PER_WEEK];

    for (offset, day) in dates.iter_mut().enumerate() {
        *day = monday + Duration::days(offset as i64);
    }

    dates
}
