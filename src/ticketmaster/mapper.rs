use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};

use crate::models::Event;

use super::client::PROVIDER_NAME;
use super::payload::{ProviderEvent, StartDate};

const UNKNOWN: &str = "Unknown";

/// Maps one provider event onto a new internal event. Never fails: fields
/// the provider leaves out get placeholders, and the date falls back to
/// the current time.
pub fn map_event(source: &ProviderEvent) -> Event {
    map_event_at(source, Utc::now())
}

fn map_event_at(source: &ProviderEvent, now: DateTime<Utc>) -> Event {
    let event_date = resolve_event_date(&source.dates.start).unwrap_or(now);

    let mut event = Event::external(source.id.clone(), event_date);
    event.title = source.name.clone();
    event.description = describe(source);
    event.event_type = source.kind.clone();
    event.external_url = source.url.clone();

    if let Some(venue) = source.primary_venue() {
        event.location = format!("{}, {}, {}", venue.name, venue.city.name, venue.country.name);
        if let Ok(lat) = venue.location.latitude.trim().parse::<f64>() {
            event.latitude = lat;
        }
        if let Ok(lng) = venue.location.longitude.trim().parse::<f64>() {
            event.longitude = lng;
        }
        event.organizer = venue.name.clone();
    }

    if event.organizer.is_empty() {
        event.organizer = PROVIDER_NAME.to_string();
    }

    event
}

/// RFC 3339 `dateTime` first, then `localDate` (+ `localTime`) in the
/// process time zone.
pub fn resolve_event_date(start: &StartDate) -> Option<DateTime<Utc>> {
    if !start.date_time.is_empty() {
        if let Ok(parsed) = DateTime::parse_from_rfc3339(start.date_time.trim()) {
            return Some(parsed.with_timezone(&Utc));
        }
    }

    if start.local_date.is_empty() {
        return None;
    }

    let date = NaiveDate::parse_from_str(start.local_date.trim(), "%Y-%m-%d").ok()?;
    let naive = if start.local_time.is_empty() {
        date.and_time(NaiveTime::MIN)
    } else {
        let time = parse_local_time(start.local_time.trim())?;
        NaiveDateTime::new(date, time)
    };

    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|local| local.with_timezone(&Utc))
}

fn parse_local_time(raw: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(raw, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M"))
        .ok()
}

fn or_unknown<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.is_empty() {
        placeholder
    } else {
        value
    }
}

/// Builds the markdown-ish summary shown on the event page.
pub fn describe(source: &ProviderEvent) -> String {
    let event_type = match source.classifications.first() {
        Some(class) => format!(
            "{} - {} ({})",
            or_unknown(&class.segment.name, UNKNOWN),
            or_unknown(&class.genre.name, UNKNOWN),
            or_unknown(&class.sub_genre.name, UNKNOWN),
        ),
        None => UNKNOWN.to_string(),
    };

    let start = &source.dates.start;
    let local_date = or_unknown(&start.local_date, "Unknown Date");
    let local_time = or_unknown(&start.local_time, "Unknown Time");
    let status = or_unknown(&source.dates.status.code, UNKNOWN);

    let mut description = format!(
        "**Event Type:** {}<br />**Date and Time:** {} at {}<br />**Event Status:** {}<br />",
        event_type, local_date, local_time, status
    );

    if let Some(venue) = source.primary_venue().filter(|v| !v.name.is_empty()) {
        description.push_str(&format!(
            "**Venue:** {}, {}, {}",
            venue.name, venue.city.name, venue.country.name
        ));
    }

    description
}
