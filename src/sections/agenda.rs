// src/sections/agenda.rs
use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use super::cmp_date_asc;
use crate::process::{month_short_fr, parse_date, Record, Table};

/// How many events the agenda shows at most.
pub const MAX_EVENTS: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AgendaEvent {
    pub date: Option<NaiveDate>,
    /// Day of month; `None` when the date did not parse.
    pub day: Option<u32>,
    /// Abbreviated French month; `None` when the date did not parse.
    pub month: Option<&'static str>,
    pub time: String,
    pub title: String,
    pub location: String,
    pub description: String,
    /// The `type` column, used as a styling tag.
    pub kind: Option<String>,
}

/// Select and shape the events to display.
///
/// Upcoming events (`date >= today`) win: the first [`MAX_EVENTS`] of them in
/// date order. When nothing is upcoming, the last [`MAX_EVENTS`] of the whole
/// sorted agenda are shown instead, so the section never goes blank while
/// there is any data.
pub fn transform(table: &Table, today: NaiveDate) -> Vec<AgendaEvent> {
    let mut dated: Vec<(Option<NaiveDate>, Record<'_>)> = table
        .records()
        .map(|r| (r.get("date").and_then(parse_date), r))
        .collect();
    dated.sort_by(|a, b| cmp_date_asc(a.0, b.0));

    let upcoming: Vec<&(Option<NaiveDate>, Record<'_>)> = dated
        .iter()
        .filter(|(date, _)| date.is_some_and(|d| d >= today))
        .take(MAX_EVENTS)
        .collect();

    let selected = if upcoming.is_empty() {
        dated
            .iter()
            .skip(dated.len().saturating_sub(MAX_EVENTS))
            .collect()
    } else {
        upcoming
    };

    selected
        .into_iter()
        .map(|(date, record)| to_event(*date, record))
        .collect()
}

fn to_event(date: Option<NaiveDate>, r: &Record<'_>) -> AgendaEvent {
    AgendaEvent {
        date,
        day: date.map(|d| d.day()),
        month: date.map(month_short_fr),
        time: r.field_or("heure", "00:00").to_string(),
        title: r.field_or("titre", "Événement").to_string(),
        location: r.field_or("lieu", "Lieu à confirmer").to_string(),
        description: r.field_or("description", "").to_string(),
        kind: r.field("type").map(str::to_string),
    }
}
