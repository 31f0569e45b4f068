// src/sections/mod.rs
use chrono::NaiveDate;
use serde::Serialize;
use std::cmp::Ordering;

pub mod agenda;
pub mod program;
pub mod social;
pub mod team;

pub use agenda::AgendaEvent;
pub use program::Theme;
pub use social::{PostStats, SocialPost};
pub use team::TeamMember;

/// The data-driven sections of the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Agenda,
    Equipe,
    Programme,
    Social,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Agenda,
        Section::Equipe,
        Section::Programme,
        Section::Social,
    ];

    /// CSV file backing the section, relative to the data location.
    pub fn data_file(&self) -> &'static str {
        match self {
            Section::Agenda => "data/agenda.csv",
            Section::Equipe => "data/equipe.csv",
            Section::Programme => "data/programme.csv",
            Section::Social => "data/social.csv",
        }
    }

    /// Name of the rendered fragment, without extension.
    pub fn slug(&self) -> &'static str {
        match self {
            Section::Agenda => "agenda",
            Section::Equipe => "equipe",
            Section::Programme => "engagement",
            Section::Social => "social",
        }
    }
}

/// Earliest first; undated records go last.
pub(crate) fn cmp_date_asc(a: Option<NaiveDate>, b: Option<NaiveDate>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Latest first; undated records go last.
pub(crate) fn cmp_date_desc(a: Option<NaiveDate>, b: Option<NaiveDate>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.cmp(&a),
        _ => cmp_date_asc(a, b),
    }
}
