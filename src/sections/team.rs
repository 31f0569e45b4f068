// src/sections/team.rs
use serde::Serialize;

use crate::process::{Record, Table};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamMember {
    pub name: String,
    pub role: String,
    pub description: String,
    /// Up to two letters, shown when there is no photo or it fails to load.
    pub initials: String,
    /// Photo file name; `None` renders the initials badge directly.
    pub photo: Option<String>,
}

/// Team members in file order.
pub fn transform(table: &Table) -> Vec<TeamMember> {
    table.records().map(|r| to_member(&r)).collect()
}

fn to_member(r: &Record<'_>) -> TeamMember {
    TeamMember {
        name: r.field_or("nom", "Nom").to_string(),
        role: r.field_or("role", "Membre").to_string(),
        description: r.field_or("description", "").to_string(),
        initials: initials(r.field_or("nom", "NN")),
        photo: r.field("photo").map(str::to_string),
    }
}

/// First letter of each word, at most two.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .collect()
}
