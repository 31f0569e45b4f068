// src/site.rs
use anyhow::{Context, Result};
use chrono::NaiveDate;
use futures::future::join_all;
use serde::Serialize;
use tracing::{info, instrument};

use crate::{
    fetch::{load_table, Source},
    process::Table,
    render,
    sections::{self, AgendaEvent, Section, SocialPost, TeamMember, Theme},
};

/// Inputs every section build shares.
#[derive(Debug, Clone)]
pub struct BuildContext {
    /// Calendar day the agenda treats as "today".
    pub today: NaiveDate,
    /// Author for posts without `auteur`.
    pub default_author: String,
}

/// Derived display data of one section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SectionData {
    Agenda(Vec<AgendaEvent>),
    Equipe(Vec<TeamMember>),
    Programme(Vec<Theme>),
    Social(Vec<SocialPost>),
}

/// One rendered section.
#[derive(Debug, Clone, Serialize)]
pub struct Fragment {
    pub section: Section,
    /// Well-formed rows read from the data file.
    pub rows: usize,
    pub data: SectionData,
    pub html: String,
}

/// Transform and render an already loaded table.
///
/// An empty table renders the section's placeholder. Fails only when the
/// transformer rejects the table.
pub fn render_table(section: Section, table: &Table, ctx: &BuildContext) -> Result<Fragment> {
    let data = match section {
        Section::Agenda => SectionData::Agenda(sections::agenda::transform(table, ctx.today)),
        Section::Equipe => SectionData::Equipe(sections::team::transform(table)),
        Section::Programme => SectionData::Programme(sections::program::transform(table)),
        Section::Social => SectionData::Social(
            sections::social::transform(table, &ctx.default_author)
                .with_context(|| format!("building {}", section.slug()))?,
        ),
    };

    let html = if table.is_empty() {
        render::empty_state(section)
    } else {
        match &data {
            SectionData::Agenda(events) => render::agenda(events),
            SectionData::Equipe(members) => render::team(members),
            SectionData::Programme(themes) => render::program(themes),
            SectionData::Social(posts) => render::social(posts),
        }
    };

    Ok(Fragment {
        section,
        rows: table.len(),
        data,
        html,
    })
}

/// Load, transform and render one section.
#[instrument(level = "info", skip_all, fields(section = section.slug()))]
pub async fn build_section(source: &Source, section: Section, ctx: &BuildContext) -> Result<Fragment> {
    let table = load_table(source, section.data_file()).await;
    let fragment = render_table(section, &table, ctx)?;
    info!(rows = fragment.rows, "section built");
    Ok(fragment)
}

/// Build every section concurrently; one failing section leaves the others intact.
pub async fn build_all(source: &Source, ctx: &BuildContext) -> Vec<(Section, Result<Fragment>)> {
    join_all(
        Section::ALL
            .into_iter()
            .map(|section| async move { (section, build_section(source, section, ctx).await) }),
    )
    .await
}
