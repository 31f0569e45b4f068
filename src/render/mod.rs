// src/render/mod.rs
//! HTML fragments for each section.
//!
//! Every string that comes from a CSV file goes through [`escape`]; the
//! fragments are pasted verbatim into the page.

pub mod icons;

use crate::sections::{AgendaEvent, Section, SocialPost, TeamMember, Theme};

/// Where team photos are served from, relative to the page.
pub const PHOTO_DIR: &str = "images/equipe/";

/// Escape text for HTML element content and quoted attribute values.
pub fn escape(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Only `http(s)://`, root-relative and plain relative links are emitted.
fn safe_href(url: &str) -> Option<String> {
    let lower = url.trim().to_ascii_lowercase();
    let has_scheme = lower
        .split_once(':')
        .map(|(scheme, _)| !scheme.contains('/'))
        .unwrap_or(false);
    if !has_scheme || lower.starts_with("http://") || lower.starts_with("https://") {
        Some(escape(url.trim()))
    } else {
        None
    }
}

/// Placeholder shown when a section has no data.
pub fn empty_state(section: Section) -> String {
    let (message, noun) = match section {
        Section::Agenda => ("Aucun événement prévu pour le moment.", "des événements"),
        Section::Equipe => ("Équipe en cours de constitution.", "des membres"),
        Section::Programme => ("Engagement en cours d'élaboration.", "des points"),
        Section::Social => ("Aucune publication pour le moment.", "des publications"),
    };
    format!(
        "<div class=\"loading\">\n    {}<br>\n    <small>Modifiez le fichier <code>{}</code> pour ajouter {}.</small>\n</div>\n",
        message,
        section.data_file(),
        noun
    )
}

pub fn agenda(events: &[AgendaEvent]) -> String {
    let mut out = String::new();
    for e in events {
        let day = e.day.map(|d| d.to_string()).unwrap_or_else(|| "?".into());
        let month = e.month.unwrap_or("?");
        let kind = e
            .kind
            .as_deref()
            .map(|k| {
                let k = escape(k);
                format!("\n        <span class=\"agenda-type {}\">{}</span>", k, k)
            })
            .unwrap_or_default();

        out.push_str(&format!(
            r#"<article class="agenda-card fade-in">
    <div class="agenda-date">
        <div class="agenda-day">{day}</div>
        <div class="agenda-month">{month}</div>
    </div>
    <div class="agenda-content">
        <div class="agenda-time">🕐 {time}</div>
        <h3 class="agenda-title">{title}</h3>
        <div class="agenda-location">📍 {location}</div>
        <p class="agenda-description">{description}</p>{kind}
    </div>
</article>
"#,
            day = day,
            month = month,
            time = escape(&e.time),
            title = escape(&e.title),
            location = escape(&e.location),
            description = escape(&e.description),
            kind = kind,
        ));
    }
    out
}

pub fn team(members: &[TeamMember]) -> String {
    let mut out = String::new();
    for m in members {
        let initials = escape(&m.initials);
        let portrait = match &m.photo {
            // the badge stays hidden until the image fails
            Some(photo) => format!(
                "<img src=\"{dir}{src}\" alt=\"{alt}\" class=\"equipe-photo\" onerror=\"this.hidden=true;this.nextElementSibling.hidden=false\">\n    <div class=\"equipe-photo-placeholder\" hidden>{initials}</div>",
                dir = PHOTO_DIR,
                src = escape(photo),
                alt = escape(&m.name),
                initials = initials,
            ),
            None => format!("<div class=\"equipe-photo-placeholder\">{}</div>", initials),
        };

        out.push_str(&format!(
            r#"<article class="equipe-card fade-in">
    {portrait}
    <div class="equipe-info">
        <h3 class="equipe-name">{name}</h3>
        <p class="equipe-role">{role}</p>
        <p class="equipe-description">{description}</p>
    </div>
</article>
"#,
            portrait = portrait,
            name = escape(&m.name),
            role = escape(&m.role),
            description = escape(&m.description),
        ));
    }
    out
}

pub fn program(themes: &[Theme]) -> String {
    let mut out = String::new();
    for (idx, theme) in themes.iter().enumerate() {
        let active = if idx == 0 { " active" } else { "" };
        let points: String = theme
            .points
            .iter()
            .map(|p| {
                format!(
                    "\n            <div class=\"engagement-point\"><span class=\"engagement-point-text\">{}</span></div>",
                    escape(p)
                )
            })
            .collect();

        out.push_str(&format!(
            r#"<div class="engagement-theme fade-in{active}">
    <div class="engagement-header" onclick="this.parentElement.classList.toggle('active')">
        <div class="engagement-icon">{icon}</div>
        <h3 class="engagement-theme-title">{name}</h3>
        <div class="engagement-toggle">▼</div>
    </div>
    <div class="engagement-content">
        <div class="engagement-points">{points}
        </div>
    </div>
</div>
"#,
            active = active,
            icon = escape(&theme.icon),
            name = escape(&theme.name),
            points = points,
        ));
    }
    out
}

pub fn social(posts: &[SocialPost]) -> String {
    let mut out = String::new();
    for p in posts {
        let network = escape(&p.network);

        let image = p
            .image
            .as_deref()
            .and_then(safe_href)
            .map(|src| {
                format!(
                    "\n    <img src=\"{}\" alt=\"Publication\" class=\"social-post-image\" onerror=\"this.style.display='none'\">",
                    src
                )
            })
            .unwrap_or_default();

        let link = p
            .url
            .as_deref()
            .and_then(safe_href)
            .map(|href| {
                format!(
                    "\n        <a href=\"{}\" target=\"_blank\" rel=\"noopener\" class=\"social-post-link\">Voir la publication {}</a>",
                    href,
                    icons::EXTERNAL_LINK
                )
            })
            .unwrap_or_default();

        let stats = p
            .stats
            .as_ref()
            .map(|s| {
                let mut items = String::new();
                for (glyph, value) in [("❤️", &s.likes), ("💬", &s.comments), ("🔄", &s.shares)] {
                    if let Some(v) = value {
                        items.push_str(&format!(
                            "\n        <div class=\"social-stat\">{} {}</div>",
                            glyph,
                            escape(v)
                        ));
                    }
                }
                format!("\n    <div class=\"social-post-stats\">{}\n    </div>", items)
            })
            .unwrap_or_default();

        out.push_str(&format!(
            r#"<article class="social-post fade-in" data-network="{network}">
    <div class="social-post-header">
        <div class="social-post-network-icon {network}">{icon}</div>
        <div class="social-post-author">
            <div class="social-post-author-name">{author}</div>
            <div class="social-post-date">{date}</div>
        </div>
    </div>{image}
    <div class="social-post-content">
        <p class="social-post-text">{text}</p>{link}
    </div>{stats}
</article>
"#,
            network = network,
            icon = icons::network(&p.network),
            author = escape(&p.author),
            date = p.display_date.as_deref().unwrap_or(""),
            image = image,
            text = escape(&p.text),
            link = link,
            stats = stats,
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::parse_table;
    use crate::sections::{
        agenda as agenda_section, program as program_section, social as social_section,
        team as team_section,
    };
    use chrono::NaiveDate;

    #[test]
    fn test_escape() {
        assert_eq!(
            escape(r#"<script>alert("x & y")</script>"#),
            "&lt;script&gt;alert(&quot;x &amp; y&quot;)&lt;/script&gt;"
        );
        assert_eq!(escape("l'école"), "l&#39;école");
    }

    #[test]
    fn test_safe_href() {
        assert_eq!(
            safe_href("https://example.org/a?b=1&c=2").as_deref(),
            Some("https://example.org/a?b=1&amp;c=2")
        );
        assert_eq!(safe_href("images/social/1.jpg").as_deref(), Some("images/social/1.jpg"));
        assert_eq!(safe_href("javascript:alert(1)"), None);
        assert_eq!(safe_href("JavaScript:alert(1)"), None);
    }

    #[test]
    fn test_empty_state_names_the_file() {
        let html = empty_state(Section::Social);
        assert!(html.contains("Aucune publication pour le moment."));
        assert!(html.contains("<code>data/social.csv</code>"));
    }

    #[test]
    fn test_agenda_card_escapes_text() {
        let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let table = parse_table("date,titre,type\n2024-03-08,<b>Meeting</b>,meeting\n");
        let html = agenda(&agenda_section::transform(&table, today));
        assert!(html.contains("<div class=\"agenda-day\">8</div>"));
        assert!(html.contains("<div class=\"agenda-month\">mars</div>"));
        assert!(html.contains("&lt;b&gt;Meeting&lt;/b&gt;"));
        assert!(html.contains("<span class=\"agenda-type meeting\">meeting</span>"));
    }

    #[test]
    fn test_team_photo_and_badge() {
        let table = parse_table("nom,photo\nZoé Martin,zoe.jpg\nAlain Bernard,\n");
        let html = team(&team_section::transform(&table));
        assert!(html.contains("src=\"images/equipe/zoe.jpg\""));
        assert!(html.contains("<div class=\"equipe-photo-placeholder\" hidden>ZM</div>"));
        assert!(html.contains("<div class=\"equipe-photo-placeholder\">AB</div>"));
    }

    #[test]
    fn test_first_theme_is_expanded() {
        let table = parse_table("theme,point\nA,a1\nB,b1\n");
        let html = program(&program_section::transform(&table));
        assert_eq!(html.matches("engagement-theme fade-in active").count(), 1);
        let a = html.find(">A</h3>").unwrap();
        let b = html.find(">B</h3>").unwrap();
        assert!(a < b);
    }

    #[test]
    fn test_social_post_optional_parts() {
        let table = parse_table(
            "date,reseau,texte,url,likes\n2024-06-01,YouTube,Vidéo,javascript:void(0),5\n2024-05-01,Bluesky,Post,,\n",
        );
        let posts = social_section::transform(&table, "David Cohen").unwrap();
        let html = social(&posts);

        assert!(html.contains("data-network=\"youtube\""));
        assert!(html.contains(icons::YOUTUBE));
        assert!(html.contains(icons::GENERIC));
        assert!(html.contains("1 juin 2024"));
        assert!(html.contains("❤️ 5"));
        assert!(!html.contains("social-post-link"));
        assert_eq!(html.matches("social-post-stats").count(), 1);
    }

    #[test]
    fn test_shares_only_post_has_no_stats_block() {
        let table = parse_table("date,reseau,texte,partages\n2024-06-01,facebook,Merci,7\n");
        let posts = social_section::transform(&table, "David Cohen").unwrap();
        let html = social(&posts);
        assert!(!html.contains("social-post-stats"));
        assert!(!html.contains("🔄"));
    }
}
