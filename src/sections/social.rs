// src/sections/social.rs
use anyhow::{bail, Result};
use chrono::NaiveDate;
use serde::Serialize;

use super::cmp_date_desc;
use crate::process::{format_long_fr, parse_date, Record, Table};

/// Engagement counters, each shown only when present in the file.
/// Shares alone do not make a stats block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PostStats {
    pub likes: Option<String>,
    pub comments: Option<String>,
    pub shares: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SocialPost {
    pub date: Option<NaiveDate>,
    /// `1 juin 2024`; `None` when the date did not parse.
    pub display_date: Option<String>,
    /// Lower-cased `reseau`, also the filter key.
    pub network: String,
    pub author: String,
    pub image: Option<String>,
    pub text: String,
    pub url: Option<String>,
    pub stats: Option<PostStats>,
}

/// Posts, most recent first.
///
/// `reseau` is required: a feed without that column fails as a whole and the
/// caller drops the section. `auteur` falls back to `default_author`.
pub fn transform(table: &Table, default_author: &str) -> Result<Vec<SocialPost>> {
    if !table.is_empty() && !table.has_column("reseau") {
        bail!("social feed has no `reseau` column");
    }

    let mut dated: Vec<(Option<NaiveDate>, Record<'_>)> = table
        .records()
        .map(|r| (r.get("date").and_then(parse_date), r))
        .collect();
    dated.sort_by(|a, b| cmp_date_desc(a.0, b.0));

    dated
        .into_iter()
        .map(|(date, r)| to_post(date, &r, default_author))
        .collect()
}

fn to_post(date: Option<NaiveDate>, r: &Record<'_>, default_author: &str) -> Result<SocialPost> {
    let Some(network) = r.get("reseau") else {
        bail!("social post has no `reseau` value");
    };

    Ok(SocialPost {
        date,
        display_date: date.map(format_long_fr),
        network: network.to_lowercase(),
        author: r.field_or("auteur", default_author).to_string(),
        image: r.field("image").map(str::to_string),
        text: r.field_or("texte", "").to_string(),
        url: r.field("url").map(str::to_string),
        stats: stats(r),
    })
}

fn stats(r: &Record<'_>) -> Option<PostStats> {
    let stats = PostStats {
        likes: r.field("likes").map(str::to_string),
        comments: r.field("commentaires").map(str::to_string),
        shares: r.field("partages").map(str::to_string),
    };
    if stats.likes.is_none() && stats.comments.is_none() {
        None
    } else {
        Some(stats)
    }
}

/// Posts matching a network filter button; `all` keeps everything.
pub fn filter_network<'a>(posts: &'a [SocialPost], filter: &str) -> Vec<&'a SocialPost> {
    posts
        .iter()
        .filter(|p| filter == "all" || p.network == filter)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::parse_table;

    const FEED: &str = "date,reseau,auteur,image,texte,url,likes,commentaires,partages\n\
        2024-01-01,Facebook,,,Bonne année !,,12,,\n\
        2024-06-01,Instagram,Équipe,marche.jpg,Au marché,https://example.org/p/1,40,3,2\n\
        2024-03-10,Mastodon,,,Sans stats,,,,\n";

    #[test]
    fn test_sorted_most_recent_first() {
        let posts = transform(&parse_table(FEED), "David Cohen").unwrap();
        let dates: Vec<String> = posts.iter().map(|p| p.date.unwrap().to_string()).collect();
        assert_eq!(dates, vec!["2024-06-01", "2024-03-10", "2024-01-01"]);
    }

    #[test]
    fn test_network_is_lowercased() {
        let posts = transform(&parse_table(FEED), "David Cohen").unwrap();
        assert_eq!(posts[0].network, "instagram");
        assert_eq!(posts[1].network, "mastodon");
    }

    #[test]
    fn test_optional_fields_suppressed_not_zeroed() {
        let posts = transform(&parse_table(FEED), "David Cohen").unwrap();

        let insta = &posts[0];
        assert_eq!(insta.author, "Équipe");
        assert_eq!(insta.image.as_deref(), Some("marche.jpg"));
        assert_eq!(insta.display_date.as_deref(), Some("1 juin 2024"));
        let s = insta.stats.as_ref().unwrap();
        assert_eq!(s.likes.as_deref(), Some("40"));
        assert_eq!(s.shares.as_deref(), Some("2"));

        let mastodon = &posts[1];
        assert_eq!(mastodon.stats, None);
        assert_eq!(mastodon.url, None);
        assert_eq!(mastodon.author, "David Cohen");

        let fb = &posts[2];
        let s = fb.stats.as_ref().unwrap();
        assert_eq!(s.likes.as_deref(), Some("12"));
        assert_eq!(s.comments, None);
    }

    #[test]
    fn test_shares_alone_give_no_stats() {
        let csv = "date,reseau,likes,commentaires,partages\n\
            2024-01-01,facebook,,,7\n\
            2024-01-02,facebook,,1,7\n";
        let posts = transform(&parse_table(csv), "David Cohen").unwrap();

        let with_comment = posts[0].stats.as_ref().unwrap();
        assert_eq!(with_comment.comments.as_deref(), Some("1"));
        assert_eq!(with_comment.shares.as_deref(), Some("7"));

        assert_eq!(posts[1].stats, None);
    }

    #[test]
    fn test_missing_reseau_column_is_an_error() {
        let table = parse_table("date,texte\n2024-01-01,Bonjour\n");
        assert!(transform(&table, "David Cohen").is_err());
    }

    #[test]
    fn test_missing_reseau_on_empty_feed_is_fine() {
        let table = parse_table("date,texte\n");
        assert!(transform(&table, "David Cohen").unwrap().is_empty());
    }

    #[test]
    fn test_filter_network() {
        let posts = transform(&parse_table(FEED), "David Cohen").unwrap();
        assert_eq!(filter_network(&posts, "all").len(), 3);
        let fb = filter_network(&posts, "facebook");
        assert_eq!(fb.len(), 1);
        assert_eq!(fb[0].text, "Bonne année !");
        assert!(filter_network(&posts, "youtube").is_empty());
    }
}
