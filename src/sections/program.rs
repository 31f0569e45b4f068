// src/sections/program.rs
use serde::Serialize;
use std::collections::HashMap;

use crate::process::Table;

/// One theme of the program with its points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Theme {
    pub name: String,
    pub icon: String,
    pub points: Vec<String>,
}

/// Group points by theme, themes in order of first appearance.
///
/// The icon comes from the first row of each theme; later rows cannot change it.
pub fn transform(table: &Table) -> Vec<Theme> {
    let mut themes: Vec<Theme> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for r in table.records() {
        let name = r.field_or("theme", "Divers");
        let idx = *index.entry(name).or_insert_with(|| {
            themes.push(Theme {
                name: name.to_string(),
                icon: r.field_or("icone", "📌").to_string(),
                points: Vec::new(),
            });
            themes.len() - 1
        });
        let point = r.field("point").or_else(|| r.field("description")).unwrap_or("");
        themes[idx].points.push(point.to_string());
    }

    themes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::parse_table;

    #[test]
    fn test_groups_in_first_seen_order() {
        let csv = "theme,icone,point\nA,🌱,a1\nB,🏫,b1\nA,🚲,a2\n";
        let themes = transform(&parse_table(csv));

        let names: Vec<&str> = themes.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B"]);
        assert_eq!(themes[0].points, vec!["a1", "a2"]);
        assert_eq!(themes[0].icon, "🌱");
        assert_eq!(themes[1].points, vec!["b1"]);
    }

    #[test]
    fn test_point_falls_back_to_description() {
        let csv = "theme,point,description\nSanté,,Un centre de santé par quartier\nSanté,,\n";
        let themes = transform(&parse_table(csv));
        assert_eq!(themes.len(), 1);
        assert_eq!(
            themes[0].points,
            vec!["Un centre de santé par quartier".to_string(), String::new()]
        );
    }

    #[test]
    fn test_default_theme_and_icon() {
        let themes = transform(&parse_table("point\nRénover les écoles\n"));
        assert_eq!(themes[0].name, "Divers");
        assert_eq!(themes[0].icon, "📌");
    }
}
