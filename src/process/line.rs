// src/process/line.rs
use std::mem::take;

/// Split one CSV line into raw fields.
///
/// A `"` toggles quoting and is dropped; a comma inside quotes is kept.
/// Doubled quotes are not unescaped. Fields are returned untrimmed and the
/// last field is always pushed, so an empty line yields `[""]`.
pub fn split_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(take(&mut field)),
            _ => field.push(ch),
        }
    }
    // unterminated quotes just run to end of line
    fields.push(field);

    fields
}
