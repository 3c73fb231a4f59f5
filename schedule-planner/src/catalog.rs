use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use serde::Deserialize;

use crate::error::Result;
use crate::schedule::Activity;

/// One row of a catalog CSV
#[derive(Debug, Deserialize)]
struct CatalogRecord {
    #[serde(default)]
    id: String,
    #[serde(default, alias = "title")]
    name: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    color: Option<String>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    duration: Option<u32>,
    #[serde(default)]
    category: Option<String>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Loads catalog entries from a CSV file with an `id,name,description,color,duration,category` header
pub fn load_catalog_csv<P: AsRef<Path>>(path: P) -> Result<Vec<Activity>> {
    let file = std::fs::File::open(path)?;
    read_catalog_csv(file)
}

/// Reads catalog CSV from any reader
/// A duration that is not a number is dropped.
pub fn read_catalog_csv<R: Read>(source: R) -> Result<Vec<Activity>> {
    let mut reader = ReaderBuilder::new().trim(csv::Trim::All).from_reader(source);
    let mut records = Vec::new();

    for result in reader.deserialize::<CatalogRecord>() {
        let record = result?;
        records.push(Activity {
            id: record.id,
            name: record.name,
            description: record.description,
            color: record.color.unwrap_or_default(),
            duration: record.duration,
            category: record.category,
        });
    }

    Ok(clean_entries(records))
}

/// Loads catalog entries from a JSON array of activities
pub fn load_catalog_json<P: AsRef<Path>>(path: P) -> Result<Vec<Activity>> {
    let file = std::fs::File::open(path)?;
    read_catalog_json(file)
}

pub fn read_catalog_json<R: Read>(source: R) -> Result<Vec<Activity>> {
    let records: Vec<Activity> = serde_json::from_reader(source)?;
    Ok(clean_entries(records))
}

/// Filter shared by every loader
///
/// Trims text fields, turns blank optional fields into `None`, skips entries
/// without an id or a name, and keeps only the first entry for each id.
fn clean_entries(records: Vec<Activity>) -> Vec<Activity> {
    let mut seen = HashSet::new();
    let mut entries = Vec::new();

    for record in records {
        let id = record.id.trim().to_string();
        let name = record.name.trim().to_string();
        if id.is_empty() || name.is_empty() {
            continue;
        }
        if !seen.insert(id.clone()) {
            tracing::warn!(id = %id, "duplicate catalog id skipped");
            continue;
        }

        entries.push(Activity {
            id,
            name,
            description: non_blank(record.description),
            color: non_blank(Some(record.color)).unwrap_or_default(),
            duration: record.duration,
            category: non_blank(record.category),
        });
    }

    tracing::info!(count = entries.len(), "catalog loaded");
    entries
}

/// Picks the loader from the file extension, CSV unless it ends in `.json`
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Vec<Activity>> {
    let path = path.as_ref();
    let is_json = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false);
    if is_json {
        load_catalog_json(path)
    } else {
        load_catalog_csv(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_rows_and_blank_cells() {
        let csv = "\
id,name,description,color,duration,category
lib-1,Yoga,Morning stretch,schedule-item-1,45,wellness
lib-2,Lunch,,schedule-item-2,,
";
        let entries = read_catalog_csv(csv.as_bytes()).unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].description.as_deref(), Some("Morning stretch"));
        assert_eq!(entries[0].duration, Some(45));
        assert_eq!(entries[0].category.as_deref(), Some("wellness"));
        assert_eq!(entries[1].description, None);
        assert_eq!(entries[1].duration, None);
        assert_eq!(entries[1].color, "schedule-item-2");
    }

    #[test]
    fn title_header_and_missing_columns() {
        let csv = "id,title\nlib-1,Standup\n";
        let entries = read_catalog_csv(csv.as_bytes()).unwrap();

        assert_eq!(entries[0].name, "Standup");
        assert_eq!(entries[0].color, "");
    }

    #[test]
    fn skips_incomplete_and_duplicate_rows() {
        let csv = "\
id,name,duration
,Nameless id,10
lib-1,,10
lib-2,Walk,soon
lib-2,Walk again,5
";
        let entries = read_catalog_csv(csv.as_bytes()).unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "Walk");
        assert_eq!(entries[0].duration, None);
    }

    #[test]
    fn json_entries_go_through_the_same_filter() {
        let json = r#"[
            {"id": "lib-1", "name": "Yoga", "description": "  ", "color": "schedule-item-1"},
            {"id": "", "name": "No id"},
            {"id": "lib-2", "title": " "},
            {"id": "lib-1", "name": "Yoga copy"},
            {"id": " lib-3 ", "title": "Walk", "category": "outdoor"}
        ]"#;
        let entries = read_catalog_json(json.as_bytes()).unwrap();

        let ids: Vec<&str> = entries.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["lib-1", "lib-3"]);
        assert_eq!(entries[0].name, "Yoga");
        assert_eq!(entries[0].description, None);
        assert_eq!(entries[1].category.as_deref(), Some("outdoor"));
    }
}
