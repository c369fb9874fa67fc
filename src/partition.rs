use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use indexmap::IndexMap;
use log::info;
use serde_json::Value;

use crate::config::SplitConfig;
use crate::error::SplitError;

// The record field that decides which file an ad lands in.
pub const AREA_FIELD: &str = "area_v2";
// Key assigned to ads that carry no area field at all.
pub const UNKNOWN_AREA: &str = "unknown";

pub type AreaGroups = IndexMap<String, Vec<Value>>;

// What one invocation did, for the completion report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitSummary {
    pub total_ads: usize,
    pub area_count: usize,
    pub files_written: usize,
}

/// Read the whole ads file and parse it as a top-level JSON array.
/// The existence check runs before any open attempt.
pub fn load_ads(path: &Path) -> Result<Vec<Value>, SplitError> {
    if !path.exists() {
        return Err(SplitError::NotFound(path.to_path_buf()));
    }

    let raw = fs::read_to_string(path).map_err(|e| SplitError::io(path, e))?;
    let json: Value =
        serde_json::from_str(&raw).map_err(|e| SplitError::format(path, e))?;

    match json {
        Value::Array(ads) => Ok(ads),
        other => Err(SplitError::format(
            path,
            format!("top-level value is {}", type_name(&other)),
        )),
    }
}

/// Partition ads by their area key, preserving input order inside each
/// group. Every ad lands in exactly one group; groups appear in
/// first-seen order.
pub fn group_by_area(ads: Vec<Value>) -> AreaGroups {
    let mut groups = AreaGroups::new();
    for ad in ads {
        let key = area_key(&ad);
        groups.entry(key).or_insert_with(Vec::new).push(ad);
    }
    groups
}

// Missing field -> sentinel; string values used verbatim; anything else
// rendered as its compact JSON text so equal inputs always map to the
// same key.
fn area_key(ad: &Value) -> String {
    match ad.get(AREA_FIELD) {
        None => UNKNOWN_AREA.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

pub fn output_file_name(area_key: &str) -> String {
    format!("ads-{area_key}.json")
}

/// Write one `ads-<area_key>.json` per group into `output_dir`,
/// creating the directory if needed and overwriting existing files.
/// Returns the number of files written. A failed write aborts the rest
/// of the loop; files already written stay in place.
pub fn export_groups(groups: &AreaGroups, output_dir: &Path) -> Result<usize, SplitError> {
    fs::create_dir_all(output_dir).map_err(|e| SplitError::io(output_dir, e))?;

    let mut written = 0;
    for (area, ads) in groups {
        let path = output_dir.join(output_file_name(area));
        write_group(&path, ads)?;
        written += 1;

        println!("Area {}: {} ads -> {}", area, ads.len(), path.display());
        info!("area {}: {} ads -> {}", area, ads.len(), path.display());
    }
    Ok(written)
}

fn write_group(path: &Path, ads: &[Value]) -> Result<(), SplitError> {
    let file = File::create(path).map_err(|e| SplitError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    // Pretty-printed, non-ASCII left literal. to_writer_pretty cannot
    // fail on Value input except through the underlying writer.
    serde_json::to_writer_pretty(&mut writer, ads)
        .map_err(|e| SplitError::io(path, e.into()))?;
    writer.flush().map_err(|e| SplitError::io(path, e))
}

/// Full pipeline: load, group, export, report.
pub fn run(config: &SplitConfig) -> Result<SplitSummary, SplitError> {
    println!("Reading file: {}", config.input_file.display());
    info!("reading {}", config.input_file.display());

    let ads = load_ads(&config.input_file)?;
    println!("Total ads: {}", ads.len());
    info!("loaded {} ads", ads.len());

    let total_ads = ads.len();
    let groups = group_by_area(ads);
    println!("Found {} distinct areas", groups.len());
    info!("{} distinct areas", groups.len());

    let files_written = export_groups(&groups, &config.output_dir)?;

    Ok(SplitSummary {
        total_ads,
        area_count: groups.len(),
        files_written,
    })
}

fn type_name(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Vec<Value> {
        vec![
            json!({"area_v2": "hcm", "id": 1}),
            json!({"area_v2": "hn", "id": 2}),
            json!({"id": 3}),
            json!({"area_v2": "hcm", "id": 4}),
        ]
    }

    #[test]
    fn group_sizes_sum_to_input_len() {
        let ads = sample();
        let n = ads.len();
        let groups = group_by_area(ads);
        assert_eq!(groups.values().map(Vec::len).sum::<usize>(), n);
    }

    #[test]
    fn missing_field_goes_to_sentinel() {
        let groups = group_by_area(sample());
        let unknown = &groups[UNKNOWN_AREA];
        assert_eq!(unknown.len(), 1);
        assert_eq!(unknown[0]["id"], 3);
    }

    #[test]
    fn groups_keep_input_order() {
        let groups = group_by_area(sample());
        let hcm = &groups["hcm"];
        assert_eq!(hcm[0]["id"], 1);
        assert_eq!(hcm[1]["id"], 4);
    }

    #[test]
    fn groups_appear_in_first_seen_order() {
        let groups = group_by_area(sample());
        let keys: Vec<&str> = groups.keys().map(String::as_str).collect();
        assert_eq!(keys, ["hcm", "hn", UNKNOWN_AREA]);
    }

    #[test]
    fn non_string_keys_are_rendered_deterministically() {
        let ads = vec![
            json!({"area_v2": 42}),
            json!({"area_v2": true}),
            json!({"area_v2": null}),
            json!({"area_v2": 42}),
        ];
        let groups = group_by_area(ads);
        assert_eq!(groups["42"].len(), 2);
        assert_eq!(groups["true"].len(), 1);
        assert_eq!(groups["null"].len(), 1);
    }

    #[test]
    fn empty_input_yields_no_groups() {
        assert!(group_by_area(Vec::new()).is_empty());
    }

    #[test]
    fn file_names_follow_area_key() {
        assert_eq!(output_file_name("hcm"), "ads-hcm.json");
        assert_eq!(output_file_name(UNKNOWN_AREA), "ads-unknown.json");
    }
}
