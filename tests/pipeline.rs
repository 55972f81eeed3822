//! End-to-end pipeline tests: load → derive → group → render.

use std::path::PathBuf;

use vino_stats::data::derive::{GAMMA_FIELD, with_gamma};
use vino_stats::data::loader::load_file;
use vino_stats::report::html::render_page;
use vino_stats::stats::grouped::grouped_stats;

/// Write `contents` to a unique temp file and return its path.
fn temp_dataset(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("vino-stats-{}-{name}", std::process::id()));
    std::fs::write(&path, contents).expect("writing temp dataset");
    path
}

const SAMPLE_JSON: &str = r#"[
    {"Alcohol": 1, "Flavanoids": 1.0, "Ash": 2.0, "Hue": 1.0, "Magnesium": 4},
    {"Alcohol": 2, "Flavanoids": 2.0, "Ash": 2.0, "Hue": 1.5, "Magnesium": 100},
    {"Alcohol": 1, "Flavanoids": 3.0, "Ash": 2.0, "Hue": 1.0, "Magnesium": 4}
]"#;

#[test]
fn json_pipeline_produces_grouped_tables() {
    let path = temp_dataset("pipeline.json", SAMPLE_JSON);
    let dataset = load_file(&path).unwrap();
    std::fs::remove_file(&path).ok();

    let flavanoids = grouped_stats(&dataset, "Alcohol", "Flavanoids").unwrap();
    let keys: Vec<&str> = flavanoids.groups.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(keys, vec!["1", "2"]);
    assert_eq!(flavanoids.groups[0].1.mean, 2.0); // class 1: [1, 3]
    assert_eq!(flavanoids.groups[1].1.mean, 2.0); // class 2: [2]

    let augmented = with_gamma(&dataset);
    let gamma = grouped_stats(&augmented, "Alcohol", GAMMA_FIELD).unwrap();
    // class 1: Gamma = (2 * 1) / 4 = 0.5 twice; class 2: (2 * 1.5) / 100 = 0.03
    assert_eq!(gamma.groups[0].1.mean, 0.5);
    assert_eq!(gamma.groups[0].1.mode, Some(0.5));
    assert_eq!(gamma.groups[1].1.mean, 0.03);

    let page = render_page(&[flavanoids, gamma]);
    assert_eq!(page.matches("<table>").count(), 2);
    assert!(page.contains("<th>Class 1</th>"));
    assert!(page.contains("<td>0.500</td>"));
    assert!(page.contains("<td>0.030</td>"));
}

#[test]
fn csv_pipeline_matches_json_semantics() {
    let csv = "Alcohol,Flavanoids,Ash,Hue,Magnesium\n\
               1,1.0,2.0,1.0,4\n\
               2,2.0,2.0,1.5,100\n\
               1,3.0,2.0,1.0,4\n";
    let path = temp_dataset("pipeline.csv", csv);
    let dataset = load_file(&path).unwrap();
    std::fs::remove_file(&path).ok();

    let flavanoids = grouped_stats(&dataset, "Alcohol", "Flavanoids").unwrap();
    assert_eq!(flavanoids.groups.len(), 2);
    assert_eq!(flavanoids.groups[0].1.median, 2.0);
    assert_eq!(flavanoids.groups[1].1.median, 2.0);
}

#[test]
fn recomputation_over_unchanged_dataset_is_identical() {
    let path = temp_dataset("idempotent.json", SAMPLE_JSON);
    let dataset = load_file(&path).unwrap();
    std::fs::remove_file(&path).ok();

    let first = render_page(&[grouped_stats(&dataset, "Alcohol", "Flavanoids").unwrap()]);
    let second = render_page(&[grouped_stats(&dataset, "Alcohol", "Flavanoids").unwrap()]);
    assert_eq!(first, second);
}

#[test]
fn zero_magnesium_surfaces_as_inf_in_the_report() {
    let json = r#"[{"Alcohol": 1, "Flavanoids": 1.0, "Ash": 2.0, "Hue": 1.0, "Magnesium": 0}]"#;
    let path = temp_dataset("inf.json", json);
    let dataset = load_file(&path).unwrap();
    std::fs::remove_file(&path).ok();

    let augmented = with_gamma(&dataset);
    let gamma = grouped_stats(&augmented, "Alcohol", GAMMA_FIELD).unwrap();
    assert!(gamma.groups[0].1.mean.is_infinite());

    let page = render_page(&[gamma]);
    assert!(page.contains("<td>inf</td>"));
}
