use std::{
    fs,
    path::{Path, PathBuf},
};

use serde_json::Value;
use tempfile::tempdir;

use easel::options::{AlignMode, Algorithm, DistributeAxis};
use easel_cli::{Args, Command, run};

/// Demos live at the workspace root, not in the crate
fn demos_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("demos")
}

/// Collects all .json files from a directory
fn collect_json_files(dir: PathBuf) -> Vec<PathBuf> {
    let mut files = if let Ok(entries) = fs::read_dir(&dir) {
        entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("json")
            })
            .collect()
    } else {
        Vec::new()
    };

    // Sort for consistent test output
    files.sort();
    files
}

fn args(input: &Path, output: &Path, command: Command) -> Args {
    Args {
        input: input.to_string_lossy().to_string(),
        output: Some(output.to_string_lossy().to_string()),
        config: None,
        log_level: "off".to_string(),
        command,
    }
}

fn node_ids(path: &Path) -> Vec<String> {
    let value: Value = serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();
    value["nodes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|node| node["id"].as_str().unwrap().to_string())
        .collect()
}

#[test]
fn e2e_smoke_test_layouts() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let demos = collect_json_files(demos_dir());
    assert!(!demos.is_empty(), "No demos found in demos/");

    let mut failed = Vec::new();

    for demo in &demos {
        for algorithm in [
            Algorithm::Hierarchical,
            Algorithm::ForceDirected,
            Algorithm::Grid,
            Algorithm::Circular,
        ] {
            let output = temp_dir.path().join(format!(
                "{}_{algorithm}.json",
                demo.file_stem().unwrap().to_string_lossy()
            ));
            let command = Command::Layout {
                algorithm: Some(algorithm),
                direction: None,
                spacing: None,
                grid_size: None,
                alignment: None,
            };

            if let Err(e) = run(&args(demo, &output, command)) {
                failed.push(format!("{} ({algorithm}): {e}", demo.display()));
                continue;
            }

            let value: Value = serde_json::from_str(&fs::read_to_string(&output).unwrap())
                .expect("Output should be valid JSON");
            let nodes = value["nodes"].as_array().unwrap();
            assert_eq!(nodes.len(), node_ids(demo).len());
            for node in nodes {
                let x = node["position"]["x"].as_f64().unwrap();
                let y = node["position"]["y"].as_f64().unwrap();
                assert_eq!(x % 20.0, 0.0, "{} ({algorithm})", demo.display());
                assert_eq!(y % 20.0, 0.0, "{} ({algorithm})", demo.display());
            }
        }
    }

    if !failed.is_empty() {
        eprintln!("\nDemos that failed:");
        for failure in &failed {
            eprintln!("  - {failure}");
        }
        panic!("{} demo layout(s) failed unexpectedly", failed.len());
    }
}

#[test]
fn e2e_smoke_test_arrangement() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let demo = demos_dir().join("flowchart.json");
    let ids = node_ids(&demo);

    let aligned = temp_dir.path().join("aligned.json");
    run(&args(
        &demo,
        &aligned,
        Command::Align {
            mode: AlignMode::Left,
            ids: ids.clone(),
        },
    ))
    .expect("align should succeed");

    let value: Value = serde_json::from_str(&fs::read_to_string(&aligned).unwrap()).unwrap();
    for node in value["nodes"].as_array().unwrap() {
        assert_eq!(node["position"]["x"].as_f64(), Some(100.0));
    }
    assert_eq!(value["nodes"][0]["data"]["label"], "Start");
    assert_eq!(value["viewport"]["zoom"], 1);

    let distributed = temp_dir.path().join("distributed.json");
    run(&args(
        &demo,
        &distributed,
        Command::Distribute {
            axis: DistributeAxis::Vertical,
            ids,
        },
    ))
    .expect("distribute should succeed");

    let value: Value = serde_json::from_str(&fs::read_to_string(&distributed).unwrap()).unwrap();
    let ys: Vec<f64> = value["nodes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|node| node["position"]["y"].as_f64().unwrap())
        .collect();
    // Sorted by y: start, validate, fetch, merge, done.
    assert_eq!(ys, vec![0.0, 75.0, 150.0, 225.0, 300.0]);
}

#[test]
fn e2e_smoke_test_error_demos() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let error_demos = collect_json_files(demos_dir().join("errors"));
    assert!(
        !error_demos.is_empty(),
        "No error demos found in demos/errors/"
    );

    let mut unexpectedly_succeeded = Vec::new();

    for demo in &error_demos {
        let output = temp_dir.path().join(format!(
            "error_{}.json",
            demo.file_stem().unwrap().to_string_lossy()
        ));
        let command = Command::Layout {
            algorithm: None,
            direction: None,
            spacing: None,
            grid_size: None,
            alignment: None,
        };

        if run(&args(demo, &output, command)).is_ok() {
            unexpectedly_succeeded.push(demo.clone());
        }
    }

    if !unexpectedly_succeeded.is_empty() {
        eprintln!("\nError demos that unexpectedly succeeded:");
        for path in &unexpectedly_succeeded {
            eprintln!("  - {}", path.display());
        }
        panic!(
            "{} error demo(s) succeeded unexpectedly",
            unexpectedly_succeeded.len()
        );
    }
}
