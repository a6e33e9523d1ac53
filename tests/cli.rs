use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn cluster_points(args: &[&str], cwd: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_cluster-points"))
        .args(args)
        .current_dir(cwd)
        .output()
        .expect("failed to launch cluster-points")
}

fn write_input(dir: &TempDir, contents: &str) -> String {
    let path = dir.path().join("points.txt");
    fs::write(&path, contents).unwrap();
    path.to_string_lossy().into_owned()
}

#[test]
fn test_missing_arguments_print_usage() {
    let dir = TempDir::new().unwrap();
    let out = cluster_points(&["2"], dir.path());

    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Usage"), "stderr was: {}", stderr);
}

#[test]
fn test_non_positive_cluster_count() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "0 0\n1 1\n");

    for k in ["0", "-2"] {
        let out = cluster_points(&[k, &input], dir.path());
        assert!(!out.status.success());
        let stderr = String::from_utf8_lossy(&out.stderr);
        assert!(
            stderr.contains("Number of clusters must be positive"),
            "stderr was: {}",
            stderr
        );
    }
    assert!(!dir.path().join("clusters.svg").exists());
}

#[test]
fn test_too_many_clusters() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "0 0\n1 1\n");

    let out = cluster_points(&["3", &input], dir.path());

    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Number of clusters must be less than or equal to number of points"));
    assert!(!dir.path().join("clusters.svg").exists());
}

#[test]
fn test_malformed_input() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "0 0\n1 one\n");

    let out = cluster_points(&["1", &input], dir.path());

    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("line 2"), "stderr was: {}", stderr);
}

#[test]
fn test_writes_plot_and_centroids() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "0 0\n0 1\n10 10\n10 11\n");

    let out = cluster_points(
        &[
            "2",
            &input,
            "--seed",
            "4",
            "-o",
            "plot.svg",
            "--centroids-npy",
            "centroids.npy",
        ],
        dir.path(),
    );

    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    let svg = fs::read_to_string(dir.path().join("plot.svg")).unwrap();
    assert_eq!(svg.matches("<circle").count(), 4);
    assert!(dir.path().join("centroids.npy").exists());

    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.starts_with("Converged"));
    assert_eq!(stdout.matches("2 points").count(), 2);
}

#[test]
fn test_unwritable_plot_path() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "0 0\n1 1\n");

    let out = cluster_points(&["1", &input, "-o", "missing_dir/plot.svg"], dir.path());

    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(
        stderr.contains("Could not write plot to missing_dir/plot.svg: I/O error: "),
        "stderr was: {}",
        stderr
    );
    assert!(!stderr.contains("read points"), "stderr was: {}", stderr);
    assert_eq!(stderr.matches("os error").count(), 1, "stderr was: {}", stderr);
}

#[test]
fn test_json_summary() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "0 0\n0 1\n10 10\n10 11\n");

    let out = cluster_points(&["2", &input, "--seed", "4", "--format", "json"], dir.path());
    assert!(out.status.success());

    let summary: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(summary["k"], 2);
    assert_eq!(summary["converged"], true);
    assert_eq!(summary["cluster_sizes"], serde_json::json!([2, 2]));
    assert_eq!(summary["clusters"].as_array().unwrap().len(), 2);
    assert_eq!(summary["labels"].as_array().unwrap().len(), 4);
    assert!(summary["n_iterations"].as_u64().unwrap() >= 1);
}
