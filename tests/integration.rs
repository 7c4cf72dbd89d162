use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

fn catalog_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_catalog"))
}

fn setup_test_env() -> (TempDir, PathBuf) {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().to_path_buf();

    let config_dir = root.join("config");
    fs::create_dir_all(&config_dir).unwrap();

    let config_content = r#"[server]
bind = "127.0.0.1:0"

[query]
max_query_len = 100
default_related_limit = 3
max_related_limit = 10
"#;

    let config_path = config_dir.join("catalog.toml");
    fs::write(&config_path, config_content).unwrap();

    (tmp, config_path)
}

/// Config pointing at a small custom catalog file next to it.
fn setup_custom_catalog_env() -> (TempDir, PathBuf) {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().to_path_buf();

    fs::write(
        root.join("items.json"),
        r#"[
  {"id": 1, "name": "Teapot", "description": "Cast iron", "category": "Kitchen", "price": 45.0, "image_url": ""},
  {"id": 2, "name": "Kettle", "description": "Gooseneck pour-over kettle", "category": "Kitchen", "price": 59.0, "image_url": ""},
  {"id": 3, "name": "Desk", "description": "Standing desk", "category": "Furniture", "price": 399.0, "image_url": ""}
]"#,
    )
    .unwrap();

    let config_path = root.join("catalog.toml");
    fs::write(&config_path, "[catalog]\npath = \"items.json\"\n").unwrap();

    (tmp, config_path)
}

fn run_catalog(config_path: &Path, args: &[&str]) -> (String, String, bool) {
    let binary = catalog_binary();
    let output = Command::new(&binary)
        .arg("--config")
        .arg(config_path.to_str().unwrap())
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap_or_else(|e| panic!("Failed to run catalog binary at {:?}: {}", binary, e));

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();
    (stdout, stderr, success)
}

fn run_json(config_path: &Path, args: &[&str]) -> serde_json::Value {
    let mut full: Vec<&str> = args.to_vec();
    full.push("--json");
    let (stdout, stderr, success) = run_catalog(config_path, &full);
    assert!(success, "{:?} failed: stdout={}, stderr={}", args, stdout, stderr);
    serde_json::from_str(&stdout)
        .unwrap_or_else(|e| panic!("{:?}: stdout is not JSON: {}\n{}", args, e, stdout))
}

fn ids(value: &serde_json::Value) -> Vec<i64> {
    value
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["id"].as_i64().unwrap())
        .collect()
}

#[test]
fn test_search_coffee() {
    let (_tmp, config_path) = setup_test_env();

    let (stdout, stderr, success) = run_catalog(&config_path, &["search", "coffee"]);
    assert!(success, "search failed: stdout={}, stderr={}", stdout, stderr);
    assert!(stdout.contains("1 result(s)"));
    assert!(stdout.contains("Organic Coffee Beans"));
    assert!(!stdout.contains("Wireless Headphones"));
}

#[test]
fn test_search_json_categories_price_asc() {
    let (_tmp, config_path) = setup_test_env();

    let value = run_json(
        &config_path,
        &[
            "search",
            "--categories",
            "Electronics,Furniture",
            "--sort-by",
            "price_asc",
        ],
    );
    assert_eq!(ids(&value), vec![2, 8, 6, 1]);
}

#[test]
fn test_search_no_results() {
    let (_tmp, config_path) = setup_test_env();

    let (stdout, _, success) = run_catalog(&config_path, &["search", "submarine"]);
    assert!(success);
    assert!(stdout.contains("No results."));
}

#[test]
fn test_search_invalid_sort_by_fails() {
    let (_tmp, config_path) = setup_test_env();

    let (_, stderr, success) = run_catalog(&config_path, &["search", "--sort-by", "cheapest"]);
    assert!(!success);
    assert!(stderr.contains("invalid sort_by"), "stderr={}", stderr);
}

#[test]
fn test_get_item() {
    let (_tmp, config_path) = setup_test_env();

    let (stdout, stderr, success) = run_catalog(&config_path, &["get", "6"]);
    assert!(success, "get failed: stderr={}", stderr);
    assert!(stdout.contains("Mechanical Keyboard"));
    assert!(stdout.contains("$149.99"));
}

#[test]
fn test_get_missing_item_fails() {
    let (_tmp, config_path) = setup_test_env();

    let (_, stderr, success) = run_catalog(&config_path, &["get", "999"]);
    assert!(!success);
    assert!(stderr.contains("item not found: 999"), "stderr={}", stderr);
}

#[test]
fn test_related() {
    let (_tmp, config_path) = setup_test_env();

    let value = run_json(&config_path, &["related", "1", "--limit", "2"]);
    let related = ids(&value);
    assert!(related.len() <= 2);
    assert!(!related.contains(&1));
    for item in value.as_array().unwrap() {
        assert_eq!(item["category"], "Electronics");
    }
}

#[test]
fn test_related_limit_out_of_range_fails() {
    let (_tmp, config_path) = setup_test_env();

    let (_, stderr, success) = run_catalog(&config_path, &["related", "1", "--limit", "11"]);
    assert!(!success);
    assert!(stderr.contains("limit must be between 1 and 10"), "stderr={}", stderr);
}

#[test]
fn test_categories() {
    let (_tmp, config_path) = setup_test_env();

    let value = run_json(&config_path, &["categories"]);
    let categories: Vec<&str> = value["categories"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap())
        .collect();
    assert_eq!(
        categories,
        vec![
            "Electronics",
            "Food & Beverage",
            "Furniture",
            "Home & Decor",
            "Kitchen",
            "Sports & Fitness",
            "Stationery",
        ]
    );
}

#[test]
fn test_custom_catalog_file() {
    let (_tmp, config_path) = setup_custom_catalog_env();

    let value = run_json(&config_path, &["search", "kettle"]);
    assert_eq!(ids(&value), vec![2]);

    let value = run_json(&config_path, &["related", "1"]);
    assert_eq!(ids(&value), vec![2]);

    let value = run_json(&config_path, &["categories"]);
    assert_eq!(value["categories"], serde_json::json!(["Furniture", "Kitchen"]));
}

#[test]
fn test_invalid_catalog_file_fails() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("items.json"),
        r#"[{"id": 1, "name": "", "description": "", "category": "X", "price": 1.0, "image_url": ""}]"#,
    )
    .unwrap();
    let config_path = tmp.path().join("catalog.toml");
    fs::write(&config_path, "[catalog]\npath = \"items.json\"\n").unwrap();

    let (_, stderr, success) = run_catalog(&config_path, &["categories"]);
    assert!(!success);
    assert!(stderr.contains("name must not be empty"), "stderr={}", stderr);
}

#[test]
fn test_missing_explicit_config_fails() {
    let tmp = TempDir::new().unwrap();
    let (_, stderr, success) = run_catalog(&tmp.path().join("missing.toml"), &["categories"]);
    assert!(!success);
    assert!(stderr.contains("Failed to read config file"), "stderr={}", stderr);
}
