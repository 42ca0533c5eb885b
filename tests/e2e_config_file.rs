/// End-to-end tests for config file loading and CLI option merging.
///
/// These tests exercise the full flow from config file on disk through CLI invocation
/// to correct output, using `assert_cmd` and `tempfile` for isolated test environments.
use assert_cmd::cargo::cargo_bin_cmd;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

// ============================================================================
// Helper Functions
// ============================================================================

fn fixture(relative: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(relative)
}

/// Create a working directory with the fixture SBOMs copied into `sboms/`.
fn create_workspace(dir: &Path) {
    let sboms = dir.join("sboms");
    fs::create_dir(&sboms).unwrap();
    for name in ["api.spdx.json", "worker.spdx.json"] {
        fs::copy(fixture("sboms").join(name), sboms.join(name)).unwrap();
    }
}

/// Write a config file at the specified path.
fn write_config(path: &Path, content: &str) {
    fs::write(path, content).unwrap();
}

fn read_json(path: &Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

// ============================================================================
// Merge
// ============================================================================

mod merge_config_tests {
    use super::*;

    #[test]
    fn test_auto_discovered_config_drives_merge() {
        let dir = TempDir::new().unwrap();
        create_workspace(dir.path());
        write_config(
            &dir.path().join("sbom-ci.config.yml"),
            r#"
merge:
  input_dir: sboms
  output: platform.spdx.json
  document_name: platform
  namespace_base: https://sbom.example.org/docs
  creators:
    - "Organization: ACME"
"#,
        );

        let output = cargo_bin_cmd!("sbom-ci")
            .current_dir(dir.path())
            .arg("merge")
            .output()
            .unwrap();

        assert!(
            output.status.success(),
            "Expected exit code 0. stderr: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        let merged = read_json(&dir.path().join("platform.spdx.json"));
        assert_eq!(merged["name"], "platform");
        assert!(merged["documentNamespace"]
            .as_str()
            .unwrap()
            .starts_with("https://sbom.example.org/docs/platform-"));

        let creators = merged["creationInfo"]["creators"].as_array().unwrap();
        assert_eq!(creators.len(), 2);
        assert!(creators[0].as_str().unwrap().starts_with("Tool: sbom-ci-"));
        assert_eq!(creators[1], "Organization: ACME");
    }

    #[test]
    fn test_cli_flags_override_config() {
        let dir = TempDir::new().unwrap();
        create_workspace(dir.path());
        write_config(
            &dir.path().join("sbom-ci.config.yml"),
            r#"
merge:
  input_dir: sboms
  output: from-config.json
  document_name: from-config
"#,
        );

        let output = cargo_bin_cmd!("sbom-ci")
            .current_dir(dir.path())
            .args(["merge", "-o", "from-cli.json", "--document-name", "from-cli"])
            .output()
            .unwrap();

        assert!(output.status.success());
        assert!(!dir.path().join("from-config.json").exists());
        let merged = read_json(&dir.path().join("from-cli.json"));
        assert_eq!(merged["name"], "from-cli");
    }

    #[test]
    fn test_explicit_config_path() {
        let dir = TempDir::new().unwrap();
        create_workspace(dir.path());
        let config_dir = dir.path().join("ci");
        fs::create_dir(&config_dir).unwrap();
        write_config(
            &config_dir.join("merge.yml"),
            r#"
merge:
  input_dir: sboms
  pattern: "api.*"
  output: api-only.json
"#,
        );

        let output = cargo_bin_cmd!("sbom-ci")
            .current_dir(dir.path())
            .args(["merge", "--config", "ci/merge.yml"])
            .output()
            .unwrap();

        assert!(
            output.status.success(),
            "Expected exit code 0. stderr: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        let merged = read_json(&dir.path().join("api-only.json"));
        assert_eq!(merged["packages"].as_array().unwrap().len(), 4);
    }

    #[test]
    fn test_unknown_fields_warn_but_succeed() {
        let dir = TempDir::new().unwrap();
        create_workspace(dir.path());
        write_config(
            &dir.path().join("sbom-ci.config.yml"),
            r#"
merge:
  input_dir: sboms
  recursive: true
format: cyclonedx
"#,
        );

        let output = cargo_bin_cmd!("sbom-ci")
            .current_dir(dir.path())
            .arg("merge")
            .output()
            .unwrap();

        assert!(output.status.success());
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("Unknown config field 'format'"));
        assert!(stderr.contains("Unknown config field 'merge.recursive'"));
    }
}

// ============================================================================
// Submit
// ============================================================================

mod submit_config_tests {
    use super::*;

    #[test]
    fn test_config_source_location_and_detector() {
        let dir = TempDir::new().unwrap();
        create_workspace(dir.path());
        write_config(
            &dir.path().join("sbom-ci.config.yml"),
            r#"
submit:
  source_location_template: "services/{service}/Dockerfile"
  detector_url: https://ci.example.org/sbom-ci
"#,
        );

        let output = cargo_bin_cmd!("sbom-ci")
            .current_dir(dir.path())
            .args(["submit", "--sbom", "sboms/worker.spdx.json", "--service", "worker"])
            .output()
            .unwrap();

        assert!(
            output.status.success(),
            "Expected exit code 0. stderr: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        let snapshot: Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(
            snapshot["manifests"]["worker"]["file"]["source_location"],
            "services/worker/Dockerfile"
        );
        assert_eq!(snapshot["detector"]["url"], "https://ci.example.org/sbom-ci");
    }
}

// ============================================================================
// Invalid configuration
// ============================================================================

mod invalid_config_tests {
    use super::*;

    #[test]
    fn test_missing_explicit_config_exits_3() {
        let dir = TempDir::new().unwrap();

        cargo_bin_cmd!("sbom-ci")
            .current_dir(dir.path())
            .args(["merge", "--config", "nope.yml"])
            .assert()
            .code(3);
    }

    #[test]
    fn test_malformed_yaml_exits_3() {
        let dir = TempDir::new().unwrap();
        write_config(
            &dir.path().join("sbom-ci.config.yml"),
            "merge: [[[broken",
        );

        let output = cargo_bin_cmd!("sbom-ci")
            .current_dir(dir.path())
            .arg("merge")
            .output()
            .unwrap();

        assert_eq!(output.status.code(), Some(3));
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("Failed to parse config file"));
    }

    #[test]
    fn test_template_without_placeholder_exits_3() {
        let dir = TempDir::new().unwrap();
        create_workspace(dir.path());
        write_config(
            &dir.path().join("sbom-ci.config.yml"),
            r#"
submit:
  source_location_template: Dockerfile
"#,
        );

        cargo_bin_cmd!("sbom-ci")
            .current_dir(dir.path())
            .args(["submit", "--sbom", "sboms/api.spdx.json", "--service", "api"])
            .assert()
            .code(3);
    }
}
