use std::env;
use std::fs::write;
use std::path::PathBuf;

use serial_test::serial;
use tempfile::NamedTempFile;

use article_forge::load_config::load_config;

#[test]
#[serial]
fn load_config_merges_yaml_over_defaults() {
    let config_yaml = r#"
generation:
  endpoint: "http://ollama.internal:11434/api/generate"
  model: llama3
export:
  output_dir: ./tmp/articles
"#;
    let config_file = NamedTempFile::new().expect("temp file");
    write(config_file.path(), config_yaml).unwrap();
    env::remove_var("GENERATION_ENDPOINT");

    let config = load_config(Some(config_file.path())).expect("Config should load");

    assert_eq!(
        config.generation.endpoint,
        "http://ollama.internal:11434/api/generate"
    );
    // Tagless model names get ":latest" appended.
    assert_eq!(config.generation.model, "llama3:latest");
    // Unset fields keep their defaults.
    assert_eq!(config.generation.code_model, "codellama:7b");
    assert_eq!(config.generation.timeout_secs, 300);
    assert_eq!(config.export.output_dir, PathBuf::from("./tmp/articles"));
    assert!(config.include_code);
}

#[test]
#[serial]
fn load_config_without_file_uses_defaults() {
    env::remove_var("GENERATION_ENDPOINT");
    let config = load_config(None).expect("defaults should load");
    assert_eq!(
        config.generation.endpoint,
        "http://localhost:11434/api/generate"
    );
    assert_eq!(config.generation.model, "mistral:latest");
    assert_eq!(config.export.output_dir, PathBuf::from("output"));
}

#[test]
#[serial]
fn env_var_overrides_endpoint() {
    env::set_var("GENERATION_ENDPOINT", "http://gpu-box:11434/api/generate");
    let config = load_config(None).expect("defaults should load");
    assert_eq!(
        config.generation.endpoint,
        "http://gpu-box:11434/api/generate"
    );
    env::remove_var("GENERATION_ENDPOINT");
}

#[test]
#[serial]
fn load_config_errors_for_invalid_yaml() {
    let config_file = NamedTempFile::new().expect("temp file");
    write(config_file.path(), "generation: [not, a, mapping").unwrap();

    let err = load_config(Some(config_file.path())).unwrap_err();
    assert!(
        err.to_string().contains("parse"),
        "must report a parse failure, got: {err}"
    );
}

#[test]
#[serial]
fn load_config_errors_for_missing_file() {
    let err = load_config(Some(std::path::Path::new("/does/not/exist.yaml"))).unwrap_err();
    assert!(err.to_string().contains("read"), "got: {err}");
}
