use std::{env, fs};

use scout_config::{Config, Error};

const SAMPLE_CONFIG_TOML: &str = r#"
[service]
http_bind = "127.0.0.1:8080"
log_level = "info"

[search]
adapter_timeout_ms = 500

[catalog]
fixtures = ""
"#;

fn write_temp_config(name: &str, contents: &str) -> std::path::PathBuf {
	let path = env::temp_dir().join(format!("scout_config_{name}_{}.toml", std::process::id()));

	fs::write(&path, contents).expect("Failed to write temp config.");

	path
}

#[test]
fn loads_and_normalizes_sample_config() {
	let path = write_temp_config("sample", SAMPLE_CONFIG_TOML);
	let cfg = scout_config::load(&path).expect("Sample config must load.");

	assert_eq!(cfg.service.http_bind, "127.0.0.1:8080");
	assert_eq!(cfg.search.adapter_timeout_ms, 500);
	// Blank fixture paths normalize to absent.
	assert!(cfg.catalog.fixtures.is_none());

	let _ = fs::remove_file(path);
}

#[test]
fn rejects_zero_adapter_timeout() {
	let contents = SAMPLE_CONFIG_TOML.replace("adapter_timeout_ms = 500", "adapter_timeout_ms = 0");
	let path = write_temp_config("zero_timeout", &contents);
	let err = scout_config::load(&path).expect_err("Zero timeout must be rejected.");

	assert!(matches!(err, Error::Validation { .. }));

	let _ = fs::remove_file(path);
}

#[test]
fn rejects_blank_http_bind() {
	let cfg: Config = toml::from_str(
		&SAMPLE_CONFIG_TOML.replace(r#"http_bind = "127.0.0.1:8080""#, r#"http_bind = "  ""#),
	)
	.expect("Config must parse.");
	let err = scout_config::validate(&cfg).expect_err("Blank bind must be rejected.");

	assert!(matches!(err, Error::Validation { .. }));
}
