use std::fs;

// Shared with the crate so the default is checked against the real shape
#[allow(dead_code)]
#[path = "src/config/schema.rs"]
mod schema;

fn main() {
    let config_path = "src/config/default_config.toml";
    println!("cargo:rerun-if-changed={}", config_path);
    println!("cargo:rerun-if-changed=src/config/schema.rs");

    let content = fs::read_to_string(config_path).expect("Failed to read default_config.toml");

    if let Err(e) = toml::from_str::<schema::Config>(&content) {
        panic!("Invalid default_config.toml: {}", e);
    }
}
