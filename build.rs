use std::env;
use std::fs;
use std::path::Path;

fn main() {
    // Forward a local .env into compile-time env vars (read through option_env!)
    let env_file = Path::new(".env");

    if env_file.exists() {
        println!("cargo:rerun-if-changed=.env");

        if let Ok(contents) = fs::read_to_string(env_file) {
            for line in contents.lines() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }

                if let Some((key, value)) = line.split_once('=') {
                    let key = key.trim();
                    let value = value.trim().trim_matches('"');

                    // Real environment wins over .env
                    if env::var(key).is_err() {
                        println!("cargo:rustc-env={}={}", key, value);
                    }
                }
            }
        }
    } else {
        println!("cargo:warning=No .env file found. Using default values (API_BASE_URL=http://localhost:5000).");
    }

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=API_BASE_URL");
    println!("cargo:rerun-if-env-changed=REQUEST_TIMEOUT_SECONDS");
    println!("cargo:rerun-if-env-changed=ENABLE_LOGGING");
}
