use std::env;
use std::fs;
use std::path::Path;

/// Separa una línea `KEY=VALUE` del `.env` (ignora comentarios y líneas vacías)
fn parse_env_line(line: &str) -> Option<(&str, &str)> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    let (key, value) = line.split_once('=')?;
    let value = value.trim().trim_matches('"');
    Some((key.trim(), value))
}

fn main() {
    // Las variables del .env se exponen a option_env!() en config.rs
    let env_file = Path::new(".env");

    if env_file.exists() {
        println!("cargo:rerun-if-changed=.env");

        if let Ok(contents) = fs::read_to_string(env_file) {
            for (key, value) in contents.lines().filter_map(parse_env_line) {
                // El entorno del proceso tiene prioridad sobre el .env
                if env::var(key).is_err() {
                    println!("cargo:rustc-env={}={}", key, value);
                }
            }
        }
    } else {
        println!("cargo:warning=No .env file found, using built-in defaults (DATABASE_URL, SESSION_POLL_INTERVAL_MS, ...). See .env.example.");
    }

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.env.example");
}
