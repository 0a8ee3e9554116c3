use std::env;
use std::fs;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

/// Directories whose files are baked into, or served next to, the binary.
/// askama compiles `templates/` in; `assets/` is only served, but watching
/// it keeps `cargo test` honest about `app.js`.
const WATCHED: &[(&str, &[&str])] = &[("templates", &["html"]), ("assets", &["js", "css"])];

fn main() {
    for (dir, extensions) in WATCHED {
        watch(Path::new(dir), extensions);
    }

    println!("cargo:rerun-if-env-changed=MERGINGTON_BUILD_ID");
    println!("cargo:rustc-env=MERGINGTON_BUILD_ID={}", build_id());
}

// CI can pin the id; local builds get `<version>+<unix seconds>`.
fn build_id() -> String {
    if let Some(id) = env::var("MERGINGTON_BUILD_ID").ok().filter(|v| !v.is_empty()) {
        return id;
    }
    let version = env::var("CARGO_PKG_VERSION").unwrap_or_else(|_| "0.0.0".to_string());
    match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(d) => format!("{}+{}", version, d.as_secs()),
        Err(_) => version,
    }
}

fn watch(dir: &Path, extensions: &[&str]) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    // New or removed files change the directory itself.
    println!("cargo:rerun-if-changed={}", dir.display());

    for path in entries.flatten().map(|e| e.path()) {
        if path.is_dir() {
            watch(&path, extensions);
        } else if path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| extensions.contains(&ext))
        {
            println!("cargo:rerun-if-changed={}", path.display());
        }
    }
}
