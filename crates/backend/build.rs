//! Кладёт config.toml из корня workspace рядом с бинарником backend,
//! где его ищет `shared::config::load_config`.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

fn workspace_root() -> Option<PathBuf> {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .and_then(Path::parent)
        .map(Path::to_path_buf)
}

fn main() {
    println!("cargo:rerun-if-changed=../../config.toml");

    let (Ok(out_dir), Ok(profile)) = (env::var("OUT_DIR"), env::var("PROFILE")) else {
        return;
    };

    // OUT_DIR is target/<profile>/build/backend-xxx/out
    let Some(binary_dir) = Path::new(&out_dir)
        .ancestors()
        .find(|p| p.ends_with(&profile))
    else {
        println!("cargo:warning=target profile directory not found, config.toml not copied");
        return;
    };

    let Some(source) = workspace_root().map(|root| root.join("config.toml")) else {
        return;
    };
    if !source.exists() {
        println!("cargo:warning=config.toml not found at {:?}, embedded defaults apply", source);
        return;
    }

    let dest = binary_dir.join("config.toml");
    if let Err(e) = fs::copy(&source, &dest) {
        println!("cargo:warning=Failed to copy config.toml: {}", e);
    }
}
