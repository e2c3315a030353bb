//! Build script for vibefm.
//!
//! Copies `.env.example` from the crate root into the local data directory
//! (`<data_local_dir>/vibefm/.env.example`) so a configuration template sits
//! next to where `config::load_env` looks for `.env`.

use std::{env, fs, path::PathBuf};

/// Copies the configuration template.
///
/// A missing template only produces a cargo warning; failing to create the
/// target directory or write the file fails the build.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed=.env.example");

    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let env_example_path = manifest_dir.join(".env.example");

    let mut out_dir = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    out_dir.push("vibefm");
    fs::create_dir_all(&out_dir)?;

    if env_example_path.is_file() {
        fs::copy(&env_example_path, out_dir.join(".env.example"))?;
    } else {
        println!(
            "cargo:warning=.env.example not found at {}",
            env_example_path.display()
        );
    }

    Ok(())
}
