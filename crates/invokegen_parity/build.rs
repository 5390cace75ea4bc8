//! Generate Rust bindings for `schema.json` into `OUT_DIR`, one file per function.

use std::error::Error;
use std::path::{Path, PathBuf};

use invokegen::backend::write_units;
use invokegen::schema::load_closure;
use invokegen::{Codegen, GeneratorConfig};
use invokegen_core::Target;

fn main() -> Result<(), Box<dyn Error>> {
    let schema = Path::new(env!("CARGO_MANIFEST_DIR")).join("schema.json");
    println!("cargo::rerun-if-changed=build.rs");
    println!("cargo::rerun-if-changed={}", schema.display());

    let closure = load_closure(&schema)?;
    let output = Codegen::new(GeneratorConfig::new(Target::Rust)).generate(&closure)?;
    if let Some(failure) = output.failures.first() {
        return Err(format!("binding generation failed: {failure}").into());
    }

    let out_dir = PathBuf::from(std::env::var("OUT_DIR")?);
    write_units(&output.units, &out_dir)?;
    Ok(())
}
