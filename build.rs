#![allow(clippy::style)]


use std::env;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

fn main() -> std::io::Result<()> {
    let outdir = match std::env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };
    let outdir_path = PathBuf::from(outdir);

    write_default_bit_width(&outdir_path, "default_bit_width.rs")?;
    Ok(())
}

/// Create default_bit_width.rs, containing definition of constant DEFAULT_BIT_WIDTH
fn write_default_bit_width(outdir_path: &PathBuf, filename: &str) -> std::io::Result<()>
{

    let default_bits = env::var("RUST_BIGINTEGER_DEFAULT_BIT_WIDTH")
        .map(|s| s.parse::<std::num::NonZeroU32>().expect("$RUST_BIGINTEGER_DEFAULT_BIT_WIDTH must be an integer > 0"))
        .map(|nz_num| nz_num.get())
        .unwrap_or(512u32);

    let default_bit_width_rs_path = outdir_path.join(filename);

    let default_bit_width = format!("const DEFAULT_BIT_WIDTH: u32 = {};", default_bits);

    // Rewriting the file if it already exists with the same contents
    // would force a rebuild.
    match std::fs::read_to_string(&default_bit_width_rs_path) {
        Ok(existing_contents) if existing_contents == default_bit_width => {},
        _ => {
            let mut default_bit_width_rs = File::create(&default_bit_width_rs_path)
                .expect("Could not create default_bit_width.rs");
            write!(default_bit_width_rs, "{}", default_bit_width)?;
        }
    };

    println!("cargo:rerun-if-changed={}", default_bit_width_rs_path.display());
    println!("cargo:rerun-if-env-changed={}", "RUST_BIGINTEGER_DEFAULT_BIT_WIDTH");

    Ok(())
}
