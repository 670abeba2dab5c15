fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed=build.rs");

    let out_dir = std::env::var("OUT_DIR")?;
    nlprule_build::BinaryBuilder::new(&["en"], out_dir)
        .build()?
        .validate()?;
    Ok(())
}
