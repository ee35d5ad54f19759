// Licensed under the Apache-2.0 license

//! `generate` command: register map in, SystemVerilog register block out.

use anyhow::{Context, Result};
use regblock_generator::{build_register_block, generate_sv, EmitConfig};
use std::path::Path;

/// Generate a register block from a TOML register map.
///
/// The artifact is rendered in full before anything is written; a failure at
/// any stage leaves the output path untouched.
pub fn generate(map_file: &Path, output: Option<&Path>, module: &str) -> Result<()> {
    log::info!("generating register block from {}", map_file.display());

    let records = regblock_regmap::load_file(map_file)
        .with_context(|| format!("failed to load register map {}", map_file.display()))?;
    let registers = build_register_block(&records)?;
    let config = EmitConfig::default().with_module_name(module);
    let code = generate_sv(&registers, &config);

    match output {
        Some(path) => {
            std::fs::write(path, &code)
                .with_context(|| format!("failed to write {}", path.display()))?;
            log::info!(
                "wrote {} register(s) to {}",
                registers.len(),
                path.display()
            );
        }
        None => print!("{code}"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAP: &str = r#"
[[register]]
name = "Bus Characteristics Register"
abbrev = "BCR"
offset = "0x0000"

[[register.field]]
bits = "[7:6]"
name = "DEVICE_ROLE"
default = "2"
"#;

    #[test]
    fn test_generate_writes_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let map = dir.path().join("reg.toml");
        let out = dir.path().join("reg.sv");
        std::fs::write(&map, MAP).unwrap();

        generate(&map, Some(&out), "reg_block").unwrap();

        let code = std::fs::read_to_string(&out).unwrap();
        assert!(code.starts_with("module reg_block ("));
        assert!(code.ends_with("endmodule\n"));
    }

    #[test]
    fn test_invalid_map_leaves_output_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let map = dir.path().join("reg.toml");
        let out = dir.path().join("reg.sv");
        // Overlapping fields: validation must fail before any write.
        std::fs::write(
            &map,
            r#"
[[register]]
name = "Control"
abbrev = "CTRL"
offset = "0x0000"

[[register.field]]
bits = "[5:4]"
name = "A"

[[register.field]]
bits = "[4]"
name = "B"
"#,
        )
        .unwrap();

        assert!(generate(&map, Some(&out), "reg_block").is_err());
        assert!(!out.exists());
    }

    #[test]
    fn test_missing_map_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = generate(&dir.path().join("nope.toml"), None, "reg_block").unwrap_err();
        assert!(err.to_string().contains("failed to load register map"));
    }
}
