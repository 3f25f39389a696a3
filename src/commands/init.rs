use anyhow::Result;
use std::path::Path;

use crate::config::CONFIG_FILE_NAME;
use crate::io;

pub const DEFAULT_CONFIG: &str = r#"# Scorecard Configuration

[defaults]
# beginner | intermediate | advanced | benchmark | reset
preset = "benchmark"

[display]
theme = "light"   # light | dark
color = "auto"    # auto | always | never
emoji = "auto"    # auto | always | never

[export]
output_dir = "."
"#;

pub fn init_config_in(dir: &Path, force: bool) -> Result<()> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    io::write_file(&config_path, DEFAULT_CONFIG)?;
    println!("Created {CONFIG_FILE_NAME} configuration file");

    Ok(())
}

pub fn init_config(force: bool) -> Result<()> {
    init_config_in(Path::new("."), force)
}
