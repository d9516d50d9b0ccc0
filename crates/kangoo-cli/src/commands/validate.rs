//! The `kangoo validate` command.

use std::path::PathBuf;

use anyhow::Result;

use kangoo_core::config::load_config_from;
use kangoo_core::script::{parse_script, validate_script};

pub fn execute(script_path: PathBuf, config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let script = parse_script(&script_path)?;

    println!("Session: {} ({} steps)", script.name, script.step_count());
    if !script.description.is_empty() {
        println!("  {}", script.description);
    }

    let warnings = validate_script(&script, &config);
    for w in &warnings {
        let prefix = w
            .step
            .map(|step| format!("  [step {step}]"))
            .unwrap_or_else(|| "  ".to_string());
        println!("{prefix} WARNING: {}", w.message);
    }

    if warnings.is_empty() {
        println!("Script valid.");
    } else {
        println!("\n{} warning(s) found.", warnings.len());
    }

    Ok(())
}
