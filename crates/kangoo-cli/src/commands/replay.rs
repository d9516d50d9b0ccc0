//! The `kangoo replay` command.

use std::path::PathBuf;

use anyhow::Result;

use kangoo_core::config::load_config_from;
use kangoo_core::script::parse_script;
use kangoo_core::ParticipantApp;
use kangoo_report::write_html_page;

use crate::view;

pub fn execute(
    script_path: PathBuf,
    format: String,
    output: PathBuf,
    config_path: Option<PathBuf>,
    no_color: bool,
) -> Result<()> {
    anyhow::ensure!(
        matches!(format.as_str(), "text" | "json" | "html"),
        "unknown format '{format}', expected text, json or html"
    );

    let config = load_config_from(config_path.as_deref())?;
    let script = parse_script(&script_path)?;

    let mut app = ParticipantApp::new(&config);
    let outcomes = script.replay(&mut app)?;
    tracing::info!(
        "replayed '{}': {} actions, {} list changes",
        script.name,
        outcomes.len(),
        outcomes.iter().filter(|o| o.changed_list()).count()
    );

    match format.as_str() {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&app.view())?);
        }
        "html" => {
            write_html_page(&app, &output)?;
            eprintln!("Page written to: {}", output.display());
        }
        _ => {
            print!("{}", view::render(&app, config.color && !no_color));
        }
    }

    Ok(())
}
