//! The `kangoo init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    if std::path::Path::new("kangoo.toml").exists() {
        println!("kangoo.toml already exists, skipping.");
    } else {
        std::fs::write("kangoo.toml", SAMPLE_CONFIG)?;
        println!("Created kangoo.toml");
    }

    std::fs::create_dir_all("sessions")?;
    let example_path = std::path::Path::new("sessions/example.toml");
    if example_path.exists() {
        println!("sessions/example.toml already exists, skipping.");
    } else {
        std::fs::write(example_path, EXAMPLE_SESSION)?;
        println!("Created sessions/example.toml");
    }

    println!("\nNext steps:");
    println!("  1. Run: kangoo validate --script sessions/example.toml");
    println!("  2. Run: kangoo replay --script sessions/example.toml");
    println!("  3. Run: kangoo shell");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# kangoo configuration

# "monotonic" never reuses ids; "length_plus_one" assigns len + 1 and can
# hand out an id that is still in use after a delete.
id_policy = "monotonic"

# Reject Add/Save while first or last name is blank.
require_names = false

# Color club and day cells in terminal output.
color = true
"#;

const EXAMPLE_SESSION: &str = include_str!("../../sessions/monday.toml");
