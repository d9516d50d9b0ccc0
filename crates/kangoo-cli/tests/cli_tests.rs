//! CLI integration tests using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const MONDAY: &str = "sessions/monday.toml";

/// A command isolated from any user config under `$HOME`.
fn kangoo(home: &TempDir) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("kangoo").unwrap();
    cmd.env("HOME", home.path()).env_remove("KANGOO_ID_POLICY");
    cmd
}

fn write_script(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

const REUSE_SCRIPT: &str = r#"
[session]
name = "id reuse"

[[steps]]
action = "set"
field = "first_name"
value = "a"

[[steps]]
action = "submit"

[[steps]]
action = "set"
field = "first_name"
value = "b"

[[steps]]
action = "submit"

[[steps]]
action = "delete"
id = 1

[[steps]]
action = "set"
field = "first_name"
value = "c"

[[steps]]
action = "submit"
"#;

fn replay_json(home: &TempDir, args: &[&str]) -> serde_json::Value {
    let output = kangoo(home)
        .arg("replay")
        .args(args)
        .arg("--format")
        .arg("json")
        .output()
        .unwrap();
    assert!(output.status.success());
    serde_json::from_slice(&output.stdout).unwrap()
}

fn ids(view: &serde_json::Value) -> Vec<u64> {
    view["participants"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_u64().unwrap())
        .collect()
}

#[test]
fn replay_text_output() {
    let home = TempDir::new().unwrap();
    kangoo(&home)
        .arg("replay")
        .arg("--script")
        .arg(MONDAY)
        .arg("--no-color")
        .assert()
        .success()
        .stdout(predicate::str::contains("Список участников (2)"))
        .stdout(predicate::str::contains("Anna"))
        .stdout(predicate::str::contains("Irina"))
        .stdout(predicate::str::contains("Olga").not());
}

#[test]
fn replay_json_output() {
    let home = TempDir::new().unwrap();
    let view = replay_json(&home, &["--script", MONDAY]);

    assert_eq!(ids(&view), vec![1, 3]);
    assert_eq!(view["participants"][0]["club"], "Amplua");
    assert_eq!(view["participants"][1]["day"], "Friday");
    assert_eq!(view["submit_label"], "Добавить");
    assert!(view["editing"].is_null());
}

#[test]
fn replay_html_output() {
    let home = TempDir::new().unwrap();
    let out = home.path().join("page.html");

    kangoo(&home)
        .arg("replay")
        .arg("--script")
        .arg(MONDAY)
        .arg("--format")
        .arg("html")
        .arg("--output")
        .arg(&out)
        .assert()
        .success()
        .stderr(predicate::str::contains("Page written to"));

    let html = std::fs::read_to_string(&out).unwrap();
    assert!(html.contains("Kangoo Jumps"));
    assert!(html.contains("<span class=\"text-purple\">Пятница</span>"));
}

#[test]
fn replay_monotonic_ids_by_default() {
    let home = TempDir::new().unwrap();
    let script = write_script(&home, "reuse.toml", REUSE_SCRIPT);
    let view = replay_json(&home, &["--script", script.to_str().unwrap()]);
    assert_eq!(ids(&view), vec![2, 3]);
}

#[test]
fn replay_length_plus_one_reuses_live_id() {
    let home = TempDir::new().unwrap();
    let script = write_script(&home, "reuse.toml", REUSE_SCRIPT);
    let config = write_script(&home, "kangoo.toml", "id_policy = \"length_plus_one\"\n");

    let view = replay_json(
        &home,
        &[
            "--script",
            script.to_str().unwrap(),
            "--config",
            config.to_str().unwrap(),
        ],
    );
    assert_eq!(ids(&view), vec![2, 2]);
}

#[test]
fn env_policy_overrides_default() {
    let home = TempDir::new().unwrap();
    let script = write_script(&home, "reuse.toml", REUSE_SCRIPT);

    let output = kangoo(&home)
        .env("KANGOO_ID_POLICY", "length_plus_one")
        .arg("replay")
        .arg("--script")
        .arg(&script)
        .arg("--format")
        .arg("json")
        .output()
        .unwrap();
    assert!(output.status.success());
    let view: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(ids(&view), vec![2, 2]);
}

#[test]
fn env_policy_overrides_config_file() {
    let home = TempDir::new().unwrap();
    let script = write_script(&home, "reuse.toml", REUSE_SCRIPT);
    let config = write_script(&home, "kangoo.toml", "id_policy = \"monotonic\"\n");

    let output = kangoo(&home)
        .env("KANGOO_ID_POLICY", "length_plus_one")
        .arg("replay")
        .arg("--script")
        .arg(&script)
        .arg("--config")
        .arg(&config)
        .arg("--format")
        .arg("json")
        .output()
        .unwrap();
    assert!(output.status.success());
    let view: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(ids(&view), vec![2, 2]);
}

#[test]
fn env_policy_blank_is_ignored() {
    let home = TempDir::new().unwrap();
    let script = write_script(&home, "reuse.toml", REUSE_SCRIPT);

    let output = kangoo(&home)
        .env("KANGOO_ID_POLICY", "  ")
        .arg("replay")
        .arg("--script")
        .arg(&script)
        .arg("--format")
        .arg("json")
        .output()
        .unwrap();
    assert!(output.status.success());
    let view: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(ids(&view), vec![2, 3]);
}

#[test]
fn env_policy_bad_value_fails() {
    let home = TempDir::new().unwrap();
    kangoo(&home)
        .env("KANGOO_ID_POLICY", "random")
        .arg("replay")
        .arg("--script")
        .arg(MONDAY)
        .assert()
        .failure()
        .stderr(predicate::str::contains("KANGOO_ID_POLICY:"))
        .stderr(predicate::str::contains("unknown id policy: random"));
}

#[test]
fn validate_warns_on_empty_fill() {
    let home = TempDir::new().unwrap();
    let script = write_script(
        &home,
        "empty_fill.toml",
        "[session]\nname = \"empty fill\"\n\n[[steps]]\naction = \"submit\"\n\n[[steps]]\naction = \"fill\"\n",
    );

    kangoo(&home)
        .arg("validate")
        .arg("--script")
        .arg(&script)
        .assert()
        .success()
        .stdout(predicate::str::contains("empty fill (2 steps)"))
        .stdout(predicate::str::contains("[step 2] WARNING: fill step sets no fields"));
}

#[test]
fn replay_bad_option_fails_with_step() {
    let home = TempDir::new().unwrap();
    let script = write_script(
        &home,
        "bad.toml",
        "[session]\nname = \"bad\"\n\n[[steps]]\naction = \"set\"\nfield = \"club\"\nvalue = \"Gym42\"\n",
    );

    kangoo(&home)
        .arg("replay")
        .arg("--script")
        .arg(&script)
        .assert()
        .failure()
        .stderr(predicate::str::contains("step 1"))
        .stderr(predicate::str::contains("Gym42"));
}

#[test]
fn replay_unknown_format() {
    let home = TempDir::new().unwrap();
    kangoo(&home)
        .arg("replay")
        .arg("--script")
        .arg(MONDAY)
        .arg("--format")
        .arg("pdf")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown format"));
}

#[test]
fn replay_missing_config_fails() {
    let home = TempDir::new().unwrap();
    kangoo(&home)
        .arg("replay")
        .arg("--script")
        .arg(MONDAY)
        .arg("--config")
        .arg("no_such_config.toml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("config file not found"));
}

#[test]
fn validate_valid_script() {
    let home = TempDir::new().unwrap();
    kangoo(&home)
        .arg("validate")
        .arg("--script")
        .arg(MONDAY)
        .assert()
        .success()
        .stdout(predicate::str::contains("Monday evening (10 steps)"))
        .stdout(predicate::str::contains("Script valid."));
}

#[test]
fn validate_reports_warnings() {
    let home = TempDir::new().unwrap();
    let script = write_script(
        &home,
        "sloppy.toml",
        "[session]\nname = \"sloppy\"\n\n[[steps]]\naction = \"edit\"\nid = 7\n",
    );

    kangoo(&home)
        .arg("validate")
        .arg("--script")
        .arg(&script)
        .assert()
        .success()
        .stdout(predicate::str::contains("[step 1] WARNING: edit of id 7"))
        .stdout(predicate::str::contains("1 warning(s) found."));
}

#[test]
fn validate_nonexistent_file() {
    let home = TempDir::new().unwrap();
    kangoo(&home)
        .arg("validate")
        .arg("--script")
        .arg("nonexistent.toml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn init_creates_files() {
    let dir = TempDir::new().unwrap();

    kangoo(&dir)
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created kangoo.toml"))
        .stdout(predicate::str::contains("Created sessions/example.toml"));

    assert!(dir.path().join("kangoo.toml").exists());
    assert!(dir.path().join("sessions/example.toml").exists());

    // The generated files work together.
    kangoo(&dir)
        .current_dir(dir.path())
        .arg("validate")
        .arg("--script")
        .arg("sessions/example.toml")
        .assert()
        .success()
        .stdout(predicate::str::contains("Script valid."));
}

#[test]
fn init_skips_existing() {
    let dir = TempDir::new().unwrap();

    kangoo(&dir)
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success();

    kangoo(&dir)
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn help_output() {
    let home = TempDir::new().unwrap();
    kangoo(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Kangoo Jumps class registration"));
}

#[test]
fn version_output() {
    let home = TempDir::new().unwrap();
    kangoo(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("kangoo"));
}
