//! Tests for the alimento CLI surface.

use std::process::Command;

use temp_dir::TempDir;

#[test]
fn test_cli_help_shows_all_commands() {
    let output = Command::new("cargo")
        .args(["run", "--quiet", "--", "--help"])
        .output()
        .expect("Failed to run alimento --help");

    let help_text = String::from_utf8_lossy(&output.stdout);

    for command in [
        "recipes",
        "recipe",
        "plan",
        "swaps",
        "favorites",
        "bmi",
        "register",
        "login",
        "logout",
        "whoami",
    ] {
        assert!(help_text.contains(command), "{command} command not in help");
    }
}

#[test]
fn test_bmi_command_prints_the_report() {
    let output = Command::new("cargo")
        .args([
            "run", "--quiet", "--", "bmi", "--height", "180", "--weight", "75",
        ])
        .output()
        .expect("Failed to run alimento bmi");

    let report = String::from_utf8_lossy(&output.stdout);

    assert!(report.contains("23.1"), "BMI value missing: {report}");
    assert!(
        report.contains("Normal weight"),
        "category missing: {report}"
    );
}

#[test]
fn test_favorites_toggle_round_trips_through_storage() -> anyhow::Result<()> {
    let dir = TempDir::new()?;

    let run = |args: &[&str]| {
        let output = Command::new("cargo")
            .args(["run", "--quiet", "--"])
            .args(args)
            .env("ALIMENTO__STORAGE__DIR", dir.path())
            .output()
            .expect("Failed to run alimento");
        String::from_utf8_lossy(&output.stdout).into_owned()
    };

    assert!(run(&["favorites", "recipe", "2"]).contains("Added"));
    assert!(run(&["favorites", "list"]).contains("Quinoa Buddha Bowl"));
    assert!(run(&["favorites", "recipe", "2"]).contains("Removed"));
    assert!(run(&["favorites", "list"]).contains("No favorites yet"));

    Ok(())
}
