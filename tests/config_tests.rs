mod common;
use common::clk;
use predicates::str::contains;
use std::env;
use std::fs;

#[test]
fn test_init_writes_config_and_print_shows_defaults() {
    let mut home = env::temp_dir();
    home.push("clockify_report_config_home");
    fs::create_dir_all(&home).unwrap();
    let home = home.to_string_lossy().to_string();

    clk()
        .env("HOME", &home)
        .env("APPDATA", &home)
        .arg("init")
        .assert()
        .success()
        .stdout(contains("Config file:"));

    clk()
        .env("HOME", &home)
        .env("APPDATA", &home)
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(contains("projects_file: projects.xlsx"))
        .stdout(contains("hr_file: hr.xlsx"))
        .stdout(contains("preview_rows: 100"));
}
