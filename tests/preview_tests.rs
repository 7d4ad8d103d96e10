mod common;
use common::{Val, clk, temp_xlsx, write_source};
use predicates::prelude::*;
use predicates::str::contains;

#[test]
fn test_preview_prints_headers_and_rows() {
    let src = temp_xlsx("preview_basic_src");
    write_source(
        &src,
        &["Project", "Description", "Duration (h)"],
        &[
            vec![Val::Str("Alpha"), Val::Str("planning"), Val::Str("01:00:00")],
            vec![Val::Str("Beta"), Val::Str("review"), Val::Str("02:00:00")],
        ],
    );

    clk()
        .args(["preview", &src])
        .assert()
        .success()
        .stdout(contains("Project"))
        .stdout(contains("planning"))
        .stdout(contains("review"))
        .stdout(contains("Loaded 2 records"));
}

#[test]
fn test_preview_respects_row_limit() {
    let src = temp_xlsx("preview_limit_src");
    write_source(
        &src,
        &["Project", "Description"],
        &[
            vec![Val::Str("Alpha"), Val::Str("first-entry")],
            vec![Val::Str("Beta"), Val::Str("second-entry")],
        ],
    );

    clk()
        .args(["preview", &src, "--rows", "1"])
        .assert()
        .success()
        .stdout(contains("first-entry"))
        .stdout(contains("second-entry").not())
        .stdout(contains("Loaded 2 records"));
}

#[test]
fn test_preview_missing_file_fails() {
    clk()
        .args(["preview", "/nonexistent/clockify.xlsx"])
        .assert()
        .failure()
        .stderr(contains("Error:"));
}
