//! Report line-structure assertions - the text format is a scraping contract

use super::helpers::{check_workspace, workspace_with_files, write_manifest};

const MANIFEST: &str = r#"
version = 1
title = "Delivery Validation"

[[stage]]
name = "Stage 1: Core"

[[stage.check]]
description = "Library module"
path = "src/lib.rs"

[[stage.check]]
description = "Missing piece"
path = "src/missing.rs"

[[stage]]
name = "Stage 2: Docs"

[[stage.check]]
description = "README"
path = "README.md"
"#;

fn render() -> String {
    let workspace = workspace_with_files(&["src/lib.rs", "README.md"]);
    let manifest_path = write_manifest(workspace.path(), MANIFEST);
    let (_, output, _) = check_workspace(&manifest_path, workspace.path());
    output
}

#[test]
fn test_banner_lines_are_sixty_equals() {
    let output = render();
    let banners: Vec<_> = output
        .lines()
        .filter(|l| l.chars().all(|c| c == '=') && !l.is_empty())
        .collect();
    // Header pair, summary pair, final pair
    assert_eq!(banners.len(), 6);
    assert!(banners.iter().all(|l| l.len() == 60));
}

#[test]
fn test_header_is_banner_title_banner() {
    let output = render();
    let lines: Vec<_> = output.lines().collect();
    assert_eq!(lines[0], "=".repeat(60));
    assert_eq!(lines[1], "Delivery Validation");
    assert_eq!(lines[2], "=".repeat(60));
}

#[test]
fn test_stage_headers_preceded_by_blank_line() {
    let output = render();
    let lines: Vec<_> = output.lines().collect();
    for (idx, line) in lines.iter().enumerate() {
        if line.starts_with("=== ") {
            assert!(idx > 0, "stage header cannot be the first line");
            assert_eq!(lines[idx - 1], "", "blank line expected before {line}");
        }
    }
}

#[test]
fn test_rendered_check_lines_match_manifest_count() {
    let output = render();
    let check_lines = output
        .lines()
        .filter(|l| {
            (l.starts_with("✓ ") || l.starts_with("✗ ")) && l.contains(": ")
        })
        .count();
    // MANIFEST declares three checks
    assert_eq!(check_lines, 3);
}

#[test]
fn test_summary_section_layout_and_order() {
    let output = render();
    let summary_title = output.find("Validation Summary").unwrap();
    let stage_one = output[summary_title..].find("Stage 1: Core: ✗ FAIL").unwrap();
    let stage_two = output[summary_title..].find("Stage 2: Docs: ✓ PASS").unwrap();
    assert!(stage_one < stage_two);
}

#[test]
fn test_stage_and_check_order_matches_declaration() {
    let output = render();
    let positions: Vec<_> = [
        "=== Stage 1: Core ===",
        "✓ Library module: src/lib.rs",
        "✗ Missing piece: src/missing.rs NOT FOUND",
        "=== Stage 2: Docs ===",
        "✓ README: README.md",
    ]
    .iter()
    .map(|needle| output.find(needle).unwrap_or_else(|| panic!("missing: {needle}")))
    .collect();

    let mut sorted = positions.clone();
    sorted.sort_unstable();
    assert_eq!(positions, sorted);
}
