use std::process::Command;
use tempfile::tempdir;

#[test]
fn cli_generate_report_from_file() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let file_path = dir.path().join("plan.json");

    let plan_data = serde_json::json!({
        "plan_type": "floorplan",
        "scale": "1:50",
        "legend": true,
        "dimensioning": true,
        "checklist": [
            {"description": "Scale is stated", "done": true},
            {"description": "Legend is present", "done": false}
        ],
        "recommendations": ["Check the dimensions"]
    });
    std::fs::write(&file_path, serde_json::to_string_pretty(&plan_data)?)?;

    let output = Command::new(env!("CARGO_BIN_EXE_mcp-plans"))
        .args([
            "generate-report",
            "--plan-data-file",
            file_path.to_string_lossy().as_ref(),
            "--report-type",
            "summary",
        ])
        .output()?;

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("# Summary report - construction plan analysis"));
    assert!(stdout.contains("**Overall score:** 100/100"));
    assert!(stdout.contains("- Scale is stated"));
    assert!(stdout.contains("- Legend is present"));
    Ok(())
}

#[test]
fn cli_generate_report_inline_data() -> Result<(), Box<dyn std::error::Error>> {
    let output = Command::new(env!("CARGO_BIN_EXE_mcp-plans"))
        .args(["generate-report", "--plan-data", "{}"])
        .output()?;

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("# Complete construction plan analysis"));
    assert!(stdout.contains("**Drawing type:** not specified"));
    Ok(())
}

#[test]
fn cli_generate_report_rejects_bad_json() -> Result<(), Box<dyn std::error::Error>> {
    let output = Command::new(env!("CARGO_BIN_EXE_mcp-plans"))
        .args(["generate-report", "--plan-data", "not json"])
        .output()?;

    assert!(!output.status.success());
    Ok(())
}
