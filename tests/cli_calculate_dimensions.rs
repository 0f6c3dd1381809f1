use std::process::Command;

#[test]
fn cli_calculate_dimensions_prints_report() -> Result<(), Box<dyn std::error::Error>> {
    let output = Command::new(env!("CARGO_BIN_EXE_mcp-plans"))
        .args(["calculate-dimensions", "--dimension", "5", "--scale", "1:50"])
        .output()?;

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("**Real dimension:** 2.5 m"));
    assert!(stdout.contains("## Conversion table for common scales"));
    Ok(())
}

#[test]
fn cli_calculate_dimensions_json_output() -> Result<(), Box<dyn std::error::Error>> {
    let output = Command::new(env!("CARGO_BIN_EXE_mcp-plans"))
        .args([
            "calculate-dimensions",
            "--dimension",
            "3.2",
            "--scale",
            "1:100",
            "--unit",
            "mm",
            "--json",
        ])
        .output()?;

    assert!(output.status.success());
    let structured: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(structured["real_dimension"], serde_json::json!(3200.0));
    assert_eq!(structured["unit"], serde_json::json!("mm"));
    assert_eq!(structured["scale_factor"], serde_json::json!(100));
    Ok(())
}

#[test]
fn cli_calculate_dimensions_rejects_bad_scale() -> Result<(), Box<dyn std::error::Error>> {
    let output = Command::new(env!("CARGO_BIN_EXE_mcp-plans"))
        .args(["calculate-dimensions", "--dimension", "5", "--scale", "abc"])
        .output()?;

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("scale"));
    Ok(())
}
