use std::io::{BufRead, BufReader, Write};
use std::process::{Command, Stdio};

#[test]
fn identify_symbols_round_trip() -> Result<(), Box<dyn std::error::Error>> {
    let mut child = Command::new(env!("CARGO_BIN_EXE_mcp-plans"))
        .args(["serve", "--stdio"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()?;

    let mut stdin = child.stdin.take().expect("stdin available");
    let mut stdout = BufReader::new(child.stdout.take().expect("stdout available"));

    let request = serde_json::json!({
        "jsonrpc": "2.0",
        "id": 4,
        "method": "tools/call",
        "params": {
            "name": "plans.identify_symbols",
            "arguments": {
                "symbols": ["brick", "xyzzy"]
            }
        }
    });
    let serialized = serde_json::to_string(&request)?;
    writeln!(stdin, "{serialized}")?;
    stdin.flush()?;

    let mut line = String::new();
    stdout.read_line(&mut line)?;
    let response: serde_json::Value = serde_json::from_str(line.trim())?;

    let result = response.get("result").expect("result present");
    assert_eq!(result.get("isError").and_then(|v| v.as_bool()), Some(false));

    let symbols = result
        .get("structuredContent")
        .and_then(|value| value.get("symbols"))
        .and_then(|value| value.as_array())
        .expect("symbols present");
    assert_eq!(symbols.len(), 2);
    assert_eq!(
        symbols[0].get("name").and_then(|v| v.as_str()),
        Some("Fired brick masonry")
    );
    // The unknown query comes back as a fallback entry carrying the query.
    assert_eq!(
        symbols[1].get("name").and_then(|v| v.as_str()),
        Some("xyzzy")
    );

    let text = result
        .get("content")
        .and_then(|value| value.as_array())
        .and_then(|arr| arr.first())
        .and_then(|value| value.get("text"))
        .and_then(|value| value.as_str())
        .expect("text present");
    assert!(text.contains("## Material hatching"));
    assert!(text.contains("## Unidentified symbols"));

    let _ = child.kill();
    Ok(())
}
