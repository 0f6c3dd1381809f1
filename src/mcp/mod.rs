use serde_json::json;

pub mod contracts;
pub mod errors;

pub fn tool_definitions() -> Vec<serde_json::Value> {
    vec![
        json!({
            "name": contracts::TOOL_ANALYZE_PLAN,
            "description": "Systematic analysis of a construction drawing description against Czech ČSN drafting conventions.",
            "inputSchema": contracts::analyze_plan_schema()
        }),
        json!({
            "name": contracts::TOOL_IDENTIFY_SYMBOLS,
            "description": "Identify drafting symbols and marks used on Czech construction drawings.",
            "inputSchema": contracts::identify_symbols_schema()
        }),
        json!({
            "name": contracts::TOOL_CALCULATE_DIMENSIONS,
            "description": "Convert a dimension measured on the drawing into real-world units using the drawing scale.",
            "inputSchema": contracts::calculate_dimensions_schema()
        }),
        json!({
            "name": contracts::TOOL_CHECK_STANDARDS,
            "description": "Check a building element against the applicable Czech ČSN standards.",
            "inputSchema": contracts::check_standards_schema()
        }),
        json!({
            "name": contracts::TOOL_GENERATE_REPORT,
            "description": "Render a structured markdown report from previously gathered plan data.",
            "inputSchema": contracts::generate_report_schema()
        }),
    ]
}
