use serde_json::json;

pub const TOOL_ANALYZE_PLAN: &str = "plans.analyze_plan";
pub const TOOL_IDENTIFY_SYMBOLS: &str = "plans.identify_symbols";
pub const TOOL_CALCULATE_DIMENSIONS: &str = "plans.calculate_dimensions";
pub const TOOL_CHECK_STANDARDS: &str = "plans.check_standards";
pub const TOOL_GENERATE_REPORT: &str = "plans.generate_report";

pub fn analyze_plan_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "planDescription": {
                "type": "string",
                "description": "Free-text description of the drawing or the part under review"
            },
            "planType": {
                "type": "string",
                "enum": ["floorplan", "section", "elevation", "detail", "siteplan"],
                "description": "Drawing type, defaults to floorplan"
            },
            "scale": {
                "type": "string",
                "description": "Drawing scale, e.g. 1:50 or 1:100, defaults to 1:50"
            }
        },
        "required": ["planDescription"],
        "additionalProperties": false
    })
}

pub fn identify_symbols_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "symbols": {
                "type": "array",
                "items": { "type": "string" },
                "description": "Symbols or marks to identify"
            },
            "category": {
                "type": "string",
                "enum": ["structure", "materials", "installations", "dimensioning", "general"],
                "description": "Restrict matches to one symbol category"
            }
        },
        "required": ["symbols"],
        "additionalProperties": false
    })
}

pub fn calculate_dimensions_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "drawingDimension": {
                "type": "number",
                "description": "Dimension measured on the drawing, in cm"
            },
            "scale": {
                "type": "string",
                "description": "Drawing scale, e.g. 1:50 or 1:100"
            },
            "unit": {
                "type": "string",
                "enum": ["mm", "cm", "m"],
                "description": "Requested unit of the result",
                "default": "m"
            }
        },
        "required": ["drawingDimension", "scale"],
        "additionalProperties": false
    })
}

pub fn check_standards_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "element": {
                "type": "string",
                "description": "Building element or solution to check"
            },
            "standardType": {
                "type": "string",
                "enum": ["drafting", "structure", "materials", "safety"],
                "description": "Restrict the check to one standard kind"
            }
        },
        "required": ["element"],
        "additionalProperties": false
    })
}

pub fn generate_report_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "planData": {
                "type": "object",
                "description": "Data gathered from the plan analysis"
            },
            "reportType": {
                "type": "string",
                "enum": ["full", "summary", "checklist"],
                "description": "Report variant to render",
                "default": "full"
            }
        },
        "required": ["planData"],
        "additionalProperties": false
    })
}
