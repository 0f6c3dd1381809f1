use crate::mcp::errors;
use crate::scale::{self, DimensionResult, Unit};
use crate::tools::error_result;
use serde_json::{Value, json};

pub fn call(args: &Value) -> Value {
    let Some(drawing_dimension) = args.get("drawingDimension").and_then(|value| value.as_f64())
    else {
        return error_result(
            errors::INVALID_INPUT,
            "drawingDimension must be a number",
            None,
        );
    };
    let Some(scale_input) = args.get("scale").and_then(|value| value.as_str()) else {
        return error_result(errors::INVALID_INPUT, "scale must be a string", None);
    };
    let unit = match args.get("unit") {
        None => Unit::M,
        Some(value) => match value.as_str().and_then(Unit::parse) {
            Some(unit) => unit,
            None => {
                return error_result(errors::INVALID_INPUT, "unit must be mm, cm, or m", None);
            }
        },
    };

    let result = match scale::convert_dimension(drawing_dimension, scale_input, unit) {
        Ok(result) => result,
        Err(err) => return error_result(err.kind, err.message, Some("scale")),
    };

    let report = render_report(drawing_dimension, scale_input, &result);

    json!({
        "content": [{"type": "text", "text": report}],
        "structuredContent": {
            "real_dimension": result.real_dimension,
            "unit": result.unit.as_str(),
            "scale_factor": result.scale_factor,
            "conversions": {
                "mm": result.mm,
                "cm": result.cm,
                "m": result.m
            }
        },
        "isError": false
    })
}

fn render_report(drawing_dimension: f64, scale_input: &str, result: &DimensionResult) -> String {
    format!(
        "# Real dimension calculation\n\
        \n\
        ## Input\n\
        - **Dimension on the drawing:** {dim} cm\n\
        - **Scale:** {scale_input}\n\
        - **Scale factor:** 1:{factor}\n\
        \n\
        ## Result\n\
        - **Real dimension:** {real} {unit}\n\
        \n\
        ## All units\n\
        - **Millimetres:** {mm} mm\n\
        - **Centimetres:** {cm} cm\n\
        - **Metres:** {m} m\n\
        \n\
        ## Verification\n\
        ```\n\
        real dimension = dimension on the drawing x scale factor\n\
        {cm} cm = {dim} cm x {factor}\n\
        ```\n\
        \n\
        ## Scale meaning\n\
        The scale {scale_input} means:\n\
        - 1 cm on the drawing corresponds to {factor} cm in reality\n\
        - 1 mm on the drawing corresponds to {factor} mm in reality\n\
        \n\
        ## Common construction scales\n\
        - **1:50** - most floor plans and sections\n\
        - **1:100** - building elevations\n\
        - **1:200** - site plans\n\
        - **1:10, 1:20** - construction details\n\
        - **1:500, 1:1000** - urban studies\n\
        \n\
        {table}",
        dim = scale::format_value(drawing_dimension),
        factor = result.scale_factor,
        real = scale::format_value(result.real_dimension),
        unit = result.unit.as_str(),
        mm = scale::format_value(result.mm),
        cm = scale::format_value(result.cm),
        m = scale::format_value(result.m),
        table = reference_table(),
    )
}

fn reference_table() -> &'static str {
    "## Conversion table for common scales\n\
    \n\
    | Scale  | 1 cm on the drawing = | Typical use |\n\
    |--------|-----------------------|-------------|\n\
    | 1:10   | 10 cm = 0.1 m         | Details |\n\
    | 1:20   | 20 cm = 0.2 m         | Details |\n\
    | 1:50   | 50 cm = 0.5 m         | Floor plans, sections |\n\
    | 1:100  | 100 cm = 1.0 m        | Elevations |\n\
    | 1:200  | 200 cm = 2.0 m        | Site plans |\n\
    | 1:500  | 500 cm = 5.0 m        | Wider surroundings |\n\
    | 1:1000 | 1000 cm = 10.0 m      | Zoning plans |\n\
    \n\
    ## Quick checks\n\
    - **Scale 1:50:** multiply the drawing dimension by 50\n\
    - **Scale 1:100:** multiply the drawing dimension by 100\n\
    - **Sanity check:** the result should be plausible (a 4x3 m room, not 40x30 m)"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_unrounded_structured_values() {
        let args = json!({"drawingDimension": 5, "scale": "1:50"});
        let result = call(&args);
        assert_eq!(result["isError"], json!(false));
        let structured = &result["structuredContent"];
        assert_eq!(structured["real_dimension"], json!(2.5));
        assert_eq!(structured["scale_factor"], json!(50));
        assert_eq!(structured["conversions"]["mm"], json!(2500.0));
        assert_eq!(structured["conversions"]["cm"], json!(250.0));
        assert_eq!(structured["conversions"]["m"], json!(2.5));
    }

    #[test]
    fn honors_requested_unit() {
        let args = json!({"drawingDimension": 3.2, "scale": "1:100", "unit": "mm"});
        let result = call(&args);
        assert_eq!(result["structuredContent"]["real_dimension"], json!(3200.0));
        assert_eq!(result["structuredContent"]["unit"], json!("mm"));
    }

    #[test]
    fn report_uses_display_rounding() {
        let args = json!({"drawingDimension": 5, "scale": "1:50"});
        let result = call(&args);
        let text = result["content"][0]["text"].as_str().expect("text");
        assert!(text.contains("**Real dimension:** 2.5 m"));
        assert!(text.contains("**Centimetres:** 250 cm"));
    }

    #[test]
    fn invalid_scale_becomes_error_envelope() {
        let args = json!({"drawingDimension": 1, "scale": "2:1"});
        let result = call(&args);
        assert_eq!(result["isError"], json!(true));
        let kind = result["structuredContent"]["error"]["kind"]
            .as_str()
            .expect("kind");
        assert_eq!(kind, errors::INVALID_SCALE);
    }

    #[test]
    fn missing_dimension_is_invalid_input() {
        let args = json!({"scale": "1:50"});
        let result = call(&args);
        assert_eq!(result["isError"], json!(true));
        assert_eq!(
            result["structuredContent"]["error"]["kind"],
            json!(errors::INVALID_INPUT)
        );
    }

    #[test]
    fn rejects_unknown_unit() {
        let args = json!({"drawingDimension": 1, "scale": "1:50", "unit": "km"});
        let result = call(&args);
        assert_eq!(result["isError"], json!(true));
    }
}
