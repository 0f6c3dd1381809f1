use crate::data::standards::{self, StandardKind, StandardRecord};
use crate::mcp::errors;
use crate::tools::error_result;
use serde_json::{Value, json};

pub fn call(args: &Value) -> Value {
    let Some(element) = args.get("element").and_then(|value| value.as_str()) else {
        return error_result(errors::INVALID_INPUT, "element must be a string", None);
    };
    // An unrecognized standard kind leaves the lookup unfiltered.
    let kind = args
        .get("standardType")
        .and_then(|value| value.as_str())
        .and_then(StandardKind::parse);

    let matches = standards::find_standards(element, kind);
    let fallback = matches.is_empty();
    let checks: Vec<&'static StandardRecord> = if fallback {
        vec![standards::general_standard(kind)]
    } else {
        matches
    };

    let report = render_report(element, &checks);
    let structured: Vec<Value> = checks
        .iter()
        .map(|check| {
            json!({
                "standard": check.standard,
                "title": check.title,
                "kind": check.kind.as_str(),
                "requirements": check.requirements,
                "recommendations": check.recommendations
            })
        })
        .collect();

    json!({
        "content": [{"type": "text", "text": report}],
        "structuredContent": {"checks": structured, "fallback": fallback},
        "isError": false
    })
}

fn render_report(element: &str, checks: &[&StandardRecord]) -> String {
    let mut report = String::from("# Compliance check against Czech ČSN standards\n\n");
    report.push_str(&format!("**Checked element:** {element}\n\n"));

    for check in checks {
        report.push_str(&format!("## {}\n", check.standard));
        report.push_str(&format!("{}\n\n", check.title));

        report.push_str("### Requirements\n");
        for requirement in check.requirements {
            report.push_str(&format!("- [ ] {requirement}\n"));
        }
        report.push('\n');

        report.push_str("### Recommendations\n");
        for recommendation in check.recommendations {
            report.push_str(&format!("- {recommendation}\n"));
        }
        report.push('\n');

        report.push_str("---\n\n");
    }

    report.push_str(
        "## Useful references\n\
        - [Czech Office for Standards, Metrology and Testing](https://www.unmz.cz/)\n\
        - [Czech technical standards](https://www.technicke-normy-csn.cz/)\n\
        - [Building act and decrees](https://www.mmr.cz/)\n",
    );

    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_element_keyword() {
        let args = json!({"element": "stairs"});
        let result = call(&args);
        assert_eq!(result["isError"], json!(false));
        let text = result["content"][0]["text"].as_str().expect("text");
        assert!(text.contains("ČSN 73 4130"));
        assert!(text.contains("- [ ] Minimum width 900 mm in residential buildings"));
        assert_eq!(result["structuredContent"]["fallback"], json!(false));
    }

    #[test]
    fn collects_multiple_matches() {
        let args = json!({"element": "floor plan with a section mark"});
        let result = call(&args);
        let checks = result["structuredContent"]["checks"]
            .as_array()
            .expect("checks");
        assert!(checks.len() >= 2);
    }

    #[test]
    fn falls_back_to_generic_standard() {
        let args = json!({"element": "qqqq"});
        let result = call(&args);
        let checks = result["structuredContent"]["checks"]
            .as_array()
            .expect("checks");
        assert_eq!(checks.len(), 1);
        assert_eq!(checks[0]["standard"], json!("ČSN 01 3420"));
        assert_eq!(result["structuredContent"]["fallback"], json!(true));
    }

    #[test]
    fn fallback_respects_structure_kind() {
        let args = json!({"element": "qqqq", "standardType": "structure"});
        let result = call(&args);
        let checks = result["structuredContent"]["checks"]
            .as_array()
            .expect("checks");
        assert_eq!(checks[0]["kind"], json!("structure"));
    }

    #[test]
    fn kind_filter_narrows_matches() {
        let args = json!({"element": "window", "standardType": "safety"});
        let result = call(&args);
        // "window" only matches a structure-kind record, so safety falls back.
        assert_eq!(result["structuredContent"]["fallback"], json!(true));
    }

    #[test]
    fn unknown_kind_leaves_lookup_unfiltered() {
        let args = json!({"element": "stairs", "standardType": "plumbing"});
        let result = call(&args);
        assert_eq!(result["isError"], json!(false));
        let checks = result["structuredContent"]["checks"]
            .as_array()
            .expect("checks");
        assert!(
            checks
                .iter()
                .any(|check| check["standard"] == json!("ČSN 73 4130"))
        );
        assert_eq!(result["structuredContent"]["fallback"], json!(false));
    }

    #[test]
    fn report_always_carries_references() {
        let args = json!({"element": "concrete"});
        let result = call(&args);
        let text = result["content"][0]["text"].as_str().expect("text");
        assert!(text.contains("## Useful references"));
    }

    #[test]
    fn missing_element_is_invalid_input() {
        let args = json!({});
        let result = call(&args);
        assert_eq!(result["isError"], json!(true));
    }
}
