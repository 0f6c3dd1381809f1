use crate::data::checklist::{self, DrawingType};
use crate::mcp::errors;
use crate::scale;
use crate::tools::error_result;
use serde_json::{Value, json};

const DEFAULT_SCALE: &str = "1:50";

pub fn call(args: &Value) -> Value {
    let Some(description) = args.get("planDescription").and_then(|value| value.as_str()) else {
        return error_result(
            errors::INVALID_INPUT,
            "planDescription must be a string",
            None,
        );
    };
    // An unrecognized drawing type is not an error: it degrades to the
    // generic checklist, base recommendations and no type narrative.
    let plan_type_input = args.get("planType").and_then(|value| value.as_str());
    let drawing_type = match plan_type_input {
        None => Some(DrawingType::FloorPlan),
        Some(value) => DrawingType::parse(value),
    };
    let (type_tag, type_label) = match drawing_type {
        Some(drawing_type) => (drawing_type.as_str(), drawing_type.display_name()),
        None => {
            let raw = plan_type_input.unwrap_or_default();
            (raw, raw)
        }
    };
    let scale_input = args
        .get("scale")
        .and_then(|value| value.as_str())
        .unwrap_or(DEFAULT_SCALE);

    let lowered = description.to_lowercase();
    let narrative = narrative_for(drawing_type, &lowered);
    let elements = identify_elements(&lowered);
    let recommendations = recommendations_for(drawing_type);
    let merged = checklist::merged_checklist(drawing_type);

    let scale_meaning = match scale::resolve_scale(scale_input) {
        Ok(factor) => scale::explain_factor(factor),
        Err(_) => format!("{scale_input} (unknown scale)"),
    };

    let mut report = format!(
        "# Construction plan analysis\n\
        \n\
        ## Basics\n\
        - **Drawing type:** {}\n\
        - **Scale:** {scale_input}\n\
        - **Scale meaning:** {scale_meaning}\n\
        \n\
        ## Systematic analysis\n\
        {narrative}\n",
        type_label,
    );

    report.push_str("## Identified elements\n");
    if elements.is_empty() {
        report.push_str("No elements were recognized in the description.\n");
    } else {
        for element in &elements {
            report.push_str(&format!("- **{}:** {}\n", element.name, element.description));
        }
    }

    report.push_str("\n## Recommended follow-up\n");
    for recommendation in &recommendations {
        report.push_str(&format!("- {recommendation}\n"));
    }

    report.push_str(&format!(
        "\n## Checklist ({} per {})\n",
        merged.name, merged.standard
    ));
    for item in &merged.items {
        report.push_str(&format!("- [ ] {}\n", item.description));
    }

    let elements_json: Vec<Value> = elements
        .iter()
        .map(|element| {
            json!({
                "name": element.name,
                "description": element.description,
                "kind": element.kind
            })
        })
        .collect();
    let checklist_json: Vec<Value> = merged
        .items
        .iter()
        .map(|item| {
            json!({
                "id": item.id,
                "description": item.description,
                "critical": item.critical,
                "done": false
            })
        })
        .collect();

    json!({
        "content": [{"type": "text", "text": report}],
        "structuredContent": {
            "plan_type": type_tag,
            "scale": scale_input,
            "elements": elements_json,
            "recommendations": recommendations,
            "checklist": checklist_json
        },
        "isError": false
    })
}

struct Element {
    name: &'static str,
    description: &'static str,
    kind: &'static str,
}

fn identify_elements(description: &str) -> Vec<Element> {
    let mut elements = Vec::new();

    if description.contains("wall") {
        elements.push(Element {
            name: "Walls",
            description: "Load-bearing and partition structures, thick lines when cut",
            kind: "structure",
        });
    }
    if description.contains("window") {
        elements.push(Element {
            name: "Windows",
            description: "Window openings with frame and sill, dimensioned width/height(sill)",
            kind: "opening",
        });
    }
    if description.contains("door") {
        elements.push(Element {
            name: "Doors",
            description: "Door openings with the swing direction",
            kind: "opening",
        });
    }
    if description.contains("stair") {
        elements.push(Element {
            name: "Stairs",
            description: "Vertical circulation between storeys",
            kind: "circulation",
        });
    }

    elements
}

fn narrative_for(drawing_type: Option<DrawingType>, description: &str) -> String {
    let Some(drawing_type) = drawing_type else {
        return String::new();
    };
    match drawing_type {
        DrawingType::FloorPlan => floor_plan_narrative(description),
        DrawingType::Section => "### Section analysis\n\
            \n\
            **Vertical cut through the building:**\n\
            - Shows the storey heights\n\
            - Construction build-ups\n\
            - Level marks in metres (±0.000)\n\
            - The staircase and its structure\n"
            .to_string(),
        DrawingType::Elevation => "### Elevation analysis\n\
            \n\
            **View of the facade:**\n\
            - Architectural treatment\n\
            - Facade materials\n\
            - Proportions of the openings\n\
            - Roof construction\n"
            .to_string(),
        DrawingType::Detail => "### Detail analysis\n\
            \n\
            **Construction detail:**\n\
            - Large scale (1:10, 1:5)\n\
            - Exact construction solution\n\
            - Material build-ups\n\
            - Junctions between structures\n"
            .to_string(),
        DrawingType::SitePlan => "### Site plan analysis\n\
            \n\
            **Placement drawing:**\n\
            - Position of the building on the plot\n\
            - Setbacks from the boundaries\n\
            - Paved areas\n\
            - Earthworks\n"
            .to_string(),
    }
}

fn floor_plan_narrative(description: &str) -> String {
    let mut narrative = String::from("### Floor plan analysis\n\n");

    if description.contains("wall") {
        narrative.push_str(
            "**Walls:** load-bearing and partition walls identified.\n\
            - Thick lines mark walls cut by the section plane\n\
            - Different hatching marks different materials\n\n",
        );
    }
    if description.contains("window") || description.contains("door") {
        narrative.push_str(
            "**Openings:** windows or doors found.\n\
            - Windows: two parallel lines (frame) plus offset sill lines\n\
            - Dimensioned as width/height(sill)\n\n",
        );
    }
    if description.contains("dimension") {
        narrative.push_str(
            "**Dimensioning:** dimension annotations present.\n\
            - All lengths in millimetres\n\
            - Check the dimensioning for completeness\n\n",
        );
    }
    if description.contains("room") {
        narrative.push_str(
            "**Rooms:** interior spaces identified.\n\
            - Room numbers refer into the room schedule\n\
            - Check the areas and labels\n\n",
        );
    }

    narrative
}

fn recommendations_for(drawing_type: Option<DrawingType>) -> Vec<&'static str> {
    let mut recommendations = vec![
        "Check that dimensioning is complete",
        "Verify the stated scale",
        "Check the material legend",
    ];

    match drawing_type {
        Some(DrawingType::FloorPlan) => {
            recommendations.push("Verify the room schedule");
            recommendations.push("Check the section and elevation marks");
        }
        Some(DrawingType::Section) => {
            recommendations.push("Check the level marks");
            recommendations.push("Verify the construction build-ups");
        }
        _ => {}
    }

    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_floor_plan_at_1_to_50() {
        let args = json!({"planDescription": "walls with windows and a staircase"});
        let result = call(&args);
        assert_eq!(result["isError"], json!(false));
        let structured = &result["structuredContent"];
        assert_eq!(structured["plan_type"], json!("floorplan"));
        assert_eq!(structured["scale"], json!("1:50"));
    }

    #[test]
    fn recognizes_elements_from_keywords() {
        let args = json!({"planDescription": "walls with windows and a staircase"});
        let result = call(&args);
        let elements = result["structuredContent"]["elements"]
            .as_array()
            .expect("elements");
        let names: Vec<&str> = elements
            .iter()
            .filter_map(|element| element["name"].as_str())
            .collect();
        assert_eq!(names, vec!["Walls", "Windows", "Stairs"]);
    }

    #[test]
    fn merged_checklist_is_rendered_unchecked() {
        let args = json!({"planDescription": "anything", "planType": "section"});
        let result = call(&args);
        let text = result["content"][0]["text"].as_str().expect("text");
        assert!(text.contains("- [ ] Scale is stated and correct"));
        assert!(text.contains("- [ ] Level marks relative to ±0.000"));
        let checklist = result["structuredContent"]["checklist"]
            .as_array()
            .expect("checklist");
        assert_eq!(checklist.len(), 14);
        assert_eq!(checklist[0]["id"], json!("G001"));
    }

    #[test]
    fn unknown_scale_degrades_to_a_note() {
        let args = json!({"planDescription": "walls", "scale": "huge"});
        let result = call(&args);
        assert_eq!(result["isError"], json!(false));
        let text = result["content"][0]["text"].as_str().expect("text");
        assert!(text.contains("huge (unknown scale)"));
    }

    #[test]
    fn unknown_plan_type_degrades_to_generic_checklist() {
        let args = json!({"planDescription": "walls", "planType": "axonometry"});
        let result = call(&args);
        assert_eq!(result["isError"], json!(false));
        let structured = &result["structuredContent"];
        assert_eq!(structured["plan_type"], json!("axonometry"));
        // Generic items only, base recommendations only.
        let checklist = structured["checklist"].as_array().expect("checklist");
        assert_eq!(checklist.len(), 6);
        assert_eq!(checklist[0]["id"], json!("G001"));
        let recommendations = structured["recommendations"]
            .as_array()
            .expect("recommendations");
        assert_eq!(recommendations.len(), 3);
    }

    #[test]
    fn section_gets_type_specific_recommendations() {
        let args = json!({"planDescription": "concrete", "planType": "section"});
        let result = call(&args);
        let recommendations = result["structuredContent"]["recommendations"]
            .as_array()
            .expect("recommendations");
        assert!(
            recommendations
                .iter()
                .any(|item| item.as_str() == Some("Check the level marks"))
        );
    }
}
