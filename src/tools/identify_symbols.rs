use crate::data::symbols::{self, SymbolCategory, SymbolRecord};
use crate::mcp::errors;
use crate::tools::error_result;
use serde_json::{Map, Value, json};

const UNRECOGNIZED_GROUP: &str = "Unidentified symbols";

pub fn call(args: &Value) -> Value {
    let Some(queries) = args.get("symbols").and_then(|value| value.as_array()) else {
        return error_result(
            errors::INVALID_INPUT,
            "symbols must be an array of strings",
            None,
        );
    };
    // An unrecognized category string leaves the results unfiltered.
    let category = args
        .get("category")
        .and_then(|value| value.as_str())
        .and_then(SymbolCategory::parse);

    let mut identified = Vec::new();
    for query in queries {
        let Some(query) = query.as_str() else {
            return error_result(
                errors::INVALID_INPUT,
                "symbols entries must be strings",
                None,
            );
        };

        let matches = symbols::find_symbols(query, category);
        if matches.is_empty() {
            identified.push(IdentifiedSymbol::unrecognized(query, category));
        } else {
            identified.extend(matches.into_iter().map(IdentifiedSymbol::from_record));
        }
    }

    let report = render_report(&identified);
    let structured: Vec<Value> = identified.iter().map(IdentifiedSymbol::to_json).collect();

    json!({
        "content": [{"type": "text", "text": report}],
        "structuredContent": {"symbols": structured},
        "isError": false
    })
}

struct IdentifiedSymbol {
    name: String,
    description: String,
    group: &'static str,
    category: Option<SymbolCategory>,
    standard: Option<String>,
    graphic: Option<String>,
    note: Option<String>,
}

impl IdentifiedSymbol {
    fn from_record(record: &'static SymbolRecord) -> Self {
        Self {
            name: record.name.to_string(),
            description: record.description.to_string(),
            group: record.category.display_name(),
            category: Some(record.category),
            standard: record.standard.map(str::to_string),
            graphic: record.graphic.map(str::to_string),
            note: record.note.map(str::to_string),
        }
    }

    /// Fallback record carrying the original query, returned when nothing in
    /// the table matches.
    fn unrecognized(query: &str, category: Option<SymbolCategory>) -> Self {
        Self {
            name: query.to_string(),
            description: "The symbol was not recognized".to_string(),
            group: category.map_or(UNRECOGNIZED_GROUP, SymbolCategory::display_name),
            category,
            standard: None,
            graphic: None,
            note: Some(
                "Consult the project documentation or the governing standards".to_string(),
            ),
        }
    }

    fn to_json(&self) -> Value {
        let mut map = Map::new();
        map.insert("name".to_string(), json!(self.name));
        map.insert("description".to_string(), json!(self.description));
        map.insert(
            "category".to_string(),
            json!(self.category.map(SymbolCategory::as_str)),
        );
        if let Some(standard) = &self.standard {
            map.insert("standard".to_string(), json!(standard));
        }
        if let Some(graphic) = &self.graphic {
            map.insert("graphic".to_string(), json!(graphic));
        }
        if let Some(note) = &self.note {
            map.insert("note".to_string(), json!(note));
        }
        Value::Object(map)
    }
}

fn render_report(identified: &[IdentifiedSymbol]) -> String {
    if identified.is_empty() {
        return "# Symbol identification\n\nNo symbols were identified.".to_string();
    }

    let mut report = String::from("# Construction symbol identification\n\n");

    // Group by category label, keeping first-appearance order.
    let mut groups: Vec<(&str, Vec<&IdentifiedSymbol>)> = Vec::new();
    for symbol in identified {
        match groups.iter_mut().find(|(label, _)| *label == symbol.group) {
            Some((_, members)) => members.push(symbol),
            None => groups.push((symbol.group, vec![symbol])),
        }
    }

    for (label, members) in groups {
        report.push_str(&format!("## {label}\n\n"));
        for symbol in members {
            report.push_str(&format!("### {}\n", symbol.name));
            report.push_str(&format!("**Description:** {}\n\n", symbol.description));
            if let Some(graphic) = &symbol.graphic {
                report.push_str(&format!("**Graphic form:** {graphic}\n\n"));
            }
            if let Some(standard) = &symbol.standard {
                report.push_str(&format!("**Standard:** {standard}\n\n"));
            }
            if let Some(note) = &symbol.note {
                report.push_str(&format!("**Note:** {note}\n\n"));
            }
            report.push_str("---\n\n");
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collects_every_match_for_a_query() {
        let args = json!({"symbols": ["window"]});
        let result = call(&args);
        assert_eq!(result["isError"], json!(false));
        let matched = result["structuredContent"]["symbols"]
            .as_array()
            .expect("symbols");
        let names: Vec<&str> = matched
            .iter()
            .filter_map(|symbol| symbol["name"].as_str())
            .collect();
        assert!(names.contains(&"Window in plan view"));
        assert!(names.contains(&"Window in section"));
        assert!(names.contains(&"French window"));
    }

    #[test]
    fn unmatched_query_yields_single_fallback() {
        let args = json!({"symbols": ["xyzzy"]});
        let result = call(&args);
        let matched = result["structuredContent"]["symbols"]
            .as_array()
            .expect("symbols");
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0]["name"], json!("xyzzy"));
        assert!(
            matched[0]["note"]
                .as_str()
                .expect("note")
                .contains("Consult")
        );
    }

    #[test]
    fn category_filter_can_force_the_fallback() {
        // "line" hits structure and dimensioning keys but nothing in materials.
        let args = json!({"symbols": ["line"], "category": "materials"});
        let result = call(&args);
        let matched = result["structuredContent"]["symbols"]
            .as_array()
            .expect("symbols");
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0]["category"], json!("materials"));
    }

    #[test]
    fn empty_input_renders_empty_report() {
        let args = json!({"symbols": []});
        let result = call(&args);
        let text = result["content"][0]["text"].as_str().expect("text");
        assert!(text.contains("No symbols were identified"));
    }

    #[test]
    fn report_groups_by_category() {
        let args = json!({"symbols": ["brick", "north_arrow"]});
        let result = call(&args);
        let text = result["content"][0]["text"].as_str().expect("text");
        assert!(text.contains("## Material hatching"));
        assert!(text.contains("## General marks"));
    }

    #[test]
    fn unknown_category_leaves_results_unfiltered() {
        let args = json!({"symbols": ["brick"], "category": "plumbing"});
        let result = call(&args);
        assert_eq!(result["isError"], json!(false));
        let matched = result["structuredContent"]["symbols"]
            .as_array()
            .expect("symbols");
        assert_eq!(
            matched[0]["name"],
            json!("Fired brick masonry")
        );
    }

    #[test]
    fn rejects_non_string_entries() {
        let args = json!({"symbols": [42]});
        let result = call(&args);
        assert_eq!(result["isError"], json!(true));
    }
}
