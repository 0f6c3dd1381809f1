use crate::data::checklist::{self, DrawingType};
use crate::mcp::errors;
use crate::scale;
use crate::tools::error_result;
use serde_json::{Map, Value, json};
use std::collections::HashMap;

const NOT_SPECIFIED: &str = "not specified";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ReportType {
    Full,
    Summary,
    Checklist,
}

impl ReportType {
    fn parse(value: &str) -> Option<Self> {
        match value {
            "full" => Some(ReportType::Full),
            "summary" => Some(ReportType::Summary),
            "checklist" => Some(ReportType::Checklist),
            _ => None,
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            ReportType::Full => "full",
            ReportType::Summary => "summary",
            ReportType::Checklist => "checklist",
        }
    }
}

pub fn call(args: &Value) -> Value {
    let Some(plan_data) = args.get("planData").and_then(|value| value.as_object()) else {
        return error_result(errors::INVALID_INPUT, "planData must be an object", None);
    };
    let report_type = match args.get("reportType") {
        None => ReportType::Full,
        Some(value) => match value.as_str().and_then(ReportType::parse) {
            Some(report_type) => report_type,
            None => {
                return error_result(
                    errors::INVALID_INPUT,
                    "reportType must be full, summary, or checklist",
                    None,
                );
            }
        },
    };

    let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M").to_string();
    let report = match report_type {
        ReportType::Full => full_report(plan_data, &timestamp),
        ReportType::Summary => summary_report(plan_data, &timestamp),
        ReportType::Checklist => checklist_report(plan_data, &timestamp),
    };

    json!({
        "content": [{"type": "text", "text": report}],
        "structuredContent": {
            "report_type": report_type.as_str(),
            "generated": timestamp
        },
        "isError": false
    })
}

fn text_field<'a>(plan_data: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    plan_data.get(key).and_then(|value| value.as_str())
}

fn field_or_placeholder<'a>(plan_data: &'a Map<String, Value>, key: &str) -> &'a str {
    text_field(plan_data, key).unwrap_or(NOT_SPECIFIED)
}

/// Presence check for flag-like fields: `false`, `null`, `0` and the empty
/// string all count as absent.
fn flag_set(plan_data: &Map<String, Value>, key: &str) -> bool {
    match plan_data.get(key) {
        None | Some(Value::Null) => false,
        Some(Value::Bool(flag)) => *flag,
        Some(Value::String(text)) => !text.is_empty(),
        Some(Value::Number(number)) => number.as_f64() != Some(0.0),
        Some(_) => true,
    }
}

struct ChecklistEntry {
    id: Option<String>,
    description: String,
    done: bool,
}

fn checklist_entries(plan_data: &Map<String, Value>) -> Vec<ChecklistEntry> {
    let Some(items) = plan_data.get("checklist").and_then(|value| value.as_array()) else {
        return Vec::new();
    };
    items
        .iter()
        .filter_map(|item| {
            let description = item.get("description")?.as_str()?.to_string();
            let done = item
                .get("done")
                .and_then(|value| value.as_bool())
                .unwrap_or(false);
            let id = item
                .get("id")
                .and_then(|value| value.as_str())
                .map(str::to_string);
            Some(ChecklistEntry {
                id,
                description,
                done,
            })
        })
        .collect()
}

fn recommendation_list(plan_data: &Map<String, Value>) -> Vec<&str> {
    plan_data
        .get("recommendations")
        .and_then(|value| value.as_array())
        .map(|items| {
            items
                .iter()
                .filter_map(|item| item.as_str())
                .collect::<Vec<_>>()
        })
        .unwrap_or_default()
}

/// Quality score out of 100: base 50, plus 10 for each of scale, legend and
/// dimensioning being present, plus 20 when any checklist item is done.
fn quality_score(plan_data: &Map<String, Value>) -> u32 {
    let mut score = 50;
    if flag_set(plan_data, "scale") {
        score += 10;
    }
    if flag_set(plan_data, "legend") {
        score += 10;
    }
    if flag_set(plan_data, "dimensioning") {
        score += 10;
    }
    if checklist_entries(plan_data).iter().any(|entry| entry.done) {
        score += 20;
    }
    score.min(100)
}

fn full_report(plan_data: &Map<String, Value>, timestamp: &str) -> String {
    let mut report = format!(
        "# Complete construction plan analysis\n\
        \n\
        **Generated:** {timestamp}\n\
        \n\
        ## Basics\n\
        - **Drawing type:** {plan_type}\n\
        - **Scale:** {scale}\n\
        - **Sheet format:** {format}\n\
        - **Designer:** {designer}\n\
        - **Date:** {date}\n\
        \n",
        plan_type = field_or_placeholder(plan_data, "plan_type"),
        scale = field_or_placeholder(plan_data, "scale"),
        format = field_or_placeholder(plan_data, "format"),
        designer = field_or_placeholder(plan_data, "designer"),
        date = field_or_placeholder(plan_data, "date"),
    );

    report.push_str("## Systematic analysis\n");
    match text_field(plan_data, "analysis") {
        Some(analysis) => report.push_str(&format!("{analysis}\n\n")),
        None => report.push_str(
            "No systematic analysis was provided. Run the plans.analyze_plan tool \
            for a detailed breakdown.\n\n",
        ),
    }

    report.push_str("## Identified elements\n");
    let elements = plan_data
        .get("elements")
        .and_then(|value| value.as_array())
        .filter(|items| !items.is_empty());
    match elements {
        Some(items) => {
            for element in items {
                let name = element
                    .get("name")
                    .and_then(|value| value.as_str())
                    .unwrap_or(NOT_SPECIFIED);
                let kind = element
                    .get("kind")
                    .and_then(|value| value.as_str())
                    .unwrap_or(NOT_SPECIFIED);
                let description = element
                    .get("description")
                    .and_then(|value| value.as_str())
                    .unwrap_or(NOT_SPECIFIED);
                report.push_str(&format!(
                    "### {name}\n- **Kind:** {kind}\n- **Description:** {description}\n\n"
                ));
            }
        }
        None => report.push_str("No structural elements were identified.\n\n"),
    }

    report.push_str("## Dimensional analysis\n");
    match text_field(plan_data, "dimensions") {
        Some(dimensions) => report.push_str(&format!("{dimensions}\n\n")),
        None => report.push_str(
            "Use the plans.calculate_dimensions tool with dimensions taken from \
            the drawing.\n\n",
        ),
    }

    report.push_str(&scale_conversions(plan_data));

    report.push_str("## Standards compliance\n");
    match text_field(plan_data, "standards") {
        Some(standards) => report.push_str(&format!("{standards}\n\n")),
        None => report.push_str(
            "No standards check was performed. Use the plans.check_standards tool \
            on the individual elements.\n\n",
        ),
    }

    report.push_str("## Checklist\n");
    let entries = checklist_entries(plan_data);
    if entries.is_empty() {
        report.push_str("No checklist was generated.\n\n");
    } else {
        for entry in &entries {
            let mark = if entry.done { 'x' } else { ' ' };
            report.push_str(&format!("- [{mark}] {}\n", entry.description));
        }
        report.push('\n');
    }

    report.push_str("## Recommendations\n");
    let recommendations = recommendation_list(plan_data);
    if recommendations.is_empty() {
        report.push_str("No specific recommendations were generated.\n\n");
    } else {
        for recommendation in &recommendations {
            report.push_str(&format!("- {recommendation}\n"));
        }
        report.push('\n');
    }

    report.push_str("## Outstanding issues\n");
    report.push_str(&outstanding_issues(plan_data));

    report.push_str(
        "\n## Attachments\n\
        - Original plan (reference)\n\
        - Bill of materials\n\
        - Dimensioning scheme\n\
        - Details of problem areas\n\
        - Complete checklist\n\
        \n\
        ---\n\
        *Generated by the mcp-plans construction plan analyzer*\n",
    );

    report
}

fn scale_conversions(plan_data: &Map<String, Value>) -> String {
    let scale_input = text_field(plan_data, "scale").unwrap_or("1:50");
    // f64 keeps the table safe for arbitrarily large denominators.
    let factor = f64::from(scale::resolve_scale(scale_input).unwrap_or(50));

    format!(
        "## Scale conversions\n\
        \n\
        ### Quick conversions for scale {scale_input}\n\
        \n\
        | On the drawing | In reality |\n\
        |----------------|------------|\n\
        | 1 cm           | {} cm |\n\
        | 2 cm           | {} cm |\n\
        | 5 cm           | {} cm |\n\
        | 10 cm          | {} cm |\n\
        \n",
        scale::format_value(factor),
        scale::format_value(factor * 2.0),
        scale::format_value(factor * 5.0),
        scale::format_value(factor * 10.0),
    )
}

fn outstanding_issues(plan_data: &Map<String, Value>) -> String {
    let mut issues = Vec::new();
    if !flag_set(plan_data, "scale") {
        issues.push("- Scale is not specified");
    }
    if !flag_set(plan_data, "legend") {
        issues.push("- The material legend is missing");
    }
    if !flag_set(plan_data, "dimensioning") {
        issues.push("- Dimensioning is incomplete");
    }

    if issues.is_empty() {
        "No significant issues were identified.\n".to_string()
    } else {
        let mut out = issues.join("\n");
        out.push('\n');
        out
    }
}

fn summary_report(plan_data: &Map<String, Value>, timestamp: &str) -> String {
    let score = quality_score(plan_data);
    let entries = checklist_entries(plan_data);
    let recommendations = recommendation_list(plan_data);

    let mut report = format!(
        "# Summary report - construction plan analysis\n\
        \n\
        **Generated:** {timestamp}\n\
        \n\
        ## Key findings\n\
        - **Drawing type:** {plan_type}\n\
        - **Overall quality:** {quality}\n\
        - **Main problem areas:** {problems}\n\
        \n",
        plan_type = field_or_placeholder(plan_data, "plan_type"),
        quality = quality_label(score),
        problems = problem_areas(plan_data),
    );

    report.push_str("## Completed requirements\n");
    let completed: Vec<&ChecklistEntry> = entries.iter().filter(|entry| entry.done).collect();
    if completed.is_empty() {
        report.push_str("- No automatically checked requirement is completed\n");
    } else {
        for entry in completed {
            report.push_str(&format!("- {}\n", entry.description));
        }
    }

    report.push_str("\n## Outstanding requirements\n");
    let outstanding: Vec<&ChecklistEntry> = entries.iter().filter(|entry| !entry.done).collect();
    if outstanding.is_empty() {
        report.push_str("- All checked requirements are completed\n");
    } else {
        for entry in outstanding {
            report.push_str(&format!("- {}\n", entry.description));
        }
    }

    report.push_str("\n## Top recommendations\n");
    if recommendations.is_empty() {
        report.push_str("- Run the analysis tools on the individual elements\n");
    } else {
        for recommendation in recommendations.iter().take(3) {
            report.push_str(&format!("- {recommendation}\n"));
        }
    }

    report.push_str(&format!(
        "\n## Quality assessment\n\
        \n\
        **Overall score:** {score}/100\n\
        \n\
        {grade}\n\
        \n\
        ---\n\
        *Summary report - mcp-plans construction plan analyzer*\n",
        grade = score_grade(score),
    ));

    report
}

fn quality_label(score: u32) -> &'static str {
    if score >= 80 {
        "High"
    } else if score >= 60 {
        "Medium"
    } else {
        "Low"
    }
}

fn problem_areas(plan_data: &Map<String, Value>) -> String {
    let mut areas = Vec::new();
    if !flag_set(plan_data, "dimensioning") {
        areas.push("dimensioning");
    }
    if !flag_set(plan_data, "legend") {
        areas.push("material legend");
    }
    if areas.is_empty() {
        "none identified".to_string()
    } else {
        areas.join(", ")
    }
}

fn score_grade(score: u32) -> &'static str {
    if score >= 90 {
        "Excellent quality"
    } else if score >= 70 {
        "Good quality"
    } else if score >= 50 {
        "Acceptable quality"
    } else {
        "Unsatisfactory quality"
    }
}

fn checklist_report(plan_data: &Map<String, Value>, timestamp: &str) -> String {
    let mut report = format!(
        "# Checklist report - construction plan\n\
        \n\
        **Checked:** {timestamp}\n\
        \n\
        ## Formal requirements\n\
        - [ ] Sheet format follows the standard\n\
        - [ ] Scale is stated and correct\n\
        - [ ] Material legend is present\n\
        - [ ] Title block stamped and signed\n\
        - [ ] Creation or revision date stated\n\
        \n\
        ## Structural checks\n\
        - [ ] All structures are dimensioned\n\
        - [ ] Materials are specified\n\
        - [ ] Details are sufficiently thorough\n\
        - [ ] Junctions between structures are resolved\n\
        \n\
        ## Dimensional checks\n\
        - [ ] Dimensioning is complete and correct\n\
        - [ ] Running dimensions add up\n\
        - [ ] Level marks are stated\n\
        - [ ] Tolerances are specified\n\
        \n\
        ## Standards checks\n\
        - [ ] ČSN 01 3420 (drafting) satisfied\n\
        - [ ] Fire safety per ČSN 73 0802\n\
        - [ ] Thermal protection per ČSN 73 0540\n\
        - [ ] Accessibility per Decree 398/2009 Coll.\n\
        \n",
    );

    report.push_str("## Overall assessment\n");
    report.push_str(&overall_assessment(plan_data));

    report.push_str(
        "\n## Action plan\n\
        1. **Immediately:** add the missing basic data\n\
        2. **Within a week:** check dimensioning and sizes\n\
        3. **Within a month:** run a full design review\n\
        4. **Continuously:** track review comments\n\
        \n\
        ---\n\
        *Checklist report - mcp-plans construction plan analyzer*\n",
    );

    report
}

fn overall_assessment(plan_data: &Map<String, Value>) -> String {
    let entries = checklist_entries(plan_data);
    let completion_pct = if entries.is_empty() {
        0
    } else {
        let done = entries.iter().filter(|entry| entry.done).count();
        (done as f64 / entries.len() as f64 * 100.0).round() as u32
    };

    let score = quality_score(plan_data);
    let recommendations = recommendation_list(plan_data);
    let main_recommendation = recommendations
        .first()
        .copied()
        .unwrap_or("Run a complete plan analysis");
    let priority = if score < 50 {
        "High"
    } else if score < 70 {
        "Medium"
    } else {
        "Low"
    };

    let mut out = format!(
        "- **Completion rate:** {completion_pct}%\n\
        - **Recommendation:** {main_recommendation}\n\
        - **Priority:** {priority}\n",
    );

    // When the entries carry ids and the drawing type is known, the merged
    // checklist can be graded properly, critical items first.
    let drawing_type = text_field(plan_data, "plan_type").and_then(DrawingType::parse);
    if let Some(drawing_type) = drawing_type
        && entries.iter().any(|entry| entry.id.is_some())
    {
        let merged = checklist::merged_checklist(Some(drawing_type));
        let completed: HashMap<String, bool> = entries
            .iter()
            .filter_map(|entry| entry.id.clone().map(|id| (id, entry.done)))
            .collect();
        let summary = checklist::summarize(&merged, &completed);
        out.push_str(&format!(
            "- **Grade:** {label} ({color}) - {description}\n\
            - **Critical items:** {done}/{total} completed\n",
            label = summary.grade.label(),
            color = summary.grade.color(),
            description = summary.grade.description(),
            done = summary.critical_completed,
            total = summary.critical_total,
        ));
    }

    out
}
