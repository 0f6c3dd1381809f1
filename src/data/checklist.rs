//! Review checklists for construction drawings: a generic checklist that
//! applies to every sheet, plus one per drawing type, merged on demand.

use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawingType {
    FloorPlan,
    Section,
    Elevation,
    Detail,
    SitePlan,
}

impl DrawingType {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "floorplan" => Some(DrawingType::FloorPlan),
            "section" => Some(DrawingType::Section),
            "elevation" => Some(DrawingType::Elevation),
            "detail" => Some(DrawingType::Detail),
            "siteplan" => Some(DrawingType::SitePlan),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DrawingType::FloorPlan => "floorplan",
            DrawingType::Section => "section",
            DrawingType::Elevation => "elevation",
            DrawingType::Detail => "detail",
            DrawingType::SitePlan => "siteplan",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            DrawingType::FloorPlan => "Floor plan",
            DrawingType::Section => "Vertical section",
            DrawingType::Elevation => "Elevation",
            DrawingType::Detail => "Construction detail",
            DrawingType::SitePlan => "Site plan",
        }
    }
}

#[derive(Debug)]
pub struct ChecklistItem {
    pub id: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    pub critical: bool,
    pub verification: &'static str,
}

struct ChecklistSource {
    name: &'static str,
    standard: &'static str,
    items: &'static [ChecklistItem],
}

/// Merged checklist produced per request: generic items first, then the
/// type-specific ones, each source keeping its own order.
#[derive(Debug)]
pub struct Checklist {
    pub name: &'static str,
    pub standard: &'static str,
    pub items: Vec<&'static ChecklistItem>,
}

static GENERAL: ChecklistSource = ChecklistSource {
    name: "General drawing requirements",
    standard: "ČSN 01 3420",
    items: &[
        ChecklistItem {
            id: "G001",
            description: "Sheet format follows the standard (A0-A4)",
            category: "format",
            critical: true,
            verification: "Visual check of the sheet dimensions",
        },
        ChecklistItem {
            id: "G002",
            description: "Scale is stated and correct",
            category: "scale",
            critical: true,
            verification: "Title block and check against the graphic scale",
        },
        ChecklistItem {
            id: "G003",
            description: "Material legend is present and complete",
            category: "legend",
            critical: true,
            verification: "Compare used hatching against the legend",
        },
        ChecklistItem {
            id: "G004",
            description: "Title block carries all mandatory entries",
            category: "title_block",
            critical: true,
            verification: "Designer, date, sheet number, design stage",
        },
        ChecklistItem {
            id: "G005",
            description: "Line weights follow the standard",
            category: "lines",
            critical: false,
            verification: "Thick lines for cuts, thin for views",
        },
        ChecklistItem {
            id: "G006",
            description: "Drawing is legible and uncluttered",
            category: "legibility",
            critical: false,
            verification: "Subjective review",
        },
    ],
};

static FLOOR_PLAN: ChecklistSource = ChecklistSource {
    name: "Floor plan",
    standard: "ČSN 01 3420",
    items: &[
        ChecklistItem {
            id: "P001",
            description: "Rooms are numbered",
            category: "rooms",
            critical: true,
            verification: "Every room carries a number",
        },
        ChecklistItem {
            id: "P002",
            description: "Room schedule is filled in",
            category: "schedule",
            critical: true,
            verification: "Number, name, area, floor, walls, ceiling",
        },
        ChecklistItem {
            id: "P003",
            description: "North arrow is marked",
            category: "orientation",
            critical: true,
            verification: "Arrow labelled N",
        },
        ChecklistItem {
            id: "P004",
            description: "Dimensioning is complete and correct",
            category: "dimensioning",
            critical: true,
            verification: "All dimensions present, running totals check out",
        },
        ChecklistItem {
            id: "P005",
            description: "Section and elevation marks are present",
            category: "sections",
            critical: true,
            verification: "Section letters (A-A, B-B) with arrows",
        },
        ChecklistItem {
            id: "P006",
            description: "Windows dimensioned correctly",
            category: "windows",
            critical: true,
            verification: "Format: width/height(sill)",
        },
        ChecklistItem {
            id: "P007",
            description: "Doors show the swing direction",
            category: "doors",
            critical: false,
            verification: "Opening arc drawn",
        },
        ChecklistItem {
            id: "P008",
            description: "Stairs carry the ascent arrow",
            category: "stairs",
            critical: false,
            verification: "Arrow points up the flight",
        },
        ChecklistItem {
            id: "P009",
            description: "Wall thicknesses match the structural design",
            category: "walls",
            critical: false,
            verification: "Compare against the structural drawings",
        },
        ChecklistItem {
            id: "P010",
            description: "Walls referenced by circled numbers",
            category: "wall_marks",
            critical: false,
            verification: "Reference into the wall schedule",
        },
    ],
};

static SECTION: ChecklistSource = ChecklistSource {
    name: "Vertical section",
    standard: "ČSN 01 3420",
    items: &[
        ChecklistItem {
            id: "R001",
            description: "Section plane routed through the staircase",
            category: "section_position",
            critical: true,
            verification: "Plane passes the staircase and main spaces",
        },
        ChecklistItem {
            id: "R002",
            description: "Level marks relative to ±0.000",
            category: "level_marks",
            critical: true,
            verification: "Every level dimensioned in metres",
        },
        ChecklistItem {
            id: "R003",
            description: "Construction build-ups specified",
            category: "build_ups",
            critical: true,
            verification: "Floors, walls and roof with materials",
        },
        ChecklistItem {
            id: "R004",
            description: "All levels marked",
            category: "levels",
            critical: true,
            verification: "Floor, ceiling and parapet levels",
        },
        ChecklistItem {
            id: "R005",
            description: "Material hatching applied correctly",
            category: "materials",
            critical: false,
            verification: "Matches the material legend",
        },
        ChecklistItem {
            id: "R006",
            description: "Stairs dimensioned",
            category: "stairs_section",
            critical: false,
            verification: "Riser height and tread depth",
        },
        ChecklistItem {
            id: "R007",
            description: "Insulation and waterproofing marked",
            category: "insulation",
            critical: false,
            verification: "TI and WP hatching present",
        },
        ChecklistItem {
            id: "R008",
            description: "Terrain and surroundings drawn",
            category: "terrain",
            critical: false,
            verification: "Original and finished grade",
        },
    ],
};

static ELEVATION: ChecklistSource = ChecklistSource {
    name: "Elevation",
    standard: "ČSN 01 3420",
    items: &[
        ChecklistItem {
            id: "V001",
            description: "Named after the cardinal direction",
            category: "naming",
            critical: true,
            verification: "South elevation, west elevation, and so on",
        },
        ChecklistItem {
            id: "V002",
            description: "All openings drawn",
            category: "openings",
            critical: true,
            verification: "Windows, doors, vents",
        },
        ChecklistItem {
            id: "V003",
            description: "Facade materials annotated",
            category: "facade",
            critical: false,
            verification: "Render, cladding, colours",
        },
        ChecklistItem {
            id: "V004",
            description: "Roof construction complete",
            category: "roof",
            critical: false,
            verification: "Covering, gutters, downpipes",
        },
        ChecklistItem {
            id: "V005",
            description: "Terrain and surroundings shown",
            category: "surroundings",
            critical: false,
            verification: "Adjacent buildings, greenery",
        },
    ],
};

static DETAIL: ChecklistSource = ChecklistSource {
    name: "Construction detail",
    standard: "ČSN 01 3420",
    items: &[
        ChecklistItem {
            id: "D001",
            description: "Large scale used (1:10, 1:5, 1:2)",
            category: "detail_scale",
            critical: true,
            verification: "Sufficient level of detail",
        },
        ChecklistItem {
            id: "D002",
            description: "All materials specified",
            category: "detail_materials",
            critical: true,
            verification: "Thicknesses, properties, codes",
        },
        ChecklistItem {
            id: "D003",
            description: "Junctions between structures resolved",
            category: "junctions",
            critical: true,
            verification: "Anchoring, connections, sealing",
        },
        ChecklistItem {
            id: "D004",
            description: "Dimensions and tolerances stated",
            category: "detail_dimensions",
            critical: true,
            verification: "Exact dimensions for execution",
        },
        ChecklistItem {
            id: "D005",
            description: "Thermal bridges treated",
            category: "thermal_bridges",
            critical: false,
            verification: "Thermal breaks in place",
        },
    ],
};

static SITE_PLAN: ChecklistSource = ChecklistSource {
    name: "Site plan",
    standard: "ČSN 01 3420",
    items: &[
        ChecklistItem {
            id: "S001",
            description: "Building positioned on the plot",
            category: "position",
            critical: true,
            verification: "Coordinates and orientation",
        },
        ChecklistItem {
            id: "S002",
            description: "Setbacks from the plot boundaries",
            category: "setbacks",
            critical: true,
            verification: "Minimum distances per the building act",
        },
        ChecklistItem {
            id: "S003",
            description: "Paved areas dimensioned",
            category: "paving",
            critical: true,
            verification: "Driveways, walkways, terraces",
        },
        ChecklistItem {
            id: "S004",
            description: "Utility connections drawn",
            category: "utilities",
            critical: true,
            verification: "Power, water, gas, sewerage",
        },
        ChecklistItem {
            id: "S005",
            description: "Earthworks marked",
            category: "site_terrain",
            critical: false,
            verification: "Contours, slopes, drainage",
        },
    ],
};

fn source_for(drawing_type: DrawingType) -> &'static ChecklistSource {
    match drawing_type {
        DrawingType::FloorPlan => &FLOOR_PLAN,
        DrawingType::Section => &SECTION,
        DrawingType::Elevation => &ELEVATION,
        DrawingType::Detail => &DETAIL,
        DrawingType::SitePlan => &SITE_PLAN,
    }
}

/// Builds the checklist for a drawing type: generic items first, then the
/// type-specific ones. With no drawing type, the generic checklist alone.
/// Identifier collisions are not de-duplicated.
pub fn merged_checklist(drawing_type: Option<DrawingType>) -> Checklist {
    let Some(drawing_type) = drawing_type else {
        return Checklist {
            name: GENERAL.name,
            standard: GENERAL.standard,
            items: GENERAL.items.iter().collect(),
        };
    };

    let specific = source_for(drawing_type);
    let mut items: Vec<&'static ChecklistItem> = GENERAL.items.iter().collect();
    items.extend(specific.items.iter());

    Checklist {
        name: specific.name,
        standard: specific.standard,
        items,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QualityGrade {
    NonCompliant,
    Excellent,
    Good,
    Acceptable,
    Insufficient,
}

impl QualityGrade {
    pub fn label(self) -> &'static str {
        match self {
            QualityGrade::NonCompliant => "NON-COMPLIANT",
            QualityGrade::Excellent => "EXCELLENT",
            QualityGrade::Good => "GOOD",
            QualityGrade::Acceptable => "ACCEPTABLE",
            QualityGrade::Insufficient => "INSUFFICIENT",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            QualityGrade::NonCompliant => "red",
            QualityGrade::Excellent => "green",
            QualityGrade::Good => "lightgreen",
            QualityGrade::Acceptable => "yellow",
            QualityGrade::Insufficient => "orange",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            QualityGrade::NonCompliant => "Not all critical requirements are met",
            QualityGrade::Excellent => "The design meets all requirements to a high standard",
            QualityGrade::Good => "The design meets most requirements",
            QualityGrade::Acceptable => "The design needs some information added",
            QualityGrade::Insufficient => "The design needs substantial additions",
        }
    }
}

/// Grade thresholds, critical gate first: any missed critical item makes the
/// result non-compliant regardless of the overall percentage.
pub fn grade(overall_pct: u32, critical_pct: u32) -> QualityGrade {
    if critical_pct < 100 {
        QualityGrade::NonCompliant
    } else if overall_pct >= 90 {
        QualityGrade::Excellent
    } else if overall_pct >= 75 {
        QualityGrade::Good
    } else if overall_pct >= 60 {
        QualityGrade::Acceptable
    } else {
        QualityGrade::Insufficient
    }
}

#[derive(Debug)]
pub struct ChecklistSummary {
    pub name: &'static str,
    pub standard: &'static str,
    pub total: usize,
    pub completed: usize,
    pub completion_pct: u32,
    pub critical_total: usize,
    pub critical_completed: usize,
    pub critical_pct: u32,
    pub grade: QualityGrade,
}

/// Evaluates a checklist against a map of item id to completion flag.
/// Missing ids count as not completed.
pub fn summarize(checklist: &Checklist, completed: &HashMap<String, bool>) -> ChecklistSummary {
    let is_done =
        |item: &ChecklistItem| completed.get(item.id).copied().unwrap_or(false);

    let total = checklist.items.len();
    let done = checklist.items.iter().filter(|item| is_done(item)).count();

    let critical: Vec<_> = checklist.items.iter().filter(|item| item.critical).collect();
    let critical_total = critical.len();
    let critical_done = critical.iter().filter(|item| is_done(item)).count();

    let completion_pct = percentage(done, total);
    let critical_pct = if critical_total == 0 {
        100
    } else {
        percentage(critical_done, critical_total)
    };

    ChecklistSummary {
        name: checklist.name,
        standard: checklist.standard,
        total,
        completed: done,
        completion_pct,
        critical_total,
        critical_completed: critical_done,
        critical_pct,
        grade: grade(completion_pct, critical_pct),
    }
}

fn percentage(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        return 0;
    }
    (part as f64 / whole as f64 * 100.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_puts_generic_items_first() {
        let checklist = merged_checklist(Some(DrawingType::FloorPlan));
        assert_eq!(checklist.items.len(), 16);
        assert_eq!(checklist.items[0].id, "G001");
        assert_eq!(checklist.items[5].id, "G006");
        assert_eq!(checklist.items[6].id, "P001");
        assert_eq!(checklist.items[15].id, "P010");
    }

    #[test]
    fn missing_type_yields_generic_alone() {
        let checklist = merged_checklist(None);
        assert_eq!(checklist.items.len(), 6);
        assert_eq!(checklist.name, "General drawing requirements");
    }

    #[test]
    fn every_type_merges_with_the_generic_list() {
        for (drawing_type, expected) in [
            (DrawingType::FloorPlan, 16),
            (DrawingType::Section, 14),
            (DrawingType::Elevation, 11),
            (DrawingType::Detail, 11),
            (DrawingType::SitePlan, 11),
        ] {
            assert_eq!(merged_checklist(Some(drawing_type)).items.len(), expected);
        }
    }

    #[test]
    fn item_ids_unique_within_each_source() {
        let checklist = merged_checklist(Some(DrawingType::Section));
        let mut ids: Vec<_> = checklist.items.iter().map(|item| item.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), checklist.items.len());
    }

    #[test]
    fn critical_gate_beats_overall_completion() {
        assert_eq!(grade(100, 50), QualityGrade::NonCompliant);
        assert_eq!(grade(0, 0), QualityGrade::NonCompliant);
    }

    #[test]
    fn grade_thresholds() {
        assert_eq!(grade(95, 100), QualityGrade::Excellent);
        assert_eq!(grade(90, 100), QualityGrade::Excellent);
        assert_eq!(grade(89, 100), QualityGrade::Good);
        assert_eq!(grade(75, 100), QualityGrade::Good);
        assert_eq!(grade(74, 100), QualityGrade::Acceptable);
        assert_eq!(grade(60, 100), QualityGrade::Acceptable);
        assert_eq!(grade(59, 100), QualityGrade::Insufficient);
    }

    #[test]
    fn summarize_counts_and_rounds() {
        let checklist = merged_checklist(None);
        let mut completed = HashMap::new();
        for id in ["G001", "G002", "G003", "G004"] {
            completed.insert(id.to_string(), true);
        }
        completed.insert("G005".to_string(), false);

        let summary = summarize(&checklist, &completed);
        assert_eq!(summary.total, 6);
        assert_eq!(summary.completed, 4);
        assert_eq!(summary.completion_pct, 67);
        assert_eq!(summary.critical_total, 4);
        assert_eq!(summary.critical_completed, 4);
        assert_eq!(summary.critical_pct, 100);
        assert_eq!(summary.grade, QualityGrade::Acceptable);
    }

    #[test]
    fn summarize_flags_missed_critical_items() {
        let checklist = merged_checklist(None);
        let mut completed = HashMap::new();
        for item in &checklist.items {
            completed.insert(item.id.to_string(), true);
        }
        completed.insert("G002".to_string(), false);

        let summary = summarize(&checklist, &completed);
        assert_eq!(summary.completion_pct, 83);
        assert_eq!(summary.grade, QualityGrade::NonCompliant);
    }
}
