//! Reference table of drafting symbols and marks used on Czech construction
//! drawings, keyed for keyword lookup.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolCategory {
    Structure,
    Materials,
    Installations,
    Dimensioning,
    General,
}

impl SymbolCategory {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "structure" => Some(SymbolCategory::Structure),
            "materials" => Some(SymbolCategory::Materials),
            "installations" => Some(SymbolCategory::Installations),
            "dimensioning" => Some(SymbolCategory::Dimensioning),
            "general" => Some(SymbolCategory::General),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SymbolCategory::Structure => "structure",
            SymbolCategory::Materials => "materials",
            SymbolCategory::Installations => "installations",
            SymbolCategory::Dimensioning => "dimensioning",
            SymbolCategory::General => "general",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            SymbolCategory::Structure => "Structural elements",
            SymbolCategory::Materials => "Material hatching",
            SymbolCategory::Installations => "Building services",
            SymbolCategory::Dimensioning => "Dimensioning",
            SymbolCategory::General => "General marks",
        }
    }
}

#[derive(Debug)]
pub struct SymbolRecord {
    pub key: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub category: SymbolCategory,
    pub standard: Option<&'static str>,
    pub graphic: Option<&'static str>,
    pub note: Option<&'static str>,
}

pub const SYMBOLS: &[SymbolRecord] = &[
    // Line types per ČSN ISO 128-23
    SymbolRecord {
        key: "thick_line",
        name: "Thick line",
        description: "Structures cut by the section plane (walls, columns, beams)",
        category: SymbolCategory::Structure,
        standard: Some("ČSN ISO 128-23"),
        graphic: Some("0.7-1.0 mm stroke"),
        note: None,
    },
    SymbolRecord {
        key: "thin_line",
        name: "Thin line",
        description: "Structures seen in view, auxiliary lines",
        category: SymbolCategory::Structure,
        standard: Some("ČSN ISO 128-23"),
        graphic: Some("0.35 mm stroke"),
        note: None,
    },
    SymbolRecord {
        key: "dashed_line",
        name: "Dashed line",
        description: "Hidden edges and structures behind the section plane",
        category: SymbolCategory::Structure,
        standard: Some("ČSN ISO 128-23"),
        graphic: Some("dash-gap-dash pattern"),
        note: None,
    },
    SymbolRecord {
        key: "chain_line",
        name: "Chain line",
        description: "Axes, centres and section planes",
        category: SymbolCategory::Structure,
        standard: Some("ČSN ISO 128-23"),
        graphic: Some("dash-dot-dash pattern"),
        note: None,
    },
    // Openings and stairs
    SymbolRecord {
        key: "window_plan",
        name: "Window in plan view",
        description: "Window opening with frame and sill",
        category: SymbolCategory::Structure,
        standard: None,
        graphic: Some("two parallel lines with offset sill lines"),
        note: Some("dimensioned as width/height(sill), e.g. 1500/1200(900)"),
    },
    SymbolRecord {
        key: "window_section",
        name: "Window in section",
        description: "Frame profile with the glazing marked",
        category: SymbolCategory::Structure,
        standard: None,
        graphic: None,
        note: Some("dimension the sill height and the lintel height"),
    },
    SymbolRecord {
        key: "french_window",
        name: "French window",
        description: "Window reaching down to the floor",
        category: SymbolCategory::Structure,
        standard: Some("ČSN 74 3305"),
        graphic: None,
        note: Some("requires a protective railing"),
    },
    SymbolRecord {
        key: "door_plan",
        name: "Door in plan view",
        description: "Door opening with its swing direction",
        category: SymbolCategory::Structure,
        standard: None,
        graphic: Some("rectangle with an arc showing the opening direction"),
        note: None,
    },
    SymbolRecord {
        key: "stairs_plan",
        name: "Stairs in plan view",
        description: "Parallel tread lines with an ascent arrow",
        category: SymbolCategory::Structure,
        standard: Some("ČSN 73 4130"),
        graphic: None,
        note: Some("the arrow points up the flight"),
    },
    SymbolRecord {
        key: "stairs_section",
        name: "Stairs in section",
        description: "Profile of the flights and landings",
        category: SymbolCategory::Structure,
        standard: Some("ČSN 73 4130"),
        graphic: None,
        note: Some("dimension the riser height and tread depth"),
    },
    // Material hatching per ČSN 01 3406
    SymbolRecord {
        key: "brick",
        name: "Fired brick masonry",
        description: "Hatching for fired clay brick walls",
        category: SymbolCategory::Materials,
        standard: Some("ČSN 01 3406"),
        graphic: Some("parallel lines crossed at 45 degrees"),
        note: Some("legend code Ci"),
    },
    SymbolRecord {
        key: "concrete",
        name: "Reinforced concrete",
        description: "Hatching for reinforced concrete structures",
        category: SymbolCategory::Materials,
        standard: Some("ČSN 01 3406"),
        graphic: Some("dense stippling with lines"),
        note: Some("legend code RC"),
    },
    SymbolRecord {
        key: "plain_concrete",
        name: "Plain concrete",
        description: "Hatching for unreinforced concrete",
        category: SymbolCategory::Materials,
        standard: Some("ČSN 01 3406"),
        graphic: Some("sparse stippling"),
        note: None,
    },
    SymbolRecord {
        key: "timber",
        name: "Timber structures",
        description: "Hatching for structural timber",
        category: SymbolCategory::Materials,
        standard: Some("ČSN 01 3406"),
        graphic: Some("parallel lines with growth-ring curves"),
        note: None,
    },
    SymbolRecord {
        key: "steel",
        name: "Steel structures",
        description: "Hatching for structural steel",
        category: SymbolCategory::Materials,
        standard: Some("ČSN 01 3406"),
        graphic: Some("dense parallel lines"),
        note: None,
    },
    SymbolRecord {
        key: "thermal_insulation",
        name: "Thermal insulation",
        description: "Hatching for thermal insulation layers",
        category: SymbolCategory::Materials,
        standard: Some("ČSN 01 3406"),
        graphic: Some("wavy or zigzag line"),
        note: None,
    },
    SymbolRecord {
        key: "waterproofing",
        name: "Waterproofing",
        description: "Hatching for waterproofing membranes",
        category: SymbolCategory::Materials,
        standard: Some("ČSN 01 3406"),
        graphic: Some("solid black areas"),
        note: None,
    },
    SymbolRecord {
        key: "stone",
        name: "Stone masonry",
        description: "Hatching for natural stone walls",
        category: SymbolCategory::Materials,
        standard: Some("ČSN 01 3406"),
        graphic: Some("irregular crossing lines"),
        note: None,
    },
    // Dimensioning per ČSN 01 3420
    SymbolRecord {
        key: "dimension_line",
        name: "Dimension line",
        description: "Thin line with arrowheads marking a measured distance",
        category: SymbolCategory::Dimensioning,
        standard: Some("ČSN 01 3420"),
        graphic: None,
        note: Some("lengths in mm, levels in m"),
    },
    SymbolRecord {
        key: "extension_line",
        name: "Extension line",
        description: "Outline extension carrying the dimension line",
        category: SymbolCategory::Dimensioning,
        standard: Some("ČSN 01 3420"),
        graphic: Some("extends 2-3 mm past the dimension line"),
        note: None,
    },
    SymbolRecord {
        key: "level_mark",
        name: "Level mark",
        description: "Absolute height in metres",
        category: SymbolCategory::Dimensioning,
        standard: None,
        graphic: Some("value in a frame or with an arrow"),
        note: Some("ground floor level = ±0.000"),
    },
    // Building services
    SymbolRecord {
        key: "cold_water",
        name: "Cold water",
        description: "Cold water supply pipework",
        category: SymbolCategory::Installations,
        standard: Some("ČSN 06 0830"),
        graphic: Some("solid line labelled CW, or blue"),
        note: None,
    },
    SymbolRecord {
        key: "hot_water",
        name: "Hot water",
        description: "Hot water supply pipework",
        category: SymbolCategory::Installations,
        standard: Some("ČSN 06 0830"),
        graphic: Some("solid line labelled HW, or red"),
        note: None,
    },
    SymbolRecord {
        key: "sewer",
        name: "Sewerage",
        description: "Waste water drainage pipework",
        category: SymbolCategory::Installations,
        standard: Some("ČSN 06 0830"),
        graphic: Some("dashed or double line"),
        note: None,
    },
    SymbolRecord {
        key: "gas",
        name: "Gas service",
        description: "Gas supply connection",
        category: SymbolCategory::Installations,
        standard: Some("ČSN 38 6411"),
        graphic: Some("yellow line labelled G"),
        note: None,
    },
    SymbolRecord {
        key: "power",
        name: "Low-voltage power",
        description: "Low-voltage electrical wiring",
        category: SymbolCategory::Installations,
        standard: Some("ČSN 33 0165"),
        graphic: Some("solid line annotated with conductor count"),
        note: None,
    },
    SymbolRecord {
        key: "telecom",
        name: "Telecommunications",
        description: "Telecommunication wiring",
        category: SymbolCategory::Installations,
        standard: Some("ČSN 33 0165"),
        graphic: Some("dashed line labelled T"),
        note: None,
    },
    // General marks
    SymbolRecord {
        key: "north_arrow",
        name: "North arrow",
        description: "Orientation of the drawing to the cardinal directions",
        category: SymbolCategory::General,
        standard: None,
        graphic: Some("arrow labelled N"),
        note: Some("mandatory on floor plans"),
    },
    SymbolRecord {
        key: "section_mark",
        name: "Section mark",
        description: "Position and direction of a section plane",
        category: SymbolCategory::General,
        standard: None,
        graphic: Some("line with letters at both ends (A-A, B-B)"),
        note: Some("arrows show the viewing direction"),
    },
    SymbolRecord {
        key: "detail_mark",
        name: "Detail mark",
        description: "Reference to an enlarged construction detail",
        category: SymbolCategory::General,
        standard: None,
        graphic: Some("circle with a number or letter"),
        note: Some("refers to the sheet carrying the detail"),
    },
    SymbolRecord {
        key: "graphic_scale",
        name: "Graphic scale bar",
        description: "Graphic representation of real dimensions",
        category: SymbolCategory::General,
        standard: None,
        graphic: None,
        note: Some("used to verify print scaling"),
    },
];

/// Returns every record whose key contains the lowercased query, or whose key
/// is itself contained in the query, optionally filtered by category.
///
/// The containment check is deliberately bidirectional: a short query such as
/// "window" matches both "window_plan" and "window_section", and a long query
/// that embeds a full key matches that key. Known quirk: a one-letter query
/// matches every key containing that letter.
pub fn find_symbols(
    query: &str,
    category: Option<SymbolCategory>,
) -> Vec<&'static SymbolRecord> {
    let needle = query.to_lowercase();
    SYMBOLS
        .iter()
        .filter(|record| record.key.contains(&needle) || needle.contains(record.key))
        .filter(|record| category.is_none_or(|wanted| record.category == wanted))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_query_matches_all_containing_keys() {
        let matches = find_symbols("window", None);
        let names: Vec<&str> = matches.iter().map(|record| record.name).collect();
        assert!(names.contains(&"Window in plan view"));
        assert!(names.contains(&"Window in section"));
    }

    #[test]
    fn long_query_matches_embedded_key() {
        let matches = find_symbols("the window_plan symbol near the door", None);
        assert!(matches.iter().any(|record| record.key == "window_plan"));
    }

    #[test]
    fn matching_is_case_insensitive() {
        let matches = find_symbols("WINDOW", None);
        assert!(!matches.is_empty());
    }

    #[test]
    fn category_filter_applies() {
        let matches = find_symbols("line", Some(SymbolCategory::Dimensioning));
        assert!(!matches.is_empty());
        assert!(
            matches
                .iter()
                .all(|record| record.category == SymbolCategory::Dimensioning)
        );
    }

    #[test]
    fn unmatched_query_returns_empty() {
        assert!(find_symbols("xyzzy", None).is_empty());
    }

    #[test]
    fn one_letter_query_over_matches() {
        // Quirk of the bidirectional containment check, kept on purpose.
        let matches = find_symbols("e", None);
        assert!(matches.len() > 10);
    }
}
