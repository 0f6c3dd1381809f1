//! Czech ČSN standards relevant to construction drawings, keyed for keyword
//! lookup with a generic fallback per standard kind.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StandardKind {
    Drafting,
    Structure,
    Materials,
    Safety,
}

impl StandardKind {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "drafting" => Some(StandardKind::Drafting),
            "structure" => Some(StandardKind::Structure),
            "materials" => Some(StandardKind::Materials),
            "safety" => Some(StandardKind::Safety),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StandardKind::Drafting => "drafting",
            StandardKind::Structure => "structure",
            StandardKind::Materials => "materials",
            StandardKind::Safety => "safety",
        }
    }
}

#[derive(Debug)]
pub struct StandardRecord {
    pub keyword: &'static str,
    pub standard: &'static str,
    pub title: &'static str,
    pub kind: StandardKind,
    pub requirements: &'static [&'static str],
    pub recommendations: &'static [&'static str],
}

pub const STANDARDS: &[StandardRecord] = &[
    StandardRecord {
        keyword: "drawing",
        standard: "ČSN 01 3420",
        title: "Building drawings - Drafting of the architectural part",
        kind: StandardKind::Drafting,
        requirements: &[
            "Uniform line weights per the standard",
            "Correct scale, stated in the title block",
            "Complete material legend",
            "Complete dimensioning",
            "Section and elevation marks present",
        ],
        recommendations: &[
            "Use the standard A0-A4 sheet formats",
            "Place the principal view on the left",
            "Apply hatching consistently",
            "Keep all annotations legible",
        ],
    },
    StandardRecord {
        keyword: "floor plan",
        standard: "ČSN 01 3420",
        title: "Drafting of floor plans",
        kind: StandardKind::Drafting,
        requirements: &[
            "Section plane at 1.0-1.5 m above floor level",
            "Thick lines for walls cut by the plane",
            "Rooms numbered and referenced",
            "Room schedule with floor areas",
            "North arrow present",
            "Dimensions in millimetres",
        ],
        recommendations: &[
            "Scale 1:50 for residential buildings",
            "Mark the positions of sections",
            "Distinguish materials with hatching",
            "State level marks in metres",
        ],
    },
    StandardRecord {
        keyword: "section",
        standard: "ČSN 01 3420",
        title: "Drafting of vertical sections",
        kind: StandardKind::Drafting,
        requirements: &[
            "Section plane routed through the staircase",
            "Level marks relative to ±0.000",
            "Construction build-ups specified",
            "Every storey level marked",
            "Material hatching applied",
        ],
        recommendations: &[
            "Draw the surrounding terrain",
            "Mark structural heights",
            "Detail the junctions between structures",
            "Show insulation and waterproofing layers",
        ],
    },
    StandardRecord {
        keyword: "wall",
        standard: "ČSN 73 0540",
        title: "Thermal protection of buildings",
        kind: StandardKind::Structure,
        requirements: &[
            "Minimum thickness for the intended use",
            "Thermal performance requirements",
            "Fire resistance rating",
            "Acoustic performance",
            "Structural assessment",
        ],
        recommendations: &[
            "Check for thermal bridges",
            "Assess vapour permeability",
            "Consider material service life",
            "Optimize for cost",
        ],
    },
    StandardRecord {
        keyword: "window",
        standard: "ČSN 74 3305",
        title: "Protective railings",
        kind: StandardKind::Structure,
        requirements: &[
            "Minimum opening dimensions",
            "Thermal performance of the unit",
            "Safety requirements",
            "Dimensioned as width/height(sill)",
            "Railings at french windows",
        ],
        recommendations: &[
            "Orient windows to the cardinal directions",
            "Check the glazing-to-floor-area ratio",
            "Select glazing for the energy requirements",
            "Provide solar shading",
        ],
    },
    StandardRecord {
        keyword: "stairs",
        standard: "ČSN 73 4130",
        title: "Staircases and sloped ramps",
        kind: StandardKind::Structure,
        requirements: &[
            "Minimum width 900 mm in residential buildings",
            "Riser height at most 190 mm",
            "Tread depth at least 250 mm",
            "Railing height at least 1000 mm",
            "Staircase lighting",
        ],
        recommendations: &[
            "Keep the riser-to-tread ratio comfortable",
            "Use non-slip surfaces",
            "Design for ergonomics",
            "Verify load-bearing capacity",
        ],
    },
    StandardRecord {
        keyword: "concrete",
        standard: "ČSN EN 206-1",
        title: "Concrete specification",
        kind: StandardKind::Materials,
        requirements: &[
            "Strength class specified",
            "Exposure classes stated",
            "Maximum aggregate size",
            "Consistency class",
            "Chloride class",
        ],
        recommendations: &[
            "Select a suitable cement type",
            "Use admixtures where beneficial",
            "Verify delivery quality",
            "Plan the placing technology",
        ],
    },
    StandardRecord {
        keyword: "masonry",
        standard: "ČSN EN 1996-1-1",
        title: "Design of masonry structures",
        kind: StandardKind::Materials,
        requirements: &[
            "Strength of masonry units",
            "Mortar quality",
            "Bonding pattern",
            "Structural assessment",
            "Thermal performance",
        ],
        recommendations: &[
            "Lay units correctly",
            "Point the joints properly",
            "Protect against moisture",
            "Detail junctions between structures",
        ],
    },
    StandardRecord {
        keyword: "fire",
        standard: "ČSN 73 0802",
        title: "Fire safety of buildings",
        kind: StandardKind::Safety,
        requirements: &[
            "Fire compartments and their size",
            "Escape routes",
            "Fire resistance of structures",
            "Separation distances",
            "Fire-fighting water supply",
        ],
        recommendations: &[
            "Prefer non-combustible materials",
            "Install fire detection and alarm systems",
            "Provide portable extinguishers",
            "Maintain fire safety documentation",
        ],
    },
    StandardRecord {
        keyword: "accessibility",
        standard: "Decree 398/2009 Coll.",
        title: "Barrier-free use of buildings",
        kind: StandardKind::Safety,
        requirements: &[
            "Corridors at least 1500 mm wide",
            "Ramps with a slope of at most 8.33 %",
            "Lift cars at least 1100x1400 mm",
            "Doors at least 800 mm wide",
            "Tactile marking for the visually impaired",
        ],
        recommendations: &[
            "Mark obstacles with contrast",
            "Provide sufficient lighting",
            "Use non-slip surfaces",
            "Install a wayfinding system",
        ],
    },
];

static GENERAL_DRAFTING: StandardRecord = StandardRecord {
    keyword: "",
    standard: "ČSN 01 3420",
    title: "General requirements on building drawings",
    kind: StandardKind::Drafting,
    requirements: &[
        "Standard sheet formats",
        "Correct line weights",
        "Complete dimensioning",
        "Material legend",
    ],
    recommendations: &[
        "Follow CAD drafting standards",
        "Keep the drawing style consistent",
        "Keep the sheet uncluttered",
    ],
};

static GENERAL_STRUCTURE: StandardRecord = StandardRecord {
    keyword: "",
    standard: "ČSN 73 series",
    title: "General structural requirements",
    kind: StandardKind::Structure,
    requirements: &[
        "Structural assessment",
        "Thermal performance",
        "Fire safety",
        "Design service life",
    ],
    recommendations: &[
        "Optimize for cost",
        "Prefer sustainable materials",
        "Keep the solution buildable",
    ],
};

/// Bidirectional keyword containment over the standards table, collecting all
/// matches in table order. Same quirk as the symbol matcher: very short
/// queries over-match.
pub fn find_standards(
    element: &str,
    kind: Option<StandardKind>,
) -> Vec<&'static StandardRecord> {
    let needle = element.to_lowercase();
    STANDARDS
        .iter()
        .filter(|record| record.keyword.contains(&needle) || needle.contains(record.keyword))
        .filter(|record| kind.is_none_or(|wanted| record.kind == wanted))
        .collect()
}

/// Fallback record used when no keyword matches. Only the drafting and
/// structure kinds carry a dedicated generic record; everything else falls
/// back to the drafting one.
pub fn general_standard(kind: Option<StandardKind>) -> &'static StandardRecord {
    match kind {
        Some(StandardKind::Structure) => &GENERAL_STRUCTURE,
        _ => &GENERAL_DRAFTING,
    }
}
