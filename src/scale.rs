use crate::mcp::errors;
use std::fmt;

/// Standard construction drawing scales, looked up before falling back to
/// pattern parsing.
const COMMON_SCALES: &[(&str, u32)] = &[
    ("1:1", 1),
    ("1:2", 2),
    ("1:5", 5),
    ("1:10", 10),
    ("1:20", 20),
    ("1:25", 25),
    ("1:50", 50),
    ("1:100", 100),
    ("1:200", 200),
    ("1:250", 250),
    ("1:500", 500),
    ("1:1000", 1000),
    ("1:2000", 2000),
    ("1:5000", 5000),
    ("1:10000", 10000),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Mm,
    Cm,
    M,
}

impl Unit {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "mm" => Some(Unit::Mm),
            "cm" => Some(Unit::Cm),
            "m" => Some(Unit::M),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Unit::Mm => "mm",
            Unit::Cm => "cm",
            Unit::M => "m",
        }
    }
}

#[derive(Debug, Clone)]
pub struct ScaleError {
    pub kind: &'static str,
    pub message: String,
}

impl ScaleError {
    fn invalid_scale(input: &str) -> Self {
        Self {
            kind: errors::INVALID_SCALE,
            message: format!("unrecognized scale ratio: {input}"),
        }
    }
}

impl fmt::Display for ScaleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for ScaleError {}

#[derive(Debug, Clone, Copy)]
pub struct DimensionResult {
    pub real_dimension: f64,
    pub unit: Unit,
    pub scale_factor: u32,
    pub mm: f64,
    pub cm: f64,
    pub m: f64,
}

/// Resolves a scale string like "1:50" to its denominator.
///
/// Accepts the common construction scales table, the literal "1:N" pattern,
/// and the "M1:N" pattern with a case-insensitive M prefix. Whitespace is
/// stripped before matching. Anything else (decimal ratios, reversed ratios
/// such as "50:1", a zero denominator) fails.
pub fn resolve_scale(scale: &str) -> Result<u32, ScaleError> {
    let normalized: String = scale.chars().filter(|c| !c.is_whitespace()).collect();

    if let Some((_, factor)) = COMMON_SCALES.iter().find(|(key, _)| *key == normalized) {
        return Ok(*factor);
    }

    if let Some(rest) = normalized.strip_prefix("1:")
        && let Some(factor) = parse_denominator(rest)
    {
        return Ok(factor);
    }

    let lowered = normalized.to_lowercase();
    if let Some(rest) = lowered.strip_prefix("m1:")
        && let Some(factor) = parse_denominator(rest)
    {
        return Ok(factor);
    }

    Err(ScaleError::invalid_scale(scale))
}

fn parse_denominator(digits: &str) -> Option<u32> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    match digits.parse::<u32>() {
        Ok(0) | Err(_) => None,
        Ok(factor) => Some(factor),
    }
}

/// Converts a dimension measured on the drawing (in cm) to real-world units.
///
/// The returned values are the unrounded computation; display formatting is
/// left to [`format_value`].
pub fn convert_dimension(
    drawing_dimension: f64,
    scale: &str,
    unit: Unit,
) -> Result<DimensionResult, ScaleError> {
    let scale_factor = resolve_scale(scale)?;

    let cm = drawing_dimension * f64::from(scale_factor);
    let mm = cm * 10.0;
    let m = cm / 100.0;

    let real_dimension = match unit {
        Unit::Mm => mm,
        Unit::Cm => cm,
        Unit::M => m,
    };

    Ok(DimensionResult {
        real_dimension,
        unit,
        scale_factor,
        mm,
        cm,
        m,
    })
}

/// Display form: rounded to 3 decimal places with trailing zeros stripped.
pub fn format_value(value: f64) -> String {
    let fixed = format!("{value:.3}");
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        return "0".to_string();
    }
    trimmed.to_string()
}

/// Human-readable meaning of a resolved scale factor.
pub fn explain_factor(scale_factor: u32) -> String {
    if scale_factor >= 100 && scale_factor % 100 == 0 {
        format!("1 cm on the drawing = {} m in reality", scale_factor / 100)
    } else {
        format!("1 cm on the drawing = {scale_factor} cm in reality")
    }
}
