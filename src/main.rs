use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde_json::{Map, Value, json};
use std::io::{self, BufRead, Write};
use std::process;

mod data;
mod mcp;
mod scale;
mod tools;

#[derive(Parser)]
#[command(name = "mcp-plans")]
#[command(
    version,
    about = "Construction drawing analysis tools and MCP integration"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum PlanTypeArg {
    Floorplan,
    Section,
    Elevation,
    Detail,
    Siteplan,
}

impl PlanTypeArg {
    fn as_str(self) -> &'static str {
        match self {
            PlanTypeArg::Floorplan => "floorplan",
            PlanTypeArg::Section => "section",
            PlanTypeArg::Elevation => "elevation",
            PlanTypeArg::Detail => "detail",
            PlanTypeArg::Siteplan => "siteplan",
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum CategoryArg {
    Structure,
    Materials,
    Installations,
    Dimensioning,
    General,
}

impl CategoryArg {
    fn as_str(self) -> &'static str {
        match self {
            CategoryArg::Structure => "structure",
            CategoryArg::Materials => "materials",
            CategoryArg::Installations => "installations",
            CategoryArg::Dimensioning => "dimensioning",
            CategoryArg::General => "general",
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum UnitArg {
    Mm,
    Cm,
    M,
}

impl UnitArg {
    fn as_str(self) -> &'static str {
        match self {
            UnitArg::Mm => "mm",
            UnitArg::Cm => "cm",
            UnitArg::M => "m",
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum StandardTypeArg {
    Drafting,
    Structure,
    Materials,
    Safety,
}

impl StandardTypeArg {
    fn as_str(self) -> &'static str {
        match self {
            StandardTypeArg::Drafting => "drafting",
            StandardTypeArg::Structure => "structure",
            StandardTypeArg::Materials => "materials",
            StandardTypeArg::Safety => "safety",
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum ReportTypeArg {
    Full,
    Summary,
    Checklist,
}

impl ReportTypeArg {
    fn as_str(self) -> &'static str {
        match self {
            ReportTypeArg::Full => "full",
            ReportTypeArg::Summary => "summary",
            ReportTypeArg::Checklist => "checklist",
        }
    }
}

#[derive(Args, Clone)]
struct AnalyzePlanArgs {
    /// Free-text description of the drawing
    #[arg(long)]
    description: String,
    /// Drawing type
    #[arg(long, value_enum)]
    plan_type: Option<PlanTypeArg>,
    /// Drawing scale, e.g. 1:50
    #[arg(long)]
    scale: Option<String>,
    /// Output JSON structuredContent
    #[arg(long)]
    json: bool,
}

#[derive(Args, Clone)]
struct IdentifySymbolsArgs {
    /// Symbols or marks to identify
    #[arg(long, required = true, num_args = 1..)]
    symbol: Vec<String>,
    /// Restrict matches to one symbol category
    #[arg(long, value_enum)]
    category: Option<CategoryArg>,
    /// Output JSON structuredContent
    #[arg(long)]
    json: bool,
}

#[derive(Args, Clone)]
struct CalculateDimensionsArgs {
    /// Dimension measured on the drawing, in cm
    #[arg(long)]
    dimension: f64,
    /// Drawing scale, e.g. 1:50
    #[arg(long)]
    scale: String,
    /// Requested unit of the result
    #[arg(long, value_enum)]
    unit: Option<UnitArg>,
    /// Output JSON structuredContent
    #[arg(long)]
    json: bool,
}

#[derive(Args, Clone)]
struct CheckStandardsArgs {
    /// Building element or solution to check
    #[arg(long)]
    element: String,
    /// Restrict the check to one standard kind
    #[arg(long, value_enum)]
    standard_type: Option<StandardTypeArg>,
    /// Output JSON structuredContent
    #[arg(long)]
    json: bool,
}

#[derive(Args, Clone)]
#[command(
    group(
        clap::ArgGroup::new("data")
            .required(true)
            .multiple(false)
            .args(["plan_data", "plan_data_file"])
    )
)]
struct GenerateReportArgs {
    /// Plan data as inline JSON
    #[arg(long)]
    plan_data: Option<String>,
    /// Path to a JSON file with the plan data
    #[arg(long)]
    plan_data_file: Option<String>,
    /// Report variant to render
    #[arg(long, value_enum)]
    report_type: Option<ReportTypeArg>,
    /// Output JSON structuredContent
    #[arg(long)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start MCP stdio server
    Serve {
        /// Serve MCP over stdio (NDJSON)
        #[arg(long)]
        stdio: bool,
    },
    /// Analyze a drawing description
    AnalyzePlan(AnalyzePlanArgs),
    /// Identify drafting symbols
    IdentifySymbols(IdentifySymbolsArgs),
    /// Convert a drawing dimension to real units
    CalculateDimensions(CalculateDimensionsArgs),
    /// Check an element against ČSN standards
    CheckStandards(CheckStandardsArgs),
    /// Render a markdown report from plan data
    GenerateReport(GenerateReportArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { stdio } => {
            if stdio {
                run_stdio_server()
            } else {
                anyhow::bail!("only --stdio transport is supported")
            }
        }
        Commands::AnalyzePlan(args) => run_analyze_plan(args),
        Commands::IdentifySymbols(args) => run_identify_symbols(args),
        Commands::CalculateDimensions(args) => run_calculate_dimensions(args),
        Commands::CheckStandards(args) => run_check_standards(args),
        Commands::GenerateReport(args) => run_generate_report(args),
    }
}

fn run_analyze_plan(args: AnalyzePlanArgs) -> Result<()> {
    let mut map = Map::new();
    map.insert("planDescription".to_string(), json!(args.description));
    if let Some(plan_type) = args.plan_type {
        map.insert("planType".to_string(), json!(plan_type.as_str()));
    }
    if let Some(scale) = &args.scale {
        map.insert("scale".to_string(), json!(scale));
    }
    let result = tools::analyze_plan::call(&Value::Object(map));
    print_tool_result(result, args.json)
}

fn run_identify_symbols(args: IdentifySymbolsArgs) -> Result<()> {
    let mut map = Map::new();
    map.insert("symbols".to_string(), json!(args.symbol));
    if let Some(category) = args.category {
        map.insert("category".to_string(), json!(category.as_str()));
    }
    let result = tools::identify_symbols::call(&Value::Object(map));
    print_tool_result(result, args.json)
}

fn run_calculate_dimensions(args: CalculateDimensionsArgs) -> Result<()> {
    let mut map = Map::new();
    map.insert("drawingDimension".to_string(), json!(args.dimension));
    map.insert("scale".to_string(), json!(args.scale));
    if let Some(unit) = args.unit {
        map.insert("unit".to_string(), json!(unit.as_str()));
    }
    let result = tools::calculate_dimensions::call(&Value::Object(map));
    print_tool_result(result, args.json)
}

fn run_check_standards(args: CheckStandardsArgs) -> Result<()> {
    let mut map = Map::new();
    map.insert("element".to_string(), json!(args.element));
    if let Some(standard_type) = args.standard_type {
        map.insert("standardType".to_string(), json!(standard_type.as_str()));
    }
    let result = tools::check_standards::call(&Value::Object(map));
    print_tool_result(result, args.json)
}

fn run_generate_report(args: GenerateReportArgs) -> Result<()> {
    let raw = match (&args.plan_data, &args.plan_data_file) {
        (Some(inline), None) => inline.clone(),
        (None, Some(path)) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read plan data from {path}"))?,
        _ => anyhow::bail!("exactly one of --plan-data and --plan-data-file is required"),
    };
    let plan_data: Value =
        serde_json::from_str(&raw).context("plan data is not valid JSON")?;

    let mut map = Map::new();
    map.insert("planData".to_string(), plan_data);
    if let Some(report_type) = args.report_type {
        map.insert("reportType".to_string(), json!(report_type.as_str()));
    }
    let result = tools::generate_report::call(&Value::Object(map));
    print_tool_result(result, args.json)
}

fn print_tool_result(result: Value, json_output: bool) -> Result<()> {
    let is_error = result
        .get("isError")
        .and_then(|value| value.as_bool())
        .unwrap_or(false);

    if is_error {
        let message = result
            .get("structuredContent")
            .and_then(|value| value.get("error"))
            .and_then(|value| value.get("message"))
            .and_then(|value| value.as_str())
            .unwrap_or("tool error");
        eprintln!("{message}");
        process::exit(1);
    }

    if json_output {
        let structured = result
            .get("structuredContent")
            .cloned()
            .unwrap_or_else(|| json!({}));
        let output = serde_json::to_string_pretty(&structured)?;
        println!("{output}");
        return Ok(());
    }

    let text = result
        .get("content")
        .and_then(|value| value.as_array())
        .and_then(|arr| arr.first())
        .and_then(|value| value.get("text"))
        .and_then(|value| value.as_str())
        .unwrap_or("");
    println!("{text}");
    Ok(())
}

#[cfg(unix)]
extern "C" fn handle_shutdown(_signal: libc::c_int) {
    // Only async-signal-safe calls are allowed here.
    const MESSAGE: &[u8] = b"shutting down\n";
    unsafe {
        libc::write(
            libc::STDERR_FILENO,
            MESSAGE.as_ptr() as *const libc::c_void,
            MESSAGE.len(),
        );
        libc::_exit(0);
    }
}

#[cfg(unix)]
fn install_signal_handlers() {
    let handler = handle_shutdown as extern "C" fn(libc::c_int);
    unsafe {
        libc::signal(libc::SIGINT, handler as libc::sighandler_t);
        libc::signal(libc::SIGTERM, handler as libc::sighandler_t);
    }
}

#[cfg(not(unix))]
fn install_signal_handlers() {}

fn run_stdio_server() -> Result<()> {
    install_signal_handlers();
    eprintln!(
        "{} v{} serving MCP over stdio",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    );
    let tool_names: Vec<String> = mcp::tool_definitions()
        .iter()
        .filter_map(|tool| tool.get("name").and_then(|v| v.as_str()).map(str::to_string))
        .collect();
    eprintln!("tools: {}", tool_names.join(", "));

    let stdin = io::stdin();
    let stdout = io::stdout();
    let reader = stdin.lock().lines();
    let mut writer = io::BufWriter::new(stdout.lock());

    for line in reader {
        let line = line.context("failed to read stdin")?;
        if line.trim().is_empty() {
            continue;
        }

        let request: serde_json::Value = match serde_json::from_str(&line) {
            Ok(value) => value,
            Err(_) => continue,
        };

        let method = request.get("method").and_then(|value| value.as_str());
        let id = request.get("id").cloned();
        let response = match (method, id) {
            (Some("initialize"), Some(id)) => Some(json!({
                "jsonrpc": "2.0",
                "id": id,
                "result": {
                    "protocolVersion": "2025-11-25",
                    "capabilities": {
                        "tools": {}
                    },
                    "serverInfo": {
                        "name": env!("CARGO_PKG_NAME"),
                        "version": env!("CARGO_PKG_VERSION")
                    }
                }
            })),
            (Some("tools/list"), Some(id)) => Some(json!({
                "jsonrpc": "2.0",
                "id": id,
                "result": {
                    "tools": mcp::tool_definitions()
                }
            })),
            (Some("tools/call"), Some(id)) => {
                let result = handle_tool_call(&request);
                Some(json!({
                    "jsonrpc": "2.0",
                    "id": id,
                    "result": result
                }))
            }
            _ => None,
        };

        if let Some(response) = response {
            let serialized =
                serde_json::to_string(&response).context("failed to serialize response")?;
            writeln!(writer, "{serialized}").context("failed to write response")?;
            writer.flush().context("failed to flush response")?;
        }
    }

    Ok(())
}

fn handle_tool_call(request: &serde_json::Value) -> serde_json::Value {
    let params = request.get("params");
    let Some(params) = params.and_then(|value| value.as_object()) else {
        return tools::error_result(mcp::errors::INVALID_INPUT, "params must be an object", None);
    };

    let name = params.get("name").and_then(|value| value.as_str());
    let Some(name) = name else {
        return tools::error_result(
            mcp::errors::INVALID_INPUT,
            "params.name must be a string",
            None,
        );
    };

    let args = params
        .get("arguments")
        .cloned()
        .unwrap_or_else(|| json!({}));

    match name {
        mcp::contracts::TOOL_ANALYZE_PLAN => tools::analyze_plan::call(&args),
        mcp::contracts::TOOL_IDENTIFY_SYMBOLS => tools::identify_symbols::call(&args),
        mcp::contracts::TOOL_CALCULATE_DIMENSIONS => tools::calculate_dimensions::call(&args),
        mcp::contracts::TOOL_CHECK_STANDARDS => tools::check_standards::call(&args),
        mcp::contracts::TOOL_GENERATE_REPORT => tools::generate_report::call(&args),
        _ => tools::error_result(
            mcp::errors::INVALID_INPUT,
            format!("tool not implemented: {name}"),
            Some(name),
        ),
    }
}
