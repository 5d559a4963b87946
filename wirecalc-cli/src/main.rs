//! Wirecalc CLI - wire length, voltage-drop and purchase planning from
//! the command line.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::process;
use wirecalc::{
    extract_from_text, plan_packs, select_gauge, EstimateCore, EstimateRequest, EstimateResult,
    Material, PageScraper, PlanOutcome, ProductSpec, DISCLAIMER,
};

#[derive(Parser)]
#[command(name = "wirecalc")]
#[command(about = "Wire length, voltage-drop and spool purchase estimator", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Detect gauge/material/packaging from a product URL or pasted text
    Extract {
        /// Product page URL to fetch and scrape
        #[arg(long, conflicts_with_all = ["text", "file"])]
        url: Option<String>,

        /// Pasted product specs
        #[arg(long, conflicts_with = "file")]
        text: Option<String>,

        /// File containing pasted product specs
        #[arg(long)]
        file: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "human")]
        format: OutputFormat,
    },

    /// Run a full estimate from a JSON request file
    Estimate {
        /// Path to the JSON request file
        #[arg(value_name = "REQUEST")]
        request: PathBuf,

        /// Fetch this product URL and attach the scraped specs before
        /// estimating (non-fatal on failure)
        #[arg(long)]
        url: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "human")]
        format: OutputFormat,

        /// Write the CSV export to this file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// One-shot gauge suggestion for a single run
    Gauge {
        /// Conductor material
        #[arg(long, value_enum, default_value = "copper")]
        material: MaterialArg,

        /// Circuit current in amps
        #[arg(long)]
        amps: f64,

        /// System voltage
        #[arg(long)]
        volts: f64,

        /// One-way run length in feet
        #[arg(long)]
        length: f64,

        /// Max allowable voltage drop in percent
        #[arg(long, default_value_t = 3.0)]
        max_drop: f64,

        /// Output format
        #[arg(short, long, value_enum, default_value = "human")]
        format: OutputFormat,
    },

    /// One-shot purchase plan for a footage total
    Plan {
        /// Total footage to cover
        #[arg(long)]
        total: f64,

        /// Comma-separated pack sizes in feet (e.g. 250,500,1000)
        #[arg(long)]
        packs: String,

        /// Output format
        #[arg(short, long, value_enum, default_value = "human")]
        format: OutputFormat,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
    /// CSV export (estimate only)
    Csv,
}

#[derive(Clone, Copy, ValueEnum)]
enum MaterialArg {
    Copper,
    Aluminum,
}

impl From<MaterialArg> for Material {
    fn from(m: MaterialArg) -> Self {
        match m {
            MaterialArg::Copper => Material::Copper,
            MaterialArg::Aluminum => Material::Aluminum,
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let exit_code = match cli.command {
        Commands::Extract {
            url,
            text,
            file,
            format,
        } => handle_extract(url, text, file, format),
        Commands::Estimate {
            request,
            url,
            format,
            output,
        } => handle_estimate(&request, url, format, output),
        Commands::Gauge {
            material,
            amps,
            volts,
            length,
            max_drop,
            format,
        } => handle_gauge(material.into(), amps, volts, length, max_drop, format),
        Commands::Plan {
            total,
            packs,
            format,
        } => handle_plan(total, &packs, format),
    };

    process::exit(exit_code);
}

fn fetch_specs(url: &str) -> Result<ProductSpec, String> {
    let runtime = tokio::runtime::Runtime::new().map_err(|e| e.to_string())?;
    runtime.block_on(async {
        let scraper = PageScraper::new().map_err(|e| e.to_string())?;
        scraper.extract_specs(url).await.map_err(|e| e.to_string())
    })
}

fn handle_extract(
    url: Option<String>,
    text: Option<String>,
    file: Option<PathBuf>,
    format: OutputFormat,
) -> i32 {
    let spec = if let Some(url) = url {
        match fetch_specs(&url) {
            Ok(spec) => spec,
            Err(e) => {
                eprintln!("Error: couldn't fetch/parse the page: {}", e);
                return 1;
            }
        }
    } else if let Some(text) = text {
        extract_from_text(&text)
    } else if let Some(path) = file {
        match std::fs::read_to_string(&path) {
            Ok(text) => extract_from_text(&text),
            Err(e) => {
                eprintln!("Error: couldn't read {}: {}", path.display(), e);
                return 1;
            }
        }
    } else {
        eprintln!("Error: provide --url, --text or --file");
        return 1;
    };

    match format {
        OutputFormat::Json => match serde_json::to_string_pretty(&spec) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error: {}", e);
                return 1;
            }
        },
        _ => output_spec_human(&spec),
    }
    0
}

fn handle_estimate(
    request_path: &PathBuf,
    url: Option<String>,
    format: OutputFormat,
    output: Option<PathBuf>,
) -> i32 {
    let mut request = match EstimateRequest::from_json_file(request_path) {
        Ok(request) => request,
        Err(e) => {
            eprintln!("Error: {} ({})", e, request_path.display());
            return 1;
        }
    };

    let mut fetch_warning = None;
    if let Some(url) = url {
        match fetch_specs(&url) {
            Ok(spec) => request.product = Some(spec),
            Err(e) => {
                // Degrade: keep the URL, leave detection fields empty.
                fetch_warning = Some(format!("Couldn't fetch/parse the page: {}", e));
                request.product = Some(ProductSpec::url_only(url));
            }
        }
    }

    let mut result = match EstimateCore::estimate(&request) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };
    if let Some(warning) = fetch_warning {
        result.warnings.insert(0, warning);
    }

    if let Some(path) = output {
        match result.to_csv() {
            Ok(csv) => {
                if let Err(e) = std::fs::write(&path, csv) {
                    eprintln!("Error: couldn't write {}: {}", path.display(), e);
                    return 1;
                }
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                return 1;
            }
        }
    }

    match format {
        OutputFormat::Human => output_estimate_human(&result),
        OutputFormat::Json => match serde_json::to_string_pretty(&result) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error: {}", e);
                return 1;
            }
        },
        OutputFormat::Csv => match result.to_csv() {
            Ok(csv) => print!("{}", csv),
            Err(e) => {
                eprintln!("Error: {}", e);
                return 1;
            }
        },
    }
    0
}

fn handle_gauge(
    material: Material,
    amps: f64,
    volts: f64,
    length: f64,
    max_drop: f64,
    format: OutputFormat,
) -> i32 {
    if amps <= 0.0 || volts <= 0.0 || length <= 0.0 {
        eprintln!("Error: amps, volts and length must all be positive");
        return 1;
    }

    let selection = select_gauge(material, amps, volts, length, max_drop);
    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "material": material.to_string(),
                "suggested_gauge": wirecalc::awg_label(selection.size_code),
                "size_code": selection.size_code,
                "drop_volts": selection.drop_volts,
                "drop_pct": selection.drop_pct,
                "within_limit": selection.within_limit,
            });
            match serde_json::to_string_pretty(&output) {
                Ok(json) => println!("{}", json),
                Err(e) => {
                    eprintln!("Error: {}", e);
                    return 1;
                }
            }
        }
        _ => {
            println!(
                "Suggested minimum gauge ({}): {}",
                material,
                wirecalc::awg_label(selection.size_code)
            );
            println!(
                "Estimated drop: {:.2} V ({:.2}% of {} V)",
                selection.drop_volts, selection.drop_pct, volts
            );
            if !selection.within_limit {
                println!(
                    "WARNING: exceeds {}% max drop even at the largest listed size",
                    max_drop
                );
            }
            println!("\n{}", DISCLAIMER);
        }
    }
    0
}

fn handle_plan(total: f64, packs: &str, format: OutputFormat) -> i32 {
    let sizes = match wirecalc::parse_pack_override(packs) {
        Ok(sizes) if !sizes.is_empty() => sizes,
        Ok(_) => {
            eprintln!("Error: no pack sizes given");
            return 1;
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };

    let plan = plan_packs(total, &sizes);
    match format {
        OutputFormat::Json => match serde_json::to_string_pretty(&plan) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error: {}", e);
                return 1;
            }
        },
        _ => {
            println!("Recommended buy plan for {:.1} ft (rounded up):", total);
            for item in &plan.items {
                println!("  {} ft x {}", item.pack_length_ft, item.quantity);
            }
            println!("  Total covered: {} ft", plan.covered_ft());
        }
    }
    0
}

fn output_spec_human(spec: &ProductSpec) {
    println!("Parsed product specs");
    println!("{}", "─".repeat(60));
    if let Some(ref url) = spec.url {
        println!("  URL:       {}", url);
    }
    println!(
        "  Gauge:     {}",
        spec.detected_size
            .map(|s| s.label())
            .unwrap_or_else(|| "(not detected)".to_string())
    );
    println!(
        "  Material:  {}",
        spec.material
            .map(|m| m.to_string())
            .unwrap_or_else(|| "(not detected)".to_string())
    );
    match (spec.pack_length_ft, spec.pack_unit) {
        (Some(len), Some(wirecalc::PackUnit::Ft)) => println!("  Packaging: {} ft", len),
        (_, Some(wirecalc::PackUnit::FtEach)) => println!("  Packaging: sold by the foot"),
        _ => println!("  Packaging: (not detected)"),
    }
}

fn output_estimate_human(result: &EstimateResult) {
    let agg = &result.aggregate;
    println!("\nEstimate: {}", result.summary.project);
    println!("{}", "─".repeat(60));
    println!("  Sum of runs (ft, effective): {:.1}", agg.sum_runs_ft);
    println!("  Slack/vertical add (ft):     {:.1}", agg.slack_ft);
    println!("  Total cable to order (ft):   {:.1}", agg.total_cable_ft);
    println!("  Total conductor feet (ft):   {:.1}", agg.total_conductor_ft);
    println!(
        "\n  Assumed conductor material for voltage drop: {}",
        result.material
    );

    println!("\n  Voltage drop per run:");
    for row in &result.runs {
        match (&row.suggested_gauge, row.drop_volts, row.drop_pct) {
            (Some(gauge), Some(volts), Some(pct)) => {
                let flag = if row.within_limit == Some(false) {
                    "  [exceeds max drop even at largest listed size]"
                } else {
                    ""
                };
                println!(
                    "    {} ({:.1} ft one-way): {}, {:.2} V ({:.2}%){}",
                    row.label, row.one_way_length_ft, gauge, volts, pct, flag
                );
            }
            _ => println!(
                "    {} ({:.1} ft one-way): (skipped)",
                row.label, row.one_way_length_ft
            ),
        }
    }

    if let Some(ref check) = result.ampacity {
        println!("\n  Ampacity sanity: {}", check.message);
    }

    match &result.plan {
        PlanOutcome::Packs { plan } => {
            println!("\n  Recommended buy plan (rounded up):");
            for item in &plan.items {
                println!("    {} ft x {}", item.pack_length_ft, item.quantity);
            }
        }
        PlanOutcome::ByTheFoot {
            order_ft,
            rounding_ft,
        } => {
            println!(
                "\n  Sold by the foot: order {:.0} ft (rounded up to nearest {} ft)",
                order_ft, rounding_ft
            );
        }
        PlanOutcome::Unplanned => {}
    }

    for warning in &result.warnings {
        println!("\n  WARNING: {}", warning);
    }

    println!("\n{}", DISCLAIMER);
}
