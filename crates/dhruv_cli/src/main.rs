use std::path::PathBuf;

use chrono::{NaiveDate, Utc};
use clap::{Parser, Subcommand, ValueEnum};
use dhruv_janma::{
    FixedSkySource, JanmaConfig, MeanMotionSource, PositionSource, SignatureEngine,
    SignatureReport, parse_birth_date,
};
use dhruv_vedic_base::{
    ALL_SYSTEMS, AshtakavargaResult, AyanamshaSystem, SAPTA_GRAHAS, calculate_ashtakavarga,
    calculate_bav_by_name, calculate_fixed_ashtakavarga, tithi_from_longitudes,
};
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser)]
#[command(name = "dhruv", about = "Birth-date signature CLI")]
struct Cli {
    /// Verbosity (-v info, -vv debug, -vvv trace); RUST_LOG applies otherwise
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum SourceKind {
    /// Mean orbital elements
    Mean,
    /// Frozen demo sky
    Fixed,
}

#[derive(Subcommand)]
enum Commands {
    /// Birth-date signature as JSON
    Signature {
        /// Birth date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Projection date for life windows (YYYY-MM-DD, default: today UTC)
        #[arg(long)]
        today: Option<String>,
        /// JSON configuration file
        #[arg(long)]
        config: Option<PathBuf>,
        /// Position source
        #[arg(long, value_enum, default_value = "mean")]
        source: SourceKind,
        /// Ayanamsha code for the mean source (0=Lahiri, 1=KP, 2=Raman,
        /// 3=Fagan-Bradley, 4=Yukteshwar)
        #[arg(long, default_value = "0")]
        ayanamsha: usize,
        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },
    /// Compute Ashtakavarga from rashi positions
    Ashtakavarga {
        /// Comma-separated rashi indices for Sun,Moon,Mars,Mercury,Jupiter,Venus,Saturn (0-11)
        #[arg(long)]
        graha_rashis: String,
        /// Lagna rashi index (0-11)
        #[arg(long)]
        lagna_rashi: u8,
        /// Leave out the Lagna's contributions
        #[arg(long)]
        fixed: bool,
    },
    /// BAV of one body by name (unknown names score zero)
    Bav {
        /// Graha name, English or Sanskrit
        #[arg(long)]
        graha: String,
        /// Comma-separated rashi indices for Sun,Moon,Mars,Mercury,Jupiter,Venus,Saturn (0-11)
        #[arg(long)]
        graha_rashis: String,
        /// Lagna rashi index (0-11)
        #[arg(long)]
        lagna_rashi: u8,
    },
    /// Tithi from Sun and Moon longitudes
    Tithi {
        /// Sun longitude in degrees
        #[arg(long)]
        sun: f64,
        /// Moon longitude in degrees
        #[arg(long)]
        moon: f64,
    },
}

const RASHI_ABBR: [&str; 12] = [
    "Mes", "Vrs", "Mit", "Kar", "Sim", "Kan", "Tul", "Vri", "Dha", "Mak", "Kum", "Mee",
];

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn parse_graha_rashis(s: &str) -> [u8; 7] {
    let vals: Vec<u8> = s
        .split(',')
        .map(|v| {
            v.trim().parse::<u8>().unwrap_or_else(|e| {
                eprintln!("Invalid rashi value '{v}': {e}");
                std::process::exit(1);
            })
        })
        .collect();
    if vals.len() != 7 {
        eprintln!(
            "Expected 7 comma-separated rashi indices, got {}",
            vals.len()
        );
        std::process::exit(1);
    }
    if let Some(bad) = vals.iter().find(|&&v| v > 11) {
        eprintln!("Rashi index {bad} out of range (0-11)");
        std::process::exit(1);
    }
    let mut arr = [0u8; 7];
    arr.copy_from_slice(&vals);
    arr
}

fn require_lagna(lagna: u8) -> u8 {
    if lagna > 11 {
        eprintln!("Lagna rashi index {lagna} out of range (0-11)");
        std::process::exit(1);
    }
    lagna
}

fn require_aya_system(code: usize) -> AyanamshaSystem {
    ALL_SYSTEMS.get(code).copied().unwrap_or_else(|| {
        eprintln!("Invalid ayanamsha code: {code} (0-{})", ALL_SYSTEMS.len() - 1);
        std::process::exit(1);
    })
}

fn require_date(s: &str) -> NaiveDate {
    parse_birth_date(s).unwrap_or_else(|e| {
        eprintln!("{e}");
        std::process::exit(1);
    })
}

fn load_config(path: Option<&PathBuf>) -> JanmaConfig {
    match path {
        Some(p) => JanmaConfig::load(p).unwrap_or_else(|e| {
            eprintln!("Failed to load config: {e}");
            std::process::exit(1);
        }),
        None => JanmaConfig::default(),
    }
}

fn run_signature<S: PositionSource>(
    source: S,
    config: JanmaConfig,
    date: NaiveDate,
    today: NaiveDate,
) -> SignatureReport {
    let engine = SignatureEngine::new(source, config).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });
    engine.run(date, today).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    })
}

fn print_row(label: &str, points: &[u8; 12]) {
    print!("{:>10}", label);
    for &p in points {
        print!("{:>5}", p);
    }
    let total: u16 = points.iter().map(|&p| p as u16).sum();
    println!("{:>7}", total);
}

fn print_header() {
    print!("{:>10}", "");
    for name in &RASHI_ABBR {
        print!("{:>5}", name);
    }
    println!("  Total");
    println!("{}", "-".repeat(10 + 5 * 12 + 7));
}

fn print_ashtakavarga(result: &AshtakavargaResult) {
    println!("Bhinna Ashtakavarga (BAV):\n");
    print_header();
    for (graha, bav) in SAPTA_GRAHAS.iter().zip(result.bavs.iter()) {
        print_row(graha.english_name(), &bav.points);
    }

    println!("\nSarva Ashtakavarga (SAV):\n");
    print_header();
    print_row("SAV", &result.sav.total_points);
    print_row("Shodhita", &result.shodhita.total_points);
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Signature {
            date,
            today,
            config,
            source,
            ayanamsha,
            pretty,
        } => {
            let date = require_date(&date);
            let today = today
                .as_deref()
                .map(require_date)
                .unwrap_or_else(|| Utc::now().date_naive());
            let config = load_config(config.as_ref());
            tracing::info!(%date, %today, cells = config.sampling.cell_count(), "running signature");

            let report = match source {
                SourceKind::Mean => {
                    let system = require_aya_system(ayanamsha);
                    run_signature(MeanMotionSource::new(system), config, date, today)
                }
                SourceKind::Fixed => run_signature(FixedSkySource::default(), config, date, today),
            };

            let json = if pretty {
                serde_json::to_string_pretty(&report)
            } else {
                serde_json::to_string(&report)
            };
            match json {
                Ok(s) => println!("{s}"),
                Err(e) => {
                    eprintln!("Failed to serialize report: {e}");
                    std::process::exit(1);
                }
            }
        }

        Commands::Ashtakavarga {
            graha_rashis,
            lagna_rashi,
            fixed,
        } => {
            let rashis = parse_graha_rashis(&graha_rashis);
            let lagna = require_lagna(lagna_rashi);
            let result = if fixed {
                calculate_fixed_ashtakavarga(&rashis)
            } else {
                calculate_ashtakavarga(&rashis, lagna)
            };
            if fixed {
                println!("Ashtakavarga without Lagna\n");
            } else {
                println!("Ashtakavarga, Lagna {}\n", RASHI_ABBR[lagna as usize]);
            }
            print_ashtakavarga(&result);
        }

        Commands::Bav {
            graha,
            graha_rashis,
            lagna_rashi,
        } => {
            let rashis = parse_graha_rashis(&graha_rashis);
            let lagna = require_lagna(lagna_rashi);
            let points = calculate_bav_by_name(&graha, &rashis, lagna);
            print_header();
            print_row(graha.trim(), &points);
        }

        Commands::Tithi { sun, moon } => {
            let t = tithi_from_longitudes(sun, moon);
            println!(
                "{} ({} {}) - tithi {} of 30, {} of 15 in paksha ({:.4} deg elongation)",
                t.tithi.name(),
                t.paksha.name(),
                t.paksha.english_name(),
                t.number,
                t.tithi_in_paksha,
                t.elongation
            );
        }
    }
}
