use std::fs;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use chakra_core::{
    ChartData, Graha, Rashi, bucket_by_area, calculate_drishti, dignity, rashi_lord,
    sign_for_area,
};

#[derive(Parser)]
#[command(name = "chakra", about = "Vedic chart-layout CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rashi occupying a grid area
    SignForArea {
        /// Grid area id (1-12)
        area: u8,
        /// Lagna rashi number (1-12)
        #[arg(long)]
        lagna: u8,
    },
    /// Grid area holding a rashi
    AreaForSign {
        /// Rashi number (1-12)
        sign: u8,
        /// Lagna rashi number (1-12)
        #[arg(long)]
        lagna: u8,
    },
    /// Full 12-area listing for a chart snapshot
    Grid {
        /// Chart snapshot JSON ({"zodiacNumber": n, "planetSigns": [..]})
        file: PathBuf,
    },
    /// Graha drishti map for a chart snapshot
    Drishti {
        /// Chart snapshot JSON
        file: PathBuf,
        /// Only print the grahas aspecting this rashi number (1-12)
        #[arg(long)]
        sign: Option<u8>,
    },
    /// Lord of a rashi
    Lord {
        /// Rashi number (1-12)
        sign: u8,
    },
    /// Placement dignity of a graha in a rashi
    Dignity {
        /// Graha — English name (Sun..Ketu) or Sinhala glyph
        graha: String,
        /// Rashi number (1-12)
        sign: u8,
    },
}

fn require_rashi(number: u8) -> Rashi {
    match Rashi::from_number(number) {
        Some(r) => r,
        None => {
            eprintln!("Invalid rashi number: {number} (1-12)");
            std::process::exit(1);
        }
    }
}

fn require_graha(s: &str) -> Graha {
    match Graha::from_english_name(s).or_else(|| Graha::from_glyph(s)) {
        Some(g) => g,
        None => {
            eprintln!("Invalid graha: {s}");
            eprintln!("Valid: Sun, Moon, Mars, Mercury, Jupiter, Venus, Saturn, Rahu, Ketu");
            std::process::exit(1);
        }
    }
}

fn load_chart(path: &PathBuf) -> ChartData {
    let text = match fs::read_to_string(path) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Failed to read {}: {e}", path.display());
            std::process::exit(1);
        }
    };
    match serde_json::from_str(&text) {
        Ok(chart) => chart,
        Err(e) => {
            eprintln!("Invalid chart snapshot JSON: {e}");
            std::process::exit(1);
        }
    }
}

fn require_lagna(chart: &ChartData) -> Rashi {
    match chart.lagna() {
        Some(r) => r,
        None => {
            eprintln!("Invalid lagna number in snapshot: {}", chart.zodiac_number);
            std::process::exit(1);
        }
    }
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::SignForArea { area, lagna } => {
            let lagna = require_rashi(lagna);
            match sign_for_area(area, lagna) {
                Ok(sign) => println!(
                    "{} ({}) - sign {}",
                    sign.name(),
                    sign.western_name(),
                    sign.number()
                ),
                Err(e) => {
                    eprintln!("{e}");
                    std::process::exit(1);
                }
            }
        }

        Commands::AreaForSign { sign, lagna } => {
            let sign = require_rashi(sign);
            let lagna = require_rashi(lagna);
            println!("area {}", chakra_core::area_for_sign(sign, lagna));
        }

        Commands::Grid { file } => {
            let chart = load_chart(&file);
            let lagna = require_lagna(&chart);
            let positions = chart.positions();
            let buckets = bucket_by_area(&positions, lagna);
            println!(
                "Lagna: {} ({})",
                lagna.name(),
                lagna.western_name()
            );
            for area in 1..=12u8 {
                // area range is fixed, sign_for_area cannot fail here
                let Ok(sign) = sign_for_area(area, lagna) else {
                    continue;
                };
                let grahas = buckets
                    .get(&area)
                    .map(|g| {
                        g.iter()
                            .map(|graha| graha.glyph())
                            .collect::<Vec<_>>()
                            .join(", ")
                    })
                    .unwrap_or_default();
                println!(
                    "area {area:>2}: {:<10} ({:<11}) [{grahas}]",
                    sign.name(),
                    sign.western_name()
                );
            }
        }

        Commands::Drishti { file, sign } => {
            let chart = load_chart(&file);
            let positions = chart.positions();
            let map = calculate_drishti(&positions);
            match sign {
                Some(n) => {
                    let sign = require_rashi(n);
                    let grahas: Vec<&str> = map
                        .grahas_aspecting(sign)
                        .iter()
                        .map(|g| g.name())
                        .collect();
                    println!("Sign {}: [{}]", sign.number(), grahas.join(", "));
                }
                None => {
                    let rendered = map.format();
                    if rendered.is_empty() {
                        println!("(no aspects)");
                    } else {
                        println!("{rendered}");
                    }
                }
            }
        }

        Commands::Lord { sign } => {
            let sign = require_rashi(sign);
            let lord = rashi_lord(sign);
            println!(
                "{} is ruled by {} ({})",
                sign.name(),
                lord.name(),
                lord.english_name()
            );
        }

        Commands::Dignity { graha, sign } => {
            let graha = require_graha(&graha);
            let sign = require_rashi(sign);
            let d = dignity(graha, sign);
            println!(
                "{} in {}: {} ({})",
                graha.english_name(),
                sign.name(),
                d.name(),
                d.sinhala_name()
            );
        }
    }
}
