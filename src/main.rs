use clap::Parser;
use shot_caddie::utils::logger;
use shot_caddie::{CaddieEngine, CliShot, Estimate};

fn main() -> anyhow::Result<()> {
    let cli = CliShot::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting shot-caddie");
    if cli.verbose {
        tracing::debug!("CLI inputs: {:?}", cli);
    }

    let json = cli.json;
    let engine = CaddieEngine::new(cli);

    match engine.run() {
        Ok(estimate) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&estimate)?);
            } else {
                print_report(&estimate);
            }
        }
        Err(e) => {
            tracing::error!("Estimate failed: {}", e);
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}

fn print_report(estimate: &Estimate) {
    let b = &estimate.breakdown;

    println!("Adjusted distance: {} yds", estimate.adjusted_distance);
    println!("  Carry:  {} yds", estimate.carry_distance);
    println!("  Runout: {} yds", estimate.runout_distance);
    println!();
    println!("  Temperature: {} yds", signed(percent_to_yards(b.temp_adjustment_percent)));
    println!("  Elevation:   {} yds", signed(percent_to_yards(b.elevation_adjustment_percent)));
    println!("  Wind:        {} yds", signed(b.wind_adjustment_yards));
    println!("  Lie & spin:  {} yds", signed(percent_to_yards(b.lie_adjustment_percent)));
    println!("  Runout:      +{} yds", estimate.runout_distance);
}

// Display-only conversion the form UI also does: 1.5 yds per stored percent.
// The engine's own output keeps the percentages.
fn percent_to_yards(percent: f64) -> i32 {
    (percent * 1.5).round() as i32
}

fn signed(yards: i32) -> String {
    if yards > 0 {
        format!("+{yards}")
    } else {
        yards.to_string()
    }
}
