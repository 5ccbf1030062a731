// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging (stderr, so stdout stays clean for --json)
// 3. Run the crawl to completion
// 4. Print the visited pages, as a list or as JSON
// 5. Exit with proper code (0 = success, 2 = error)
// =============================================================================

mod cli;

use anyhow::Result;
use clap::Parser;
use log::LevelFilter;

use cli::Cli;
use site_crawler::{CrawlReport, Crawler};

#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let crawler = Crawler::new(cli.crawl_config())?;
    let seed = crawler.scope().seed().to_string();

    let visited = crawler.run().await;
    let report = CrawlReport::new(seed, visited);

    print_report(&report, cli.json)
}

// RUST_LOG wins if set; otherwise info, or debug with --verbose
fn init_logging(verbose: bool) {
    let default_level = if verbose { LevelFilter::Debug } else { LevelFilter::Info };

    env_logger::Builder::new()
        .filter_level(default_level)
        .parse_default_env()
        .init();
}

fn print_report(report: &CrawlReport, json: bool) -> Result<()> {
    if json {
        let json_output = serde_json::to_string_pretty(report)?;
        println!("{}", json_output);
    } else {
        for page in &report.pages {
            println!("{}", page);
        }
        println!();
        println!("📄 Visited {} page(s) from {}", report.total, report.seed);
    }
    Ok(())
}
