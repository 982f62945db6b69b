use std::env;

use clap::{Parser, Subcommand};
use profit_tracker_tui::app::{App, Portfolio, calc, portfolio::DEFAULT_BEGIN_VALUE};

#[derive(Parser)]
#[command(name = "profit-tracker-tui", about = "A terminal-based portfolio profit tracker")]
struct Cli {
    /// CSV file with holdings to load at startup (name,price,date)
    #[arg(long)]
    import: Option<String>,

    /// Portfolio beginning value; overrides PORTFOLIO_BEGIN_VALUE
    #[arg(long)]
    begin_value: Option<f64>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Print profit statistics for a date range and exit
    Report {
        #[arg(long)]
        from: String,

        #[arg(long)]
        to: String,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    let beginning_value = cli.begin_value.unwrap_or_else(|| {
        env::var("PORTFOLIO_BEGIN_VALUE")
            .map(|value| calc::coerce_amount(&value))
            .unwrap_or(DEFAULT_BEGIN_VALUE)
    });

    let mut portfolio = Portfolio::new(beginning_value);

    if let Some(path) = &cli.import {
        let expanded = shellexpand::tilde(path);
        portfolio.import_holdings(&expanded)?;
    }

    match cli.command {
        Some(Command::Report { from, to, json }) => {
            let report = portfolio.report(&from, &to);
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("Total Profit:      {:.2}", report.profit());
                println!("Overall Return:    {:.4}", report.overall_return());
                println!("Annualized Return: {:.4}", report.annualized_return());
            }
        }
        None => {
            let mut app = App::new(portfolio, cli.import);
            app.run()?;
        }
    }

    Ok(())
}
