use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Args, Parser, Subcommand, ValueEnum};
use savings_calc::chart::series_for;
use savings_calc::report::{schedule_header, ReportView};
use savings_calc::{
    compute, CalculationRequest, CalculationResult, RawLoanForm, RawMortgageForm, RawValue,
    ValidationError,
};
use serde_json::json;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Copy, Clone, Debug, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

/// Loan, mortgage and deposit calculators
#[derive(Parser, Debug)]
#[command(name = "savings-calc", version, about = "Loan, mortgage and deposit calculators")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Output format
    #[arg(long, value_enum, default_value = "table", global = true)]
    format: OutputFormat,

    /// Also print the period-by-period schedule (chart series in JSON)
    #[arg(long, global = true)]
    chart: bool,

    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fixed-payment loan
    Loan(LoanArgs),
    /// Mortgage: loan on the price minus the down payment
    Mortgage(MortgageArgs),
    /// Deposit with monthly compounding
    Deposit(LoanArgs),
    /// Read a JSON request, e.g. {"kind":"loan","principal":"1000","term_months":12,"annual_rate_percent":"10"}
    File {
        /// Request file (stdin by default)
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
}

#[derive(Args, Debug)]
struct LoanArgs {
    /// Amount borrowed or deposited
    #[arg(long, allow_hyphen_values = true)]
    principal: String,
    /// Term in months
    #[arg(long, allow_hyphen_values = true)]
    term: String,
    /// Annual rate in percent
    #[arg(long, allow_hyphen_values = true)]
    rate: String,
}

#[derive(Args, Debug)]
struct MortgageArgs {
    /// Property price
    #[arg(long, allow_hyphen_values = true)]
    principal: String,
    /// Down payment (zero when omitted)
    #[arg(long, allow_hyphen_values = true)]
    down: Option<String>,
    /// Term in months
    #[arg(long, allow_hyphen_values = true)]
    term: String,
    /// Annual rate in percent
    #[arg(long, allow_hyphen_values = true)]
    rate: String,
}

impl From<LoanArgs> for RawLoanForm {
    fn from(args: LoanArgs) -> Self {
        RawLoanForm {
            principal: args.principal.into(),
            term_months: args.term.into(),
            annual_rate_percent: args.rate.into(),
        }
    }
}

impl From<MortgageArgs> for RawMortgageForm {
    fn from(args: MortgageArgs) -> Self {
        RawMortgageForm {
            principal: args.principal.into(),
            down_payment: args.down.map(RawValue::from),
            term_months: args.term.into(),
            annual_rate_percent: args.rate.into(),
        }
    }
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn read_request(input: Option<PathBuf>) -> anyhow::Result<CalculationRequest> {
    let raw = match input {
        Some(path) => fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => io::read_to_string(io::stdin()).context("failed to read stdin")?,
    };
    serde_json::from_str(&raw).context("malformed calculation request")
}

fn render(
    out: &mut impl Write,
    result: &CalculationResult,
    format: OutputFormat,
    chart: bool,
) -> anyhow::Result<()> {
    let report = ReportView::from(result);
    match format {
        OutputFormat::Json => {
            let mut value = json!({
                "kind": result.kind,
                "summary": report.summary,
            });
            if chart {
                value["chart"] = serde_json::to_value(series_for(result.kind, &result.schedule))?;
            }
            serde_json::to_writer_pretty(&mut *out, &value)?;
            writeln!(out)?;
        }
        OutputFormat::Table => {
            write!(out, "{}", report.summary)?;
            if chart {
                writeln!(out)?;
                writeln!(out, "{}", schedule_header(result.kind))?;
                for row in &report.schedule {
                    writeln!(out, "{row}")?;
                }
            }
        }
    }
    Ok(())
}

fn run(cli: Cli) -> anyhow::Result<Result<(), ValidationError>> {
    let request = match cli.command {
        Command::Loan(args) => CalculationRequest::Loan(args.into()),
        Command::Mortgage(args) => CalculationRequest::Mortgage(args.into()),
        Command::Deposit(args) => CalculationRequest::Deposit(args.into()),
        Command::File { input } => read_request(input)?,
    };
    debug!(?request, "parsed request");

    let result = match compute(&request) {
        Ok(result) => result,
        Err(e) => return Ok(Err(e)),
    };
    info!(kind = ?result.kind, periods = result.schedule.len(), "calculation finished");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    render(&mut out, &result, cli.format, cli.chart)?;
    Ok(Ok(()))
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(Ok(())) => ExitCode::SUCCESS,
        Ok(Err(invalid)) => {
            eprintln!("{invalid}");
            ExitCode::from(2)
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_mortgage() {
        let cli = Cli::try_parse_from([
            "savings-calc",
            "--format",
            "json",
            "mortgage",
            "--principal",
            "300000",
            "--down",
            "60000",
            "--term",
            "240",
            "--rate",
            "9",
        ])
        .unwrap();
        assert!(matches!(cli.format, OutputFormat::Json));
        let Command::Mortgage(args) = cli.command else {
            panic!("expected mortgage command");
        };
        let form = RawMortgageForm::from(args);
        assert_eq!(form.down_payment, Some(RawValue::from("60000")));
    }

    #[test]
    fn test_render_table_with_schedule() {
        let request = CalculationRequest::Loan(RawLoanForm {
            principal: "1200".into(),
            term_months: "3".into(),
            annual_rate_percent: "0".into(),
        });
        let result = compute(&request).unwrap();

        let mut out = Vec::new();
        render(&mut out, &result, OutputFormat::Table, true).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("Monthly payment"));
        assert!(text.contains("400.00"));
        assert!(text.contains("period"));
        assert!(text.contains("remaining"));
        assert_eq!(text.lines().filter(|l| l.trim_start().starts_with('3')).count(), 1);
    }

    #[test]
    fn test_render_json_with_chart() {
        let request = CalculationRequest::Deposit(RawLoanForm {
            principal: "1000".into(),
            term_months: "2".into(),
            annual_rate_percent: "12".into(),
        });
        let result = compute(&request).unwrap();

        let mut out = Vec::new();
        render(&mut out, &result, OutputFormat::Json, true).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();

        assert_eq!(value["kind"], "deposit");
        assert_eq!(value["chart"]["points"].as_array().unwrap().len(), 2);
    }
}
