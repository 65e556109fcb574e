use clap::{Parser, Subcommand};
use serde::Serialize;
use thiserror::Error;
use tj_core::units::m;
use tj_core::{TjError, ensure_finite, ensure_params_finite};
use tj_cycle::{CycleError, Formula, IsaState, Namespace, isa_state};

#[derive(Parser)]
#[command(name = "tj-cli")]
#[command(about = "Turbojet cycle formula calculator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List available formulas with their parameter order
    List,
    /// Evaluate one formula
    Eval {
        /// Formula name (e.g. compressor_work)
        formula: String,
        /// Parameter values, in the order shown by `list`
        #[arg(allow_negative_numbers = true)]
        values: Vec<f64>,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// ISA temperature and pressure at an altitude
    Isa {
        /// Geopotential altitude in meters
        #[arg(allow_negative_numbers = true)]
        altitude: f64,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Error, Debug)]
enum CliError {
    #[error(transparent)]
    Cycle(#[from] CycleError),

    #[error(transparent)]
    Input(#[from] TjError),

    #[error("Failed to encode output: {0}")]
    Json(#[from] serde_json::Error),
}

type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Serialize)]
struct Param {
    name: &'static str,
    value: f64,
}

#[derive(Debug, Serialize)]
struct Evaluation {
    formula: Formula,
    namespace: Namespace,
    inputs: Vec<Param>,
    value: f64,
}

fn main() -> CliResult<()> {
    // Logs go to stderr so JSON on stdout stays clean
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::List => cmd_list(),
        Commands::Eval {
            formula,
            values,
            json,
        } => cmd_eval(&formula, &values, json),
        Commands::Isa { altitude, json } => cmd_isa(altitude, json),
    }
}

fn cmd_list() -> CliResult<()> {
    for f in Formula::ALL {
        println!("{:<20} {:<28} ({})", f.namespace(), f.name(), f.params().join(", "));
    }
    Ok(())
}

fn evaluate(formula_name: &str, values: &[f64]) -> CliResult<Evaluation> {
    let formula: Formula = formula_name.parse()?;
    ensure_params_finite(formula.params(), values)?;
    let value = formula.eval(values)?;
    let inputs = formula
        .params()
        .iter()
        .zip(values)
        .map(|(&name, &value)| Param { name, value })
        .collect();
    Ok(Evaluation {
        formula,
        namespace: formula.namespace(),
        inputs,
        value,
    })
}

fn cmd_eval(name: &str, values: &[f64], json: bool) -> CliResult<()> {
    let evaluation = evaluate(name, values)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&evaluation)?);
    } else {
        println!("{}::{}", evaluation.namespace, evaluation.formula);
        for p in &evaluation.inputs {
            println!("  {:<20} {}", p.name, p.value);
        }
        println!("  = {}", evaluation.value);
    }
    Ok(())
}

fn cmd_isa(altitude: f64, json: bool) -> CliResult<()> {
    let altitude = ensure_finite(altitude, "altitude")?;
    let state: IsaState = isa_state(m(altitude))?;
    if json {
        println!("{}", serde_json::to_string_pretty(&state)?);
    } else {
        println!("Altitude:    {:.1} m", state.altitude.value);
        println!("Temperature: {:.2} K", state.temperature.value);
        println!("Pressure:    {:.1} Pa", state.pressure.value);
    }
    Ok(())
}
