//! simplecalc - command-line front end
//!
//! `simplecalc [OPTIONS] <OPERATOR> <LHS> <RHS>`

use anyhow::Result;
use clap::Parser;
use tracing::warn;

use crate::config::{Config, OutputFormat};
use crate::observability::telemetry::{
    init_tracing, init_tracing_with_filter, record_evaluation, sanitize_for_log,
};
use crate::operand::{parse_operand, OperandPosition};
use crate::operator::Operator;
use crate::output::{self, Computation, RenderOptions};

#[derive(Parser, Debug)]
#[command(name = "simplecalc")]
#[command(about = "Add, subtract, multiply, divide and raise IEEE-754 doubles")]
#[command(version)]
#[command(allow_negative_numbers = true)]
pub struct Cli {
    /// Operation: add (+), sub (-), mul (*), div (/), pow (^)
    #[arg(value_enum)]
    pub operator: Operator,

    /// Left operand
    pub lhs: String,

    /// Right operand
    pub rhs: String,

    /// Config file path
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<String>,

    /// Number of decimals in the printed result
    #[arg(long, value_name = "N")]
    pub precision: Option<usize>,

    /// Output format
    #[arg(long, value_enum)]
    pub output_format: Option<OutputFormat>,

    /// Print only the result
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Log evaluation details to stderr
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

impl Cli {
    /// Write flags that have a config counterpart into `config`.
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(p) = self.precision {
            config.output.precision = Some(p);
        }
        if let Some(format) = self.output_format {
            config.output.format = format;
        }
    }

    /// Merge CLI flags over the loaded config. Flags win.
    pub fn render_options(&self, config: &Config, no_color_env: bool) -> RenderOptions {
        RenderOptions {
            format: self.output_format.unwrap_or(config.output.format),
            precision: self.precision.or(config.output.precision),
            quiet: self.quiet,
            color: config.output.color && !self.no_color && !no_color_env,
        }
    }
}

/// Parse both operands and evaluate.
pub fn evaluate(operator: Operator, lhs: &str, rhs: &str) -> Result<Computation> {
    let lhs = parse_operand(OperandPosition::Left, lhs).inspect_err(|_| {
        warn!(input = %sanitize_for_log(lhs), "Rejected left operand");
    })?;
    let rhs = parse_operand(OperandPosition::Right, rhs).inspect_err(|_| {
        warn!(input = %sanitize_for_log(rhs), "Rejected right operand");
    })?;

    let computation = Computation::new(operator, lhs, rhs);
    record_evaluation(operator, lhs, rhs, computation.result);
    Ok(computation)
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    execute(&cli)
}

pub fn execute(cli: &Cli) -> Result<()> {
    let mut config = Config::load_unvalidated(cli.config.as_deref())?;
    cli.apply_overrides(&mut config);
    config.validate()?;

    if cli.verbose {
        init_tracing_with_filter("debug");
    } else {
        init_tracing(config.logging.filter.as_deref());
    }

    let opts = cli.render_options(&config, std::env::var_os("NO_COLOR").is_some());
    if !opts.color {
        colored::control::set_override(false);
    }

    let computation = evaluate(cli.operator, &cli.lhs, &cli.rhs)?;
    println!("{}", output::render(&computation, &opts));
    Ok(())
}
