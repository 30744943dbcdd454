use clap::{Parser, Subcommand, ValueEnum};
use numerology_core::*;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

mod display;

#[derive(Parser)]
#[command(name = "numerology")]
#[command(about = "Pythagorean numerology calculator", long_about = None)]
#[command(arg_required_else_help = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Use this config file instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate the numbers for one name and birth date
    Calc {
        /// Full name (Latin letters are counted, everything else is ignored)
        #[arg(long, default_value = "")]
        name: String,

        /// Birth date as YYYY-MM-DD
        #[arg(long)]
        date: String,

        /// Output format
        #[arg(long, value_enum)]
        format: Option<FormatArg>,

        /// Digits to count for the intensity table
        #[arg(long, value_enum)]
        intensity_source: Option<SourceArg>,

        /// Show how each number was calculated
        #[arg(long)]
        explain: bool,
    },

    /// Calculate every row of a CSV file with `name,birth_date` columns
    Batch {
        /// Input CSV file
        #[arg(long)]
        input: PathBuf,

        /// Output CSV file (stdout if omitted)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Digits to count for the intensity table
        #[arg(long, value_enum)]
        intensity_source: Option<SourceArg>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum SourceArg {
    BirthDate,
    NameValues,
}

impl From<SourceArg> for IntensitySource {
    fn from(arg: SourceArg) -> Self {
        match arg {
            SourceArg::BirthDate => IntensitySource::BirthDate,
            SourceArg::NameValues => IntensitySource::NameValues,
        }
    }
}

fn main() -> Result<ExitCode> {
    numerology_core::logging::init();

    let cli = Cli::parse();

    let config = match cli.config {
        Some(ref path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    match cli.command {
        Commands::Calc {
            name,
            date,
            format,
            intensity_source,
            explain,
        } => cmd_calc(&name, &date, format, intensity_source, explain, &config),
        Commands::Batch {
            input,
            output,
            intensity_source,
        } => cmd_batch(input, output, intensity_source, &config).map(|()| ExitCode::SUCCESS),
    }
}

fn options_for(source: Option<SourceArg>, config: &Config) -> CalculationOptions {
    let mut options = config.calculation_options();
    if let Some(source) = source {
        options.intensity_source = source.into();
    }
    tracing::debug!("Calculation options: {:?}", options);
    options
}

fn cmd_calc(
    name: &str,
    date: &str,
    format: Option<FormatArg>,
    intensity_source: Option<SourceArg>,
    explain: bool,
    config: &Config,
) -> Result<ExitCode> {
    let options = options_for(intensity_source, config);

    // An unusable date is a prompt for input, not an error report
    let Some(reading) = calculate_with(name, date, &options) else {
        eprintln!("Please enter a birth date as YYYY-MM-DD (e.g. 1990-07-15).");
        return Ok(ExitCode::FAILURE);
    };

    let format = format.map(OutputFormat::from).unwrap_or(config.output.format);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, &reading)?;
            writeln!(out)?;
        }
        OutputFormat::Text => {
            display::write_reading(&mut out, name, &reading)?;
            if explain || config.output.explain {
                display::write_narrative(&mut out, &reading)?;
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn cmd_batch(
    input: PathBuf,
    output: Option<PathBuf>,
    intensity_source: Option<SourceArg>,
    config: &Config,
) -> Result<()> {
    let options = options_for(intensity_source, config);
    let reader = BufReader::new(File::open(&input)?);

    let summary = match output {
        Some(ref path) => {
            let writer = BufWriter::new(File::create(path)?);
            calculate_csv(reader, writer, &options)?
        }
        None => calculate_csv(reader, io::stdout().lock(), &options)?,
    };

    if let Some(path) = output {
        println!(
            "✓ Calculated {} of {} rows ({} invalid dates)",
            summary.calculated, summary.total, summary.invalid
        );
        println!("  CSV: {}", path.display());
    } else {
        eprintln!(
            "Calculated {} of {} rows ({} invalid dates)",
            summary.calculated, summary.total, summary.invalid
        );
    }

    Ok(())
}
