use std::process::ExitCode;

use clap::{ArgAction, Parser};
use inductor::{
    CapacitanceUnit, InductanceEngine, InductanceUnit, InductorError, RawInputs, Settings,
    TimeUnit,
};
use log::{debug, LevelFilter};

/// Myriameter.uk Inductor Calculator
///
/// Calculate inductance by measuring resonant frequency (LC) with an
/// oscilloscope and square wave generator.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Opts {
    /// Known capacitor value
    #[arg(short = 'c', long, default_value = "10", allow_hyphen_values = true)]
    capacitance: String,

    /// Capacitor unit (pF, nF, µF)
    #[arg(long)]
    capacitance_unit: Option<CapacitanceUnit>,

    /// Number of cycles measured on the oscilloscope
    #[arg(short = 'n', long, allow_hyphen_values = true)]
    cycles: String,

    /// Total waveform time
    #[arg(short = 't', long, allow_hyphen_values = true)]
    time: String,

    /// Time unit (nS, µS, mS)
    #[arg(long)]
    time_unit: Option<TimeUnit>,

    /// Parasitic inductance of the module (zero if unknown)
    #[arg(short = 'p', long, default_value = "0", allow_hyphen_values = true)]
    parasitic: String,

    /// Parasitic inductance unit (pH, nH, µH)
    #[arg(long)]
    parasitic_unit: Option<InductanceUnit>,

    /// Display the result in this unit instead of the best one
    #[arg(short = 'd', long)]
    display_unit: Option<InductanceUnit>,

    /// Print the display state as JSON
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let opts = Opts::parse();
    init_logging(opts.verbose);

    match run(&opts) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e.status_line());
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn run(opts: &Opts) -> Result<(), InductorError> {
    let settings = Settings::from_env()?;
    let mut units = settings.units;
    if let Some(u) = opts.capacitance_unit { units = units.capacitance(u); }
    if let Some(u) = opts.time_unit { units = units.time(u); }
    if let Some(u) = opts.parasitic_unit { units = units.parasitic(u); }
    debug!("units: {units:?}");

    let raw = RawInputs::new(
        opts.capacitance.as_str(),
        opts.parasitic.as_str(),
        opts.cycles.as_str(),
        opts.time.as_str(),
    );

    let mut engine = InductanceEngine::new();
    engine.calculate(&raw, &units)?;
    let mut display = engine.display()?;

    // The flag must be honoured or reported; the configured preference
    // only applies when it is enabled for this result.
    if let Some(u) = opts.display_unit {
        display.select(u)?;
    } else if let Some(u) = settings.preferred_display {
        if display.is_enabled(u) {
            display.select(u)?;
        }
    }

    if opts.json {
        println!("{}", display.to_json()?);
    } else {
        println!("{}", display.text());
        let enabled: Vec<&str> = display.enabled_units().iter().map(|u| u.symbol()).collect();
        println!("Display result in: {}", enabled.join(" "));
        println!("{}", engine.status());
    }
    Ok(())
}
