use std::process::ExitCode;

use anyhow::{Context, Result};
use beaconlens_core::{DecodeError, SensorReading, decode_hex};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};

#[derive(Parser, Debug)]
#[command(name = "beaconlens")]
#[command(version)]
#[command(
    about = "Decode a 16-byte sensor beacon telemetry record from its hex form.",
    long_about = None,
    after_help = "Examples:\n  beaconlens 001E0100F5540070C1BE00000001FFFF\n  beaconlens --json 001E0100F5540070C1BE00000001FFFF\n  beaconlens --pretty 001e0100f5540070c1be00000001ffff"
)]
struct Cli {
    /// 32-character hex payload (case-insensitive)
    payload: String,

    /// Emit the reading as a JSON object
    #[arg(long)]
    json: bool,

    /// Pretty-print the JSON output (implies --json)
    #[arg(long)]
    pretty: bool,
}

fn main() -> ExitCode {
    // Only a successful decode exits 0: help-style invocations (`help`,
    // `-h`, `--help`) and argument misuse print usage and exit non-zero.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return match err.kind() {
                ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::from(2),
            };
        }
    };

    if cli.payload == "help" {
        let mut usage = Cli::command();
        let _ = usage.print_help();
        return ExitCode::from(2);
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err.message);
            if let Some(hint) = err.hint {
                eprintln!("hint: {}", hint);
            }
            ExitCode::from(2)
        }
    }
}

#[derive(Debug)]
struct CliError {
    message: String,
    hint: Option<String>,
}

impl CliError {
    fn new(message: impl Into<String>, hint: Option<String>) -> Self {
        Self {
            message: message.into(),
            hint,
        }
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        CliError::new(err.to_string(), None)
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let reading = decode_hex(&cli.payload).map_err(decode_error_to_cli)?;

    if cli.json || cli.pretty {
        let json = serialize_reading(&reading, cli.pretty)?;
        println!("{}", json);
    } else {
        print_reading(&reading);
    }
    Ok(())
}

fn decode_error_to_cli(err: DecodeError) -> CliError {
    let hint = match &err {
        DecodeError::InvalidLength { .. } => {
            "pass the full record, e.g. 001E0100F5540070C1BE00000001FFFF"
        }
        DecodeError::InvalidEncoding { .. } => "only hex digits 0-9 and a-f/A-F are allowed",
        DecodeError::UnknownHeader { .. } => "known header tags are 0x00 through 0x03",
    };
    CliError::new(err.to_string(), Some(hint.to_string()))
}

fn serialize_reading(reading: &SensorReading, pretty: bool) -> Result<String, CliError> {
    if pretty {
        serde_json::to_string_pretty(reading)
            .context("JSON serialization failed")
            .map_err(Into::into)
    } else {
        serde_json::to_string(reading)
            .context("JSON serialization failed")
            .map_err(Into::into)
    }
}

fn print_reading(reading: &SensorReading) {
    println!("Header : {}", reading.header);
    println!("Voltage : {}", fmt_float(reading.voltage));
    println!("Orientation : {}", reading.orientation);
    println!("Temperature : {}", fmt_float(reading.temperature));
    println!("Humidity : {}", fmt_float(reading.humidity));
    println!("Illuminance : {}", fmt_int(reading.illuminance));
    println!("Pressure : {}", fmt_int(reading.pressure));
    println!("PIR motion count : {}", fmt_int(reading.pir_motion_count));
    println!("CO2 : {}", fmt_int(reading.co2));
}

// Debug formatting keeps a trailing ".0" on whole-number readings.
fn fmt_float(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:?}", v),
        None => "null".to_string(),
    }
}

fn fmt_int<T: std::fmt::Display>(value: Option<T>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "null".to_string(),
    }
}
