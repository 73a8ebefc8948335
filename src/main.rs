//! Interactive AQI prediction terminal app
//!
//! Loads the four pre-fit artifacts at startup (failing fast if any is
//! missing), then repeats a prompt cycle: pick a model mode, enter one
//! reading per pollutant, and display the calibrated AQI with its severity
//! band and the band reference table.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use aqi_engine::input::collect_readings;
use aqi_engine::{predict_aqi, AqiBucket, Artifacts, EngineConfig, ModelMode};

fn main() -> ExitCode {
    env_logger::init();

    let config = EngineConfig::default();
    let artifacts = match Artifacts::load(&config) {
        Ok(artifacts) => artifacts,
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("Missing or unreadable model/scaler file(s); cannot start.");
            return ExitCode::FAILURE;
        }
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    match run(&artifacts, &mut stdin.lock(), &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("I/O error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Interaction loop: one full prediction cycle per trigger
fn run<R: BufRead, W: Write>(
    artifacts: &Artifacts,
    input: &mut R,
    output: &mut W,
) -> io::Result<()> {
    writeln!(output, "Air Quality Index (AQI) Prediction")?;
    writeln!(
        output,
        "Enter pollutant concentrations to predict the AQI and its category."
    )?;

    loop {
        let mode = match prompt_mode(input, output)? {
            Some(mode) => mode,
            None => break,
        };

        writeln!(output)?;
        writeln!(
            output,
            "Enter pollutant levels for \"{}\" (empty input defaults to 0.00):",
            mode.label()
        )?;
        let readings = collect_readings(mode, input, output)?;

        match predict_aqi(&readings, mode, artifacts) {
            Ok(prediction) => {
                writeln!(output)?;
                writeln!(output, "Predicted AQI: {:.2}", prediction.aqi)?;
                writeln!(
                    output,
                    "{} Air quality category: {}",
                    prediction.bucket.marker(),
                    prediction.bucket.label()
                )?;
                print_reference_table(output)?;
            }
            // Recoverable: report inline and return to the mode prompt
            Err(e) => writeln!(output, "Prediction failed: {}", e)?,
        }
    }

    Ok(())
}

/// Prompt for the model mode; `None` means quit
fn prompt_mode<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<Option<ModelMode>> {
    loop {
        writeln!(output)?;
        writeln!(output, "Choose model type:")?;
        writeln!(output, "  1) {}", ModelMode::WithXylene.label())?;
        writeln!(output, "  2) {}", ModelMode::WithoutXylene.label())?;
        writeln!(output, "  q) Quit")?;
        write!(output, "> ")?;
        output.flush()?;

        let mut choice = String::new();
        if input.read_line(&mut choice)? == 0 {
            return Ok(None);
        }
        match choice.trim() {
            "1" => return Ok(Some(ModelMode::WithXylene)),
            "2" => return Ok(Some(ModelMode::WithoutXylene)),
            "q" | "Q" => return Ok(None),
            other => writeln!(output, "Unrecognized choice: {:?}", other)?,
        }
    }
}

/// Static reference table of the six AQI bands
fn print_reference_table<W: Write>(output: &mut W) -> io::Result<()> {
    writeln!(output)?;
    writeln!(output, "AQI ranges:")?;
    for bucket in AqiBucket::ALL {
        let (lo, hi) = bucket.range();
        let display_lo = if lo == 0.0 { 0.0 } else { lo + 1.0 };
        writeln!(
            output,
            "  {} {:>3.0}-{:<3.0} {}",
            bucket.marker(),
            display_lo,
            hi,
            bucket.label()
        )?;
    }
    Ok(())
}
