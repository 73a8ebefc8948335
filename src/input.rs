//! Interactive reading collection
//!
//! Prompts for one value per pollutant of the active schema, in schema
//! order, and assembles the ordered reading vector. Generic over the input
//! and output streams so the prompt loop is testable without a terminal.
//!
//! Constraints mirror the input form: values must be non-negative, are
//! captured at 0.01 granularity, and default to 0.0 when the line is empty.
//! There is no upper bound.

use std::io::{self, BufRead, Write};

use crate::schema::{ModelMode, Pollutant};

/// Collect one reading per feature of the active schema
///
/// The returned vector matches the schema length and order exactly.
///
/// # Errors
///
/// Only stream I/O errors are returned; rejected values (negative or
/// unparseable) are re-prompted instead.
pub fn collect_readings<R: BufRead, W: Write>(
    mode: ModelMode,
    input: &mut R,
    output: &mut W,
) -> io::Result<Vec<f64>> {
    let features = mode.features();
    let mut readings = Vec::with_capacity(features.len());
    for pollutant in features {
        readings.push(read_reading(pollutant, input, output)?);
    }
    Ok(readings)
}

/// Prompt for a single reading until an acceptable value is entered
fn read_reading<R: BufRead, W: Write>(
    pollutant: &Pollutant,
    input: &mut R,
    output: &mut W,
) -> io::Result<f64> {
    loop {
        write!(output, "  {} ({}) [0.00]: ", pollutant.name, pollutant.unit)?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            // Stream exhausted: fall back to the default reading
            return Ok(0.0);
        }

        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(0.0);
        }

        match trimmed.parse::<f64>() {
            Ok(value) if value.is_finite() && value >= 0.0 => {
                return Ok(round_to_granularity(value))
            }
            Ok(_) => writeln!(output, "  Value must be a non-negative number")?,
            Err(_) => writeln!(output, "  Please enter a valid number")?,
        }
    }
}

/// Snap a reading to the 0.01 input granularity
fn round_to_granularity(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn collect(mode: ModelMode, entered: &str) -> Vec<f64> {
        let mut input = Cursor::new(entered.as_bytes().to_vec());
        let mut output = Vec::new();
        collect_readings(mode, &mut input, &mut output).unwrap()
    }

    #[test]
    fn test_collects_in_schema_order() {
        let entered = "1\n2\n3\n4\n5\n6\n7\n8\n9\n10\n11\n";
        let readings = collect(ModelMode::WithoutXylene, entered);
        assert_eq!(
            readings,
            vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0, 11.0]
        );
    }

    #[test]
    fn test_with_mode_collects_twelve() {
        let readings = collect(ModelMode::WithXylene, "");
        assert_eq!(readings.len(), 12);
    }

    #[test]
    fn test_empty_lines_default_to_zero() {
        let readings = collect(ModelMode::WithoutXylene, "\n\n\n\n\n\n\n\n\n\n\n");
        assert_eq!(readings, vec![0.0; 11]);
    }

    #[test]
    fn test_exhausted_stream_defaults_remaining() {
        let readings = collect(ModelMode::WithoutXylene, "5.5\n");
        assert_eq!(readings[0], 5.5);
        assert_eq!(&readings[1..], &[0.0; 10]);
    }

    #[test]
    fn test_negative_value_is_reprompted() {
        let mut entered = String::from("-3\n4.2\n");
        entered.push_str(&"\n".repeat(10));
        let mut input = Cursor::new(entered.into_bytes());
        let mut output = Vec::new();
        let readings = collect_readings(ModelMode::WithoutXylene, &mut input, &mut output).unwrap();

        assert_eq!(readings[0], 4.2);
        let prompts = String::from_utf8(output).unwrap();
        assert!(prompts.contains("Value must be a non-negative number"));
    }

    #[test]
    fn test_unparseable_value_is_reprompted() {
        let mut entered = String::from("abc\n1.25\n");
        entered.push_str(&"\n".repeat(10));
        let mut input = Cursor::new(entered.into_bytes());
        let mut output = Vec::new();
        let readings = collect_readings(ModelMode::WithoutXylene, &mut input, &mut output).unwrap();

        assert_eq!(readings[0], 1.25);
        let prompts = String::from_utf8(output).unwrap();
        assert!(prompts.contains("Please enter a valid number"));
    }

    #[test]
    fn test_readings_snap_to_granularity() {
        assert_eq!(round_to_granularity(1.005), 1.0);
        assert_eq!(round_to_granularity(2.499), 2.5);
        assert_eq!(round_to_granularity(0.0), 0.0);
        assert_eq!(round_to_granularity(123.456), 123.46);
    }

    #[test]
    fn test_prompt_shows_name_and_unit() {
        let mut input = Cursor::new(b"\n".repeat(11));
        let mut output = Vec::new();
        collect_readings(ModelMode::WithoutXylene, &mut input, &mut output).unwrap();

        let prompts = String::from_utf8(output).unwrap();
        assert!(prompts.contains("PM2.5 (µg/m³)"));
        assert!(prompts.contains("CO (mg/m³)"));
        assert!(!prompts.contains("Xylene"));
    }
}
