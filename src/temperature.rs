//! Temperature conversions between Celsius, Fahrenheit and Kelvin.
//!
//! Fahrenheit and Kelvin readings are converted through Celsius.

use std::fmt;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

const KELVIN_OFFSET: f64 = 273.15;

/// Celsius to Fahrenheit.
pub fn c_to_f(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + 32.0
}

/// Fahrenheit to Celsius.
pub fn f_to_c(fahrenheit: f64) -> f64 {
    (fahrenheit - 32.0) * 5.0 / 9.0
}

/// Celsius to Kelvin.
pub fn c_to_k(celsius: f64) -> f64 {
    celsius + KELVIN_OFFSET
}

/// Kelvin to Celsius.
pub fn k_to_c(kelvin: f64) -> f64 {
    kelvin - KELVIN_OFFSET
}

/// A temperature scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TemperatureUnit {
    /// Degrees Celsius.
    Celsius,
    /// Degrees Fahrenheit.
    Fahrenheit,
    /// Kelvin.
    Kelvin,
}

impl TemperatureUnit {
    /// The suffix printed after a value, e.g. `°C` or ` K`.
    pub fn suffix(&self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "°C",
            TemperatureUnit::Fahrenheit => "°F",
            TemperatureUnit::Kelvin => " K",
        }
    }
}

impl FromStr for TemperatureUnit {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "C" => Ok(TemperatureUnit::Celsius),
            "F" => Ok(TemperatureUnit::Fahrenheit),
            "K" => Ok(TemperatureUnit::Kelvin),
            _ => Err(EngineError::UnknownUnit {
                unit: s.trim().to_string(),
            }),
        }
    }
}

impl fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix().trim_start())
    }
}

/// A value on a given scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Temperature {
    /// The numeric reading.
    pub value: f64,
    /// The scale of the reading.
    pub unit: TemperatureUnit,
}

impl Temperature {
    /// Creates a reading.
    pub fn new(value: f64, unit: TemperatureUnit) -> Self {
        Self { value, unit }
    }

    /// The reading expressed in Celsius.
    pub fn to_celsius(&self) -> f64 {
        match self.unit {
            TemperatureUnit::Celsius => self.value,
            TemperatureUnit::Fahrenheit => f_to_c(self.value),
            TemperatureUnit::Kelvin => k_to_c(self.value),
        }
    }

    /// Converts the reading into the two other scales.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::temperature::{Temperature, TemperatureUnit};
    ///
    /// let [f, k] = Temperature::new(100.0, TemperatureUnit::Celsius).convert();
    /// assert_eq!(f.unit, TemperatureUnit::Fahrenheit);
    /// assert!((f.value - 212.0).abs() < 1e-9);
    /// assert!((k.value - 373.15).abs() < 1e-9);
    /// ```
    pub fn convert(&self) -> [Temperature; 2] {
        let celsius = self.to_celsius();
        match self.unit {
            TemperatureUnit::Celsius => [
                Temperature::new(c_to_f(celsius), TemperatureUnit::Fahrenheit),
                Temperature::new(c_to_k(celsius), TemperatureUnit::Kelvin),
            ],
            TemperatureUnit::Fahrenheit => [
                Temperature::new(celsius, TemperatureUnit::Celsius),
                Temperature::new(c_to_k(celsius), TemperatureUnit::Kelvin),
            ],
            TemperatureUnit::Kelvin => [
                Temperature::new(celsius, TemperatureUnit::Celsius),
                Temperature::new(c_to_f(celsius), TemperatureUnit::Fahrenheit),
            ],
        }
    }

    /// Renders one output line per conversion, e.g. `100.0°C = 212.00°F`.
    pub fn conversion_lines(&self) -> Vec<String> {
        let reading = format_reading(self.value);
        self.convert()
            .iter()
            .map(|target| {
                format!(
                    "{}{} = {:.2}{}",
                    reading,
                    self.unit.suffix(),
                    target.value,
                    target.unit.suffix()
                )
            })
            .collect()
    }
}

/// Formats the reading as entered: whole numbers keep one decimal (`100.0`),
/// everything else uses the shortest round-trip form (`36.6`).
fn format_reading(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e16 {
        format!("{:.1}", value)
    } else {
        value.to_string()
    }
}

/// Parses a temperature reading from user input.
pub fn parse_temperature(input: &str) -> EngineResult<f64> {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| EngineError::InvalidTemperature {
            input: input.trim().to_string(),
        })
}

/// Runs one interactive conversion: prompts for a reading and a unit, then
/// prints the conversions or an error message.
///
/// Invalid input never fails the call; only I/O errors do.
pub fn run_console<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<()> {
    writeln!(output, "Temperature converter (C, F, K)")?;

    write!(output, "Enter temperature: ")?;
    output.flush()?;
    let value = match parse_temperature(&read_line(input)?) {
        Ok(value) => value,
        Err(err) => return writeln!(output, "Error: {}", err),
    };

    write!(output, "Unit (C/F/K): ")?;
    output.flush()?;
    let unit = match read_line(input)?.parse::<TemperatureUnit>() {
        Ok(unit) => unit,
        Err(err) => return writeln!(output, "Error: {}", err),
    };

    for line in Temperature::new(value, unit).conversion_lines() {
        writeln!(output, "{}", line)?;
    }
    Ok(())
}

fn read_line<R: BufRead>(input: &mut R) -> io::Result<String> {
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line)
}
