use std::io::{BufRead, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crate::application::config::Config;

/// Interactively edit every setting and save the result.
///
/// Blank input keeps the current value. Password prompts do not echo the
/// stored value. Numeric fields fail with a conversion error on non-numeric
/// input; nothing else is validated (a low threshold above its high bound is
/// accepted uncomplainingly).
///
/// # Errors
///
/// Returns an error on I/O failure, a failed numeric conversion, or a
/// failed save.
pub fn run_configure(path: Option<&Path>) -> Result<()> {
    let config = match path {
        Some(p) => Config::load_from(p)?,
        None => Config::load()?,
    };

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let config = prompt_all(config, &mut stdin.lock(), &mut stdout.lock())?;

    match path {
        Some(p) => config.save_to(p)?,
        None => config.save()?,
    }
    println!("Configuration saved.");
    Ok(())
}

/// Walk every field in config-file order. Split from `run_configure` so
/// tests can drive it with scripted input.
fn prompt_all<R: BufRead, W: Write>(mut config: Config, input: &mut R, output: &mut W) -> Result<Config> {
    config.db_host = prompt(input, output, "Database Host", &config.db_host)?;
    config.db_name = prompt(input, output, "Database Name", &config.db_name)?;
    config.db_user = prompt(input, output, "Database Username", &config.db_user)?;
    config.db_password = prompt_secret(input, output, "Database Password", &config.db_password)?;
    config.frequency = prompt_parse(input, output, "Frequency in seconds", config.frequency)?;
    config.smtp_host = prompt(input, output, "SMTP Server", &config.smtp_host)?;
    config.smtp_port = prompt_parse(input, output, "SMTP Port", config.smtp_port)?;
    config.smtp_user = prompt(input, output, "SMTP Username", &config.smtp_user)?;
    config.smtp_password = prompt_secret(input, output, "SMTP Password", &config.smtp_password)?;
    config.recipient = prompt(input, output, "Recipient", &config.recipient)?;
    config.temp_threshold_high = prompt_parse(
        input,
        output,
        "High Temperature Threshold",
        config.temp_threshold_high,
    )?;
    config.temp_threshold_low = prompt_parse(
        input,
        output,
        "Low Temperature Threshold",
        config.temp_threshold_low,
    )?;
    config.humidity_threshold_high = prompt_parse(
        input,
        output,
        "High Humidity Threshold",
        config.humidity_threshold_high,
    )?;
    config.humidity_threshold_low = prompt_parse(
        input,
        output,
        "Low Humidity Threshold",
        config.humidity_threshold_low,
    )?;
    config.i2c_bus = prompt(input, output, "I2C Bus", &config.i2c_bus)?;
    Ok(config)
}

fn read_line<R: BufRead>(input: &mut R) -> Result<String> {
    let mut line = String::new();
    input.read_line(&mut line).context("Failed to read input")?;
    Ok(line.trim().to_string())
}

fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
    current: &str,
) -> Result<String> {
    write!(output, "{label} (current: {current}): ")?;
    output.flush()?;

    let entered = read_line(input)?;
    Ok(if entered.is_empty() {
        current.to_string()
    } else {
        entered
    })
}

/// Like `prompt`, but never shows the stored value.
fn prompt_secret<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
    current: &str,
) -> Result<String> {
    write!(output, "{label}: ")?;
    output.flush()?;

    let entered = read_line(input)?;
    Ok(if entered.is_empty() {
        current.to_string()
    } else {
        entered
    })
}

fn prompt_parse<R, W, T>(input: &mut R, output: &mut W, label: &str, current: T) -> Result<T>
where
    R: BufRead,
    W: Write,
    T: std::str::FromStr + std::fmt::Display,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    write!(output, "{label} (current: {current}): ")?;
    output.flush()?;

    let entered = read_line(input)?;
    if entered.is_empty() {
        return Ok(current);
    }
    entered
        .parse()
        .with_context(|| format!("Invalid value for {label}: '{entered}'"))
}
