
use std::fmt::Write;
use std::path::Path;

use ::errors::*;
use config::Config;

/// Reads, parses and validates a TOML config file.
pub fn load_config_from_file<P: AsRef<Path>>(path: P) -> Result<Config> {
    use std::fs::File;
    use std::io::Read;

    let path = path.as_ref();
    let mut file = File::open(path)
        .chain_err(|| format!("Failed to open config file {}", path.display()))?;
    let mut contents = String::new();
    file.read_to_string(&mut contents).chain_err(|| "Failed to read config file")?;

    let config: Config = ::toml::de::from_str(&contents)
        .chain_err(|| "Failed to deserialize config")?;
    config.validate()?;

    Ok(config)
}

pub fn get_error_trace(e: &Error) -> String {
    let mut error_trace = format!("Error: {}", e);
    for cause in e.iter().skip(1) {
        let _ = write!(error_trace, "\nCause: {}", cause);
    }
    error_trace
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as IoWrite;
    use tempfile::NamedTempFile;

    #[test]
    fn loads_a_valid_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "period_ms = 5\n[climber]\nspeed = 0.5").unwrap();

        let config = load_config_from_file(file.path()).unwrap();
        assert_eq!(config.period_ms, 5);
        assert_eq!(config.climber.speed, 0.5);
    }

    #[test]
    fn invalid_values_fail_to_load() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "period_ms = 0").unwrap();
        assert!(load_config_from_file(file.path()).is_err());
    }

    #[test]
    fn trace_lists_every_cause() {
        let err = load_config_from_file("/nonexistent/teleop.toml").unwrap_err();
        let trace = get_error_trace(&err);
        assert!(trace.starts_with("Error: Failed to open config file"));
        assert!(trace.contains("\nCause: "));
    }
}
