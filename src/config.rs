
use std::collections::HashSet;
use std::default::Default;

use errors::*;
use input::{AxisId, ButtonId};

/// Longest control period accepted, in milliseconds.
pub const MAX_PERIOD_MS: u64 = 1_000;

#[derive(Deserialize, Clone, Debug)]
#[serde(default)]
pub struct Config {
    pub period_ms: u64,
    pub drive: DriveConfig,
    pub climber: ClimberConfig,
    pub bindings: Bindings,
    pub logging: LoggingConfig,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct MotorConfig {
    pub channel: u8,
    #[serde(default)]
    pub inverted: bool,
}

#[derive(Deserialize, Clone, Debug)]
#[serde(default)]
pub struct DriveConfig {
    pub left: Vec<MotorConfig>,
    pub right: Vec<MotorConfig>,
    pub forward_axis: AxisId,
    pub rotation_axis: AxisId,
    pub square_inputs: bool,
}

#[derive(Deserialize, Clone, Debug)]
#[serde(default)]
pub struct ClimberConfig {
    pub winch: Vec<MotorConfig>,
    pub speed: f64,
}

#[derive(Deserialize, Clone, Debug)]
#[serde(default)]
pub struct Bindings {
    pub winch_up: ButtonId,
    pub winch_down: ButtonId,
}

#[derive(Deserialize, Clone, Debug)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub file: Option<String>,
}

fn motors(channels: &[u8]) -> Vec<MotorConfig> {
    channels.iter()
        .map(|&channel| {
            MotorConfig {
                channel: channel,
                inverted: false,
            }
        })
        .collect()
}

impl Default for Config {
    fn default() -> Config {
        Config {
            period_ms: 20,
            drive: DriveConfig::default(),
            climber: ClimberConfig::default(),
            bindings: Bindings::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for DriveConfig {
    fn default() -> DriveConfig {
        DriveConfig {
            left: motors(&[0, 1]),
            right: motors(&[2, 3]),
            forward_axis: AxisId::LeftStickY,
            rotation_axis: AxisId::RightStickX,
            square_inputs: false,
        }
    }
}

impl Default for ClimberConfig {
    fn default() -> ClimberConfig {
        ClimberConfig {
            winch: motors(&[4]),
            speed: 0.8,
        }
    }
}

impl Default for Bindings {
    fn default() -> Bindings {
        Bindings {
            winch_up: ButtonId::RightBumper,
            winch_down: ButtonId::LeftBumper,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> LoggingConfig {
        LoggingConfig {
            level: "info".to_owned(),
            file: None,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        let invalid = |msg: &str| -> Result<()> {
            Err(ErrorKind::InvalidConfig(msg.to_owned()).into())
        };

        if self.period_ms == 0 || self.period_ms > MAX_PERIOD_MS {
            return Err(ErrorKind::InvalidConfig(format!("period_ms must be between 1 and {}",
                                                        MAX_PERIOD_MS))
                .into());
        }
        if self.drive.left.is_empty() || self.drive.right.is_empty() {
            return invalid("both drive sides need at least one motor");
        }
        if self.climber.winch.is_empty() {
            return invalid("the climber needs at least one winch motor");
        }
        // Each channel is one physical motor and may have only one owner.
        let mut channels = HashSet::new();
        let owners = self.drive.left.iter().chain(&self.drive.right).chain(&self.climber.winch);
        for motor in owners {
            if !channels.insert(motor.channel) {
                return Err(ErrorKind::InvalidConfig(format!("motor channel {} is used twice",
                                                            motor.channel))
                    .into());
            }
        }
        if !(self.climber.speed > 0.0 && self.climber.speed <= 1.0) {
            return invalid("climber speed must be in (0, 1]");
        }
        if self.bindings.winch_up == self.bindings.winch_down {
            return invalid("winch up and winch down must use different buttons");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use toml;

    #[test]
    fn defaults_match_the_robot() {
        let config = Config::default();
        assert_eq!(config.period_ms, 20);
        assert_eq!(config.drive.left.iter().map(|m| m.channel).collect::<Vec<_>>(), vec![0, 1]);
        assert_eq!(config.climber.speed, 0.8);
        assert_eq!(config.bindings.winch_down, ButtonId::LeftBumper);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let config: Config = toml::de::from_str(r#"
            period_ms = 10

            [drive]
            right = [{ channel = 7, inverted = true }]
            square_inputs = true

            [bindings]
            winch_up = "North"
        "#)
            .unwrap();

        assert_eq!(config.period_ms, 10);
        assert_eq!(config.drive.right, vec![MotorConfig { channel: 7, inverted: true }]);
        assert_eq!(config.drive.left.len(), 2);
        assert!(config.drive.square_inputs);
        assert_eq!(config.bindings.winch_up, ButtonId::North);
        assert_eq!(config.bindings.winch_down, ButtonId::LeftBumper);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn rejects_shared_motor_channels() {
        let mut config = Config::default();
        config.climber.winch = vec![MotorConfig { channel: 0, inverted: false }];
        match config.validate() {
            Err(Error(ErrorKind::InvalidConfig(ref msg), _)) => assert!(msg.contains("channel 0")),
            other => panic!("unexpected {:?}", other),
        }

        let mut config = Config::default();
        config.drive.right[1].channel = 2;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.drive.right = vec![MotorConfig { channel: 1, inverted: true }];
        assert!(config.validate().is_err());
    }

    #[test]
    fn longest_period_is_accepted() {
        let mut config = Config::default();
        config.period_ms = MAX_PERIOD_MS;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_bad_values() {
        let mut config = Config::default();
        config.period_ms = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.period_ms = MAX_PERIOD_MS + 1;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.period_ms = u64::max_value();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.climber.winch.clear();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.climber.speed = 1.5;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.bindings.winch_up = ButtonId::LeftBumper;
        match config.validate() {
            Err(Error(ErrorKind::InvalidConfig(_), _)) => {}
            other => panic!("unexpected {:?}", other),
        }
    }
}
