use crate::config::RoloConfig;
use crate::error::{Result, RoloError};

const BIRTHDAY_WINDOW_KEY: &str = "birthday-window";

/// What the `config` command should do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigAction {
    Show,
    Get(String),
    Set(String, String),
}

impl ConfigAction {
    /// Build an action from the command's argument list.
    pub fn from_args(args: &[String]) -> Result<Self> {
        match args {
            [] => Ok(ConfigAction::Show),
            [key] => Ok(ConfigAction::Get(key.clone())),
            [key, value] => Ok(ConfigAction::Set(key.clone(), value.clone())),
            _ => Err(RoloError::usage(
                "Invalid command. Format: config [key] [value]",
            )),
        }
    }

    pub fn is_set(&self) -> bool {
        matches!(self, ConfigAction::Set(..))
    }
}

/// `config` / `config [key]` / `config [key] [value]`.
pub fn run(config: &mut RoloConfig, action: ConfigAction) -> Result<String> {
    match action {
        ConfigAction::Show => Ok(format!(
            "{} = {}",
            BIRTHDAY_WINDOW_KEY, config.birthday_window
        )),
        ConfigAction::Get(key) => {
            if key == BIRTHDAY_WINDOW_KEY {
                Ok(config.birthday_window.to_string())
            } else {
                Err(RoloError::usage(format!("Unknown config key: {}", key)))
            }
        }
        ConfigAction::Set(key, value) => {
            if key != BIRTHDAY_WINDOW_KEY {
                return Err(RoloError::usage(format!("Unknown config key: {}", key)));
            }
            let days: u32 = value.parse().map_err(|_| {
                RoloError::usage("Invalid command. Format: config birthday-window [days]")
            })?;
            config.birthday_window = days;
            Ok(format!("{} set to {}.", BIRTHDAY_WINDOW_KEY, days))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_show() {
        let mut config = RoloConfig::default();
        let reply = run(&mut config, ConfigAction::Show).unwrap();
        assert_eq!(reply, "birthday-window = 7");
    }

    #[test]
    fn test_get() {
        let mut config = RoloConfig::default();
        let action = ConfigAction::from_args(&args(&["birthday-window"])).unwrap();
        assert_eq!(run(&mut config, action).unwrap(), "7");
    }

    #[test]
    fn test_set() {
        let mut config = RoloConfig::default();
        let action = ConfigAction::from_args(&args(&["birthday-window", "14"])).unwrap();
        assert!(action.is_set());
        let reply = run(&mut config, action).unwrap();
        assert_eq!(reply, "birthday-window set to 14.");
        assert_eq!(config.birthday_window, 14);
    }

    #[test]
    fn test_unknown_key() {
        let mut config = RoloConfig::default();
        let err = run(&mut config, ConfigAction::Get("color".to_string())).unwrap_err();
        assert_eq!(err.to_string(), "Unknown config key: color");
    }

    #[test]
    fn test_bad_value() {
        let mut config = RoloConfig::default();
        let action = ConfigAction::Set("birthday-window".to_string(), "soon".to_string());
        assert!(run(&mut config, action).is_err());
        assert_eq!(config.birthday_window, 7);
    }
}
