//! Setup screen: two numeric text inputs and a start trigger.

use crate::config::{Config, ConfigError, ConfigField};

/// Characters kept per input.
pub const MAX_INPUT_LEN: usize = 8;

#[derive(Debug, Clone, PartialEq)]
pub struct TextInput {
    pub field: ConfigField,
    pub text: String,
    /// Why the current text was rejected, if it was.
    pub error: Option<ConfigError>,
}

impl TextInput {
    fn new(field: ConfigField, value: f64) -> Self {
        Self {
            field,
            text: format!("{value}"),
            error: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigPanel {
    config: Config,
    inputs: [TextInput; 2],
    focus: ConfigField,
}

impl ConfigPanel {
    /// Inputs start out showing `config`'s values.
    pub fn new(config: Config) -> Self {
        Self {
            config,
            inputs: ConfigField::ALL.map(|f| TextInput::new(f, config.get(f))),
            focus: ConfigField::Gravity,
        }
    }

    pub fn input(&self, field: ConfigField) -> &TextInput {
        &self.inputs[slot(field)]
    }

    pub fn focused(&self) -> ConfigField {
        self.focus
    }

    pub fn focus(&mut self, field: ConfigField) {
        self.focus = field;
    }

    pub fn focus_next(&mut self) {
        self.focus = match self.focus {
            ConfigField::Gravity => ConfigField::Speed,
            ConfigField::Speed => ConfigField::Gravity,
        };
    }

    /// Last accepted values.
    pub fn config(&self) -> Config {
        self.config
    }

    /// Replace a field's text and store the parsed value if it is valid.
    pub fn set_config(&mut self, field: ConfigField, value: &str) {
        let input = &mut self.inputs[slot(field)];
        input.text = value.to_string();
        match self.config.set(field, value) {
            Ok(()) => input.error = None,
            Err(e) => {
                log::warn!("rejected {field} input: {e}");
                input.error = Some(e);
            }
        }
    }

    pub fn push_char(&mut self, c: char) {
        let field = self.focus;
        let mut text = self.input(field).text.clone();
        if text.chars().count() >= MAX_INPUT_LEN || c.is_control() {
            return;
        }
        text.push(c);
        self.set_config(field, &text);
    }

    pub fn pop_char(&mut self) {
        let field = self.focus;
        let mut text = self.input(field).text.clone();
        if text.pop().is_some() {
            self.set_config(field, &text);
        }
    }

    /// Snapshot to play with, or the first input error still on screen.
    pub fn start(&self) -> Result<Config, ConfigError> {
        match self.inputs.iter().find_map(|i| i.error.clone()) {
            Some(e) => Err(e),
            None => Ok(self.config),
        }
    }
}

fn slot(field: ConfigField) -> usize {
    match field {
        ConfigField::Gravity => 0,
        ConfigField::Speed => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_shown() {
        let panel = ConfigPanel::new(Config::default());
        assert_eq!(panel.input(ConfigField::Gravity).text, "1");
        assert_eq!(panel.input(ConfigField::Speed).text, "2");
        assert_eq!(panel.focused(), ConfigField::Gravity);
    }

    #[test]
    fn test_fractional_value_shown() {
        let panel = ConfigPanel::new(Config {
            gravity: 0.5,
            pipe_speed: 2.0,
        });
        assert_eq!(panel.input(ConfigField::Gravity).text, "0.5");
    }

    #[test]
    fn test_typing_updates_config() {
        let mut panel = ConfigPanel::new(Config::default());
        panel.focus(ConfigField::Speed);
        panel.pop_char();
        panel.push_char('3');
        assert_eq!(panel.config().pipe_speed, 3.0);
        assert_eq!(panel.input(ConfigField::Speed).text, "3");
    }

    #[test]
    fn test_invalid_text_kept_but_value_not() {
        let mut panel = ConfigPanel::new(Config::default());
        panel.set_config(ConfigField::Gravity, "abc");
        assert_eq!(panel.input(ConfigField::Gravity).text, "abc");
        assert!(panel.input(ConfigField::Gravity).error.is_some());
        assert_eq!(panel.config().gravity, 1.0);
        assert!(panel.start().is_err());
    }

    #[test]
    fn test_empty_field_blocks_start_until_fixed() {
        let mut panel = ConfigPanel::new(Config::default());
        panel.pop_char();
        assert_eq!(panel.input(ConfigField::Gravity).text, "");
        assert!(panel.start().is_err());
        panel.push_char('2');
        assert_eq!(panel.start(), Ok(Config { gravity: 2.0, pipe_speed: 2.0 }));
    }

    #[test]
    fn test_focus_cycles() {
        let mut panel = ConfigPanel::new(Config::default());
        panel.focus_next();
        assert_eq!(panel.focused(), ConfigField::Speed);
        panel.focus_next();
        assert_eq!(panel.focused(), ConfigField::Gravity);
    }

    #[test]
    fn test_length_limit() {
        let mut panel = ConfigPanel::new(Config::default());
        for _ in 0..20 {
            panel.push_char('1');
        }
        assert_eq!(panel.input(ConfigField::Gravity).text.len(), MAX_INPUT_LEN);
    }

    #[test]
    fn test_pop_on_empty_is_noop() {
        let mut panel = ConfigPanel::new(Config::default());
        panel.set_config(ConfigField::Speed, "");
        panel.focus(ConfigField::Speed);
        panel.pop_char();
        assert_eq!(panel.input(ConfigField::Speed).text, "");
    }
}
