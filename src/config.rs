use crate::cli::Cli;

#[derive(Debug, Clone)]
pub struct DemoConfig {
    pub headless: bool,
    pub frames: u32,
    pub box_size: f32,
    pub box_enabled: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            headless: false,
            frames: 60,
            box_size: 1.0,
            box_enabled: true,
        }
    }
}

impl From<Cli> for DemoConfig {
    fn from(cli: Cli) -> Self {
        Self {
            headless: cli.headless,
            frames: cli.frames,
            box_size: cli.box_size,
            box_enabled: !cli.no_box,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn cli_defaults_match_config_defaults() {
        let cli = Cli::try_parse_from(["box-contents"]).unwrap();
        let config = DemoConfig::from(cli);
        let defaults = DemoConfig::default();

        assert_eq!(config.headless, defaults.headless);
        assert_eq!(config.frames, defaults.frames);
        assert_eq!(config.box_size, defaults.box_size);
        assert_eq!(config.box_enabled, defaults.box_enabled);
    }

    #[test]
    fn cli_flags_override_defaults() {
        let cli = Cli::try_parse_from([
            "box-contents",
            "--headless",
            "--frames",
            "3",
            "--box-size",
            "2.5",
            "--no-box",
        ])
        .unwrap();
        let config = DemoConfig::from(cli);

        assert!(config.headless);
        assert_eq!(config.frames, 3);
        assert_eq!(config.box_size, 2.5);
        assert!(!config.box_enabled);
    }
}
