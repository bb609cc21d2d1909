use config::{Config, ConfigError, File};

/// Points awarded per result. The 3/1/0 scheme is the documented default;
/// per-championship overrides are supplied by the caller, never re-derived
/// inside the aggregators.
#[derive(serde::Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ScoringSettings {
    pub win: i32,
    pub draw: i32,
    pub loss: i32,
}

impl ScoringSettings {
    /// Points for a team that scored `scored` and conceded `conceded`.
    pub fn points_for(&self, scored: i32, conceded: i32) -> i32 {
        if scored > conceded {
            self.win
        } else if scored < conceded {
            self.loss
        } else {
            self.draw
        }
    }
}

impl Default for ScoringSettings {
    fn default() -> Self {
        Self {
            win: 3,
            draw: 1,
            loss: 0,
        }
    }
}

/// Group-stage sizing for the mixed format.
#[derive(serde::Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct GroupSettings {
    pub group_size: usize,
    pub qualify_per_group: usize,
}

impl Default for GroupSettings {
    fn default() -> Self {
        Self {
            group_size: 4,
            qualify_per_group: 2,
        }
    }
}

#[derive(serde::Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ApplicationSettings {
    pub log_level: String,
}

impl Default for ApplicationSettings {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

#[derive(serde::Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ExportSettings {
    pub output_dir: String,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            output_dir: ".".to_string(),
        }
    }
}

#[derive(serde::Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub scoring: ScoringSettings,
    pub groups: GroupSettings,
    pub export: ExportSettings,
}

/// Load settings from an optional `configuration/varzea.yml` file with
/// `VARZEA__`-prefixed environment overrides (e.g. `VARZEA__SCORING__WIN=2`).
pub fn get_config() -> Result<Settings, ConfigError> {
    let config = Config::builder()
        .add_source(File::with_name("configuration/varzea").required(false))
        .add_source(
            config::Environment::default()
                .prefix("VARZEA")
                .prefix_separator("__")
                .separator("__"),
        )
        .build()?;

    config.try_deserialize::<Settings>()
}
