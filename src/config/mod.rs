use dirs::home_dir;
use serde::{Deserialize, Serialize};
use std::{
    env,
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};
use tracing::debug;

use crate::errors::PlanningError;
use crate::format::{
    format_horizon, CurrencyCode, FormatOptions, FormatSettings, LocaleConfig, NegativeStyle,
};
use crate::formulas::{
    compound_future_value, emergency_fund_target, Horizon, DEFAULT_COMPOUNDING_PER_YEAR,
};

const DEFAULT_DIR_NAME: &str = ".budget_planning";
const HOME_ENV: &str = "BUDGET_PLANNING_HOME";
const CONFIG_FILE: &str = "config.json";
const TMP_SUFFIX: &str = "tmp";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub locale: String,
    pub currency: String,
    /// Months of expenses an emergency fund should cover.
    pub emergency_fund_months: u32,
    pub compounding_per_year: u32,
    /// Horizons beyond this many months display as never reached.
    pub never_threshold_months: u32,
    pub negative_style: NegativeStyle,
    pub screen_reader_mode: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: "en-US".into(),
            currency: "USD".into(),
            emergency_fund_months: 6,
            compounding_per_year: DEFAULT_COMPOUNDING_PER_YEAR,
            never_threshold_months: 1200,
            negative_style: NegativeStyle::Sign,
            screen_reader_mode: false,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), PlanningError> {
        let code = self.currency.trim();
        if code.len() != 3 || !code.chars().all(|ch| ch.is_ascii_alphabetic()) {
            return Err(PlanningError::InvalidConfig(format!(
                "currency `{}` is not a three-letter code",
                self.currency
            )));
        }
        if self.locale.trim().is_empty() {
            return Err(PlanningError::InvalidConfig("locale is empty".into()));
        }
        if self.compounding_per_year == 0 {
            return Err(PlanningError::InvalidConfig(
                "compounding_per_year must be at least 1".into(),
            ));
        }
        if self.never_threshold_months == 0 {
            return Err(PlanningError::InvalidConfig(
                "never_threshold_months must be at least 1".into(),
            ));
        }
        Ok(())
    }

    pub fn format_settings(&self) -> FormatSettings {
        FormatSettings {
            currency: CurrencyCode::new(self.currency.trim()),
            locale: LocaleConfig::for_tag(&self.locale),
            options: FormatOptions {
                negative_style: self.negative_style,
                screen_reader_mode: self.screen_reader_mode,
            },
        }
    }

    /// Emergency fund covering `emergency_fund_months` of `monthly_expenses`.
    pub fn emergency_fund_target(&self, monthly_expenses: f64) -> f64 {
        emergency_fund_target(monthly_expenses, self.emergency_fund_months)
    }

    /// Future value of `principal` at the configured compounding frequency.
    pub fn future_value(&self, principal: f64, annual_rate_pct: f64, years: f64) -> f64 {
        compound_future_value(principal, annual_rate_pct, years, self.compounding_per_year)
    }

    pub fn horizon_label(&self, horizon: Horizon) -> String {
        format_horizon(horizon, self.never_threshold_months)
    }
}

/// Returns the planning data directory, defaulting to `~/.budget_planning`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os(HOME_ENV) {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self, PlanningError> {
        Self::from_base(app_data_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self, PlanningError> {
        Self::from_base(base)
    }

    fn from_base(base: PathBuf) -> Result<Self, PlanningError> {
        fs::create_dir_all(&base)?;
        Ok(Self {
            path: base.join(CONFIG_FILE),
        })
    }

    pub fn load(&self) -> Result<Config, PlanningError> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }
        let data = fs::read_to_string(&self.path)?;
        let config: Config = serde_json::from_str(&data)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self, config: &Config) -> Result<(), PlanningError> {
        config.validate()?;
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<(), PlanningError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
