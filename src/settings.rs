use std::env;
use std::str::FromStr;
use std::sync::Once;

use converter::{InductanceUnit, UnitSystem};
use log::{debug, warn};

use crate::error::*;

pub const CAPACITANCE_UNIT_KEY: &str = "INDUCTOR_CAPACITANCE_UNIT";
pub const PARASITIC_UNIT_KEY: &str = "INDUCTOR_PARASITIC_UNIT";
pub const TIME_UNIT_KEY: &str = "INDUCTOR_TIME_UNIT";
pub const DISPLAY_UNIT_KEY: &str = "INDUCTOR_DISPLAY_UNIT";

/// Starting unit selections, read from the environment (and `.env`).
///
/// ```text
/// INDUCTOR_CAPACITANCE_UNIT=pF
/// INDUCTOR_PARASITIC_UNIT=nH
/// INDUCTOR_TIME_UNIT=ns
/// INDUCTOR_DISPLAY_UNIT=uH
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Settings {
    pub units: UnitSystem,
    /// Display unit to select instead of the best one, when enabled.
    pub preferred_display: Option<InductanceUnit>,
}

impl Settings {
    /// Resolve settings from the process environment after loading
    /// `.env` (once per process).
    pub fn from_env() -> Result<Self> {
        Self::load_dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Resolve settings through an arbitrary key lookup.  Unset or blank
    /// keys keep the calculator defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut units = UnitSystem::new();
        let mut preferred_display = None;

        if let Some(u) = Self::read(&lookup, CAPACITANCE_UNIT_KEY)? {
            units = units.capacitance(u);
        }
        if let Some(u) = Self::read::<InductanceUnit>(&lookup, PARASITIC_UNIT_KEY)? {
            if u > InductanceUnit::Microhenry {
                warn!("{PARASITIC_UNIT_KEY}={u}: fixture parasitics are usually given in pH, nH or µH");
            }
            units = units.parasitic(u);
        }
        if let Some(u) = Self::read(&lookup, TIME_UNIT_KEY)? {
            units = units.time(u);
        }
        if let Some(u) = Self::read(&lookup, DISPLAY_UNIT_KEY)? {
            preferred_display = Some(u);
        }

        debug!("settings: {units:?}, preferred display {preferred_display:?}");
        Ok(Self { units, preferred_display })
    }

    fn read<U>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Result<Option<U>>
    where
        U: FromStr<Err = converter::UnitError>,
    {
        let Some(raw) = lookup(key) else { return Ok(None) };
        if raw.trim().is_empty() {
            return Ok(None);
        }
        raw.parse::<U>().map(Some).map_err(|e| InductorError::InvalidSetting {
            key: key.to_string(),
            value: raw.clone(),
            reason: e.to_string(),
        })
    }

    // ── .env loading (once) ──────────────────────────────────────────

    fn load_dotenv() {
        static DOTENV_INIT: Once = Once::new();
        DOTENV_INIT.call_once(|| {
            if dotenvy::dotenv().is_ok() { return; }
            if let Ok(dir) = env::var("CARGO_MANIFEST_DIR") {
                let p = std::path::PathBuf::from(dir).join(".env");
                if p.exists() && dotenvy::from_path(&p).is_ok() { return; }
            }
            if let Ok(exe) = env::current_exe() {
                if let Some(dir) = exe.parent() {
                    let p = dir.join(".env");
                    if p.exists() {
                        if let Err(e) = dotenvy::from_path(&p) {
                            warn!("ignoring {}: {e}", p.display());
                        }
                    }
                }
            }
        });
    }
}
