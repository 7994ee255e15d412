//! Settings and statistics persistence under the platform config directory.
//! Loads silently fall back to defaults; saves surface `io::Result` and the
//! session treats them as best effort.

use std::fs::{self, File};
use std::io::{self, Read, Write};
use std::path::PathBuf;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::game::types::Statistics;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// How many chickens to seed, clamped to 9..=20 by the session.
    pub chicken_count: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self { chicken_count: 20 }
    }
}

fn project_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("io.github", "ppm", "FoxesAndChickens").map(|p| p.config_dir().to_path_buf())
}

fn ensure_config_dir() -> io::Result<PathBuf> {
    if let Some(dir) = project_config_dir() {
        fs::create_dir_all(&dir)?;
        Ok(dir)
    } else {
        // Fallback to current directory
        Ok(std::env::current_dir()?)
    }
}

fn settings_path() -> io::Result<PathBuf> {
    let mut p = ensure_config_dir()?;
    p.push("settings.json");
    Ok(p)
}

fn statistics_path() -> io::Result<PathBuf> {
    let mut p = ensure_config_dir()?;
    p.push("statistics.json");
    Ok(p)
}

fn load_json<T: Default + for<'de> Deserialize<'de>>(path: io::Result<PathBuf>) -> T {
    if let Ok(p) = path {
        if p.is_file() {
            let loaded = File::open(&p).and_then(|mut f| {
                let mut s = String::new();
                f.read_to_string(&mut s)?;
                serde_json::from_str(&s).map_err(|e| io::Error::new(io::ErrorKind::Other, e))
            });
            if let Ok(value) = loaded {
                return value;
            }
        }
    }
    T::default()
}

fn save_json<T: Serialize>(path: io::Result<PathBuf>, value: &T) -> io::Result<()> {
    let p = path?;
    let data =
        serde_json::to_string_pretty(value).map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    let mut f = File::create(&p)?;
    f.write_all(data.as_bytes())?;
    Ok(())
}

pub fn load_settings() -> Settings {
    load_json(settings_path())
}

pub fn save_settings(settings: &Settings) -> io::Result<()> {
    save_json(settings_path(), settings)
}

pub fn load_statistics() -> Statistics {
    load_json(statistics_path())
}

pub fn save_statistics(statistics: &Statistics) -> io::Result<()> {
    save_json(statistics_path(), statistics)
}
