use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::{report::DEFAULT_TOP_N, zone::ScoreWeights};

pub const DEFAULT_INPUT: &str = "green_zones.csv";
pub const DEFAULT_OUTPUT: &str = "recommended_zones.txt";

fn default_input() -> PathBuf {
    PathBuf::from(DEFAULT_INPUT)
}

fn default_output() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT)
}

fn default_top() -> usize {
    DEFAULT_TOP_N
}

fn default_log_level() -> String {
    "warn".to_string()
}

/// Run profile. Every key is optional; missing keys fall back to the built-in defaults.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Profile {
    #[serde(default = "default_input")]
    pub input: PathBuf,
    #[serde(default = "default_output")]
    pub output: PathBuf,
    #[serde(default = "default_top")]
    pub top: usize,
    #[serde(default)]
    pub export_json: Option<PathBuf>,
    #[serde(default)]
    pub weights: ScoreWeights,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            input: default_input(),
            output: default_output(),
            top: default_top(),
            export_json: None,
            weights: ScoreWeights::default(),
            log_level: default_log_level(),
        }
    }
}

/// Values given on the command line. `None` leaves the profile value in place.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub top: Option<usize>,
    pub export_json: Option<PathBuf>,
}

impl Profile {
    pub fn from_yaml(text: &str) -> Result<Self> {
        let profile = serde_yaml::from_str::<Option<Profile>>(text)
            .context("Failed to parse profile YAML")?;
        Ok(profile.unwrap_or_default())
    }

    pub fn apply(mut self, overrides: Overrides) -> Self {
        if let Some(input) = overrides.input {
            self.input = input;
        }
        if let Some(output) = overrides.output {
            self.output = output;
        }
        if let Some(top) = overrides.top {
            self.top = top;
        }
        if let Some(export_json) = overrides.export_json {
            self.export_json = Some(export_json);
        }
        self
    }
}

pub struct ConfigLoader {
    base_dir: PathBuf,
}

impl ConfigLoader {
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    pub fn load(&self, file: impl AsRef<Path>) -> Result<Profile> {
        let path = self.base_dir.join(file);
        let data = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read profile {}", path.display()))?;
        Profile::from_yaml(&data).with_context(|| format!("Failed to parse {}", path.display()))
    }

    /// Loads `file` when given, otherwise the defaults.
    pub fn load_or_default(&self, file: Option<&Path>) -> Result<Profile> {
        match file {
            Some(file) => self.load(file),
            None => Ok(Profile::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn defaults_match_the_campus_run() {
        let profile = Profile::default();
        assert_eq!(profile.input, PathBuf::from("green_zones.csv"));
        assert_eq!(profile.output, PathBuf::from("recommended_zones.txt"));
        assert_eq!(profile.top, 3);
        assert_eq!(profile.export_json, None);
        assert_eq!(profile.weights, ScoreWeights::default());
    }

    #[test]
    fn partial_yaml_keeps_other_defaults() {
        let profile = Profile::from_yaml("top: 5\nweights:\n  sunlight: 0.5\n").unwrap();
        assert_eq!(profile.top, 5);
        assert_eq!(profile.weights.sunlight, 0.5);
        assert_eq!(profile.weights.soil, 0.4);
        assert_eq!(profile.weights.green_cover, -0.1);
        assert_eq!(profile.output, PathBuf::from(DEFAULT_OUTPUT));
    }

    #[test]
    fn empty_yaml_is_the_default_profile() {
        assert_eq!(Profile::from_yaml("").unwrap(), Profile::default());
    }

    #[test]
    fn malformed_yaml_is_rejected() {
        assert!(Profile::from_yaml("top: [not, a, number]").is_err());
    }

    #[test]
    fn overrides_win_over_profile_values() {
        let profile = Profile::from_yaml("input: lawns.csv\ntop: 10\n").unwrap();
        let merged = profile.apply(Overrides {
            top: Some(1),
            export_json: Some(PathBuf::from("ranking.json")),
            ..Overrides::default()
        });
        assert_eq!(merged.input, PathBuf::from("lawns.csv"));
        assert_eq!(merged.top, 1);
        assert_eq!(merged.export_json, Some(PathBuf::from("ranking.json")));
    }

    #[test]
    fn loader_resolves_against_base_dir() {
        let temp = tempdir().expect("tempdir");
        fs::write(temp.path().join("campus.yaml"), "output: out.txt\n").unwrap();
        let loader = ConfigLoader::new(temp.path());
        let profile = loader.load("campus.yaml").unwrap();
        assert_eq!(profile.output, PathBuf::from("out.txt"));
        assert!(loader.load("missing.yaml").is_err());
        assert_eq!(loader.load_or_default(None).unwrap(), Profile::default());
    }
}
