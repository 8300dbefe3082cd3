use std::{io::Write, path::PathBuf};

use anyhow::Result;
use tracing::{info, warn};

use crate::{
    config::Profile,
    dataset,
    export::RankingExporter,
    ranking,
    report::{Report, CLOSING_MESSAGE},
    zone::{ScoreWeights, Zone},
};

pub struct PipelineSettings {
    pub input: PathBuf,
    pub output: PathBuf,
    pub top: usize,
    pub weights: ScoreWeights,
    pub export_json: Option<PathBuf>,
}

impl From<Profile> for PipelineSettings {
    fn from(profile: Profile) -> Self {
        Self {
            input: profile.input,
            output: profile.output,
            top: profile.top,
            weights: profile.weights,
            export_json: profile.export_json,
        }
    }
}

#[derive(Debug)]
pub enum RunOutcome {
    /// The dataset could not be loaded; nothing was ranked or written.
    InputFailed(String),
    Completed { ranked: Vec<Zone>, saved: bool },
}

pub struct Pipeline {
    settings: PipelineSettings,
}

impl Pipeline {
    pub fn new(settings: PipelineSettings) -> Self {
        Self { settings }
    }

    /// Loads, ranks and reports. Only failures writing to `console` are returned as errors.
    pub fn run(&self, console: &mut impl Write) -> Result<RunOutcome> {
        let settings = &self.settings;
        let zones = match dataset::load_zones(&settings.input) {
            Ok(zones) => zones,
            Err(err) => {
                warn!(input = %settings.input.display(), error = %err, "dataset load failed");
                writeln!(console, "Error reading file: {err}")?;
                return Ok(RunOutcome::InputFailed(err.to_string()));
            }
        };

        let ranked = ranking::rank_with(zones, &settings.weights);
        let report = Report::top(&ranked, settings.top, &settings.weights);
        report.write_console(console)?;

        let saved = match report.save(&settings.output) {
            Ok(()) => {
                info!(output = %settings.output.display(), entries = report.len(), "report saved");
                writeln!(
                    console,
                    "\n✅ Results saved to '{}'",
                    settings.output.display()
                )?;
                true
            }
            Err(err) => {
                warn!(error = %err, "report write failed");
                writeln!(console, "Error writing file: {err}")?;
                false
            }
        };

        if let Some(path) = &settings.export_json {
            let exporter = RankingExporter::new(path);
            let views = ranking::ranked_views(&ranked, &settings.weights);
            match exporter.write(&views) {
                Ok(()) => {
                    info!(path = %exporter.path().display(), zones = views.len(), "ranking exported");
                    writeln!(console, "📄 Full ranking exported to '{}'", path.display())?;
                }
                Err(err) => {
                    warn!(error = %err, "ranking export failed");
                    writeln!(console, "Error writing file: {err}")?;
                }
            }
        }

        writeln!(console, "\n{CLOSING_MESSAGE}")?;
        Ok(RunOutcome::Completed { ranked, saved })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn settings(dir: &std::path::Path) -> PipelineSettings {
        PipelineSettings {
            input: dir.join("green_zones.csv"),
            output: dir.join("recommended_zones.txt"),
            top: 3,
            weights: ScoreWeights::default(),
            export_json: None,
        }
    }

    #[test]
    fn missing_input_prints_only_the_error() {
        let temp = tempdir().expect("tempdir");
        let settings = settings(temp.path());
        let output = settings.output.clone();
        let mut console = Vec::new();

        let outcome = Pipeline::new(settings).run(&mut console).unwrap();

        assert!(matches!(outcome, RunOutcome::InputFailed(_)));
        let text = String::from_utf8(console).unwrap();
        assert!(text.starts_with("Error reading file: "));
        assert_eq!(text.lines().count(), 1);
        assert!(!output.exists());
    }

    #[test]
    fn completed_run_reports_save_and_closing_message() {
        let temp = tempdir().expect("tempdir");
        let settings = settings(temp.path());
        fs::write(&settings.input, "id,name,soil,sun,moisture,cover\n1,A,8,6,7,2\n").unwrap();
        let mut console = Vec::new();

        let outcome = Pipeline::new(settings).run(&mut console).unwrap();

        match outcome {
            RunOutcome::Completed { ranked, saved } => {
                assert!(saved);
                assert_eq!(ranked.len(), 1);
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
        let text = String::from_utf8(console).unwrap();
        assert!(text.contains("1. A (Score: 6.30)"));
        assert!(text.contains("✅ Results saved to '"));
        assert!(text.trim_end().ends_with(CLOSING_MESSAGE));
    }
}
