use std::fs;
use std::path::Path;

use crate::error::{Result, TrackerError};
use crate::models::{Macro, TargetProfile};

/// Caller-owned per-session context: the target profile the report and the
/// suggestion engine read. Loaded once per invocation and passed by
/// reference; never process-global.
#[derive(Debug, Clone)]
pub struct Session {
    pub targets: TargetProfile,
}

impl Session {
    pub fn with_default_targets() -> Self {
        Self {
            targets: default_targets(),
        }
    }

    /// Load targets from a JSON file, falling back to defaults when the
    /// file does not exist. Macros missing from the file keep their
    /// default value.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        if !path.as_ref().exists() {
            return Ok(Self::with_default_targets());
        }

        let content = fs::read_to_string(path)?;
        let stored: TargetProfile = serde_json::from_str(&content)?;

        let mut targets = default_targets();
        for (m, value) in stored {
            targets.insert(m, value);
        }
        Ok(Self { targets })
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.targets)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Update one target. Non-positive values are a user-input error at
    /// this layer; the engine itself tolerates zero.
    pub fn set_target(&mut self, m: Macro, value: f64) -> Result<()> {
        if !value.is_finite() || value <= 0.0 {
            return Err(TrackerError::InvalidTargets(format!(
                "target for {} must be positive, got {}",
                m, value
            )));
        }
        self.targets.insert(m, value);
        Ok(())
    }
}

/// The original defaults: 2500 kcal, 150 g protein, 200 g carbs, 70 g fats.
pub fn default_targets() -> TargetProfile {
    TargetProfile::from([
        (Macro::Calories, 2500.0),
        (Macro::Protein, 150.0),
        (Macro::Carbs, 200.0),
        (Macro::Fats, 70.0),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_targets() {
        let session = Session::with_default_targets();
        assert_eq!(session.targets[&Macro::Calories], 2500.0);
        assert_eq!(session.targets[&Macro::Protein], 150.0);
        assert_eq!(session.targets[&Macro::Carbs], 200.0);
        assert_eq!(session.targets[&Macro::Fats], 70.0);
    }

    #[test]
    fn test_missing_file_means_defaults() {
        let session = Session::load("does_not_exist.json").unwrap();
        assert_eq!(session.targets, default_targets());
    }

    #[test]
    fn test_save_load_roundtrip() {
        let mut session = Session::with_default_targets();
        session.set_target(Macro::Calories, 1800.0).unwrap();
        session.set_target(Macro::Fats, 60.0).unwrap();

        let file = NamedTempFile::new().unwrap();
        session.save(file.path()).unwrap();

        let reloaded = Session::load(file.path()).unwrap();
        assert_eq!(reloaded.targets[&Macro::Calories], 1800.0);
        assert_eq!(reloaded.targets[&Macro::Fats], 60.0);
        assert_eq!(reloaded.targets[&Macro::Protein], 150.0);
    }

    #[test]
    fn test_rejects_non_positive_target() {
        let mut session = Session::with_default_targets();
        assert!(session.set_target(Macro::Protein, 0.0).is_err());
        assert!(session.set_target(Macro::Protein, -5.0).is_err());
        assert_eq!(session.targets[&Macro::Protein], 150.0);
    }
}
