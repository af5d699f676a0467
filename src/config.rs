use crate::error::{AtsError, Result};
use crate::lexicon::{ACTION_LEXICON, SKILL_LEXICON};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

pub const DEFAULT_CONFIG_FILE: &str = "atscore.toml";

/// Optional rubric-extension config. Only keyword lexicons are extensible;
/// scoring formulas and pattern sets are fixed.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AtsConfig {
    pub skills: Option<LexiconExtras>,
    pub actions: Option<LexiconExtras>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LexiconExtras {
    #[serde(default)]
    pub extra: HashMap<String, Vec<String>>,
}

impl AtsConfig {
    pub fn skill_extras(&self) -> Vec<(String, Vec<String>)> {
        extras_of(&self.skills)
    }

    pub fn action_extras(&self) -> Vec<(String, Vec<String>)> {
        extras_of(&self.actions)
    }

    pub fn validate(&self) -> Result<()> {
        let skill_labels: Vec<&str> = SKILL_LEXICON.iter().map(|c| c.label).collect();
        let action_labels: Vec<&str> = ACTION_LEXICON.iter().map(|c| c.label).collect();
        validate_extras("skills", &self.skills, &skill_labels)?;
        validate_extras("actions", &self.actions, &action_labels)?;
        Ok(())
    }
}

fn extras_of(extras: &Option<LexiconExtras>) -> Vec<(String, Vec<String>)> {
    extras
        .as_ref()
        .map(|extras| {
            extras
                .extra
                .iter()
                .map(|(label, terms)| (label.clone(), terms.clone()))
                .collect()
        })
        .unwrap_or_default()
}

fn validate_extras(
    table: &str,
    extras: &Option<LexiconExtras>,
    known_labels: &[&str],
) -> Result<()> {
    let Some(extras) = extras else {
        return Ok(());
    };
    for (label, terms) in &extras.extra {
        if !known_labels.contains(&label.as_str()) {
            return Err(AtsError::ConfigParse(format!(
                "{table}.extra contains unknown category '{label}' (known: {})",
                known_labels.join(", ")
            )));
        }
        if terms.iter().any(|term| term.trim().is_empty()) {
            return Err(AtsError::ConfigParse(format!(
                "{table}.extra.{label} entries must be non-empty terms"
            )));
        }
    }
    Ok(())
}

/// Loads `atscore.toml` from `dir` when present. Absence is not an error;
/// the built-in rubric applies.
pub fn load_config(dir: &Path) -> Result<Option<AtsConfig>> {
    let path = dir.join(DEFAULT_CONFIG_FILE);
    if !path.exists() {
        return Ok(None);
    }
    debug!(path = %path.display(), "loading rubric config");
    load_config_file(&path).map(Some)
}

/// Loads an explicitly named config file; the file must exist.
pub fn load_config_file(path: &Path) -> Result<AtsConfig> {
    if !path.exists() {
        return Err(AtsError::PathNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    let config: AtsConfig = toml::from_str(&content)
        .map_err(|e| AtsError::ConfigParse(format!("{}: {}", path.display(), e)))?;
    config.validate()?;
    Ok(config)
}
