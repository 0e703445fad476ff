//! User configuration — display component toggles and default sort orders.
//!
//! Stored as a simple key-value text file at
//! `$XDG_CONFIG_HOME/claim-deck/config.toml` (default `~/.config/claim-deck/config.toml`).

use std::path::PathBuf;

use crate::core::filter::{ClaimSort, SourceSort};

// ───────────────────────────────────────── display toggles ───

/// Per-component visibility toggles.  Each corresponds to one optional
/// element of the claim card or source rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayComponents {
    pub claim_title: bool,
    pub claim_support_indicator: bool,
    pub claim_support_feedback: bool,
    pub source_title: bool,
    pub source_domain: bool,
    pub source_support_indicator: bool,
    pub source_support_feedback: bool,
    pub source_relevance_feedback: bool,
}

impl Default for DisplayComponents {
    fn default() -> Self {
        Self {
            claim_title: true,
            claim_support_indicator: true,
            claim_support_feedback: true,
            source_title: true,
            source_domain: true,
            source_support_indicator: true,
            source_support_feedback: true,
            source_relevance_feedback: true,
        }
    }
}

impl DisplayComponents {
    /// Menu labels, in the same order [`get`](Self::get) and
    /// [`toggle`](Self::toggle) index by.
    pub const LABELS: &[&str] = &[
        "Claim title",
        "Claim support indicator",
        "Claim support feedback",
        "Source title",
        "Source domain",
        "Source support indicator",
        "Source support feedback",
        "Source relevance feedback",
    ];

    /// Keys used in the config file, positionally matching [`Self::LABELS`].
    const CONFIG_KEYS: &[&str] = &[
        "show_claim_title",
        "show_claim_support_indicator",
        "show_claim_support_feedback",
        "show_source_title",
        "show_source_domain",
        "show_source_support_indicator",
        "show_source_support_feedback",
        "show_source_relevance_feedback",
    ];

    pub fn get(&self, idx: usize) -> bool {
        match idx {
            0 => self.claim_title,
            1 => self.claim_support_indicator,
            2 => self.claim_support_feedback,
            3 => self.source_title,
            4 => self.source_domain,
            5 => self.source_support_indicator,
            6 => self.source_support_feedback,
            _ => self.source_relevance_feedback,
        }
    }

    pub fn toggle(&mut self, idx: usize) {
        match idx {
            0 => self.claim_title = !self.claim_title,
            1 => self.claim_support_indicator = !self.claim_support_indicator,
            2 => self.claim_support_feedback = !self.claim_support_feedback,
            3 => self.source_title = !self.source_title,
            4 => self.source_domain = !self.source_domain,
            5 => self.source_support_indicator = !self.source_support_indicator,
            6 => self.source_support_feedback = !self.source_support_feedback,
            _ => self.source_relevance_feedback = !self.source_relevance_feedback,
        }
    }
}

// ───────────────────────────────────────── config ────────────

/// Application configuration — display toggles and sort defaults.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppConfig {
    pub display: DisplayComponents,
    pub claim_sort: ClaimSort,
    pub source_sort: SourceSort,
}

impl AppConfig {
    /// Load config from disk, falling back to defaults.
    pub fn load() -> Self {
        let path = config_path();
        if path.exists() {
            if let Ok(contents) = std::fs::read_to_string(&path) {
                return Self::parse_config(&contents);
            }
        }
        Self::default()
    }

    /// Persist current config to disk.
    pub fn save(&self) -> anyhow::Result<()> {
        let path = config_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, self.serialise())?;
        Ok(())
    }

    fn parse_config(s: &str) -> Self {
        let mut config = Self::default();

        for line in s.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with('[') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let key = key.trim();
            let value = value.trim().trim_matches('"');

            match key {
                "claim_sort" => {
                    if let Some(sort) = ClaimSort::from_config_key(value) {
                        config.claim_sort = sort;
                    }
                    continue;
                }
                "source_sort" => {
                    if let Some(sort) = SourceSort::from_config_key(value) {
                        config.source_sort = sort;
                    }
                    continue;
                }
                _ => {}
            }

            if let Some(idx) = DisplayComponents::CONFIG_KEYS.iter().position(|&k| k == key) {
                if config.display.get(idx) != (value == "true") {
                    config.display.toggle(idx);
                }
            }
        }

        config
    }

    fn serialise(&self) -> String {
        let mut lines = vec![
            "# claim-deck configuration".to_string(),
            String::new(),
            "# Default sort orders".to_string(),
            format!("claim_sort = {}", self.claim_sort.config_key()),
            format!("source_sort = {}", self.source_sort.config_key()),
            String::new(),
            "# Component visibility".to_string(),
        ];

        for (idx, key) in DisplayComponents::CONFIG_KEYS.iter().enumerate() {
            lines.push(format!("{key} = {}", self.display.get(idx)));
        }
        lines.push(String::new());
        lines.join("\n")
    }
}

/// Return the config file path (`$XDG_CONFIG_HOME/claim-deck/config.toml`).
fn config_path() -> PathBuf {
    let config_dir = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
            PathBuf::from(home).join(".config")
        });
    config_dir.join("claim-deck").join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_roundtrips() {
        let mut config = AppConfig {
            claim_sort: ClaimSort::Occurrence,
            source_sort: SourceSort::Credibility,
            ..AppConfig::default()
        };
        config.display.toggle(1); // claim support indicator off
        config.display.toggle(7); // source relevance feedback off

        let parsed = AppConfig::parse_config(&config.serialise());
        assert_eq!(parsed, config);
    }

    #[test]
    fn unknown_keys_and_comments_are_ignored() {
        let parsed = AppConfig::parse_config(
            "# comment\n\nnot_a_key = whatever\nclaim_sort = occurrence\n",
        );
        assert_eq!(parsed.claim_sort, ClaimSort::Occurrence);
        assert_eq!(parsed.display, DisplayComponents::default());
    }

    #[test]
    fn invalid_sort_values_fall_back_to_default() {
        let parsed = AppConfig::parse_config("claim_sort = sideways\n");
        assert_eq!(parsed.claim_sort, ClaimSort::default());
    }

    #[test]
    fn toggle_labels_and_keys_stay_aligned() {
        assert_eq!(
            DisplayComponents::LABELS.len(),
            DisplayComponents::CONFIG_KEYS.len()
        );
        let mut display = DisplayComponents::default();
        for idx in 0..DisplayComponents::LABELS.len() {
            assert!(display.get(idx));
            display.toggle(idx);
            assert!(!display.get(idx));
        }
    }
}
