//! Claim and source data model.
//!
//! Mirrors the JSON emitted by the fact-checking backend (camelCase field
//! names).  Nothing in this module depends on any TUI or rendering crate.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ───────────────────────────────────────── claim ─────────────

/// A textual assertion checked against a set of sources.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Claim {
    pub id: String,
    /// The claim text, e.g. `"The earth is flat."`.
    pub claim: String,
    pub language: Option<String>,
    /// Position of the claim within the checked text.
    pub index_in_text: Option<usize>,
    /// True if the claim should be hidden from results.
    pub hide: bool,
    /// Credibility assessment, an integer from 0 (false) to 100 (true).
    pub score: Option<u8>,
    /// Verdict label from the fact-checking site, e.g. `"False"`.
    pub label: Option<String>,
    /// Display name of the site the verdict came from, e.g. `"snopes"`.
    pub domain_name: Option<String>,
    /// Date the verdict was published (`YYYY-MM-DD`).
    pub publish_date: Option<String>,
    pub url: Option<String>,
    /// Sources supporting or rejecting the claim.
    pub evidence: Vec<Source>,
    pub has_been_checked: bool,
    /// True while a check is in flight and waiting for a response.
    pub is_being_checked: bool,
    /// User feedback on the credibility assessment, if any was given.
    pub user_agrees: Option<bool>,
}

impl Claim {
    /// The 0–100 credibility score mapped onto the indicator's 0.0–1.0 domain.
    pub fn support_score(&self) -> Option<f64> {
        self.score.map(|s| f64::from(s) / 100.0)
    }
}

// ───────────────────────────────────────── source ────────────

/// A single source found to support or reject a claim, typically a news
/// article writing about it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Source {
    pub id: String,
    /// Typically the headline.
    pub title: Option<String>,
    /// True if the source should be hidden from results.
    pub hide: bool,
    /// The part of the source text most relevant to the claim.
    pub snippet: Option<String>,
    /// Date the source was published (`YYYY-MM-DD`).
    pub publish_date: Option<String>,
    pub url: Option<String>,
    /// Link shown to the user, typically just the domain.
    pub domain: Option<String>,
    pub search_engine: Option<String>,
    /// Class distribution over {neutral, disputing, supporting}.
    pub softmax_score: Option<Vec<f64>>,
    /// User feedback on relevance, if any was given.
    pub user_agrees_relevance: Option<bool>,
    /// User feedback on the support assessment, if any was given.
    pub user_agrees_support: Option<bool>,
}

impl Source {
    /// Supporting probability taken from the softmax vector.  The last
    /// class is "supports the claim"; an empty vector yields `None`.
    pub fn support_score(&self) -> Option<f64> {
        self.softmax_score.as_ref().and_then(|v| v.last().copied())
    }

    /// Publish date parsed as a calendar date, if present and well-formed.
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        self.publish_date
            .as_deref()
            .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
    }
}

// ───────────────────────────────────────── loading ───────────

/// Errors from loading a claims file.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid claims JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("claims file contains no claims")]
    Empty,
}

/// Load a JSON array of claims from `path`.
pub fn load_claims(path: &Path) -> Result<Vec<Claim>, LoadError> {
    let contents = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let claims: Vec<Claim> = serde_json::from_str(&contents)?;
    if claims.is_empty() {
        return Err(LoadError::Empty);
    }
    tracing::info!(count = claims.len(), path = %path.display(), "loaded claims");
    Ok(claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_camel_case_fields() {
        let json = r#"{
            "id": "c1",
            "claim": "Viral video of the moon rising is computer generated",
            "indexInText": 12,
            "score": 72,
            "label": "Originated As Satire",
            "domainName": "reuters",
            "publishDate": "2022-04-27",
            "hasBeenChecked": true,
            "evidence": [{
                "id": "s1",
                "title": "Fact check: moon video is CGI",
                "hide": false,
                "publishDate": "2022-04-25",
                "domain": "reuters.com",
                "softmaxScore": [0.1, 0.2, 0.7]
            }]
        }"#;

        let claim: Claim = serde_json::from_str(json).unwrap();
        assert_eq!(claim.index_in_text, Some(12));
        assert_eq!(claim.domain_name.as_deref(), Some("reuters"));
        assert!(claim.has_been_checked);
        assert_eq!(claim.evidence.len(), 1);
        assert_eq!(claim.evidence[0].domain.as_deref(), Some("reuters.com"));
    }

    #[test]
    fn missing_optional_fields_default() {
        let claim: Claim = serde_json::from_str(r#"{"id": "c2", "claim": "x"}"#).unwrap();
        assert_eq!(claim.score, None);
        assert!(!claim.hide);
        assert!(claim.evidence.is_empty());
        assert_eq!(claim.user_agrees, None);
    }

    #[test]
    fn claim_score_maps_to_unit_interval() {
        let claim = Claim {
            score: Some(72),
            ..Claim::default()
        };
        assert!((claim.support_score().unwrap() - 0.72).abs() < 1e-9);
        assert_eq!(Claim::default().support_score(), None);
    }

    #[test]
    fn source_support_is_last_softmax_class() {
        let source = Source {
            softmax_score: Some(vec![0.1, 0.2, 0.7]),
            ..Source::default()
        };
        assert!((source.support_score().unwrap() - 0.7).abs() < 1e-9);

        let empty = Source {
            softmax_score: Some(vec![]),
            ..Source::default()
        };
        assert_eq!(empty.support_score(), None);
    }

    #[test]
    fn source_dates_parse() {
        let source = Source {
            publish_date: Some("2022-04-25".into()),
            ..Source::default()
        };
        assert_eq!(
            source.parsed_date(),
            NaiveDate::from_ymd_opt(2022, 4, 25)
        );

        let bad = Source {
            publish_date: Some("april".into()),
            ..Source::default()
        };
        assert_eq!(bad.parsed_date(), None);
    }
}
