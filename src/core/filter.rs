//! Filtering and ordering of claims and sources.
//!
//! Every function here returns *indices* into the caller's slice rather
//! than cloned entries, so the UI can keep a stable cursor while the
//! underlying order changes.

use std::cmp::Ordering;

use crate::core::claim::{Claim, Source};

// ───────────────────────────────────────── filters ───────────

/// One verdict-label filter entry shown in the filter overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter {
    pub label: String,
    pub selected: bool,
}

/// Collect the distinct verdict labels present in `claims`, alphabetised,
/// as unselected filter entries.
pub fn collect_filters(claims: &[Claim]) -> Vec<Filter> {
    let mut labels: Vec<String> = claims
        .iter()
        .filter_map(|c| c.label.clone())
        .collect();
    labels.sort();
    labels.dedup();
    labels
        .into_iter()
        .map(|label| Filter {
            label,
            selected: false,
        })
        .collect()
}

/// A claim passes when no filter is selected, or when its label is among
/// the selected ones.  Unlabeled claims only pass the empty selection.
fn passes_filters(claim: &Claim, filters: &[Filter]) -> bool {
    if filters.iter().all(|f| !f.selected) {
        return true;
    }
    claim
        .label
        .as_deref()
        .is_some_and(|label| filters.iter().any(|f| f.selected && f.label == label))
}

// ───────────────────────────────────────── sort orders ───────

/// Ordering applied to the claim list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClaimSort {
    /// Highest credibility score first.
    #[default]
    Credibility,
    /// Position within the checked text, first to last.
    Occurrence,
}

impl ClaimSort {
    pub fn label(self) -> &'static str {
        match self {
            ClaimSort::Credibility => "credibility",
            ClaimSort::Occurrence => "occurrence",
        }
    }

    pub fn config_key(self) -> &'static str {
        self.label()
    }

    pub fn from_config_key(s: &str) -> Option<Self> {
        match s {
            "credibility" => Some(ClaimSort::Credibility),
            "occurrence" => Some(ClaimSort::Occurrence),
            _ => None,
        }
    }

    pub fn cycle(self) -> Self {
        match self {
            ClaimSort::Credibility => ClaimSort::Occurrence,
            ClaimSort::Occurrence => ClaimSort::Credibility,
        }
    }
}

/// Ordering applied to a claim's source list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SourceSort {
    /// Newest publish date first.
    #[default]
    Date,
    /// Highest supporting probability first.
    Credibility,
}

impl SourceSort {
    pub fn label(self) -> &'static str {
        match self {
            SourceSort::Date => "date",
            SourceSort::Credibility => "credibility",
        }
    }

    pub fn config_key(self) -> &'static str {
        self.label()
    }

    pub fn from_config_key(s: &str) -> Option<Self> {
        match s {
            "date" => Some(SourceSort::Date),
            "credibility" => Some(SourceSort::Credibility),
            _ => None,
        }
    }

    pub fn cycle(self) -> Self {
        match self {
            SourceSort::Date => SourceSort::Credibility,
            SourceSort::Credibility => SourceSort::Date,
        }
    }
}

// ───────────────────────────────────────── visibility ────────

/// Descending compare of optional scores; `None` always sorts last.
fn by_score_desc(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Indices of claims that pass the hide flag and the label filters,
/// ordered by `sort`.
pub fn visible_claims(
    claims: &[Claim],
    filters: &[Filter],
    sort: ClaimSort,
    show_hidden: bool,
) -> Vec<usize> {
    let mut order: Vec<usize> = claims
        .iter()
        .enumerate()
        .filter(|(_, c)| (show_hidden || !c.hide) && passes_filters(c, filters))
        .map(|(i, _)| i)
        .collect();

    match sort {
        ClaimSort::Credibility => {
            order.sort_by(|&a, &b| {
                by_score_desc(claims[a].support_score(), claims[b].support_score())
            });
        }
        ClaimSort::Occurrence => {
            // Claims without a text position keep their file order, after
            // all positioned ones.
            order.sort_by_key(|&i| claims[i].index_in_text.unwrap_or(usize::MAX));
        }
    }
    order
}

/// Indices of sources that pass the hide flag, ordered by `sort`.
pub fn visible_sources(sources: &[Source], sort: SourceSort, show_hidden: bool) -> Vec<usize> {
    let mut order: Vec<usize> = sources
        .iter()
        .enumerate()
        .filter(|(_, s)| show_hidden || !s.hide)
        .map(|(i, _)| i)
        .collect();

    match sort {
        SourceSort::Date => {
            // Newest first; undated sources last.
            order.sort_by(|&a, &b| match (sources[a].parsed_date(), sources[b].parsed_date()) {
                (Some(da), Some(db)) => db.cmp(&da),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            });
        }
        SourceSort::Credibility => {
            order.sort_by(|&a, &b| {
                by_score_desc(sources[a].support_score(), sources[b].support_score())
            });
        }
    }
    order
}
