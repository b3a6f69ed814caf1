use crate::credit::{paper_credits, Tally};
use bestpaper_parser::ast::Conference;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Institutions below this raw score are left out of the ranking
pub const DEFAULT_MIN_SCORE: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankOptions {
    /// Inclusive lower bound on the raw (unrounded) score
    pub min_score: f64,
}

impl Default for RankOptions {
    fn default() -> Self {
        Self {
            min_score: DEFAULT_MIN_SCORE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstitutionScore {
    pub institution: String,
    /// Rounded to one decimal place
    pub score: f64,
}

/// Institutions ordered by descending score
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ranking {
    pub entries: Vec<InstitutionScore>,
}

impl Ranking {
    /// Filter and order raw totals.
    ///
    /// The sort is stable on the raw score, so ties keep first-seen order.
    pub fn from_totals(totals: Tally, options: RankOptions) -> Self {
        let mut kept: Vec<(String, f64)> = totals
            .into_entries()
            .into_iter()
            .filter(|(_, score)| *score >= options.min_score)
            .collect();
        kept.sort_by(|a, b| b.1.total_cmp(&a.1));

        Self {
            entries: kept
                .into_iter()
                .map(|(institution, score)| InstitutionScore {
                    institution,
                    score: round_to_tenth(score),
                })
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &InstitutionScore> {
        self.entries.iter()
    }

    pub fn get(&self, institution: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|entry| entry.institution == institution)
            .map(|entry| entry.score)
    }
}

pub fn round_to_tenth(score: f64) -> f64 {
    (score * 10.0).round() / 10.0
}

/// Raw credit per institution across every paper of every conference
#[instrument(skip_all, fields(conferences = conferences.len()))]
pub fn score_institutions(conferences: &[Conference]) -> Tally {
    let mut totals = Tally::new();

    for conference in conferences {
        for paper in &conference.papers {
            match paper_credits(paper) {
                Some(credits) => {
                    for (institution, share) in credits.iter() {
                        totals.add(institution, share);
                    }
                }
                None => warn!(
                    conference = %conference.key,
                    year = %paper.year,
                    line = paper.span.line,
                    "skipping paper without authors"
                ),
            }
        }
    }

    debug!(institutions = totals.len(), "scored institutions");
    totals
}

/// Score, filter by `options.min_score`, sort and round
pub fn rank_institutions(conferences: &[Conference], options: RankOptions) -> Ranking {
    Ranking::from_totals(score_institutions(conferences), options)
}
