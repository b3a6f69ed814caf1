//! Institution ranking by normalized author-position credit.
//!
//! Every paper hands out exactly 1.0 of credit. Author `i` (zero-based) is
//! weighted `1 / (i + 1)`, and an institution's share of the paper is the sum
//! of its authors' weights divided by the sum over all authors.

mod credit;
mod ranking;


pub use credit::{credit_weight, paper_credits, Tally};
pub use ranking::{
    rank_institutions, round_to_tenth, score_institutions, InstitutionScore, RankOptions,
    Ranking, DEFAULT_MIN_SCORE,
};
