use bestpaper_parser::ast::Paper;
use std::collections::HashMap;

/// Credit weight of the author at zero-based `position`
pub fn credit_weight(position: usize) -> f64 {
    1.0 / (position as f64 + 1.0)
}

/// Running totals per institution, iterated in first-seen order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tally {
    entries: Vec<(String, f64)>,
    index: HashMap<String, usize>,
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, institution: &str, amount: f64) {
        match self.index.get(institution) {
            Some(&slot) => self.entries[slot].1 += amount,
            None => {
                self.index.insert(institution.to_string(), self.entries.len());
                self.entries.push((institution.to_string(), amount));
            }
        }
    }

    pub fn get(&self, institution: &str) -> Option<f64> {
        self.index.get(institution).map(|&slot| self.entries[slot].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total(&self) -> f64 {
        self.entries.iter().map(|(_, amount)| amount).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries
            .iter()
            .map(|(institution, amount)| (institution.as_str(), *amount))
    }

    pub fn into_entries(self) -> Vec<(String, f64)> {
        self.entries
    }
}

impl<'a> FromIterator<(&'a str, f64)> for Tally {
    fn from_iter<I: IntoIterator<Item = (&'a str, f64)>>(iter: I) -> Self {
        let mut tally = Tally::new();
        for (institution, amount) in iter {
            tally.add(institution, amount);
        }
        tally
    }
}

/// Each institution's share of one paper's credit.
///
/// Shares sum to 1.0. Returns `None` for a paper without authors.
pub fn paper_credits(paper: &Paper) -> Option<Tally> {
    if paper.authors.is_empty() {
        return None;
    }

    let mut weights = Tally::new();
    let mut total = 0.0;
    for (position, author) in paper.authors.iter().enumerate() {
        let weight = credit_weight(position);
        weights.add(&author.institution, weight);
        total += weight;
    }

    for (_, weight) in &mut weights.entries {
        *weight /= total;
    }

    Some(weights)
}
