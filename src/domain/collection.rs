use crate::errors::CombineError;

use super::models::MatchRecord;

/// One tournament's ordered match sequence under a caller-chosen label
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledTournament {
    pub label: String,
    pub matches: Vec<MatchRecord>,
}

/// Tournaments selected for combination, in insertion order, with unique labels
#[derive(Debug, Clone, Default)]
pub struct TournamentSet {
    tournaments: Vec<LabeledTournament>,
}

impl TournamentSet {
    pub fn new() -> Self {
        Self {
            tournaments: Vec::new(),
        }
    }

    /// Pair match sequences with labels; counts must agree and labels must be unique
    pub fn from_parts(
        sequences: Vec<Vec<MatchRecord>>,
        labels: Vec<String>,
    ) -> Result<Self, CombineError> {
        if sequences.len() != labels.len() {
            return Err(CombineError::LabelCountMismatch {
                sequences: sequences.len(),
                labels: labels.len(),
            });
        }

        let mut set = Self::new();
        for (label, matches) in labels.into_iter().zip(sequences) {
            set.add(label, matches)?;
        }
        Ok(set)
    }

    /// Add a tournament. An existing label is never overwritten.
    pub fn add(&mut self, label: impl Into<String>, matches: Vec<MatchRecord>) -> Result<(), CombineError> {
        let label = label.into();
        if self.contains(&label) {
            return Err(CombineError::DuplicateLabel(label));
        }

        self.tournaments.push(LabeledTournament { label, matches });
        Ok(())
    }

    pub fn contains(&self, label: &str) -> bool {
        self.get(label).is_some()
    }

    pub fn get(&self, label: &str) -> Option<&LabeledTournament> {
        self.tournaments.iter().find(|t| t.label == label)
    }

    pub fn len(&self) -> usize {
        self.tournaments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tournaments.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LabeledTournament> {
        self.tournaments.iter()
    }

    pub fn labels(&self) -> Vec<&str> {
        self.tournaments.iter().map(|t| t.label.as_str()).collect()
    }

    pub fn total_matches(&self) -> usize {
        self.tournaments.iter().map(|t| t.matches.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_matches() -> Vec<MatchRecord> {
        vec![MatchRecord::try_new("Round 1", ("Alice", "Dorinthea"), ("Bob", "Katsu"), None).unwrap()]
    }

    #[test]
    fn test_preserves_insertion_order() {
        let mut set = TournamentSet::new();
        set.add("Bologna", sample_matches()).unwrap();
        set.add("Lille", Vec::new()).unwrap();

        assert_eq!(set.labels(), vec!["Bologna", "Lille"]);
        assert_eq!(set.total_matches(), 1);
    }

    #[test]
    fn test_rejects_duplicate_label() {
        let mut set = TournamentSet::new();
        set.add("Bologna", sample_matches()).unwrap();

        let err = set.add("Bologna", Vec::new()).unwrap_err();

        assert_eq!(err, CombineError::DuplicateLabel("Bologna".to_string()));
        assert_eq!(set.len(), 1);
        assert_eq!(set.get("Bologna").unwrap().matches.len(), 1);
    }

    #[test]
    fn test_from_parts_checks_counts() {
        let err = TournamentSet::from_parts(vec![sample_matches()], vec![]).unwrap_err();

        assert_eq!(
            err,
            CombineError::LabelCountMismatch {
                sequences: 1,
                labels: 0
            }
        );
    }
}
