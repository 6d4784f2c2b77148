use std::collections::VecDeque;

use tracing::{debug, warn};

use crate::models::{DEFAULT_MAX_HISTORY, Outcome, TrackerError};

/// Historique borné des numéros sortis. `entries[0]` = numéro le plus récent.
#[derive(Debug, Clone)]
pub struct History {
    entries: VecDeque<Outcome>,
    max_len: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_HISTORY)
    }
}

impl History {
    /// `max_len` est ramené à 1 au minimum.
    pub fn new(max_len: usize) -> Self {
        let max_len = max_len.max(1);
        Self {
            entries: VecDeque::with_capacity(max_len + 1),
            max_len,
        }
    }

    pub fn add(&mut self, value: i64) -> Result<Outcome, TrackerError> {
        let outcome = Outcome::new(value).inspect_err(|e| warn!(%e, "numéro refusé"))?;
        self.push(outcome);
        Ok(outcome)
    }

    pub fn add_input(&mut self, input: &str) -> Result<Outcome, TrackerError> {
        let outcome = Outcome::parse(input).inspect_err(|e| warn!(%e, "saisie refusée"))?;
        self.push(outcome);
        Ok(outcome)
    }

    /// Ajoute des valeurs du plus ancien au plus récent. S'arrête à la première valeur
    /// invalide : celles qui la précèdent restent ajoutées.
    pub fn extend_chronological<I>(&mut self, values: I) -> Result<usize, TrackerError>
    where
        I: IntoIterator<Item = i64>,
    {
        let mut added = 0;
        for value in values {
            self.add(value)?;
            added += 1;
        }
        Ok(added)
    }

    fn push(&mut self, outcome: Outcome) {
        self.entries.push_front(outcome);
        debug!(value = outcome.value(), color = %outcome.color(), "numéro ajouté");
        if self.entries.len() > self.max_len {
            if let Some(evicted) = self.entries.pop_back() {
                debug!(value = evicted.value(), "plus ancien numéro retiré");
            }
        }
    }

    pub fn clear(&mut self) {
        debug!(len = self.entries.len(), "historique effacé");
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn max_len(&self) -> usize {
        self.max_len
    }

    pub fn latest(&self) -> Option<&Outcome> {
        self.entries.front()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Outcome> + Clone + '_ {
        self.entries.iter()
    }

    pub fn values(&self) -> Vec<u8> {
        self.entries.iter().map(Outcome::value).collect()
    }

    pub fn outcomes(&self) -> Vec<Outcome> {
        self.entries.iter().copied().collect()
    }
}
