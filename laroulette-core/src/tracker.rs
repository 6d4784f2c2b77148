use serde::Serialize;
use tracing::debug;

use crate::config::{Theme, TrackerConfig};
use crate::history::History;
use crate::models::{Outcome, TrackerError};
use crate::streak::{StreakResult, compute_streaks, order_by_anti_streak};

/// État d'une session : l'historique et le thème d'affichage.
/// Le rendu ne lit que `view()` et ne transmet que des actions discrètes.
#[derive(Debug, Clone, Default)]
pub struct Tracker {
    history: History,
    theme: Theme,
}

/// Instantané en lecture seule consommé par la couche d'affichage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrackerView {
    pub outcomes: Vec<Outcome>,
    pub theme: Theme,
    pub rows: Vec<StreakResult>,
}

impl Tracker {
    pub fn new(config: &TrackerConfig) -> Self {
        Self {
            history: History::new(config.max_history),
            theme: config.theme,
        }
    }

    pub fn add(&mut self, value: i64) -> Result<Outcome, TrackerError> {
        self.history.add(value)
    }

    pub fn add_input(&mut self, input: &str) -> Result<Outcome, TrackerError> {
        self.history.add_input(input)
    }

    pub fn clear(&mut self) {
        self.history.clear();
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        debug!(theme = %self.theme, "thème changé");
        self.theme
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn view(&self) -> TrackerView {
        TrackerView {
            outcomes: self.history.outcomes(),
            theme: self.theme,
            rows: order_by_anti_streak(compute_streaks(&self.history)),
        }
    }
}
