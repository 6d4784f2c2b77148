use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const MIN_VALUE: u8 = 1;
pub const MAX_VALUE: u8 = 36;
pub const DEFAULT_MAX_HISTORY: usize = 100;

/// Les 18 numéros rouges du cylindre. Tout autre numéro de 1 à 36 est noir.
pub const RED_NUMBERS: [u8; 18] = [
    1, 3, 5, 7, 9, 12, 14, 16, 18, 19, 21, 23, 25, 27, 30, 32, 34, 36,
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrackerError {
    #[error("Valeur invalide '{0}' : entrez un nombre entier entre 1 et 36")]
    InvalidOutcomeValue(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Black,
}

impl Color {
    pub fn of(value: u8) -> Self {
        if RED_NUMBERS.contains(&value) {
            Color::Red
        } else {
            Color::Black
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::Red => write!(f, "Rouge"),
            Color::Black => write!(f, "Noir"),
        }
    }
}

/// Un numéro sorti. Ne se construit que par `new` ou `parse`, donc toujours dans 1..=36.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Outcome {
    value: u8,
    color: Color,
}

impl Outcome {
    pub fn new(value: i64) -> Result<Self, TrackerError> {
        if value < MIN_VALUE as i64 || value > MAX_VALUE as i64 {
            return Err(TrackerError::InvalidOutcomeValue(value.to_string()));
        }
        let value = value as u8;
        Ok(Self {
            value,
            color: Color::of(value),
        })
    }

    pub fn parse(input: &str) -> Result<Self, TrackerError> {
        let trimmed = input.trim();
        let value: i64 = trimmed
            .parse()
            .map_err(|_| TrackerError::InvalidOutcomeValue(trimmed.to_string()))?;
        Self::new(value)
    }

    pub fn value(&self) -> u8 {
        self.value
    }

    pub fn color(&self) -> Color {
        self.color
    }
}
