use serde::Serialize;

use crate::models::{Color, Outcome};

/// Les douze chances suivies. L'ordre de déclaration sert de départage à l'affichage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Red,
    Black,
    Odd,
    Even,
    Low,
    High,
    Dozen1,
    Dozen2,
    Dozen3,
    Column1,
    Column2,
    Column3,
}

impl Category {
    pub const ALL: [Category; 12] = [
        Category::Red,
        Category::Black,
        Category::Odd,
        Category::Even,
        Category::Low,
        Category::High,
        Category::Dozen1,
        Category::Dozen2,
        Category::Dozen3,
        Category::Column1,
        Category::Column2,
        Category::Column3,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Category::Red => "red",
            Category::Black => "black",
            Category::Odd => "odd",
            Category::Even => "even",
            Category::Low => "low",
            Category::High => "high",
            Category::Dozen1 => "dozen1",
            Category::Dozen2 => "dozen2",
            Category::Dozen3 => "dozen3",
            Category::Column1 => "column1",
            Category::Column2 => "column2",
            Category::Column3 => "column3",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Red => "Rouge",
            Category::Black => "Noir",
            Category::Odd => "Impair",
            Category::Even => "Pair",
            Category::Low => "Manque (1-18)",
            Category::High => "Passe (19-36)",
            Category::Dozen1 => "1re douzaine (1-12)",
            Category::Dozen2 => "2e douzaine (13-24)",
            Category::Dozen3 => "3e douzaine (25-36)",
            Category::Column1 => "Colonne 1 (1, 4, 7...)",
            Category::Column2 => "Colonne 2 (2, 5, 8...)",
            Category::Column3 => "Colonne 3 (3, 6, 9...)",
        }
    }

    pub fn predicate(&self) -> fn(&Outcome) -> bool {
        match self {
            Category::Red => |o: &Outcome| o.color() == Color::Red,
            Category::Black => |o: &Outcome| o.color() == Color::Black,
            Category::Odd => |o: &Outcome| o.value() % 2 == 1,
            Category::Even => |o: &Outcome| o.value() % 2 == 0,
            Category::Low => |o: &Outcome| (1..=18).contains(&o.value()),
            Category::High => |o: &Outcome| (19..=36).contains(&o.value()),
            Category::Dozen1 => |o: &Outcome| (1..=12).contains(&o.value()),
            Category::Dozen2 => |o: &Outcome| (13..=24).contains(&o.value()),
            Category::Dozen3 => |o: &Outcome| (25..=36).contains(&o.value()),
            Category::Column1 => |o: &Outcome| o.value() % 3 == 1,
            Category::Column2 => |o: &Outcome| o.value() % 3 == 2,
            Category::Column3 => |o: &Outcome| o.value() % 3 == 0,
        }
    }

    pub fn matches(&self, outcome: &Outcome) -> bool {
        (self.predicate())(outcome)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
