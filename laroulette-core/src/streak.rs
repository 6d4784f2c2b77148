use serde::Serialize;

use crate::category::Category;
use crate::history::History;
use crate::models::Outcome;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StreakResult {
    pub category: Category,
    /// Sorties consécutives de la chance depuis le dernier numéro.
    pub count: usize,
    /// Numéros consécutifs hors de la chance depuis le dernier numéro (le retard).
    pub anti_count: usize,
    /// Toutes les valeurs de l'historique qui appartiennent à la chance, pas seulement la série.
    pub numbers: Vec<u8>,
}

pub fn streak_count<'a, I, P>(outcomes: I, predicate: P) -> usize
where
    I: IntoIterator<Item = &'a Outcome>,
    P: Fn(&Outcome) -> bool,
{
    outcomes.into_iter().take_while(|o| predicate(o)).count()
}

pub fn anti_streak_count<'a, I, P>(outcomes: I, predicate: P) -> usize
where
    I: IntoIterator<Item = &'a Outcome>,
    P: Fn(&Outcome) -> bool,
{
    outcomes.into_iter().take_while(|o| !predicate(o)).count()
}

pub fn matching_values<'a, I, P>(outcomes: I, predicate: P) -> Vec<u8>
where
    I: IntoIterator<Item = &'a Outcome>,
    P: Fn(&Outcome) -> bool,
{
    outcomes
        .into_iter()
        .filter(|o| predicate(o))
        .map(|o| o.value())
        .collect()
}

pub fn category_streak(history: &History, category: Category) -> StreakResult {
    let predicate = category.predicate();
    StreakResult {
        category,
        count: streak_count(history.iter(), predicate),
        anti_count: anti_streak_count(history.iter(), predicate),
        numbers: matching_values(history.iter(), predicate),
    }
}

/// Un résultat par chance, dans l'ordre de `Category::ALL`. Recalculé à chaque appel.
pub fn compute_streaks(history: &History) -> Vec<StreakResult> {
    Category::ALL
        .iter()
        .map(|&category| category_streak(history, category))
        .collect()
}

/// Tri par retard décroissant. Le tri est stable : à égalité, l'ordre de déclaration est conservé.
pub fn order_by_anti_streak(mut results: Vec<StreakResult>) -> Vec<StreakResult> {
    results.sort_by(|a, b| b.anti_count.cmp(&a.anti_count));
    results
}

#[cfg(test)]
mod tests {
    use super::*;

    fn history_of(values: &[i64]) -> History {
        let mut history = History::default();
        history.extend_chronological(values.iter().copied()).unwrap();
        history
    }

    fn find(results: &[StreakResult], category: Category) -> &StreakResult {
        results.iter().find(|r| r.category == category).unwrap()
    }

    #[test]
    fn test_empty_history() {
        let results = compute_streaks(&History::default());
        assert_eq!(results.len(), 12);
        for r in &results {
            assert_eq!(r.count, 0);
            assert_eq!(r.anti_count, 0);
            assert!(r.numbers.is_empty());
        }
    }

    #[test]
    fn test_repeated_seven() {
        let results = compute_streaks(&history_of(&[7, 7]));
        let red = find(&results, Category::Red);
        assert_eq!(red.count, 2);
        assert_eq!(red.anti_count, 0);
        assert_eq!(red.numbers, vec![7, 7]);

        let black = find(&results, Category::Black);
        assert_eq!(black.count, 0);
        assert_eq!(black.anti_count, 2);
        assert!(black.numbers.is_empty());
    }

    #[test]
    fn test_all_even() {
        let results = compute_streaks(&history_of(&[2, 4, 6]));
        let even = find(&results, Category::Even);
        assert_eq!(even.count, 3);
        assert_eq!(even.anti_count, 0);
        assert_eq!(even.numbers, vec![6, 4, 2]);

        let odd = find(&results, Category::Odd);
        assert_eq!(odd.count, 0);
        assert_eq!(odd.anti_count, 3);
    }

    #[test]
    fn test_numbers_is_full_filter_not_run() {
        // Du plus récent au plus ancien : 3, 20, 1
        let results = compute_streaks(&history_of(&[1, 20, 3]));
        let low = find(&results, Category::Low);
        assert_eq!(low.count, 1);
        assert_eq!(low.numbers, vec![3, 1]);

        let high = find(&results, Category::High);
        assert_eq!(high.count, 0);
        assert_eq!(high.anti_count, 1);
        assert_eq!(high.numbers, vec![20]);
    }

    #[test]
    fn test_count_and_anti_count_exclusive() {
        let history = history_of(&[5, 14, 33, 2, 27, 36, 11, 11, 19, 8]);
        for r in compute_streaks(&history) {
            assert!(
                (r.count > 0) != (r.anti_count > 0),
                "{}: count={} anti={}",
                r.category.key(),
                r.count,
                r.anti_count
            );
            assert!(r.numbers.len() >= r.count);
            assert!(r.count + r.anti_count <= history.len());
        }
    }

    #[test]
    fn test_generic_helpers_with_closure() {
        let history = history_of(&[10, 20, 30, 31]);
        let above_25 = |o: &Outcome| o.value() > 25;
        assert_eq!(streak_count(history.iter(), above_25), 2);
        assert_eq!(anti_streak_count(history.iter(), above_25), 0);
        assert_eq!(matching_values(history.iter(), above_25), vec![31, 30]);
        assert_eq!(anti_streak_count(history.iter(), |o| o.value() == 10), 3);
    }

    #[test]
    fn test_order_descending_with_stable_ties() {
        // Du plus récent au plus ancien : 2, 4. Tous deux noirs, pairs, manque, 1re douzaine.
        let ordered = order_by_anti_streak(compute_streaks(&history_of(&[4, 2])));
        for pair in ordered.windows(2) {
            assert!(pair[0].anti_count >= pair[1].anti_count);
        }

        let leaders: Vec<Category> = ordered
            .iter()
            .take_while(|r| r.anti_count == 2)
            .map(|r| r.category)
            .collect();
        assert_eq!(
            leaders,
            vec![
                Category::Red,
                Category::Odd,
                Category::High,
                Category::Dozen2,
                Category::Dozen3,
                Category::Column3
            ]
        );
        assert_eq!(ordered[6].category, Category::Column1);
        assert_eq!(ordered[6].anti_count, 1);
        assert_eq!(ordered.last().map(|r| r.category), Some(Category::Column2));
    }

    #[test]
    fn test_order_is_idempotent() {
        let history = history_of(&[17, 8, 25, 36, 1]);
        let first = order_by_anti_streak(compute_streaks(&history));
        let second = order_by_anti_streak(compute_streaks(&history));
        assert_eq!(first, second);
        assert_eq!(order_by_anti_streak(first.clone()), first);
    }

    #[test]
    fn test_serializes_camel_case() {
        let results = compute_streaks(&history_of(&[7]));
        let json = serde_json::to_value(&results[0]).unwrap();
        assert_eq!(json["category"], "red");
        assert_eq!(json["count"], 1);
        assert_eq!(json["antiCount"], 0);
        assert_eq!(json["numbers"], serde_json::json!([7]));
    }
}
