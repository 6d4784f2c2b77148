use comfy_table::{Cell, Color, ContentArrangement, Table, presets::UTF8_FULL};

use crate::import::ImportResult;
use laroulette_core::config::Theme;
use laroulette_core::models::{self, Outcome};
use laroulette_core::streak::StreakResult;
use laroulette_core::tracker::TrackerView;

/// Nombre de numéros par ligne dans le tableau d'historique.
const HISTORY_ROW_WIDTH: usize = 10;

fn outcome_color(color: models::Color, theme: Theme) -> Color {
    match (color, theme) {
        (models::Color::Red, Theme::Dark) => Color::Red,
        (models::Color::Red, Theme::Light) => Color::DarkRed,
        (models::Color::Black, Theme::Dark) => Color::Grey,
        (models::Color::Black, Theme::Light) => Color::Black,
    }
}

fn highlight(theme: Theme) -> Color {
    match theme {
        Theme::Dark => Color::Yellow,
        Theme::Light => Color::DarkYellow,
    }
}

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

pub fn display_view(view: &TrackerView, max_history: usize) {
    display_history(&view.outcomes, view.theme, max_history);
    display_streaks(&view.rows, view.theme);
}

pub fn display_history(outcomes: &[Outcome], theme: Theme, max_history: usize) {
    println!("\n🎡 Historique ({}/{}, le plus récent en premier)\n", outcomes.len(), max_history);

    if outcomes.is_empty() {
        println!("Aucun numéro à afficher.");
        return;
    }

    let mut table = new_table();
    for chunk in outcomes.chunks(HISTORY_ROW_WIDTH) {
        table.add_row(
            chunk
                .iter()
                .map(|o| Cell::new(format!("{:2}", o.value())).fg(outcome_color(o.color(), theme)))
                .collect::<Vec<_>>(),
        );
    }
    println!("{table}");
}

pub fn display_streaks(rows: &[StreakResult], theme: Theme) {
    println!("\n📊 Séries et retards par chance\n");

    let mut table = new_table();
    table.set_header(vec!["Chance", "Série", "Retard", "Numéros sortis"]);

    let top = rows.iter().map(|r| r.anti_count).max().unwrap_or(0);

    for row in rows {
        let numbers = if row.numbers.is_empty() {
            "—".to_string()
        } else {
            row.numbers
                .iter()
                .map(|n| n.to_string())
                .collect::<Vec<_>>()
                .join(" ")
        };

        let retard = Cell::new(row.anti_count.to_string());
        let retard = if top > 0 && row.anti_count == top {
            retard.fg(highlight(theme))
        } else {
            retard
        };

        table.add_row(vec![
            Cell::new(row.category.label()),
            Cell::new(row.count.to_string()),
            retard,
            Cell::new(numbers),
        ]);
    }
    println!("{table}");
}

pub fn display_added(outcome: &Outcome) {
    println!("Ajouté : {} ({})", outcome.value(), outcome.color());
}

pub fn display_import_summary(result: &ImportResult) {
    println!("Import terminé :");
    println!("  Total lignes lues : {}", result.total_records);
    println!("  Insérés           : {}", result.inserted);
    if result.errors > 0 {
        println!("  Erreurs           : {}", result.errors);
    }
}

pub fn display_json(view: &TrackerView) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(view)?);
    Ok(())
}
