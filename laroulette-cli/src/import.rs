use std::path::Path;

use anyhow::{Context, Result};
use tracing::warn;

use laroulette_core::tracker::Tracker;

/// Le numéro est lu dans le premier champ ; les autres colonnes sont ignorées.
fn parse_record(record: &csv::StringRecord) -> Result<String> {
    record
        .get(0)
        .map(|s| s.trim().to_string())
        .context("Champ manquant à l'index 0")
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct ImportResult {
    pub total_records: u32,
    pub inserted: u32,
    pub errors: u32,
}

/// Importe des numéros depuis un fichier `;`, du plus ancien au plus récent.
/// Les lignes invalides sont comptées et ignorées, sans interrompre l'import.
pub fn import_csv(tracker: &mut Tracker, path: &Path) -> Result<ImportResult> {
    let reader = csv::ReaderBuilder::new()
        .delimiter(b';')
        .has_headers(false)
        .flexible(true)
        .comment(Some(b'#'))
        .from_path(path)
        .with_context(|| format!("Impossible d'ouvrir {:?}", path))?;
    import_records(tracker, reader)
}

fn import_records<R: std::io::Read>(
    tracker: &mut Tracker,
    mut reader: csv::Reader<R>,
) -> Result<ImportResult> {
    let mut result = ImportResult::default();

    for record_result in reader.records() {
        result.total_records += 1;
        let line = result.total_records;
        match record_result {
            Ok(record) => match parse_record(&record) {
                Ok(raw) if raw.is_empty() => {
                    result.total_records -= 1;
                }
                Ok(raw) => match tracker.add_input(&raw) {
                    Ok(_) => result.inserted += 1,
                    Err(e) => {
                        warn!(line, %e, "ligne ignorée");
                        eprintln!("Erreur ligne {}: {}", line, e);
                        result.errors += 1;
                    }
                },
                Err(e) => {
                    eprintln!("Erreur parsing ligne {}: {}", line, e);
                    result.errors += 1;
                }
            },
            Err(e) => {
                eprintln!("Erreur lecture ligne {}: {}", line, e);
                result.errors += 1;
            }
        }
    }

    Ok(result)
}
