use std::io::{self, Write};

use anyhow::{Context, Result, bail};

use crate::display::{display_added, display_history, display_streaks, display_view};
use laroulette_core::tracker::Tracker;

#[derive(Debug, PartialEq)]
enum InteractiveCommand {
    Add(Option<String>),
    Clear,
    History,
    Stats,
    Theme,
    Quit,
}

fn looks_like_number(input: &str) -> bool {
    let mut chars = input.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_digit() || c == '-' || c == '+')
}

fn parse_command(input: &str) -> Option<InteractiveCommand> {
    let input = input.trim();
    if looks_like_number(input) {
        return Some(InteractiveCommand::Add(Some(input.to_string())));
    }
    match input.to_lowercase().as_str() {
        "a" | "ajouter" | "add" => Some(InteractiveCommand::Add(None)),
        "e" | "effacer" | "clear" => Some(InteractiveCommand::Clear),
        "h" | "historique" | "history" | "hist" => Some(InteractiveCommand::History),
        "s" | "stats" | "retards" => Some(InteractiveCommand::Stats),
        "t" | "theme" | "thème" => Some(InteractiveCommand::Theme),
        "q" | "quitter" | "quit" | "exit" => Some(InteractiveCommand::Quit),
        _ => None,
    }
}

fn display_menu() {
    println!();
    println!("── Mode interactif ──");
    println!("  <1-36>        Ajouter directement un numéro");
    println!("  a. ajouter    Saisir un numéro");
    println!("  e. effacer    Effacer l'historique");
    println!("  h. historique Derniers numéros");
    println!("  s. stats      Séries et retards");
    println!("  t. theme      Basculer clair / sombre");
    println!("  q. quitter    Quitter");
    println!();
}

fn prompt(msg: &str) -> Result<String> {
    print!("{}", msg);
    io::stdout().flush()?;
    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .context("Erreur de lecture")?;
    if read == 0 {
        bail!("Fin de l'entrée");
    }
    Ok(input.trim().to_string())
}

fn cmd_add_interactive(tracker: &mut Tracker, raw: Option<String>) -> Result<()> {
    let raw = match raw {
        Some(raw) => raw,
        None => prompt("Numéro sorti (1-36) : ")?,
    };
    let outcome = tracker.add_input(&raw)?;
    display_added(&outcome);
    display_streaks(&tracker.view().rows, tracker.theme());
    Ok(())
}

fn cmd_clear_interactive(tracker: &mut Tracker) -> Result<()> {
    let confirm = prompt("Effacer tout l'historique ? (o/n) : ")?;
    if confirm.to_lowercase() == "o" {
        tracker.clear();
        println!("Historique effacé.");
    } else {
        println!("Effacement annulé.");
    }
    Ok(())
}

pub fn run_interactive(tracker: &mut Tracker) -> Result<()> {
    println!("Bienvenue dans laroulette ! Saisissez les numéros au fil des tirages.");

    display_menu();
    loop {
        let input = match prompt("> ") {
            Ok(s) => s,
            Err(_) => break, // EOF / Ctrl+D
        };

        if input.is_empty() {
            continue;
        }

        match parse_command(&input) {
            Some(InteractiveCommand::Quit) => {
                println!("Au revoir !");
                break;
            }
            Some(InteractiveCommand::Add(raw)) => {
                if let Err(e) = cmd_add_interactive(tracker, raw) {
                    println!("Erreur: {e:#}");
                }
            }
            Some(InteractiveCommand::Clear) => {
                if let Err(e) = cmd_clear_interactive(tracker) {
                    println!("Erreur: {e:#}");
                }
            }
            Some(InteractiveCommand::History) => {
                let view = tracker.view();
                display_history(&view.outcomes, view.theme, tracker.history().max_len());
            }
            Some(InteractiveCommand::Stats) => {
                display_view(&tracker.view(), tracker.history().max_len());
            }
            Some(InteractiveCommand::Theme) => {
                let theme = tracker.toggle_theme();
                println!("Thème {}.", theme);
            }
            None => {
                println!("Commande inconnue : '{}'.", input);
                display_menu();
            }
        }
    }

    Ok(())
}
