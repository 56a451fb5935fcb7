//! Line-oriented console prompter for the scaffold wizard.

use std::io::{BufRead, Write};
use stencil_core::{Candidate, ItemNameOutcome, Template, WizardPrompter};

/// Console wizard prompter reading from stdin.
///
/// Template selection is a numbered list; the item-name step accepts a bare
/// name, an empty line for the offered default, `:back` to return to
/// selection, and end-of-input (Ctrl-D) to cancel either step.
#[derive(Debug, Default)]
pub struct ConsolePrompter;

impl ConsolePrompter {
    pub fn new() -> Self {
        Self
    }

    fn read_line(&self) -> Option<String> {
        let mut line = String::new();
        let stdin = std::io::stdin();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => None, // end of input
            Ok(_) => Some(line.trim().to_string()),
            Err(_) => None,
        }
    }
}

impl WizardPrompter for ConsolePrompter {
    fn pick_template(&self, candidates: &[Candidate]) -> Option<usize> {
        println!("Select template to create item(s) from:");
        for (index, candidate) in candidates.iter().enumerate() {
            match &candidate.template.description {
                Some(description) => {
                    println!("  {}. {} - {}", index + 1, candidate.template.name, description)
                }
                None => println!("  {}. {}", index + 1, candidate.template.name),
            }
        }

        loop {
            print!("> ");
            let _ = std::io::stdout().flush();
            let line = self.read_line()?;
            if line.is_empty() {
                continue;
            }
            match line.parse::<usize>() {
                Ok(number) if (1..=candidates.len()).contains(&number) => {
                    return Some(number - 1);
                }
                _ => println!("Enter a number between 1 and {}", candidates.len()),
            }
        }
    }

    fn capture_item_name(
        &self,
        template: &Template,
        default: &str,
        error: Option<&str>,
    ) -> ItemNameOutcome {
        if let Some(message) = error {
            println!("{message}");
        }
        if default.is_empty() {
            print!("New {}: item name (:back to go back): ", template.name);
        } else {
            print!(
                "New {}: item name [{}] (:back to go back): ",
                template.name, default
            );
        }
        let _ = std::io::stdout().flush();

        match self.read_line() {
            None => ItemNameOutcome::Cancel,
            Some(line) if line == ":back" => ItemNameOutcome::Back,
            Some(line) if line.is_empty() => ItemNameOutcome::Value(default.to_string()),
            Some(line) => ItemNameOutcome::Value(line),
        }
    }
}
