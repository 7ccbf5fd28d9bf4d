use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use crate::plugin::{self, TranslateQuery};
use crate::state::AppState;

/// Save words from translations into an Eudic wordbook.
#[derive(Parser, Debug)]
#[command(name = "wordbook", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the submission pipeline for one piece of text
    Add(AddArgs),
    /// Check the configured token and wordbook id
    Validate,
    /// Print the supported languages
    Languages,
}

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Text surfaced by the translation
    pub text: String,

    /// Detected source language
    #[arg(long, default_value = "en")]
    pub from: String,

    /// Only save single words (overrides WORDBOOK_WORD_ONLY)
    #[arg(long)]
    pub word_only: bool,
}

impl Cli {
    /// Dispatch the subcommand, print the completion as JSON and return
    /// whether it was success-shaped.
    pub async fn run(self, mut state: AppState) -> Result<bool> {
        match self.command {
            Command::Add(args) => {
                if args.word_only {
                    state.config.options.word_only = true;
                }
                let query = TranslateQuery {
                    text: args.text,
                    detect_from: args.from,
                };

                let mut printed = Ok(false);
                plugin::translate(&state, query, |completion| {
                    printed = print_json(&completion).map(|()| completion.is_success());
                })
                .await;
                printed
            }
            Command::Validate => {
                let mut printed = Ok(false);
                plugin::validate(&state, |completion| {
                    printed = print_json(&completion).map(|()| completion.result);
                })
                .await;
                printed
            }
            Command::Languages => {
                print_json(&plugin::supported_languages())?;
                Ok(true)
            }
        }
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize completion")?;
    println!("{json}");
    Ok(())
}
