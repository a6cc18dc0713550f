use std::io::{self, BufRead, Write};

use anyhow::Context;
use clap::{Parser, Subcommand};
use dice_roller::{logger, RollRequest, RULES};


/// Roll dice written in standard notation (d20, 3d6+2, 36d12-10).
#[derive(Debug, Parser)]
#[command(name = "dice-roller", version, about)]
struct Cli {
    /// Log parsing and rolling details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Roll the dice described by NOTATION
    Roll {
        notation: String,

        /// Seed for a reproducible roll
        #[arg(short, long)]
        seed: Option<u64>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Describe NOTATION in plain words without rolling
    Explain {
        notation: String,
    },

    /// Print the dice notation reference
    Rules,

    /// Print a prompt asking for an explanation of dice notation
    Prompt {
        /// Notation the prompt should ask about
        #[arg(short, long)]
        example: Option<String>,
    },

    /// Read JSON roll requests from stdin, one per line, and answer each on stdout
    Batch,
}


fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logger::init_cli_logger(cli.verbose);
    tracing::debug!(?cli, "starting dice-roller");

    match cli.command {
        Command::Roll { notation, seed, json } => {
            let result = dice_roller::roll(&notation, seed)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                println!("{}", result.explanation());
                println!("{result}");
            }
        },

        Command::Explain { notation } => {
            println!("{}", dice_roller::explain(&dice_roller::parse(&notation)?));
        },

        Command::Rules => print!("{RULES}"),

        Command::Prompt { example } => {
            println!("{}", dice_roller::help_prompt(example.as_deref()));
        },

        Command::Batch => batch(io::stdin().lock(), io::stdout().lock())?,
    }

    Ok(())
}

/// Answers every non blank line of `input` with one line of JSON on `output`.
/// Lines that are not valid requests stop the run.
fn batch<R: BufRead, W: Write>(input: R, mut output: W) -> anyhow::Result<()> {
    for (index, line) in input.lines().enumerate() {
        let line = line.context("failed to read request")?;
        if line.trim().is_empty() {
            continue;
        }

        let request: RollRequest = serde_json::from_str(&line)
            .with_context(|| format!("line {}: not a roll request", index + 1))?;

        let response = request.respond();
        if !response.is_ok() {
            tracing::warn!(line = index + 1, notation = %request.notation, "rejected roll request");
        }

        serde_json::to_writer(&mut output, &response)?;
        writeln!(output)?;
    }

    output.flush()?;
    Ok(())
}
