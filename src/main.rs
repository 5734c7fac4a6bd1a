use anyhow::Context;
use clap::{Parser, Subcommand};
use ruleflow::engine::{build, combine, evaluate, Record};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Parse a rule and print its expression tree
    Parse {
        /// The rule string
        #[arg(short, long)]
        rule: String,
    },
    /// Evaluate a rule against a JSON record
    Eval {
        /// The rule string
        #[arg(short, long)]
        rule: String,

        /// Attribute record as a JSON object, e.g. '{"age": 35}'
        #[arg(short, long)]
        data: String,
    },
    /// OR-combine several rules and evaluate against a JSON record
    Combine {
        /// Rule strings (repeatable)
        #[arg(short, long, num_args = 1..)]
        rule: Vec<String>,

        /// Attribute record as a JSON object
        #[arg(short, long)]
        data: String,
    },
}

fn parse_record(data: &str) -> anyhow::Result<Record> {
    serde_json::from_str(data).context("data must be a JSON object of attribute values")
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();

    match args.command {
        Commands::Parse { rule } => {
            let tree = build(&rule)?;
            log::info!(
                "Parsed {} operand(s), {} operator(s)",
                tree.operand_count(),
                tree.operator_count()
            );
            println!("{}", tree);
        }
        Commands::Eval { rule, data } => {
            let tree = build(&rule)?;
            let record = parse_record(&data)?;
            println!("{}", evaluate(&tree, &record));
        }
        Commands::Combine { rule, data } => {
            let tree = combine(&rule)?;
            let record = parse_record(&data)?;
            log::info!("Combined {} rule(s) into {}", rule.len(), tree);
            println!("{}", evaluate(&tree, &record));
        }
    }

    Ok(())
}
