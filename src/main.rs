use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use fixturepath::config::Config;
use fixturepath::document::node::PropertyNode;
use fixturepath::expression::{sort_canonical, Expression};
use fixturepath::file::loader::{load_tree_file, load_tree_from_stdin};
use fixturepath::resolver::NodeResolver;

/// fixturepath - resolve path expressions against generated object trees
#[derive(Parser)]
#[command(name = "fixturepath")]
#[command(version)]
#[command(about = "Parse, order and resolve fixture path expressions", long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Parse an expression and print its canonical form and compiled resolver
    Parse {
        expression: String,
    },
    /// Print expressions in override application order
    Sort {
        #[arg(required = true)]
        expressions: Vec<String>,
    },
    /// Resolve an expression against a YAML/JSON tree file
    Resolve {
        /// Tree file (use "-" for stdin; .gz is decompressed)
        file: String,
        expression: String,
        /// Fail when nothing matches (overrides the config file)
        #[arg(short, long)]
        strict: bool,
    },
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = Config::load();

    match cli.command {
        Command::Parse { expression } => {
            let parsed = Expression::parse(&expression)?;
            println!("{}", parsed);
            println!("{:?}", NodeResolver::compile(&parsed));
        }
        Command::Sort { expressions } => {
            let mut parsed = expressions
                .iter()
                .map(|e| Expression::parse(e))
                .collect::<Result<Vec<_>, _>>()?;
            sort_canonical(&mut parsed);
            for expression in parsed {
                println!("{}", expression);
            }
        }
        Command::Resolve {
            file,
            expression,
            strict,
        } => {
            let root = load_tree(&file)?;
            let parsed = Expression::parse(&expression)?;
            let mut resolver = NodeResolver::compile(&parsed);
            if strict || config.strict_mode {
                resolver = resolver.strict();
            }
            let nodes = resolver
                .resolve(&root)
                .with_context(|| format!("Failed to resolve '{}' in {}", parsed, file))?;
            for node in &nodes {
                println!("{}", node);
            }
            eprintln!("{} match(es)", nodes.len());
        }
    }

    Ok(())
}

fn load_tree(file: &str) -> Result<PropertyNode> {
    if file == "-" {
        load_tree_from_stdin()
    } else {
        load_tree_file(file)
    }
}
