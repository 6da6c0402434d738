//! dbpedia-ner - Knowledge-graph-backed named-entity annotation
//!
//! This is the command-line entry point: a one-shot `annotate`/`resolve`
//! surface for scripting and an interactive prompt that annotates one
//! sentence per line.

use clap::{Parser, Subcommand};
use dbpedia_ner::{
    config::{self, NerConfig},
    error::{NerError, Result},
    Annotator, AnnotationTable, ConstituencyParser, CoreNlpParser, HttpTransport, TreebankParser,
    TypeResolver,
};
use std::io::{self, BufRead, Write};
use std::sync::Arc;
use tracing::{debug, error, Level};
use tracing_subscriber::{self, EnvFilter};

#[derive(Parser)]
#[command(name = "dbpedia-ner")]
#[command(
    about = "Annotate sentences with knowledge-graph entity types",
    long_about = None
)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// SPARQL endpoint address
    #[arg(long, env = config::ENDPOINT_ENV, default_value = config::DEFAULT_ENDPOINT)]
    endpoint: String,

    /// IRI of the graph to query
    #[arg(long, env = config::GRAPH_ENV, default_value = config::DEFAULT_GRAPH)]
    graph: String,

    /// HTTP parse server address (CoreNLP-style)
    #[arg(long, env = config::PARSER_URL_ENV)]
    parser_url: Option<String>,

    /// Treat input as pre-parsed Penn Treebank bracketed trees
    #[arg(long)]
    bracketed: bool,

    /// Set log level
    #[arg(short, long, default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Annotate a single sentence and exit
    Annotate {
        /// The sentence to annotate
        sentence: String,
    },

    /// Resolve the entity type of a single phrase and exit
    Resolve {
        /// The phrase to look up
        phrase: String,
    },

    /// Interactive prompt, one sentence per line (default)
    Repl,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    let mut cfg = NerConfig::new(&cli.endpoint, &cli.graph)?;
    if let Some(parser_url) = &cli.parser_url {
        cfg = cfg.with_parser_url(parser_url)?;
    }
    debug!("Querying graph <{}> via {}", cfg.graph, cfg.endpoint);

    match cli.command.unwrap_or(Commands::Repl) {
        Commands::Annotate { sentence } => {
            let annotator = Annotator::with_http(&cfg, build_parser(&cfg, cli.bracketed)?)?;
            print_table(annotator.annotation_table(&sentence).await?);
        }
        Commands::Resolve { phrase } => {
            let transport = Arc::new(HttpTransport::new(cfg.endpoint.clone()));
            let resolver = TypeResolver::new(transport, cfg.graph.as_str());
            match resolver.resolve_type(&phrase).await? {
                Some(entity_type) => println!("\"{phrase}\" has type {entity_type}"),
                None => println!("\"{phrase}\" has no type"),
            }
        }
        Commands::Repl => {
            let annotator = Annotator::with_http(&cfg, build_parser(&cfg, cli.bracketed)?)?;
            repl(&annotator).await?;
        }
    }

    Ok(())
}

/// Pick the constituency parser implementation from the CLI flags
fn build_parser(cfg: &NerConfig, bracketed: bool) -> Result<Arc<dyn ConstituencyParser>> {
    if bracketed {
        return Ok(Arc::new(TreebankParser));
    }
    match &cfg.parser_url {
        Some(url) => Ok(Arc::new(CoreNlpParser::new(url.clone()))),
        None => Err(NerError::Config(
            "no parser configured: pass --parser-url (or set DBPEDIA_NER_PARSER_URL), \
             or use --bracketed for pre-parsed input"
                .to_string(),
        )),
    }
}

/// Interactive annotation loop
///
/// Empty lines are ignored; `exit`, `quit`, and EOF end the loop. Errors are
/// reported at the prompt rather than silently discarded.
async fn repl(annotator: &Annotator) -> Result<()> {
    println!("Enter a sentence at the prompt (>). Type 'exit' to quit.");

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut input = String::new();
        if stdin.lock().read_line(&mut input)? == 0 {
            // EOF
            println!();
            break;
        }

        let sentence = input.trim();
        match sentence {
            "" => continue,
            "exit" | "quit" => break,
            _ => {}
        }

        println!("Retrieving annotations for \"{sentence}\"...");
        match annotator.annotation_table(sentence).await {
            Ok(table) => print_table(table),
            Err(NerError::Parse(reason)) => {
                debug!("Parse failure: {}", reason);
                println!("No base noun phrases were found.");
            }
            Err(e) => {
                error!("Annotation failed: {}", e);
                println!("✗ Annotation failed: {e}");
            }
        }
    }

    Ok(())
}

fn print_table(table: Option<AnnotationTable>) {
    match table {
        Some(annotations) => {
            for annotation in annotations {
                println!("{annotation}");
            }
        }
        None => println!("No base noun phrases were found."),
    }
}

fn init_logging(log_level: &str) {
    let level = match log_level {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    // Keep hyper/reqwest connection chatter out of the annotation output.
    let filter = EnvFilter::new(format!(
        "dbpedia_ner={},reqwest=warn,hyper=warn",
        level.as_str().to_lowercase()
    ));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
