// file: src/main.rs
// description: commandline application entry point with command handling
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use corpus_manager::utils::logging::{format_info, format_success, format_warning};
use corpus_manager::{
    Config, Corpus, Preprocessor, RuleLemmatizer, SnowballStemmer, Validator,
};
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "corpus_manager")]
#[command(author = "cipher")]
#[command(version = "0.1.0")]
#[command(about = "Personal document store with text preprocessing", long_about = None)]
struct Cli {
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "config/default.toml"
    )]
    config: PathBuf,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a document with an inline title and content
    Add {
        title: String,

        content: String,
    },

    /// List all document titles in insertion order
    List,

    /// Find documents whose content contains a keyword
    Search {
        keyword: String,
    },

    /// Tokenize, filter stopwords, and count word frequencies for every document
    Preprocess,

    /// Print token statistics for one document
    Stats {
        title: String,
    },

    /// Run the full analysis pipeline on one document, including stemming and
    /// lemmatization, without persisting anything
    Analyze {
        title: String,
    },

    /// Write the corpus to another JSON file
    Export {
        #[arg(short, long, default_value = "exports/corpus.json")]
        output: PathBuf,

        #[arg(short, long)]
        pretty: bool,
    },

    /// Delete every document with the given title
    Delete {
        title: String,
    },

    /// Import a document from a Title:-headed text file
    Import {
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    corpus_manager::utils::logging::init_logger(cli.color, cli.verbose);

    info!("Corpus Manager");
    info!("Loading configuration from: {}", cli.config.display());

    let config = if cli.config.exists() {
        Config::load(Some(cli.config.as_path())).context("Failed to load configuration")?
    } else {
        warn!(
            "Config file {} not found, using default configuration",
            cli.config.display()
        );
        Config::load(None).unwrap_or_else(|e| {
            warn!("Falling back to built-in defaults: {}", e);
            Config::default_config()
        })
    };

    let mut corpus = Corpus::open(&config.store).context("Failed to open corpus store")?;

    if !corpus.load_report().skipped.is_empty() {
        println!(
            "{}",
            format_warning(&format!(
                "{} store entries were skipped during load",
                corpus.load_report().skipped.len()
            ))
        );
    }

    match cli.command {
        Commands::Add { title, content } => {
            cmd_add(&mut corpus, title, content)?;
        }
        Commands::List => {
            cmd_list(&corpus);
        }
        Commands::Search { keyword } => {
            cmd_search(&corpus, &keyword);
        }
        Commands::Preprocess => {
            cmd_preprocess(&mut corpus, &config)?;
        }
        Commands::Stats { title } => {
            cmd_stats(&corpus, &config, &title)?;
        }
        Commands::Analyze { title } => {
            cmd_analyze(&corpus, &config, &title)?;
        }
        Commands::Export { output, pretty } => {
            cmd_export(&corpus, output, pretty)?;
        }
        Commands::Delete { title } => {
            cmd_delete(&mut corpus, &title)?;
        }
        Commands::Import { file } => {
            cmd_import(&mut corpus, &file)?;
        }
    }

    Ok(())
}

fn cmd_add(corpus: &mut Corpus, title: String, content: String) -> Result<()> {
    corpus
        .add_document(title.clone(), content)
        .context("Failed to add document")?;

    println!("{}", format_success(&format!("Document '{}' added", title)));
    Ok(())
}

fn cmd_list(corpus: &Corpus) {
    let titles = corpus.list_documents();

    if titles.is_empty() {
        println!("{}", format_info("No documents in the corpus"));
        return;
    }

    println!("{}", format_info(&format!("{} document(s):", titles.len())));
    for title in titles {
        println!("  - {}", title);
    }
}

fn cmd_search(corpus: &Corpus, keyword: &str) {
    let matches = corpus.search_documents(keyword);

    if matches.is_empty() {
        println!(
            "{}",
            format_info(&format!("No documents contain '{}'", keyword))
        );
        return;
    }

    println!(
        "{}",
        format_info(&format!(
            "{} document(s) contain '{}':",
            matches.len(),
            keyword
        ))
    );
    for title in &matches {
        if let Some(doc) = corpus.get(title) {
            println!("  - {}: {}", title, Validator::truncate_text(&doc.content, 60));
        } else {
            println!("  - {}", title);
        }
    }
}

fn cmd_preprocess(corpus: &mut Corpus, config: &Config) -> Result<()> {
    let preprocessor =
        Preprocessor::new(config.analysis.stopword_filter()).with_progress(true);

    let stats = corpus
        .preprocess(&preprocessor)
        .context("Failed to preprocess corpus")?;

    println!(
        "{}",
        format_success(&format!(
            "Preprocessed {} documents: {} tokens kept, {} stopwords removed ({:.1}%)",
            stats.documents_processed,
            stats.tokens_kept,
            stats.tokens_removed,
            stats.removal_rate()
        ))
    );
    Ok(())
}

fn cmd_stats(corpus: &Corpus, config: &Config, title: &str) -> Result<()> {
    let doc = corpus
        .get(title)
        .with_context(|| format!("Document not found: {}", title))?;

    let stats = doc.statistics(config.analysis.top_words);

    println!("{}", format_info(&format!("Statistics for '{}':", title)));
    println!("  Total tokens:   {}", stats.total_tokens);
    println!("  Unique tokens:  {}", stats.unique_tokens);
    println!("  Avg length:     {:.2}", stats.avg_token_length);

    if stats.top_words.is_empty() {
        println!("  Top words:      (none; run preprocess first)");
    } else {
        println!("  Top words:");
        for (word, count) in &stats.top_words {
            println!("    {:>5}  {}", count, word);
        }
    }

    Ok(())
}

fn cmd_analyze(corpus: &Corpus, config: &Config, title: &str) -> Result<()> {
    let doc = corpus
        .get(title)
        .with_context(|| format!("Document not found: {}", title))?;

    // Work on a copy; analyze never persists
    let mut doc = doc.clone();
    doc.tokenize();
    doc.remove_stopwords(&config.analysis.stopword_filter());
    doc.compute_word_frequency();
    doc.stem_words(&SnowballStemmer::english());
    doc.lemmatize_words(&RuleLemmatizer::english());

    println!("{}", format_info(&format!("Analysis of '{}':", title)));
    println!("  Tokens:     {}", doc.tokens.join(" "));
    println!("  Stemmed:    {}", doc.stemmed_tokens.join(" "));
    println!("  Lemmatized: {}", doc.lemmatized_tokens.join(" "));

    let stats = doc.statistics(config.analysis.top_words);
    println!(
        "  {} tokens, {} unique, avg length {:.2}",
        stats.total_tokens, stats.unique_tokens, stats.avg_token_length
    );

    Ok(())
}

fn cmd_export(corpus: &Corpus, output: PathBuf, pretty: bool) -> Result<()> {
    let summary = corpus
        .export(&output, pretty)
        .context("Failed to export corpus")?;

    println!(
        "{}",
        format_success(&format!(
            "Exported {} documents to {} at {}",
            summary.total_documents,
            summary.path.display(),
            summary.exported_at
        ))
    );
    Ok(())
}

fn cmd_delete(corpus: &mut Corpus, title: &str) -> Result<()> {
    let removed = corpus
        .delete_document(title)
        .with_context(|| format!("Failed to delete '{}'", title))?;

    println!(
        "{}",
        format_success(&format!("Deleted {} document(s) titled '{}'", removed, title))
    );
    Ok(())
}

fn cmd_import(corpus: &mut Corpus, file: &PathBuf) -> Result<()> {
    Validator::validate_document_file(file)?;

    let title = corpus
        .add_document_from_file(file)
        .with_context(|| format!("Failed to import {}", file.display()))?;

    println!(
        "{}",
        format_success(&format!("Document '{}' imported from {}", title, file.display()))
    );
    Ok(())
}
