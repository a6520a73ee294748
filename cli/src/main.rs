use anyhow::Result;
use clap::{Parser, Subcommand};
use rustipedia_core::{search, Document, DocumentIndex, SearchOutcome};
use serde::Serialize;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Instant;
use tracing_subscriber::{fmt, EnvFilter};

mod corpus;
mod render;

#[derive(Parser)]
#[command(name = "rustipedia")]
#[command(about = "In-memory encyclopedia: exact title lookup and phrase search", long_about = None)]
struct Cli {
    /// Directory of .txt articles (first line is the title, the rest is the body)
    #[arg(long, default_value = "articles")]
    articles: PathBuf,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Menu-driven session: add, remove, and search articles
    Interactive,
    /// One-shot phrase search over the corpus
    Search {
        query: String,
        /// Emit results as JSON instead of formatted articles
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// One-shot exact-title lookup
    Lookup { title: String },
}

#[derive(Serialize)]
struct SearchResponse {
    query: String,
    took_s: f64,
    results: Vec<SearchHit>,
}

#[derive(Serialize)]
struct SearchHit {
    title: String,
    score: f64,
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let cli = Cli::parse();

    let docs = corpus::load_corpus(&cli.articles)?;
    println!("Read {} articles from disk.", docs.len());

    let mut index = DocumentIndex::new();
    for doc in docs {
        index.insert(doc);
    }

    match cli.command {
        Commands::Interactive => interactive(index),
        Commands::Search { query, json } => run_search(&index, &query, json),
        Commands::Lookup { title } => {
            run_lookup(&index, &title);
            Ok(())
        }
    }
}

fn run_search(index: &DocumentIndex, query: &str, json: bool) -> Result<()> {
    let start = Instant::now();
    let outcome = search(index, query);
    let took_s = start.elapsed().as_secs_f64();

    if json {
        let results = match &outcome {
            SearchOutcome::Matches(matches) => matches
                .iter()
                .map(|m| SearchHit { title: m.document.title.clone(), score: m.score })
                .collect(),
            SearchOutcome::NoMatches => Vec::new(),
        };
        let response = SearchResponse { query: query.to_owned(), took_s, results };
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    match outcome {
        SearchOutcome::Matches(matches) => print!("{}", render::format_matches(&matches)),
        SearchOutcome::NoMatches => println!("No matching articles found!"),
    }
    Ok(())
}

fn run_lookup(index: &DocumentIndex, title: &str) {
    match index.lookup(title) {
        Some(doc) => println!("{}", render::format_article(doc)),
        None => println!("Article not found!"),
    }
}

fn interactive(mut index: DocumentIndex) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();

    loop {
        println!();
        println!("Welcome to Rustipedia!");
        println!("======================");
        println!("Make a selection from the following options:");
        println!();
        println!("    1. add a new article");
        println!("    2. remove an article");
        println!("    3. search by article title");
        println!("    4. search by phrase (list of keywords)");
        println!();

        let choice = prompt(&mut input, "Enter a selection (1-4, or 0 to quit): ")?;
        match choice.trim() {
            "0" => return Ok(()),
            "1" => add_article(&mut input, &mut index)?,
            "2" => remove_article(&mut input, &mut index)?,
            "3" => title_search(&mut input, &index)?,
            "4" => phrase_search(&mut input, &index)?,
            other => println!("Unrecognized selection: {other}"),
        }
    }
}

fn add_article(input: &mut impl BufRead, index: &mut DocumentIndex) -> Result<()> {
    println!();
    println!("Add an article");
    println!("==============");
    let title = prompt(input, "Enter article title: ")?;

    println!("You may now enter the body of the article.");
    println!("Press return two times when you are done.");
    let mut body = String::new();
    loop {
        let line = read_line(input)?;
        if line.is_empty() {
            break;
        }
        body.push_str(&line);
        body.push('\n');
    }

    index.insert(Document::new(title, body));
    Ok(())
}

fn remove_article(input: &mut impl BufRead, index: &mut DocumentIndex) -> Result<()> {
    println!();
    println!("Remove an article");
    println!("=================");
    let title = prompt(input, "Enter article title: ")?;
    index.remove(&title);
    Ok(())
}

fn title_search(input: &mut impl BufRead, index: &DocumentIndex) -> Result<()> {
    println!();
    println!("Search by article title");
    println!("=======================");
    let title = prompt(input, "Enter article title: ")?;
    run_lookup(index, &title);
    Ok(())
}

fn phrase_search(input: &mut impl BufRead, index: &DocumentIndex) -> Result<()> {
    println!();
    println!("Search by article content");
    println!("=========================");
    let phrase = prompt(input, "Enter search phrase: ")?;
    match search(index, &phrase) {
        SearchOutcome::Matches(matches) => print!("{}", render::format_matches(&matches)),
        SearchOutcome::NoMatches => println!("No matching articles found!"),
    }
    Ok(())
}

fn prompt(input: &mut impl BufRead, message: &str) -> Result<String> {
    print!("{message}");
    io::stdout().flush()?;
    read_line(input)
}

fn read_line(input: &mut impl BufRead) -> Result<String> {
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_owned())
}
