// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::{Context, Result};
use clap::Parser;
use levtrie::{load_corpus, normalize, CorpusFormat, MaxDistance, SearchIndex, SearchOptions, Traversal};
use serde::Serialize;
use std::collections::HashSet;
use std::process::ExitCode;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod cli;
use cli::display::{highlight, row, section_bottom, section_top, stat};
use cli::{Cli, Commands, CorpusArgs};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli.command) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("❌ {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Log to stderr. `LEVTRIE_LOG` wins over `-v`.
fn init_tracing(verbose: bool) {
    let default = if verbose { "levtrie=debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("LEVTRIE_LOG").unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(command: Commands) -> Result<ExitCode> {
    match command {
        Commands::Search {
            corpus,
            query,
            distance,
            traversal,
            words,
            json,
        } => {
            let index = build_index(&corpus)?;
            run_search(&index, &query, distance, traversal, words, json)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Stats { corpus, json } => {
            let index = build_index(&corpus)?;
            print_stats(&index, json)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Verify {
            corpus,
            distance,
            queries,
        } => {
            let index = build_index(&corpus)?;
            let queries = match queries {
                Some(path) => load_corpus(&path, CorpusFormat::Lines)
                    .with_context(|| format!("loading queries from {}", path.display()))?,
                None => index.trie().words().map(str::to_string).collect(),
            };
            Ok(run_verify(&index, &queries, distance))
        }
    }
}

fn build_index(args: &CorpusArgs) -> Result<SearchIndex> {
    let documents = load_corpus(&args.corpus, args.format)
        .with_context(|| format!("loading corpus {}", args.corpus.display()))?;
    if documents.is_empty() {
        warn!(corpus = %args.corpus.display(), "corpus has no documents");
    }
    Ok(SearchIndex::new(documents))
}

/// Everything `search` prints, in display order.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SearchReport<'a> {
    query: &'a str,
    normalized_query: String,
    max_distance: MaxDistance,
    traversal: Traversal,
    nodes_visited: usize,
    node_count: usize,
    words: Vec<String>,
    /// Empty when only words were asked for
    documents: Vec<String>,
}

fn search_report<'a>(
    index: &SearchIndex,
    query: &'a str,
    distance: MaxDistance,
    traversal: Traversal,
    words_only: bool,
) -> SearchReport<'a> {
    let options = SearchOptions {
        traversal,
        ..SearchOptions::default()
    };
    let outcome = index.trie().search(query, distance.get(), &options);
    let documents = if words_only {
        Vec::new()
    } else {
        sorted(index.search(query, distance.get(), &options))
    };

    SearchReport {
        query,
        normalized_query: normalize(query),
        max_distance: distance,
        traversal,
        nodes_visited: outcome.nodes_visited,
        node_count: index.trie().node_count(),
        words: sorted(outcome.words),
        documents,
    }
}

// Sets are unordered; sort for stable output
fn sorted(set: HashSet<String>) -> Vec<String> {
    let mut items: Vec<String> = set.into_iter().collect();
    items.sort_unstable();
    items
}

fn run_search(
    index: &SearchIndex,
    query: &str,
    distance: MaxDistance,
    traversal: Traversal,
    words_only: bool,
    json: bool,
) -> Result<()> {
    let report = search_report(index, query, distance, traversal, words_only);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if words_only {
        for word in &report.words {
            println!("{}", word);
        }
        return Ok(());
    }

    section_top(&format!("{} within {} edit(s)", query, distance));
    stat("words matched", report.words.len());
    stat("nodes visited", format!("{} / {}", report.nodes_visited, report.node_count));
    stat("documents", report.documents.len());
    section_bottom();
    let matched: HashSet<String> = report.words.iter().cloned().collect();
    for document in &report.documents {
        println!("{}", highlight(document, &matched));
    }
    Ok(())
}

fn print_stats(index: &SearchIndex, json: bool) -> Result<()> {
    let stats = index.stats();
    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    section_top("index");
    stat("documents", stats.documents);
    stat("distinct words", stats.words);
    stat("trie nodes", stats.nodes);
    section_bottom();
    Ok(())
}

/// A query whose trie result disagrees with the linear scan.
#[derive(Debug, PartialEq, Eq)]
struct Mismatch {
    query: String,
    max_distance: usize,
    trie_words: usize,
    scan_words: usize,
}

/// Compare one query at one bound. `documents` is what the index returned for
/// it; the trie's words and the expected documents are recomputed here.
fn check_query(index: &SearchIndex, query: &str, n: usize, documents: &HashSet<String>) -> Option<Mismatch> {
    let trie = index.trie();
    let words = trie.fuzzy_match(query, n);
    let expected_words = trie.linear_match(query, n);
    let expected_documents: HashSet<String> = expected_words
        .iter()
        .filter_map(|word| index.documents_for(word))
        .flatten()
        .cloned()
        .collect();

    if words == expected_words && *documents == expected_documents {
        return None;
    }
    warn!(
        query = %query,
        n,
        trie = words.len(),
        scan = expected_words.len(),
        "trie disagrees with linear scan"
    );
    Some(Mismatch {
        query: query.to_string(),
        max_distance: n,
        trie_words: words.len(),
        scan_words: expected_words.len(),
    })
}

/// Every query checked at every bound from 0 up to `distance`.
fn find_mismatches(index: &SearchIndex, queries: &[String], distance: MaxDistance) -> Vec<Mismatch> {
    (0..=distance.get())
        .flat_map(|n| {
            let batch = index.fuzzy_match_batch(queries, n);
            queries
                .iter()
                .zip(batch)
                .filter_map(|(query, documents)| check_query(index, query, n, &documents))
                .collect::<Vec<_>>()
        })
        .collect()
}

fn exit_code(mismatches: &[Mismatch]) -> ExitCode {
    if mismatches.is_empty() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// Compare the trie with a linear scan for every query and every bound up to
/// `distance`. Returns failure if any pair disagrees.
fn run_verify(index: &SearchIndex, queries: &[String], distance: MaxDistance) -> ExitCode {
    let mismatches = find_mismatches(index, queries, distance);
    let checked = queries.len() * (distance.get() + 1);
    info!(checked, mismatches = mismatches.len(), "verification finished");

    section_top("verify");
    stat("queries", queries.len());
    stat("checks", checked);
    stat("mismatches", mismatches.len());
    for m in &mismatches {
        row(&format!(
            " mismatch: {:?} @ {} (trie {}, scan {})",
            m.query, m.max_distance, m.trie_words, m.scan_words
        ));
    }
    section_bottom();

    exit_code(&mismatches)
}
