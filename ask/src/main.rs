use anyhow::{bail, Context, Result};
use clap::Parser;
use newsqa_core::config::{DEFAULT_CHUNK_SIZE, DEFAULT_MIN_SCORE, DEFAULT_OVERLAP, DEFAULT_TOP_K};
use newsqa_core::{answer, Document, QaParams};
use tracing_subscriber::{fmt, EnvFilter};
use walkdir::WalkDir;

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "ask")]
#[command(about = "Answer a question from JSON/JSONL documents with cited excerpts", long_about = None)]
struct Cli {
    /// Input path (file or directory)
    #[arg(long)]
    input: String,
    /// Question to answer
    #[arg(long)]
    question: String,
    #[arg(long, default_value_t = DEFAULT_TOP_K)]
    top_k: usize,
    /// Passage length in words
    #[arg(long, default_value_t = DEFAULT_CHUNK_SIZE)]
    chunk_size: usize,
    /// Words shared between consecutive passages
    #[arg(long, default_value_t = DEFAULT_OVERLAP)]
    overlap: usize,
    #[arg(long, default_value_t = DEFAULT_MIN_SCORE)]
    min_score: f64,
    /// Pretty-print the JSON answer
    #[arg(long, default_value_t = false)]
    pretty: bool,
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(std::io::stderr).init();
    let cli = Cli::parse();

    let documents = load_documents(Path::new(&cli.input))?;
    tracing::info!(documents = documents.len(), input = %cli.input, "loaded documents");

    let params = QaParams {
        top_k: cli.top_k,
        chunk_size: cli.chunk_size,
        overlap: cli.overlap,
        min_score: cli.min_score,
    };
    let result = answer(&documents, &cli.question, &params);
    tracing::info!(citations = result.citations.len(), "answered question");

    let out = if cli.pretty { serde_json::to_string_pretty(&result)? } else { serde_json::to_string(&result)? };
    println!("{out}");
    Ok(())
}

/// Collect documents from a `.json`/`.jsonl` file, or every such file under a directory.
fn load_documents(input_path: &Path) -> Result<Vec<Document>> {
    let mut files: Vec<PathBuf> = Vec::new();
    if input_path.is_dir() {
        for entry in WalkDir::new(input_path).sort_by_file_name().into_iter().filter_map(|e| e.ok()) {
            let p = entry.path();
            if p.is_file() && matches!(extension(p), Some("json" | "jsonl")) {
                files.push(p.to_path_buf());
            }
        }
    } else if input_path.is_file() {
        files.push(input_path.to_path_buf());
    } else {
        bail!("input path not found: {}", input_path.display());
    }

    let mut documents = Vec::new();
    for file in files {
        let loaded = if extension(&file) == Some("jsonl") { read_jsonl(&file) } else { read_json(&file) };
        documents.extend(loaded.with_context(|| format!("reading {}", file.display()))?);
    }
    Ok(documents)
}

fn extension(p: &Path) -> Option<&str> {
    p.extension().and_then(|s| s.to_str())
}

fn read_jsonl(file: &Path) -> Result<Vec<Document>> {
    let reader = BufReader::new(File::open(file)?);
    let mut docs = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() { continue; }
        docs.push(serde_json::from_str(&line)?);
    }
    Ok(docs)
}

fn read_json(file: &Path) -> Result<Vec<Document>> {
    let reader = BufReader::new(File::open(file)?);
    let json: serde_json::Value = serde_json::from_reader(reader)?;
    match json {
        serde_json::Value::Array(arr) => arr
            .into_iter()
            .map(|v| serde_json::from_value(v).map_err(Into::into))
            .collect(),
        serde_json::Value::Object(_) => Ok(vec![serde_json::from_value(json)?]),
        _ => Ok(Vec::new()),
    }
}
