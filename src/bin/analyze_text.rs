use std::io::Read;

use anyhow::{bail, Context, Result};
use inclusivo::Analyzer;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Inputs longer than this are rejected before analysis.
const MAX_INPUT_CHARS: usize = 5000;

fn preview(s: &str, max_chars: usize) -> String {
    let mut out: String = s.chars().take(max_chars).collect();
    if s.chars().count() > max_chars {
        out.push_str("...");
    }
    out.replace('\n', " ")
}

fn parse_arg_value(args: &[String], key: &str) -> Option<String> {
    args.iter()
        .position(|a| a == key)
        .and_then(|i| args.get(i + 1))
        .cloned()
}

fn has_flag(args: &[String], key: &str) -> bool {
    args.iter().any(|a| a == key)
}

/// Text source priority: `--file` contents, positional arguments joined by
/// spaces, else stdin read to end.
fn read_input(args: &[String]) -> Result<String> {
    if let Some(path) = parse_arg_value(args, "--file") {
        return std::fs::read_to_string(&path)
            .with_context(|| format!("read file failed: {}", path));
    }

    let mut positional: Vec<&str> = Vec::new();
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--json" => i += 1,
            "--file" | "--out" => i += 2,
            arg => {
                positional.push(arg);
                i += 1;
            }
        }
    }
    if !positional.is_empty() {
        return Ok(positional.join(" "));
    }

    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .context("read stdin failed")?;
    Ok(buffer)
}

fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .init();
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        eprintln!(
            "Usage:\n  cargo run --bin analyze_text -- \"<texto>\" [--json] [--out <json_path>]\n  cargo run --bin analyze_text -- --file <path.txt> [--json] [--out <json_path>]\n  cat texto.txt | cargo run --bin analyze_text -- --json\n\nNotes:\n  - El texto se analiza tal cual; máximo {} caracteres.\n  - `--json` imprime el informe completo en JSON en lugar del resumen.",
            MAX_INPUT_CHARS
        );
        return Ok(());
    }

    init_logging();

    let as_json = has_flag(&args, "--json");
    let out_path = parse_arg_value(&args, "--out");

    let text = read_input(&args)?;

    if text.trim().is_empty() {
        bail!("El texto no puede estar vacío");
    }
    if text.chars().count() > MAX_INPUT_CHARS {
        bail!(
            "El texto es demasiado largo (máximo {} caracteres)",
            MAX_INPUT_CHARS
        );
    }

    let analyzer = Analyzer::new();
    let report = analyzer.analyze(&text)?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!(
            "Words: {}  Issues: {}  Score: {}/100",
            report.stats.total_words, report.stats.issues_found, report.stats.inclusive_score
        );
        println!();
        println!("{}", report.overall_feedback);

        if !report.issues.is_empty() {
            println!();
            for (i, issue) in report.issues.iter().enumerate() {
                println!(
                    "[{:02}] {} ({}, {}) conf={:.2}",
                    i,
                    issue.original_text,
                    issue.r#type.as_str(),
                    issue.severity.as_str(),
                    issue.confidence
                );
                println!("     sugerencia: {}", issue.suggestion);
                println!("     {}", preview(&issue.explanation, 140));
            }
        }
    }

    if let Some(out_path) = out_path {
        let json = serde_json::to_string_pretty(&report)?;
        std::fs::write(&out_path, &json)
            .with_context(|| format!("write out failed: {}", out_path))?;
        println!();
        println!("Wrote JSON: {}", out_path);
    }

    Ok(())
}
