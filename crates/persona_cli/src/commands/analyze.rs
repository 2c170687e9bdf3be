//! `persona analyze` command.

use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{anyhow, bail, Context, Result};
use comfy_table::{Attribute, Cell, Color};
use futures::StreamExt;

use persona_core::{
    build_prompt, parse, ParseOutcome, PersonalityReport, ANALYST_SYSTEM, ARTIFACT_FILENAME,
};
use persona_llms::services::huggingface::HuggingFaceConfig;
use persona_llms::services::ollama::OllamaConfig;
use persona_llms::{
    CompletionRequest, CompletionService, HuggingFaceService, OllamaService, ServiceError,
};

use crate::cli::AnalyzeArgs;
use crate::config::{AnalyzerConfig, Service};
use crate::output;

pub async fn handle(args: AnalyzeArgs) -> Result<()> {
    let text = read_text(&args)?;
    if text.trim().is_empty() {
        bail!("please paste some text to analyze");
    }

    let config = resolve_config(&args)?;
    let service = build_service(&config)?;

    let prompt = build_prompt(ANALYST_SYSTEM, text.trim());
    let request = CompletionRequest::new(prompt)
        .with_max_output_tokens(config.max_output_tokens)
        .with_temperature(config.temperature)
        .with_streaming(args.stream);

    let raw = if args.stream {
        stream_completion(service.as_ref(), request).await?
    } else {
        let spinner = output::spinner("Analyzing...");
        match service.complete(request).await {
            Ok(raw) => {
                spinner.finish_and_clear();
                raw
            }
            Err(e) => {
                output::spinner_error(&spinner, "Analysis failed");
                return Err(surface(e));
            }
        }
    };

    match parse(&raw) {
        ParseOutcome::Structured(report) => {
            render_report(&report);
            if args.save || args.out.is_some() {
                let path = args
                    .out
                    .clone()
                    .unwrap_or_else(|| PathBuf::from(ARTIFACT_FILENAME));
                write_artifact(&report, &path)?;
                output::success(&format!("report saved to {}", path.display()));
            }
        }
        ParseOutcome::Unstructured => {
            output::warning("The model did not return structured JSON; showing raw output.");
            if output::is_json() {
                output::data("raw", &raw);
            } else {
                println!("{raw}");
            }
            if args.save || args.out.is_some() {
                output::warning("no structured report to save");
            }
        }
    }

    Ok(())
}

/// Writing sample source, in priority order: argument, --file, stdin.
fn read_text(args: &AnalyzeArgs) -> Result<String> {
    if let Some(ref text) = args.text {
        return Ok(text.clone());
    }
    if let Some(ref path) = args.file {
        return std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()));
    }
    let mut buf = String::new();
    std::io::stdin()
        .read_to_string(&mut buf)
        .context("failed to read stdin")?;
    Ok(buf)
}

/// Environment config with command-line overrides applied.
fn resolve_config(args: &AnalyzeArgs) -> Result<AnalyzerConfig> {
    let mut config = AnalyzerConfig::from_env();
    if let Some(ref service) = args.service {
        config.service = service
            .parse::<Service>()
            .map_err(|_| anyhow!("unknown service '{service}' (expected huggingface or ollama)"))?;
    }
    if let Some(ref model) = args.model {
        config.model = Some(model.clone());
    }
    if let Some(max) = args.max_tokens {
        config.max_output_tokens = max;
    }
    if let Some(temperature) = args.temperature {
        config.temperature = temperature;
    }
    Ok(config)
}

/// Construct the configured completion service handle.
fn build_service(config: &AnalyzerConfig) -> Result<Arc<dyn CompletionService>> {
    match config.service {
        Service::HuggingFace => {
            let token = std::env::var(HuggingFaceService::API_KEY_ENV).unwrap_or_default();
            let mut hf = HuggingFaceConfig::new(token);
            if let Some(ref model) = config.model {
                hf = hf.with_model(model);
            }
            let service = HuggingFaceService::new(hf).map_err(surface)?;
            Ok(Arc::new(service))
        }
        Service::Ollama => {
            let mut oc = OllamaConfig::new();
            if let Ok(url) = std::env::var(OllamaService::URL_ENV) {
                oc = oc.with_base_url(url);
            }
            if let Some(ref model) = config.model {
                oc = oc.with_model(model);
            } else if let Ok(model) = std::env::var(OllamaService::MODEL_ENV) {
                oc = oc.with_model(model);
            }
            Ok(Arc::new(OllamaService::new(oc)))
        }
    }
}

/// Drain the chunk stream, echoing chunks as they arrive, and return the
/// accumulated text.
async fn stream_completion(
    service: &dyn CompletionService,
    request: CompletionRequest,
) -> Result<String> {
    use std::io::Write;

    let mut stream = service.complete_streaming(request).await.map_err(surface)?;
    let mut accumulated = String::new();
    while let Some(chunk) = stream.next().await {
        if !output::is_json() {
            print!("{chunk}");
            let _ = std::io::stdout().flush();
        }
        accumulated.push_str(&chunk);
    }
    if !output::is_json() {
        println!();
    }
    Ok(accumulated)
}

/// Show the error's user-facing hint, then hand it to the caller.
fn surface(e: ServiceError) -> anyhow::Error {
    if let Some(hint) = e.hint() {
        output::dim(&format!("hint: {hint}"));
    }
    anyhow!(e)
}

fn write_artifact(report: &PersonalityReport, path: &Path) -> Result<()> {
    std::fs::write(path, report.to_pretty_json())
        .with_context(|| format!("failed to write {}", path.display()))
}

/// Render the structured report: tone, Big Five table, MBTI, advice,
/// recommendations.
fn render_report(report: &PersonalityReport) {
    if output::is_json() {
        output::data("report", report);
        return;
    }

    output::header("Personality Report");
    if !report.emotional_tone.is_empty() {
        output::kv("emotional tone", &report.emotional_tone);
    }

    let mut table = output::table();
    table.set_header(vec![
        Cell::new("Trait").fg(Color::Cyan).add_attribute(Attribute::Bold),
        Cell::new("Score").fg(Color::Cyan).add_attribute(Attribute::Bold),
        Cell::new("Reason").fg(Color::Cyan).add_attribute(Attribute::Bold),
    ]);
    for (name, trait_score) in report.big_five.traits() {
        table.add_row(vec![
            Cell::new(name).fg(Color::Green),
            Cell::new(trait_score.score),
            Cell::new(&trait_score.reason),
        ]);
    }
    println!("{table}");

    if !report.mbti.type_.is_empty() {
        output::kv("mbti", &report.mbti.type_);
        if !report.mbti.reason.is_empty() {
            output::dim(&format!("  {}", report.mbti.reason));
        }
    }

    if !report.advice.is_empty() {
        output::header("Advice");
        for entry in &report.advice {
            println!("  - {entry}");
        }
    }

    if !report.recommendations.is_empty() {
        output::header("Recommendations");
        for rec in &report.recommendations {
            output::item(&format!("[{}] {}", rec.kind.as_str(), rec.title), &rec.reason);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_artifact_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(ARTIFACT_FILENAME);

        let report = match parse(r#"{"emotional_tone":"calm"}"#) {
            ParseOutcome::Structured(report) => report,
            ParseOutcome::Unstructured => panic!("expected structured outcome"),
        };
        write_artifact(&report, &path).unwrap();

        let saved = std::fs::read_to_string(&path).unwrap();
        match parse(&saved) {
            ParseOutcome::Structured(reloaded) => assert_eq!(reloaded, report),
            ParseOutcome::Unstructured => panic!("artifact did not round-trip"),
        }
    }

    #[test]
    fn test_resolve_config_rejects_unknown_service() {
        let args = AnalyzeArgs {
            text: Some("sample".to_string()),
            file: None,
            service: Some("frontier".to_string()),
            model: None,
            stream: false,
            max_tokens: None,
            temperature: None,
            save: false,
            out: None,
        };
        assert!(resolve_config(&args).is_err());
    }

    #[test]
    fn test_resolve_config_applies_overrides() {
        let args = AnalyzeArgs {
            text: None,
            file: None,
            service: Some("ollama".to_string()),
            model: Some("mistral".to_string()),
            stream: true,
            max_tokens: Some(256),
            temperature: Some(0.1),
            save: false,
            out: None,
        };
        let config = resolve_config(&args).unwrap();
        assert_eq!(config.service, Service::Ollama);
        assert_eq!(config.model.as_deref(), Some("mistral"));
        assert_eq!(config.max_output_tokens, 256);
        assert_eq!(config.temperature, 0.1);
    }
}
