//! `persona services` subcommands.

use anyhow::{anyhow, Result};
use persona_llms::{HuggingFaceService, OllamaService, ServiceRegistry};

use crate::cli::ServicesAction;
use crate::output;

struct ServiceInfo {
    id: String,
    status: &'static str,
}

fn build_registry() -> (ServiceRegistry, Vec<ServiceInfo>) {
    let mut registry = ServiceRegistry::new();
    let mut infos = Vec::new();

    // Hugging Face needs a token
    match HuggingFaceService::from_env() {
        Ok(service) => {
            registry = registry.register("huggingface", service);
            infos.push(ServiceInfo {
                id: "huggingface".to_string(),
                status: "configured",
            });
        }
        Err(_) => {
            infos.push(ServiceInfo {
                id: "huggingface".to_string(),
                status: "missing access token",
            });
        }
    }

    // Ollama is always constructible; reachability is checked by `test`
    registry = registry.register("ollama", OllamaService::from_env());
    infos.push(ServiceInfo {
        id: "ollama".to_string(),
        status: "configured",
    });

    (registry, infos)
}

pub async fn handle(action: ServicesAction) -> Result<()> {
    match action {
        ServicesAction::List => list(),
        ServicesAction::Test { service } => test(&service).await,
        ServicesAction::Models { service } => models(&service).await,
    }
}

fn list() -> Result<()> {
    let (_, infos) = build_registry();

    output::header("Registered Services");

    let mut table = output::table();
    table.set_header(vec![
        comfy_table::Cell::new("Service")
            .fg(comfy_table::Color::Cyan)
            .add_attribute(comfy_table::Attribute::Bold),
        comfy_table::Cell::new("Status")
            .fg(comfy_table::Color::Cyan)
            .add_attribute(comfy_table::Attribute::Bold),
    ]);

    for info in &infos {
        let status = if info.status == "configured" {
            comfy_table::Cell::new(info.status).fg(comfy_table::Color::Green)
        } else {
            comfy_table::Cell::new(info.status).fg(comfy_table::Color::Yellow)
        };
        table.add_row(vec![
            comfy_table::Cell::new(&info.id).fg(comfy_table::Color::Green),
            status,
        ]);
    }

    if output::is_json() {
        let items: Vec<_> = infos
            .iter()
            .map(|i| serde_json::json!({ "id": i.id, "status": i.status }))
            .collect();
        output::data("services", &items);
    } else {
        println!("{table}");
    }

    Ok(())
}

async fn test(service_id: &str) -> Result<()> {
    let (registry, _) = build_registry();
    let service = registry
        .get_service(service_id)
        .map_err(|e| anyhow!("{e}"))?;

    let spinner = output::spinner(&format!("Testing {service_id} connectivity..."));

    // Test by listing models
    match service.list_models().await {
        Ok(models) => {
            output::spinner_success(
                &spinner,
                &format!("{service_id} is reachable ({} models)", models.len()),
            );
            Ok(())
        }
        Err(e) => {
            output::spinner_error(&spinner, &format!("{service_id} connection failed"));
            Err(anyhow!("service test failed: {e}"))
        }
    }
}

async fn models(service_id: &str) -> Result<()> {
    let (registry, _) = build_registry();
    let service = registry
        .get_service(service_id)
        .map_err(|e| anyhow!("{e}"))?;

    let spinner = output::spinner(&format!("Fetching models for {service_id}..."));

    match service.list_models().await {
        Ok(models) => {
            spinner.finish_and_clear();

            output::header(&format!("Models for {service_id}"));

            if models.is_empty() {
                output::dim("No models returned (service may not support listing)");
                return Ok(());
            }

            if output::is_json() {
                output::data("models", &models);
            } else {
                for model in &models {
                    output::item(model, "");
                }
            }

            Ok(())
        }
        Err(e) => {
            output::spinner_error(&spinner, "Failed to fetch models");
            Err(anyhow!("failed to list models: {e}"))
        }
    }
}
