//! Analyzer configuration from environment variables.

use std::str::FromStr;

/// Completion service selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Service {
    #[default]
    HuggingFace,
    Ollama,
}

impl Service {
    pub fn as_str(&self) -> &'static str {
        match self {
            Service::HuggingFace => "huggingface",
            Service::Ollama => "ollama",
        }
    }
}

impl FromStr for Service {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "huggingface" | "hf" => Ok(Service::HuggingFace),
            "ollama" => Ok(Service::Ollama),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for Service {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Analyzer configuration
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    /// Completion service to call
    pub service: Service,
    /// Model override (None = service default)
    pub model: Option<String>,
    /// Maximum tokens to generate
    pub max_output_tokens: u32,
    /// Sampling temperature
    pub temperature: f32,
}

impl AnalyzerConfig {
    pub fn new() -> Self {
        Self {
            service: Service::default(),
            model: None,
            max_output_tokens: 500,
            temperature: 0.7,
        }
    }

    pub fn with_service(mut self, service: Service) -> Self {
        self.service = service;
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn with_max_output_tokens(mut self, max: u32) -> Self {
        self.max_output_tokens = max;
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let mut config = Self::new();

        if let Ok(service_str) = std::env::var("PERSONA_SERVICE") {
            if let Ok(service) = service_str.parse::<Service>() {
                config.service = service;
            }
        } else {
            // If no PERSONA_SERVICE, infer from available credentials so a
            // bare HF_TOKEN uses Hugging Face and an unconfigured machine
            // falls back to the local daemon
            if std::env::var("HF_TOKEN").is_ok() {
                config.service = Service::HuggingFace;
            } else {
                config.service = Service::Ollama;
            }
        }

        if let Ok(model) = std::env::var("PERSONA_MODEL") {
            config.model = Some(model);
        }

        if let Ok(max) = std::env::var("PERSONA_MAX_TOKENS") {
            if let Ok(val) = max.parse::<u32>() {
                config.max_output_tokens = val;
            }
        }

        if let Ok(temperature) = std::env::var("PERSONA_TEMPERATURE") {
            if let Ok(val) = temperature.parse::<f32>() {
                config.temperature = val;
            }
        }

        config
    }
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_as_str() {
        assert_eq!(Service::HuggingFace.as_str(), "huggingface");
        assert_eq!(Service::Ollama.as_str(), "ollama");
    }

    #[test]
    fn test_service_from_str() {
        assert_eq!("huggingface".parse(), Ok(Service::HuggingFace));
        assert_eq!("HF".parse(), Ok(Service::HuggingFace));
        assert_eq!("ollama".parse(), Ok(Service::Ollama));
        assert!("unknown".parse::<Service>().is_err());
    }

    #[test]
    fn test_analyzer_config_new() {
        let config = AnalyzerConfig::new();
        assert_eq!(config.service, Service::HuggingFace);
        assert_eq!(config.model, None);
        assert_eq!(config.max_output_tokens, 500);
        assert_eq!(config.temperature, 0.7);
    }

    #[test]
    fn test_analyzer_config_builder() {
        let config = AnalyzerConfig::new()
            .with_service(Service::Ollama)
            .with_model("llama3.2")
            .with_max_output_tokens(256)
            .with_temperature(0.3);

        assert_eq!(config.service, Service::Ollama);
        assert_eq!(config.model.as_deref(), Some("llama3.2"));
        assert_eq!(config.max_output_tokens, 256);
        assert_eq!(config.temperature, 0.3);
    }
}
