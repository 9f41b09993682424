use config::{Config, ConfigError, File};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub providers: ProviderSettings,
    pub chunking: ChunkingSettings,
    pub pdf_layout: PdfLayoutSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProviderSettings {
    pub google: GoogleTranslateSettings,
    pub mymemory: MyMemorySettings,
    pub gemini: GeminiSettings,
    pub vision: VisionSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GoogleTranslateSettings {
    pub endpoint: String,
    pub api_key: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MyMemorySettings {
    pub endpoint: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeminiSettings {
    pub endpoint: String,
    pub api_key: String,
    /// Tried first: the newer, faster model.
    pub primary_model: String,
    /// Retried with the identical request when the primary fails.
    pub fallback_model: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VisionSettings {
    pub enabled: bool,
    pub endpoint: String,
    pub api_key: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChunkingSettings {
    pub max_chunk_chars: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PdfLayoutSettings {
    pub max_chars_per_line: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("configuration: {0}")]
    Config(#[from] ConfigError),
}

impl Settings {
    /// Layered load: built-in defaults, then an optional `linguara.toml`
    /// beside the binary, then `LINGUARA__`-prefixed environment
    /// overrides (e.g. `LINGUARA__SERVER__PORT=8080`). Credentials are
    /// always configuration values; there are no built-in keys.
    pub fn load() -> Result<Self, SettingsError> {
        let builder = Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default(
                "providers.google.endpoint",
                "https://translation.googleapis.com/language/translate/v2",
            )?
            .set_default("providers.google.api_key", "")?
            .set_default(
                "providers.mymemory.endpoint",
                "https://api.mymemory.translated.net/get",
            )?
            .set_default(
                "providers.gemini.endpoint",
                "https://generativelanguage.googleapis.com/v1beta",
            )?
            .set_default("providers.gemini.api_key", "")?
            .set_default("providers.gemini.primary_model", "gemini-2.0-flash")?
            .set_default("providers.gemini.fallback_model", "gemini-pro")?
            .set_default("providers.vision.enabled", true)?
            .set_default(
                "providers.vision.endpoint",
                "https://vision.googleapis.com/v1/files:annotate",
            )?
            .set_default("providers.vision.api_key", "")?
            .set_default("chunking.max_chunk_chars", 500)?
            .set_default("pdf_layout.max_chars_per_line", 90)?
            .set_default("logging.level", "info")?
            .set_default("logging.enable_json", false)?
            .add_source(File::with_name("linguara").required(false))
            .add_source(
                config::Environment::with_prefix("LINGUARA")
                    .separator("__")
                    .try_parsing(true),
            );

        let settings = builder.build()?.try_deserialize()?;
        Ok(settings)
    }
}
