mod settings;

pub use settings::{
    ChunkingSettings, GeminiSettings, GoogleTranslateSettings, LoggingSettings, MyMemorySettings,
    PdfLayoutSettings, ProviderSettings, ServerSettings, Settings, SettingsError, VisionSettings,
};
