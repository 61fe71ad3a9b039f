use std::path::PathBuf;

use serde::Deserialize;

/// Top-level service settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/giftbox/config.toml` or `~/.config/giftbox/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `GIFTBOX__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub library: LibrarySettings,
    pub playback: PlaybackSettings,
    pub votes: VoteSettings,
    pub layout: LayoutSettings,
    pub plan: PlanSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Socket address the HTTP server binds to.
    pub bind: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:3000".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LibrarySettings {
    /// Directory holding the audio files.
    pub dir: PathBuf,
    /// URL path segment the directory is served under (`/<prefix>/<file>`).
    pub public_prefix: String,
    /// File extensions to treat as audio (case-insensitive, without dot).
    pub extensions: Vec<String>,
    /// Whether to list dotfiles such as `.intro.mp3`. On by default.
    pub include_hidden: bool,
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("public").join("musics"),
            public_prefix: "musics".to_string(),
            extensions: vec![
                "mp3".into(),
                "wav".into(),
                "m4a".into(),
                "ogg".into(),
                "flac".into(),
            ],
            include_hidden: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlaybackSettings {
    /// Whether shuffle starts enabled.
    pub shuffle: bool,
    /// Initial repeat mode.
    pub repeat_mode: RepeatModeSetting,
}

impl Default for PlaybackSettings {
    fn default() -> Self {
        Self {
            shuffle: false,
            repeat_mode: RepeatModeSetting::All,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RepeatModeSetting {
    #[serde(alias = "no-loop", alias = "no_loop", alias = "none")]
    Off,
    #[serde(alias = "repeat-one", alias = "loop-one", alias = "loop_one")]
    One,
    #[serde(alias = "repeat-all", alias = "loop-all", alias = "loop_all")]
    All,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct VoteSettings {
    /// JSON-lines file votes are appended to.
    pub store_path: PathBuf,
    /// Refuse further votes once one has been recorded.
    pub single_submission: bool,
}

impl Default for VoteSettings {
    fn default() -> Self {
        Self {
            store_path: PathBuf::from("data").join("votes.jsonl"),
            single_submission: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LayoutSettings {
    /// Seed for the decorative placement generator.
    pub seed: u32,
    /// Number of background hearts laid out when the request does not say.
    pub count: usize,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self { seed: 42, count: 22 }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlanSettings {
    /// Penalties for the date-plan word game; one is drawn per request.
    pub penalties: Vec<String>,
}

impl Default for PlanSettings {
    fn default() -> Self {
        Self {
            penalties: vec![
                "🤭 Шийтгэл — “Чи хамгийн хөөрхөн нь” гэж 3 удаа чангаар хэлэх".into(),
                "🎤 Шийтгэл — “Би дэлхийн хамгийн азтай хүн!” гэж чангаар хэлэх".into(),
                "🍫 Шийтгэл — амттан авч өгөх".into(),
                "💞 Шийтгэл — нөгөөдөө нэг өхөөрдөм нэр өгч, түүгээр нь 5 минут дуудах".into(),
                "🫰 Шийтгэл — хамтдаа “heart pose” хийж зураг авахуулах".into(),
                "😍 Шийтгэл — 10 секундийн турш бие биенээ харан инээмсэглэх".into(),
                "🫶 Шийтгэл — гараа зүрхний хэлбэртэйгээр нийлүүлж 5 секунд барих".into(),
                "😝 Шийтгэл — 10 секундийн турш хамгийн тэнэг царай гаргах".into(),
                "🐸 Шийтгэл — “Мэлхий шиг дуугар” гэж 5 секунд дуугарах".into(),
                "👀 Шийтгэл — Нөгөө хүнийхээ нүд рүү 10 секунд инээмсэглэн хар".into(),
                "🌸 Шийтгэл — өөрийн тухай 1 өхөөрдөм зүйл хэлэх".into(),
                "🎈 Шийтгэл — 5 секундийн турш хийсч буй бөмбөлөг шиг хөдөл".into(),
                "🤍 Шийтгэл — нөгөөдөө тэврэлт өгөх".into(),
                "📸 Шийтгэл — селфи авахдаа нэгэн ижил хачин царай гаргах".into(),
            ],
        }
    }
}
