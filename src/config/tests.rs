use super::load::{default_config_path, resolve_config_path};
use super::schema::*;
use std::sync::{Mutex, OnceLock};

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

fn env_lock() -> std::sync::MutexGuard<'static, ()> {
    ENV_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|e| e.into_inner())
}

struct EnvGuard {
    key: &'static str,
    old: Option<std::ffi::OsString>,
}

impl EnvGuard {
    fn set(key: &'static str, val: &str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::set_var(key, val);
        }
        Self { key, old }
    }

    fn remove(key: &'static str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::remove_var(key);
        }
        Self { key, old }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match self.old.take() {
            Some(v) => unsafe {
                std::env::set_var(self.key, v);
            },
            None => unsafe {
                std::env::remove_var(self.key);
            },
        }
    }
}

#[test]
fn resolve_config_path_prefers_giftbox_config_path() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("GIFTBOX_CONFIG_PATH", "/tmp/giftbox-test-config.toml");
    assert_eq!(
        resolve_config_path().unwrap(),
        std::path::PathBuf::from("/tmp/giftbox-test-config.toml")
    );
}

#[test]
fn default_config_path_prefers_xdg_config_home() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("XDG_CONFIG_HOME", "/tmp/xdg-config-home");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-should-not-win");

    let p = default_config_path().unwrap();
    assert_eq!(
        p,
        std::path::PathBuf::from("/tmp/xdg-config-home")
            .join("giftbox")
            .join("config.toml")
    );
}

#[test]
fn default_config_path_falls_back_to_home_dot_config() {
    let _lock = env_lock();
    let _g1 = EnvGuard::remove("XDG_CONFIG_HOME");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-dir");

    let p = default_config_path().unwrap();
    assert_eq!(
        p,
        std::path::PathBuf::from("/tmp/home-dir")
            .join(".config")
            .join("giftbox")
            .join("config.toml")
    );
}

#[test]
fn defaults_match_the_shipped_site() {
    let s = Settings::default();
    assert_eq!(s.library.public_prefix, "musics");
    assert_eq!(s.library.extensions, vec!["mp3", "wav", "m4a", "ogg", "flac"]);
    assert!(s.library.include_hidden);
    assert!(!s.playback.shuffle);
    assert_eq!(s.playback.repeat_mode, RepeatModeSetting::All);
    assert_eq!(s.layout.seed, 42);
    assert_eq!(s.layout.count, 22);
    assert!(s.votes.single_submission);
    assert_eq!(s.plan.penalties.len(), 14);
    assert!(s.plan.penalties.iter().all(|p| p.contains("Шийтгэл")));
    assert!(s.validate().is_ok());
}

#[test]
fn partial_toml_keeps_defaults_for_missing_sections() {
    let s: Settings = toml::from_str(
        r#"
[playback]
repeat_mode = "off"

[layout]
seed = 7
"#,
    )
    .unwrap();

    assert_eq!(s.playback.repeat_mode, RepeatModeSetting::Off);
    assert!(!s.playback.shuffle);
    assert_eq!(s.layout.seed, 7);
    assert_eq!(s.layout.count, 22);
    assert_eq!(s.server.bind, "127.0.0.1:3000");
}

#[test]
fn validate_rejects_bad_bind_address_and_empty_extensions() {
    let mut s = Settings::default();
    s.server.bind = "not an address".into();
    assert!(s.validate().is_err());

    let mut s = Settings::default();
    s.library.extensions = vec!["  ".into()];
    assert!(s.validate().is_err());

    let mut s = Settings::default();
    s.library.public_prefix = "/".into();
    assert!(s.validate().is_err());
}

#[test]
fn settings_load_from_config_file_and_parse_repeat_mode_aliases() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[server]
bind = "0.0.0.0:8080"

[playback]
shuffle = true
repeat_mode = "repeat-one"

[library]
dir = "/srv/gift/musics"
public_prefix = "songs"
extensions = ["mp3"]
include_hidden = false

[votes]
store_path = "/tmp/gift-votes.jsonl"
single_submission = false

[plan]
penalties = ["sing a song"]
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("GIFTBOX_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::remove("GIFTBOX__SERVER__BIND");

    let s = Settings::load().unwrap();
    assert_eq!(s.server.bind, "0.0.0.0:8080");
    assert!(s.playback.shuffle);
    assert_eq!(s.playback.repeat_mode, RepeatModeSetting::One);
    assert_eq!(s.library.dir, std::path::PathBuf::from("/srv/gift/musics"));
    assert_eq!(s.library.public_prefix, "songs");
    assert_eq!(s.library.extensions, vec!["mp3".to_string()]);
    assert!(!s.library.include_hidden);
    assert_eq!(
        s.votes.store_path,
        std::path::PathBuf::from("/tmp/gift-votes.jsonl")
    );
    assert!(!s.votes.single_submission);
    assert_eq!(s.plan.penalties, vec!["sing a song".to_string()]);
}

#[test]
fn settings_env_overrides_config_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[server]
bind = "127.0.0.1:4000"
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("GIFTBOX_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::set("GIFTBOX__SERVER__BIND", "127.0.0.1:5000");

    let s = Settings::load().unwrap();
    assert_eq!(s.server.bind, "127.0.0.1:5000");
}
