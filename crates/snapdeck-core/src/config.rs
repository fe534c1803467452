use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::snap::gesture::{
    COMMIT_THRESHOLD, KEY_STEP, SMALL_MOTION_BOOST, SMALL_MOTION_CUTOFF, SWIPE_AMPLIFICATION,
    SWIPE_MIN_DISTANCE,
};
use crate::snap::{GESTURE_COOLDOWN_MS, JUMP_COOLDOWN_MS};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub gesture: GestureConfig,
    #[serde(default)]
    pub keymap: KeymapConfig,
    #[serde(default)]
    pub content: ContentConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Data directory path (log file lives here)
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick rate in milliseconds while idle
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Apply section changes instantly, without slide animation or twinkling
    #[serde(default)]
    pub reduced_motion: bool,
    /// Show section names next to the navigation dots
    #[serde(default = "default_true")]
    pub show_nav_labels: bool,
    /// Draw the starfield behind the hero section
    #[serde(default = "default_true")]
    pub starfield: bool,
    /// Wheel delta reported for one terminal scroll notch
    #[serde(default = "default_wheel_notch_delta")]
    pub wheel_notch_delta: f64,
    /// Gesture units per terminal row when a mouse drag is treated as a swipe
    #[serde(default = "default_drag_row_units")]
    pub drag_row_units: f64,
    /// Section transition animation
    #[serde(default)]
    pub transition: TransitionConfig,
    /// Theme configuration
    #[serde(default)]
    pub theme: ThemeConfig,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            reduced_motion: false,
            show_nav_labels: default_true(),
            starfield: default_true(),
            wheel_notch_delta: default_wheel_notch_delta(),
            drag_row_units: default_drag_row_units(),
            transition: TransitionConfig::default(),
            theme: ThemeConfig::default(),
        }
    }
}

/// Easing curve used by the section slide animation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EasingType {
    None,
    Linear,
    #[default]
    Cubic,
    Quintic,
    #[serde(alias = "ease-out", alias = "ease_out")]
    EaseOut,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransitionConfig {
    /// Slide animation duration; 0 disables the animation
    #[serde(default = "default_transition_duration")]
    pub duration_ms: u64,
    /// Easing curve
    #[serde(default)]
    pub easing: EasingType,
    /// Frame rate while an animation or pending gesture is in flight
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u32,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            duration_ms: default_transition_duration(),
            easing: EasingType::default(),
            animation_fps: default_animation_fps(),
        }
    }
}

/// Theme selection: built-in palette name plus an optional accent override
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    #[serde(default = "default_theme_name")]
    pub name: String,
    /// Hex color, e.g. "#ff8800"
    #[serde(default)]
    pub accent: Option<String>,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            name: default_theme_name(),
            accent: None,
        }
    }
}

/// Thresholds and cooldowns of the section-snap controller.
///
/// The defaults are the tuned values every build ships with; overriding them
/// is meant for experimenting with input devices, not for regular use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GestureConfig {
    /// Accumulated magnitude that commits a one-section step
    #[serde(default = "default_commit_threshold")]
    pub commit_threshold: f64,
    /// Wheel deltas below this magnitude are boosted
    #[serde(default = "default_small_motion_cutoff")]
    pub small_motion_cutoff: f64,
    /// Multiplier applied to small wheel deltas
    #[serde(default = "default_small_motion_boost")]
    pub small_motion_boost: f64,
    /// Swipes must travel further than this to count
    #[serde(default = "default_swipe_min_distance")]
    pub swipe_min_distance: f64,
    /// Multiplier applied to accepted swipes
    #[serde(default = "default_swipe_amplification")]
    pub swipe_amplification: f64,
    /// Synthetic delta injected by arrow and page keys
    #[serde(default = "default_key_step")]
    pub key_step: f64,
    /// Lock after a gesture-driven step
    #[serde(default = "default_gesture_cooldown")]
    pub gesture_cooldown_ms: u64,
    /// Lock after an explicit jump
    #[serde(default = "default_jump_cooldown")]
    pub jump_cooldown_ms: u64,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            commit_threshold: default_commit_threshold(),
            small_motion_cutoff: default_small_motion_cutoff(),
            small_motion_boost: default_small_motion_boost(),
            swipe_min_distance: default_swipe_min_distance(),
            swipe_amplification: default_swipe_amplification(),
            key_step: default_key_step(),
            gesture_cooldown_ms: default_gesture_cooldown(),
            jump_cooldown_ms: default_jump_cooldown(),
        }
    }
}

impl GestureConfig {
    pub fn gesture_cooldown(&self) -> Duration {
        Duration::from_millis(self.gesture_cooldown_ms)
    }

    pub fn jump_cooldown(&self) -> Duration {
        Duration::from_millis(self.jump_cooldown_ms)
    }

    /// Reject values that would make the controller commit on every event or never
    pub fn validate(&self) -> crate::Result<()> {
        let positive = [
            ("commit_threshold", self.commit_threshold),
            ("small_motion_boost", self.small_motion_boost),
            ("swipe_amplification", self.swipe_amplification),
            ("key_step", self.key_step),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(crate::Error::Config(format!(
                    "gesture.{} must be a positive number, got {}",
                    name, value
                )));
            }
        }
        let cutoffs = [
            ("small_motion_cutoff", self.small_motion_cutoff),
            ("swipe_min_distance", self.swipe_min_distance),
        ];
        for (name, value) in cutoffs {
            if !(value.is_finite() && value >= 0.0) {
                return Err(crate::Error::Config(format!(
                    "gesture.{} must be a non-negative number, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}

/// Keymap configuration using Vim-style notation
/// Format: "j", "k", "<C-j>" (Ctrl+j), "<S-g>" (Shift+g), "<CR>" (Enter), "<Esc>", "<Space>"
///
/// Arrow keys, PageUp/PageDown, Home/End and the digits 1-9 are always bound.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeymapConfig {
    /// Quit the application
    #[serde(default = "default_key_quit")]
    pub quit: String,
    /// Step to the next section
    #[serde(default = "default_key_next_section")]
    pub next_section: String,
    /// Step to the previous section
    #[serde(default = "default_key_prev_section")]
    pub prev_section: String,
    /// Jump to the first section
    #[serde(default = "default_key_first_section")]
    pub first_section: String,
    /// Jump to the last section
    #[serde(default = "default_key_last_section")]
    pub last_section: String,
    /// Open the current section's link in the browser
    #[serde(default = "default_key_open_link")]
    pub open_link: String,
    /// Toggle the help overlay
    #[serde(default = "default_key_help")]
    pub help: String,
}

impl Default for KeymapConfig {
    fn default() -> Self {
        Self {
            quit: default_key_quit(),
            next_section: default_key_next_section(),
            prev_section: default_key_prev_section(),
            first_section: default_key_first_section(),
            last_section: default_key_last_section(),
            open_link: default_key_open_link(),
            help: default_key_help(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContentConfig {
    /// Site content file (TOML or JSON); the built-in site is used when unset
    #[serde(default)]
    pub path: Option<PathBuf>,
}

fn default_key_quit() -> String { "q".to_string() }
fn default_key_next_section() -> String { "j".to_string() }
fn default_key_prev_section() -> String { "k".to_string() }
fn default_key_first_section() -> String { "gg".to_string() }
fn default_key_last_section() -> String { "G".to_string() }
fn default_key_open_link() -> String { "o".to_string() }
fn default_key_help() -> String { "?".to_string() }

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("snapdeck")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_tick_rate() -> u64 {
    100
}

fn default_wheel_notch_delta() -> f64 {
    // two notches commit, a single accidental notch does not
    20.0
}

fn default_drag_row_units() -> f64 {
    10.0
}

fn default_transition_duration() -> u64 {
    // slightly shorter than the gesture cooldown so a slide always settles before the lock lifts
    700
}

fn default_animation_fps() -> u32 {
    60
}

fn default_theme_name() -> String {
    "midnight".to_string()
}

fn default_commit_threshold() -> f64 { COMMIT_THRESHOLD }
fn default_small_motion_cutoff() -> f64 { SMALL_MOTION_CUTOFF }
fn default_small_motion_boost() -> f64 { SMALL_MOTION_BOOST }
fn default_swipe_min_distance() -> f64 { SWIPE_MIN_DISTANCE }
fn default_swipe_amplification() -> f64 { SWIPE_AMPLIFICATION }
fn default_key_step() -> f64 { KEY_STEP }
fn default_gesture_cooldown() -> u64 { GESTURE_COOLDOWN_MS }
fn default_jump_cooldown() -> u64 { JUMP_COOLDOWN_MS }

/// Expand tilde (~) in path to user's home directory
pub fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str() {
        if let Some(stripped) = path_str.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(stripped);
            }
        } else if path_str == "~" {
            if let Some(home) = dirs::home_dir() {
                return home;
            }
        }
    }
    path.to_path_buf()
}

impl AppConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from an explicit path, falling back to defaults when it is missing
    pub fn load_from(path: &Path) -> crate::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> crate::Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| crate::Error::Config(e.to_string()))?;
        config.gesture.validate()?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self, path: &Path) -> crate::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))?;
        std::fs::write(path, content)?;

        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/snapdeck/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("snapdeck")
            .join("config.toml")
    }

    /// Get the data directory (with tilde expansion)
    pub fn data_dir(&self) -> PathBuf {
        expand_tilde(&self.general.data_dir)
    }

    /// Get the log file path used while the TUI owns the terminal
    pub fn log_path(&self) -> PathBuf {
        self.data_dir().join("snapdeck.log")
    }

    /// Content file path, if one is configured (with tilde expansion)
    pub fn content_path(&self) -> Option<PathBuf> {
        self.content.path.as_deref().map(expand_tilde)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gesture_defaults_match_tuned_constants() {
        let gesture = GestureConfig::default();
        assert_eq!(gesture.commit_threshold, 40.0);
        assert_eq!(gesture.small_motion_cutoff, 12.0);
        assert_eq!(gesture.small_motion_boost, 3.0);
        assert_eq!(gesture.swipe_min_distance, 40.0);
        assert_eq!(gesture.swipe_amplification, 2.5);
        assert_eq!(gesture.key_step, 100.0);
        assert_eq!(gesture.gesture_cooldown(), Duration::from_millis(900));
        assert_eq!(gesture.jump_cooldown(), Duration::from_millis(1400));
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = AppConfig::from_toml(
            r#"
            [ui]
            reduced_motion = true

            [ui.transition]
            easing = "linear"
            "#,
        )
        .unwrap();

        assert!(config.ui.reduced_motion);
        assert_eq!(config.ui.transition.easing, EasingType::Linear);
        assert_eq!(config.ui.transition.duration_ms, 700);
        assert_eq!(config.gesture, GestureConfig::default());
        assert_eq!(config.keymap.first_section, "gg");
    }

    #[test]
    fn test_invalid_gesture_config_rejected() {
        let err = AppConfig::from_toml(
            r#"
            [gesture]
            commit_threshold = 0.0
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, crate::Error::Config(_)));
    }

    #[test]
    fn test_non_finite_cutoffs_rejected() {
        let err = AppConfig::from_toml(
            r#"
            [gesture]
            swipe_min_distance = nan
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, crate::Error::Config(_)));

        let gesture = GestureConfig {
            small_motion_cutoff: f64::INFINITY,
            ..GestureConfig::default()
        };
        assert!(gesture.validate().is_err());

        let gesture = GestureConfig {
            swipe_min_distance: -1.0,
            ..GestureConfig::default()
        };
        assert!(gesture.validate().is_err());
        assert!(GestureConfig::default().validate().is_ok());
    }

    #[test]
    fn test_easing_aliases() {
        let config = AppConfig::from_toml(
            r#"
            [ui.transition]
            easing = "ease-out"
            "#,
        )
        .unwrap();
        assert_eq!(config.ui.transition.easing, EasingType::EaseOut);
    }

    #[test]
    fn test_roundtrip_default_config_is_valid_toml() {
        let text = toml::to_string_pretty(&AppConfig::default()).unwrap();
        let parsed = AppConfig::from_toml(&text).unwrap();
        assert_eq!(parsed.ui.theme.name, "midnight");
    }
}
