use serde::{Deserialize, Serialize};

/// Colors used for base styling and highlights.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    #[serde(default = "default_node_color")]
    pub node: String,
    #[serde(default = "default_generated_color")]
    pub generated_node: String,
    #[serde(default = "default_highlight_color")]
    pub highlight_node: String,
    #[serde(default = "default_edge_color")]
    pub default_edge: String,
    #[serde(default = "default_highlight_color")]
    pub path_edge: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            node: default_node_color(),
            generated_node: default_generated_color(),
            highlight_node: default_highlight_color(),
            default_edge: default_edge_color(),
            path_edge: default_highlight_color(),
        }
    }
}

fn default_node_color() -> String { "#00ff00".to_string() }
fn default_generated_color() -> String { "#ff9999".to_string() }
fn default_highlight_color() -> String { "#ff0000".to_string() }
fn default_edge_color() -> String { "#848484".to_string() }

/// Paper-count thresholds that decide node sizes at ingestion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleConfig {
    #[serde(default = "default_high_factor")]
    pub high_factor: f64,
    #[serde(default = "default_low_factor")]
    pub low_factor: f64,
    #[serde(default = "default_large")]
    pub large_size: u32,
    #[serde(default = "default_medium")]
    pub medium_size: u32,
    #[serde(default = "default_small")]
    pub small_size: u32,
    /// Ids starting with this prefix are placeholder authors.
    #[serde(default = "default_generated_prefix")]
    pub generated_prefix: String,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            high_factor: default_high_factor(),
            low_factor: default_low_factor(),
            large_size: default_large(),
            medium_size: default_medium(),
            small_size: default_small(),
            generated_prefix: default_generated_prefix(),
        }
    }
}

const fn default_high_factor() -> f64 { 1.2 }
const fn default_low_factor() -> f64 { 0.8 }
const fn default_large() -> u32 { 60 }
const fn default_medium() -> u32 { 40 }
const fn default_small() -> u32 { 20 }
fn default_generated_prefix() -> String { "generated".to_string() }

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CameraConfig {
    #[serde(default = "default_focus_scale")]
    pub focus_scale: f64,
    #[serde(default = "default_focus_ms")]
    pub focus_duration_ms: u64,
    #[serde(default = "default_fit_ms")]
    pub fit_duration_ms: u64,
    #[serde(default = "default_easing")]
    pub easing: String,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            focus_scale: default_focus_scale(),
            focus_duration_ms: default_focus_ms(),
            fit_duration_ms: default_fit_ms(),
            easing: default_easing(),
        }
    }
}

const fn default_focus_scale() -> f64 { 1.5 }
const fn default_focus_ms() -> u64 { 1000 }
const fn default_fit_ms() -> u64 { 1500 }
fn default_easing() -> String { "easeInOutQuad".to_string() }

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Column width the collaborator tree is centered in.
    #[serde(default = "default_tree_width")]
    pub tree_width: usize,
    /// Show every intermediate distance table, not just the final one.
    #[serde(default = "default_true")]
    pub live_table: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            tree_width: default_tree_width(),
            live_table: true,
        }
    }
}

const fn default_tree_width() -> usize { 50 }
const fn default_true() -> bool { true }

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LimitsConfig {
    /// Refuse the longest path search when the source's component is larger.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longest_path_max_nodes: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub palette: Palette,
    #[serde(default)]
    pub style: StyleConfig,
    #[serde(default)]
    pub camera: CameraConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub limits: LimitsConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            palette: Palette::default(),
            style: StyleConfig::default(),
            camera: CameraConfig::default(),
            display: DisplayConfig::default(),
            limits: LimitsConfig::default(),
        }
    }
}

fn default_log_level() -> String { "warn".to_string() }
