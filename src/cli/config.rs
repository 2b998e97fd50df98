use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

// ============================================================================
// CLI Argument Parsing (clap derive)
// ============================================================================

#[derive(Parser, Debug)]
#[command(
    name = "menu-mirror",
    version,
    about = "Mirror, search and trigger an application's menu bar"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to config file (default: menu-mirror.yaml in current dir)
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Path to the menu snapshot file
    #[arg(long, global = true)]
    pub snapshot: Option<String>,

    /// Target process id (overrides the snapshot's pinned pid)
    #[arg(long, global = true)]
    pub pid: Option<i32>,

    /// Trace log path (JSONL); tracing is off unless set here or in config
    #[arg(long, global = true)]
    pub trace: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Mirror the menu bar and print the tree
    Show {
        /// Output format: console or json
        #[arg(long)]
        format: Option<String>,
    },

    /// Search all leaf items by keyword
    Search {
        /// Case-insensitive keyword matched against leaf titles
        #[arg(long)]
        keyword: String,
    },

    /// Trigger a leaf item by its path label, e.g. "File→Open"
    Trigger {
        /// Path label of the target item
        #[arg(long)]
        path: String,
    },
}

// ============================================================================
// Config File Model (optional YAML)
// ============================================================================

/// Optional YAML config file: `menu-mirror.yaml`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub snapshot: Option<String>,

    #[serde(default)]
    pub pid: Option<i32>,

    #[serde(default)]
    pub trace: TraceConfig,

    #[serde(default)]
    pub show: ShowConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TraceConfig {
    pub path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShowConfig {
    #[serde(default = "default_console")]
    pub format: String,
}

impl Default for ShowConfig {
    fn default() -> Self {
        Self {
            format: "console".to_string(),
        }
    }
}

// Serde default helpers
fn default_console() -> String {
    "console".to_string()
}

// ============================================================================
// Config File Loading
// ============================================================================

/// Load config from a YAML file. Returns defaults if file is missing or malformed.
pub fn load_config(path: Option<&str>) -> AppConfig {
    let config_path = path.unwrap_or("menu-mirror.yaml");
    match std::fs::read_to_string(config_path) {
        Ok(content) => serde_yaml::from_str(&content).unwrap_or_default(),
        Err(_) => AppConfig::default(),
    }
}
