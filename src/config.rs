use clap::parser::ValueSource;
use clap::{ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Widget tunables. The defaults are the widget's fixed behavior (start at
/// 5, 1500 ms burst gap, 2000 ms badge display, +1/+5/+10 and -1/-2/-3
/// stacks); the flags and the JSON overrides file only exist so none of
/// that is baked into the binary.
#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    #[arg(long, default_value_t = 5)]
    pub start_score: u32,

    #[arg(long, default_value_t = 1500)]
    pub burst_gap_ms: u64,

    #[arg(long, default_value_t = 2000)]
    pub subtotal_visible_ms: u64,

    #[arg(long, default_value = "1,5,10")]
    pub plus_steps: String,

    #[arg(long, default_value = "1,2,3")]
    pub minus_steps: String,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            start_score: 5,
            burst_gap_ms: 1500,
            subtotal_visible_ms: 2000,
            plus_steps: "1,5,10".to_string(),
            minus_steps: "1,2,3".to_string(),
        }
    }
}

impl BoardConfig {
    pub fn get_plus_steps(&self) -> Vec<u32> {
        parse_u32_list(&self.plus_steps, "plus_steps")
    }

    pub fn get_minus_steps(&self) -> Vec<u32> {
        parse_u32_list(&self.minus_steps, "minus_steps")
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Self {
        let content = fs::read_to_string(path)
            .unwrap_or_else(|e| panic!("❌ Failed to read config file: {}", e));

        serde_json::from_str(&content)
            .unwrap_or_else(|e| panic!("❌ Failed to parse config JSON: {}", e))
    }

    /// Overlays fields the user set explicitly on the command line onto
    /// `self` (typically file-loaded values). Defaults do not count as
    /// explicit, so a flag left alone keeps the file's value.
    pub fn merge_from_cli(&mut self, cli: &BoardConfig, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($field:ident, $arg_name:expr) => {
                if matches.value_source($arg_name) == Some(ValueSource::CommandLine) {
                    self.$field = cli.$field.clone();
                }
            };
        }

        update_if_present!(start_score, "start_score");
        update_if_present!(burst_gap_ms, "burst_gap_ms");
        update_if_present!(subtotal_visible_ms, "subtotal_visible_ms");
        update_if_present!(plus_steps, "plus_steps");
        update_if_present!(minus_steps, "minus_steps");
    }
}

fn parse_u32_list(s: &str, name: &str) -> Vec<u32> {
    s.split(',')
        .map(|p| {
            p.trim()
                .parse()
                .unwrap_or_else(|_| panic!("Invalid number in {}", name))
        })
        .collect()
}
