use anyhow::Context;
use bestpaper_compiler_html::CompileOptions;
use bestpaper_ranking::{RankOptions, DEFAULT_MIN_SCORE};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_NAME: &str = "bestpaper.config.json";

/// Best paper page configuration file format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// Page `<title>`; `{conference_list}` expands to the conference names
    pub page_title: String,

    /// Meta description
    pub description: String,

    pub heading: String,

    /// Paragraphs above the awards table
    pub intro: Vec<String>,

    /// Raw HTML lines at the end of the page
    pub footer: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,

    /// Institutions scoring below this are left out of the ranking
    pub min_score: f64,

    /// Extension of listing files picked up from input directories
    pub input_extension: String,

    /// Pretty print the generated HTML
    pub pretty: bool,
}

impl Config {
    /// Load config from `explicit`, or from the default file in `cwd`
    pub fn load(cwd: &Path, explicit: Option<&Path>) -> anyhow::Result<Self> {
        let config_path = Self::path(cwd, explicit);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)
                .with_context(|| format!("Cannot read {}", config_path.display()))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Invalid config {}", config_path.display()))?;
            Ok(config)
        } else if explicit.is_some() {
            Err(anyhow::anyhow!("Config file does not exist: {}", config_path.display()))
        } else {
            // Return default config if none exists
            Ok(Config::default())
        }
    }

    pub fn path(cwd: &Path, explicit: Option<&Path>) -> PathBuf {
        match explicit {
            Some(path) => cwd.join(path),
            None => cwd.join(DEFAULT_CONFIG_NAME),
        }
    }

    pub fn compile_options(&self) -> CompileOptions {
        CompileOptions {
            title: self.page_title.clone(),
            description: self.description.clone(),
            heading: self.heading.clone(),
            intro: self.intro.clone(),
            footer: self.footer.clone(),
            last_updated: self.last_updated.clone(),
            pretty: self.pretty,
            ..CompileOptions::default()
        }
    }

    /// Ranking options, with `min_score` overriding the configured threshold
    pub fn rank_options(&self, min_score: Option<f64>) -> RankOptions {
        RankOptions {
            min_score: min_score.unwrap_or(self.min_score),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        let page = CompileOptions::default();
        Self {
            page_title: page.title,
            description: page.description,
            heading: page.heading,
            intro: page.intro,
            footer: page.footer,
            last_updated: page.last_updated,
            min_score: DEFAULT_MIN_SCORE,
            input_extension: "txt".to_string(),
            pretty: page.pretty,
        }
    }
}
