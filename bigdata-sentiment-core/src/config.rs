use {
    std::{fs::read_to_string, path::Path, str::FromStr},
    anyhow::{Context, Result},
    serde::Deserialize,
    crate::verdict::VerdictMode,
};

#[derive(Deserialize, Debug, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub keywords: KeywordsConfig,
    pub report: Option<ReportConfig>,
    pub input: Option<InputConfig>,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct KeywordsConfig {
    pub positive: Vec<String>,
    pub negative: Vec<String>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct ReportConfig {
    #[serde(default)]
    pub verdict: VerdictMode,
    #[serde(default = "default_chart")]
    pub chart: bool,
    #[serde(default)]
    pub format: ReportFormat,
}

#[derive(Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct InputConfig {
    #[serde(default)]
    pub format: InputFormat,
    #[serde(default = "default_csv_column")]
    pub csv_column: String,
}

#[derive(Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum InputFormat {
    #[default]
    Lines,
    Csv,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub json: bool,
}

fn default_chart() -> bool {
    true
}

fn default_csv_column() -> String {
    "text".to_owned()
}

fn default_log_level() -> String {
    "info".to_owned()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            keywords: KeywordsConfig::default(),
            report: None,
            input: None,
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for KeywordsConfig {
    fn default() -> Self {
        Self {
            positive: ["happy", "excited", "thrilled", "love"].map(str::to_owned).to_vec(),
            negative: ["sad", "depressed", "angry", "upset"].map(str::to_owned).to_vec(),
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            verdict: VerdictMode::default(),
            chart: default_chart(),
            format: ReportFormat::default(),
        }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            format: InputFormat::default(),
            csv_column: default_csv_column(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

impl Config {
    /// Reads `./config.toml`, then `/config/config.toml`. The error is returned rather than
    /// logged because logging is configured from the result.
    pub fn try_load() -> Result<Self, String> {
        read_to_string("./config.toml")
            .or_else(|_| read_to_string("/config/config.toml"))
            .map_err(|err| err.to_string())
            .and_then(|v| toml::from_str(&v).map_err(|err| err.to_string()))
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }

    pub fn report(&self) -> ReportConfig {
        self.report.as_ref().cloned().unwrap_or_default()
    }

    pub fn input(&self) -> InputConfig {
        self.input.as_ref().cloned().unwrap_or_default()
    }
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Ok(match value.to_lowercase().as_str() {
            "text" => Self::Text,
            "json" => Self::Json,
            other => return Err(format!("unexpected report format: {}", other)),
        })
    }
}

impl FromStr for InputFormat {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Ok(match value.to_lowercase().as_str() {
            "lines" => Self::Lines,
            "csv" => Self::Csv,
            other => return Err(format!("unexpected input format: {}", other)),
        })
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        std::io::Write,
    };

    #[test]
    fn empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.report().verdict, VerdictMode::Pairwise);
        assert!(config.report().chart);
        assert_eq!(config.input().csv_column, "text");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn partial_sections_keep_field_defaults() {
        let config: Config = toml::from_str(r#"
[keywords]
positive = ["great"]
negative = ["awful", "bad"]

[report]
verdict = "dominant"

[input]
format = "csv"

[logging]
json = true
"#).unwrap();

        assert_eq!(config.keywords.positive, vec!["great"]);
        assert_eq!(config.keywords.negative, vec!["awful", "bad"]);
        assert_eq!(config.report().verdict, VerdictMode::Dominant);
        assert!(config.report().chart);
        assert_eq!(config.report().format, ReportFormat::Text);
        assert_eq!(config.input().format, InputFormat::Csv);
        assert_eq!(config.input().csv_column, "text");
        assert!(config.logging.json);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn load_from_reads_explicit_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[report]\nchart = false\nformat = \"json\"").unwrap();

        let config = Config::load_from(file.path()).unwrap();

        assert!(!config.report().chart);
        assert_eq!(config.report().format, ReportFormat::Json);
    }

    #[test]
    fn load_from_reports_parse_errors() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[report]\nverdict = \"loudest\"").unwrap();

        assert!(Config::load_from(file.path()).is_err());
        assert!(Config::load_from(Path::new("/definitely/not/here.toml")).is_err());
    }

    #[test]
    fn formats_parse_from_cli_values() {
        assert_eq!("JSON".parse::<ReportFormat>(), Ok(ReportFormat::Json));
        assert_eq!("csv".parse::<InputFormat>(), Ok(InputFormat::Csv));
        assert!("xml".parse::<InputFormat>().is_err());
    }
}
