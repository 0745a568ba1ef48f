use std::path::PathBuf;

/// Which clock the `time` column is rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeBasis {
    /// Time zone of the running process
    #[default]
    Local,
    Utc,
    /// The event's own `utc_offset`, falling back to UTC when it is invalid
    EventOffset,
}

#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// API root, without a trailing group segment
    pub base_url: String,
    /// Group URL slug
    pub group: String,
    /// Event status filter passed as `?status=`
    pub status: String,
    /// CSV destination, created or truncated on every run
    pub output_path: PathBuf,
    pub time_basis: TimeBasis,
}

fn default_base_url() -> String {
    "https://api.meetup.com".to_string()
}

fn default_group() -> String {
    "SciFiMuc".to_string()
}

fn default_status() -> String {
    "past".to_string()
}

fn default_output_path() -> PathBuf {
    PathBuf::from("test.csv")
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            group: default_group(),
            status: default_status(),
            output_path: default_output_path(),
            time_basis: TimeBasis::default(),
        }
    }
}

impl ExportConfig {
    /// Same defaults, pointed at another API root and output file.
    pub fn with_target(base_url: impl Into<String>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            base_url: base_url.into(),
            output_path: output_path.into(),
            ..Self::default()
        }
    }
}
