/// Default git remote for every push.
pub const DEFAULT_REMOTE: &str = "origin";

/// Process-wide options, built once at startup and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunContext {
    /// Remote that branches and tags are pushed to
    pub remote: String,

    /// Only process this major line when set
    pub major_filter: Option<String>,

    /// Ask before every external command
    pub confirm_all: bool,

    /// Print commands without executing them
    pub dry_run: bool,
}

impl RunContext {
    pub fn new(remote: Option<String>, major_filter: Option<String>, confirm_all: bool) -> Self {
        RunContext {
            remote: remote.unwrap_or_else(|| DEFAULT_REMOTE.to_string()),
            major_filter: major_filter.filter(|major| !major.is_empty()),
            confirm_all,
            dry_run: false,
        }
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Whether the major line `major` passes the `--major` filter.
    pub fn selects(&self, major: &str) -> bool {
        match &self.major_filter {
            Some(filter) => filter == major,
            None => true,
        }
    }
}

impl Default for RunContext {
    fn default() -> Self {
        RunContext::new(None, None, false)
    }
}
