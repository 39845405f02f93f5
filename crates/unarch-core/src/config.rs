//! Extraction configuration.

/// Program names for the external collaborators.
///
/// Each value is looked up on `PATH` unless it already contains a path
/// separator. Only the program is configurable; arguments and stdio
/// routing are fixed by the strategy that runs it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalTools {
    /// 7z-compatible archiver used for 7z and rar archives.
    pub archiver: String,

    /// Gzip decompressor (`-k -c`).
    pub gunzip: String,

    /// Bzip2 decompressor (`-k -c`).
    pub bunzip2: String,

    /// Xz decompressor (`-k -c`).
    pub unxz: String,

    /// Zstd decompressor (`-k -c`).
    pub unzstd: String,
}

impl Default for ExternalTools {
    fn default() -> Self {
        Self {
            archiver: "7z".to_string(),
            gunzip: "gunzip".to_string(),
            bunzip2: "bunzip2".to_string(),
            unxz: "unxz".to_string(),
            unzstd: "unzstd".to_string(),
        }
    }
}

/// Options controlling a single extraction run.
///
/// # Examples
///
/// ```
/// use unarch_core::ExtractionConfig;
///
/// let config = ExtractionConfig::default()
///     .with_preserve_permissions(false)
///     .with_archiver("/opt/7zip/7zz");
/// assert_eq!(config.tools.archiver, "/opt/7zip/7zz");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionConfig {
    /// Apply permission modes stored in zip entries.
    pub preserve_permissions: bool,

    /// Send the archiver's stdout to our stderr instead of our stdout.
    ///
    /// Set this when stdout carries machine-readable output.
    pub tool_stdout_to_stderr: bool,

    /// External programs used by the subprocess strategies.
    pub tools: ExternalTools,
}

impl Default for ExtractionConfig {
    /// Preserves permissions and uses the standard tool names.
    fn default() -> Self {
        Self {
            preserve_permissions: true,
            tool_stdout_to_stderr: false,
            tools: ExternalTools::default(),
        }
    }
}

impl ExtractionConfig {
    /// Sets whether stored permission modes are applied.
    #[must_use]
    pub fn with_preserve_permissions(mut self, preserve: bool) -> Self {
        self.preserve_permissions = preserve;
        self
    }

    /// Sets whether the archiver's stdout is redirected to stderr.
    #[must_use]
    pub fn with_tool_stdout_to_stderr(mut self, redirect: bool) -> Self {
        self.tool_stdout_to_stderr = redirect;
        self
    }

    /// Replaces the 7z-compatible archiver program.
    #[must_use]
    pub fn with_archiver(mut self, program: impl Into<String>) -> Self {
        self.tools.archiver = program.into();
        self
    }

    /// Replaces the whole external tool set.
    #[must_use]
    pub fn with_tools(mut self, tools: ExternalTools) -> Self {
        self.tools = tools;
        self
    }
}
