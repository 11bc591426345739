//! Pipeline configuration and the built-in icon-set registry

use regex::Regex;

use crate::error::PipelineError;

/// Default canonical viewbox size icons are rescaled to
pub const DEFAULT_CANONICAL_SIZE: f64 = 20.0;

/// Where to fetch an icon set and how to name its icons
#[derive(Clone, Debug)]
pub struct IconSet {
    /// Registry name, used in logs and default headers
    pub name: String,
    /// URL of the zip archive containing the set
    pub archive_url: String,
    /// Pattern selecting icon entries inside the archive
    pub entry_pattern: Regex,
    /// Prefix prepended to every derived identifier
    pub prefix: String,
}

impl IconSet {
    /// Feather icons, `master` branch
    pub fn feather() -> Self {
        Self {
            name: "feather".to_string(),
            archive_url: "https://github.com/feathericons/feather/archive/refs/heads/master.zip"
                .to_string(),
            entry_pattern: Regex::new(r"feather-master/icons/[0-9a-zA-Z_-]+\.svg$")
                .expect("builtin pattern is valid"),
            prefix: "feather".to_string(),
        }
    }

    /// Heroicons outline variants, `master` branch
    pub fn hero() -> Self {
        Self {
            name: "hero".to_string(),
            archive_url: "https://github.com/tailwindlabs/heroicons/archive/refs/heads/master.zip"
                .to_string(),
            entry_pattern: Regex::new(r"heroicons-master/src/outline/[0-9a-zA-Z_-]+\.svg$")
                .expect("builtin pattern is valid"),
            prefix: "hero".to_string(),
        }
    }

    /// Look up a built-in set by registry name
    pub fn named(name: &str) -> Option<Self> {
        match name {
            "feather" => Some(Self::feather()),
            "hero" => Some(Self::hero()),
            _ => None,
        }
    }

    /// Names of all built-in sets
    pub fn builtin_names() -> &'static [&'static str] {
        &["feather", "hero"]
    }

    /// Define a set outside the built-in registry
    pub fn custom(
        name: impl Into<String>,
        archive_url: impl Into<String>,
        entry_pattern: &str,
        prefix: impl Into<String>,
    ) -> Result<Self, PipelineError> {
        Ok(Self {
            name: name.into(),
            archive_url: archive_url.into(),
            entry_pattern: Regex::new(entry_pattern)?,
            prefix: prefix.into(),
        })
    }
}

/// How the pipeline reacts to a single icon failing
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Abort the whole run on the first failure
    #[default]
    FailFast,
    /// Skip failing icons and report them after the run
    SkipFailed,
}

/// Output artifact flavor
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EmitStyle {
    /// `export const name =\n  '...';` blocks
    #[default]
    TypeScript,
    /// `pub const NAME: &str = "...";` blocks
    Rust,
}

/// Configuration for a pipeline run
#[derive(Clone, Debug)]
pub struct PipelineConfig {
    /// Icon set to ingest
    pub set: IconSet,
    /// Target viewbox extent every icon is rescaled to
    pub canonical_size: f64,
    /// Whether a failing icon aborts the run or is skipped
    pub failure_policy: FailurePolicy,
    /// Output artifact flavor
    pub emit_style: EmitStyle,
    /// Header comment written at the top of the artifact
    pub header: Option<String>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            set: IconSet::feather(),
            canonical_size: DEFAULT_CANONICAL_SIZE,
            failure_policy: FailurePolicy::FailFast,
            emit_style: EmitStyle::TypeScript,
            header: None,
        }
    }
}

impl PipelineConfig {
    /// Configuration for `set` with all other options at their defaults
    pub fn new(set: IconSet) -> Self {
        Self {
            set,
            ..Default::default()
        }
    }

    /// Set the canonical viewbox size
    pub fn with_canonical_size(mut self, size: f64) -> Self {
        self.canonical_size = size;
        self
    }

    /// Set the failure policy
    pub fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }

    /// Set the output artifact flavor
    pub fn with_emit_style(mut self, style: EmitStyle) -> Self {
        self.emit_style = style;
        self
    }

    /// Set the artifact header comment
    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_lookup() {
        assert!(IconSet::named("feather").is_some());
        assert!(IconSet::named("hero").is_some());
        assert!(IconSet::named("lucide").is_none());
    }

    #[test]
    fn test_builtin_patterns_select_icon_paths() {
        let feather = IconSet::feather();
        assert!(feather.entry_pattern.is_match("feather-master/icons/video-off.svg"));
        assert!(!feather.entry_pattern.is_match("feather-master/icons/nested/x.svg"));
        assert!(!feather.entry_pattern.is_match("feather-master/README.md"));

        let hero = IconSet::hero();
        assert!(hero.entry_pattern.is_match("heroicons-master/src/outline/chevron-double-up.svg"));
        assert!(!hero.entry_pattern.is_match("heroicons-master/src/solid/chevron-double-up.svg"));
    }

    #[test]
    fn test_custom_set_rejects_bad_pattern() {
        assert!(IconSet::custom("x", "https://example.com/x.zip", "(unclosed", "x").is_err());
    }

    #[test]
    fn test_default_config() {
        let config = PipelineConfig::default();
        assert_eq!(config.set.name, "feather");
        assert_eq!(config.canonical_size, 20.0);
        assert_eq!(config.failure_policy, FailurePolicy::FailFast);
        assert_eq!(config.emit_style, EmitStyle::TypeScript);
        assert!(config.header.is_none());
    }

    #[test]
    fn test_builders() {
        let config = PipelineConfig::new(IconSet::hero())
            .with_canonical_size(24.0)
            .with_failure_policy(FailurePolicy::SkipFailed)
            .with_emit_style(EmitStyle::Rust)
            .with_header("// generated");

        assert_eq!(config.set.prefix, "hero");
        assert_eq!(config.canonical_size, 24.0);
        assert_eq!(config.failure_policy, FailurePolicy::SkipFailed);
        assert_eq!(config.emit_style, EmitStyle::Rust);
        assert_eq!(config.header.as_deref(), Some("// generated"));
    }
}
