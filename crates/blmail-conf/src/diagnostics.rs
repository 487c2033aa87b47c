use std::collections::HashMap;

use serde::Deserialize;
use serde::Serialize;

/// Severity a diagnostic code is reported at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticSeverity {
    Off,
    Error,
    Warning,
    Info,
    Hint,
}

/// Per-code severity overrides.
///
/// Codes without an override report at their natural severity: `T1xx`/`H1xx`
/// as errors, `T2xx`/`H2xx` as warnings. Specific codes override prefixes.
///
/// ```toml
/// [diagnostics.severity]
/// H201 = "off"      # inline-style coverage
/// "H2" = "info"     # every other compatibility warning
/// T200 = "error"    # treat typos as fatal in CI
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
pub struct DiagnosticsConfig {
    #[serde(default)]
    pub severity: HashMap<String, DiagnosticSeverity>,
}

impl DiagnosticsConfig {
    /// Resolve the configured severity for `code`, if any.
    ///
    /// Resolution order (most specific wins):
    /// 1. Exact match (e.g., "H201")
    /// 2. Longest prefix match (e.g., "H2" over "H")
    ///
    /// Codes compare case-insensitively.
    ///
    /// # Examples
    /// ```
    /// # use blmail_conf::diagnostics::{DiagnosticsConfig, DiagnosticSeverity};
    /// # use std::collections::HashMap;
    /// let mut severity = HashMap::new();
    /// severity.insert("H".to_string(), DiagnosticSeverity::Warning);
    /// severity.insert("H2".to_string(), DiagnosticSeverity::Off);
    /// severity.insert("H201".to_string(), DiagnosticSeverity::Error);
    ///
    /// let config = DiagnosticsConfig { severity };
    ///
    /// assert_eq!(config.configured("H201"), Some(DiagnosticSeverity::Error));
    /// assert_eq!(config.configured("H202"), Some(DiagnosticSeverity::Off));
    /// assert_eq!(config.configured("H100"), Some(DiagnosticSeverity::Warning));
    /// assert_eq!(config.configured("T100"), None);
    /// ```
    #[must_use]
    pub fn configured(&self, code: &str) -> Option<DiagnosticSeverity> {
        let mut best_match: Option<(usize, DiagnosticSeverity)> = None;

        for (pattern, &severity) in &self.severity {
            if pattern.eq_ignore_ascii_case(code) {
                return Some(severity);
            }

            let is_prefix = code.len() >= pattern.len()
                && code.is_char_boundary(pattern.len())
                && code[..pattern.len()].eq_ignore_ascii_case(pattern);

            if is_prefix && best_match.is_none_or(|(len, _)| pattern.len() > len) {
                best_match = Some((pattern.len(), severity));
            }
        }

        best_match.map(|(_, severity)| severity)
    }

    /// Severity for `code`, falling back to the code's natural severity.
    #[must_use]
    pub fn get_severity(&self, code: &str) -> DiagnosticSeverity {
        self.configured(code)
            .unwrap_or_else(|| natural_severity(code))
    }

    /// Check if a diagnostic should be shown (severity is not Off).
    #[must_use]
    pub fn is_enabled(&self, code: &str) -> bool {
        self.get_severity(code) != DiagnosticSeverity::Off
    }

    /// Override the severity of a code or prefix.
    pub fn set_severity(&mut self, code: &str, severity: DiagnosticSeverity) {
        self.severity.insert(code.to_string(), severity);
    }
}

/// `x2yy` codes are advisory, everything else is an error.
fn natural_severity(code: &str) -> DiagnosticSeverity {
    if code.chars().nth(1) == Some('2') {
        DiagnosticSeverity::Warning
    } else {
        DiagnosticSeverity::Error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_natural_severity() {
        let config = DiagnosticsConfig::default();
        assert_eq!(config.get_severity("T100"), DiagnosticSeverity::Error);
        assert_eq!(config.get_severity("H103"), DiagnosticSeverity::Error);
        assert_eq!(config.get_severity("T200"), DiagnosticSeverity::Warning);
        assert_eq!(config.get_severity("H204"), DiagnosticSeverity::Warning);
    }

    #[test]
    fn test_get_severity_exact_match() {
        let mut severity = HashMap::new();
        severity.insert("H100".to_string(), DiagnosticSeverity::Warning);
        severity.insert("H101".to_string(), DiagnosticSeverity::Off);

        let config = DiagnosticsConfig { severity };

        assert_eq!(config.get_severity("H100"), DiagnosticSeverity::Warning);
        assert_eq!(config.get_severity("H101"), DiagnosticSeverity::Off);
        assert_eq!(config.get_severity("H102"), DiagnosticSeverity::Error);
    }

    #[test]
    fn test_get_severity_longest_prefix_wins() {
        let mut severity = HashMap::new();
        severity.insert("H".to_string(), DiagnosticSeverity::Warning);
        severity.insert("H2".to_string(), DiagnosticSeverity::Off);
        severity.insert("H20".to_string(), DiagnosticSeverity::Hint);

        let config = DiagnosticsConfig { severity };

        assert_eq!(config.get_severity("H201"), DiagnosticSeverity::Hint);
        assert_eq!(config.get_severity("H210"), DiagnosticSeverity::Off);
        assert_eq!(config.get_severity("H100"), DiagnosticSeverity::Warning);
        assert_eq!(config.get_severity("T100"), DiagnosticSeverity::Error);
    }

    #[test]
    fn test_codes_compare_case_insensitively() {
        let mut severity = HashMap::new();
        severity.insert("h201".to_string(), DiagnosticSeverity::Off);
        severity.insert("t".to_string(), DiagnosticSeverity::Info);

        let config = DiagnosticsConfig { severity };

        assert_eq!(config.get_severity("H201"), DiagnosticSeverity::Off);
        assert_eq!(config.get_severity("T100"), DiagnosticSeverity::Info);
    }

    #[test]
    fn test_is_enabled_prefix_off_with_specific_override() {
        let mut config = DiagnosticsConfig::default();
        config.set_severity("H2", DiagnosticSeverity::Off);
        config.set_severity("H202", DiagnosticSeverity::Warning);

        assert!(config.is_enabled("H202"));
        assert!(!config.is_enabled("H201"));
        assert!(!config.is_enabled("H204"));
        assert!(config.is_enabled("H100"));
    }

    #[test]
    fn test_deserialize_diagnostics_config() {
        let toml = r#"
            [severity]
            H201 = "off"
            T200 = "error"
            "H2" = "hint"
        "#;

        let config: DiagnosticsConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.severity.get("H201"), Some(&DiagnosticSeverity::Off));
        assert_eq!(config.severity.get("T200"), Some(&DiagnosticSeverity::Error));
        assert_eq!(config.severity.get("H2"), Some(&DiagnosticSeverity::Hint));
    }
}
