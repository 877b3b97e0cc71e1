//! Section registry: the raw data behind each report section.
//!
//! Built once when a report is loaded and read-only for the lifetime of
//! that view; the modal controller receives it by value so it can be
//! tested without a live window.

use serde_json::{Map, Value};

/// Section ids the report embeds, paired with their display titles.
const SECTION_TITLES: &[(&str, &str)] = &[
    ("full", "Dados Completos do Relatório"),
    ("metrics", "Todas as Métricas"),
    ("ports", "Dados de Portas e Conexões"),
    ("authentication", "Dados de Autenticação"),
    ("firewall", "Dados de Firewall e SELinux"),
    ("vulnerabilities", "Dados de Vulnerabilidades"),
    ("network", "Dados de Rede"),
    ("permissions", "Dados de Permissões"),
    ("alerts", "Todos os Alertas"),
];

/// Title used for any id outside the known set.
pub const GENERIC_TITLE: &str = "Dados Brutos";

/// The metrics areas that become sections of their own.
pub const METRIC_SECTIONS: &[&str] = &[
    "ports",
    "authentication",
    "firewall",
    "vulnerabilities",
    "network",
    "permissions",
];

/// Display title for a section id. Unknown ids get the generic title;
/// title resolution never depends on whether the section has data.
pub fn section_title(id: &str) -> &'static str {
    SECTION_TITLES
        .iter()
        .find(|(key, _)| *key == id)
        .map(|(_, title)| *title)
        .unwrap_or(GENERIC_TITLE)
}

/// Mapping from section id to its raw value.
#[derive(Debug, Clone, Default)]
pub struct SectionRegistry {
    sections: Map<String, Value>,
}

impl SectionRegistry {
    pub fn new(sections: Map<String, Value>) -> Self {
        Self { sections }
    }

    /// The section mapping the original report ships: the full report,
    /// the metrics tree, one entry per metrics area (empty object when the
    /// monitor skipped it), and the alert list.
    pub fn from_report(report: &Value) -> Self {
        let metrics = report
            .get("metrics")
            .cloned()
            .unwrap_or_else(|| Value::Object(Map::new()));

        let mut sections = Map::new();
        sections.insert("full".to_string(), report.clone());
        sections.insert("metrics".to_string(), metrics.clone());
        for id in METRIC_SECTIONS {
            let value = metrics
                .get(*id)
                .cloned()
                .unwrap_or_else(|| Value::Object(Map::new()));
            sections.insert((*id).to_string(), value);
        }
        sections.insert(
            "alerts".to_string(),
            report
                .get("alerts")
                .cloned()
                .unwrap_or_else(|| Value::Array(Vec::new())),
        );
        Self { sections }
    }

    /// Total lookup: unknown ids come back as `None`, never an error.
    pub fn lookup(&self, id: &str) -> Option<&Value> {
        self.sections.get(id)
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_lookup_on_empty_registry_never_fails() {
        let registry = SectionRegistry::default();
        for id in ["full", "metrics", "ports", "alerts", "whatever"] {
            assert!(registry.lookup(id).is_none());
        }
    }

    #[test]
    fn test_from_report_builds_known_sections() {
        let report = json!({
            "hostname": "lab",
            "metrics": {
                "ports": {"summary": {"total_listening_ports": 3}},
                "firewall": {"summary": {"firewall_active": true}},
            },
            "alerts": [{"category": "ports", "severity": "info", "message": "ok"}],
        });
        let registry = SectionRegistry::from_report(&report);

        assert_eq!(registry.lookup("full"), Some(&report));
        assert_eq!(
            registry.lookup("ports"),
            Some(&json!({"summary": {"total_listening_ports": 3}}))
        );
        // Areas the monitor skipped still resolve, as empty objects.
        assert_eq!(registry.lookup("network"), Some(&json!({})));
        assert_eq!(registry.lookup("alerts").and_then(|v| v.as_array()).map(Vec::len), Some(1));
        assert!(registry.lookup("nonsense").is_none());
    }

    #[test]
    fn test_from_report_without_metrics_or_alerts() {
        let registry = SectionRegistry::from_report(&json!({"hostname": "bare"}));
        assert_eq!(registry.lookup("metrics"), Some(&json!({})));
        assert_eq!(registry.lookup("alerts"), Some(&json!([])));
    }

    #[test]
    fn test_section_titles() {
        assert_eq!(section_title("ports"), "Dados de Portas e Conexões");
        assert_eq!(section_title("full"), "Dados Completos do Relatório");
        assert_eq!(section_title("made-up"), GENERIC_TITLE);
    }
}
