//! Report model: loading a security monitor JSON file and the tolerant
//! accessors the view builds from.
//!
//! The viewer does no analysis of its own. Every accessor degrades to an
//! empty/zero/"Unknown" value when the report omits a field, so a partial
//! report still renders.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use super::error::{AppError, Result};

/// One report produced by the security monitor.
#[derive(Debug, Clone)]
pub struct Report {
    raw: Value,
}

impl Report {
    /// Load a report JSON file from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let raw: Value = serde_json::from_str(&contents)?;
        if !raw.is_object() {
            return Err(AppError::Report(
                "report root is not a JSON object".to_string(),
            ));
        }
        Ok(Self { raw })
    }

    pub fn from_value(raw: Value) -> Self {
        Self { raw }
    }

    pub fn raw(&self) -> &Value {
        &self.raw
    }

    pub fn hostname(&self) -> &str {
        self.raw
            .get("hostname")
            .and_then(Value::as_str)
            .unwrap_or("Unknown")
    }

    pub fn timestamp(&self) -> &str {
        self.raw
            .get("timestamp")
            .and_then(Value::as_str)
            .unwrap_or("")
    }

    pub fn score(&self) -> Score {
        let score = self.raw.get("security_score");
        Score {
            score: score
                .and_then(|s| s.get("score"))
                .and_then(Value::as_i64)
                .unwrap_or(0),
            grade: score
                .and_then(|s| s.get("grade"))
                .and_then(Value::as_str)
                .unwrap_or("N/A")
                .to_string(),
            deductions: string_list(score.and_then(|s| s.get("deductions"))),
            bonus: string_list(score.and_then(|s| s.get("bonus"))),
        }
    }

    pub fn summary(&self) -> Summary {
        let summary = self.raw.get("summary");
        let count = |key: &str| {
            summary
                .and_then(|s| s.get(key))
                .and_then(Value::as_u64)
                .unwrap_or(0)
        };
        Summary {
            total_alerts: count("total_alerts"),
            critical_alerts: count("critical_alerts"),
            warning_alerts: count("warning_alerts"),
            info_alerts: count("info_alerts"),
            security_status: summary
                .and_then(|s| s.get("security_status"))
                .and_then(Value::as_str)
                .unwrap_or("unknown")
                .to_string(),
        }
    }

    /// Alerts the monitor raised. Entries that do not parse are skipped.
    pub fn alerts(&self) -> Vec<Alert> {
        self.raw
            .get("alerts")
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(|item| serde_json::from_value(item.clone()).ok())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Metrics areas present in this report, in the fixed section order.
    pub fn metric_sections(&self) -> Vec<&'static str> {
        super::registry::METRIC_SECTIONS
            .iter()
            .copied()
            .filter(|id| {
                self.raw
                    .get("metrics")
                    .and_then(|m| m.get(*id))
                    .is_some()
            })
            .collect()
    }

    /// The `summary` object of a metrics area rendered as display rows.
    /// Scalar entries only; nested objects are the raw-data viewer's job.
    pub fn section_summary(&self, id: &str) -> Vec<(String, String)> {
        let Some(Value::Object(summary)) = self
            .raw
            .get("metrics")
            .and_then(|m| m.get(id))
            .and_then(|s| s.get("summary"))
        else {
            return Vec::new();
        };

        let mut rows = Vec::new();
        for (key, value) in summary {
            let shown = match value {
                Value::String(s) => s.clone(),
                Value::Number(n) => n.to_string(),
                Value::Bool(true) => "sim".to_string(),
                Value::Bool(false) => "não".to_string(),
                Value::Null => "-".to_string(),
                Value::Array(items) => format!("{} itens", items.len()),
                Value::Object(_) => continue,
            };
            rows.push((key.replace('_', " "), shown));
        }
        rows
    }

    /// Plain text of a section as shown in the report, for the export
    /// feature. `None` when the report has no such section.
    pub fn section_text(&self, id: &str) -> Option<String> {
        if id != "alerts" && !self.metric_sections().iter().any(|s| *s == id) {
            return None;
        }

        let mut lines = vec![card_title(id).to_string()];
        for (label, value) in self.section_summary(id) {
            lines.push(format!("{label}: {value}"));
        }
        for alert in self.alerts() {
            if id == "alerts" || alert.category == id {
                lines.push(format!("[{}] {}", alert.severity.label(), alert.message));
                if let Some(rec) = &alert.recommendation {
                    lines.push(format!("  Recomendação: {rec}"));
                }
            }
        }
        lines.push(String::new());
        Some(lines.join("\n"))
    }
}

fn string_list(value: Option<&Value>) -> Vec<String> {
    value
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// Section card titles, as the original report lays them out.
pub fn card_title(id: &str) -> &'static str {
    match id {
        "ports" => "🔌 Análise de Portas e Serviços",
        "authentication" => "🔐 Análise de Autenticação",
        "firewall" => "🛡️ Firewall e SELinux",
        "vulnerabilities" => "⚠️ Vulnerabilidades e Atualizações",
        "network" => "🌐 Configuração de Rede",
        "permissions" => "📁 Permissões de Arquivos",
        "alerts" => "🚨 Alertas",
        _ => "📄 Seção",
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Alert {
    #[serde(default)]
    pub category: String,
    pub severity: Severity,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub recommendation: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    Warning,
    Info,
}

impl Severity {
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Critical => "crítico",
            Severity::Warning => "aviso",
            Severity::Info => "info",
        }
    }

    /// Recommendation priority implied by an alert's severity.
    pub fn priority(&self) -> Priority {
        match self {
            Severity::Critical => Priority::High,
            Severity::Warning => Priority::Medium,
            Severity::Info => Priority::Low,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn label(&self) -> &'static str {
        match self {
            Priority::High => "alta",
            Priority::Medium => "média",
            Priority::Low => "baixa",
        }
    }
}

/// Filter selection for the recommendations section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PriorityFilter {
    #[default]
    All,
    Only(Priority),
}

impl PriorityFilter {
    pub fn matches(&self, priority: Priority) -> bool {
        match self {
            PriorityFilter::All => true,
            PriorityFilter::Only(wanted) => *wanted == priority,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PriorityFilter::All => "Todas",
            PriorityFilter::Only(Priority::High) => "Alta",
            PriorityFilter::Only(Priority::Medium) => "Média",
            PriorityFilter::Only(Priority::Low) => "Baixa",
        }
    }
}

/// One card in the recommendations section.
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    pub priority: Priority,
    pub title: String,
    pub description: String,
    pub category: String,
}

/// Recommendation cards: every alert carrying a recommendation, in report
/// order, prioritized by its severity.
pub fn recommendations(alerts: &[Alert]) -> Vec<Recommendation> {
    alerts
        .iter()
        .filter_map(|alert| {
            let description = alert.recommendation.clone()?;
            Some(Recommendation {
                priority: alert.severity.priority(),
                title: alert.message.clone(),
                description,
                category: alert.category.clone(),
            })
        })
        .collect()
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Score {
    pub score: i64,
    pub grade: String,
    pub deductions: Vec<String>,
    pub bonus: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Summary {
    pub total_alerts: u64,
    pub critical_alerts: u64,
    pub warning_alerts: u64,
    pub info_alerts: u64,
    pub security_status: String,
}
