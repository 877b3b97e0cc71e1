//! Modal state machine for the raw-data viewer.
//!
//! Replaces show/hide widget flags with an explicit state machine, so the
//! open/close rules can be exercised without a live window. The controller
//! owns the section registry for the current view; `show` resolves title
//! and body together, which is what keeps the two from ever going stale
//! independently.

use super::highlight::{self, TokenPalette};
use super::registry::{SectionRegistry, section_title};

/// Placeholder rendered when a section has no data in the registry. This
/// is a recoverable, user-visible condition, not an error.
pub const MISSING_DATA_MESSAGE: &str = "Dados não encontrados para esta seção.";

/// Which section the raw-data viewer is showing, if any.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    Open {
        section_id: String,
    },
}

/// Body content resolved for one `show` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalBody {
    /// Highlighted markup for the section's raw data.
    Highlighted(String),
    /// The section has no data in the registry.
    Missing,
}

/// Title and body, resolved together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalView {
    pub title: String,
    pub body: ModalBody,
}

impl ModalView {
    /// The markup to load into the body widget.
    pub fn markup(&self) -> String {
        match &self.body {
            ModalBody::Highlighted(markup) => markup.clone(),
            ModalBody::Missing => {
                format!("<p><font color=\"#cc0000\">{MISSING_DATA_MESSAGE}</font></p>")
            }
        }
    }
}

pub struct ModalController {
    registry: SectionRegistry,
    state: ModalState,
    /// Markup currently loaded in the body widget; `None` while closed.
    current_markup: Option<String>,
}

impl ModalController {
    pub fn new(registry: SectionRegistry) -> Self {
        Self {
            registry,
            state: ModalState::Closed,
            current_markup: None,
        }
    }

    pub fn state(&self) -> &ModalState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, ModalState::Open { .. })
    }

    /// Open the viewer on a section, replacing whatever it showed before.
    /// The highlighted body is recomputed on every call.
    pub fn show(&mut self, section_id: &str, palette: &TokenPalette) -> ModalView {
        let title = section_title(section_id).to_string();
        let body = match self.registry.lookup(section_id) {
            Some(value) => ModalBody::Highlighted(highlight::highlight(value, palette)),
            None => ModalBody::Missing,
        };
        let view = ModalView { title, body };
        self.state = ModalState::Open {
            section_id: section_id.to_string(),
        };
        self.current_markup = Some(view.markup());
        view
    }

    /// Close the viewer. Closing an already-closed viewer is a no-op;
    /// returns whether anything changed.
    pub fn close(&mut self) -> bool {
        if self.is_open() {
            self.state = ModalState::Closed;
            self.current_markup = None;
            true
        } else {
            false
        }
    }

    /// Plain-text projection of the current body, for the clipboard.
    /// `None` while the viewer is closed.
    pub fn copy_text(&self) -> Option<String> {
        self.current_markup.as_deref().map(highlight::plain_text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const PALETTE: TokenPalette = TokenPalette {
        key: "#0451a5",
        string: "#a31515",
        number: "#098658",
        boolean: "#0000ff",
        null: "#795e26",
    };

    fn ports_controller() -> ModalController {
        let report = json!({
            "metrics": {"ports": {"22": "open", "80": "closed"}},
        });
        ModalController::new(SectionRegistry::from_report(&report))
    }

    #[test]
    fn test_show_resolves_title_and_highlighted_body() {
        let mut controller = ports_controller();
        let view = controller.show("ports", &PALETTE);

        assert_eq!(view.title, "Dados de Portas e Conexões");
        let ModalBody::Highlighted(markup) = &view.body else {
            panic!("expected highlighted body");
        };
        for token in ["\"22\":", "\"80\":", "\"open\"", "\"closed\""] {
            assert!(markup.contains(token), "missing {token} in {markup}");
        }
        assert_eq!(
            controller.state(),
            &ModalState::Open { section_id: "ports".to_string() }
        );
    }

    #[test]
    fn test_show_replaces_previous_section() {
        let mut controller = ports_controller();
        controller.show("ports", &PALETTE);
        let view = controller.show("alerts", &PALETTE);

        assert_eq!(view.title, "Todos os Alertas");
        assert_eq!(
            controller.state(),
            &ModalState::Open { section_id: "alerts".to_string() }
        );
        // The copy projection follows the latest body, never the stale one.
        let copied = controller.copy_text().unwrap();
        assert!(!copied.contains("open"));
    }

    #[test]
    fn test_show_missing_section_keeps_specific_title() {
        let mut controller = ModalController::new(SectionRegistry::default());
        let view = controller.show("metrics", &PALETTE);

        assert_eq!(view.title, "Todas as Métricas");
        assert_eq!(view.body, ModalBody::Missing);
        assert!(view.markup().contains(MISSING_DATA_MESSAGE));
        assert!(controller.is_open());
    }

    #[test]
    fn test_unknown_section_gets_generic_title() {
        let mut controller = ports_controller();
        let view = controller.show("telemetry", &PALETTE);
        assert_eq!(view.title, "Dados Brutos");
        assert_eq!(view.body, ModalBody::Missing);
    }

    #[test]
    fn test_close_is_idempotent() {
        let mut controller = ports_controller();
        assert!(!controller.close());
        controller.show("ports", &PALETTE);
        assert!(controller.close());
        assert!(!controller.close());
        assert_eq!(controller.state(), &ModalState::Closed);
        assert!(controller.copy_text().is_none());
    }

    #[test]
    fn test_copy_text_is_plain_projection() {
        let mut controller = ports_controller();
        controller.show("ports", &PALETTE);
        let copied = controller.copy_text().unwrap();
        assert!(!copied.contains("<font"));
        assert_eq!(
            copied,
            super::super::highlight::canonical(&json!({"22": "open", "80": "closed"}))
        );
    }
}
