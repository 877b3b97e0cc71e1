use std::path::PathBuf;

use fltk::{app, dialog};

use secreport::app::state::AppState;
use secreport::app::{AppSettings, Message, Report, ThemeMode, detect_system_dark_mode};
use secreport::ui::dialogs::about::show_about_dialog;
use secreport::ui::file_dialogs::native_open_dialog;

fn main() {
    let fltk_app = app::App::default();
    let settings = AppSettings::load();
    let dark_mode = match settings.theme_mode {
        ThemeMode::Light => false,
        ThemeMode::Dark => true,
        ThemeMode::SystemDefault => detect_system_dark_mode(),
    };

    // Report path from the command line, or ask for one.
    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .or_else(|| native_open_dialog("*.json").map(PathBuf::from));
    let Some(path) = path else {
        eprintln!("No report selected");
        return;
    };

    let report = match Report::load(&path) {
        Ok(report) => report,
        Err(e) => {
            dialog::alert_default(&format!("Não foi possível abrir o relatório: {e}"));
            return;
        }
    };

    let (sender, receiver) = app::channel::<Message>();
    let mut state = AppState::new(report, settings, dark_mode, sender);

    while fltk_app.wait() {
        if let Some(msg) = receiver.recv() {
            match msg {
                Message::OpenReport => state.open_report(),
                Message::ExportSection(id) => state.export_section(&id),
                Message::PrintReport => state.print_report(),
                Message::Quit => app::quit(),

                Message::ShowRawData(id) => state.show_raw_data(&id),
                Message::CloseRawData => state.close_raw_data(),
                Message::CopyRawData => state.copy_raw_data(),
                Message::RevertCopyFeedback(seq) => state.revert_copy_feedback(seq),

                Message::ScrollToSection(id) => state.scroll_to_section(&id),
                Message::ScrollStep { target } => state.scroll_step(target),
                Message::RevealVisibleSections => state.reveal_visible_sections(),
                Message::FilterRecommendations(filter) => state.apply_filter(filter),

                Message::ToggleDarkMode => state.toggle_dark_mode(),
                Message::ShowAbout => show_about_dialog(),
            }
        }
    }
}
