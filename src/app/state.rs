use std::path::Path;

use fltk::{app, dialog, prelude::*, printer::Printer};

use super::clipboard::{self, COPY_FAILED_MESSAGE, CopyFeedback, CopyOutcome, FEEDBACK_SECS};
use super::error::AppError;
use super::export;
use super::messages::Message;
use super::modal::ModalController;
use super::registry::SectionRegistry;
use super::report::{PriorityFilter, Report};
use super::settings::{AppSettings, ThemeMode};
use crate::ui::file_dialogs::{native_open_dialog, native_save_dialog};
use crate::ui::main_window::{MainWidgets, build_report_window};
use crate::ui::theme::Theme;

pub struct AppState {
    pub widgets: MainWidgets,
    pub report: Report,
    pub modal: ModalController,
    pub copy_feedback: CopyFeedback,
    pub filter: PriorityFilter,
    pub settings: AppSettings,
    pub dark_mode: bool,
    pub sender: app::Sender<Message>,
}

impl AppState {
    pub fn new(
        report: Report,
        settings: AppSettings,
        dark_mode: bool,
        sender: app::Sender<Message>,
    ) -> Self {
        let widgets = build_report_window(&report, &settings, dark_mode, &sender);
        let modal = ModalController::new(SectionRegistry::from_report(report.raw()));
        let mut state = Self {
            widgets,
            report,
            modal,
            copy_feedback: CopyFeedback::new(),
            filter: PriorityFilter::All,
            settings,
            dark_mode,
            sender,
        };
        state.apply_filter(PriorityFilter::All);
        state.schedule_reveal_kick();
        state
    }

    fn theme(&self) -> Theme {
        Theme::new(self.dark_mode)
    }

    // --- Raw-data viewer ---

    pub fn show_raw_data(&mut self, section_id: &str) {
        let view = self.modal.show(section_id, &self.theme().token_palette());
        self.widgets
            .modal
            .open(&view, &self.theme(), self.settings.viewer_font_size);
        // Keep the report from scrolling underneath while the viewer is up.
        self.widgets.scroll.deactivate();
    }

    pub fn close_raw_data(&mut self) {
        if self.modal.close() {
            self.widgets.modal.close();
            self.widgets.scroll.activate();
        }
    }

    pub fn copy_raw_data(&mut self) {
        let wrote = match self.modal.copy_text() {
            Some(text) => {
                app::copy(&text);
                Ok(())
            }
            None => Err(AppError::Clipboard(
                "raw-data viewer has no content".to_string(),
            )),
        };
        match clipboard::copy_outcome(&mut self.copy_feedback, wrote) {
            CopyOutcome::Acknowledged(seq) => {
                self.widgets.modal.acknowledge_copy(&self.theme());
                let s = self.sender;
                app::add_timeout3(FEEDBACK_SECS, move |_| {
                    s.send(Message::RevertCopyFeedback(seq));
                });
            }
            CopyOutcome::Failed => dialog::alert_default(COPY_FAILED_MESSAGE),
        }
    }

    pub fn revert_copy_feedback(&mut self, seq: u32) {
        if self.copy_feedback.expire(seq) {
            self.widgets.modal.reset_copy_button();
        }
    }

    // --- File operations ---

    pub fn open_report(&mut self) {
        let Some(path) = native_open_dialog("*.json") else {
            return;
        };
        match Report::load(Path::new(&path)) {
            Ok(report) => {
                self.report = report;
                self.rebuild();
            }
            Err(e) => dialog::alert_default(&format!("Não foi possível abrir o relatório: {e}")),
        }
    }

    pub fn export_section(&mut self, section_id: &str) {
        let Some(text) = self.report.section_text(section_id) else {
            eprintln!("Export skipped: section '{section_id}' not present in this report");
            return;
        };
        let Some(path) = native_save_dialog("*.txt", &export::export_file_name(section_id)) else {
            return;
        };
        if let Err(e) = export::write_export(Path::new(&path), &text) {
            dialog::alert_default(&format!("Erro ao exportar a seção: {e}"));
        }
    }

    pub fn print_report(&mut self) {
        let mut printer = Printer::default();
        match printer.begin_job(1) {
            Ok(_) => {
                let _ = printer.begin_page();
                printer.print_widget(&self.widgets.scroll, 0, 0);
                let _ = printer.end_page();
                printer.end_job();
            }
            Err(e) => eprintln!("Print job not started: {e}"),
        }
    }

    // --- Navigation, filtering, reveal ---

    pub fn scroll_to_section(&mut self, section_id: &str) {
        let Some(section) = self.widgets.sections.iter().find(|s| s.id == section_id) else {
            eprintln!("Scroll skipped: section '{section_id}' not present in this report");
            return;
        };
        let scroll = &self.widgets.scroll;
        let target = scroll.yposition() + section.group.y() - scroll.y() - 12;
        let max = (self.widgets.pack.h() + 32 - scroll.h()).max(0);
        self.sender.send(Message::ScrollStep {
            target: target.clamp(0, max),
        });
    }

    /// One tick of the eased scroll animation; reschedules itself until it
    /// lands on the target.
    pub fn scroll_step(&mut self, target: i32) {
        let current = self.widgets.scroll.yposition();
        let delta = target - current;
        if delta == 0 {
            return;
        }
        let step = if delta.abs() <= 6 { delta } else { delta / 4 };
        let x = self.widgets.scroll.xposition();
        self.widgets.scroll.scroll_to(x, current + step);
        if current + step != target {
            let s = self.sender;
            app::add_timeout3(0.016, move |_| s.send(Message::ScrollStep { target }));
        }
    }

    pub fn apply_filter(&mut self, filter: PriorityFilter) {
        self.filter = filter;
        for (priority, group) in &mut self.widgets.recommendations {
            if filter.matches(*priority) {
                group.show();
            } else {
                group.hide();
            }
        }
        let theme = self.theme();
        for (f, btn) in &mut self.widgets.filter_buttons {
            if *f == filter {
                btn.set_color(theme.accent());
                btn.set_label_color(fltk::enums::Color::White);
            } else {
                btn.set_color(fltk::enums::Color::Background);
                btn.set_label_color(theme.text());
            }
            btn.redraw();
        }
        self.widgets.pack.redraw();
        self.widgets.scroll.redraw();
    }

    /// Activate sections that have scrolled into the viewport; polls while
    /// any are still dimmed.
    pub fn reveal_visible_sections(&mut self) {
        if !self.settings.reveal_animation {
            return;
        }
        let (top, bottom) = {
            let scroll = &self.widgets.scroll;
            (scroll.y(), scroll.y() + scroll.h())
        };
        let mut pending = false;
        for section in &mut self.widgets.sections {
            let group = &mut section.group;
            if group.active() {
                continue;
            }
            if group.y() < bottom && group.y() + group.h() > top {
                group.activate();
                group.redraw();
            } else {
                pending = true;
            }
        }
        if pending {
            let s = self.sender;
            app::add_timeout3(0.25, move |_| s.send(Message::RevealVisibleSections));
        }
    }

    // --- View ---

    pub fn toggle_dark_mode(&mut self) {
        self.dark_mode = !self.dark_mode;
        self.settings.theme_mode = if self.dark_mode {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        };
        if let Err(e) = self.settings.save() {
            eprintln!("Failed to save settings: {e}");
        }
        self.rebuild();
    }

    /// Rebuild the whole view, for a new report or a theme change. The
    /// registry is built once per view and injected into a fresh
    /// controller; within a view it is never replaced.
    fn rebuild(&mut self) {
        let new_widgets =
            build_report_window(&self.report, &self.settings, self.dark_mode, &self.sender);
        let mut old = std::mem::replace(&mut self.widgets, new_widgets);
        old.window.hide();
        self.modal = ModalController::new(SectionRegistry::from_report(self.report.raw()));
        self.copy_feedback = CopyFeedback::new();
        self.apply_filter(PriorityFilter::All);
        self.schedule_reveal_kick();
    }

    /// Run the first reveal pass only after the initial layout has
    /// happened, otherwise every section still sits at the origin and
    /// would count as visible.
    fn schedule_reveal_kick(&self) {
        if !self.settings.reveal_animation {
            return;
        }
        let s = self.sender;
        app::add_timeout3(0.1, move |_| s.send(Message::RevealVisibleSections));
    }
}
