//! Raw-data overlay: a backdrop covering the report and a centered card
//! with title, HelpView body and copy/close controls.
//!
//! The overlay group is a child of the main window, shown above the report
//! while a section's raw data is open. A click that lands on the backdrop
//! (and only on the backdrop, never on the card) closes the viewer, which
//! mirrors the outside-click dismissal of the original overlay.

use fltk::{
    app::Sender,
    button::Button,
    enums::{Align, Color, Event, Font, FrameType},
    frame::Frame,
    group::Group,
    misc::HelpView,
    prelude::*,
};

use crate::app::clipboard::FEEDBACK_LABEL;
use crate::app::messages::Message;
use crate::app::modal::ModalView;

use super::theme::Theme;

pub const COPY_LABEL: &str = "📋 Copiar";

pub struct RawDataModal {
    pub overlay: Group,
    backdrop: Frame,
    content: Group,
    title: Frame,
    viewer: HelpView,
    copy_btn: Button,
    close_btn: Button,
    copy_btn_color: Color,
}

/// Bounds of the centered content card for a given window size.
fn content_bounds(window_w: i32, window_h: i32) -> (i32, i32, i32, i32) {
    let cw = (window_w - 120).clamp(360, 860);
    let ch = (window_h - 120).max(240);
    ((window_w - cw) / 2, (window_h - ch) / 2, cw, ch)
}

pub fn build_raw_data_modal(
    window_w: i32,
    window_h: i32,
    theme: &Theme,
    viewer_font_size: u32,
    sender: &Sender<Message>,
) -> RawDataModal {
    let mut overlay = Group::new(0, 0, window_w, window_h, None);

    let mut backdrop = Frame::new(0, 0, window_w, window_h, None);
    backdrop.set_frame(FrameType::FlatBox);
    backdrop.set_color(theme.backdrop());
    backdrop.handle({
        let s = *sender;
        move |_, event| match event {
            Event::Push => {
                s.send(Message::CloseRawData);
                true
            }
            _ => false,
        }
    });

    let (cx, cy, cw, ch) = content_bounds(window_w, window_h);
    let mut content = Group::new(cx, cy, cw, ch, None);
    content.set_frame(FrameType::UpBox);
    content.set_color(theme.card_bg());

    let mut title = Frame::new(cx + 16, cy + 12, cw - 200, 30, None);
    title.set_align(Align::Left | Align::Inside);
    title.set_label_size(16);
    title.set_label_font(Font::HelveticaBold);
    title.set_label_color(theme.text());

    let mut copy_btn = Button::new(cx + cw - 170, cy + 12, 110, 30, COPY_LABEL);
    copy_btn.set_tooltip("Copiar o conteúdo exibido");
    copy_btn.set_callback({
        let s = *sender;
        move |_| s.send(Message::CopyRawData)
    });
    let copy_btn_color = copy_btn.color();

    let mut close_btn = Button::new(cx + cw - 50, cy + 12, 34, 30, "✕");
    close_btn.set_tooltip("Fechar (Esc)");
    close_btn.set_callback({
        let s = *sender;
        move |_| s.send(Message::CloseRawData)
    });

    let mut viewer = HelpView::new(cx + 16, cy + 54, cw - 32, ch - 70, None);
    viewer.set_text_font(Font::Courier);
    viewer.set_text_size(viewer_font_size as i32);

    content.end();
    overlay.end();
    overlay.hide();

    RawDataModal {
        overlay,
        backdrop,
        content,
        title,
        viewer,
        copy_btn,
        close_btn,
        copy_btn_color,
    }
}

/// Wrap highlighted markup in HelpView-compatible body and pre tags.
pub fn wrap_for_viewer(markup: &str, theme: &Theme) -> String {
    let (bg, fg) = theme.viewer_colors();
    format!("<body bgcolor=\"{bg}\" text=\"{fg}\"><pre>{markup}</pre></body>")
}

impl RawDataModal {
    /// Load a resolved view into the widgets and show the overlay. Title
    /// and body always change together.
    pub fn open(&mut self, view: &ModalView, theme: &Theme, viewer_font_size: u32) {
        self.relayout();
        self.reset_copy_button();
        self.title.set_label(&view.title);
        self.viewer.set_text_size(viewer_font_size as i32);
        self.viewer.set_value(&wrap_for_viewer(&view.markup(), theme));
        self.overlay.show();
        self.overlay.redraw();
    }

    pub fn close(&mut self) {
        self.overlay.hide();
        if let Some(mut parent) = self.overlay.parent() {
            parent.redraw();
        }
    }

    /// Track the window size, which may have changed while the overlay
    /// was hidden. Children are re-placed explicitly after the group
    /// resize so they never accumulate proportional scaling.
    fn relayout(&mut self) {
        let Some(parent) = self.overlay.parent() else {
            return;
        };
        let (w, h) = (parent.w(), parent.h());
        self.overlay.resize(0, 0, w, h);
        self.backdrop.resize(0, 0, w, h);
        let (cx, cy, cw, ch) = content_bounds(w, h);
        self.content.resize(cx, cy, cw, ch);
        self.title.resize(cx + 16, cy + 12, cw - 200, 30);
        self.copy_btn.resize(cx + cw - 170, cy + 12, 110, 30);
        self.close_btn.resize(cx + cw - 50, cy + 12, 34, 30);
        self.viewer.resize(cx + 16, cy + 54, cw - 32, ch - 70);
    }

    pub fn acknowledge_copy(&mut self, theme: &Theme) {
        self.copy_btn.set_label(FEEDBACK_LABEL);
        self.copy_btn.set_color(theme.copy_ack());
        self.copy_btn.set_label_color(Color::White);
        self.copy_btn.redraw();
    }

    pub fn reset_copy_button(&mut self) {
        self.copy_btn.set_label(COPY_LABEL);
        self.copy_btn.set_color(self.copy_btn_color);
        self.copy_btn.set_label_color(Color::Foreground);
        self.copy_btn.redraw();
    }
}
