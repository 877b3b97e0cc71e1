//! Report window: header, score, section cards, alerts and
//! recommendations inside a vertical scroll, plus the raw-data overlay.

use fltk::{
    app::{self, Sender},
    button::Button,
    enums::{Align, Color, Event, Font, FrameType, Key},
    frame::Frame,
    group::{Flex, Pack, Scroll, ScrollType},
    menu::MenuBar,
    prelude::*,
    window::Window,
};

use crate::app::messages::Message;
use crate::app::report::{self, Priority, PriorityFilter, Recommendation, Report};
use crate::app::settings::AppSettings;

use super::menu::build_menu;
use super::modal::{RawDataModal, build_raw_data_modal};
use super::theme::Theme;

pub const WINDOW_W: i32 = 1000;
pub const WINDOW_H: i32 = 740;
const MENU_H: i32 = 30;
const CONTENT_W: i32 = 920;
const PACK_X: i32 = (WINDOW_W - CONTENT_W) / 2;
const INNER_W: i32 = CONTENT_W - 32;

/// One report section the view can scroll to and reveal.
pub struct SectionWidgets {
    pub id: String,
    pub group: fltk::group::Group,
}

pub struct MainWidgets {
    pub window: Window,
    pub menu: MenuBar,
    pub scroll: Scroll,
    pub pack: Pack,
    pub sections: Vec<SectionWidgets>,
    pub filter_buttons: Vec<(PriorityFilter, Button)>,
    pub recommendations: Vec<(Priority, fltk::group::Group)>,
    pub modal: RawDataModal,
}

pub fn build_report_window(
    report: &Report,
    settings: &AppSettings,
    dark: bool,
    sender: &Sender<Message>,
) -> MainWidgets {
    let theme = Theme::new(dark);

    let mut window = Window::default().with_size(WINDOW_W, WINDOW_H);
    window.set_label(&format!("{} — 🔒 SecReport", report.hostname()));
    window.set_xclass("SecReport");
    window.set_color(theme.window_bg());

    let mut flex = Flex::new(0, 0, WINDOW_W, WINDOW_H, None);
    flex.set_type(fltk::group::FlexType::Column);

    let mut menu = MenuBar::new(0, 0, 0, MENU_H, "");
    menu.set_color(theme.menu_bg());
    menu.set_text_color(theme.text());
    flex.fixed(&menu, MENU_H);
    build_menu(&mut menu, sender, dark);

    let mut scroll = Scroll::new(0, MENU_H, WINDOW_W, WINDOW_H - MENU_H, None);
    scroll.set_type(ScrollType::Vertical);
    scroll.set_frame(FrameType::FlatBox);
    scroll.set_color(theme.window_bg());

    let mut pack = Pack::new(PACK_X, MENU_H + 16, CONTENT_W, 10, None);
    pack.set_spacing(16);

    let mut sections = Vec::new();

    header_card(report, &theme);

    let score = score_card(report, &theme, sender);
    sections.push(SectionWidgets { id: "score".to_string(), group: score });

    for id in report.metric_sections() {
        let card = metric_card(report, id, &theme, sender);
        sections.push(SectionWidgets { id: id.to_string(), group: card });
    }

    let alerts = alerts_card(report, &theme, sender);
    sections.push(SectionWidgets { id: "alerts".to_string(), group: alerts });

    let recs = report::recommendations(&report.alerts());
    let (rec_header, filter_buttons) = recommendations_header(&theme, sender);
    sections.push(SectionWidgets { id: "recommendations".to_string(), group: rec_header });

    let mut recommendations = Vec::new();
    if recs.is_empty() {
        note_card("✅ Nenhuma recomendação registrada.", &theme);
    }
    for rec in &recs {
        recommendations.push((rec.priority, recommendation_card(rec, &theme)));
    }

    disclaimer_card(&theme);

    pack.end();
    scroll.end();
    flex.end();
    window.resizable(&flex);

    // The raw-data overlay sits above the report, hidden until a section
    // is opened.
    let modal = build_raw_data_modal(WINDOW_W, WINDOW_H, &theme, settings.viewer_font_size, sender);

    window.end();

    // Esc closes the raw-data viewer from anywhere. Consuming the key also
    // keeps FLTK's default Escape-closes-window behavior out of the way;
    // closing an already-closed viewer is a no-op.
    window.handle({
        let s = *sender;
        move |_, event| {
            if (event == Event::KeyDown || event == Event::Shortcut)
                && app::event_key() == Key::Escape
            {
                s.send(Message::CloseRawData);
                return true;
            }
            false
        }
    });
    window.set_callback({
        let s = *sender;
        move |_| {
            if app::event() == Event::Close {
                s.send(Message::Quit);
            }
        }
    });

    window.show();

    let mut widgets = MainWidgets {
        window,
        menu,
        scroll,
        pack,
        sections,
        filter_buttons,
        recommendations,
        modal,
    };
    if settings.reveal_animation {
        for section in &mut widgets.sections {
            section.group.deactivate();
        }
    }
    widgets
}

fn label(x: i32, y: i32, w: i32, h: i32, text: &str, size: i32, color: Color) -> Frame {
    let mut frame = Frame::new(x, y, w, h, None);
    frame.set_label(text);
    frame.set_label_size(size);
    frame.set_label_color(color);
    frame.set_align(Align::Left | Align::Inside | Align::Wrap);
    frame
}

fn centered_label(y: i32, w: i32, h: i32, text: &str, size: i32, color: Color) -> Frame {
    let mut frame = Frame::new(0, y, w, h, None);
    frame.set_label(text);
    frame.set_label_size(size);
    frame.set_label_color(color);
    frame
}

fn action_button(x: i32, y: i32, w: i32, text: &str, tooltip: &str, msg: Message, sender: &Sender<Message>) -> Button {
    let mut btn = Button::new(x, y, w, 32, None);
    btn.set_label(text);
    btn.set_label_size(12);
    btn.set_tooltip(tooltip);
    btn.set_callback({
        let s = *sender;
        move |_| s.send(msg.clone())
    });
    btn
}

fn card_group(height: i32, theme: &Theme) -> fltk::group::Group {
    let mut group = fltk::group::Group::new(0, 0, CONTENT_W, height, None);
    group.set_frame(FrameType::FlatBox);
    group.set_color(theme.card_bg());
    group
}

fn header_card(report: &Report, theme: &Theme) -> fltk::group::Group {
    let mut group = fltk::group::Group::new(0, 0, CONTENT_W, 172, None);
    group.set_frame(FrameType::FlatBox);
    group.set_color(theme.header_bg());

    let mut title = centered_label(16, CONTENT_W, 36, "🔒 Relatório de Segurança", 26, theme.header_text());
    title.set_label_font(Font::HelveticaBold);
    centered_label(56, CONTENT_W, 20, "Análise Automatizada de Segurança", 13, theme.header_text());
    centered_label(80, CONTENT_W, 22, "🏠 100% Local — Nenhum Dado Enviado", 12, theme.header_text());
    let mut when = centered_label(108, CONTENT_W, 20, &format!("⏰ {}", report.timestamp()), 12, theme.header_text());
    when.set_tooltip("Data e hora da coleta pelo security monitor");
    let mut host = centered_label(130, CONTENT_W, 20, &format!("🖥️ {}", report.hostname()), 12, theme.header_text());
    host.set_tooltip("Host analisado");

    group.end();
    group
}

fn score_card(report: &Report, theme: &Theme, sender: &Sender<Message>) -> fltk::group::Group {
    let score = report.score();
    let summary = report.summary();

    let deductions = if score.deductions.is_empty() {
        vec!["Nenhuma dedução".to_string()]
    } else {
        score.deductions.clone()
    };
    let bonus = if score.bonus.is_empty() {
        vec!["Nenhum bônus".to_string()]
    } else {
        score.bonus.clone()
    };

    let height = 150 + (deductions.len() + bonus.len()) as i32 * 18 + 56 + 58;
    let mut group = card_group(height, theme);

    let mut title = label(16, 14, INNER_W, 26, "📊 Score de Segurança", 18, theme.text());
    title.set_label_font(Font::HelveticaBold);

    let score_color = if score.score >= 80 {
        theme.priority_color(Priority::Low)
    } else if score.score >= 60 {
        theme.priority_color(Priority::Medium)
    } else {
        theme.priority_color(Priority::High)
    };
    let mut value = label(
        16,
        48,
        INNER_W,
        36,
        &format!("{} / 100 — Nota: {}", score.score, score.grade),
        24,
        score_color,
    );
    value.set_label_font(Font::HelveticaBold);
    value.set_tooltip("Score calculado a partir dos alertas e das configurações do sistema");

    label(
        16,
        90,
        INNER_W,
        20,
        &format!(
            "Total de Alertas: {} | Críticos: {} | Avisos: {} | Status: {}",
            summary.total_alerts,
            summary.critical_alerts,
            summary.warning_alerts,
            summary.security_status
        ),
        12,
        theme.muted_text(),
    );

    let mut y = 122;
    let mut heading = label(16, y, INNER_W, 20, "Deduções:", 13, theme.text());
    heading.set_label_font(Font::HelveticaBold);
    y += 24;
    for item in &deductions {
        label(32, y, INNER_W - 16, 18, item, 12, theme.muted_text());
        y += 18;
    }
    y += 10;
    let mut heading = label(16, y, INNER_W, 20, "Bônus:", 13, theme.text());
    heading.set_label_font(Font::HelveticaBold);
    y += 24;
    for item in &bonus {
        label(32, y, INNER_W - 16, 18, item, 12, theme.muted_text());
        y += 18;
    }
    y += 14;

    action_button(
        16,
        y,
        220,
        "📄 Ver JSON Completo",
        "Abrir os dados brutos do relatório inteiro",
        Message::ShowRawData("full".to_string()),
        sender,
    );

    group.end();
    group
}

fn metric_card(
    report: &Report,
    id: &'static str,
    theme: &Theme,
    sender: &Sender<Message>,
) -> fltk::group::Group {
    let rows = report.section_summary(id);
    let row_count = rows.len().max(1) as i32;
    let height = 14 + 26 + 10 + row_count * 20 + 14 + 32 + 14;
    let mut group = card_group(height, theme);

    let mut title = label(16, 14, INNER_W, 26, report::card_title(id), 16, theme.text());
    title.set_label_font(Font::HelveticaBold);

    let mut y = 50;
    if rows.is_empty() {
        label(
            16,
            y,
            INNER_W,
            20,
            "Sem resumo disponível — consulte os dados brutos.",
            12,
            theme.muted_text(),
        );
        y += 20;
    }
    for (name, value) in &rows {
        label(16, y, INNER_W, 20, &format!("• {name}: {value}"), 12, theme.text());
        y += 20;
    }
    y += 14;

    action_button(
        16,
        y,
        240,
        "📄 Ver Dados Brutos (JSON)",
        "Abrir os dados brutos desta seção",
        Message::ShowRawData(id.to_string()),
        sender,
    );
    action_button(
        272,
        y,
        180,
        "💾 Exportar Seção",
        "Salvar o texto desta seção em um arquivo",
        Message::ExportSection(id.to_string()),
        sender,
    );

    group.end();
    group
}

fn alerts_card(report: &Report, theme: &Theme, sender: &Sender<Message>) -> fltk::group::Group {
    let alerts = report.alerts();
    let row_count = alerts.len().max(1) as i32;
    let height = 14 + 26 + 10 + row_count * 20 + 14 + 32 + 14;
    let mut group = card_group(height, theme);

    let mut title = label(16, 14, INNER_W, 26, report::card_title("alerts"), 16, theme.text());
    title.set_label_font(Font::HelveticaBold);

    let mut y = 50;
    if alerts.is_empty() {
        label(16, y, INNER_W, 20, "✅ Nenhum alerta registrado.", 12, theme.muted_text());
        y += 20;
    }
    for alert in &alerts {
        label(
            16,
            y,
            INNER_W,
            20,
            &format!("[{}] {}", alert.severity.label(), alert.message),
            12,
            theme.severity_color(alert.severity),
        );
        y += 20;
    }
    y += 14;

    action_button(
        16,
        y,
        240,
        "📄 Ver Dados Brutos (JSON)",
        "Abrir a lista completa de alertas",
        Message::ShowRawData("alerts".to_string()),
        sender,
    );
    action_button(
        272,
        y,
        180,
        "💾 Exportar Seção",
        "Salvar os alertas em um arquivo",
        Message::ExportSection("alerts".to_string()),
        sender,
    );

    group.end();
    group
}

fn recommendations_header(
    theme: &Theme,
    sender: &Sender<Message>,
) -> (fltk::group::Group, Vec<(PriorityFilter, Button)>) {
    let mut group = card_group(96, theme);

    let mut title = label(16, 14, INNER_W, 26, "💡 Recomendações", 16, theme.text());
    title.set_label_font(Font::HelveticaBold);

    let filters = [
        PriorityFilter::All,
        PriorityFilter::Only(Priority::High),
        PriorityFilter::Only(Priority::Medium),
        PriorityFilter::Only(Priority::Low),
    ];
    let mut buttons = Vec::new();
    let mut x = 16;
    for filter in filters {
        let mut btn = Button::new(x, 50, 100, 30, None);
        btn.set_label(filter.label());
        btn.set_label_size(12);
        btn.set_tooltip("Filtrar recomendações por prioridade");
        btn.set_callback({
            let s = *sender;
            move |_| s.send(Message::FilterRecommendations(filter))
        });
        buttons.push((filter, btn));
        x += 110;
    }

    group.end();
    (group, buttons)
}

fn recommendation_card(rec: &Recommendation, theme: &Theme) -> fltk::group::Group {
    let mut group = card_group(84, theme);

    let mut badge = Frame::new(16, 14, 80, 22, None);
    badge.set_label(rec.priority.label());
    badge.set_label_size(11);
    badge.set_label_color(Color::White);
    badge.set_frame(FrameType::FlatBox);
    badge.set_color(theme.priority_color(rec.priority));

    let mut title = label(108, 14, INNER_W - 92, 22, &rec.title, 13, theme.text());
    title.set_label_font(Font::HelveticaBold);

    label(16, 42, INNER_W, 34, &rec.description, 12, theme.muted_text());

    group.end();
    group
}

fn note_card(text: &str, theme: &Theme) -> fltk::group::Group {
    let mut group = card_group(48, theme);
    label(16, 14, INNER_W, 20, text, 12, theme.muted_text());
    group.end();
    group
}

fn disclaimer_card(theme: &Theme) -> fltk::group::Group {
    let mut group = card_group(76, theme);
    let mut title = label(16, 12, INNER_W, 20, "ℹ️ Sobre esta Análise", 13, theme.text());
    title.set_label_font(Font::HelveticaBold);
    label(
        16,
        36,
        INNER_W,
        32,
        "Relatório gerado localmente pelo security monitor, sem envio de dados. \
         Consulte os dados brutos de cada seção para a análise completa.",
        11,
        theme.muted_text(),
    );
    group.end();
    group
}
