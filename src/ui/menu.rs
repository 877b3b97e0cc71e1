use fltk::{
    app::Sender,
    enums::Shortcut,
    menu::{MenuBar, MenuFlag},
    prelude::*,
};

use crate::app::messages::Message;

/// Sections offered in the export and navigation menus. Entries a report
/// does not contain degrade to a logged no-op when picked.
const MENU_SECTIONS: &[(&str, &str)] = &[
    ("ports", "Portas e Serviços"),
    ("authentication", "Autenticação"),
    ("firewall", "Firewall e SELinux"),
    ("vulnerabilities", "Vulnerabilidades"),
    ("network", "Rede"),
    ("permissions", "Permissões"),
    ("alerts", "Alertas"),
];

pub fn build_menu(menu: &mut MenuBar, sender: &Sender<Message>, initial_dark_mode: bool) {
    let s = sender;

    // File
    menu.add("File/Open Report...", Shortcut::Ctrl | 'o', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::OpenReport) });
    for (id, label) in MENU_SECTIONS {
        let path = format!("File/Export Section/{label}");
        menu.add(&path, Shortcut::None, MenuFlag::Normal, { let s = *s; let id = (*id).to_string(); move |_| s.send(Message::ExportSection(id.clone())) });
    }
    menu.add("File/Print Report", Shortcut::Ctrl | 'p', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::PrintReport) });
    menu.add("File/Quit", Shortcut::Ctrl | 'q', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::Quit) });

    // View
    let dm_flag = if initial_dark_mode { MenuFlag::Toggle | MenuFlag::Value } else { MenuFlag::Toggle };
    menu.add("View/Toggle Dark Mode", Shortcut::Ctrl | 'd', dm_flag, { let s = *s; move |_| s.send(Message::ToggleDarkMode) });

    // Navigate
    menu.add("Navigate/Score", Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::ScrollToSection("score".to_string())) });
    for (id, label) in MENU_SECTIONS {
        let path = format!("Navigate/{label}");
        menu.add(&path, Shortcut::None, MenuFlag::Normal, { let s = *s; let id = (*id).to_string(); move |_| s.send(Message::ScrollToSection(id.clone())) });
    }
    menu.add("Navigate/Recomendações", Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::ScrollToSection("recommendations".to_string())) });

    // Help
    menu.add("Help/About SecReport", Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::ShowAbout) });
}
