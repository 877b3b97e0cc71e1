use super::report::PriorityFilter;

/// All messages that can be sent through the FLTK channel.
/// Each widget callback sends one of these; the dispatch loop in main
/// handles them.
#[derive(Debug, Clone)]
pub enum Message {
    // File
    OpenReport,
    ExportSection(String),
    PrintReport,
    Quit,

    // Raw-data viewer
    ShowRawData(String),
    CloseRawData,
    CopyRawData,
    RevertCopyFeedback(u32),

    // Report navigation & filtering
    ScrollToSection(String),
    ScrollStep { target: i32 },
    RevealVisibleSections,
    FilterRecommendations(PriorityFilter),

    // View & Help
    ToggleDarkMode,
    ShowAbout,
}
