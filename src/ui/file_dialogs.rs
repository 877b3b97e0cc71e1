use fltk::dialog::{FileDialogType, NativeFileChooser};

pub fn native_open_dialog(filter: &str) -> Option<String> {
    let mut chooser = NativeFileChooser::new(FileDialogType::BrowseFile);
    chooser.set_filter(filter);
    chooser.show(); // returns (), blocks until close
    let filename = chooser.filename();
    let s = filename.to_string_lossy();
    if s.is_empty() { None } else { Some(s.to_string()) }
}

pub fn native_save_dialog(filter: &str, preset_file: &str) -> Option<String> {
    let mut chooser = NativeFileChooser::new(FileDialogType::BrowseSaveFile);
    chooser.set_filter(filter);
    chooser.set_preset_file(preset_file);
    chooser.show(); // returns (), blocks until close
    let filename = chooser.filename();
    let s = filename.to_string_lossy();
    if s.is_empty() { None } else { Some(s.to_string()) }
}
