//! Plain-text export of a report section.

use std::fs;
use std::path::Path;

use super::error::Result;

/// File name the export offers for a section.
pub fn export_file_name(section_id: &str) -> String {
    format!("security-report-{section_id}.txt")
}

/// Write the exported text to the chosen path.
pub fn write_export(path: &Path, text: &str) -> Result<()> {
    fs::write(path, text)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_file_name() {
        assert_eq!(export_file_name("ports"), "security-report-ports.txt");
        assert_eq!(export_file_name("alerts"), "security-report-alerts.txt");
    }

    #[test]
    fn test_write_export() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(export_file_name("firewall"));
        write_export(&path, "🛡️ Firewall e SELinux\n").unwrap();
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "🛡️ Firewall e SELinux\n"
        );
    }

    #[test]
    fn test_write_export_into_missing_dir_fails() {
        let result = write_export(Path::new("/definitely/not/here/out.txt"), "x");
        assert!(result.is_err());
    }
}
