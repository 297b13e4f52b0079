//! Configuration view

use crate::config::{ContactsPaths, Settings};

/// Format the resolved paths and current settings
pub fn format_config(paths: &ContactsPaths, settings: &Settings) -> String {
    let mut output = String::new();

    output.push_str("Contact Book Configuration\n");
    output.push_str("==========================\n");
    output.push_str(&format!(
        "Config directory: {}\n",
        paths.base_dir().display()
    ));
    output.push_str(&format!(
        "Address book:     {}\n",
        paths.book_file().display()
    ));
    output.push_str(&format!(
        "Audit log:        {}\n",
        paths.audit_log().display()
    ));
    output.push('\n');
    output.push_str("Settings:\n");
    output.push_str(&format!(
        "  Birthday window: {} days\n",
        settings.birthday_window_days
    ));
    output.push_str(&format!(
        "  Colored output:  {}\n",
        yes_no(settings.color_output)
    ));
    output.push_str(&format!(
        "  Audit log:       {}\n",
        if settings.audit_enabled { "Enabled" } else { "Disabled" }
    ));

    output
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "Yes"
    } else {
        "No"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_format_config() {
        let paths = ContactsPaths::with_base_dir(PathBuf::from("/tmp/contacts"));
        let settings = Settings {
            birthday_window_days: 10,
            audit_enabled: false,
            ..Settings::default()
        };

        let output = format_config(&paths, &settings);
        assert!(output.contains("addressbook.json"));
        assert!(output.contains("Birthday window: 10 days"));
        assert!(output.contains("Colored output:  Yes"));
        assert!(output.contains("Audit log:       Disabled"));
    }
}
