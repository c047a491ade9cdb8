//! Console output formatter for settings records

use colored::Colorize;
use rdesk_domain::{ClientSettings, ConfigError, Role, ServerSettings, ShortcutList};
use serde::Serialize;
use std::path::Path;

const MASK: &str = "********";

/// Formats loaded settings for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format client settings. The password is masked.
    pub fn format_client(settings: &ClientSettings) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Client Settings"));
        output.push('\n');

        let password = if settings.password.is_empty() {
            ""
        } else {
            MASK
        };
        let accepted = if settings.agreement_accepted {
            "yes".green()
        } else {
            "no".yellow()
        };

        Self::push_section(
            &mut output,
            "Server",
            &[
                ("Host", settings.server_host.clone()),
                ("Port", settings.server_port.to_string()),
            ],
        );
        Self::push_section(&mut output, "Security", &[("Password", password.to_string())]);
        Self::push_section(
            &mut output,
            "Client",
            &[("Orientation", settings.orientation.to_string())],
        );
        Self::push_section(&mut output, "Agreement", &[("Accepted", accepted.to_string())]);

        output.push_str(&Self::footer());
        output
    }

    /// Format server settings including the shortcut bindings
    pub fn format_server(settings: &ServerSettings) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Server Settings"));
        output.push('\n');

        let monitor = &settings.monitor;
        let control = &settings.control;
        let defaults = &settings.defaults;

        Self::push_section(
            &mut output,
            "Server",
            &[
                ("Host", settings.server.host.clone()),
                ("Port", settings.server.port.to_string()),
            ],
        );
        Self::push_section(
            &mut output,
            "Monitor",
            &[
                ("MaxFPS", monitor.max_fps.to_string()),
                ("WidthDivisor", monitor.width_divisor.to_string()),
                ("HeightDivisor", monitor.height_divisor.to_string()),
            ],
        );
        Self::push_section(
            &mut output,
            "Control",
            &[
                ("MoveStep", control.move_step.to_string()),
                ("ScaleFactor", control.scale_factor.to_string()),
            ],
        );
        Self::push_section(&mut output, "Font", &[("Pattern", settings.font_pattern.clone())]);
        Self::push_section(
            &mut output,
            "Defaults",
            &[
                ("WindowTrackingEnabled", defaults.window_tracking_enabled.to_string()),
                ("WindowsScale", defaults.windows_scale.to_string()),
                ("DesktopScale", defaults.desktop_scale.to_string()),
                ("CursorCapturingEnabled", defaults.cursor_capturing_enabled.to_string()),
                ("ColorsInvertingEnabled", defaults.colors_inverting_enabled.to_string()),
            ],
        );
        Self::push_section(
            &mut output,
            "Stats",
            &[
                ("Enabled", settings.stats.enabled.to_string()),
                ("File", settings.stats.file.clone()),
            ],
        );

        output.push_str(&Self::section_header("Shortcuts"));
        output.push_str(&Self::shortcuts(&settings.shortcuts));

        output.push_str(&Self::footer());
        output
    }

    /// Format as JSON
    pub fn format_json<T: Serialize>(value: &T) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    }

    /// One-line report for a config file that loaded cleanly
    pub fn format_check_ok(role: Role, path: &Path) -> String {
        format!("{} {} config {}", "OK".green().bold(), role, path.display())
    }

    /// One-line report for a config file that failed to load
    pub fn format_check_error(role: Role, path: &Path, error: &ConfigError) -> String {
        format!(
            "{} {} config {}: {}",
            "ERROR".red().bold(),
            role,
            path.display(),
            error
        )
    }

    fn shortcuts(list: &ShortcutList) -> String {
        let mut output = format!("  {} of {} bound\n", list.len(), list.limit())
            .dimmed()
            .to_string();
        if list.is_empty() {
            output.push_str(&format!("  {}\n", "(none)".dimmed()));
            return output;
        }
        for binding in list {
            output.push_str(&format!(
                "  {:<24} {}\n",
                binding.hotkey.to_string(),
                binding.action.to_string().yellow()
            ));
        }
        output
    }

    fn push_section(output: &mut String, title: &str, rows: &[(&str, String)]) {
        output.push_str(&Self::section_header(title));
        for (label, value) in rows {
            output.push_str(&format!("  {:<24} {}\n", label, value));
        }
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n", format!("[{}]", title).cyan().bold())
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}
