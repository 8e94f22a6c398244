//! Pure formatting functions for UI output.
//!
//! Every block is printed with a blank line before and after it. Step and
//! skip notices are prefixed with `...`, errors with `!!`. Everything goes
//! to stdout.

use console::style;

use crate::domain::DerivedNames;

/// Print text surrounded by blank lines.
pub fn display(text: &str) {
    println!("\n{}\n", text);
}

/// Format and print a step or skip notice.
pub fn display_message(message: &str) {
    println!("\n{}\n", style(format!("...{}", message)).yellow());
}

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    println!("{}", format_error(message));
}

pub fn format_error(message: &str) -> String {
    format!("\n{}\n", style(format!("!! {}", message)).red().bold())
}

/// Text shown ahead of a confirmation prompt.
pub fn format_prompt(message: &str, default: bool) -> String {
    let choices = if default { "[Y/n]" } else { "[y/N]" };
    format!("\n> {} {}: ", message, choices)
}

/// Summary of the names computed for one major line.
///
/// # Example
/// ```text
/// MAJOR VERSION 39
/// ----------------------
/// Remote:           origin
/// Stable branches:  LAE_39_STABLE => LAE_1903_STABLE
/// Package branches: LAE_39_PACKAGE => LAE_1903_PACKAGE
/// Tags:             v3.9.2-LAE19.0.2[-base] => v3.9.3-LAE19.0.3[-base]
/// ```
pub fn format_major_header(names: &DerivedNames, remote: &str) -> String {
    format!(
        "MAJOR VERSION {}\n\
         ----------------------\n\
         Remote:           {}\n\
         Stable branches:  {} => {}\n\
         Package branches: {} => {}\n\
         Tags:             {}[-base] => {}[-base]",
        names.major,
        remote,
        names.branch_stable,
        names.beta_branch_stable,
        names.branch_package,
        names.beta_branch_package,
        names.old_lae_tag_package,
        names.new_lae_tag_package,
    )
}

pub fn display_major_header(names: &DerivedNames, remote: &str) {
    display(&style(format_major_header(names, remote)).bold().to_string());
}

/// Display configured major lines and the procedure vocabulary.
pub fn display_listing(majors: &[&str], procedures: &[(&str, &str)]) {
    println!("{}", style("Configured major versions:").bold());
    if majors.is_empty() {
        println!("  (none)");
    }
    for major in majors {
        println!("  - {}", major);
    }

    println!("\n{}", style("Commands:").bold());
    for (name, description) in procedures {
        println!("  {:<24}{}", name, description);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{derive, VersionLine};

    #[test]
    fn test_format_prompt_default_yes() {
        assert_eq!(format_prompt("Continue?", true), "\n> Continue? [Y/n]: ");
    }

    #[test]
    fn test_format_prompt_default_no() {
        assert_eq!(format_prompt("Continue?", false), "\n> Continue? [y/N]: ");
    }

    #[test]
    fn test_format_error_prefix() {
        let text = console::strip_ansi_codes(&format_error("Invalid command 'ship-it'."))
            .to_string();
        assert_eq!(text, "\n!! Invalid command 'ship-it'.\n");
    }

    #[test]
    fn test_major_header_lists_branches_and_tags() {
        let line = VersionLine::resolve("39", "3.9.2", None, "19.0.2", None).unwrap();
        let header = format_major_header(&derive(&line), "upstream");

        assert!(header.starts_with("MAJOR VERSION 39\n"));
        assert!(header.contains("Remote:           upstream"));
        assert!(header.contains("Stable branches:  LAE_39_STABLE => LAE_1903_STABLE"));
        assert!(header.contains("Package branches: LAE_39_PACKAGE => LAE_1903_PACKAGE"));
        assert!(header.contains("v3.9.2-LAE19.0.2[-base] => v3.9.3-LAE19.0.3[-base]"));
    }
}
