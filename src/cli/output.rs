//! Output formatting utilities

use crate::application::Logger;

/// Logger writing to stderr, injected into the manipulator by `main`.
#[derive(Debug, Default)]
pub struct ConsoleLogger;

impl Logger for ConsoleLogger {
    fn error(&self, message: &str) {
        eprintln!("error: {message}");
    }
}

/// Format a list of tag names for display
pub fn format_tag_list(tags: &[String]) -> String {
    if tags.is_empty() {
        return "No tags found".to_string();
    }

    let mut output = String::new();
    for tag in tags {
        output.push_str(tag);
        output.push('\n');
    }
    output
}

/// Format a list of input file paths for display
pub fn format_file_list(files: &[String]) -> String {
    if files.is_empty() {
        return "No input files found".to_string();
    }

    let mut output = String::new();
    for file in files {
        output.push_str(file);
        output.push('\n');
    }
    output
}
