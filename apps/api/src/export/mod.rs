//! Export: writes the raw analysis markdown as a standalone printable
//! HTML document in the configured export directory.
//!
//! The exported document is the unparsed model response, independent of
//! the structured report the parser produces.

use std::path::{Path, PathBuf};

use chrono::Local;
use pulldown_cmark::{html, Parser};

use crate::errors::AppError;

/// Converts analysis markdown to an HTML fragment.
pub fn render_html(markdown: &str) -> String {
    let parser = Parser::new(markdown);
    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

/// Wraps the rendered fragment in a minimal print-ready page.
fn wrap_document(body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n\
         <title>Resume Match Analysis</title>\n\
         <style>\n\
         body {{ font-family: Georgia, serif; max-width: 48rem; margin: 2rem auto; line-height: 1.5; }}\n\
         h1, h2, h3 {{ font-family: Helvetica, Arial, sans-serif; }}\n\
         @media print {{ body {{ margin: 0; }} }}\n\
         </style>\n</head>\n<body>\n{body}</body>\n</html>\n"
    )
}

/// Renders the markdown and writes `analysis_<timestamp>.html` into
/// `export_dir`, creating the directory if needed. Returns the written
/// path.
pub fn export_analysis(markdown: &str, export_dir: &Path) -> Result<PathBuf, AppError> {
    std::fs::create_dir_all(export_dir).map_err(|e| {
        AppError::Render(format!(
            "failed to create export directory '{}': {e}",
            export_dir.display()
        ))
    })?;

    let timestamp = Local::now().format("%Y%m%d_%H%M%S");
    let path = export_dir.join(format!("analysis_{timestamp}.html"));

    let document = wrap_document(&render_html(markdown));
    std::fs::write(&path, document)
        .map_err(|e| AppError::Render(format!("failed to write '{}': {e}", path.display())))?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_markdown_structure_to_html() {
        let html = render_html("**Score: 85/100**\n\n- Python\n- SQL");
        assert!(html.contains("<strong>Score: 85/100</strong>"));
        assert!(html.contains("<li>Python</li>"));
        assert!(html.contains("<li>SQL</li>"));
    }

    #[test]
    fn exported_file_is_a_complete_html_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = export_analysis("**Match Summary:**\ngood fit", dir.path()).unwrap();

        let file_name = path.file_name().unwrap().to_string_lossy();
        assert!(file_name.starts_with("analysis_"));
        assert!(file_name.ends_with(".html"));

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("<!DOCTYPE html>"));
        assert!(contents.contains("good fit"));
    }

    #[test]
    fn export_creates_missing_directories() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("out").join("reports");
        let path = export_analysis("text", &nested).unwrap();
        assert!(path.exists());
    }
}
