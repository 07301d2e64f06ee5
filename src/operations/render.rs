//! Per-file HTML rendering
//!
//! Reads one source file, optionally extracts an explicit title, and writes
//! the corresponding HTML page into the output directory.

use crate::utils::path::file_stem;
use anyhow::{Context as _, Result, anyhow};
use std::fs::{self, File};
use std::io::{BufWriter, Write as _};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Logical page derived from one source file
///
/// When the first line is followed by two empty lines it becomes the page
/// title and the body starts at the fourth line; otherwise the title is the
/// filename stem and the body is the whole file.
#[derive(Debug, Clone)]
pub struct Document {
    pub title: String,
    pub has_explicit_title: bool,
    pub body: Vec<String>,
}

impl Document {
    /// Build a document from a filename stem and the file's lines
    #[must_use]
    pub fn from_lines(stem: &str, mut lines: Vec<String>) -> Self {
        if lines.len() >= 3 && lines[1].is_empty() && lines[2].is_empty() {
            let title = lines.remove(0);
            lines.drain(..2);
            Self {
                title,
                has_explicit_title: true,
                body: lines,
            }
        } else {
            Self {
                title: stem.to_owned(),
                has_explicit_title: false,
                body: lines,
            }
        }
    }

    /// Render the document into its HTML page
    ///
    /// Content is inserted verbatim unless `escape` is set, in which case
    /// HTML special characters are entity-encoded. The buffer ends with
    /// `</html>` and no trailing newline; the writer appends the final
    /// terminator.
    #[must_use]
    pub fn to_html(&self, escape: bool) -> String {
        let mut html = String::new();
        html.push_str("<!doctype html>\n<html lang=\"en\">\n<head>\n");
        html.push_str("<meta charset=\"utf-8\">\n");
        html.push_str("<title>");
        push_text(&mut html, &self.title, escape);
        html.push_str("</title>\n");
        html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
        html.push_str("</head>\n<body>\n");

        if self.has_explicit_title {
            html.push_str("<h1>");
            push_text(&mut html, &self.title, escape);
            html.push_str("</h1>\n");
        }
        for line in &self.body {
            html.push_str("<p>");
            push_text(&mut html, line, escape);
            html.push_str("</p>\n");
        }

        html.push_str("</body>\n</html>");
        html
    }
}

fn push_text(html: &mut String, text: &str, escape: bool) {
    if escape {
        html_escape::encode_text_to_string(text, html);
    } else {
        html.push_str(text);
    }
}

/// Convert one source file into `<output_dir>/<stem>.html`
///
/// Emits a `Processed: <input> -> <output>` progress line to stdout and
/// returns the output path.
///
/// # Errors
///
/// Returns an error when the source cannot be read as UTF-8 text or the
/// output file cannot be written.
pub fn render_file(source: &Path, output_dir: &Path, escape: bool) -> Result<PathBuf> {
    let name = source
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| anyhow!("Source filename is not valid UTF-8: {}", source.display()))?;

    let text = fs::read_to_string(source)
        .with_context(|| format!("Failed to read input file: {}", source.display()))?;
    let lines: Vec<String> = text.lines().map(str::to_owned).collect();

    let document = Document::from_lines(file_stem(name), lines);
    debug!(
        "Rendering {} (explicit title: {})",
        name, document.has_explicit_title
    );
    let html = document.to_html(escape);

    let output_path = output_dir.join(format!("{}.html", file_stem(name)));
    let file = File::create(&output_path)
        .with_context(|| format!("Failed to create output file: {}", output_path.display()))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(html.as_bytes())
        .and_then(|()| writer.write_all(b"\n"))
        .and_then(|()| writer.flush())
        .with_context(|| format!("Failed to write output file: {}", output_path.display()))?;

    println!("Processed: {} -> {}", name, output_path.display());

    Ok(output_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(text: &str) -> Vec<String> {
        text.lines().map(str::to_owned).collect()
    }

    #[test]
    fn test_title_from_stem_without_blank_lines() {
        let document = Document::from_lines("hello", lines("Hello\n"));
        assert_eq!(document.title, "hello");
        assert!(!document.has_explicit_title);
        assert_eq!(document.body, vec!["Hello"]);
    }

    #[test]
    fn test_explicit_title_consumes_first_three_lines() {
        let document = Document::from_lines("note", lines("My Title\n\n\nfirst\n\nsecond\n"));
        assert_eq!(document.title, "My Title");
        assert!(document.has_explicit_title);
        assert_eq!(document.body, vec!["first", "", "second"]);
    }

    #[test]
    fn test_two_lines_never_form_an_explicit_title() {
        let document = Document::from_lines("short", lines("Title\n\n"));
        assert_eq!(document.title, "short");
        assert!(!document.has_explicit_title);
        assert_eq!(document.body, vec!["Title", ""]);
    }

    #[test]
    fn test_html_layout_without_heading() {
        let document = Document::from_lines("hello", lines("Hello\n"));
        assert_eq!(
            document.to_html(false),
            "<!doctype html>\n\
             <html lang=\"en\">\n\
             <head>\n\
             <meta charset=\"utf-8\">\n\
             <title>hello</title>\n\
             <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
             </head>\n\
             <body>\n\
             <p>Hello</p>\n\
             </body>\n\
             </html>"
        );
    }

    #[test]
    fn test_html_layout_with_heading_and_empty_paragraph() {
        let document = Document::from_lines("note", lines("My Title\n\n\nfirst\n\nsecond\n"));
        let html = document.to_html(false);

        assert!(html.contains("<title>My Title</title>\n"));
        assert!(html.contains("<h1>My Title</h1>\n"));
        assert!(html.contains("<p>first</p>\n<p></p>\n<p>second</p>\n"));
        assert_eq!(html.matches("<h1>").count(), 1);
    }

    #[test]
    fn test_verbatim_content_by_default() {
        let document = Document::from_lines("raw", lines("a <b>bold</b> & more\n"));
        let html = document.to_html(false);
        assert!(html.contains("<p>a <b>bold</b> & more</p>\n"));
    }

    #[test]
    fn test_escape_mode_encodes_entities() {
        let document = Document::from_lines("raw", lines("a <b>bold</b> & more\n"));
        let html = document.to_html(true);
        assert!(html.contains("<p>a &lt;b&gt;bold&lt;/b&gt; &amp; more</p>\n"));
    }

    #[test]
    fn test_crlf_input_matches_lf_input() {
        let crlf = Document::from_lines("note", lines("T\r\n\r\n\r\nbody\r\n"));
        let lf = Document::from_lines("note", lines("T\n\n\nbody\n"));
        assert_eq!(crlf.to_html(false), lf.to_html(false));
    }

    #[test]
    fn test_render_file_appends_trailing_newline() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let source = temp_dir.path().join("hello.txt");
        fs::write(&source, "Hello\n").unwrap();

        let output_path = render_file(&source, temp_dir.path(), false).unwrap();
        assert_eq!(output_path, temp_dir.path().join("hello.html"));

        let rendered = fs::read_to_string(&output_path).unwrap();
        assert!(rendered.starts_with("<!doctype html>"));
        assert!(rendered.ends_with("</html>\n"));
        assert!(!rendered.ends_with("</html>\n\n"));
    }
}
