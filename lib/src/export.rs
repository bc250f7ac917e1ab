use crate::error::{LinkstashError, Result};
use crate::models::Bookmark;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Trait for exporting bookmarks to different presentation formats
pub trait BookmarkExporter {
    fn export(&self, bookmarks: &[Bookmark], path: &Path) -> Result<()>;
}

/// HTML/Netscape Bookmark File exporter
pub struct HtmlExporter;

impl BookmarkExporter for HtmlExporter {
    fn export(&self, bookmarks: &[Bookmark], path: &Path) -> Result<()> {
        let mut file = File::create(path)?;
        writeln!(file, "<!DOCTYPE NETSCAPE-Bookmark-file-1>")?;
        writeln!(file, "<!-- This is an automatically generated file.")?;
        writeln!(file, "     It will be read and overwritten.")?;
        writeln!(file, "     DO NOT EDIT! -->")?;
        writeln!(
            file,
            "<META HTTP-EQUIV=\"Content-Type\" CONTENT=\"text/html; charset=UTF-8\">"
        )?;
        writeln!(file, "<TITLE>Bookmarks</TITLE>")?;
        writeln!(file, "<H1>Bookmarks</H1>")?;
        writeln!(file, "<DL><p>")?;

        for bookmark in bookmarks {
            writeln!(
                file,
                "    <DT><A HREF=\"{}\" TAGS=\"{}\" ADD_DATE=\"{}\">{}</A>",
                bookmark.url,
                bookmark.tags.join(","),
                bookmark.created_at.timestamp(),
                bookmark.title
            )?;
            if !bookmark.description.is_empty() {
                writeln!(file, "    <DD>{}", bookmark.description)?;
            }
        }

        writeln!(file, "</DL><p>")?;
        Ok(())
    }
}

/// Markdown exporter
pub struct MarkdownExporter;

impl BookmarkExporter for MarkdownExporter {
    fn export(&self, bookmarks: &[Bookmark], path: &Path) -> Result<()> {
        let mut file = File::create(path)?;
        for bookmark in bookmarks {
            writeln!(
                file,
                "[{}]({}) <!-- {} -->",
                bookmark.title,
                bookmark.url,
                bookmark.tags.join(",")
            )?;
        }
        Ok(())
    }
}

/// Export bookmarks to a file, format chosen by extension (html, md)
pub fn export_bookmarks(bookmarks: &[Bookmark], file_path: &str) -> Result<()> {
    let path = Path::new(file_path);
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");

    let exporter: Box<dyn BookmarkExporter> = match extension {
        "html" => Box::new(HtmlExporter),
        "md" => Box::new(MarkdownExporter),
        _ => {
            return Err(LinkstashError::Other(format!(
                "Unsupported export format: {}",
                extension
            )))
        }
    };

    exporter.export(bookmarks, path)
}
