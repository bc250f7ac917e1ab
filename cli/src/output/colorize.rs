use linkstash::models::{Bookmark, Folder};
use owo_colors::OwoColorize;

pub trait Colorize {
    fn to_colored(&self) -> String;
}

pub struct ColorizeBookmark<'a>(pub &'a Bookmark);

impl<'a> Colorize for ColorizeBookmark<'a> {
    fn to_colored(&self) -> String {
        let bookmark = self.0;
        let mut s = String::new();
        s.push_str(&format!(
            "{} {}\n",
            bookmark.title.bold().green(),
            format!("({})", bookmark.folder_id).cyan()
        ));
        s.push_str(&format!("  {} {}\n", ">".red(), bookmark.url.yellow()));

        // Only show description if non-empty
        if !bookmark.description.trim().is_empty() {
            s.push_str(&format!("  {} {}\n", "+".red(), bookmark.description));
        }
        if !bookmark.notes.trim().is_empty() {
            s.push_str(&format!("  {} {}\n", "~".red(), bookmark.notes));
        }
        if !bookmark.tags.is_empty() {
            s.push_str(&format!(
                "  {} {}\n",
                "#".red(),
                bookmark.tags.join(", ").blue()
            ));
        }
        s.push_str(&format!(
            "  {} {}  {}\n",
            "@".red(),
            bookmark.id.dimmed(),
            bookmark.created_at.format("%Y-%m-%d").dimmed()
        ));
        s
    }
}

pub struct ColorizeFolder<'a>(pub &'a Folder);

impl<'a> Colorize for ColorizeFolder<'a> {
    fn to_colored(&self) -> String {
        let folder = self.0;
        format!(
            "{:>4}  {} {} {}",
            folder.count.bright_blue(),
            color_dot(&folder.color),
            folder.name.bold(),
            format!("({})", folder.id).dimmed()
        )
    }
}

/// Map the folder's presentational color string onto a terminal dot. The
/// engine treats the value as opaque; unknown names render white.
fn color_dot(color: &str) -> String {
    match color {
        "blue" => format!("{}", "●".blue()),
        "purple" | "magenta" => format!("{}", "●".magenta()),
        "green" => format!("{}", "●".green()),
        "red" => format!("{}", "●".red()),
        "yellow" => format!("{}", "●".yellow()),
        "gray" | "grey" => format!("{}", "●".bright_black()),
        _ => format!("{}", "●".white()),
    }
}
