use crate::{
    format::{
        json::JsonBookmark, plain::PlainBookmark, traits::BookmarkFormat, yaml::YamlBookmark,
    },
    output::colorize::{Colorize, ColorizeBookmark},
};
use linkstash::models::Bookmark;

pub mod json;
pub mod plain;
pub mod traits;
pub mod yaml;

#[derive(Clone, Copy)]
pub enum OutputFormat {
    Json,
    Yaml,
    Plain,
    Colored,
}

impl OutputFormat {
    pub fn from_string(format: &str) -> Self {
        match format {
            "json" => OutputFormat::Json,
            "yaml" | "yml" => OutputFormat::Yaml,
            "plain" => OutputFormat::Plain,
            _ => OutputFormat::Colored,
        }
    }

    pub fn print_bookmarks(self, records: &[&Bookmark], no_color: bool) {
        match self {
            OutputFormat::Json => {
                for b in records {
                    println!("{}", JsonBookmark(b).to_string());
                }
            }
            OutputFormat::Yaml => {
                for b in records {
                    println!("{}", YamlBookmark(b).to_string());
                }
            }
            OutputFormat::Plain => {
                for b in records {
                    println!("{}", PlainBookmark(b).to_string());
                }
            }
            OutputFormat::Colored => {
                for b in records {
                    if no_color {
                        println!("{}", PlainBookmark(b).to_string());
                    } else {
                        println!("{}", ColorizeBookmark(b).to_colored());
                    }
                }
            }
        }
    }
}
