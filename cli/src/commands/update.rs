use super::{AppContext, StashCommand};
use linkstash::error::{LinkstashError, Result};
use linkstash::models::BookmarkInput;

/// Field-update mode: options overlay the existing record, everything else
/// is carried over unchanged before the engine's full-field update runs.
#[derive(Debug, Clone)]
pub struct UpdateCommand {
    pub id: String,
    pub title: Option<String>,
    pub url: Option<String>,
    pub description: Option<String>,
    pub notes: Option<String>,
    pub tags: Option<String>,
    pub folder: Option<String>,
}

impl StashCommand for UpdateCommand {
    fn execute(&self, ctx: &mut AppContext) -> Result<bool> {
        let current = ctx
            .catalog
            .get_bookmark(&self.id)
            .ok_or_else(|| LinkstashError::BookmarkNotFound(self.id.clone()))?;

        let input = BookmarkInput {
            title: self.title.clone().unwrap_or_else(|| current.title.clone()),
            url: self.url.clone().unwrap_or_else(|| current.url.clone()),
            description: self
                .description
                .clone()
                .unwrap_or_else(|| current.description.clone()),
            notes: self.notes.clone().unwrap_or_else(|| current.notes.clone()),
            tags_raw: self
                .tags
                .clone()
                .unwrap_or_else(|| current.tags.join(", ")),
            folder_id: self
                .folder
                .clone()
                .unwrap_or_else(|| current.folder_id.clone()),
        };

        ctx.catalog.update_bookmark(&self.id, input)?;
        eprintln!("Updated bookmark {}", self.id);
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add::AddCommand;
    use crate::format::OutputFormat;
    use linkstash::config::Config;
    use linkstash::Catalog;

    struct TestEnv {
        catalog: Catalog,
        config: Config,
    }

    impl TestEnv {
        fn new() -> Self {
            let config = Config::default();
            let catalog = Catalog::new(config.folders.clone());
            Self { catalog, config }
        }

        fn ctx(&mut self) -> AppContext<'_> {
            AppContext {
                catalog: &mut self.catalog,
                config: &self.config,
                format: OutputFormat::Plain,
                no_color: true,
                limit: None,
            }
        }

        fn add_sample(&mut self) -> String {
            let cmd = AddCommand {
                title: "Example".to_string(),
                url: "https://example.com".to_string(),
                description: Some("Original description".to_string()),
                notes: Some("Original notes".to_string()),
                tags: Some("rust, docs".to_string()),
                folder: Some("dev".to_string()),
            };
            cmd.execute(&mut self.ctx()).unwrap();
            self.catalog.list_bookmarks()[0].id.clone()
        }
    }

    #[test]
    fn test_update_overlays_only_given_fields() {
        let mut env = TestEnv::new();
        let id = env.add_sample();

        let cmd = UpdateCommand {
            id: id.clone(),
            title: Some("Renamed".to_string()),
            url: None,
            description: None,
            notes: None,
            tags: None,
            folder: None,
        };
        cmd.execute(&mut env.ctx()).unwrap();

        let record = env.catalog.get_bookmark(&id).unwrap();
        assert_eq!(record.title, "Renamed");
        assert_eq!(record.url, "https://example.com");
        assert_eq!(record.description, "Original description");
        assert_eq!(record.tags, vec!["rust", "docs"]);
        assert_eq!(record.folder_id, "dev");
    }

    #[test]
    fn test_update_moves_folder_and_counts_follow() {
        let mut env = TestEnv::new();
        let id = env.add_sample();

        let cmd = UpdateCommand {
            id,
            title: None,
            url: None,
            description: None,
            notes: None,
            tags: None,
            folder: Some("design".to_string()),
        };
        cmd.execute(&mut env.ctx()).unwrap();

        let dev = env
            .catalog
            .list_folders()
            .iter()
            .find(|f| f.id == "dev")
            .unwrap()
            .count;
        let design = env
            .catalog
            .list_folders()
            .iter()
            .find(|f| f.id == "design")
            .unwrap()
            .count;
        assert_eq!((dev, design), (0, 1));
    }

    #[test]
    fn test_update_unknown_id_fails() {
        let mut env = TestEnv::new();
        let cmd = UpdateCommand {
            id: "ghost".to_string(),
            title: Some("x".to_string()),
            url: None,
            description: None,
            notes: None,
            tags: None,
            folder: None,
        };
        assert!(cmd.execute(&mut env.ctx()).is_err());
    }
}
