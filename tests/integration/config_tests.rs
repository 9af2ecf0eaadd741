//! Configuration and catalog loading

#[cfg(test)]
mod tests {
    use crate::common::fixtures::shipped_catalog_json;
    use std::io::Write;
    use tempfile::NamedTempFile;
    use tuneline::Config;
    use tuneline::config::UnmatchedPolicy;
    use tuneline::core::catalog::Catalog;

    #[tokio::test]
    async fn test_example_config_parses() {
        let config = Config::from_file(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/config/service.yaml.example"
        ))
        .await
        .unwrap();

        assert_eq!(config.server().port, 5000);
        assert_eq!(config.commands().unmatched, UnmatchedPolicy::DefaultCommand);
        assert_eq!(config.commands().dispatch_timeout, 120);
        assert_eq!(config.sessions().path.as_deref(), Some("config/sessions.yaml"));
    }

    #[test]
    fn test_shipped_catalog() {
        let catalog =
            Catalog::from_json_str(&shipped_catalog_json(), "https://social.example.com/api/")
                .unwrap();

        let names: Vec<&str> = catalog.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["create post", "search user", "search song"]);
        assert_eq!(
            catalog.first().url_template,
            "https://social.example.com/api/posts/create"
        );
        assert_eq!(catalog.get(2).unwrap().placeholders(), vec!["song".to_string()]);
    }

    #[tokio::test]
    async fn test_catalog_file_with_gap_in_ids_is_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(
            br#"[{"id": 0, "name": "a", "description": "a", "url": "https://x/a", "method": "GET"},
                 {"id": 2, "name": "b", "description": "b", "url": "https://x/b", "method": "GET"}]"#,
        )
        .unwrap();

        assert!(Catalog::load(file.path(), "https://x/").await.is_err());
    }

    #[tokio::test]
    async fn test_restrict_without_base_url_is_invalid() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"commands:\n  base_url: \"\"\n  restrict_to_base_url: true\n")
            .unwrap();

        assert!(Config::from_file(file.path()).await.is_err());
    }
}
