use figment::Jail;
use ldk_config::LdkConfig;

#[test]
fn project_local_toml_overrides_defaults() {
    Jail::expect_with(|jail| {
        jail.create_dir(".logdeck")?;
        jail.create_file(
            ".logdeck/config.toml",
            r#"
                [api]
                base_url = "http://backend.internal/api"

                [general]
                max_table_width = 120
            "#,
        )?;

        let config: LdkConfig = LdkConfig::figment().extract()?;
        assert_eq!(config.api.base_url, "http://backend.internal/api");
        assert_eq!(config.general.max_table_width, Some(120));
        Ok(())
    });
}

#[test]
fn env_beats_project_toml() {
    Jail::expect_with(|jail| {
        jail.create_dir(".logdeck")?;
        jail.create_file(
            ".logdeck/config.toml",
            r#"
                [api]
                base_url = "http://from-toml/api"
            "#,
        )?;
        jail.set_env("LOGDECK_API__BASE_URL", "http://from-env/api");

        let config: LdkConfig = LdkConfig::figment().extract()?;
        assert_eq!(config.api.base_url, "http://from-env/api");
        Ok(())
    });
}
