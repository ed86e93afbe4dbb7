use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use anyhow::Context;
use meal_explore::dataset::Dataset;

mod api;
mod config;

async fn load_dataset(cfg: &config::Config) -> anyhow::Result<Dataset> {
    let Some(path) = &cfg.dataset_path else {
        return Dataset::bundled();
    };

    let json = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("fail to read dataset {}", path.display()))?;
    Dataset::from_json(&json).with_context(|| format!("fail to load dataset {}", path.display()))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(tracing::Level::INFO)
        .with_ansi(true)
        .with_file(false)
        .pretty()
        .finish();
    tracing::subscriber::set_global_default(subscriber).context("fail to setup logging")?;

    let cfg = config::Config::load()?;
    let state = web::Data::new(api::ApiState::new(load_dataset(&cfg).await?));
    let origin = cfg.allowed_origin.clone();

    tracing::info!("listening on {}:{}", cfg.bind_addr, cfg.port);
    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(
                Cors::default()
                    .allowed_origin(&origin)
                    .allow_any_method()
                    .allow_any_header(),
            )
            .configure(api::routes)
    })
    .bind((cfg.bind_addr.as_str(), cfg.port))
    .with_context(|| format!("fail to bind {}:{}", cfg.bind_addr, cfg.port))?
    .run()
    .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn config(dataset_path: Option<std::path::PathBuf>) -> config::Config {
        config::Config {
            bind_addr: "127.0.0.1".to_string(),
            port: 0,
            allowed_origin: "http://localhost:3000".to_string(),
            dataset_path,
        }
    }

    #[tokio::test]
    async fn test_load_dataset_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"restaurants": [{{"id": 42, "name": "File Kitchen", "category": "Fusion",
                "rating": 4.9, "deliveryTime": "5-10", "image": ""}}]}}"#
        )
        .unwrap();

        let dataset = load_dataset(&config(Some(file.path().to_path_buf())))
            .await
            .unwrap();
        assert_eq!(dataset.restaurants().len(), 1);
        assert_eq!(dataset.restaurants()[0].name, "File Kitchen");
    }

    #[tokio::test]
    async fn test_load_dataset_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.json");
        let err = load_dataset(&config(Some(missing))).await.unwrap_err();
        assert!(err.to_string().starts_with("fail to read dataset"));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        let err = load_dataset(&config(Some(file.path().to_path_buf())))
            .await
            .unwrap_err();
        assert!(err.to_string().starts_with("fail to load dataset"));
    }

    #[tokio::test]
    async fn test_load_bundled_dataset_without_path() {
        let dataset = load_dataset(&config(None)).await.unwrap();
        assert_eq!(dataset.restaurants().len(), 6);
    }
}
