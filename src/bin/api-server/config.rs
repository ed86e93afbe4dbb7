use std::{env, fmt::Display, path::PathBuf, str::FromStr};

pub(super) struct Config {
    pub(super) bind_addr: String,
    pub(super) port: u16,
    pub(super) allowed_origin: String,
    /// bundled dataset is served when unset
    pub(super) dataset_path: Option<PathBuf>,
}

impl Config {
    pub(super) fn load() -> anyhow::Result<Self> {
        Ok(Self {
            bind_addr: try_load("BIND_ADDR", "127.0.0.1")?,
            port: try_load("PORT", "8080")?,
            allowed_origin: try_load("ALLOWED_ORIGIN", "http://localhost:3000")?,
            dataset_path: env::var_os("DATASET_PATH").map(PathBuf::from),
        })
    }
}

fn try_load<T: FromStr>(key: &str, default: &str) -> anyhow::Result<T>
where
    T::Err: Display,
{
    let value = env::var(key).unwrap_or_else(|_| {
        tracing::info!("{key} not set, using default: {default}");
        default.to_string()
    });
    value
        .parse()
        .map_err(|e| anyhow::anyhow!("invalid {key} value {value:?}: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_value_is_rejected() {
        env::set_var("MEAL_EXPLORE_TEST_BAD_PORT", "abc");
        let err = try_load::<u16>("MEAL_EXPLORE_TEST_BAD_PORT", "8080").unwrap_err();
        assert!(err
            .to_string()
            .starts_with("invalid MEAL_EXPLORE_TEST_BAD_PORT value \"abc\""));
    }

    #[test]
    fn test_unset_value_uses_default() {
        env::remove_var("MEAL_EXPLORE_TEST_UNSET_PORT");
        let port: u16 = try_load("MEAL_EXPLORE_TEST_UNSET_PORT", "8080").unwrap();
        assert_eq!(port, 8080);

        env::set_var("MEAL_EXPLORE_TEST_SET_PORT", "9090");
        let port: u16 = try_load("MEAL_EXPLORE_TEST_SET_PORT", "8080").unwrap();
        assert_eq!(port, 9090);
    }
}
