use std::env;

use thiserror::Error;

/// Realm the client talks to. Each realm is served from its own
/// `api.worldoftanks.*` host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Region {
    #[default]
    Na,
    Eu,
    Ru,
    Asia,
}

impl Region {
    pub fn as_str(&self) -> &'static str {
        match self {
            Region::Na => "na",
            Region::Eu => "eu",
            Region::Ru => "ru",
            Region::Asia => "asia",
        }
    }

    pub fn host(&self) -> String {
        format!("api.worldoftanks.{}", self.as_str())
    }
}

impl From<Region> for String {
    fn from(region: Region) -> Self {
        region.as_str().to_string()
    }
}

impl TryFrom<String> for Region {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "na" => Ok(Region::Na),
            "eu" => Ok(Region::Eu),
            "ru" => Ok(Region::Ru),
            "asia" => Ok(Region::Asia),
            _ => Err(format!("Unknown region: {}", value)),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    MissingVar(&'static str),

    #[error("invalid region: {0}")]
    InvalidRegion(String),
}

/// Immutable client configuration.
///
/// The application id is taken as-is; a bad credential is not rejected
/// locally and only surfaces once the remote call is made.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub application_id: String,
    pub region: Region,
    pub api_path: String,
    pub debug: bool,
}

impl ClientConfig {
    pub fn new(application_id: impl Into<String>) -> Self {
        Self {
            application_id: application_id.into(),
            region: Region::default(),
            api_path: "/wot".to_string(),
            debug: false,
        }
    }

    pub fn region(mut self, region: Region) -> Self {
        self.region = region;
        self
    }

    pub fn api_path(mut self, api_path: impl Into<String>) -> Self {
        self.api_path = api_path.into();
        self
    }

    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Build a configuration from the environment, loading a `.env` file
    /// first when present. `WOT_APPLICATION_ID` is required; `WOT_REGION`,
    /// `WOT_API_PATH` and `WOT_DEBUG` override the defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let application_id = env::var("WOT_APPLICATION_ID")
            .map_err(|_| ConfigError::MissingVar("WOT_APPLICATION_ID"))?;

        let mut config = Self::new(application_id);

        if let Ok(region) = env::var("WOT_REGION") {
            config.region = Region::try_from(region).map_err(ConfigError::InvalidRegion)?;
        }
        if let Ok(api_path) = env::var("WOT_API_PATH") {
            config.api_path = api_path;
        }
        if let Ok(debug) = env::var("WOT_DEBUG") {
            config.debug = matches!(debug.as_str(), "1" | "true" | "yes");
        }

        Ok(config)
    }
}
