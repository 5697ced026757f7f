use actix_web::http::Uri;
use std::env;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreBackend {
    MongoDB { uri: String, database: Option<String> },
    Memory,
}

/// Origens liberadas no CORS
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllowedOrigins {
    /// `*` ou variável ausente: qualquer origem
    Any,
    List(Vec<String>),
}

impl AllowedOrigins {
    fn parse(raw: &str) -> Result<Self, String> {
        let origins: Vec<&str> = raw
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .collect();

        if origins.is_empty() || origins.contains(&"*") {
            return Ok(AllowedOrigins::Any);
        }

        origins
            .into_iter()
            .map(|origin| validate_origin(origin).map(|_| origin.to_string()))
            .collect::<Result<Vec<_>, _>>()
            .map(AllowedOrigins::List)
    }
}

/// Origem no formato `scheme://host[:port]`, sem path
fn validate_origin(origin: &str) -> Result<(), String> {
    let invalid = || {
        format!(
            "ALLOWED_ORIGINS entry '{}' is not a valid origin (expected scheme://host[:port])",
            origin
        )
    };

    let uri: Uri = origin.parse().map_err(|_| invalid())?;
    let scheme_ok = matches!(uri.scheme_str(), Some("http") | Some("https"));
    let path_ok = matches!(uri.path(), "" | "/") && uri.query().is_none();

    if scheme_ok && uri.authority().is_some() && path_ok && !origin.ends_with('/') {
        Ok(())
    } else {
        Err(invalid())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub store: StoreBackend,
    pub allowed_origins: AllowedOrigins,
}

impl Config {
    /// Lê a configuração das variáveis de ambiente (após `dotenv()`)
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|_| format!("PORT must be a valid port number, got '{}'", raw))?,
            None => DEFAULT_PORT,
        };

        let store = match lookup("USER_STORE").as_deref().unwrap_or("mongodb") {
            "memory" => StoreBackend::Memory,
            "mongodb" => {
                let uri = lookup("MONGO_URI")
                    .or_else(|| lookup("DATABASE_URL"))
                    .ok_or("MONGO_URI (or DATABASE_URL) must be set when USER_STORE=mongodb")?;
                StoreBackend::MongoDB {
                    uri,
                    database: lookup("MONGO_DATABASE"),
                }
            }
            other => {
                return Err(format!(
                    "USER_STORE must be 'mongodb' or 'memory', got '{}'",
                    other
                ))
            }
        };

        let allowed_origins = match lookup("ALLOWED_ORIGINS") {
            Some(raw) => AllowedOrigins::parse(&raw)?,
            None => AllowedOrigins::Any,
        };

        Ok(Config {
            host,
            port,
            store,
            allowed_origins,
        })
    }
}
