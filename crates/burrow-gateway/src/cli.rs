use clap::{Parser, ValueEnum};
use std::fmt::{Display, Formatter};
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::middleware::DEFAULT_ALLOW_ORIGIN;

pub const LISTEN_ADDR_ENV: &str = "BURROW_LISTEN_ADDR";
pub const PUBLIC_BASE_URL_ENV: &str = "BURROW_PUBLIC_BASE_URL";
pub const CORS_ALLOW_ORIGIN_ENV: &str = "BURROW_CORS_ALLOW_ORIGIN";
pub const STORAGE_BACKEND_ENV: &str = "BURROW_STORAGE_BACKEND";
pub const DATABASE_PATH_ENV: &str = "BURROW_DATABASE_PATH";
pub const SEED_SQL_ENV: &str = "BURROW_SEED_SQL";
pub const LOG_FORMAT_ENV: &str = "BURROW_LOG_FORMAT";

pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_PUBLIC_BASE_URL: &str = "http://localhost:8080";
pub const DEFAULT_DATABASE_PATH: &str = "./data/database.sqlite3";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StorageBackendArg {
    #[value(name = "sqlite")]
    Sqlite,
    #[value(name = "in-memory")]
    InMemory,
}

impl Display for StorageBackendArg {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageBackendArg::Sqlite => write!(f, "sqlite"),
            StorageBackendArg::InMemory => write!(f, "in-memory"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable lines.
    Pretty,
    /// One JSON object per line.
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "burrow", about = "A minimal URL shortener")]
pub struct CLI {
    #[arg(long, env = LISTEN_ADDR_ENV, default_value = DEFAULT_LISTEN_ADDR)]
    pub listen_addr: SocketAddr,

    /// Prefix of the short links handed back to clients.
    #[arg(long, env = PUBLIC_BASE_URL_ENV, default_value = DEFAULT_PUBLIC_BASE_URL)]
    pub public_base_url: String,

    #[arg(long, env = CORS_ALLOW_ORIGIN_ENV, default_value = DEFAULT_ALLOW_ORIGIN)]
    pub cors_allow_origin: String,

    #[arg(
        long,
        env = STORAGE_BACKEND_ENV,
        value_enum,
        default_value_t = StorageBackendArg::Sqlite
    )]
    pub storage: StorageBackendArg,

    #[arg(long, env = DATABASE_PATH_ENV, default_value = DEFAULT_DATABASE_PATH)]
    pub database_path: PathBuf,

    /// SQL script executed against the store once at startup.
    #[arg(long, env = SEED_SQL_ENV)]
    pub seed_sql: Option<PathBuf>,

    #[arg(long, env = LOG_FORMAT_ENV, value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,
}

impl CLI {
    /// Checks combinations of flags clap cannot express on its own.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.seed_sql.is_some() && self.storage != StorageBackendArg::Sqlite {
            anyhow::bail!("--seed-sql requires the sqlite storage backend");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_fixed_deployment() {
        let cli = CLI::try_parse_from(["burrow"]).unwrap();

        assert_eq!(cli.listen_addr, "0.0.0.0:8080".parse().unwrap());
        assert_eq!(cli.public_base_url, "http://localhost:8080");
        assert_eq!(cli.cors_allow_origin, "http://localhost:3000");
        assert_eq!(cli.storage, StorageBackendArg::Sqlite);
        assert_eq!(cli.database_path, PathBuf::from("./data/database.sqlite3"));
        assert_eq!(cli.seed_sql, None);
        assert_eq!(cli.log_format, LogFormat::Pretty);
    }

    #[test]
    fn flags_override_defaults() {
        let cli = CLI::try_parse_from([
            "burrow",
            "--listen-addr",
            "127.0.0.1:9000",
            "--storage",
            "in-memory",
            "--seed-sql",
            "data/load.sql",
            "--log-format",
            "json",
        ])
        .unwrap();

        assert_eq!(cli.listen_addr, "127.0.0.1:9000".parse().unwrap());
        assert_eq!(cli.storage, StorageBackendArg::InMemory);
        assert_eq!(cli.seed_sql, Some(PathBuf::from("data/load.sql")));
        assert_eq!(cli.log_format, LogFormat::Json);
    }

    #[test]
    fn seed_sql_requires_sqlite() {
        let cli =
            CLI::try_parse_from(["burrow", "--storage", "in-memory", "--seed-sql", "load.sql"])
                .unwrap();
        assert!(cli.validate().is_err());

        let cli = CLI::try_parse_from(["burrow", "--seed-sql", "load.sql"]).unwrap();
        assert!(cli.validate().is_ok());

        let cli = CLI::try_parse_from(["burrow", "--storage", "in-memory"]).unwrap();
        assert!(cli.validate().is_ok());
    }

    #[test]
    fn unknown_backend_is_rejected() {
        assert!(CLI::try_parse_from(["burrow", "--storage", "mysql"]).is_err());
    }

    #[test]
    fn cli_is_well_formed() {
        use clap::CommandFactory;
        CLI::command().debug_assert();
    }
}
