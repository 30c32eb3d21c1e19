//! Conference server entry point
//!
//! Reads configuration from flags (or the environment), wires the real
//! service implementations together and serves until Ctrl+C.

use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;

use conference_server::{
    ConferenceServer, InMemoryDatastore, MokaAnnouncementCache, NearlySoldOutAnnouncementSource, ServerResult,
    SmtpMailer,
};
use shared::messages::config::{DEFAULT_APP_ID, DEFAULT_MAIL_DOMAIN};
use shared::{CacheConfig, ServerConfig, SmtpConfig, logging};

const COMPONENT: &str = "conference-server";

/// Command line arguments; every flag can also come from the environment
#[derive(Parser, Debug)]
#[command(name = "conference-server")]
#[command(about = "Conference backend task and cron handlers")]
struct Args {
    /// Port for HTTP server
    #[arg(long, env = "PORT", default_value = "8080")]
    port: u16,

    /// Interface to bind
    #[arg(long, env = "BIND_HOST", default_value = "127.0.0.1")]
    bind_host: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    log_level: String,

    /// JSON snapshot used to seed the in-memory datastore
    #[arg(long, env = "SEED_FILE")]
    seed_file: Option<PathBuf>,

    /// Application id used in the sender address
    #[arg(long, env = "APP_ID", default_value = DEFAULT_APP_ID)]
    app_id: String,

    /// Mail domain appended to the application id
    #[arg(long, env = "MAIL_DOMAIN", default_value = DEFAULT_MAIL_DOMAIN)]
    mail_domain: String,

    /// SMTP relay host; mail delivery fails when unset
    #[arg(long, env = "SMTP_HOST")]
    smtp_host: Option<String>,

    #[arg(long, env = "SMTP_PORT", default_value = "587")]
    smtp_port: u16,

    #[arg(long, env = "SMTP_USERNAME", default_value = "")]
    smtp_username: String,

    #[arg(long, env = "SMTP_PASSWORD", default_value = "", hide_env_values = true)]
    smtp_password: String,

    /// Maximum number of cached announcements
    #[arg(long, env = "CACHE_CAPACITY", default_value = "10000")]
    cache_capacity: u64,

    /// Expire cached announcements after this many seconds
    #[arg(long, env = "CACHE_TTL_SECS")]
    cache_ttl_secs: Option<u64>,
}

impl Args {
    fn into_config(self) -> ServerConfig {
        let smtp = self.smtp_host.map(|host| SmtpConfig {
            host,
            port: self.smtp_port,
            username: self.smtp_username,
            password: self.smtp_password,
        });

        ServerConfig {
            bind_host: self.bind_host,
            bind_port: self.port,
            app_id: self.app_id,
            mail_domain: self.mail_domain,
            seed_file: self.seed_file,
            smtp,
            cache: CacheConfig {
                max_capacity: self.cache_capacity,
                ttl_seconds: self.cache_ttl_secs,
            },
        }
    }
}

#[tokio::main]
async fn main() -> ServerResult<()> {
    // A missing .env file is fine
    dotenv::dotenv().ok();

    let args = Args::parse();
    logging::init_tracing(Some(&args.log_level));

    let config = args.into_config();
    config.validate()?;

    logging::log_startup(COMPONENT, &format!("conference server on {}", config.bind_address()));

    let datastore = match &config.seed_file {
        Some(path) => InMemoryDatastore::from_seed_file(path).await?,
        None => InMemoryDatastore::new(),
    };
    let datastore = Arc::new(datastore);

    let mailer = SmtpMailer::from_config(config.smtp.as_ref())?;
    if !mailer.is_enabled() {
        tracing::warn!("⚠️ No SMTP relay configured, confirmation emails will fail");
    }

    let cache = MokaAnnouncementCache::new(&config.cache);
    let announcement_source = NearlySoldOutAnnouncementSource::new(Arc::clone(&datastore));

    let server = ConferenceServer::new(config, datastore, cache, mailer, announcement_source);

    if let Err(e) = server.run().await {
        logging::log_error(COMPONENT, "Conference server", &e);
        return Err(e);
    }

    logging::log_success(COMPONENT, "Conference server stopped gracefully");
    Ok(())
}
