//! Composition root: wires configuration, transport, gateway and the
//! application services into one `App`.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use fxdesk_application::{ConversionOrchestrator, GlobalFaultReporter, LastConversions, NoticeBoard};
use fxdesk_core::config::RootConfig;
use fxdesk_core::fault::{FaultHandler, Notifier};
use fxdesk_core::history::ConversionHistory;
use fxdesk_infrastructure::{
    AuthenticatedTransport, ConfigService, ErrorClassifier, HttpConversionGateway, ReqwestTransport,
};

pub type Gateway = HttpConversionGateway<AuthenticatedTransport<ReqwestTransport>>;

#[derive(Parser, Debug, Default)]
#[command(name = "fxdesk")]
#[command(about = "fxdesk - Interactive currency conversion client", long_about = None)]
pub struct Args {
    /// Path to config.toml (defaults to the platform config directory)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Backend base URL
    #[arg(long)]
    pub backend_url: Option<String>,

    /// Quiet period after the last edit, in milliseconds
    #[arg(long)]
    pub debounce_ms: Option<u64>,

    /// Number of recent conversions shown by `history`
    #[arg(long)]
    pub history: Option<i64>,
}

impl Args {
    /// Flags win over file and environment settings.
    pub fn apply(&self, config: &mut RootConfig) {
        if let Some(url) = &self.backend_url {
            config.backend_url = url.clone();
        }
        if let Some(ms) = self.debounce_ms {
            config.debounce_ms = ms;
        }
        if let Some(take) = self.history {
            config.history_take = take;
        }
    }
}

pub struct App {
    pub config: RootConfig,
    pub orchestrator: Arc<ConversionOrchestrator<Gateway>>,
    pub history_view: LastConversions,
    pub notices: Arc<NoticeBoard>,
    pub classifier: Arc<ErrorClassifier>,
}

pub fn load_config(args: &Args) -> Result<RootConfig> {
    let service = match &args.config {
        Some(path) => ConfigService::with_path(path.clone()),
        None => ConfigService::new()?,
    };
    let mut config = service.load_with_env()?;
    args.apply(&mut config);
    tracing::info!("[Bootstrap] Loaded config {:?} from {:?}", config, service.path());
    Ok(config)
}

/// Builds the application graph. Must run inside the tokio runtime.
pub fn build(config: RootConfig) -> Result<App> {
    let classifier = Arc::new(ErrorClassifier::new());
    let transport = AuthenticatedTransport::new(
        ReqwestTransport::new(),
        config.credential().map(str::to_string),
    )
    .with_classifier(Arc::clone(&classifier));
    let gateway = HttpConversionGateway::new(&config.backend_url, transport)?;

    let notices = Arc::new(NoticeBoard::new());
    let faults: Arc<dyn FaultHandler> = Arc::new(GlobalFaultReporter::new(
        Arc::clone(&notices) as Arc<dyn Notifier>,
    ));

    let history = ConversionHistory::new();
    let orchestrator = Arc::new(ConversionOrchestrator::new(
        gateway,
        history.clone(),
        faults,
        config.quiet_period(),
    ));
    let history_view = LastConversions::new(history, config.history_take);

    Ok(App {
        config,
        orchestrator,
        history_view,
        notices,
        classifier,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_config() {
        let args = Args::parse_from([
            "fxdesk",
            "--backend-url",
            "http://rates.internal:9000",
            "--debounce-ms",
            "250",
            "--history",
            "10",
        ]);
        let mut config = RootConfig::default();
        args.apply(&mut config);

        assert_eq!(config.backend_url, "http://rates.internal:9000");
        assert_eq!(config.debounce_ms, 250);
        assert_eq!(config.history_take, 10);
    }

    #[test]
    fn test_absent_flags_keep_config() {
        let args = Args::parse_from(["fxdesk"]);
        let mut config = RootConfig::default();
        args.apply(&mut config);
        assert_eq!(config, RootConfig::default());
    }

    #[tokio::test]
    async fn test_build_rejects_invalid_backend_url() {
        let config = RootConfig {
            backend_url: "not a url".to_string(),
            ..RootConfig::default()
        };
        assert!(build(config).is_err());
    }
}
