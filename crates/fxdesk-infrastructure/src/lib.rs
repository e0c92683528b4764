pub mod config_service;
pub mod gateway;
pub mod http;
pub mod paths;

pub use config_service::ConfigService;
pub use gateway::HttpConversionGateway;
pub use http::{AuthenticatedTransport, ErrorClassifier, ReqwestTransport, Transport};
