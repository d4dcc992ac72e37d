pub mod credentials;
pub mod net;

// Re-exports for convenience
pub use credentials::{
    Credential, CredentialSource, EnvCredentials, NoCredentials, StaticCredentials,
};
pub use net::{
    default_http_client, parse_base_url, Envelope, GatewayError, HttpRecordGateway, RecordGateway,
};
