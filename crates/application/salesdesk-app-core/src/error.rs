use crate::domain::ListMode;
use salesdesk_infra::GatewayError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ConsoleError {
    #[error(transparent)]
    Gateway(#[from] GatewayError),
    #[error("{operation} is not available on a {mode} list")]
    ModeMismatch {
        operation: &'static str,
        mode: ListMode,
    },
    #[error("no view for route '{0}'")]
    UnknownRoute(String),
    #[error("row event receiver is gone")]
    EventSinkClosed,
    #[error("settings error: {0}")]
    Settings(String),
}
