use crate::detail::SalespersonDetail;
use crate::domain::Route;
use crate::error::ConsoleError;
use crate::favorites::{FavoriteChannel, FavoriteDisplay};
use crate::list::{SalesController, SalespeopleController};
use crate::persistence::ConsoleSettings;
use crate::row::{RowEvent, SalespersonRow};
use salesdesk_core::Salesperson;
use salesdesk_infra::{CredentialSource, HttpRecordGateway, RecordGateway};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;
use tracing::debug;

/// Application-lifetime wiring: one gateway and one favorite channel, handed
/// to every controller and view the console builds.
pub struct Console {
    gateway: Arc<dyn RecordGateway>,
    favorites: FavoriteChannel,
}

/// A view opened from a route, with its controller already loaded.
pub enum View {
    Salespeople(SalespeopleController),
    Sales(SalesController),
    SalespersonDetail(SalespersonDetail),
}

impl Console {
    pub fn new(gateway: Arc<dyn RecordGateway>) -> Self {
        Self {
            gateway,
            favorites: FavoriteChannel::new(),
        }
    }

    pub fn from_settings(
        settings: &ConsoleSettings,
        credentials: Arc<dyn CredentialSource>,
    ) -> Result<Self, ConsoleError> {
        Self::connect(
            &settings.effective_base_url(),
            settings.request_timeout(),
            credentials,
        )
    }

    /// Console talking to the record service at `base_url` over HTTP.
    pub fn connect(
        base_url: &str,
        timeout: Duration,
        credentials: Arc<dyn CredentialSource>,
    ) -> Result<Self, ConsoleError> {
        let client = salesdesk_infra::default_http_client(timeout)
            .map_err(|e| ConsoleError::Settings(format!("cannot build HTTP client: {e}")))?;
        let gateway = HttpRecordGateway::new(client, base_url, credentials)?;
        debug!(url = %gateway.base_url(), "console connected");
        Ok(Self::new(Arc::new(gateway)))
    }

    pub fn gateway(&self) -> &Arc<dyn RecordGateway> {
        &self.gateway
    }

    pub fn favorites(&self) -> &FavoriteChannel {
        &self.favorites
    }

    pub fn sales(&self) -> SalesController {
        SalesController::new(self.gateway.clone())
    }

    pub fn salespeople(&self) -> SalespeopleController {
        SalespeopleController::new(self.gateway.clone())
    }

    pub fn favorite_display(&self) -> FavoriteDisplay {
        FavoriteDisplay::new(&self.favorites)
    }

    pub fn row(&self, salesperson: Salesperson, events: UnboundedSender<RowEvent>) -> SalespersonRow {
        SalespersonRow::new(salesperson, &self.favorites, events)
    }

    /// Build the view for `route` and run its initial load.
    ///
    /// List views keep their controller even when the first refresh fails;
    /// the failure is available from the controller's `last_error`.
    pub async fn open(&self, route: &Route) -> View {
        debug!(%route, "opening view");
        match route {
            Route::Salespeople => {
                let controller = self.salespeople();
                if let Err(e) = controller.refresh().await {
                    debug!(%route, "initial load failed: {e}");
                }
                View::Salespeople(controller)
            }
            Route::Sales => {
                let controller = self.sales();
                if let Err(e) = controller.refresh().await {
                    debug!(%route, "initial load failed: {e}");
                }
                View::Sales(controller)
            }
            Route::SalespersonDetail(id) => {
                View::SalespersonDetail(SalespersonDetail::open(id.clone(), self.gateway.as_ref()).await)
            }
        }
    }

    pub async fn open_path(&self, path: &str) -> Result<View, ConsoleError> {
        let route = Route::parse(path)?;
        Ok(self.open(&route).await)
    }
}
