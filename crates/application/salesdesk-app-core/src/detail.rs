use salesdesk_core::{FetchFailure, Salesperson};
use salesdesk_infra::{GatewayError, RecordGateway};
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailPhase {
    Loading,
    Resolved,
    Failed,
}

/// Single salesperson looked up by the id in the current route.
///
/// A lookup runs once; looking again means building a new detail.
/// Until it settles, `salesperson()` and `failure()` return blank values.
#[derive(Debug, Clone)]
pub struct SalespersonDetail {
    requested_id: String,
    phase: DetailPhase,
    salesperson: Salesperson,
    failure: FetchFailure,
}

impl SalespersonDetail {
    pub fn pending(requested_id: impl Into<String>) -> Self {
        Self {
            requested_id: requested_id.into(),
            phase: DetailPhase::Loading,
            salesperson: Salesperson::blank(),
            failure: FetchFailure::default(),
        }
    }

    /// Build the detail for `requested_id` and run its lookup.
    pub async fn open(requested_id: impl Into<String>, gateway: &dyn RecordGateway) -> Self {
        Self::pending(requested_id).load(gateway).await
    }

    /// Run the lookup. Has no effect once the detail has settled.
    pub async fn load(mut self, gateway: &dyn RecordGateway) -> Self {
        if self.phase != DetailPhase::Loading {
            return self;
        }

        match gateway.fetch_salesperson(&self.requested_id).await {
            Ok(envelope) => self.on_success(envelope.body.map(Salesperson::from)),
            Err(e) => self.on_error(&e),
        }
        self.on_complete();
        self
    }

    fn on_success(&mut self, found: Option<Salesperson>) {
        // An empty body still ends the lookup; the placeholder stays visible.
        if let Some(sp) = found {
            self.salesperson = sp;
        }
        self.phase = DetailPhase::Resolved;
    }

    fn on_error(&mut self, err: &GatewayError) {
        warn!(id = %self.requested_id, "salesperson lookup failed: {err}");
        self.failure = FetchFailure::new(self.requested_id.clone(), err.status().to_string());
        self.phase = DetailPhase::Failed;
    }

    fn on_complete(&self) {
        debug!(id = %self.requested_id, phase = ?self.phase, "salesperson lookup complete");
    }

    pub fn requested_id(&self) -> &str {
        &self.requested_id
    }

    pub fn phase(&self) -> DetailPhase {
        self.phase
    }

    pub fn salesperson(&self) -> &Salesperson {
        &self.salesperson
    }

    pub fn failure(&self) -> &FetchFailure {
        &self.failure
    }
}
