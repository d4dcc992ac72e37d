use crate::error::ConsoleError;
use crate::favorites::{FavoriteChannel, FavoriteSubscription};
use salesdesk_core::{RecordId, Salesperson};
use std::sync::{Arc, Mutex, PoisonError};
use tokio::sync::mpsc::UnboundedSender;

/// Events a salesperson row sends to the list that owns it.
#[derive(Debug, Clone, PartialEq)]
pub enum RowEvent {
    FavoriteSelected { id: RecordId, name: String },
    DeleteRequested(RecordId),
    RaiseRequested(RecordId),
}

/// One row of the salespeople list.
///
/// Takes its record from the list controller and follows the favorite
/// channel on its own; user actions go out through `events`.
pub struct SalespersonRow {
    salesperson: Salesperson,
    favorites: FavoriteChannel,
    events: UnboundedSender<RowEvent>,
    favorite: Arc<Mutex<String>>,
    _subscription: FavoriteSubscription,
}

impl SalespersonRow {
    pub fn new(
        salesperson: Salesperson,
        favorites: &FavoriteChannel,
        events: UnboundedSender<RowEvent>,
    ) -> Self {
        let favorite = Arc::new(Mutex::new(String::new()));
        let sink = favorite.clone();
        let subscription = favorites.subscribe(move |value| {
            *sink.lock().unwrap_or_else(PoisonError::into_inner) = value.to_string();
        });
        Self {
            salesperson,
            favorites: favorites.clone(),
            events,
            favorite,
            _subscription: subscription,
        }
    }

    pub fn salesperson(&self) -> &Salesperson {
        &self.salesperson
    }

    /// Favorite as last delivered to this row by the channel.
    pub fn current_favorite(&self) -> String {
        self.favorite
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn is_favorite(&self) -> bool {
        let name = self.salesperson.favorite_name();
        !name.is_empty() && self.favorites.current() == name
    }

    /// Publish this salesperson as the favorite, then tell the owning list.
    pub fn select_favorite(&self) -> Result<(), ConsoleError> {
        let name = self.salesperson.favorite_name().to_string();
        self.favorites.publish(name.clone());
        self.emit(RowEvent::FavoriteSelected {
            id: self.salesperson.id,
            name,
        })
    }

    pub fn request_delete(&self) -> Result<(), ConsoleError> {
        self.emit(RowEvent::DeleteRequested(self.salesperson.id))
    }

    pub fn request_raise(&self) -> Result<(), ConsoleError> {
        self.emit(RowEvent::RaiseRequested(self.salesperson.id))
    }

    fn emit(&self, event: RowEvent) -> Result<(), ConsoleError> {
        self.events
            .send(event)
            .map_err(|_| ConsoleError::EventSinkClosed)
    }
}
