pub mod console;
pub mod detail;
pub mod domain;
pub mod error;
pub mod favorites;
pub mod fixtures;
pub mod list;
pub mod persistence;
pub mod row;

pub use console::{Console, View};
pub use detail::{DetailPhase, SalespersonDetail};
pub use domain::{ListMode, Route};
pub use error::ConsoleError;
pub use favorites::{FavoriteChannel, FavoriteDisplay, FavoriteSubscription};
pub use list::{Backing, Mutation, Refresh, SalesController, SalespeopleController};
pub use persistence::{ConsoleSettings, FilePersistence};
pub use row::{RowEvent, SalespersonRow};
