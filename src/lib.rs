pub mod config;
pub mod grid;
pub mod key_dispatcher;
pub mod logging;
pub mod navigator;
pub mod provider;
pub mod table_view;

pub use grid::{ColumnId, GridState, Selection};
pub use key_dispatcher::{KeyBinding, KeyDispatcher};
pub use navigator::NavIntent;
pub use provider::{GridHost, NavigationProvider};
