mod error;
mod event;
mod event_id;
mod storage;
mod store;

pub mod date;
pub mod grid_service;
pub mod layout;
pub mod view;

pub use error::*;
pub use event::*;
pub use event_id::*;
pub use grid_service::{GridCell, MonthGrid, YearMonth, GRID_COLS, GRID_LENGTH, GRID_ROWS};
pub use layout::EventLayout;
pub use storage::*;
pub use store::*;
pub use view::{Direction, ViewKind, ViewPeriod};
