pub mod config;
pub mod error;
pub mod geometry;
pub mod request;

pub use config::{BudgetBands, CircleSealLayout, FontConfig, RectangleSealLayout};
pub use error::{SealError, SealResult};
pub use geometry::{Bounds, Circle, Direction, FontSpec, FontWeight, Orientation, Point};
pub use request::{CircleSeal, RectangleSeal, SealPayload, SealRequest, SealStatus};
