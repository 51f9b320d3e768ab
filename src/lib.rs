pub mod cli;
pub mod dispatch;
pub mod error;
pub mod packages;
pub mod report;
pub mod summary;
pub mod types;
pub mod utils;
pub mod workout;

pub use dispatch::build_workout;
pub use error::WorkoutError;
pub use summary::{WorkoutSummary, render};
pub use types::{ActivityKind, Package};
pub use workout::Workout;
