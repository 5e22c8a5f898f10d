pub mod config;
mod error;
pub mod logging;
pub mod menu;
pub mod normalize;
mod repository;
pub mod task;
pub mod terminal;

pub use error::Error;
pub use repository::TaskRepository;
pub use task::{Difficulty, Status, Task};
