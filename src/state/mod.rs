mod manager;
mod persistence;

pub use manager::BoothStateManager;
pub use persistence::{load_inputs, save_inputs, save_plan};
