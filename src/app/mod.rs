pub mod event;
pub mod state;

pub use state::{Acknowledgement, AppState};
