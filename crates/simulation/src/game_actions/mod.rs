pub mod actions;
mod executor;
pub mod plugin;
pub mod queue;
pub mod result_log;
pub mod results;

pub use actions::*;
pub use plugin::TwinActionsPlugin;
pub use queue::*;
pub use result_log::ActionResultLog;
pub use results::*;
