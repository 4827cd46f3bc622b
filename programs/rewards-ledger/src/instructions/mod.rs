pub mod initialize;
pub mod initialize_pool;
pub mod enter_custody;
pub mod exit_custody;
pub mod collect_rewards;
pub mod collect_rewards_batch;
pub mod emit_pending_rewards;

pub use initialize::*;
pub use initialize_pool::*;
pub use enter_custody::*;
pub use exit_custody::*;
pub use collect_rewards::*;
pub use collect_rewards_batch::*;
pub use emit_pending_rewards::*;
