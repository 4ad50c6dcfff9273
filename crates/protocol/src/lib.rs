pub mod balance;
pub mod scene;

pub use balance::{BalanceConfig, BalanceInput, BalanceResult, Side};
pub use scene::SceneStyle;
