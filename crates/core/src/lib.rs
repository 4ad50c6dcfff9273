pub mod asset;
pub mod balance;
pub mod html;

pub use asset::{AssetError, EmbeddedImage};
pub use balance::{BalanceConfigError, compute, compute_balance, validate_config};
pub use html::{Scene, render_html};
