pub mod maturity_level;
pub mod view_key;

pub use maturity_level::MaturityLevel;
pub use view_key::{EntityCode, ViewKey, DEFAULT_VIEW_KEY};
