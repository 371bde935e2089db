pub mod error;
pub mod feature_flags;
pub mod models;
pub mod requests;

// Dashboard shell model
pub mod account_menu;
pub mod capability;
pub mod logout;
pub mod mobile_menu;
pub mod navigation;

pub use error::*;
pub use feature_flags::*;
pub use models::*;
pub use requests::*;

pub use account_menu::*;
pub use capability::*;
pub use logout::*;
pub use mobile_menu::*;
pub use navigation::*;
