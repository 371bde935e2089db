// Primitive wrappers
pub mod avatar;
pub mod dropdown_menu;
pub mod separator;
pub mod toast;

// Standalone components
pub mod badge;
pub mod button;
pub mod card;
pub mod input;
pub mod sheet;

// Layout
pub mod sidebar;

pub use avatar::*;
pub use badge::*;
pub use button::*;
pub use card::*;
pub use dropdown_menu::*;
pub use input::*;
pub use separator::*;
pub use sheet::*;
pub use sidebar::*;
pub use toast::*;
