pub mod imports;

mod default_styling;
mod header;
mod home;
mod title;
mod users;

pub mod theme;

pub use default_styling::DefaultStyling;
pub use header::Header;
pub use home::Home;
pub use theme::prelude::*;
pub use title::PageTitle;
pub use users::UsersPage;
