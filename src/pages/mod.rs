pub mod home;
pub mod login;
pub mod users;

pub use home::*;
pub use login::*;
pub use users::*;
