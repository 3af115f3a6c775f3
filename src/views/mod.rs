mod page;
pub use page::PageView;

mod home;
pub use home::Home;

mod apply;
pub use apply::Apply;

mod atm;
pub use atm::Atm;

mod balance;
pub use balance::Balance;

mod login;
pub use login::Login;

mod transfer;
pub use transfer::Transfer;

mod not_found;
pub use not_found::{NotFound, RedirectTo};
