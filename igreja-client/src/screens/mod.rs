//! Controllers behind each screen of the app.
//!
//! Every controller is built from the [`Session`](crate::session::Session) of
//! the route it serves and turns backend failures into its own state.

pub mod account;
pub mod home;
pub mod login;
pub mod notices;
pub mod pickers;
pub mod report;
pub mod state;

pub use account::{AccountScreen, Feedback};
pub use home::{HomeScreen, HomeView};
pub use login::LoginScreen;
pub use notices::NoticesScreen;
pub use pickers::PickerEntry;
pub use report::ReportScreen;
pub use state::{FetchMode, ListState};
