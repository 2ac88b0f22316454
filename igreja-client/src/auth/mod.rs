pub mod login;
pub mod token;

pub use login::login;
pub use token::decode;
