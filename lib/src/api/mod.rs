mod action;
mod token;


pub use self::action::*;
pub use self::token::*;
