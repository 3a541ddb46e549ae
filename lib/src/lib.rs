#[macro_use]
pub mod macros;

pub mod api;
pub mod clock;
pub mod otp;
pub mod token_store;
pub mod view;

#[cfg(test)]
mod fixtures;
