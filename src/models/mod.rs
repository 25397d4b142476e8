pub use client::*;
pub use color_scheme::*;
pub use contact::*;
pub use website::*;

mod client;
mod color_scheme;
mod contact;
mod website;
