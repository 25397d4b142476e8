pub use db::*;
pub use websites::*;

mod db;
mod websites;
