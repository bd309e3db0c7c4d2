#[macro_use] extern crate lazy_static;
#[macro_use] extern crate serde;
pub mod process;
pub mod expand;

pub use text::Tokens;
pub use text::Tokenized;
pub use types::context::Context;
pub use types::similarity::Similarity;

mod text;
mod types;
mod stream;
mod geocode;
mod store;
mod map;
