pub mod chat;
pub mod health;
pub mod personas;

pub use chat::*;
pub use health::*;
pub use personas::*;
