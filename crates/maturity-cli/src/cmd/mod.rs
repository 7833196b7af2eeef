pub mod assess;
pub mod chat;
pub mod dimensions;
pub mod levels;
