pub mod check;
pub mod dispatch;
pub mod export;
pub mod schema;
pub mod serve;
pub mod summary;

pub use dispatch::dispatch;
