pub mod logger;
pub mod progbase;
pub mod window;
