pub mod context;
pub mod error;
pub mod model;
pub mod use_case;
