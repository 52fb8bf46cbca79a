mod core;
pub use self::core::*;
mod export;
pub use export::*;
mod info_print;
mod settings;
pub use settings::*;

#[cfg(feature = "serde")]
mod json;
