// Utils compartidos

pub mod constants;
pub mod storage;
pub mod bengali;
pub mod i18n;

pub use constants::*;
pub use i18n::*;
