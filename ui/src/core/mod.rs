pub mod animate;
pub mod breakdown;
pub mod config;
pub mod debounce;
pub mod error;
pub mod export;
pub mod format;
pub mod palette;
pub mod platform;
pub mod series;
pub mod storage;
pub mod theme;
pub mod timing;
