//! # Lazy Color
//!
//! A single color value that converts between hex, RGB, RGBA and HSV on
//! demand.
//!
//! This library provides:
//! - Construction from `#hex`, `rgb(...)`, `rgba(...)` and `hsv(...)` strings
//! - Lazily derived, memoized representations with one authoritative source
//! - Brightness comparison and adjustment in HSV space
//!
//! ## Example
//!
//! ```rust
//! use lazy_color::Color;
//!
//! let background = Color::new("#336699")?;
//! let mut text = Color::new("hsv(210,20,55)")?;
//!
//! text.brighter_or_darker_than(&background, 30.0);
//! assert_eq!(text.hsv(), [210.0, 20.0, 30.0]);
//! println!("text: {}, background: {}", text, background);
//! # Ok::<(), lazy_color::ColorError>(())
//! ```

pub mod color;
pub mod config;
pub mod constants;
pub mod error;

pub use color::{Color, ColorConverter};
pub use config::ContrastConfig;
pub use error::{ColorError, Result};
