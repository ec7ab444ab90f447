//! Terminal Snake - a real-time arcade snake game
//!
//! This library provides:
//! - Core game logic (game module)
//! - Keyboard decoding (input module)
//! - TUI rendering (render module)
//! - Session metrics for the HUD (metrics module)
//! - The interactive play mode (modes module)

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
