//! Pertarungan Kata - Malay Vocabulary Battle Game Library
//!
//! This module exposes the game logic for testing and external use.

// Allow dead code in library - some functions are only used by the binary
#![allow(dead_code)]

pub mod achievements;
pub mod audio;
pub mod battle;
pub mod build_info;
pub mod catalog;
pub mod constants;
pub mod leaderboard;
pub mod player;
pub mod progression;
pub mod session;
pub mod storage;

// UI module is not exposed as it's tightly coupled to the terminal
mod ui;
