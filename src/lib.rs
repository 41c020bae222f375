//! Word Tower
//!
//! A word-building puzzle: starting from a short word, stack words that reuse
//! every letter of the word below plus exactly one new letter, as high as you
//! can.
//!
//! # Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use word_tower::config::EngineConfig;
//! use word_tower::engine::TowerEngine;
//! use word_tower::lexicon::Lexicon;
//!
//! let lexicon = Arc::new(Lexicon::from_words(["art", "tart", "start"]).unwrap());
//! let engine = TowerEngine::new(lexicon, EngineConfig::default());
//!
//! let id = engine.create_session(Some("art")).unwrap();
//! assert!(engine.add_word(&id, "tart").unwrap().success);
//! assert!(engine.add_word(&id, "start").unwrap().success);
//!
//! let summary = engine.end(&id).unwrap();
//! assert_eq!(summary.height, 3);
//! assert_eq!(summary.score.base_score, 3 + 8 + 15);
//! ```

// Core domain types
pub mod core;

// Word lists and validation
pub mod lexicon;
pub mod oracle;

// Game rules
pub mod hints;
pub mod scoring;

// Sessions and the external API
pub mod engine;
pub mod game;

// Tallest-tower search
pub mod explorer;

pub mod config;
pub mod error;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
