//! # baccaroad-engine: Baccarat Road Map Core
//!
//! Pure, deterministic building blocks for a baccarat prediction front end:
//! card ranks, hand point totals, the formula page's frequency weights, round
//! outcomes and the scrolling road map grid. Nothing here performs I/O.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card ranks (1-13 / A, J, Q, K) and table sides
//! - [`hand`] - Hands of up to three cards, point calculation, frequency weights
//! - [`outcome`] - Round outcomes, backend history entries, road map cells
//! - [`road_map`] - Fixed-size grid filled column by column that scrolls left
//! - [`errors`] - Error types for card parsing and grid construction
//!
//! ## Quick Start
//!
//! ```rust
//! use baccaroad_engine::cards::Rank;
//! use baccaroad_engine::hand::calculate_point;
//!
//! assert_eq!(calculate_point(&[Rank::King, Rank::Ace]), 1);
//! assert_eq!(calculate_point(&[Rank::Nine, Rank::Nine]), 8);
//! ```
//!
//! ## Road Map
//!
//! ```rust
//! use baccaroad_engine::outcome::{Cell, Outcome};
//! use baccaroad_engine::road_map::{Cursor, RoadMapGrid};
//!
//! let mut grid = RoadMapGrid::default(); // 6 x 12
//! grid.replay([Outcome::Banker, Outcome::Player, Outcome::Tie]);
//! assert_eq!(grid.cell(2, 0), Some(Cell::Mark(Outcome::Tie)));
//! assert_eq!(grid.cursor(), Cursor { row: 3, col: 0 });
//! ```

pub mod cards;
pub mod errors;
pub mod hand;
pub mod outcome;
pub mod road_map;
