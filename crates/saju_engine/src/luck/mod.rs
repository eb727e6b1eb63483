//! Luck cycles: decade (daeun), annual (seun) and monthly (woleun).
//!
//! Every entry is a gapja read against the natal chart in the same way:
//! ten god of its stem and branch against the day master, twelve sinsal
//! against the year branch, and the day master's life stage at its branch.

pub mod balance;
pub mod daeun;
pub mod seun;
pub mod types;
pub mod woleun;

pub use balance::{DAYS_PER_LUCK_YEAR, daeun_start_age};
pub use daeun::{LuckDirection, daeun_direction, project_daeun};
pub use seun::{project_seun, seun_window};
pub use types::{Daeun, DaeunStep, LuckEntry, SeunEntry, WoleunEntry};
pub use woleun::project_woleun;
