//! termfolio
//!
//! A single-page personal portfolio rendered in the terminal: a hero with a
//! typewriter headline, experience, projects, education and skills sections,
//! a footer, a top nav bar and a side indicator that follow the scroll
//! position.
//!
//! The library follows the Pure Core / Impure Shell split: `model`,
//! `view_state` and `state` never touch the terminal; `view` owns the event
//! loop and rendering.

pub mod config;
pub mod logging;
pub mod model;
pub mod source;
pub mod state;
pub mod view;
pub mod view_state;
