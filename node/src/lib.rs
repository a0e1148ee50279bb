// lints
#![warn(clippy::pedantic)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::items_after_statements,
    clippy::module_name_repetitions,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap
)]

mod error;
mod leaf;
mod node;
mod quad;
mod util;
mod ops {
    mod center;
    mod children;
    mod collect;
    mod get;
    mod population;
    mod render;
    mod space;
    mod step;

    pub use population::*;
    pub use render::*;
}

pub use crate::node::{CacheStats, Inner, Node};
pub use error::*;
pub use leaf::*;
pub use ops::*;
pub use quad::*;
pub use util::is_power_of_two;
