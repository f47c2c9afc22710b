//! # editalign
//!
//! Weighted edit distances for approximate matching of short strings —
//! names, surnames, tokens — in record linkage and fuzzy search.
//!
//! One generic min-cost alignment core drives two substitution-pricing
//! models:
//!
//! - **Editex** ([`editex`]): substitutions between phonetically
//!   confusable letters (`C`/`K`/`Q`, `D`/`T`, …) are cheap, and a silent
//!   `H` or `W` is cheap to skip. Integer costs.
//! - **Typo distance** ([`typo`]): substitutions are priced by physical
//!   key proximity on a configurable keyboard layout, with a surcharge
//!   for crossing shift banks. Real-valued costs.
//!
//! Every metric comes in three flavors: a raw distance, a normalized
//! distance, and the complementary similarity.
//!
//! ## Example
//!
//! ```rust
//! use editalign::prelude::*;
//!
//! // Phonetically close: two group-cost substitutions.
//! assert_eq!(editex_distance("Niall", "Neil"), 2);
//!
//! // `c` and `h` are four keys apart on QWERTY.
//! let d = typo_distance("cat", "hat")?;
//! assert!((d - 1.5811388).abs() < 1e-6);
//!
//! // Custom configuration through the comparator types.
//! let typo = Typo::new().metric(Metric::Manhattan).layout(Layout::Dvorak);
//! assert!(typo.distance("cat", "hat")? < 1.5);
//! # Ok::<(), editalign::Error>(())
//! ```
//!
//! Every comparison is a pure function of its inputs: no shared state, no
//! I/O, no caching. Comparators are `Copy` and can be used freely across
//! threads.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod align;
pub mod editex;
pub mod error;
pub mod typo;

pub use error::{Error, Result};

/// Common imports for convenient usage
pub mod prelude {
    pub use crate::align::{align, CostPolicy, CostUnit, Side};
    pub use crate::editex::{
        editex_distance, editex_normalized_distance, editex_similarity, Editex, EditexCosts,
    };
    pub use crate::error::{Error, Result};
    pub use crate::typo::{
        typo_distance, typo_normalized_distance, typo_similarity, Layout, Metric, Typo, TypoCosts,
    };
}
