//! Phonetic-group-aware (Editex) edit distance.
//!
//! Editex is the Zobel & Dart alignment metric for names: substitutions
//! between letters that sound alike (for example `C`/`K`/`Q`) are charged
//! a reduced group cost, and a silent `H` or `W` is cheap to skip. Inputs
//! are uppercased and compatibility-decomposed before comparison, so case
//! never costs anything and accented letters align on their base letter
//! plus a cheap-to-drop combining mark.
//!
//! # Example
//!
//! ```rust
//! use editalign::editex::{editex_distance, Editex};
//!
//! assert_eq!(editex_distance("cat", "hat"), 2);
//! assert_eq!(editex_distance("Niall", "Neil"), 2);
//!
//! // The local variant tolerates an unanchored source prefix.
//! let local = Editex::new().local(true);
//! assert!(local.distance("Niall", "Neil") <= editex_distance("Niall", "Neil"));
//! ```

use smallvec::SmallVec;
use unicode_normalization::UnicodeNormalization;

use crate::align::{align, CostPolicy, Side};

/// The ten groups of letters treated as mutually confusable.
///
/// Membership is many-to-many; a letter pair co-occurring in any group is
/// charged the group cost. Note the overlap between `SXZ` and `CSZ`.
const LETTER_GROUPS: [&str; 10] = [
    "AEIOUY", "BP", "CKQ", "DT", "LR", "MN", "GJ", "FPV", "SXZ", "CSZ",
];

/// Letters eligible for group-cost substitution.
///
/// `H` and `W` are deliberately absent; they participate only through the
/// reduced gap cost applied when they precede a differing character.
const GROUPED_ALPHABET: &str = "ABCDEFGIJKLMNOPQRSTUVXYZ";

/// Predecessor stand-in for the first position of a sequence.
///
/// Never a letter and never equal to a letter, so consuming the very first
/// character is always priced as a mismatch.
const SENTINEL: char = ' ';

/// Edit costs for [`Editex`]: match, same-group, and mismatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct EditexCosts {
    /// Cost of aligning two identical characters.
    pub matching: usize,
    /// Cost of substituting within a letter group, and of skipping a
    /// silent `H`/`W`.
    pub group: usize,
    /// Cost of any other substitution, insertion, or deletion.
    pub mismatch: usize,
}

impl Default for EditexCosts {
    /// The costs from Zobel & Dart's definition: `(0, 1, 2)`.
    fn default() -> Self {
        EditexCosts {
            matching: 0,
            group: 1,
            mismatch: 2,
        }
    }
}

/// Cost policy implementing the Editex pricing rules.
struct EditexPolicy {
    costs: EditexCosts,
}

impl EditexPolicy {
    /// `r(a, b)`: match, group, or mismatch cost.
    fn substitution_cost(&self, a: char, b: char) -> usize {
        if a == b {
            return self.costs.matching;
        }
        if GROUPED_ALPHABET.contains(a)
            && GROUPED_ALPHABET.contains(b)
            && LETTER_GROUPS.iter().any(|g| g.contains(a) && g.contains(b))
        {
            return self.costs.group;
        }
        self.costs.mismatch
    }

    /// `d(prev, cur)`: like `r`, except a differing character preceded by
    /// `H` or `W` is charged the group cost.
    fn step_cost(&self, prev: char, cur: char) -> usize {
        if prev != cur && (prev == 'H' || prev == 'W') {
            return self.costs.group;
        }
        self.substitution_cost(prev, cur)
    }
}

impl CostPolicy for EditexPolicy {
    type Cost = usize;
    type Error = std::convert::Infallible;

    fn pair_cost(&self, a: char, b: char) -> Result<usize, Self::Error> {
        Ok(self.substitution_cost(a, b))
    }

    fn gap_cost(&self, _side: Side, seq: &[char], i: usize) -> Result<usize, Self::Error> {
        let prev = if i == 1 { SENTINEL } else { seq[i - 2] };
        Ok(self.step_cost(prev, seq[i - 1]))
    }

    fn gap_unit(&self, _side: Side) -> usize {
        self.costs.mismatch
    }
}

/// Uppercase, NFKD-decompose, and expand the German eszett.
fn normalize(s: &str) -> SmallVec<[char; 32]> {
    s.to_uppercase()
        .nfkd()
        .collect::<String>()
        .replace('ß', "SS")
        .chars()
        .collect()
}

/// Configured Editex comparator.
///
/// `Default` uses the costs `(0, 1, 2)` and the global (non-local)
/// alignment variant.
///
/// # Example
///
/// ```rust
/// use editalign::editex::{Editex, EditexCosts};
///
/// let editex = Editex::new().costs(EditexCosts {
///     matching: 0,
///     group: 2,
///     mismatch: 4,
/// });
/// assert_eq!(editex.distance("cat", "hat"), 4);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Editex {
    costs: EditexCosts,
    local: bool,
}

impl Editex {
    /// Create a comparator with the default costs and variant.
    pub fn new() -> Self {
        Editex::default()
    }

    /// Set the match/group/mismatch costs.
    pub fn costs(mut self, costs: EditexCosts) -> Self {
        self.costs = costs;
        self
    }

    /// Select the local variant, which makes unmatched leading characters
    /// on the source side free of cost.
    pub fn local(mut self, local: bool) -> Self {
        self.local = local;
        self
    }

    /// Raw Editex distance between `src` and `tar`.
    pub fn distance(&self, src: &str, tar: &str) -> usize {
        let src = normalize(src);
        let tar = normalize(tar);
        let policy = EditexPolicy { costs: self.costs };
        match align(&src, &tar, &policy, self.local) {
            Ok(d) => d,
            Err(e) => match e {},
        }
    }

    /// Editex distance normalized to `[0, 1]`.
    ///
    /// The raw distance is divided by its worst case: the longer input's
    /// character count times the mismatch cost.
    pub fn normalized_distance(&self, src: &str, tar: &str) -> f64 {
        if src == tar {
            return 0.0;
        }
        let worst = src.chars().count().max(tar.chars().count()) * self.costs.mismatch;
        self.distance(src, tar) as f64 / worst as f64
    }

    /// Editex similarity: the complement of [`normalized_distance`](Self::normalized_distance).
    pub fn similarity(&self, src: &str, tar: &str) -> f64 {
        1.0 - self.normalized_distance(src, tar)
    }
}

/// Editex distance with the default costs `(0, 1, 2)`.
///
/// # Example
///
/// ```rust
/// use editalign::editex::editex_distance;
///
/// assert_eq!(editex_distance("cat", "hat"), 2);
/// assert_eq!(editex_distance("ATCG", "TAGC"), 6);
/// ```
pub fn editex_distance(src: &str, tar: &str) -> usize {
    Editex::new().distance(src, tar)
}

/// Normalized Editex distance with the default costs.
///
/// # Example
///
/// ```rust
/// use editalign::editex::editex_normalized_distance;
///
/// let d = editex_normalized_distance("Niall", "Neil");
/// assert!((d - 0.2).abs() < 1e-12);
/// ```
pub fn editex_normalized_distance(src: &str, tar: &str) -> f64 {
    Editex::new().normalized_distance(src, tar)
}

/// Editex similarity with the default costs.
pub fn editex_similarity(src: &str, tar: &str) -> f64 {
    Editex::new().similarity(src, tar)
}
