//! Generic min-cost sequence alignment.
//!
//! This module implements the dynamic-programming core shared by the
//! weighted distance metrics in this crate. The recurrence is the classic
//! global-alignment one (delete, insert, substitute-or-match), but every
//! cost is delegated to a pluggable [`CostPolicy`], so the same table
//! construction serves both the phonetic-group costs of
//! [`crate::editex`] and the keyboard-geometry costs of [`crate::typo`].
//!
//! Two boundary-condition variants are supported. The default charges for
//! unmatched prefixes on both sides. The *local* variant leaves column 0
//! at zero, which makes leading unmatched characters on the source side
//! free; target-side prefix costs are always charged.
//!
//! Storage is the space-optimized two-row form rather than a full matrix:
//! the recurrence only ever reads the previous row and the current row's
//! left neighbor.

use std::ops::Add;

use smallvec::SmallVec;

/// Scalar type accumulated in an alignment table.
///
/// Implemented for `usize` (integral costs) and `f64` (real-valued costs).
/// `Default` supplies the zero placed in cell (0, 0); `scale` supplies the
/// product used by the empty-input fast path.
pub trait CostUnit: Copy + PartialOrd + Add<Output = Self> + Default {
    /// `self` multiplied by a sequence length.
    fn scale(self, n: usize) -> Self;
}

impl CostUnit for usize {
    fn scale(self, n: usize) -> Self {
        self * n
    }
}

impl CostUnit for f64 {
    fn scale(self, n: usize) -> Self {
        self * n as f64
    }
}

/// Which input sequence a gap step consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// The gap consumes a source character (a deletion).
    Source,
    /// The gap consumes a target character (an insertion).
    Target,
}

/// Per-character cost model consulted by [`align`].
///
/// A policy prices two things independently: substituting one character
/// for another (`pair_cost`), and consuming a single character of one
/// sequence while the other stands still (`gap_cost`). The two need not
/// agree; a policy may charge a reduced gap cost based on the character's
/// predecessor in the same sequence.
pub trait CostPolicy {
    /// Scalar accumulated in the alignment table.
    type Cost: CostUnit;

    /// Error the policy can raise while pricing characters.
    ///
    /// Policies that cannot fail use [`std::convert::Infallible`].
    type Error;

    /// Cost of aligning `a` (source) against `b` (target).
    fn pair_cost(&self, a: char, b: char) -> Result<Self::Cost, Self::Error>;

    /// Cost of consuming `seq[i - 1]` as a gap on the given side.
    ///
    /// `i` is 1-based; `seq[i - 2]` is the predecessor when `i > 1`.
    fn gap_cost(&self, side: Side, seq: &[char], i: usize) -> Result<Self::Cost, Self::Error>;

    /// Worst-case per-character gap cost for the given side.
    ///
    /// Used by the empty-input fast path, where the whole of one sequence
    /// is consumed as gaps with no predecessor context.
    fn gap_unit(&self, side: Side) -> Self::Cost;
}

/// Compute the min-cost alignment of `src` into `tar` under `policy`.
///
/// Fast paths: identical inputs cost zero without building a table, and an
/// empty input costs the other side's length times the policy's
/// [`gap_unit`](CostPolicy::gap_unit). Neither fast path consults
/// `pair_cost`, so they cannot raise a policy error.
///
/// When `local` is true the first-column recurrence is skipped entirely,
/// leaving leading source-side gaps free of charge. Row 0 is always
/// initialized, so target-side prefixes are charged in both variants.
pub fn align<P: CostPolicy>(
    src: &[char],
    tar: &[char],
    policy: &P,
    local: bool,
) -> Result<P::Cost, P::Error> {
    if src == tar {
        return Ok(P::Cost::default());
    }
    if src.is_empty() {
        return Ok(policy.gap_unit(Side::Target).scale(tar.len()));
    }
    if tar.is_empty() {
        return Ok(policy.gap_unit(Side::Source).scale(src.len()));
    }

    let n = tar.len();

    // Target-side gap costs depend only on j, so price them once.
    let mut tar_gaps: SmallVec<[P::Cost; 32]> = SmallVec::with_capacity(n);
    for j in 1..=n {
        tar_gaps.push(policy.gap_cost(Side::Target, tar, j)?);
    }

    // Row 0: cost of producing each target prefix from nothing.
    let mut prev: SmallVec<[P::Cost; 32]> = SmallVec::with_capacity(n + 1);
    prev.push(P::Cost::default());
    for j in 1..=n {
        prev.push(prev[j - 1] + tar_gaps[j - 1]);
    }
    let mut curr: SmallVec<[P::Cost; 32]> = SmallVec::from_elem(P::Cost::default(), n + 1);

    for i in 1..=src.len() {
        let src_gap = policy.gap_cost(Side::Source, src, i)?;
        curr[0] = if local {
            P::Cost::default()
        } else {
            prev[0] + src_gap
        };

        for j in 1..=n {
            let mut best = prev[j] + src_gap; // consume src[i-1]
            let ins = curr[j - 1] + tar_gaps[j - 1]; // consume tar[j-1]
            if ins < best {
                best = ins;
            }
            let sub = prev[j - 1] + policy.pair_cost(src[i - 1], tar[j - 1])?;
            if sub < best {
                best = sub;
            }
            curr[j] = best;
        }

        std::mem::swap(&mut prev, &mut curr);
    }

    Ok(prev[n])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::Infallible;

    /// Unit-cost policy: the alignment degenerates to plain Levenshtein.
    struct Unit;

    impl CostPolicy for Unit {
        type Cost = usize;
        type Error = Infallible;

        fn pair_cost(&self, a: char, b: char) -> Result<usize, Infallible> {
            Ok(usize::from(a != b))
        }

        fn gap_cost(&self, _side: Side, _seq: &[char], _i: usize) -> Result<usize, Infallible> {
            Ok(1)
        }

        fn gap_unit(&self, _side: Side) -> usize {
            1
        }
    }

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn lev(a: &str, b: &str, local: bool) -> usize {
        match align(&chars(a), &chars(b), &Unit, local) {
            Ok(d) => d,
            Err(e) => match e {},
        }
    }

    #[test]
    fn unit_policy_matches_levenshtein() {
        assert_eq!(lev("kitten", "sitting", false), 3);
        assert_eq!(lev("saturday", "sunday", false), 3);
        assert_eq!(lev("test", "best", false), 1);
    }

    #[test]
    fn identical_inputs_cost_zero() {
        assert_eq!(lev("test", "test", false), 0);
        assert_eq!(lev("", "", false), 0);
        assert_eq!(lev("test", "test", true), 0);
    }

    #[test]
    fn empty_input_fast_path() {
        assert_eq!(lev("", "test", false), 4);
        assert_eq!(lev("test", "", false), 4);
    }

    #[test]
    fn local_frees_source_prefix_only() {
        // Leading source characters are free; the anchored suffix matches.
        assert_eq!(lev("xxxcat", "cat", true), 0);
        assert_eq!(lev("xxxcat", "cat", false), 3);
        // Target-side prefixes are still charged.
        assert_eq!(lev("cat", "xxxcat", true), 3);
    }

    #[test]
    fn local_never_exceeds_global() {
        for (a, b) in [
            ("kitten", "sitting"),
            ("abc", "xyz"),
            ("", "abc"),
            ("prefix_core", "core"),
        ] {
            assert!(lev(a, b, true) <= lev(a, b, false), "{a:?} vs {b:?}");
        }
    }

    #[test]
    fn single_character_inputs() {
        assert_eq!(lev("a", "a", false), 0);
        assert_eq!(lev("a", "b", false), 1);
        assert_eq!(lev("a", "abc", false), 2);
        assert_eq!(lev("abc", "c", false), 2);
    }
}
