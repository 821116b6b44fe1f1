//! Binary selection vector with its cached objective value and feasibility.

use crate::eval::{CpuEvaluator, Evaluator};
use crate::problem::Problem;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// A 0/1 selection of items.
///
/// `value` and `feasible` are caches: they are valid right after an
/// evaluation (or an incremental update done by a search procedure) and
/// become stale as soon as `x` is edited directly.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    /// Selection vector, one entry per item.
    pub x: Vec<bool>,
    /// Cached `Σ_j profit[j]·x[j]`.
    pub value: f64,
    /// Cached result of the capacity check.
    pub feasible: bool,
}

impl Solution {
    /// The all-zero selection, which is always feasible.
    pub fn empty(n: usize) -> Self {
        Self {
            x: vec![false; n],
            value: 0.0,
            feasible: true,
        }
    }

    /// Wraps a selection without evaluating it.
    pub fn from_selection(x: Vec<bool>) -> Self {
        Self {
            x,
            value: 0.0,
            feasible: false,
        }
    }

    /// Wraps a selection and evaluates it on the CPU.
    pub fn evaluated(problem: &Problem, x: Vec<bool>) -> Self {
        let mut sol = Self::from_selection(x);
        CpuEvaluator.evaluate(problem, &mut sol);
        sol
    }

    #[inline]
    pub fn n(&self) -> usize {
        self.x.len()
    }

    #[inline]
    pub fn is_selected(&self, j: usize) -> bool {
        self.x[j]
    }

    /// Indices of selected items, ascending.
    pub fn selected(&self) -> impl Iterator<Item = usize> + '_ {
        self.x
            .iter()
            .enumerate()
            .filter(|(_, &b)| b)
            .map(|(j, _)| j)
    }

    pub fn count_selected(&self) -> usize {
        self.x.iter().filter(|&&b| b).count()
    }

    /// Flips item `j` and adjusts `value` by its profit.
    ///
    /// Removing an item keeps a feasible solution feasible; adding one marks
    /// the solution as unchecked (`feasible = false`).
    pub fn toggle(&mut self, problem: &Problem, j: usize) {
        if self.x[j] {
            self.x[j] = false;
            self.value -= problem.profit()[j];
        } else {
            self.x[j] = true;
            self.value += problem.profit()[j];
            self.feasible = false;
        }
    }

    /// Feasible solutions beat infeasible ones; otherwise the strictly
    /// higher value wins.
    pub fn is_better_than(&self, other: &Solution) -> bool {
        match (self.feasible, other.feasible) {
            (true, false) => true,
            (false, true) => false,
            _ => self.value > other.value,
        }
    }

    /// Writes the solution file format: `<value> <count>` on the first line,
    /// the 1-based indices of the selected items on the second.
    pub fn write_to<W: Write>(&self, mut w: W) -> io::Result<()> {
        writeln!(w, "{} {}", self.value.round() as i64, self.count_selected())?;
        let indices: Vec<String> = self.selected().map(|j| (j + 1).to_string()).collect();
        writeln!(w, "{}", indices.join(" "))?;
        w.flush()
    }

    pub fn save(&self, path: impl AsRef<Path>) -> io::Result<()> {
        let file = File::create(path)?;
        self.write_to(BufWriter::new(file))
    }
}
