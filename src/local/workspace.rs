//! Scratch buffers for neighborhood scans.
//!
//! A scan never edits the incumbent directly: every move is applied to the
//! `trial` slot, repaired there, and only an accepted trial is swapped into
//! the caller's solution. Buffers are allocated once per local search call
//! and reused across scans.

use crate::eval::{usage_of, within_capacity};
use crate::problem::Problem;
use crate::repair::repair;
use crate::solution::Solution;

pub(super) struct Workspace {
    /// Usage of the incumbent.
    usage: Vec<f64>,
    trial: Solution,
    trial_usage: Vec<f64>,
    best: Solution,
    best_usage: Vec<f64>,
    has_best: bool,
    /// Selected items of the incumbent, refreshed per scan.
    pub(super) selected: Vec<usize>,
}

impl Workspace {
    pub(super) fn new(problem: &Problem, current: &Solution) -> Self {
        let usage = usage_of(problem, &current.x);
        Self {
            trial: current.clone(),
            trial_usage: usage.clone(),
            best: current.clone(),
            best_usage: usage.clone(),
            usage,
            has_best: false,
            selected: Vec::with_capacity(problem.n()),
        }
    }

    /// Resets the trial slot to the incumbent.
    pub(super) fn begin_trial(&mut self, current: &Solution) {
        self.trial.x.copy_from_slice(&current.x);
        self.trial.value = current.value;
        self.trial.feasible = current.feasible;
        self.trial_usage.copy_from_slice(&self.usage);
    }

    pub(super) fn trial_add(&mut self, problem: &Problem, j: usize) {
        self.trial.x[j] = true;
        self.trial.value += problem.profit()[j];
        for (u, &w) in self.trial_usage.iter_mut().zip(problem.item_weights(j)) {
            *u += w;
        }
    }

    pub(super) fn trial_remove(&mut self, problem: &Problem, j: usize) {
        self.trial.x[j] = false;
        self.trial.value -= problem.profit()[j];
        for (u, &w) in self.trial_usage.iter_mut().zip(problem.item_weights(j)) {
            *u -= w;
        }
    }

    /// Repairs the trial if the move pushed it over capacity and returns its
    /// resulting value.
    pub(super) fn settle_trial(&mut self, problem: &Problem) -> f64 {
        if within_capacity(problem, &self.trial_usage) {
            self.trial.feasible = true;
        } else {
            repair(problem, &mut self.trial, &mut self.trial_usage);
        }
        self.trial.value
    }

    pub(super) fn clear_best(&mut self) {
        self.has_best = false;
    }

    /// Keeps the trial if it beats the best trial of this scan.
    pub(super) fn offer_best(&mut self) {
        if !self.has_best || self.trial.value > self.best.value {
            std::mem::swap(&mut self.trial, &mut self.best);
            std::mem::swap(&mut self.trial_usage, &mut self.best_usage);
            self.has_best = true;
        }
    }

    pub(super) fn has_best(&self) -> bool {
        self.has_best
    }

    /// Moves the trial into `current`; the old incumbent becomes scratch.
    pub(super) fn commit_trial(&mut self, current: &mut Solution) {
        std::mem::swap(current, &mut self.trial);
        std::mem::swap(&mut self.usage, &mut self.trial_usage);
    }

    pub(super) fn commit_best(&mut self, current: &mut Solution) {
        std::mem::swap(current, &mut self.best);
        std::mem::swap(&mut self.usage, &mut self.best_usage);
        self.has_best = false;
    }

    pub(super) fn refresh_selected(&mut self, current: &Solution) {
        self.selected.clear();
        self.selected.extend(current.selected());
    }
}
