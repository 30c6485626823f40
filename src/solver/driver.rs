use std::fmt;

use log::{debug, info, trace, warn};
use rayon::prelude::*;

use crate::expression::{Expression, Rejection};
use crate::number::ExactNumber;
use crate::solver::candidate::Candidate;
use crate::solver::constants::{OPERAND_COUNT, TARGET};
use crate::solver::dedup::SolutionSet;
use crate::solver::space::CandidateSpace;

/// Configuration for a search
#[derive(Debug, Clone)]
pub struct SolverConfig {
    pub target: i64,
    /// Evaluate candidates on the rayon pool. Output order is unchanged.
    pub parallel: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            target: TARGET,
            parallel: false,
        }
    }
}

/// An expression that reaches the target, with its minimal-bracket rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub expression: Expression,
    pub rendered: String,
    pub value: ExactNumber,
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} = {}", self.rendered, self.value)
    }
}

/// Counters collected over one run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SearchStats {
    pub evaluated: usize,
    pub negative_differences: usize,
    pub divisions_by_zero: usize,
    pub matched: usize,
    pub admitted: usize,
}

impl SearchStats {
    pub fn rejected(&self) -> usize {
        self.negative_differences + self.divisions_by_zero
    }

    /// Matches dropped by the dedup filter
    pub fn duplicates(&self) -> usize {
        self.matched - self.admitted
    }

    fn record(&mut self, outcome: &Outcome) {
        self.evaluated += 1;
        match outcome {
            Outcome::Rejected(Rejection::NegativeDifference) => self.negative_differences += 1,
            Outcome::Rejected(Rejection::DivisionByZero) => self.divisions_by_zero += 1,
            Outcome::Missed => {}
            Outcome::Matched { .. } => self.matched += 1,
        }
    }
}

/// Everything one run produced
#[derive(Debug, Clone)]
pub struct SearchReport {
    pub solutions: Vec<Solution>,
    pub stats: SearchStats,
}

enum Outcome {
    Rejected(Rejection),
    Missed,
    Matched {
        expression: Expression,
        value: ExactNumber,
    },
}

fn evaluate_candidate(candidate: &Candidate, target: &ExactNumber) -> Outcome {
    let expression = candidate.expression();
    match expression.evaluate() {
        Err(rejection) => Outcome::Rejected(rejection),
        Ok(value) if &value == target => Outcome::Matched { expression, value },
        Ok(_) => Outcome::Missed,
    }
}

/// Render a match and pass it through the dedup filter
fn admit(
    seen: &mut SolutionSet,
    stats: &mut SearchStats,
    expression: Expression,
    value: ExactNumber,
) -> Option<Solution> {
    let rendered = expression.to_string();
    if !seen.admit(&rendered) {
        trace!("Skipping duplicate rendering: {}", rendered);
        return None;
    }
    stats.admitted += 1;
    debug!("Found solution: {} = {}", rendered, value);
    Some(Solution {
        expression,
        rendered,
        value,
    })
}

/// Lazy sequential search over one quadruple, yielding distinct solutions
/// in enumeration order
pub struct Solutions {
    space: CandidateSpace,
    target: ExactNumber,
    seen: SolutionSet,
    stats: SearchStats,
}

impl Solutions {
    fn new(operands: [i64; OPERAND_COUNT], target: i64) -> Self {
        Self {
            space: CandidateSpace::new(operands),
            target: ExactNumber::from(target),
            seen: SolutionSet::new(),
            stats: SearchStats::default(),
        }
    }

    /// Counters for the candidates consumed so far
    pub fn stats(&self) -> SearchStats {
        self.stats
    }
}

impl Iterator for Solutions {
    type Item = Solution;

    fn next(&mut self) -> Option<Self::Item> {
        for candidate in self.space.by_ref() {
            let outcome = evaluate_candidate(&candidate, &self.target);
            self.stats.record(&outcome);
            if let Outcome::Matched { expression, value } = outcome
                && let Some(solution) = admit(&mut self.seen, &mut self.stats, expression, value)
            {
                return Some(solution);
            }
        }
        None
    }
}

/// Searches operand quadruples for expressions equal to the target
pub struct Solver {
    config: SolverConfig,
}

impl Solver {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Get a reference to the solver configuration
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Every distinct solution for `operands`, in enumeration order
    pub fn solve(&self, operands: [i64; OPERAND_COUNT]) -> Vec<Solution> {
        self.run(operands).solutions
    }

    /// Lazily produce solutions on the calling thread
    pub fn solutions(&self, operands: [i64; OPERAND_COUNT]) -> Solutions {
        Solutions::new(operands, self.config.target)
    }

    /// Run one full search. Each run starts from an empty solution set.
    pub fn run(&self, operands: [i64; OPERAND_COUNT]) -> SearchReport {
        info!(
            "Searching {:?} for expressions equal to {}",
            operands, self.config.target
        );

        let report = if self.config.parallel {
            self.run_parallel(operands)
        } else {
            self.run_sequential(operands)
        };

        let stats = &report.stats;
        info!(
            "Evaluated {} candidates: {} rejected, {} matched, {} distinct",
            stats.evaluated,
            stats.rejected(),
            stats.matched,
            stats.admitted
        );
        if report.solutions.is_empty() {
            warn!("No expression over {:?} equals {}", operands, self.config.target);
        }

        report
    }

    fn run_sequential(&self, operands: [i64; OPERAND_COUNT]) -> SearchReport {
        let mut solutions = self.solutions(operands);
        let found: Vec<Solution> = solutions.by_ref().collect();
        SearchReport {
            solutions: found,
            stats: solutions.stats(),
        }
    }

    fn run_parallel(&self, operands: [i64; OPERAND_COUNT]) -> SearchReport {
        let space = CandidateSpace::new(operands);
        let target = ExactNumber::from(self.config.target);

        // Indexed collect keeps enumeration order, so dedup below admits
        // exactly what the sequential run admits.
        let outcomes: Vec<Option<Outcome>> = (0..space.total())
            .into_par_iter()
            .map(|index| {
                space
                    .candidate(index)
                    .map(|candidate| evaluate_candidate(&candidate, &target))
            })
            .collect();

        let mut seen = SolutionSet::new();
        let mut stats = SearchStats::default();
        let mut solutions = Vec::new();
        for outcome in outcomes.into_iter().flatten() {
            stats.record(&outcome);
            if let Outcome::Matched { expression, value } = outcome
                && let Some(solution) = admit(&mut seen, &mut stats, expression, value)
            {
                solutions.push(solution);
            }
        }

        SearchReport { solutions, stats }
    }
}

impl Default for Solver {
    fn default() -> Self {
        Self::new(SolverConfig::default())
    }
}
