use log::debug;

use crate::expression::Operator;
use crate::solver::candidate::{Candidate, EvaluationOrder};
use crate::solver::constants::{EVALUATION_ORDER_COUNT, OPERAND_COUNT, OPERATOR_TRIPLE_COUNT};
use crate::utils::index_permutations;

/// Lazily enumerates every candidate for one operand quadruple.
///
/// Order matches three nested loops: operand orderings (lexicographic over
/// input positions), then operator triples (`+ - * /` per gap, last gap
/// fastest), then evaluation orders. Candidates are also addressable by
/// index so the space can be split across threads.
#[derive(Debug, Clone)]
pub struct CandidateSpace {
    operands: [i64; OPERAND_COUNT],
    orderings: Vec<[usize; OPERAND_COUNT]>,
    next: usize,
}

impl CandidateSpace {
    pub fn new(operands: [i64; OPERAND_COUNT]) -> Self {
        let orderings: Vec<[usize; OPERAND_COUNT]> = index_permutations(OPERAND_COUNT)
            .into_iter()
            .filter_map(|perm| perm.try_into().ok())
            .collect();
        debug!(
            "Candidate space over {:?}: {} orderings",
            operands,
            orderings.len()
        );

        Self {
            operands,
            orderings,
            next: 0,
        }
    }

    /// Total number of candidates, independent of iteration progress
    pub fn total(&self) -> usize {
        self.orderings.len() * OPERATOR_TRIPLE_COUNT * EVALUATION_ORDER_COUNT
    }

    /// The candidate at `index` in enumeration order
    pub fn candidate(&self, index: usize) -> Option<Candidate> {
        let per_ordering = OPERATOR_TRIPLE_COUNT * EVALUATION_ORDER_COUNT;
        let ordering = self.orderings.get(index / per_ordering)?;
        let rest = index % per_ordering;
        let triple = rest / EVALUATION_ORDER_COUNT;
        let order = EvaluationOrder::ALL[rest % EVALUATION_ORDER_COUNT];

        let operands = ordering.map(|position| self.operands[position]);
        let operators = [
            Operator::ALL[triple / 16],
            Operator::ALL[(triple / 4) % 4],
            Operator::ALL[triple % 4],
        ];

        Some(Candidate::new(operands, operators, order))
    }
}

impl Iterator for CandidateSpace {
    type Item = Candidate;

    fn next(&mut self) -> Option<Self::Item> {
        let candidate = self.candidate(self.next)?;
        self.next += 1;
        Some(candidate)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.total().saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for CandidateSpace {}
