use crate::expression::{Expression, Operator};
use crate::solver::constants::{EVALUATION_ORDER_COUNT, GAP_COUNT, OPERAND_COUNT};

/// The five ways to group four ordered operands with three binary operators.
///
/// `d1 o1 d2 o2 d3 o3 d4` names the operands and the operator in each gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topology {
    /// `((d1 o1 d2) o2 d3) o3 d4`
    LeftDeep,
    /// `(d1 o1 d2) o2 (d3 o3 d4)`
    Pairs,
    /// `(d1 o1 (d2 o2 d3)) o3 d4`
    InnerLeft,
    /// `d1 o1 ((d2 o2 d3) o3 d4)`
    InnerRight,
    /// `d1 o1 (d2 o2 (d3 o3 d4))`
    RightDeep,
}

impl Topology {
    pub const ALL: [Topology; 5] = [
        Topology::LeftDeep,
        Topology::Pairs,
        Topology::InnerLeft,
        Topology::InnerRight,
        Topology::RightDeep,
    ];

    /// Build the expression tree this shape describes
    pub fn build(
        self,
        operands: &[i64; OPERAND_COUNT],
        operators: &[Operator; GAP_COUNT],
    ) -> Expression {
        let [d1, d2, d3, d4] = operands.map(Expression::Number);
        let [o1, o2, o3] = *operators;
        let bin = Expression::binary;

        match self {
            Topology::LeftDeep => bin(o3, bin(o2, bin(o1, d1, d2), d3), d4),
            Topology::Pairs => bin(o2, bin(o1, d1, d2), bin(o3, d3, d4)),
            Topology::InnerLeft => bin(o3, bin(o1, d1, bin(o2, d2, d3)), d4),
            Topology::InnerRight => bin(o1, d1, bin(o3, bin(o2, d2, d3), d4)),
            Topology::RightDeep => bin(o1, d1, bin(o2, d2, bin(o3, d3, d4))),
        }
    }
}

/// Priority labels 1, 2 and 3 spread over the three gaps.
///
/// The gap labelled 3 is combined first and the gap labelled 1 last. Six
/// label permutations reach five topologies: `Pairs` is reached both from
/// `[3, 1, 2]` and from `[2, 1, 3]`, since combining the two outer pairs in
/// either order yields the same tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EvaluationOrder([u8; GAP_COUNT]);

impl EvaluationOrder {
    /// Every permutation in enumeration order
    pub const ALL: [EvaluationOrder; EVALUATION_ORDER_COUNT] = [
        EvaluationOrder([1, 2, 3]),
        EvaluationOrder([1, 3, 2]),
        EvaluationOrder([2, 1, 3]),
        EvaluationOrder([2, 3, 1]),
        EvaluationOrder([3, 1, 2]),
        EvaluationOrder([3, 2, 1]),
    ];

    pub fn labels(self) -> [u8; GAP_COUNT] {
        self.0
    }

    pub fn topology(self) -> Topology {
        match self.0 {
            [3, 2, _] => Topology::LeftDeep,
            [3, _, _] => Topology::Pairs,
            [2, 3, _] => Topology::InnerLeft,
            [_, 3, _] => Topology::InnerRight,
            [2, _, _] => Topology::Pairs,
            _ => Topology::RightDeep,
        }
    }
}

/// One point of the search space. Immutable and cheap to copy, so candidates
/// can be evaluated on any thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Candidate {
    operands: [i64; OPERAND_COUNT],
    operators: [Operator; GAP_COUNT],
    order: EvaluationOrder,
}

impl Candidate {
    pub fn new(
        operands: [i64; OPERAND_COUNT],
        operators: [Operator; GAP_COUNT],
        order: EvaluationOrder,
    ) -> Self {
        Self {
            operands,
            operators,
            order,
        }
    }

    pub fn operands(&self) -> [i64; OPERAND_COUNT] {
        self.operands
    }

    pub fn operators(&self) -> [Operator; GAP_COUNT] {
        self.operators
    }

    pub fn order(&self) -> EvaluationOrder {
        self.order
    }

    pub fn topology(&self) -> Topology {
        self.order.topology()
    }

    pub fn expression(&self) -> Expression {
        self.topology().build(&self.operands, &self.operators)
    }
}
