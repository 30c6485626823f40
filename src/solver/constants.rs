// Configuration constants for the solver module
pub const TARGET: i64 = 24;
pub const OPERAND_COUNT: usize = 4;
pub const GAP_COUNT: usize = 3;
pub const ORDERING_COUNT: usize = 24;
pub const OPERATOR_TRIPLE_COUNT: usize = 64;
pub const EVALUATION_ORDER_COUNT: usize = 6;
pub const CANDIDATE_COUNT: usize = ORDERING_COUNT * OPERATOR_TRIPLE_COUNT * EVALUATION_ORDER_COUNT;

/// Quadruples searched when no operands are given on the command line
pub const DEMO_QUADRUPLES: [[i64; OPERAND_COUNT]; 7] = [
    [1, 2, 3, 4],
    [11, 12, 13, 14],
    [5, 5, 5, 1],
    [3, 3, 8, 8],
    [12, 2, 9, 10],
    [6, 6, 13, 17],
    [4, 4, 10, 10],
];
