use log::trace;

use crate::expression::ast::Expression;
use crate::expression::errors::Rejection;
use crate::expression::operator::Operator;
use crate::number::ExactNumber;

impl Operator {
    /// Apply the operator to two exact values.
    ///
    /// # Errors
    ///
    /// - `Sub` rejects when `a < b`; the reversed operand order is explored
    ///   by another permutation.
    /// - `Div` rejects a zero divisor.
    pub fn apply(self, a: &ExactNumber, b: &ExactNumber) -> Result<ExactNumber, Rejection> {
        match self {
            Operator::Add => Ok(a + b),
            Operator::Mul => Ok(a * b),
            Operator::Sub => {
                if a >= b {
                    Ok(a - b)
                } else {
                    trace!("Rejecting {} - {}", a, b);
                    Err(Rejection::NegativeDifference)
                }
            }
            Operator::Div => a.checked_div(b).ok_or_else(|| {
                trace!("Rejecting {} / {}", a, b);
                Rejection::DivisionByZero
            }),
        }
    }
}

impl Expression {
    /// Evaluates the expression bottom-up, stopping at the first rejection
    ///
    /// # Errors
    ///
    /// Returns the first [`Rejection`] raised by any operation in the tree.
    pub fn evaluate(&self) -> Result<ExactNumber, Rejection> {
        match self {
            Expression::Number(n) => Ok(ExactNumber::from(*n)),
            Expression::Add(l, r) => Operator::Add.apply(&l.evaluate()?, &r.evaluate()?),
            Expression::Sub(l, r) => Operator::Sub.apply(&l.evaluate()?, &r.evaluate()?),
            Expression::Mul(l, r) => Operator::Mul.apply(&l.evaluate()?, &r.evaluate()?),
            Expression::Div(l, r) => Operator::Div.apply(&l.evaluate()?, &r.evaluate()?),
        }
    }
}
