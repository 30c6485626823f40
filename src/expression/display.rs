use std::fmt;

use crate::expression::ast::Expression;
use crate::expression::operator::Operator;

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fn precedence(expr: &Expression) -> u8 {
            match expr.operator() {
                Some(op) => op.precedence(),
                None => 3,
            }
        }

        fn write_with_parens(
            f: &mut fmt::Formatter,
            expr: &Expression,
            need_parens: bool,
        ) -> fmt::Result {
            if need_parens {
                write!(f, "(")?;
                fmt_expression(f, expr)?;
                write!(f, ")")
            } else {
                fmt_expression(f, expr)
            }
        }

        // Left operands only need brackets when they bind weaker than `op`.
        // Right operands also need them at equal precedence under `-` and `/`.
        fn write_binary(
            f: &mut fmt::Formatter,
            op: Operator,
            l: &Expression,
            r: &Expression,
        ) -> fmt::Result {
            let lp = precedence(l);
            let rp = precedence(r);
            let need_l = lp < op.precedence();
            let need_r =
                rp < op.precedence() || (rp == op.precedence() && !op.is_right_associative_safe());
            write_with_parens(f, l, need_l)?;
            write!(f, " {} ", op)?;
            write_with_parens(f, r, need_r)
        }

        fn fmt_expression(f: &mut fmt::Formatter, expr: &Expression) -> fmt::Result {
            match expr {
                Expression::Number(n) => write!(f, "{}", n),
                Expression::Add(l, r) => write_binary(f, Operator::Add, l, r),
                Expression::Sub(l, r) => write_binary(f, Operator::Sub, l, r),
                Expression::Mul(l, r) => write_binary(f, Operator::Mul, l, r),
                Expression::Div(l, r) => write_binary(f, Operator::Div, l, r),
            }
        }

        fmt_expression(f, self)
    }
}
