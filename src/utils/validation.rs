use log::{debug, warn};

use crate::utils::errors::UtilsError;

/// # Errors
///
/// Returns an error unless exactly four operands are supplied.
pub fn validate_operands(operands: &[i64]) -> Result<[i64; 4], UtilsError> {
    debug!("Validating operands: {:?}", operands);

    let quadruple: [i64; 4] = operands.try_into().map_err(|_| {
        warn!("Wrong number of operands: {}", operands.len());
        UtilsError::OperandCount {
            expected: 4,
            actual: operands.len(),
        }
    })?;

    debug!("Operand validation successful");
    Ok(quadruple)
}
