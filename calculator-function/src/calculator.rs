use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalculatorError {
    #[error("operation not supported: {0}")]
    Unsupported(String),
    #[error("calculator unavailable: {0}")]
    Unavailable(String),
}

/// The arithmetic capability the function delegates to.
///
/// Handlers hold it as `Arc<dyn Calculator>` so a test double can stand in for
/// the real implementation.
pub trait Calculator: Send + Sync {
    fn subtract(&self, number1: f64, number2: f64) -> Result<f64, CalculatorError>;
}

/// Plain IEEE-754 arithmetic.
#[derive(Debug, Default, Clone, Copy)]
pub struct StandardCalculator;

impl Calculator for StandardCalculator {
    fn subtract(&self, number1: f64, number2: f64) -> Result<f64, CalculatorError> {
        Ok(number1 - number2)
    }
}

impl<F> Calculator for F
where
    F: Fn(f64, f64) -> Result<f64, CalculatorError> + Send + Sync,
{
    fn subtract(&self, number1: f64, number2: f64) -> Result<f64, CalculatorError> {
        self(number1, number2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_calculator_subtracts() {
        let calc = StandardCalculator;
        assert_eq!(calc.subtract(10.0, 3.0), Ok(7.0));
        assert_eq!(calc.subtract(-2.5, 0.5), Ok(-3.0));
        assert_eq!(calc.subtract(0.1, 0.3), Ok(0.1 - 0.3));
    }

    #[test]
    fn closures_are_calculators() {
        let failing = |_: f64, _: f64| -> Result<f64, CalculatorError> {
            Err(CalculatorError::Unavailable("offline".into()))
        };
        let calc: &dyn Calculator = &failing;
        assert_eq!(
            calc.subtract(1.0, 1.0),
            Err(CalculatorError::Unavailable("offline".into()))
        );
    }
}
