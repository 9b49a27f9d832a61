use crate::domain::ports::Console;
use crate::utils::error::{InvalidStudentMarks, RuntimeFault};
use crate::utils::validation::in_range;

pub const MIN_MARKS: i32 = 0;
pub const MAX_MARKS: i32 = 100;

/// Truncating integer division. Negative divisors are rejected as policy.
pub fn divide(dividend: i32, divisor: i32) -> Result<i32, RuntimeFault> {
    if divisor == 0 {
        return Err(RuntimeFault::DivisionByZero {
            message: "Cannot divide by zero; please provide a non-zero divisor.".to_string(),
        });
    }
    if divisor < 0 {
        return Err(RuntimeFault::InvalidArgument {
            message: "Negative divisor not allowed; please enter a positive number.".to_string(),
        });
    }
    Ok(dividend / divisor)
}

/// Prints and returns the element at `index`. Nothing is printed when the
/// index falls outside the sequence.
pub fn access_element<C: Console + ?Sized>(
    values: &[i32],
    index: i64,
    console: &mut C,
) -> Result<i32, RuntimeFault> {
    let value = usize::try_from(index)
        .ok()
        .and_then(|position| values.get(position))
        .copied()
        .ok_or(RuntimeFault::IndexOutOfRange {
            index,
            len: values.len(),
        })?;

    console.line(&format!("Array element at index {}: {}", index, value));
    Ok(value)
}

/// Length in Unicode scalar values.
pub fn print_string_length<C: Console + ?Sized>(
    text: Option<&str>,
    console: &mut C,
) -> Result<usize, RuntimeFault> {
    let text = text.ok_or_else(|| RuntimeFault::NullReference {
        message: "Provided string reference is null; cannot determine length.".to_string(),
    })?;

    let length = text.chars().count();
    console.line(&format!("String length: {}", length));
    Ok(length)
}

pub fn check_marks<C: Console + ?Sized>(
    marks: i32,
    console: &mut C,
) -> Result<(), InvalidStudentMarks> {
    if !in_range(marks, MIN_MARKS, MAX_MARKS) {
        return Err(InvalidStudentMarks {
            marks,
            min: MIN_MARKS,
            max: MAX_MARKS,
        });
    }
    console.line(&format!("Marks {} are valid.", marks));
    Ok(())
}
