//! Shape checks shared by matrix operations
//!
//! Checks take plain `(rows, cols)` shapes so an operation can validate a
//! destination that is also one of its operands before borrowing it mutably.
//! They run before any scratch buffer is touched.

use tandem_core::MatrixError;

pub type Shape = (usize, usize);

/// Backing data must hold exactly `expected` elements
/// `rows · cols`, or a dimension error when the product does not fit in `usize`
pub fn element_count(rows: usize, cols: usize, op: &'static str) -> Result<usize, MatrixError> {
    rows.checked_mul(cols).ok_or_else(|| MatrixError::DimensionMismatch {
        op,
        expected: format!("at most {} elements", usize::MAX),
        actual: format!("{}×{}", rows, cols),
    })
}

pub fn check_len(expected: usize, actual: usize, op: &'static str) -> Result<(), MatrixError> {
    if expected != actual {
        return Err(MatrixError::length(op, expected, actual));
    }
    Ok(())
}

/// Both shapes must be equal
pub fn check_same_dims(a: Shape, b: Shape, op: &'static str) -> Result<(), MatrixError> {
    if a != b {
        return Err(MatrixError::shape(op, a, b));
    }
    Ok(())
}

/// `dest` must have the shape of `src` transposed
pub fn check_transposed_dims(src: Shape, dest: Shape, op: &'static str) -> Result<(), MatrixError> {
    let expected = (src.1, src.0);
    if dest != expected {
        return Err(MatrixError::shape(op, expected, dest));
    }
    Ok(())
}

pub fn check_square(m: Shape) -> Result<(), MatrixError> {
    if m.0 != m.1 {
        return Err(MatrixError::NotSquare { rows: m.0, cols: m.1 });
    }
    Ok(())
}

/// `a · b` must be defined and `dest` must hold its result
pub fn check_product_dims(a: Shape, b: Shape, dest: Shape, op: &'static str) -> Result<(), MatrixError> {
    if a.1 != b.0 {
        return Err(MatrixError::DimensionMismatch {
            op,
            expected: format!("{} rows on the right operand", a.1),
            actual: format!("{}×{}", b.0, b.1),
        });
    }
    check_same_dims((a.0, b.1), dest, op)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_count() {
        assert_eq!(element_count(3, 4, "t"), Ok(12));
        assert_eq!(element_count(0, usize::MAX, "t"), Ok(0));
        let err = element_count(usize::MAX, 2, "t").unwrap_err();
        assert!(matches!(err, MatrixError::DimensionMismatch { op: "t", .. }));
    }

    #[test]
    fn test_check_len() {
        assert!(check_len(6, 6, "t").is_ok());
        assert!(check_len(6, 5, "t").is_err());
    }

    #[test]
    fn test_check_transposed_dims() {
        assert!(check_transposed_dims((2, 3), (3, 2), "t").is_ok());
        assert!(check_transposed_dims((2, 3), (2, 3), "t").is_err());
        assert!(check_transposed_dims((4, 4), (4, 4), "t").is_ok());
    }

    #[test]
    fn test_check_square() {
        assert!(check_square((3, 3)).is_ok());
        assert_eq!(
            check_square((2, 3)),
            Err(MatrixError::NotSquare { rows: 2, cols: 3 })
        );
    }

    #[test]
    fn test_check_product_dims() {
        assert!(check_product_dims((2, 3), (3, 4), (2, 4), "t").is_ok());
        // Operands disagree in width / height
        let err = check_product_dims((2, 3), (2, 4), (2, 4), "t").unwrap_err();
        assert!(err.to_string().contains("3 rows on the right operand"));
        // Destination cannot store the result
        assert!(check_product_dims((2, 3), (3, 4), (4, 2), "t").is_err());
    }
}
