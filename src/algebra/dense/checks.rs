use crate::algebra::DimensionError;

/// Checks that `data` can hold a row major `rows x cols` matrix with
/// row stride `stride`.
///
/// The stride must be at least `max(1, cols)`, and the buffer must hold
/// at least `stride * (rows - 1) + cols` elements.  The final row need
/// not be padded out to the full stride.  A matrix with no rows needs
/// no storage at all.
pub fn check_matrix<T>(
    rows: usize,
    cols: usize,
    data: &[T],
    stride: usize,
) -> Result<(), DimensionError> {
    if stride < usize::max(1, cols) {
        return Err(DimensionError::BadStride { stride, cols });
    }

    let required = required_len(rows, cols, stride).ok_or(DimensionError::SizeOverflow {
        rows,
        cols,
        stride,
    })?;

    if data.len() < required {
        return Err(DimensionError::ShortBuffer {
            len: data.len(),
            required,
        });
    }

    Ok(())
}

/// Number of elements spanned by a row major `rows x cols` matrix with
/// row stride `stride`, or `None` if it does not fit in a `usize`.
pub(crate) fn required_len(rows: usize, cols: usize, stride: usize) -> Option<usize> {
    if rows == 0 {
        return Some(0);
    }
    stride.checked_mul(rows - 1)?.checked_add(cols)
}

#[test]
fn test_check_matrix() {
    let data = [0.0; 12];

    // tight and padded layouts
    assert!(check_matrix(3, 4, &data, 4).is_ok());
    assert!(check_matrix(3, 4, &data[..10], 5).is_err());
    assert!(check_matrix(2, 4, &data[..9], 5).is_ok());

    assert_eq!(
        check_matrix(3, 4, &data, 3),
        Err(DimensionError::BadStride { stride: 3, cols: 4 })
    );
    assert_eq!(
        check_matrix(4, 4, &data, 4),
        Err(DimensionError::ShortBuffer {
            len: 12,
            required: 16
        })
    );

    // empty shapes still need a legal stride
    assert!(check_matrix::<f64>(0, 0, &[], 1).is_ok());
    assert!(check_matrix::<f64>(0, 5, &[], 5).is_ok());
    assert_eq!(
        check_matrix::<f64>(0, 0, &[], 0),
        Err(DimensionError::BadStride { stride: 0, cols: 0 })
    );
    assert!(check_matrix::<f64>(3, 0, &[], 1).is_err());
    assert!(check_matrix(3, 0, &data[..2], 1).is_ok());

    // strides too large to index must not wrap around
    assert_eq!(
        check_matrix(3, 2, &data, usize::MAX),
        Err(DimensionError::SizeOverflow {
            rows: 3,
            cols: 2,
            stride: usize::MAX
        })
    );
    assert!(check_matrix(2, usize::MAX, &data, usize::MAX).is_err());
    assert!(check_matrix(1, 4, &data, usize::MAX).is_ok());
}
