//! # Reading and writing through index expressions
use densemat::{Error, Index, Matrix, MatrixBase, MatrixSelection, Slice, Vector, VectorBase};

use super::init_logging;

/// A 4x4 matrix with value `10 * row + column` at each coordinate.
fn grid() -> Matrix<f64> {
    Matrix::from_rows((0..4)
        .map(|i| (0..4).map(|j| (10 * i + j) as f64).collect())
        .collect()
    ).unwrap()
}

#[test]
fn contiguous_selection_is_a_view() {
    init_logging();
    let mut m = grid();
    {
        let mut view = m.select((0..2, 0..2)).unwrap().into_view().unwrap();
        assert_eq!(view.to_rows(), vec![vec![0f64, 1f64], vec![10f64, 11f64]]);
        view.set(0, 1, -5f64).unwrap();
        view.assign((1, 0), -6f64).unwrap();
    }
    assert_eq!(m.get(0, 1), Ok(-5f64));
    assert_eq!(m.get(1, 0), Ok(-6f64));
}

#[test]
fn stepped_selection_is_a_copy() {
    init_logging();
    let mut m = grid();
    let values = m.select((Slice::new(Some(0), Some(4), 2), 1)).unwrap().into_values().unwrap();
    assert_eq!(values, vec![1f64, 21f64]);

    m.set(0, 1, 100f64).unwrap();
    assert_eq!(values, vec![1f64, 21f64]);
}

#[test]
fn table_order() {
    init_logging();
    let mut m = grid();
    let table = m.select((Slice::new(Some(3), None, -2), Slice::new(Some(0), Some(3), 2)))
        .unwrap()
        .into_table()
        .unwrap();
    assert_eq!(table, vec![vec![30f64, 32f64], vec![10f64, 12f64]]);
}

#[test]
fn negative_slice_bounds_count_from_the_end() {
    init_logging();
    let mut m = grid();
    let view = m.select((Slice::new(Some(-2), None, 1), -1..)).map(MatrixSelection::into_view);
    assert!(matches!(view, Ok(Some(_))));
    let view = view.unwrap().unwrap();
    assert_eq!(view.to_rows(), vec![vec![23f64], vec![33f64]]);

    let mut v = Vector::from(vec![1f64, 2f64, 3f64]);
    let values = v.select(Slice::new(None, Some(-1), 1)).unwrap().into_view().unwrap().to_vec();
    assert_eq!(values, vec![1f64, 2f64]);
}

#[test]
fn single_index_on_matrices() {
    init_logging();
    let mut m = grid();
    let row = m.select(2).unwrap().into_view().unwrap();
    assert_eq!(row.to_rows(), vec![vec![20f64, 21f64, 22f64, 23f64]]);

    let rows = m.select(1..3).unwrap().into_view().unwrap();
    assert_eq!(rows.size(), (2, 4));

    let mut lone_row = Matrix::from_rows(vec![vec![1f64, 2f64, 3f64]]).unwrap();
    assert_eq!(lone_row.select(1).unwrap().into_scalar(), Some(2f64));

    let mut lone_column = Matrix::from_rows(vec![vec![1f64], vec![2f64], vec![3f64]]).unwrap();
    assert_eq!(lone_column.select(2).unwrap().into_scalar(), Some(3f64));
    assert_eq!(lone_column.select(0..2).unwrap().into_view().map(|view| view.size()), Some((2, 1)));
}

#[test]
fn errors() {
    init_logging();
    let mut m = grid();
    assert_eq!(m.get(-1, 0), Err(Error::NotSupported(-1)));
    assert_eq!(m.select((-1, 0)).map(|s| s.into_scalar()), Err(Error::NotSupported(-1)));
    assert!(matches!(m.select((4, 0)), Err(Error::IndexOutOfRange(_))));
    assert!(matches!(m.select((0, Slice::new(Some(3), Some(1), 1))), Err(Error::IndexOutOfRange(_))));
    assert!(matches!(m.select((0, Slice::full().step_by(0))), Err(Error::IndexOutOfRange(_))));
    assert!(matches!(
        m.select(Index::Tuple(vec![Index::Int(0), Index::Int(0), Index::Int(0)])),
        Err(Error::InvalidIndexType(_)),
    ));
    assert!(matches!(m.select((0, (0, 0))), Err(Error::InvalidIndexType(_))));

    let mut v = Vector::from(vec![1f64, 2f64, 3f64, 4f64]);
    assert!(matches!(v.range(3, 5), Err(Error::IndexOutOfRange(_))));
    assert!(matches!(v.select((0, 0)), Err(Error::InvalidIndexType(_))));
}

#[test]
fn assignment_only_takes_integers() {
    init_logging();
    let mut m = grid();
    let before = m.clone();
    for index in [Index::from(0), Index::from(0..2), Index::from((0, 0..2)), Index::from((4, 0)), Index::from((0, -1))] {
        assert!(matches!(m.assign(index, 1f64), Err(Error::InvalidIndexType(_))));
    }
    assert_eq!(m, before);

    m.assign((3, 3), 0f64).unwrap();
    assert_eq!(m.get(3, 3), Ok(0f64));

    let mut v = Vector::from(vec![1f64, 2f64]);
    v.assign(1, 0f64).unwrap();
    assert_eq!(v.to_vec(), vec![1f64, 0f64]);
    assert!(matches!(v.assign(0..1, 0f64), Err(Error::InvalidIndexType(_))));
}
