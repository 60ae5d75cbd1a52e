//! # Container laws
//!
//! Shapes, deep copies, views and comparisons behave the same for every element type.
use num_traits::FromPrimitive;

use densemat::{
    approx_equal_matrix, approx_equal_vector, Element, Error, Matrix, MatrixBase, ResizeType, Source, SubVector,
    Vector, VectorBase, DEFAULT_TOLERANCE,
};

use super::init_logging;

fn vector<F: Element + FromPrimitive>(values: &[i32]) -> Vector<F> {
    Vector::from(values.iter().map(|&v| F::from_i32(v).unwrap()).collect::<Vec<_>>())
}

fn matrix<F: Element + FromPrimitive>(nr_rows: usize, nr_columns: usize) -> Matrix<F> {
    Matrix::from_rows((0..nr_rows)
        .map(|i| (0..nr_columns).map(|j| F::from_usize(i * nr_columns + j).unwrap()).collect())
        .collect()
    ).unwrap()
}

fn shapes_round_trip<F: Element>() {
    for shape in [(0, 0), (1, 1), (1, 5), (4, 1), (3, 7)] {
        let m = Matrix::<F>::construct(Some(shape)).unwrap();
        assert_eq!(m.size(), shape);
        assert_eq!((m.nr_rows(), m.nr_columns()), shape);
    }
    for shape in [(3, 0), (0, 3)] {
        assert!(matches!(Matrix::<F>::construct(Some(shape)), Err(Error::InvalidShape(_))));
    }
}

#[test]
fn matrix_shapes() {
    init_logging();
    shapes_round_trip::<f64>();
    shapes_round_trip::<f32>();
}

fn clones_are_independent<F: Element + FromPrimitive>() {
    let v = vector::<F>(&[1, 2, 3]);
    let mut copy = v.to_vector();
    assert!(copy.approx_equal(&v, F::zero()));
    copy.set(0, F::one()).unwrap();
    copy.set(1, F::one()).unwrap();
    assert_eq!(v, vector(&[1, 2, 3]));

    let m = matrix::<F>(3, 2);
    let mut copy = m.to_matrix();
    assert!(copy.approx_equal(&m, F::zero()));
    copy.set(2, 1, F::zero()).unwrap();
    assert!(!copy.approx_equal(&m, F::zero()));
    assert_eq!(m.get(2, 1), Ok(F::from_i32(5).unwrap()));
}

#[test]
fn clones() {
    init_logging();
    clones_are_independent::<f64>();
    clones_are_independent::<f32>();

    // From a view
    let mut m = matrix::<f64>(3, 3);
    let copy = m.range(1, 2, 1, 2).unwrap().to_matrix();
    assert_eq!(copy.to_rows(), vec![vec![4f64, 5f64], vec![7f64, 8f64]]);
    m.set(1, 1, 0f64).unwrap();
    assert_eq!(copy.get(0, 0), Ok(4f64));
}

#[test]
fn view_round_trip_and_aliasing() {
    init_logging();
    let mut v = vector::<f64>(&[1, 2, 3, 4, 5, 6]);
    let original = v.to_vec();

    for offset in 0..=original.len() {
        for length in 0..=(original.len() - offset) {
            let view = v.range(offset, length).unwrap();
            assert_eq!(view.len(), length);
            assert_eq!(view.to_vec(), original[offset..offset + length].to_vec());
        }
    }

    let (offset, length) = (2, 3);
    for i in 0..length {
        let mut view = v.range(offset, length).unwrap();
        view.set(i as isize, -1f64).unwrap();
        assert_eq!(v.get((offset + i) as isize), Ok(-1f64));

        v.set((offset + i) as isize, i as f64).unwrap();
        let view = v.range(offset, length).unwrap();
        assert_eq!(view.get(i as isize), Ok(i as f64));
    }

    assert!(matches!(vector::<f64>(&[1, 2, 3, 4]).range(3, 5), Err(Error::IndexOutOfRange(_))));
}

#[test]
fn approx_equal_is_reflexive() {
    init_logging();
    let v = vector::<f64>(&[1, -2, 3]);
    let m = matrix::<f64>(2, 3);
    for tolerance in [0f64, DEFAULT_TOLERANCE, 0.5, 100f64] {
        assert!(approx_equal_vector(&v, &v, tolerance));
        assert!(approx_equal_matrix(&m, &m, tolerance));
    }

    // Tolerance zero is exact equality
    let mut w = v.clone();
    assert!(w.approx_equal(&v, 0f64));
    w.set(2, 3f64 + f64::EPSILON * 4f64).unwrap();
    assert!(!w.approx_equal(&v, 0f64));
    assert_eq!(w.approx_equal(&v, 0f64), w == v);
    assert!(w.approx_equal(&v, 1e-10));

    // Different shapes are never equal
    assert!(!approx_equal_matrix(&m, &matrix::<f64>(3, 2), 1e10));
    assert!(!m.equal(&Matrix::<f64>::new()));

    // NaN is not equal to anything
    let nan = Vector::from(vec![f64::NAN]);
    assert!(!nan.approx_equal(&nan, 1f64));
}

#[test]
fn construction_conflicts() {
    init_logging();
    let other = vector::<f64>(&[1, 2]);
    assert_eq!(
        Vector::construct(Some(3), Some(Source::from(&other))),
        Err(Error::ArgumentConflict { first: "size", second: "src" }),
    );
    assert_eq!(Vector::construct(None, Some(Source::from(&other))), Ok(other.clone()));

    let m = matrix::<f64>(2, 2);
    assert!(matches!(Vector::construct(None, Some(Source::from(&m))), Err(Error::ArgumentType { .. })));
    assert!(matches!(Matrix::from_source(&other), Err(Error::ArgumentType { .. })));
}

#[test]
fn resizing() {
    init_logging();
    let mut v = vector::<f64>(&[1, 2, 3]);
    v.resize(4, ResizeType::CopyData);
    assert_eq!(v.to_vec(), vec![1f64, 2f64, 3f64, 0f64]);
    v.resize(2, ResizeType::SetZero);
    assert_eq!(v.to_vec(), vec![0f64, 0f64]);

    let mut m = matrix::<f64>(2, 2);
    m.resize(3, 3, ResizeType::CopyData).unwrap();
    assert_eq!(m.to_rows(), vec![vec![0f64, 1f64, 0f64], vec![2f64, 3f64, 0f64], vec![0f64; 3]]);
    assert!(matches!(m.resize(0, 2, ResizeType::SetZero), Err(Error::InvalidShape(_))));
    assert_eq!(m.size(), (3, 3));
}

#[test]
fn matrix_rows_are_vectors() {
    init_logging();
    let mut m = matrix::<f64>(3, 2);
    {
        let mut row = m.row(1).unwrap();
        let mut tail = SubVector::new(&mut row, 1, None).unwrap();
        tail.set(0, 10f64).unwrap();
    }
    assert_eq!(m.get(1, 1), Ok(10f64));
    assert!(matches!(m.row(3), Err(Error::IndexOutOfRange(_))));
}
