//! # Exchanging values with external arrays
//!
//! Containers are read from, copied into and viewed into `ndarray` arrays and slices, contiguous or
//! strided.
use ndarray::{array, s, Array1, Array2, Array3, ShapeBuilder};

use densemat::{Error, Matrix, MatrixBase, SubMatrix, SubVector, TransposeType, Vector, VectorBase};

use super::init_logging;

#[test]
fn copies_of_arrays() {
    init_logging();
    let array = array![[1f64, 2f64, 3f64], [4f64, 5f64, 6f64]];

    let m = Matrix::from_source(&array).unwrap();
    assert_eq!(m.as_array(), array.view());

    let v = Vector::from_source(array.row(1)).unwrap();
    assert_eq!(v.to_vec(), vec![4f64, 5f64, 6f64]);
    let v = Vector::from_source(array.column(2)).unwrap();
    assert_eq!(v.to_vec(), vec![3f64, 6f64]);
    let v = Vector::from_source(&[7f64, 8f64][..]).unwrap();
    assert_eq!(v.len(), 2);

    let mut transposed = Matrix::<f64>::zeros(3, 2).unwrap();
    transposed.copy_from(&array, TransposeType::Trans).unwrap();
    assert_eq!(transposed.as_array(), array.t());

    assert!(matches!(Matrix::from_source(&Array3::<f64>::zeros((1, 1, 1))), Err(Error::ArgumentType { .. })));
    assert!(matches!(Vector::from_source(&array), Err(Error::ArgumentType { .. })));
}

#[test]
fn views_into_arrays() {
    init_logging();
    let mut array = Array2::<f64>::zeros((3, 4).f());
    {
        let mut view = SubMatrix::new(&mut array, 1, None, 2, Some(2)).unwrap();
        assert_eq!(view.size(), (2, 2));
        view.set(1, 1, 1f64).unwrap();
        view.copy_from(&array![[2f64, 3f64], [4f64, 1f64]], TransposeType::NoTrans).unwrap();
    }
    assert_eq!(array.slice(s![1.., 2..]), array![[2f64, 3f64], [4f64, 1f64]]);
    assert_eq!(array[[0, 0]], 0f64);

    {
        let mut view = SubVector::new(array.slice_mut(s![.., 0]), 0, Some(2)).unwrap();
        view.set(1, 9f64).unwrap();
    }
    assert_eq!(array[[1, 0]], 9f64);

    let mut values = vec![1f64, 2f64, 3f64];
    {
        let mut view = SubVector::new(&mut values[..], 1, None).unwrap();
        view.copy_from(&Array1::from(vec![0f64, 0f64])).unwrap();
    }
    assert_eq!(values, vec![1f64, 0f64, 0f64]);

    assert!(matches!(SubMatrix::new(&mut array, 0, Some(4), 0, None), Err(Error::IndexOutOfRange(_))));
    assert!(matches!(SubVector::new(&mut array, 0, None), Err(Error::ArgumentType { .. })));
}

#[test]
fn containers_as_arrays() {
    init_logging();
    let mut m = Matrix::from_rows(vec![vec![1f64, 2f64], vec![3f64, 4f64]]).unwrap();
    m.as_array_mut()[[0, 1]] = 0f64;
    assert_eq!(m.get(0, 1), Ok(0f64));
    assert_eq!(m.as_array().sum(), 8f64);

    let inner = m.range(1, 1, 0, 2).unwrap().into_array();
    assert_eq!(inner.shape(), &[1, 2]);

    let mut v = Vector::from(vec![1f64, 2f64, 3f64]);
    v.as_array_mut().map_inplace(|value| *value *= 2f64);
    assert_eq!(v.into_inner(), vec![2f64, 4f64, 6f64]);
}
