use crate::{Real, ShapeError};
use ndarray::{ArrayBase, ArrayD, Data, Dimension, IxDyn};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Row-major n-dimensional array in a JSON-friendly layout.
///
/// `shape` may be omitted, in which case `data` is read as a 1-D array.
/// An empty `shape` denotes a scalar. Non-finite values are written as `null`
/// and `null` is read back as NaN, so masked samples survive a JSON round trip.
///
/// ```
/// use phasor_core::NdArrayData;
///
/// let json = r#"{ "shape": [2, 2], "data": [0.1, 0.2, null, 0.4] }"#;
/// let data: NdArrayData = serde_json::from_str(json).unwrap();
/// let array = data.to_array().unwrap();
/// assert_eq!(array.shape(), &[2, 2]);
/// assert!(array[[1, 0]].is_nan());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NdArrayData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shape: Option<Vec<usize>>,
    #[serde(
        serialize_with = "serialize_nullable",
        deserialize_with = "deserialize_nullable"
    )]
    pub data: Vec<Real>,
}

impl NdArrayData {
    /// 1-D data without an explicit shape.
    pub fn from_vec(data: Vec<Real>) -> Self {
        Self { shape: None, data }
    }

    /// Copy an array in logical order, recording its shape.
    pub fn from_array<S, D>(array: &ArrayBase<S, D>) -> Self
    where
        S: Data<Elem = Real>,
        D: Dimension,
    {
        Self {
            shape: Some(array.shape().to_vec()),
            data: array.iter().copied().collect(),
        }
    }

    /// Shape this data describes.
    pub fn resolved_shape(&self) -> Vec<usize> {
        self.shape
            .clone()
            .unwrap_or_else(|| vec![self.data.len()])
    }

    /// Build the owned array, failing if the element count does not match.
    pub fn to_array(&self) -> Result<ArrayD<Real>, ShapeError> {
        let shape = self.resolved_shape();
        let expected: usize = shape.iter().product();
        if expected != self.data.len() {
            return Err(ShapeError::DataLength {
                expected,
                got: self.data.len(),
            });
        }
        ArrayD::from_shape_vec(IxDyn(&shape), self.data.clone()).map_err(|_| {
            ShapeError::DataLength {
                expected,
                got: self.data.len(),
            }
        })
    }
}

fn serialize_nullable<S: Serializer>(data: &[Real], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(data.iter().map(|v| v.is_finite().then_some(*v)))
}

fn deserialize_nullable<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<Real>, D::Error> {
    let raw = Vec::<Option<Real>>::deserialize(deserializer)?;
    Ok(raw.into_iter().map(|v| v.unwrap_or(Real::NAN)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{arr0, arr2};

    #[test]
    fn missing_shape_is_one_dimensional() {
        let data = NdArrayData::from_vec(vec![0.1, 0.2, 0.3]);
        assert_eq!(data.to_array().unwrap().shape(), &[3]);
    }

    #[test]
    fn empty_shape_is_scalar() {
        let data = NdArrayData {
            shape: Some(vec![]),
            data: vec![0.25],
        };
        let array = data.to_array().unwrap();
        assert_eq!(array.ndim(), 0);
        assert_eq!(array, arr0(0.25).into_dyn());
    }

    #[test]
    fn element_count_is_checked() {
        let data = NdArrayData {
            shape: Some(vec![2, 2]),
            data: vec![0.1, 0.2, 0.3],
        };
        assert_eq!(
            data.to_array().unwrap_err(),
            ShapeError::DataLength {
                expected: 4,
                got: 3
            }
        );
    }

    #[test]
    fn nan_survives_json() {
        let array = arr2(&[[0.5, Real::NAN]]);
        let json = serde_json::to_string(&NdArrayData::from_array(&array)).unwrap();
        assert_eq!(json, r#"{"shape":[1,2],"data":[0.5,null]}"#);
        let back: NdArrayData = serde_json::from_str(&json).unwrap();
        let back = back.to_array().unwrap();
        assert_eq!(back[[0, 0]], 0.5);
        assert!(back[[0, 1]].is_nan());
    }
}
