use ndarray::ArrayD;
use phasor_core::Real;
use std::ops::Index;

/// Per-component fraction arrays, in component order.
///
/// All arrays share the broadcast sample shape. Values are returned as solved:
/// they are neither clamped to `[0, 1]` nor renormalised.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentFractions {
    fractions: Vec<ArrayD<Real>>,
}

impl ComponentFractions {
    pub fn new(fractions: Vec<ArrayD<Real>>) -> Self {
        Self { fractions }
    }

    /// Number of components.
    pub fn len(&self) -> usize {
        self.fractions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fractions.is_empty()
    }

    /// Fractions of component `index` (0 is the first component).
    pub fn component(&self, index: usize) -> Option<&ArrayD<Real>> {
        self.fractions.get(index)
    }

    /// Sample grid shape shared by every component.
    pub fn shape(&self) -> &[usize] {
        self.fractions.first().map(|f| f.shape()).unwrap_or(&[])
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ArrayD<Real>> {
        self.fractions.iter()
    }

    /// Elementwise sum over components.
    pub fn total(&self) -> Option<ArrayD<Real>> {
        let (first, rest) = self.fractions.split_first()?;
        Some(rest.iter().fold(first.clone(), |acc, f| acc + f))
    }

    pub fn into_vec(self) -> Vec<ArrayD<Real>> {
        self.fractions
    }
}

impl Index<usize> for ComponentFractions {
    type Output = ArrayD<Real>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.fractions[index]
    }
}

impl From<(ArrayD<Real>, ArrayD<Real>)> for ComponentFractions {
    fn from((first, second): (ArrayD<Real>, ArrayD<Real>)) -> Self {
        Self::new(vec![first, second])
    }
}

impl<'a> IntoIterator for &'a ComponentFractions {
    type Item = &'a ArrayD<Real>;
    type IntoIter = std::slice::Iter<'a, ArrayD<Real>>;

    fn into_iter(self) -> Self::IntoIter {
        self.fractions.iter()
    }
}
