/*!

Buffers store the operands and results of kernel dispatches.

Create a [`Buffer`] from a [`Vec`]:
```
use vecadd::buffer::Buffer;

let buffer = Buffer::from(vec![1f32, 2., 3.]);
assert_eq!(buffer.len(), 3);
```
The length is fixed at construction: a buffer can be filled or written
through [`as_slice_mut`](Buffer::as_slice_mut), but never grown or shrunk.
*/

use crate::scalar::{Scalar, ScalarType};
use std::{
    fmt::{self, Display},
    ops::{Deref, DerefMut},
};

/// A host buffer of scalars.
#[derive(Clone)]
pub struct Buffer<T: Scalar> {
    data: Vec<T>,
}

impl<T: Scalar> Buffer<T> {
    pub fn from_vec(vec: Vec<T>) -> Self {
        Self { data: vec }
    }
    pub fn from_elem(len: usize, elem: T) -> Self {
        Self::from_vec(vec![elem; len])
    }
    pub fn zeros(len: usize) -> Self {
        Self::from_elem(len, T::zero())
    }
    pub fn scalar_type(&self) -> ScalarType {
        T::SCALAR_TYPE
    }
    pub fn len(&self) -> usize {
        self.data.len()
    }
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
    pub fn as_slice(&self) -> &[T] {
        self.data.as_slice()
    }
    pub fn as_slice_mut(&mut self) -> &mut [T] {
        self.data.as_mut_slice()
    }
    pub fn fill(&mut self, elem: T) {
        for y in self.data.iter_mut() {
            *y = elem;
        }
    }
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

impl<T: Scalar> From<Vec<T>> for Buffer<T> {
    fn from(vec: Vec<T>) -> Self {
        Self::from_vec(vec)
    }
}

impl<T: Scalar> Deref for Buffer<T> {
    type Target = [T];
    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T: Scalar> DerefMut for Buffer<T> {
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_slice_mut()
    }
}

/// Prints the elements separated by single spaces, ie "1 2 3".
impl<T: Scalar> Display for Buffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut elems = self.data.iter();
        if let Some(first) = elems.next() {
            write!(f, "{first}")?;
            for elem in elems {
                write!(f, " {elem}")?;
            }
        }
        Ok(())
    }
}
