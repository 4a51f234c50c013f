/*!

Kernels compute one output element per work item. [`VecAdd`] adds two
slices elementwise:
```
# use vecadd::{anyhow::Result, buffer::Buffer, kernel::VecAdd, pool::WorkerPool};
# fn main() -> Result<()> {
let pool = WorkerPool::builder().build()?;
let kernel = VecAdd::builder()
    .work_items(3)
    .build()?;
let mut c = Buffer::zeros(3);
kernel.dispatch(&pool, &[1f32, 2., 3.], &[4., 5., 6.], c.as_slice_mut())?;
assert_eq!(c.into_vec(), vec![5f32, 7., 9.]);
Ok(())
# }
```

[`vec_add`] wraps building and dispatching for the common case where the
output is freshly allocated.
*/

use crate::{buffer::Buffer, pool::WorkerPool, scalar::Scalar};
use rayon::prelude::*;

/// Errors.
pub mod error {
    /// A slice does not have one element per work item.
    ///
    /// Every slice is checked before any element is computed, so a failed
    /// dispatch never writes to the output.
    #[derive(Clone, Copy, Debug, thiserror::Error)]
    #[error("Kernel `vec_add` elementwise slice `{name}` has len {len}, expected {work_items}!")]
    pub struct DimensionMismatch {
        pub(super) name: &'static str,
        pub(super) len: usize,
        pub(super) work_items: usize,
    }

    /// The work item count is 0.
    #[derive(Clone, Copy, Debug, thiserror::Error)]
    #[error("Kernel `vec_add` requires at least 1 work item!")]
    pub struct InvalidConfiguration {}

    /// A kernel could not be built or dispatched.
    #[derive(Clone, Copy, Debug, thiserror::Error)]
    pub enum KernelError {
        #[error(transparent)]
        InvalidConfiguration(#[from] InvalidConfiguration),
        #[error(transparent)]
        DimensionMismatch(#[from] DimensionMismatch),
    }
}
use error::*;

/// Builders.
pub mod builder {
    use super::*;

    /// Builder for creating a [`VecAdd`] kernel.
    pub struct VecAddBuilder {
        pub(super) work_items: usize,
    }

    impl VecAddBuilder {
        /// Number of work items, one per output element, defaults to 0.
        pub fn work_items(mut self, work_items: usize) -> Self {
            self.work_items = work_items;
            self
        }
        /// Creates the kernel.
        ///
        /// **errors**
        ///
        /// - [`InvalidConfiguration`](super::error::InvalidConfiguration) if
        ///   the number of work items is 0.
        pub fn build(self) -> Result<VecAdd, InvalidConfiguration> {
            if self.work_items == 0 {
                return Err(InvalidConfiguration {});
            }
            Ok(VecAdd {
                work_items: self.work_items,
            })
        }
    }
}
use builder::*;

mod kernels {
    use crate::scalar::Scalar;

    pub fn vec_add<T: Scalar>(a: &T, b: &T, c: &mut T) {
        *c = *a + *b;
    }
}

/** An elementwise addition kernel.

For each work item `i`, computes `c[i] = a[i] + b[i]`. Work items do not
depend on each other, so splitting them across 1 or many workers produces
bitwise identical output.

Kernels can be dispatched on any pool, any number of times.
*/
#[derive(Clone, Copy, Debug)]
pub struct VecAdd {
    work_items: usize,
}

impl VecAdd {
    /// A builder for creating a kernel.
    pub fn builder() -> VecAddBuilder {
        VecAddBuilder { work_items: 0 }
    }
    /// Number of work items the kernel was built for.
    pub fn work_items(&self) -> usize {
        self.work_items
    }
    /** Dispatches the kernel.

    Each work item reads `a` and `b` and writes `c` at its own index.
    Blocks until all work items have finished.

    **errors**

    - [`DimensionMismatch`](error::DimensionMismatch) if any slice does not
      have [`work_items`](VecAdd::work_items) elements.
    */
    pub fn dispatch<T: Scalar>(
        &self,
        pool: &WorkerPool,
        a: &[T],
        b: &[T],
        c: &mut [T],
    ) -> Result<(), DimensionMismatch> {
        for (name, len) in [("a", a.len()), ("b", b.len()), ("c", c.len())] {
            if len != self.work_items {
                return Err(DimensionMismatch {
                    name,
                    len,
                    work_items: self.work_items,
                });
            }
        }
        pool.install(|| {
            c.par_iter_mut()
                .zip(a.par_iter().zip(b.par_iter()))
                .for_each(|(c, (a, b))| kernels::vec_add(a, b, c));
        });
        Ok(())
    }
}

/** Adds `a` and `b` elementwise into a new [`Buffer`].

Builds a [`VecAdd`] kernel with `work_items` work items and dispatches it
on `pool`, returning the output buffer.

**errors**

- [`InvalidConfiguration`](error::InvalidConfiguration) if `work_items`
  is 0.
- [`DimensionMismatch`](error::DimensionMismatch) if `a` or `b` does not
  have `work_items` elements.
*/
pub fn vec_add<T: Scalar>(
    pool: &WorkerPool,
    a: &[T],
    b: &[T],
    work_items: usize,
) -> Result<Buffer<T>, KernelError> {
    let kernel = VecAdd::builder().work_items(work_items).build()?;
    let mut c = Buffer::zeros(work_items);
    kernel.dispatch(pool, a, b, c.as_slice_mut())?;
    Ok(c)
}
