/*!

A [`WorkerPool`](crate::pool::WorkerPool) executes [kernels](crate::kernel)
across a fixed set of worker threads. Work items are independent, so the
number of workers never changes the result of a dispatch, only how it is
divided up.

Creating a pool and printing out its size:
```
# use vecadd::{anyhow::Result, pool::WorkerPool};
# fn main() -> Result<()> {
let pool = WorkerPool::builder()
    .workers(2)
    .build()?;
dbg!(pool.workers());
Ok(())
# }
```
*/

use anyhow::Result;
use once_cell::sync::OnceCell;
use rayon::{ThreadPool, ThreadPoolBuilder};
use std::{
    fmt::{self, Debug},
    sync::Arc,
};

/// Builders.
pub mod builder {
    use super::*;

    /// Builder for creating a [`WorkerPool`].
    pub struct WorkerPoolBuilder {
        pub(super) workers: usize,
    }

    impl WorkerPoolBuilder {
        /// Number of workers, defaults to 0.
        ///
        /// 0 sizes the pool to the available parallelism, one worker
        /// per logical cpu.
        pub fn workers(mut self, workers: usize) -> Self {
            self.workers = workers;
            self
        }
        /// Creates a worker pool.
        ///
        /// **errors**
        ///
        /// - The worker threads could not be spawned.
        pub fn build(self) -> Result<WorkerPool> {
            let inner = ThreadPoolBuilder::new()
                .num_threads(self.workers)
                .thread_name(|index| format!("vecadd-worker-{index}"))
                .build()?;
            Ok(WorkerPool {
                inner: Arc::new(inner),
            })
        }
    }
}
use builder::*;

static GLOBAL_POOL: OnceCell<WorkerPool> = OnceCell::new();

/** A pool of worker threads.

Pools can be cloned, which is equivalent to [`Arc::clone()`].

Each pool is unique:
```
# use vecadd::{anyhow::Result, pool::WorkerPool};
# fn main() -> Result<()> {
let a = WorkerPool::builder().build()?;
let b = WorkerPool::builder().build()?;
assert_ne!(a, b);
# Ok(())
# }
```
*/
#[derive(Clone)]
pub struct WorkerPool {
    inner: Arc<ThreadPool>,
}

impl WorkerPool {
    /// A builder for creating a worker pool.
    pub fn builder() -> WorkerPoolBuilder {
        WorkerPoolBuilder { workers: 0 }
    }
    /** The process wide pool, created on first use.

    Sized to the available parallelism.

    **errors**
    Returns an error if the pool could not be created. */
    pub fn global() -> Result<&'static WorkerPool> {
        GLOBAL_POOL.get_or_try_init(|| Self::builder().build())
    }
    /// Number of workers in the pool.
    pub fn workers(&self) -> usize {
        self.inner.current_num_threads()
    }
    pub(crate) fn install<R: Send>(&self, f: impl FnOnce() -> R + Send) -> R {
        self.inner.install(f)
    }
}

/** Prints `WorkerPool(workers)`. */
impl Debug for WorkerPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WorkerPool({})", self.workers())
    }
}

impl PartialEq for WorkerPool {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Eq for WorkerPool {}
