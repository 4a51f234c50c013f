use nanorand::{Rng, WyRand};
use vecadd::{buffer::Buffer, kernel::VecAdd, pool::WorkerPool, result::Result};

/// How many numbers to generate and add together.
const WORK_ITEMS: usize = 16;

fn main() -> Result<()> {
    // generate our random vectors.
    let mut wyrand = WyRand::new();
    let mut a = vec![0f32; WORK_ITEMS];
    wyrand.fill(&mut a);
    let mut b = vec![0f32; WORK_ITEMS];
    wyrand.fill(&mut b);

    let pool = WorkerPool::global()?;
    let kernel = VecAdd::builder().work_items(WORK_ITEMS).build()?;

    let mut c = Buffer::zeros(WORK_ITEMS);
    kernel.dispatch(pool, &a, &b, c.as_slice_mut())?;

    println!("Vector C: {c}");
    Ok(())
}
