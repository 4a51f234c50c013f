use bytemuck::Pod;
use derive_more::Display;
use dry::macro_for;
use num_traits::{FromPrimitive, NumAssign, NumCast};
use paste::paste;
use std::fmt::{Debug, Display};

mod sealed {
    #[doc(hidden)]
    pub trait Sealed {}

    macro_rules! impl_sealed {
        ($($t:ty),+) => {
            $(
                impl Sealed for $t {}
            )+
        };
    }

    impl_sealed!(f32, f64);
}
use sealed::Sealed;

/// Numerical types supported in **vecadd**.
#[allow(missing_docs)]
#[non_exhaustive]
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug, Display)]
pub enum ScalarType {
    F32,
    F64,
}

impl ScalarType {
    /// Size of the type in bytes.
    #[inline]
    pub fn size(&self) -> usize {
        use ScalarType::*;
        match self {
            F32 => 4,
            F64 => 8,
        }
    }
    /// Name of the type.
    ///
    /// Lowercase, ie "f32".
    #[inline]
    pub fn name(&self) -> &'static str {
        use ScalarType::*;
        match self {
            F32 => "f32",
            F64 => "f64",
        }
    }
}

/// Base trait for numerical types.
pub trait Scalar:
    Default
    + Copy
    + 'static
    + Send
    + Sync
    + NumCast
    + FromPrimitive
    + NumAssign
    + PartialEq
    + PartialOrd
    + Pod
    + Debug
    + Display
    + Sealed
{
    /// The [`ScalarType`] of the scalar.
    const SCALAR_TYPE: ScalarType;
}

macro_for!($X in [f32, f64] {
    paste! {
        impl Scalar for $X {
            const SCALAR_TYPE: ScalarType = ScalarType::[<$X:upper>];
        }
    }
});
