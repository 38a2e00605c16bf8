/*
    Conversion of flattened 3-D sample arrays from whitespace-delimited text to raw f32 binary.
    The (nx, ny, nt) triple is caller-asserted metadata: it is only used to check the total
    element count, the flat sample order is never changed.
 */
pub mod convert;
pub mod error;
pub mod io_raw;
pub mod io_txt;

pub use convert::{convert, ConvertArgs, ConvertReport};
pub use error::ConvertError;

const N_DIMS:usize = 3;

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_numel() {
        let dims = GridDim::new(2,2,1);
        assert_eq!(dims.numel(),Some(4));
        assert!(dims.matches(4));
        assert!(!dims.matches(8));
    }

    #[test]
    fn test_singleton() {
        assert!(GridDim::new(1,1,1).matches(1));
        assert!(!GridDim::new(1,1,1).matches(0));
    }

    #[test]
    fn test_zero_dim_expects_no_samples() {
        let dims = GridDim::new(4,0,3);
        assert_eq!(dims.numel(),Some(0));
        assert!(dims.matches(0));
        assert!(!dims.matches(12));
    }

    #[test]
    fn test_negative_dim_never_matches() {
        let dims = GridDim::new(-2,2,1);
        assert_eq!(dims.numel(),Some(-4));
        assert!(!dims.matches(4));
        // two negatives give a positive count
        assert!(GridDim::new(-2,-2,1).matches(4));
    }

    #[test]
    fn test_overflow_never_matches() {
        let dims = GridDim::new(i64::MAX,i64::MAX,i64::MAX);
        assert_eq!(dims.numel(),None);
        assert!(!dims.matches(usize::MAX));
        // wider than usize but still representable
        let dims = GridDim::new(99_999_999_999,99_999_999_999,99_999_999_999);
        assert!(dims.numel().is_some());
        assert!(!dims.matches(usize::MAX));
    }

    #[test]
    fn test_display() {
        assert_eq!(GridDim::new(10,20,5).to_string(),"10 x 20 x 5");
        assert_eq!(GridDim::new(-1,0,5).to_string(),"-1 x 0 x 5");
    }

}

/// Declared shape of a flattened (nx, ny, nt) array.
/// Any integers are accepted; a shape that no sample count can satisfy simply never matches.
#[derive(Clone,Copy,Debug,PartialEq,Eq)]
pub struct GridDim {
    shape: [i64; N_DIMS],
}

impl GridDim {

    pub fn new(nx:i64, ny:i64, nt:i64) -> GridDim {
        GridDim{
            shape: [nx,ny,nt],
        }
    }

    /// nx * ny * nt, or None if the product does not fit in an i128
    pub fn numel(&self) -> Option<i128> {
        self.shape.iter().try_fold(1i128,|acc,&d| acc.checked_mul(d as i128))
    }

    /// true if `count` samples fill the declared shape exactly
    pub fn matches(&self, count:usize) -> bool {
        self.numel() == Some(count as i128)
    }

}

impl std::fmt::Display for GridDim {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f,"{} x {} x {}",self.shape[0],self.shape[1],self.shape[2])
    }
}
