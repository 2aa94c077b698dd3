#![doc = include_str!("../README.md")]

mod fast_bit_vector;
pub use fast_bit_vector::{should_use_sparse, FastBitVector, RANK_SAMPLE, SELECT_SAMPLE};

mod sparse_bit_vector;
pub use sparse_bit_vector::SparseBitVector;

mod balanced_wavelet;
pub use balanced_wavelet::BalancedWavelet;

mod skewed_wavelet;
pub use skewed_wavelet::SkewedWavelet;

mod rle_wavelet;
pub use rle_wavelet::RLEWavelet;
