// Signal features and the normalizer that produces them from raw measurements.

pub mod features;
pub mod normalize;
pub mod raw;
pub mod username;

pub use features::{Feature, SignalFeatures};
pub use normalize::{normalize, normalize_with, NormalizationPolicy, PolicyKind};
pub use raw::RawSignals;
