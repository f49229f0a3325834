// Quote derivation engine.
// The tariff table is data (tariffs.rs); the engine folds a measurement
// record over it (engine.rs). Display rounding lives in view.rs only —
// the engine itself keeps full precision.

pub mod engine;
pub mod tariffs;
pub mod view;

pub use engine::compute_quote;
