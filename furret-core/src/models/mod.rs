pub mod chain;
pub mod chain_group;
pub mod notation;
pub mod residue_range;

// re-export for cleaner imports
pub use self::chain::Chain;
pub use self::chain_group::ChainGroup;
pub use self::notation::GroupNotation;
pub use self::residue_range::{ResidueRange, Union};
