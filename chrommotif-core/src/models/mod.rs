pub mod region;
pub mod state_bin;

// re-export for cleaner imports
pub use self::region::Region;
pub use self::state_bin::StateBin;
