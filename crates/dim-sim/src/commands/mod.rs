pub mod clusters;
pub mod collider;
pub mod run;
