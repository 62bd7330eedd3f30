pub mod bands;
pub mod comparison;
pub mod filters;
pub mod percentiles;
pub mod scale;
pub mod trace_look;
pub mod trajectories;
pub mod transition;
