//! Axis baselines, ticks and labels derived from resolved scales.

pub(crate) mod builder;

pub(crate) use builder::build_axis;
