//! Application systems
//!
//! The simulation façade driven by the host loop, and the renderer contract
//! it reports body state through.

mod render;
mod simulation;

pub use render::{LogCollector, RenderCollector, RenderGeometry, RenderItem, RenderList};
pub use simulation::{Simulation, SimulationError};
