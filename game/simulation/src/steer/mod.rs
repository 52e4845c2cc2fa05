pub use behaviour::{Flee, Seek, SteeringBehaviour, SteeringResult};
pub use flee::{flee, DEFAULT_FLEE_EPSILON};
pub use seek::seek;

mod behaviour;
mod flee;
mod seek;
