// Domain layer: value objects of the delivery model. No dependencies beyond std/serde.

pub mod location;
pub mod value_object;

pub use location::{Location, LATITUDE_RANGE, LONGITUDE_RANGE};
pub use value_object::ValueObject;
