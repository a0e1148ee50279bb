use crate::{LifeError, LifeResult, Node};

pub fn is_power_of_two(number: u64) -> bool {
    number.is_power_of_two()
}

/// checks that `dimension` can be the side length of a universe
pub(crate) fn validate_dimension(dimension: u64) -> LifeResult<u64> {
    if dimension < 2 || !is_power_of_two(dimension) {
        Err(LifeError::InvalidDimension(dimension))
    } else if dimension > Node::MAX_DIMENSION {
        Err(LifeError::DimensionTooLarge(dimension))
    } else {
        Ok(dimension)
    }
}
