use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IntSetError {
    #[error("set capacity of {capacity} exceeded")]
    CapacityExceeded { capacity: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_exceeded_message() {
        let err = IntSetError::CapacityExceeded { capacity: 4 };
        assert_eq!(err.to_string(), "set capacity of 4 exceeded");
    }
}
