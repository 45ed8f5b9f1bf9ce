// region:    --- Imports
use crate::database::DatabaseError;
use thiserror::Error;

// endregion: --- Imports

// region:    --- Errors
/// 입력 형식 오류
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("field `{0}` must not be empty")]
    EmptyField(&'static str),

    #[error("field `{0}` must be a finite number")]
    NonFiniteAmount(&'static str),

    #[error("startTime + duration overflows")]
    DurationOverflow,
}

/// 경매 저장소 연산 오류
///
/// 백엔드 오류는 분류하지 않고 그대로 감싼다.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{operation} failed to read from store: {source}")]
    Read {
        operation: &'static str,
        source: DatabaseError,
    },

    #[error("{operation} failed to write to store: {source}")]
    Write {
        operation: &'static str,
        source: DatabaseError,
    },

    #[error("invalid input: {0}")]
    InvalidInput(#[from] ValidationError),
}

impl StoreError {
    pub fn read(operation: &'static str, source: DatabaseError) -> Self {
        StoreError::Read { operation, source }
    }

    pub fn write(operation: &'static str, source: DatabaseError) -> Self {
        StoreError::Write { operation, source }
    }

    pub fn is_read(&self) -> bool {
        matches!(self, StoreError::Read { .. })
    }

    pub fn is_write(&self) -> bool {
        matches!(self, StoreError::Write { .. })
    }
}
// endregion: --- Errors

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_kinds() {
        let err = StoreError::read(
            "fetch_auction_by_id",
            DatabaseError::Unavailable("timeout".to_string()),
        );
        assert!(err.is_read());
        assert!(!err.is_write());
        assert_eq!(
            err.to_string(),
            "fetch_auction_by_id failed to read from store: store unavailable: timeout"
        );

        let err = StoreError::write(
            "make_new_bid",
            DatabaseError::Unavailable("denied".to_string()),
        );
        assert!(err.is_write());

        let err: StoreError = ValidationError::EmptyField("seller").into();
        assert!(matches!(
            err,
            StoreError::InvalidInput(ValidationError::EmptyField("seller"))
        ));
    }
}
