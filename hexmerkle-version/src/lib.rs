pub mod error;
pub mod version;

/// Returns early with an `UnknownVersionMismatch` (converted into the
/// caller's error type) unless `$version` is 0.
#[macro_export]
macro_rules! check_merkle_v0 {
    ($method:expr, $version:expr) => {{
        const EXPECTED_VERSION: u16 = 0;
        if $version != EXPECTED_VERSION {
            return Err($crate::error::MerkleVersionError::UnknownVersionMismatch {
                method: $method.to_string(),
                known_versions: vec![EXPECTED_VERSION],
                received: $version,
            }
            .into());
        }
    }};
}

/// Same as `check_merkle_v0` for functions returning a `CostResult`. The
/// caller must have `CostsExt` and `OperationCost` in scope.
#[macro_export]
macro_rules! check_merkle_v0_with_cost {
    ($method:expr, $version:expr) => {{
        const EXPECTED_VERSION: u16 = 0;
        if $version != EXPECTED_VERSION {
            return Err($crate::error::MerkleVersionError::UnknownVersionMismatch {
                method: $method.to_string(),
                known_versions: vec![EXPECTED_VERSION],
                received: $version,
            }
            .into())
            .wrap_with_cost(OperationCost::default());
        }
    }};
}
