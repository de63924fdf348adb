//! User-visible failures of the back action.

use lodestone_utils::ResourceLocation;
use thiserror::Error;

/// Why a back request produced no teleport.
///
/// Every variant is terminal for that invocation and is reported to the
/// requesting player as a chat message; none of them propagate to the host
/// and none of them change any tracked state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BackError {
    /// The player has never been observed teleporting.
    #[error("No previous location found.")]
    NoPreviousLocation,
    /// The saved dimension is not loaded any more.
    #[error("World not found.")]
    WorldNotFound(ResourceLocation),
    /// The search exhausted its radius without a standable position.
    #[error("No safe location found.")]
    NoSafeLocation,
}
