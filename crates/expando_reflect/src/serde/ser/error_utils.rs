use core::fmt::Display;
use serde_core::ser::Error;

/// A helper function for generating a custom serialization error message.
///
/// Also reports the message through `log`, the serializer may discard it.
#[inline]
pub(super) fn make_custom_error<E: Error>(msg: impl Display) -> E {
    log::warn!("reflect serialization failed: {msg}");
    E::custom(msg)
}
