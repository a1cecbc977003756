//! Provider composition with a fallback source.

use tideline_core::{Conditions, ConditionsError, ConditionsProvider};

/// Try `primary`, and on failure answer from `fallback`.
///
/// [`ConditionsError::EmptyLocation`] is returned as is: a blank location is
/// the caller's mistake and no other source can fix it.
///
/// # Examples
/// ```
/// use tideline_core::ConditionsProvider;
/// use tideline_data::{FallbackConditionsProvider, SimulatedConditionsProvider};
///
/// let provider = FallbackConditionsProvider::new(
///     SimulatedConditionsProvider::new(1),
///     SimulatedConditionsProvider::new(2),
/// );
/// assert!(provider.conditions("Lahaina").is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct FallbackConditionsProvider<P, F> {
    primary: P,
    fallback: F,
}

impl<P, F> FallbackConditionsProvider<P, F> {
    /// Compose `primary` with `fallback`.
    pub const fn new(primary: P, fallback: F) -> Self {
        Self { primary, fallback }
    }

    /// The provider consulted first.
    pub const fn primary(&self) -> &P {
        &self.primary
    }

    /// The provider consulted when the primary fails.
    pub const fn fallback(&self) -> &F {
        &self.fallback
    }
}

impl<P, F> ConditionsProvider for FallbackConditionsProvider<P, F>
where
    P: ConditionsProvider,
    F: ConditionsProvider,
{
    fn conditions(&self, location: &str) -> Result<Conditions, ConditionsError> {
        match self.primary.conditions(location) {
            Err(ConditionsError::EmptyLocation) => Err(ConditionsError::EmptyLocation),
            Err(err) => {
                log::warn!("primary conditions source failed, falling back: {err}");
                self.fallback.conditions(location)
            }
            ok => ok,
        }
    }
}
