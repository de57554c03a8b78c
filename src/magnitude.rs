//! Lazily cached vector magnitudes.
//!
//! Every vector type owns a [`MagnitudeCache`]. Reading the squared
//! magnitude, the magnitude or the normalized vector fills the cache if it is
//! dirty, and any mutation of the components marks it dirty again. The cache
//! lives in a [`Cell`] so that the reads can take `&self`. This also makes
//! the vector types `!Sync`, so a vector can not be read from several threads
//! at once while its cache is being filled.

use std::{cell::Cell, fmt};

/// The magnitude-derived quantities of a vector.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Magnitudes {
    /// The plain sum of squared components. Overflows to infinity for
    /// vectors longer than about `1.8e19` even though `magnitude` is finite.
    pub(crate) squared: f32,
    pub(crate) magnitude: f32,
    /// `1 / magnitude`. Infinite for a zero vector, which must be checked
    /// for before scaling by it.
    pub(crate) inverse: f32,
}

/// Memoization cell for the [`Magnitudes`] of a vector. An empty cell is
/// the dirty state.
pub(crate) struct MagnitudeCache {
    cached: Cell<Option<Magnitudes>>,
}

impl Magnitudes {
    fn from_components(components: &[f32]) -> Self {
        let squared: f32 = components.iter().map(|component| component * component).sum();

        // Rescale when the plain sum leaves the normal range while the
        // components themselves do not.
        let magnitude = if squared.is_infinite()
            || (squared < f32::MIN_POSITIVE && components.iter().any(|&c| c != 0.0))
        {
            rescaled_magnitude(components)
        } else {
            squared.sqrt()
        };

        Self {
            squared,
            magnitude,
            inverse: magnitude.recip(),
        }
    }

    /// Whether the components must be scaled by [`Self::inverse`] to
    /// normalize the vector. A zero vector has nothing to scale, and scaling
    /// it would produce `0 * inf = NaN`.
    #[inline]
    pub(crate) fn can_normalize(&self) -> bool {
        self.magnitude != 0.0
    }
}

impl MagnitudeCache {
    /// Creates a cache in the dirty state.
    #[inline]
    pub(crate) const fn dirty() -> Self {
        Self {
            cached: Cell::new(None),
        }
    }

    #[inline]
    pub(crate) fn is_dirty(&self) -> bool {
        self.cached.get().is_none()
    }

    /// Marks the cache dirty. Requires exclusive access, since the
    /// components being invalidated can only change through `&mut`.
    #[inline]
    pub(crate) fn invalidate(&mut self) {
        *self.cached.get_mut() = None;
    }

    /// Returns the cached magnitudes, computing them from the given
    /// components if the cache is dirty.
    #[inline]
    pub(crate) fn get_or_compute(&self, components: &[f32]) -> Magnitudes {
        if let Some(magnitudes) = self.cached.get() {
            return magnitudes;
        }
        let magnitudes = Magnitudes::from_components(components);
        self.cached.set(Some(magnitudes));
        magnitudes
    }
}

/// Computes the Euclidean norm with the components divided by the largest
/// absolute component, so that the squares can neither overflow nor
/// underflow.
fn rescaled_magnitude(components: &[f32]) -> f32 {
    let max_abs = components
        .iter()
        .fold(0.0_f32, |max_abs, component| max_abs.max(component.abs()));
    if max_abs.is_infinite() {
        return max_abs;
    }
    let scaled_squared: f32 = components
        .iter()
        .map(|component| {
            let scaled = component / max_abs;
            scaled * scaled
        })
        .sum();
    max_abs * scaled_squared.sqrt()
}

impl Default for MagnitudeCache {
    fn default() -> Self {
        Self::dirty()
    }
}

/// Cloning yields a dirty cache. The clone recomputes on its first read
/// rather than trusting state that was derived from another instance.
impl Clone for MagnitudeCache {
    fn clone(&self) -> Self {
        Self::dirty()
    }
}

impl fmt::Debug for MagnitudeCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.cached.get() {
            Some(magnitudes) => f.debug_tuple("Clean").field(&magnitudes).finish(),
            None => f.write_str("Dirty"),
        }
    }
}
