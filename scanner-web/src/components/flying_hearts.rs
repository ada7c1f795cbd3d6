//! Flying Hearts Overlay Component
//! Scatters a fixed batch of heart glyphs across the viewport

use leptos::prelude::*;

use crate::utils::constants::{HEART_COUNT, HEART_MAX_DELAY_SECONDS};

/// A single decorative heart: viewport-percentage position plus an animation
/// start offset. Immutable once generated; `id` doubles as the render key.
#[derive(Debug, Clone, PartialEq)]
pub struct HeartParticle {
    pub id: usize,
    pub x: f64,
    pub y: f64,
    pub delay_seconds: f64,
}

/// Generate the heart batch from a random source emitting values in [0, 1).
///
/// The source is injected so tests can script the sequence; the component
/// feeds it the browser RNG.
pub fn scatter_hearts<F>(count: usize, mut random: F) -> Vec<HeartParticle>
where
    F: FnMut() -> f64,
{
    (0..count)
        .map(|id| HeartParticle {
            id,
            x: random() * 100.0,
            y: random() * 100.0,
            delay_seconds: random() * HEART_MAX_DELAY_SECONDS,
        })
        .collect()
}

/// Full-viewport overlay of floating hearts. The batch is generated once per
/// mount and never regenerated; the overlay intercepts no pointer input.
#[component]
pub fn FlyingHearts() -> impl IntoView {
    let (hearts, _set_hearts) = signal(scatter_hearts(HEART_COUNT, js_sys::Math::random));

    view! {
        <div class="flying-hearts">
            <For
                each=move || hearts.get()
                key=|heart| heart.id
                children=|heart| {
                    view! {
                        <span
                            class="heart"
                            style=format!(
                                "left: {:.2}%; top: {:.2}%; animation-delay: {:.2}s;",
                                heart.x, heart.y, heart.delay_seconds,
                            )
                        >
                            "❤️"
                        </span>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Deterministic source cycling through a fixed sequence
    fn scripted(values: &[f64]) -> impl FnMut() -> f64 + '_ {
        let mut i = 0;
        move || {
            let v = values[i % values.len()];
            i += 1;
            v
        }
    }

    #[test]
    fn generates_exactly_fifteen_hearts() {
        let hearts = scatter_hearts(HEART_COUNT, scripted(&[0.5]));
        assert_eq!(hearts.len(), 15);
    }

    #[test]
    fn positions_and_delays_stay_in_range() {
        // Includes a value arbitrarily close to the top of the source range
        let hearts = scatter_hearts(HEART_COUNT, scripted(&[0.0, 0.25, 0.999_999]));
        for heart in &hearts {
            assert!((0.0..100.0).contains(&heart.x));
            assert!((0.0..100.0).contains(&heart.y));
            assert!((0.0..HEART_MAX_DELAY_SECONDS).contains(&heart.delay_seconds));
        }
    }

    #[test]
    fn ids_are_stable_and_sequential() {
        let hearts = scatter_hearts(HEART_COUNT, scripted(&[0.1]));
        for (i, heart) in hearts.iter().enumerate() {
            assert_eq!(heart.id, i);
        }
    }

    #[test]
    fn same_source_yields_same_batch() {
        let a = scatter_hearts(HEART_COUNT, scripted(&[0.1, 0.7, 0.3]));
        let b = scatter_hearts(HEART_COUNT, scripted(&[0.1, 0.7, 0.3]));
        assert_eq!(a, b);
    }
}
