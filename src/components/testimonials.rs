use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::components::carousel::{Rotation, ROTATION_MS};
use crate::components::reveal::{use_reveal, REVEAL_THRESHOLD};
use crate::data::TESTIMONIALS;

pub const SECTION_ID: &str = "testimonials-section";

fn star_row(rating: u32) -> String {
    "★".repeat(rating as usize)
}

#[function_component(TestimonialsSection)]
pub fn testimonials_section() -> Html {
    let reveal = use_reveal(SECTION_ID, REVEAL_THRESHOLD);
    let rotation = use_state(Rotation::default);

    // The interval is keyed on the rotation's timer key, so any change
    // (automatic tick or a dot click, including re-clicking the active
    // dot) drops the old timer and starts a fresh full 6s interval. The
    // handle is dropped on unmount either way.
    {
        let rotation = rotation.clone();
        let deps = (*rotation).timer_key();
        use_effect_with_deps(
            move |_| {
                let current = *rotation;
                let interval = Interval::new(ROTATION_MS, move || {
                    rotation.set(current.tick(TESTIMONIALS.len()));
                });
                move || drop(interval)
            },
            deps,
        );
    }

    let active_index = rotation.index;

    html! {
        <section id={SECTION_ID} class="testimonials">
            <style>
                {r#"
                    .testimonials { background: #FDFBF8; padding: 96px 0; }
                    .testimonials-header { max-width: 42rem; margin: 0 auto 64px; text-align: center; }
                    .testimonials-header p.body-text { color: #5A5A5A; line-height: 1.7; }
                    .carousel { max-width: 48rem; margin: 0 auto; position: relative; }
                    .carousel-stack { position: relative; }
                    .carousel-card {
                        position: absolute;
                        inset: 0;
                        opacity: 0;
                        transform: translateX(16px);
                        pointer-events: none;
                        transition: opacity 0.5s ease, transform 0.5s ease;
                    }
                    .carousel-card.active {
                        opacity: 1;
                        transform: translateX(0);
                        pointer-events: auto;
                    }
                    .testimonial-card {
                        background: #FFFFFF;
                        border-radius: 16px;
                        padding: 48px;
                        box-shadow: 0 20px 40px rgba(58, 58, 58, 0.08);
                    }
                    .star-row { color: #E8B4C8; font-size: 1.1rem; letter-spacing: 2px; margin-bottom: 24px; }
                    .testimonial-quote {
                        font-family: Georgia, serif;
                        font-style: italic;
                        font-size: 1.2rem;
                        color: #3A3A3A;
                        line-height: 1.7;
                        margin: 0 0 32px;
                    }
                    .testimonial-author { display: flex; align-items: center; gap: 16px; }
                    .author-avatar {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        width: 48px;
                        height: 48px;
                        border-radius: 50%;
                        background: #E8B4C8;
                        font-size: 1.5rem;
                    }
                    .author-name { font-weight: 600; color: #3A3A3A; margin: 0; }
                    .author-title { font-size: 0.85rem; color: #8B8B8B; margin: 0; }
                    .carousel-placeholder { opacity: 0; pointer-events: none; }
                    .carousel-placeholder .placeholder-body { height: 16rem; }
                    .dot-row { display: flex; justify-content: center; gap: 12px; margin-top: 32px; }
                    .carousel-dot {
                        width: 12px;
                        height: 12px;
                        border: none;
                        border-radius: 999px;
                        background: #D4C5B9;
                        cursor: pointer;
                        padding: 0;
                        transition: width 0.3s ease, background 0.3s ease;
                    }
                    .carousel-dot:hover { background: #E8B4C8; }
                    .carousel-dot.active { background: #E8B4C8; width: 32px; }
                    .trust-stats {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 48px;
                        max-width: 42rem;
                        margin: 80px auto 0;
                        text-align: center;
                    }
                    .trust-stat-value {
                        font-family: Georgia, serif;
                        font-size: 2rem;
                        color: #E8B4C8;
                        margin: 0 0 8px;
                    }
                    .trust-stat-label { font-size: 0.85rem; color: #8B8B8B; margin: 0; }
                "#}
            </style>

            <div class="section-container">
                <div class="testimonials-header">
                    <p class="section-eyebrow">{"Loved by Our Customers"}</p>
                    <h2 class="section-title">{"Customer Testimonials"}</h2>
                    <p class="body-text">
                        {"Hear from women who have discovered the beauty and elegance of Bela Fios \
                          handcrafted bags."}
                    </p>
                </div>

                <div class="carousel">
                    <div class={classes!("carousel-stack", "section-reveal", reveal.class())}>
                        { for TESTIMONIALS.iter().enumerate().map(|(index, testimonial)| html! {
                            <div
                                key={testimonial.id}
                                class={classes!(
                                    "carousel-card",
                                    (index == active_index).then_some("active"),
                                )}
                            >
                                <div class="testimonial-card">
                                    <div class="star-row">
                                        { star_row(testimonial.rating) }
                                    </div>
                                    <blockquote class="testimonial-quote">
                                        {format!("\u{201C}{}\u{201D}", testimonial.quote)}
                                    </blockquote>
                                    <div class="testimonial-author">
                                        <div class="author-avatar">{testimonial.avatar}</div>
                                        <div>
                                            <p class="author-name">{testimonial.name}</p>
                                            <p class="author-title">{testimonial.title}</p>
                                        </div>
                                    </div>
                                </div>
                            </div>
                        }) }

                        // Invisible twin of a card so the absolute stack keeps its height.
                        <div class="testimonial-card carousel-placeholder">
                            <div class="placeholder-body"></div>
                        </div>
                    </div>

                    <div class="dot-row">
                        { for (0..TESTIMONIALS.len()).map(|index| {
                            let onclick = {
                                let rotation = rotation.clone();
                                Callback::from(move |_| rotation.set((*rotation).select(index)))
                            };
                            html! {
                                <button
                                    key={index}
                                    class={classes!(
                                        "carousel-dot",
                                        (index == active_index).then_some("active"),
                                    )}
                                    {onclick}
                                    aria-label={format!("Go to testimonial {}", index + 1)}
                                ></button>
                            }
                        }) }
                    </div>
                </div>

                <div class="trust-stats">
                    <div>
                        <p class="trust-stat-value">{"500+"}</p>
                        <p class="trust-stat-label">{"Happy Customers"}</p>
                    </div>
                    <div>
                        <p class="trust-stat-value">{"4.9★"}</p>
                        <p class="trust-stat-label">{"Average Rating"}</p>
                    </div>
                    <div>
                        <p class="trust-stat-value">{"100%"}</p>
                        <p class="trust-stat-label">{"Handmade"}</p>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::star_row;

    #[test]
    fn star_row_repeats_one_star_per_rating_point() {
        assert_eq!(star_row(5), "★★★★★");
        assert_eq!(star_row(1), "★");
        assert_eq!(star_row(0), "");
    }
}
