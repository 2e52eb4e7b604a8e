use yew::prelude::*;

use crate::components::contact;
use crate::components::reveal::{use_reveal, REVEAL_THRESHOLD};
use crate::data::STEPS;

pub const SECTION_ID: &str = "how-it-works-section";

#[function_component(HowItWorksSection)]
pub fn how_it_works_section() -> Html {
    let reveal = use_reveal(SECTION_ID, REVEAL_THRESHOLD);
    let expanded_step = use_state(|| None::<u32>);

    html! {
        <section id={SECTION_ID} class="how-it-works">
            <style>
                {r#"
                    .how-it-works { background: #FFFFFF; padding: 96px 0; }
                    .steps-header { max-width: 42rem; margin: 0 auto 64px; text-align: center; }
                    .steps-header p.body-text { color: #5A5A5A; line-height: 1.7; }
                    .steps-timeline { max-width: 56rem; margin: 0 auto; }
                    .step-row { position: relative; padding-bottom: 48px; }
                    .step-connector {
                        position: absolute;
                        left: 32px;
                        top: 80px;
                        bottom: 0;
                        width: 2px;
                        background: linear-gradient(to bottom, #E8B4C8, #D4C5B9);
                        opacity: 0.3;
                    }
                    .step-body { display: flex; gap: 48px; }
                    .step-icon {
                        flex-shrink: 0;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        width: 64px;
                        height: 64px;
                        border-radius: 50%;
                        background: #F5F1ED;
                        border: 2px solid #E8B4C8;
                        font-size: 1.5rem;
                    }
                    .step-content { flex: 1; padding-top: 8px; }
                    .step-toggle {
                        width: 100%;
                        background: none;
                        border: none;
                        padding: 0;
                        text-align: left;
                        cursor: pointer;
                        transition: opacity 0.3s ease;
                    }
                    .step-toggle:hover { opacity: 0.7; }
                    .step-title {
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        color: #3A3A3A;
                        font-size: 1.25rem;
                        margin: 0 0 8px;
                    }
                    .step-chevron {
                        color: #E8B4C8;
                        transition: transform 0.3s ease;
                    }
                    .step-chevron.rotated { transform: rotate(180deg); }
                    .step-description { color: #5A5A5A; line-height: 1.7; margin: 0 0 16px; }
                    .step-details {
                        overflow: hidden;
                        max-height: 0;
                        opacity: 0;
                        transition: max-height 0.3s ease, opacity 0.3s ease;
                    }
                    .step-details.expanded { max-height: 12rem; opacity: 1; }
                    .step-details-inner {
                        padding: 16px 0 0 16px;
                        border-left: 2px solid #E8B4C8;
                    }
                    .step-detail { display: flex; gap: 12px; margin-bottom: 8px; }
                    .step-detail span { color: #E8B4C8; font-weight: 600; }
                    .step-detail p { color: #8B8B8B; font-size: 0.85rem; margin: 0; }
                    .steps-cta { margin-top: 64px; text-align: center; }
                    .steps-cta p { color: #5A5A5A; margin-bottom: 24px; }
                "#}
            </style>

            <div class="section-container">
                <div class="steps-header">
                    <p class="section-eyebrow">{"Process"}</p>
                    <h2 class="section-title">{"How It Works"}</h2>
                    <p class="body-text">
                        {"From inspiration to delivery, we guide you through every step of creating \
                          your perfect handcrafted bag."}
                    </p>
                </div>

                <div class="steps-timeline">
                    { for STEPS.iter().enumerate().map(|(index, step)| {
                        let id = step.id;
                        let is_expanded = *expanded_step == Some(id);
                        let onclick = {
                            let expanded_step = expanded_step.clone();
                            Callback::from(move |_| {
                                // Clicking the open step collapses it again.
                                if *expanded_step == Some(id) {
                                    expanded_step.set(None);
                                } else {
                                    expanded_step.set(Some(id));
                                }
                            })
                        };
                        html! {
                            <div
                                key={step.id}
                                class={classes!("step-row", "section-reveal", reveal.class())}
                                style={format!("transition-delay: {}ms", index * 100)}
                            >
                                { if index != STEPS.len() - 1 {
                                    html! { <div class="step-connector"></div> }
                                } else {
                                    html! {}
                                } }

                                <div class="step-body">
                                    <div class="step-icon">{step.icon}</div>

                                    <div class="step-content">
                                        <button class="step-toggle" {onclick}>
                                            <h3 class="step-title">
                                                {step.title}
                                                <span class={classes!(
                                                    "step-chevron",
                                                    is_expanded.then_some("rotated"),
                                                )}>
                                                    {"▼"}
                                                </span>
                                            </h3>
                                        </button>

                                        <p class="step-description">{step.description}</p>

                                        <div class={classes!(
                                            "step-details",
                                            is_expanded.then_some("expanded"),
                                        )}>
                                            <div class="step-details-inner">
                                                { for step.details.iter().map(|detail| html! {
                                                    <div class="step-detail">
                                                        <span>{"•"}</span>
                                                        <p>{*detail}</p>
                                                    </div>
                                                }) }
                                            </div>
                                        </div>
                                    </div>
                                </div>
                            </div>
                        }
                    }) }
                </div>

                <div class="steps-cta">
                    <p>{"Ready to start your journey? Let's create something beautiful together."}</p>
                    <a href={format!("#{}", contact::SECTION_ID)} class="btn-primary">{"Start Your Order"}</a>
                </div>
            </div>
        </section>
    }
}
