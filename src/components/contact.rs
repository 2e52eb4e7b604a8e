use log::info;
use web_sys::SubmitEvent;
use yew::prelude::*;

use crate::components::reveal::{use_reveal, REVEAL_THRESHOLD};
use crate::config;

pub const SECTION_ID: &str = "contact-section";

#[function_component(ContactSection)]
pub fn contact_section() -> Html {
    let reveal = use_reveal(SECTION_ID, REVEAL_THRESHOLD);

    // There is no subscription backend, so the newsletter form is
    // intentionally inert; the handler only stops the browser from
    // navigating on submit.
    let on_newsletter_submit = Callback::from(|e: SubmitEvent| {
        e.prevent_default();
        info!("newsletter signup submitted (no endpoint configured)");
    });

    html! {
        <section id={SECTION_ID} class="contact">
            <style>
                {r#"
                    .contact { background: #FDFBF8; padding: 96px 0; overflow: hidden; }
                    .contact-cta-panel {
                        max-width: 56rem;
                        margin: 0 auto 64px;
                        background: linear-gradient(135deg, #E8B4C8, #D4C5B9);
                        border-radius: 24px;
                        padding: 64px 48px;
                        text-align: center;
                        box-shadow: 0 20px 40px rgba(58, 58, 58, 0.08);
                    }
                    .contact-cta-panel.reveal-hidden { transform: scale(0.95); }
                    .contact-cta-panel h2 {
                        font-family: Georgia, serif;
                        font-size: 2.5rem;
                        color: #FFFFFF;
                        margin: 0 0 24px;
                    }
                    .contact-cta-panel > p {
                        color: rgba(255, 255, 255, 0.9);
                        font-size: 1.1rem;
                        max-width: 36rem;
                        margin: 0 auto 40px;
                        line-height: 1.7;
                    }
                    .whatsapp-cta {
                        display: inline-flex;
                        align-items: center;
                        gap: 12px;
                        background: #FFFFFF;
                        color: #E8B4C8;
                        font-weight: 600;
                        padding: 16px 40px;
                        border-radius: 12px;
                        text-decoration: none;
                        transition: transform 0.3s ease, box-shadow 0.3s ease;
                    }
                    .whatsapp-cta:hover {
                        transform: scale(1.05);
                        box-shadow: 0 24px 48px rgba(58, 58, 58, 0.2);
                    }
                    .cta-trust-line {
                        color: rgba(255, 255, 255, 0.8);
                        font-size: 0.85rem;
                        margin: 32px 0 0;
                    }
                    .contact-cards {
                        display: grid;
                        grid-template-columns: repeat(4, 1fr);
                        gap: 32px;
                        max-width: 64rem;
                        margin: 0 auto;
                    }
                    .contact-card {
                        background: #FFFFFF;
                        border-radius: 16px;
                        padding: 32px;
                        text-align: center;
                        box-shadow: 0 12px 24px rgba(58, 58, 58, 0.06);
                        transition: transform 0.3s ease;
                    }
                    .contact-card:hover { transform: translateY(-8px); }
                    .contact-card-icon {
                        display: inline-flex;
                        align-items: center;
                        justify-content: center;
                        width: 48px;
                        height: 48px;
                        border-radius: 50%;
                        background: #F5F1ED;
                        font-size: 1.25rem;
                        margin-bottom: 16px;
                    }
                    .contact-card h3 { color: #3A3A3A; margin: 0 0 8px; font-size: 1.1rem; }
                    .contact-card a {
                        color: #E8B4C8;
                        font-size: 0.85rem;
                        text-decoration: none;
                        transition: color 0.3s ease;
                    }
                    .contact-card a:hover { color: #D4A0B8; }
                    .contact-card p { color: #8B8B8B; font-size: 0.85rem; margin: 0; line-height: 1.6; }
                    .newsletter {
                        max-width: 42rem;
                        margin: 80px auto 0;
                        background: #FFFFFF;
                        border-radius: 16px;
                        padding: 48px;
                        box-shadow: 0 20px 40px rgba(58, 58, 58, 0.08);
                    }
                    .newsletter h3 {
                        font-family: Georgia, serif;
                        font-size: 1.5rem;
                        color: #3A3A3A;
                        text-align: center;
                        margin: 0 0 16px;
                    }
                    .newsletter > p { color: #5A5A5A; text-align: center; margin: 0 0 24px; line-height: 1.7; }
                    .newsletter-form { display: flex; gap: 12px; }
                    .newsletter-form input {
                        flex: 1;
                        padding: 12px 16px;
                        background: #F5F1ED;
                        border: 1px solid #E8D5CC;
                        border-radius: 8px;
                        outline: none;
                        transition: border-color 0.3s ease;
                    }
                    .newsletter-form input:focus { border-color: #E8B4C8; }
                    @media (max-width: 900px) {
                        .contact-cards { grid-template-columns: 1fr; }
                        .newsletter-form { flex-direction: column; }
                    }
                "#}
            </style>

            <div class="section-container">
                <div class={classes!("contact-cta-panel", "section-reveal", reveal.class())}>
                    <h2>{"Order Your Custom Bag"}</h2>
                    <p>
                        {"Ready to create something beautiful? Chat with us on WhatsApp to discuss \
                          your perfect design, colors, and crafting timeline."}
                    </p>

                    <a
                        href={config::whatsapp_order_url()}
                        target="_blank"
                        rel="noopener noreferrer"
                        class="whatsapp-cta"
                    >
                        <span>{"💬"}</span>
                        <span>{"Chat on WhatsApp"}</span>
                    </a>

                    <p class="cta-trust-line">
                        {"✓ Fast response • ✓ Personalized service • ✓ Made-to-order excellence"}
                    </p>
                </div>

                <div class="contact-cards">
                    <div
                        class={classes!("contact-card", "section-reveal", reveal.class())}
                    >
                        <div class="contact-card-icon">{"✉"}</div>
                        <h3>{"Email"}</h3>
                        <a href={config::mailto_url()}>{config::CONTACT_EMAIL}</a>
                    </div>

                    <div
                        class={classes!("contact-card", "section-reveal", reveal.class())}
                        style="transition-delay: 100ms"
                    >
                        <div class="contact-card-icon">{"💬"}</div>
                        <h3>{"WhatsApp"}</h3>
                        <a
                            href={config::whatsapp_chat_url()}
                            target="_blank"
                            rel="noopener noreferrer"
                        >
                            {config::WHATSAPP_DISPLAY}
                        </a>
                    </div>

                    <div
                        class={classes!("contact-card", "section-reveal", reveal.class())}
                        style="transition-delay: 200ms"
                    >
                        <div class="contact-card-icon">{"📍"}</div>
                        <h3>{"Location"}</h3>
                        <p>{"Handcrafted with love, worldwide shipping available"}</p>
                    </div>

                    <div
                        class={classes!("contact-card", "section-reveal", reveal.class())}
                        style="transition-delay: 300ms"
                    >
                        <div class="contact-card-icon">{"🕐"}</div>
                        <h3>{"Hours"}</h3>
                        <p>{"Mon-Fri: 9am-6pm"}<br />{"Sat-Sun: 10am-4pm"}</p>
                    </div>
                </div>

                <div class="newsletter">
                    <h3>{"Stay Updated"}</h3>
                    <p>
                        {"Subscribe to our newsletter for exclusive designs, color previews, and \
                          special offers."}
                    </p>
                    <form class="newsletter-form" onsubmit={on_newsletter_submit}>
                        <input type="email" placeholder="Enter your email" />
                        <button type="submit" class="btn-primary">{"Subscribe"}</button>
                    </form>
                </div>
            </div>
        </section>
    }
}
