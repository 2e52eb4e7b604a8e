use chrono::Datelike;
use yew::prelude::*;

use crate::config;

pub const SECTION_ID: &str = "footer";

const SHOP_LINKS: &[&str] = &[
    "All Bags",
    "Classic Collection",
    "Casual Collection",
    "Mini Bags",
    "Custom Orders",
];

const ABOUT_LINKS: &[&str] = &[
    "Our Story",
    "Craftsmanship",
    "Sustainability",
    "Contact Us",
    "FAQ",
];

const LEGAL_LINKS: &[&str] = &[
    "Privacy Policy",
    "Terms of Service",
    "Shipping & Returns",
    "Care Instructions",
];

fn link_column(heading: &'static str, links: &'static [&'static str]) -> Html {
    html! {
        <div>
            <h4 class="footer-heading">{heading}</h4>
            <ul class="footer-links">
                { for links.iter().map(|label| html! {
                    <li><a href="#">{*label}</a></li>
                }) }
            </ul>
        </div>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let current_year = chrono::Local::now().year();

    html! {
        <footer id={SECTION_ID} class="site-footer">
            <style>
                {r#"
                    .site-footer { background: #3A3A3A; color: #FFFFFF; padding: 80px 0 64px; }
                    .footer-grid {
                        display: grid;
                        grid-template-columns: repeat(4, 1fr);
                        gap: 48px;
                        margin-bottom: 48px;
                    }
                    .footer-brand h3 {
                        font-family: Georgia, serif;
                        font-size: 1.5rem;
                        color: #E8B4C8;
                        margin: 0 0 16px;
                    }
                    .footer-brand p {
                        font-size: 0.85rem;
                        color: #D1D1D1;
                        line-height: 1.7;
                        margin: 0 0 16px;
                    }
                    .footer-social { display: flex; gap: 16px; }
                    .footer-social a {
                        display: inline-flex;
                        align-items: center;
                        justify-content: center;
                        width: 36px;
                        height: 36px;
                        border-radius: 50%;
                        background: #E8B4C8;
                        color: #FFFFFF;
                        text-decoration: none;
                        transition: background 0.3s ease;
                    }
                    .footer-social a:hover { background: #D4A0B8; }
                    .footer-heading { color: #FFFFFF; font-weight: 600; margin: 0 0 24px; }
                    .footer-links { list-style: none; margin: 0; padding: 0; }
                    .footer-links li { margin-bottom: 12px; }
                    .footer-links a {
                        color: #D1D1D1;
                        font-size: 0.85rem;
                        text-decoration: none;
                        transition: color 0.3s ease;
                    }
                    .footer-links a:hover { color: #E8B4C8; }
                    .footer-divider { border-top: 1px solid #555555; margin: 48px 0; }
                    .footer-bottom {
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        gap: 24px;
                        flex-wrap: wrap;
                    }
                    .footer-copyright { font-size: 0.85rem; color: #A1A1A1; margin: 0; }
                    .footer-copyright .heart { color: #E8B4C8; }
                    .footer-payments {
                        display: flex;
                        align-items: center;
                        gap: 12px;
                        font-size: 0.75rem;
                        color: #A1A1A1;
                    }
                    @media (max-width: 900px) {
                        .footer-grid { grid-template-columns: 1fr; }
                        .footer-bottom { flex-direction: column; }
                    }
                "#}
            </style>

            <div class="section-container">
                <div class="footer-grid">
                    <div class="footer-brand">
                        <h3>{config::BRAND_NAME}</h3>
                        <p>
                            {"Handcrafted crochet bags made with love, heritage, and artisanal \
                              excellence. Each piece tells a story of craftsmanship."}
                        </p>
                        <div class="footer-social">
                            <a
                                href={config::INSTAGRAM_URL}
                                target="_blank"
                                rel="noopener noreferrer"
                                aria-label="Instagram"
                            >
                                {"📷"}
                            </a>
                            <a href="#" aria-label="Facebook">{"ⓕ"}</a>
                            <a href="#" aria-label="Pinterest">{"📌"}</a>
                        </div>
                    </div>

                    { link_column("Shop", SHOP_LINKS) }
                    { link_column("About", ABOUT_LINKS) }
                    { link_column("Legal", LEGAL_LINKS) }
                </div>

                <div class="footer-divider"></div>

                <div class="footer-bottom">
                    <p class="footer-copyright">
                        {format!("© {} {}. All rights reserved. Handcrafted with ", current_year, config::BRAND_NAME)}
                        <span class="heart">{"♥"}</span>
                        {" and thread."}
                    </p>

                    <div class="footer-payments">
                        <span>{"Secure payments:"}</span>
                        <span>{"💳"}</span>
                        <span>{"🏦"}</span>
                        <span>{"📱"}</span>
                    </div>
                </div>
            </div>
        </footer>
    }
}
