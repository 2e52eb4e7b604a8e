use yew::prelude::*;

use crate::components::reveal::{use_reveal, REVEAL_THRESHOLD};
use crate::config;
use crate::data::PRODUCTS;

pub const SECTION_ID: &str = "catalog-section";

#[function_component(CatalogSection)]
pub fn catalog_section() -> Html {
    let reveal = use_reveal(SECTION_ID, REVEAL_THRESHOLD);
    let hovered_id = use_state(|| None::<u32>);

    html! {
        <section id={SECTION_ID} class="catalog">
            <style>
                {r#"
                    .catalog { background: #FDFBF8; padding: 96px 0; }
                    .catalog-header { max-width: 42rem; margin-bottom: 64px; }
                    .catalog-header p.body-text { color: #5A5A5A; line-height: 1.7; }
                    .catalog-grid {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 40px;
                    }
                    .product-card {
                        transition: transform 0.3s ease;
                    }
                    .product-card.card-hovered { transform: translateY(-8px); }
                    .product-frame {
                        position: relative;
                        background: #F5F1ED;
                        border-radius: 12px;
                        padding: 24px;
                        margin-bottom: 24px;
                        box-shadow: 0 12px 24px rgba(58, 58, 58, 0.06);
                        overflow: hidden;
                    }
                    .product-frame img {
                        width: 100%;
                        height: 256px;
                        object-fit: cover;
                        border-radius: 8px;
                        display: block;
                        transition: transform 0.5s ease;
                    }
                    .product-card.card-hovered .product-frame img { transform: scale(1.05); }
                    .product-badge {
                        position: absolute;
                        top: 32px;
                        left: 32px;
                        background: #E8B4C8;
                        color: #FFFFFF;
                        font-size: 0.7rem;
                        font-weight: 600;
                        padding: 4px 12px;
                        border-radius: 999px;
                    }
                    .wishlist-button {
                        position: absolute;
                        top: 32px;
                        right: 32px;
                        background: #FFFFFF;
                        border: none;
                        border-radius: 50%;
                        padding: 10px 12px;
                        cursor: pointer;
                        opacity: 0;
                        transition: opacity 0.3s ease;
                    }
                    .product-card.card-hovered .wishlist-button { opacity: 1; }
                    .product-name { color: #3A3A3A; margin: 0 0 8px; font-size: 1.25rem; }
                    .product-description { color: #8B8B8B; font-size: 0.85rem; line-height: 1.6; margin: 0 0 16px; }
                    .swatch-heading {
                        color: #5A5A5A;
                        font-size: 0.7rem;
                        font-weight: 600;
                        text-transform: uppercase;
                        letter-spacing: 0.08em;
                        margin: 0 0 8px;
                    }
                    .swatch-row { display: flex; gap: 12px; }
                    .swatch { cursor: pointer; text-align: center; }
                    .swatch-dot {
                        width: 32px;
                        height: 32px;
                        border-radius: 50%;
                        border: 2px solid #E8D5CC;
                        transition: transform 0.3s ease, border-color 0.3s ease;
                    }
                    .swatch:hover .swatch-dot { transform: scale(1.1); border-color: #E8B4C8; }
                    .swatch-name {
                        font-size: 0.7rem;
                        color: #8B8B8B;
                        margin-top: 4px;
                        opacity: 0;
                        transition: opacity 0.3s ease;
                    }
                    .swatch:hover .swatch-name { opacity: 1; }
                    .product-footer {
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        margin-top: 16px;
                        padding-top: 16px;
                        border-top: 1px solid #E8D5CC;
                    }
                    .product-price { color: #E8B4C8; font-weight: 600; margin: 0; }
                    .order-button {
                        display: inline-block;
                        background: #E8B4C8;
                        color: #FFFFFF;
                        border-radius: 8px;
                        padding: 8px 12px;
                        text-decoration: none;
                        transition: background 0.3s ease, transform 0.3s ease;
                    }
                    .order-button:hover { background: #D4A0B8; transform: scale(1.1); }
                    .catalog-cta { margin-top: 80px; text-align: center; }
                    .catalog-cta p { color: #5A5A5A; margin-bottom: 24px; }
                    @media (max-width: 900px) {
                        .catalog-grid { grid-template-columns: 1fr; }
                    }
                "#}
            </style>

            <div class="section-container">
                <div class="catalog-header">
                    <p class="section-eyebrow">{"Collections"}</p>
                    <h2 class="section-title">{"Explore Our Handcrafted Collection"}</h2>
                    <p class="body-text">
                        {"Each piece is meticulously crafted to perfection. Choose your style, select \
                          your colors, and order your exclusive, made-to-order bag."}
                    </p>
                </div>

                <div class="catalog-grid">
                    { for PRODUCTS.iter().enumerate().map(|(index, product)| {
                        let id = product.id;
                        let onmouseenter = {
                            let hovered_id = hovered_id.clone();
                            Callback::from(move |_| hovered_id.set(Some(id)))
                        };
                        let onmouseleave = {
                            let hovered_id = hovered_id.clone();
                            Callback::from(move |_| hovered_id.set(None))
                        };
                        let card_class = classes!(
                            "product-card",
                            "section-reveal",
                            reveal.class(),
                            (*hovered_id == Some(id)).then_some("card-hovered"),
                        );
                        html! {
                            <div
                                key={product.id}
                                class={card_class}
                                style={format!("transition-delay: {}ms", index * 100)}
                                {onmouseenter}
                                {onmouseleave}
                            >
                                <div class="product-frame">
                                    <img src={product.image} alt={product.name} />
                                    <span class="product-badge">{"Handmade"}</span>
                                    <button class="wishlist-button" aria-label="Add to wishlist">{"♥"}</button>
                                </div>

                                <h3 class="product-name">{product.name}</h3>
                                <p class="product-description">{product.description}</p>

                                <p class="swatch-heading">{"Available Colors"}</p>
                                <div class="swatch-row">
                                    { for product.colors.iter().zip(product.color_names.iter()).map(|(color, name)| html! {
                                        <div class="swatch" title={*name}>
                                            <div
                                                class="swatch-dot"
                                                style={format!("background-color: {color}")}
                                            ></div>
                                            <p class="swatch-name">{name}</p>
                                        </div>
                                    }) }
                                </div>

                                <div class="product-footer">
                                    <p class="product-price">{product.price}</p>
                                    <a
                                        href={config::whatsapp_order_url()}
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="order-button"
                                        aria-label={format!("Order the {}", product.name)}
                                    >
                                        {"🛍"}
                                    </a>
                                </div>
                            </div>
                        }
                    }) }
                </div>

                <div class="catalog-cta">
                    <p>{"Don't see your perfect style? We offer custom designs!"}</p>
                    <a
                        href={config::whatsapp_order_url()}
                        target="_blank"
                        rel="noopener noreferrer"
                        class="btn-primary"
                    >
                        {"Request a Custom Design"}
                    </a>
                </div>
            </div>
        </section>
    }
}
