use yew::prelude::*;

use crate::components::catalog;
use crate::components::reveal::{use_reveal, REVEAL_THRESHOLD};
use crate::data::GALLERY_IMAGES;

pub const SECTION_ID: &str = "gallery-section";

#[function_component(GallerySection)]
pub fn gallery_section() -> Html {
    let reveal = use_reveal(SECTION_ID, REVEAL_THRESHOLD);
    let hovered_id = use_state(|| None::<u32>);

    html! {
        <section id={SECTION_ID} class="gallery">
            <style>
                {r#"
                    .gallery { background: #FFFFFF; padding: 96px 0; }
                    .gallery-header { max-width: 42rem; margin: 0 auto 64px; text-align: center; }
                    .gallery-header p.body-text { color: #5A5A5A; line-height: 1.7; }
                    .gallery-grid {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        grid-auto-rows: 320px;
                        gap: 32px;
                        max-width: 72rem;
                        margin: 0 auto;
                    }
                    .gallery-span-wide { grid-column: span 2; }
                    .gallery-span-tall { grid-row: span 2; }
                    .gallery-tile {
                        position: relative;
                        height: 100%;
                        overflow: hidden;
                        border-radius: 16px;
                        box-shadow: 0 12px 24px rgba(58, 58, 58, 0.06);
                        cursor: pointer;
                    }
                    .gallery-tile img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        display: block;
                        transition: transform 0.5s ease;
                    }
                    .gallery-tile:hover img { transform: scale(1.1); }
                    .gallery-overlay {
                        position: absolute;
                        inset: 0;
                        display: flex;
                        align-items: flex-end;
                        padding: 24px;
                        background: linear-gradient(to top, rgba(0, 0, 0, 0.4), transparent 60%);
                        opacity: 0;
                        transition: opacity 0.3s ease;
                    }
                    .gallery-tile:hover .gallery-overlay { opacity: 1; }
                    .gallery-overlay p {
                        color: #FFFFFF;
                        font-size: 0.85rem;
                        font-weight: 600;
                        margin: 0;
                    }
                    .gallery-frame {
                        position: absolute;
                        inset: 0;
                        border: 2px solid #E8B4C8;
                        border-radius: 16px;
                        opacity: 0;
                        transition: opacity 0.3s ease, transform 0.3s ease;
                        pointer-events: none;
                    }
                    .gallery-frame.framed { opacity: 1; transform: scale(0.95); }
                    .gallery-cta { margin-top: 64px; text-align: center; }
                    .gallery-cta p { color: #5A5A5A; margin-bottom: 24px; }
                    @media (max-width: 900px) {
                        .gallery-grid { grid-template-columns: 1fr; grid-auto-rows: 256px; }
                        .gallery-span-wide { grid-column: span 1; }
                        .gallery-span-tall { grid-row: span 1; }
                    }
                "#}
            </style>

            <div class="section-container">
                <div class="gallery-header">
                    <p class="section-eyebrow">{"Visual Journey"}</p>
                    <h2 class="section-title">{"Gallery of Craftsmanship"}</h2>
                    <p class="body-text">
                        {"Explore the beauty and detail of our handcrafted crochet bags through these \
                          intimate glimpses of texture, color, and artistry."}
                    </p>
                </div>

                <div class="gallery-grid">
                    { for GALLERY_IMAGES.iter().enumerate().map(|(index, image)| {
                        let id = image.id;
                        let onmouseenter = {
                            let hovered_id = hovered_id.clone();
                            Callback::from(move |_| hovered_id.set(Some(id)))
                        };
                        let onmouseleave = {
                            let hovered_id = hovered_id.clone();
                            Callback::from(move |_| hovered_id.set(None))
                        };
                        html! {
                            <div
                                key={image.id}
                                class={classes!("gallery-item", image.span.class(), "section-reveal", reveal.class())}
                                style={format!("transition-delay: {}ms", index * 100)}
                                {onmouseenter}
                                {onmouseleave}
                            >
                                <div class="gallery-tile">
                                    <img src={image.src} alt={image.alt} />
                                    <div class="gallery-overlay">
                                        <p>{image.alt}</p>
                                    </div>
                                    <div class={classes!(
                                        "gallery-frame",
                                        (*hovered_id == Some(id)).then_some("framed"),
                                    )}></div>
                                </div>
                            </div>
                        }
                    }) }
                </div>

                <div class="gallery-cta">
                    <p>{"Inspired by what you see? Let's create your perfect piece."}</p>
                    <a href={format!("#{}", catalog::SECTION_ID)} class="btn-primary">{"View Full Collection"}</a>
                </div>
            </div>
        </section>
    }
}
