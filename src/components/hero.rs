use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::components::{about, catalog};

pub const SECTION_ID: &str = "hero-section";

#[function_component(HeroSection)]
pub fn hero_section() -> Html {
    let visible = use_state(|| false);

    // The hero is already on screen at load, so it reveals on mount
    // instead of waiting for an intersection.
    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |_| {
                visible.set(true);
                || ()
            },
            (),
        );
    }

    let reveal = if *visible { Reveal::Visible } else { Reveal::Hidden };

    html! {
        <section id={SECTION_ID} class="hero">
            <style>
                {r#"
                    .hero {
                        position: relative;
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        background: #FDFBF8;
                        overflow: hidden;
                    }
                    .hero-grid {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 80px;
                        align-items: center;
                        width: 100%;
                    }
                    .hero-copy { display: flex; flex-direction: column; gap: 32px; }
                    .hero-copy.reveal-hidden { transform: translateX(-40px); }
                    .hero-title {
                        font-family: Georgia, 'Times New Roman', serif;
                        font-size: 3.5rem;
                        line-height: 1.1;
                        color: #3A3A3A;
                        margin: 16px 0 0;
                    }
                    .hero-lede {
                        color: #5A5A5A;
                        max-width: 32rem;
                        line-height: 1.7;
                    }
                    .hero-cta-row { display: flex; gap: 16px; padding-top: 16px; }
                    .hero-trust-row {
                        display: flex;
                        gap: 32px;
                        padding-top: 32px;
                        border-top: 1px solid #E8D5CC;
                    }
                    .trust-value {
                        font-family: Georgia, serif;
                        font-size: 1.5rem;
                        color: #E8B4C8;
                        margin: 0;
                    }
                    .trust-label { font-size: 0.8rem; color: #8B8B8B; margin: 4px 0 0; }
                    .hero-figure { position: relative; transition-delay: 300ms; }
                    .hero-figure.reveal-hidden { transform: translateX(40px); }
                    .hero-frame {
                        background: #F5F1ED;
                        padding: 32px;
                        border-radius: 16px;
                        box-shadow: 0 20px 40px rgba(58, 58, 58, 0.08);
                    }
                    .hero-frame img { width: 100%; height: auto; border-radius: 8px; display: block; }
                    .scroll-cue {
                        position: absolute;
                        bottom: 32px;
                        left: 50%;
                        transform: translateX(-50%);
                        color: #E8B4C8;
                        font-size: 1.5rem;
                        animation: hero-bounce 1.5s infinite;
                    }
                    @keyframes hero-bounce {
                        0%, 100% { transform: translate(-50%, 0); }
                        50% { transform: translate(-50%, 10px); }
                    }
                    @media (max-width: 900px) {
                        .hero-grid { grid-template-columns: 1fr; gap: 48px; }
                        .hero-title { font-size: 2.5rem; }
                    }
                "#}
            </style>

            <div class="section-container">
                <div class="hero-grid">
                    <div class={classes!("hero-copy", "section-reveal", reveal.class())}>
                        <div>
                            <p class="section-eyebrow">{"Artesanato Artesanal"}</p>
                            <h1 class="hero-title">{"Elegância Nascida do Fio"}</h1>
                        </div>

                        <p class="hero-lede">
                            {"Cada bolsa Bela Fios é meticulosamente confeccionada à mão com amor e \
                              atenção aos detalhes. Descubra a perfeita combinação de beleza artesanal \
                              e elegância moderna em nossa exclusiva coleção de peças de crochê feitas \
                              sob encomenda."}
                        </p>

                        <div class="hero-cta-row">
                            <a href={format!("#{}", catalog::SECTION_ID)} class="btn-primary">{"Ver Catálogo"}</a>
                            <a href={format!("#{}", about::SECTION_ID)} class="btn-secondary">{"Saiba Mais"}</a>
                        </div>

                        <div class="hero-trust-row">
                            <div>
                                <p class="trust-value">{"100%"}</p>
                                <p class="trust-label">{"Feito à Mão"}</p>
                            </div>
                            <div>
                                <p class="trust-value">{"5-10"}</p>
                                <p class="trust-label">{"Dias de Confecção"}</p>
                            </div>
                            <div>
                                <p class="trust-value">{"∞"}</p>
                                <p class="trust-label">{"Cores Disponíveis"}</p>
                            </div>
                        </div>
                    </div>

                    <div class={classes!("hero-figure", "section-reveal", reveal.class())}>
                        <div class="hero-frame">
                            <img
                                src="/images/hero-crochet-bag.jpg"
                                alt="Elegante bolsa de crochê artesanal em rosa pastel"
                            />
                        </div>
                    </div>
                </div>
            </div>

            <div class="scroll-cue">{"↓"}</div>
        </section>
    }
}
