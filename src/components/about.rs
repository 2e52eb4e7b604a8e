use yew::prelude::*;

use crate::components::reveal::{use_reveal, REVEAL_THRESHOLD};

pub const SECTION_ID: &str = "about-section";

struct Value {
    title: &'static str,
    blurb: &'static str,
}

const VALUES: &[Value] = &[
    Value { title: "Artesanal", blurb: "Cada peça feita à mão com precisão e cuidado" },
    Value { title: "Sustentável", blurb: "Materiais de qualidade que respeitam o planeta" },
    Value { title: "Personalizada", blurb: "Feita sob encomenda para seu estilo único" },
    Value { title: "Atemporal", blurb: "Projetada para ser apreciada por anos" },
];

#[function_component(AboutSection)]
pub fn about_section() -> Html {
    let reveal = use_reveal(SECTION_ID, REVEAL_THRESHOLD);

    html! {
        <section id={SECTION_ID} class="about">
            <style>
                {r#"
                    .about { background: #FFFFFF; padding: 96px 0; }
                    .about-grid {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 96px;
                        align-items: center;
                    }
                    .about-figure.reveal-hidden { transform: translateX(-40px); }
                    .about-frame {
                        background: #F5F1ED;
                        padding: 32px;
                        border-radius: 16px;
                        box-shadow: 0 20px 40px rgba(58, 58, 58, 0.08);
                    }
                    .about-frame img { width: 100%; height: auto; border-radius: 8px; display: block; }
                    .about-copy { display: flex; flex-direction: column; gap: 24px; transition-delay: 200ms; }
                    .about-copy.reveal-hidden { transform: translateX(40px); }
                    .about-copy p.body-text { color: #5A5A5A; line-height: 1.7; margin: 0; }
                    .about-values {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 24px;
                        padding-top: 32px;
                    }
                    .value-card {
                        padding: 24px;
                        background: #FDFBF8;
                        border: 1px solid #E8D5CC;
                        border-radius: 8px;
                    }
                    .value-card h3 { color: #E8B4C8; margin: 0 0 8px; font-size: 1.1rem; }
                    .value-card p { color: #8B8B8B; font-size: 0.85rem; margin: 0; }
                    @media (max-width: 900px) {
                        .about-grid { grid-template-columns: 1fr; gap: 48px; }
                        .about-figure { order: 2; }
                        .about-copy { order: 1; }
                    }
                "#}
            </style>

            <div class="section-container">
                <div class="about-grid">
                    <div class={classes!("about-figure", "section-reveal", reveal.class())}>
                        <div class="about-frame">
                            <img
                                src="/images/artisan-workspace.jpg"
                                alt="Espaço de trabalho artesanal com materiais de crochê confeccionados à mão"
                            />
                        </div>
                    </div>

                    <div class={classes!("about-copy", "section-reveal", reveal.class())}>
                        <div>
                            <p class="section-eyebrow">{"Nossa História"}</p>
                            <h2 class="section-title">{"Confeccionado com Herança e Coração"}</h2>
                        </div>

                        <p class="body-text">
                            {"Bela Fios nasceu do talento excepcional da minha avó. Com mais de 30 anos \
                              de domínio em crochê, ela aperfeiçoou a arte de criar peças bonitas e \
                              duráveis que contam uma história. Cada bolsa é um testemunho de sua \
                              dedicação e paixão pela excelência artesanal."}
                        </p>
                        <p class="body-text">
                            {"Cada ponto é colocado com intenção. Cada cor é escolhida com cuidado. \
                              Acreditamos que o verdadeiro luxo está nos detalhes: na textura do fio, na \
                              precisão dos pontos e no amor tecido em cada peça. Nosso compromisso com a \
                              qualidade significa que cada bolsa Bela Fios é confeccionada para durar a \
                              vida toda."}
                        </p>
                        <p class="body-text">
                            {"Trabalhamos exclusivamente com materiais sustentáveis de alta qualidade e \
                              oferecemos produção sob encomenda. Isso significa que sua bolsa é criada \
                              especificamente para você, com suas preferências de cores e estilo em \
                              mente. Nenhuma duas peças são exatamente iguais; cada uma é única e sua."}
                        </p>

                        <div class="about-values">
                            { for VALUES.iter().map(|value| html! {
                                <div class="value-card">
                                    <h3>{value.title}</h3>
                                    <p>{value.blurb}</p>
                                </div>
                            }) }
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
