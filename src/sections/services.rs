use yew::prelude::*;

use crate::components::icons::Icon;
use crate::content::{ServiceOffering, BRAND, SERVICES};
use crate::reveal::{reveal_style, use_reveal, RevealTiming};

fn service_card(index: usize, service: &ServiceOffering, revealed: bool) -> Html {
    html! {
        <div
            key={service.title}
            class="service-card"
            style={reveal_style(revealed, RevealTiming::CARD.staggered(index))}
        >
            <div class="service-icon"><Icon kind={service.icon} size={48} /></div>
            <h3>{service.title}</h3>
            <p>{service.description}</p>
        </div>
    }
}

#[function_component(Services)]
pub fn services() -> Html {
    let grid = use_node_ref();
    let revealed = use_reveal(grid.clone());

    html! {
        <section id="services" class="services-section">
            <div class="section-container">
                <h2 class="section-title">{"Our Expertise, Your Perfect Event"}</h2>
                <p class="section-lead">
                    {format!("At {}, we specialize in creating customized experiences that reflect your unique vision. Whether you're planning an intimate wedding, a high-profile corporate event, or a vibrant social celebration, our team ensures every detail is flawlessly executed.", BRAND)}
                </p>

                <div ref={grid} class="card-grid">
                    { for SERVICES.iter().enumerate().map(|(i, service)| service_card(i, service, revealed)) }
                </div>
            </div>
            <style>
                {r#"
                .services-section {
                    padding: 5rem 0;
                    background: #fff;
                }
                .service-card {
                    background: #F6F6F6;
                    padding: 2rem;
                    border-radius: 0.5rem;
                }
                .service-card:hover {
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                    background: rgba(250, 220, 217, 0.1);
                }
                .service-icon {
                    color: #A3BFD9;
                    margin-bottom: 1.5rem;
                }
                .service-card h3 {
                    font-size: 1.5rem;
                    font-weight: 600;
                    color: #1f2937;
                    margin-bottom: 1rem;
                }
                .service-card p {
                    color: #4b5563;
                }
                "#}
            </style>
        </section>
    }
}
