use yew::prelude::*;

use crate::content::{CONTACT_HREF, HERO_IMAGE};

#[function_component(Hero)]
pub fn hero() -> Html {
    html! {
        <section id="home" class="hero">
            <div class="hero-background" style={format!("background-image: url(\"{}\");", HERO_IMAGE)}></div>
            <div class="hero-overlay"></div>

            <div class="hero-content">
                <h1 class="hero-title hero-enter">
                    {"Creating Unforgettable Moments,"}<br />{"One Event at a Time"}
                </h1>
                <p class="hero-subtitle hero-enter" style="animation-delay: 0.2s;">
                    {"Luxury event planning tailored to your vision – from dream weddings to seamless corporate events, we perfect every detail."}
                </p>
                <a href={CONTACT_HREF} class="hero-cta hero-enter" style="animation-delay: 0.4s;">
                    {"Get Started"}
                </a>
            </div>
            <style>
                {r#"
                .hero {
                    position: relative;
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                }
                .hero-background {
                    position: absolute;
                    inset: 0;
                    background-size: cover;
                    background-position: center;
                }
                .hero-overlay {
                    position: absolute;
                    inset: 0;
                    background: rgba(248, 244, 240, 0.8);
                }
                .hero-content {
                    position: relative;
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                    text-align: center;
                }
                .hero-title {
                    font-size: 3.75rem;
                    font-weight: 700;
                    color: #A3BFD9;
                    margin-bottom: 1.5rem;
                }
                .hero-subtitle {
                    font-size: 1.5rem;
                    color: #374151;
                    max-width: 48rem;
                    margin: 0 auto 2rem;
                }
                .hero-cta {
                    display: inline-block;
                    background: #FFD7B5;
                    color: #1f2937;
                    padding: 0.75rem 2rem;
                    border-radius: 9999px;
                    font-size: 1.125rem;
                    text-decoration: none;
                    transition: background 0.2s ease;
                }
                .hero-cta:hover {
                    background: #FFE7D5;
                }
                .hero-enter {
                    opacity: 0;
                    animation: heroEnter 0.8s ease-out forwards;
                }
                @keyframes heroEnter {
                    from { opacity: 0; transform: translateY(20px); }
                    to { opacity: 1; transform: translateY(0); }
                }
                @media (max-width: 768px) {
                    .hero-title {
                        font-size: 2.25rem;
                    }
                    .hero-subtitle {
                        font-size: 1.25rem;
                    }
                }
                "#}
            </style>
        </section>
    }
}
