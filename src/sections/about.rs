use yew::prelude::*;

use crate::content::{ABOUT_GALLERY, BRAND};
use crate::reveal::Reveal;

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <section id="about-us" class="about-section">
            <div class="section-container">
                <Reveal class="about-content">
                    <h2 class="section-title">{"Your Vision, Our Passion"}</h2>
                    <p class="about-text">
                        {format!("At {}, we believe every event is a unique story waiting to be told. With years of experience and a keen eye for detail, our dedicated team transforms your ideas into an unforgettable experience. We pride ourselves on creativity, meticulous planning, and personalized service that ensures every event is a true reflection of your dreams.", BRAND)}
                    </p>
                    <div class="about-gallery">
                        { for ABOUT_GALLERY.iter().map(|image| html! {
                            <img key={image.alt} src={image.src} alt={image.alt} loading="lazy" />
                        }) }
                    </div>
                </Reveal>
            </div>
            <style>
                {r#"
                .about-section {
                    padding: 5rem 0;
                    background: #fff;
                }
                .about-content {
                    max-width: 48rem;
                    margin: 0 auto;
                    text-align: center;
                }
                .about-text {
                    color: #4b5563;
                    line-height: 1.625;
                    margin-bottom: 2rem;
                }
                .about-gallery {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 1rem;
                }
                .about-gallery img {
                    width: 100%;
                    border-radius: 0.5rem;
                    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
                }
                @media (max-width: 768px) {
                    .about-gallery {
                        grid-template-columns: repeat(2, 1fr);
                    }
                }
                "#}
            </style>
        </section>
    }
}
