use yew::prelude::*;

use crate::content::TESTIMONIALS;
use crate::reveal::{reveal_style, use_reveal, RevealTiming};

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    let grid = use_node_ref();
    let revealed = use_reveal(grid.clone());

    html! {
        <section id="testimonials" class="testimonials-section">
            <div class="section-container">
                <h2 class="section-title">{"Hear From Our Happy Clients"}</h2>

                <div ref={grid} class="card-grid">
                    {
                        for TESTIMONIALS.iter().enumerate().map(|(i, t)| html! {
                            <div
                                key={t.author}
                                class="testimonial-card"
                                style={reveal_style(revealed, RevealTiming::CARD.staggered(i))}
                            >
                                <img src={t.image} alt={t.author} loading="lazy" class="testimonial-photo" />
                                <p class="testimonial-quote">{format!("\"{}\"", t.quote)}</p>
                                <p class="testimonial-author">{t.author}</p>
                                <p class="testimonial-event">{t.event}</p>
                            </div>
                        })
                    }
                </div>
            </div>
            <style>
                {r#"
                .testimonials-section {
                    padding: 5rem 0;
                    background: #F8F4F0;
                }
                .testimonial-card {
                    background: #fff;
                    padding: 1.5rem;
                    border-radius: 0.5rem;
                    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
                    text-align: center;
                }
                .testimonial-photo {
                    width: 5rem;
                    height: 5rem;
                    border-radius: 50%;
                    object-fit: cover;
                    margin: 0 auto 1rem;
                    display: block;
                }
                .testimonial-quote {
                    color: #4b5563;
                    font-style: italic;
                    margin-bottom: 1rem;
                }
                .testimonial-author {
                    font-weight: 600;
                    color: #1f2937;
                }
                .testimonial-event {
                    color: #A3BFD9;
                }
                "#}
            </style>
        </section>
    }
}
