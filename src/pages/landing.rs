use yew::prelude::*;

use crate::components::header::Header;
use crate::components::progress_bar::ScrollProgressIndicator;
use crate::scroll::use_scroll_metrics;
use crate::sections::{
    about::About, contact::Contact, footer::Footer, hero::Hero, services::Services,
    testimonials::Testimonials,
};

#[function_component(Landing)]
pub fn landing() -> Html {
    let metrics = use_scroll_metrics();

    html! {
        <div class="landing-page">
            <ScrollProgressIndicator progress={metrics.progress()} />
            <Header />
            <Hero />
            <Services />
            <Testimonials />
            <About />
            <Contact />
            <Footer />
            <style>
                {r#"
                html {
                    scroll-behavior: smooth;
                }
                body {
                    margin: 0;
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                    color: #1f2937;
                }
                .landing-page {
                    position: relative;
                }
                .section-container {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                }
                .section-title {
                    font-size: 2.25rem;
                    font-weight: 700;
                    text-align: center;
                    color: #1f2937;
                    margin-bottom: 3rem;
                }
                .section-lead {
                    text-align: center;
                    color: #4b5563;
                    max-width: 48rem;
                    margin: -2rem auto 3rem;
                }
                .card-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                }
                @media (max-width: 768px) {
                    .card-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </div>
    }
}
