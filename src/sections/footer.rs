use chrono::{Datelike, Local};
use yew::prelude::*;

use crate::components::icons::Icon;
use crate::content::{BRAND, NAV_ITEMS, SERVICES, SOCIAL_LINKS};

pub fn copyright_line(year: i32) -> String {
    format!("© {} {}. All Rights Reserved.", year, BRAND)
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="section-container">
                <div class="footer-grid">
                    <div>
                        <h3>{BRAND}</h3>
                        <p class="footer-muted">{"Creating unforgettable moments and bringing your dreams to life."}</p>
                    </div>

                    <div>
                        <h4>{"Quick Links"}</h4>
                        <ul>
                            { for NAV_ITEMS.iter().map(|item| html! {
                                <li key={item.anchor}><a href={item.href()}>{item.label}</a></li>
                            }) }
                        </ul>
                    </div>

                    <div>
                        <h4>{"Services"}</h4>
                        <ul>
                            { for SERVICES.iter().map(|service| html! {
                                <li key={service.title}><a href="#services">{service.title}</a></li>
                            }) }
                        </ul>
                    </div>

                    <div>
                        <h4>{"Connect With Us"}</h4>
                        <div class="footer-social">
                            { for SOCIAL_LINKS.iter().map(|(icon, name)| html! {
                                <a key={*name} href="#" aria-label={*name}><Icon kind={*icon} /></a>
                            }) }
                        </div>
                    </div>
                </div>

                <div class="footer-bottom">
                    <p class="footer-muted">{copyright_line(year)}</p>
                </div>
            </div>
            <style>
                {r#"
                .site-footer {
                    background: #2D3748;
                    color: #fff;
                    padding: 3rem 0;
                }
                .footer-grid {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 2rem;
                    margin-bottom: 2rem;
                }
                .footer-grid h3 {
                    font-size: 1.25rem;
                    font-weight: 600;
                    margin-bottom: 1rem;
                }
                .footer-grid h4 {
                    font-size: 1.125rem;
                    font-weight: 600;
                    margin-bottom: 1rem;
                }
                .footer-grid ul {
                    list-style: none;
                    padding: 0;
                }
                .footer-grid li {
                    margin-bottom: 0.5rem;
                }
                .footer-grid a,
                .footer-muted {
                    color: #9ca3af;
                    text-decoration: none;
                    transition: color 0.2s ease;
                }
                .footer-grid a:hover {
                    color: #fff;
                }
                .footer-social {
                    display: flex;
                    gap: 1rem;
                }
                .footer-bottom {
                    border-top: 1px solid #374151;
                    padding-top: 2rem;
                    text-align: center;
                }
                @media (max-width: 768px) {
                    .footer-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copyright_line_uses_year() {
        assert_eq!(copyright_line(2025), "© 2025 Event Planners. All Rights Reserved.");
    }
}
