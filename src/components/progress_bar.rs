use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ScrollProgressProps {
    /// Fraction of the page scrolled, in [0, 1].
    pub progress: f64,
}

pub fn progress_transform(progress: f64) -> String {
    let scale = if progress.is_finite() { progress.clamp(0.0, 1.0) } else { 0.0 };
    format!("transform: scaleX({});", scale)
}

#[function_component(ScrollProgressIndicator)]
pub fn scroll_progress_indicator(props: &ScrollProgressProps) -> Html {
    html! {
        <>
            <div class="scroll-progress" style={progress_transform(props.progress)}></div>
            <style>
                {r#"
                .scroll-progress {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    height: 4px;
                    background: #FFD7B5;
                    transform-origin: 0 50%;
                    z-index: 60;
                }
                "#}
            </style>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transform_scales_by_progress() {
        assert_eq!(progress_transform(0.0), "transform: scaleX(0);");
        assert_eq!(progress_transform(0.5), "transform: scaleX(0.5);");
        assert_eq!(progress_transform(1.0), "transform: scaleX(1);");
    }

    #[test]
    fn test_transform_never_leaves_unit_range() {
        assert_eq!(progress_transform(1.7), "transform: scaleX(1);");
        assert_eq!(progress_transform(-0.2), "transform: scaleX(0);");
        assert_eq!(progress_transform(f64::INFINITY), "transform: scaleX(0);");
    }
}
