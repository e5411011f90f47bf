use dioxus::prelude::*;

use crate::core::{animate::CountUp, config::use_reports_config, format::format_currency, timing};

/// Currency figure that counts up from zero whenever `value` changes.
#[component]
pub fn AnimatedAmount(id: String, value: f64, #[props(default)] class: String) -> Element {
    let config = use_reports_config();
    let mut shown = use_signal(|| 0.0_f64);

    let duration_ms = config.count_up_duration_ms;
    let frame_ms = config.count_up_frame_ms;
    let _ = use_resource(use_reactive!(|(value,)| async move {
        for frame in CountUp::new(0.0, value, duration_ms, frame_ms) {
            shown.set(frame);
            timing::sleep_ms(frame_ms).await;
        }
    }));

    rsx! {
        strong { id: "{id}", class: "animated-amount {class}", "{format_currency(shown())}" }
    }
}
