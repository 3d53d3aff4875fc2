use shared::aggregation::percentage_of_total;
use shared::{category_icon, format_currency, payment_method_icon};
use yew::prelude::*;

/// Which icon map to decorate the rows with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconStyle {
    Category,
    PaymentMethod,
    None,
}

#[derive(Properties, PartialEq)]
pub struct BreakdownListProps {
    /// Rows to render, already in display order.
    pub entries: Vec<(String, f64)>,
    /// Denominator for the percentage bars. Passed explicitly so a truncated
    /// top-N list can still show shares of the full total.
    pub total: f64,
    #[prop_or(IconStyle::None)]
    pub icon: IconStyle,
    #[prop_or("No data available".to_string())]
    pub empty_message: String,
}

/// Horizontal percentage bars for a breakdown, one row per label.
#[function_component(BreakdownList)]
pub fn breakdown_list(props: &BreakdownListProps) -> Html {
    if props.entries.is_empty() {
        return html! { <div class="empty-state">{&props.empty_message}</div> };
    }

    html! {
        <div class="breakdown-list">
            {for props.entries.iter().map(|(label, value)| {
                let percentage = percentage_of_total(*value, props.total);
                let decorated = match props.icon {
                    IconStyle::Category => format!("{} {}", category_icon(label), label),
                    IconStyle::PaymentMethod => format!("{} {}", payment_method_icon(label), label),
                    IconStyle::None => label.clone(),
                };

                html! {
                    <div class="breakdown-row" key={label.clone()}>
                        <div class="breakdown-label">
                            <span>{decorated}</span>
                            <span class="breakdown-value">
                                {format!("{} ({:.1}%)", format_currency(*value), percentage)}
                            </span>
                        </div>
                        <div class="breakdown-bar">
                            <div
                                class="breakdown-fill"
                                style={format!("width: {:.1}%", percentage.min(100.0))}
                            ></div>
                        </div>
                    </div>
                }
            })}
        </div>
    }
}
