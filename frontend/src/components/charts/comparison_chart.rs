use plotters::prelude::*;
use plotters_canvas::CanvasBackend;
use shared::aggregation::{category_comparison, Period};
use shared::Expense;
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

use super::SERIES_COLORS;
use crate::services::date_utils::current_date;

#[derive(Properties, PartialEq)]
pub struct ComparisonChartProps {
    pub expenses: Vec<Expense>,
    pub loading: bool,
}

pub enum Msg {
    SetPeriod(Period),
}

/// One line per top spending category, drawn over the same buckets as the
/// trend chart.
pub struct ComparisonChart {
    canvas_ref: NodeRef,
    selected_period: Period,
}

impl Component for ComparisonChart {
    type Message = Msg;
    type Properties = ComparisonChartProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            canvas_ref: NodeRef::default(),
            selected_period: Period::Monthly,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetPeriod(period) => {
                self.selected_period = period;
                self.draw_chart(&ctx.props().expenses);
                true
            }
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().expenses != old_props.expenses {
            self.draw_chart(&ctx.props().expenses);
        }
        true
    }

    fn rendered(&mut self, ctx: &Context<Self>, _first_render: bool) {
        if !ctx.props().expenses.is_empty() {
            self.draw_chart(&ctx.props().expenses);
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let expense_count = ctx.props().expenses.len();
        let loading = ctx.props().loading;
        let link = ctx.link();

        html! {
            <div class="chart-container">
                <div class="chart-header">
                    <h3 class="chart-title">{"Top Categories Over Time"}</h3>

                    <div class="chart-period-selector">
                        {for Period::ALL.iter().map(|period| {
                            let period = *period;
                            let is_active = period == self.selected_period;
                            let onclick = link.callback(move |_| Msg::SetPeriod(period));

                            html! {
                                <button
                                    class={if is_active { "period-button active" } else { "period-button" }}
                                    onclick={onclick}
                                >
                                    {period.label()}
                                </button>
                            }
                        })}
                    </div>
                </div>

                {if expense_count == 0 && loading {
                    html! {
                        <div class="chart-loading">
                            <div class="loading-spinner"></div>
                            <p>{"Loading chart data..."}</p>
                        </div>
                    }
                } else if expense_count == 0 {
                    html! {
                        <div class="chart-empty">
                            <p>{"No expense data available for chart"}</p>
                        </div>
                    }
                } else {
                    html! {
                        <div class="chart-content">
                            <canvas
                                ref={self.canvas_ref.clone()}
                                class="comparison-chart-canvas"
                                width="800"
                                height="350"
                            ></canvas>
                        </div>
                    }
                }}
            </div>
        }
    }
}

impl ComparisonChart {
    fn draw_chart(&self, expenses: &[Expense]) {
        if expenses.is_empty() {
            return;
        }

        let canvas = match self.canvas_ref.cast::<HtmlCanvasElement>() {
            Some(canvas) => canvas,
            None => return,
        };

        canvas.set_width(800);
        canvas.set_height(350);

        let backend = match CanvasBackend::with_canvas_object(canvas) {
            Some(backend) => backend,
            None => return,
        };

        let root = backend.into_drawing_area();
        if root.fill(&WHITE).is_err() {
            return;
        }

        let comparison = category_comparison(expenses, self.selected_period, current_date());
        if comparison.categories.is_empty() || comparison.labels.is_empty() {
            return;
        }

        let max_value = comparison
            .series
            .iter()
            .flatten()
            .cloned()
            .fold(0.0_f64, f64::max);
        let y_max = if max_value > 0.0 { max_value * 1.1 } else { 1.0 };
        let x_max = (comparison.labels.len() - 1) as f64;

        let mut chart = match ChartBuilder::on(&root)
            .margin(15)
            .x_label_area_size(45)
            .y_label_area_size(70)
            .build_cartesian_2d(0.0..x_max.max(1.0), 0.0..y_max)
        {
            Ok(chart) => chart,
            Err(_) => return,
        };

        let labels = comparison.labels.clone();
        if chart
            .configure_mesh()
            .y_desc("Spent (₹)")
            .y_label_formatter(&|v| format!("₹{:.0}", v))
            .x_label_formatter(&move |v| {
                labels
                    .get(v.round() as usize)
                    .cloned()
                    .unwrap_or_default()
            })
            .label_style(("sans-serif", 12, &SERIES_COLORS[0]))
            .axis_style(&RGBColor(230, 230, 230))
            .bold_line_style(&RGBColor(245, 245, 245))
            .light_line_style(&RGBColor(250, 250, 250))
            .x_labels(8)
            .y_labels(8)
            .draw()
            .is_err()
        {
            return;
        }

        for (index, (category, values)) in comparison
            .categories
            .iter()
            .zip(comparison.series.iter())
            .enumerate()
        {
            let color = SERIES_COLORS[index % SERIES_COLORS.len()];

            let series = chart.draw_series(LineSeries::new(
                values.iter().enumerate().map(|(i, v)| (i as f64, *v)),
                color.stroke_width(2),
            ));

            match series {
                Ok(series) => {
                    series
                        .label(category.clone())
                        .legend(move |(x, y)| {
                            PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
                        });
                }
                Err(_) => return,
            }
        }

        if chart
            .configure_series_labels()
            .background_style(&WHITE.mix(0.9))
            .border_style(&RGBColor(230, 230, 230))
            .label_font(("sans-serif", 12))
            .position(SeriesLabelPosition::UpperLeft)
            .draw()
            .is_err()
        {
            return;
        }

        let _ = root.present();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comparison_chart_defaults_to_monthly() {
        let chart = ComparisonChart {
            canvas_ref: NodeRef::default(),
            selected_period: Period::Monthly,
        };
        assert_eq!(chart.selected_period, Period::Monthly);
    }

    #[test]
    fn test_draw_chart_with_empty_expenses() {
        let chart = ComparisonChart {
            canvas_ref: NodeRef::default(),
            selected_period: Period::Yearly,
        };
        chart.draw_chart(&[]);
    }

    #[test]
    fn test_palette_cycles_for_many_series() {
        // Five colors for at most five top categories; modulo keeps any
        // overflow safe anyway.
        for index in 0..10 {
            let _ = SERIES_COLORS[index % SERIES_COLORS.len()];
        }
    }
}
