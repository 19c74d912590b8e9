use plotters::element::Pie;
use plotters::prelude::*;
use plotters_canvas::CanvasBackend;
use shared::{CurrencyFormatter, DoughnutChartConfig, LegendPosition, Rgba};
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

use crate::services::logging::Logger;

const CANVAS_SIZE: u32 = 320;

/// Owns the one chart drawn on the loan canvas.
///
/// `replace` always wipes whatever was drawn before, so a new simulation
/// never paints over a previous doughnut.
#[derive(Debug, Default)]
pub struct ChartRenderer {
    current: Option<DoughnutChartConfig>,
}

impl ChartRenderer {
    pub fn current(&self) -> Option<&DoughnutChartConfig> {
        self.current.as_ref()
    }

    pub fn replace(&mut self, canvas: HtmlCanvasElement, config: &DoughnutChartConfig) -> Result<(), String> {
        self.destroy(&canvas)?;
        draw_doughnut(canvas, config)?;
        self.current = Some(config.clone());
        Ok(())
    }

    pub fn destroy(&mut self, canvas: &HtmlCanvasElement) -> Result<(), String> {
        self.current = None;
        let backend = CanvasBackend::with_canvas_object(canvas.clone())
            .ok_or_else(|| "canvas has no 2d context".to_string())?;
        backend
            .into_drawing_area()
            .fill(&WHITE)
            .map_err(|e| format!("failed to clear chart: {}", e))
    }
}

fn draw_doughnut(canvas: HtmlCanvasElement, config: &DoughnutChartConfig) -> Result<(), String> {
    if !config.has_data() {
        return Ok(());
    }

    let backend = CanvasBackend::with_canvas_object(canvas)
        .ok_or_else(|| "canvas has no 2d context".to_string())?;
    let root = backend.into_drawing_area();

    let (width, height) = root.dim_in_pixel();
    let center = ((width / 2) as i32, (height / 2) as i32);
    let radius = f64::from(width.min(height)) * 0.45;

    let sizes = config.proportions();
    let colors: Vec<RGBColor> = config.slices.iter().map(|slice| blend_on_white(slice.fill)).collect();
    // Labels live in the HTML legend
    let labels: Vec<&str> = config.slices.iter().map(|_| "").collect();

    let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
    pie.start_angle(-90.0);
    pie.donut_hole(radius * 0.5);

    root.draw(&pie).map_err(|e| format!("failed to draw chart: {}", e))?;
    root.present().map_err(|e| format!("failed to present chart: {}", e))
}

/// Flatten a translucent fill onto the white canvas background
fn blend_on_white(color: Rgba) -> RGBColor {
    let alpha = color.a.clamp(0.0, 1.0);
    let channel = |c: u8| (f64::from(c) * alpha + 255.0 * (1.0 - alpha)).round() as u8;
    RGBColor(channel(color.r), channel(color.g), channel(color.b))
}

#[derive(Properties, PartialEq)]
pub struct LoanChartProps {
    pub config: DoughnutChartConfig,
    pub formatter: CurrencyFormatter,
}

pub struct LoanChart {
    canvas_ref: NodeRef,
    renderer: ChartRenderer,
}

impl Component for LoanChart {
    type Message = ();
    type Properties = LoanChartProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            canvas_ref: NodeRef::default(),
            renderer: ChartRenderer::default(),
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        ctx.props() != old_props
    }

    fn rendered(&mut self, ctx: &Context<Self>, _first_render: bool) {
        let config = &ctx.props().config;
        if self.renderer.current() == Some(config) {
            return;
        }

        // No canvas on the page means no chart, nothing more
        let Some(canvas) = self.canvas_ref.cast::<HtmlCanvasElement>() else {
            return;
        };

        if let Err(e) = self.renderer.replace(canvas, config) {
            Logger::warn_with_component("loan-chart", &e);
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();

        let legend = html! {
            <ul class="chart-legend">
                {for props.config.slices.iter().map(|slice| {
                    let tooltip = slice.tooltip_label(&props.formatter);
                    html! {
                        <li class="chart-legend-item" title={tooltip.clone()}>
                            <span
                                class="chart-legend-swatch"
                                style={format!(
                                    "background: {}; border: {}px solid {};",
                                    slice.fill.to_css(),
                                    props.config.border_width,
                                    slice.border.to_css()
                                )}
                            ></span>
                            <span class="chart-legend-label">{tooltip}</span>
                        </li>
                    }
                })}
            </ul>
        };

        html! {
            <div class="chart-container">
                {if props.config.legend_position == LegendPosition::Top { legend.clone() } else { html! {} }}
                <canvas
                    id="loanChart"
                    ref={self.canvas_ref.clone()}
                    width={CANVAS_SIZE.to_string()}
                    height={CANVAS_SIZE.to_string()}
                ></canvas>
                {if props.config.legend_position == LegendPosition::Bottom { legend } else { html! {} }}
            </div>
        }
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use shared::doughnut_config;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn canvas() -> HtmlCanvasElement {
        let document = web_sys::window().unwrap().document().unwrap();
        let canvas: HtmlCanvasElement = document.create_element("canvas").unwrap().dyn_into().unwrap();
        canvas.set_width(CANVAS_SIZE);
        canvas.set_height(CANVAS_SIZE);
        canvas
    }

    #[wasm_bindgen_test]
    fn test_replace_tracks_current_chart() {
        let canvas = canvas();
        let mut renderer = ChartRenderer::default();

        let first = doughnut_config(10000.0, 272.9);
        renderer.replace(canvas.clone(), &first).unwrap();
        assert_eq!(renderer.current(), Some(&first));

        let second = doughnut_config(250000.0, 113509.2);
        renderer.replace(canvas.clone(), &second).unwrap();
        assert_eq!(renderer.current(), Some(&second));

        renderer.destroy(&canvas).unwrap();
        assert!(renderer.current().is_none());
    }
}
