use std::error::Error;

use log::warn;
use plotters::prelude::*;
use plotters_canvas::CanvasBackend;
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

use crate::content::models::Specialization;

const WIDTH: u32 = 560;
const HEIGHT: u32 = 300;
const LABEL_COLOR: RGBColor = RGBColor(148, 163, 184);

#[derive(Properties, PartialEq)]
pub struct Props {
    pub data: &'static [Specialization],
}

fn draw(canvas: HtmlCanvasElement, data: &[Specialization]) -> Result<(), Box<dyn Error>> {
    canvas.set_width(WIDTH);
    canvas.set_height(HEIGHT);

    let backend = CanvasBackend::with_canvas_object(canvas).ok_or("canvas has no 2d context")?;
    let root = backend.into_drawing_area();
    root.fill(&TRANSPARENT)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(40)
        .build_cartesian_2d((0..data.len()).into_segmented(), 0u32..100u32)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .y_desc("%")
        .axis_style(LABEL_COLOR)
        .light_line_style(LABEL_COLOR.mix(0.15))
        .label_style(("sans-serif", 14).into_font().color(&LABEL_COLOR))
        .x_label_formatter(&|x| match x {
            SegmentValue::CenterOf(i) => data.get(*i).map(|s| s.name.to_string()).unwrap_or_default(),
            _ => String::new(),
        })
        .draw()?;

    chart.draw_series(data.iter().enumerate().map(|(i, spec)| {
        let (r, g, b) = spec.color;
        let mut bar = Rectangle::new(
            [(SegmentValue::Exact(i), 0), (SegmentValue::Exact(i + 1), spec.value as u32)],
            RGBColor(r, g, b).filled(),
        );
        bar.set_margin(0, 0, 12, 12);
        bar
    }))?;

    root.present()?;
    Ok(())
}

/// Bar chart of the specialization percentages.
#[function_component]
pub fn SkillChart(props: &Props) -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with_deps(
            move |data: &&'static [Specialization]| {
                if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                    if let Err(e) = draw(canvas, data) {
                        warn!("Failed to draw specializations chart: {}", e);
                    }
                }
                || ()
            },
            props.data,
        );
    }

    html! {
        <div class="skill-chart">
            <canvas
                ref={canvas_ref}
                width={WIDTH.to_string()}
                height={HEIGHT.to_string()}
                style="max-width: 100%;"
                role="img"
                aria-label="Specializations chart"
            />
        </div>
    }
}
