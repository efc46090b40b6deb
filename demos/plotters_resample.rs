extern crate plotters;
use plotters::prelude::*;

extern crate equiarc;
use equiarc::{resample, CubicBezier, PointN, PresentationConfig, SegmentationConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let bezier = CubicBezier::new(
        PointN::new([0.45f64, 0.328f64]),
        PointN::new([1.403f64, 0.12f64]),
        PointN::new([0.62f64, 1.255f64]),
        PointN::new([1.521f64, 0.593f64]),
    );

    let presentation = PresentationConfig::default();
    let config = SegmentationConfig::default();
    let transform = presentation.transform();
    let result = resample(&bezier, &config, &transform)?;

    // everything is drawn in presentation space, control points included
    let cpoints: Vec<(f64, f64)> = result
        .control_points
        .iter()
        .map(|p| transform.apply(*p))
        .map(|p| (p.x(), p.y()))
        .collect();
    let curve: Vec<(f64, f64)> = result.sample.iter().map(|p| (p.x(), p.y())).collect();
    let breakpoints: Vec<(f64, f64)> = result.breakpoints.iter().map(|p| (p.x(), p.y())).collect();

    let viewport = presentation.viewport;
    let root = BitMapBackend::new("equal_arc_length.png", (viewport.width, viewport.height))
        .into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("Bezier curve | {} equal arc length segments", config.segment_count),
            ("sans-serif", 21).into_font(),
        )
        .margin(5)
        .x_label_area_size(30)
        .y_label_area_size(30)
        .build_cartesian_2d(0f64..viewport.width as f64, 0f64..viewport.height as f64)?;

    chart.configure_mesh().draw()?;

    // draw the control points of B(t)
    chart
        .draw_series(PointSeries::of_element(
            cpoints,
            5,
            &BLUE,
            &|coord, size, style| EmptyElement::at(coord) + Circle::new((0, 0), size, style.filled()),
        ))?
        .label("Control Points of B(t)")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE));

    // draw the dense sample as reference
    chart
        .draw_series(LineSeries::new(curve, &RED.mix(0.4)))?
        .label("B(t)")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED));

    // draw the breakpoints
    chart
        .draw_series(PointSeries::of_element(
            breakpoints,
            3,
            &GREEN,
            &|coord, size, style| EmptyElement::at(coord) + Circle::new((0, 0), size, style),
        ))?
        .label("Breakpoints")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], GREEN));

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}
