use log::info;
use regression_lab::prelude::*;
use regression_lab_datasets::{generate_dataset, DatasetKind};

fn main() -> Result<()> {
    env_logger::init();

    let kind: DatasetKind = std::env::args()
        .nth(1)
        .map(|name| name.parse().unwrap_or_default())
        .unwrap_or_default();
    let points = generate_dataset(kind, 20);
    info!("generated {} points of kind {:?}", points.len(), kind);

    // The hypothesis found in closed form
    let line = fit(&points);
    println!(
        "least squares:    y = {} x + {}",
        format_fixed(line.slope, 3),
        format_fixed(line.intercept, 3)
    );

    let metrics = line.metrics(&points);
    println!(
        "metrics:          mse {}  rmse {}  mae {}  r2 {}",
        format_fixed(metrics.mse, 3),
        format_fixed(metrics.rmse, 3),
        format_fixed(metrics.mae, 3),
        format_fixed(metrics.r2, 3)
    );

    let outliers = detect_outliers(&points, line.slope, line.intercept);
    println!("outliers:         {:?}", outliers);

    // The same line found iteratively, replayed every 100 epochs
    let run = GradientDescentParams::new()
        .learning_rate(0.005)
        .iterations(1000)
        .run(&points)?;
    for record in run.history.iter().filter(|r| r.epoch % 100 == 0) {
        println!(
            "epoch {:>4}:       y = {} x + {}  loss {}",
            record.epoch,
            format_fixed(record.slope, 3),
            format_fixed(record.intercept, 3),
            format_fixed(record.loss, 3)
        );
    }

    // A learning rate which is far too large
    let diverged = gradient_descent(&points, 0.5, 1000, 0.0, 0.0)?;
    println!(
        "lr 0.5:           converged {} after {} epochs, loss {}",
        diverged.converged,
        diverged.history.len(),
        format_fixed(diverged.final_loss().unwrap_or(f64::NAN), 3)
    );

    let surface = CostSurfaceParams::new()
        .slope_range(0.0, 4.0)
        .intercept_range(-5.0, 5.0)
        .resolution(40)
        .sample(&points)?;
    if let Some((slope, intercept, cost)) = surface.min_cost() {
        println!(
            "cost surface:     minimum {} at slope {} intercept {}",
            format_fixed(cost, 3),
            format_fixed(slope, 2),
            format_fixed(intercept, 2)
        );
    }

    for penalty in [Penalty::ridge(), Penalty::lasso()] {
        println!(
            "{:?}: {}",
            penalty,
            format_fixed(
                regularized_cost(&points, line.slope, line.intercept, penalty),
                3
            )
        );
    }

    Ok(())
}
