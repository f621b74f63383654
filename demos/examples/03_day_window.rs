use graphyte::{AnalysisOptions, DayWindow, Graphyte, RenderRequest};
use graphyte_demos::common::get_connector;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let g = Graphyte::builder().with_connector(get_connector()?).build()?;
    let req = RenderRequest::new(["cpu.user", "disk.free"])?.from("-1d");

    let windows = [
        ("all day", DayWindow::DISABLED),
        ("office hours", DayWindow::new(9, 17)?.weekdays_only(true)),
        ("overnight", DayWindow::new(22, 6)?),
    ];
    for (label, window) in windows {
        let opts = AnalysisOptions::interactive().day_window(window);
        let report = g.render(&req, &opts).await?;
        println!("== {label} ({} rows masked)", report.masked_rows);
        for s in &report.payload.summaries {
            let q = s.stats.quantiles;
            println!(
                "{:<12} n={:<5} mean={:>9.2} var={:>9.2} p50={:>9.2} [{}]",
                s.label, s.stats.count, s.stats.mean, s.stats.variance, q[2], s.stats.frequency
            );
        }
    }
    Ok(())
}
