use graphyte::{AnalysisOptions, Graphyte, RenderRequest};
use graphyte_demos::common::get_connector;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let g = Graphyte::builder().with_connector(get_connector()?).build()?;
    let req = RenderRequest::new(["cpu.load", "cpu.user", "net.bytes", "empty"])?.from("-1d");
    let report = g.render(&req, &AnalysisOptions::raw()).await?;

    println!(
        "reconciled to {}s ({:?})",
        report.reconciliation.plan.step(),
        report.reconciliation.plan
    );
    for s in &report.payload.summaries {
        let row: Vec<String> = s
            .correlations
            .iter()
            .map(|(other, r)| format!("{other}={r:+.3}"))
            .collect();
        println!("{:<10} {}", s.label, row.join("  "));
    }
    for w in &report.warnings {
        println!("warning: {w}");
    }
    Ok(())
}
