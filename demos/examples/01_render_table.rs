use graphyte::{Aggregation, AnalysisOptions, Graphyte, RenderRequest};
use graphyte_demos::common::get_connector;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let g = Graphyte::builder().with_connector(get_connector()?).build()?;

    let req = RenderRequest::new(["cpu.load", "cpu.user", "net.bytes"])?.from("-1d");
    let opts = AnalysisOptions::interactive().resample(3600, Aggregation::Mean);
    let table = g.table(&req, &opts).await?;

    print!("{:<22}", "time");
    for name in table.names() {
        print!("{name:>14}");
    }
    println!();
    for (row, ts) in table.index().iter().enumerate() {
        print!("{:<22}", ts.format("%Y-%m-%d %H:%M"));
        for col in table.columns() {
            match col.values[row].value() {
                Some(v) => print!("{v:>14.2}"),
                None => print!("{:>14}", "-"),
            }
        }
        println!();
    }
    Ok(())
}
