#![cfg(feature = "dataframe")]

use graphyte_core::{RawSeries, Table, ToDataFrame, normalize};

#[test]
fn table_to_dataframe_smoke() {
    let a = normalize(RawSeries::new("a", 0, 60, [Some(1.0), None])).unwrap();
    let b = normalize(RawSeries::new("b", 60, 60, [2.0, 3.0])).unwrap();
    let t = Table::assemble(vec![a, b]).unwrap();
    let df = t.to_dataframe().unwrap();
    assert_eq!(df.height(), 3);
    assert_eq!(df.width(), 3);
    assert_eq!(df.get_column_names()[0].as_str(), "timestamp");
}
