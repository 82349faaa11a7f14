use std::sync::Arc;

use vidscope::Vidscope;
use vidscope_mock::{MockConnector, RICKROLL};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let vidscope = Vidscope::builder()
        .with_connector(Arc::new(MockConnector::new()))
        .build()?;

    let id = std::env::args().nth(1).unwrap_or_else(|| RICKROLL.to_string());
    println!("{}", vidscope.generate_report(&id).await);
    Ok(())
}
