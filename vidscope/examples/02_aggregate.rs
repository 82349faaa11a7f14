use std::sync::Arc;

use vidscope::{FetchRequest, FieldSet, Vidscope};
use vidscope_mock::{MockConnector, RICKROLL};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let vidscope = Vidscope::builder()
        .with_connector(Arc::new(MockConnector::new()))
        .build()?;

    let req = FetchRequest::new()
        .video_id(RICKROLL)
        .channel_id("UCuAXFkgsw1L7xaCfnd5JJOw")
        .search("never gonna")
        .fields(FieldSet::parse("details,transcript,channel"));

    let body = vidscope.aggregate(&req).await?.into_body()?;
    println!("{}", serde_json::to_string_pretty(&body)?);
    Ok(())
}
