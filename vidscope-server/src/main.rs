use vidscope_server::error::ServerError;

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    vidscope_server::run().await
}
