use server::server::{BIND_ADDR, UdpServer};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let server = UdpServer::bind(BIND_ADDR).await?;
    server.run().await?;

    Ok(())
}
