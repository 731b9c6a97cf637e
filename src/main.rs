use std::net::SocketAddr;

use log::{error, info};
use tokio::net::TcpListener;

use testgen::{AppConfig, TestCaseGenerator};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>>
{   env_logger::init();

    let config = AppConfig::load()?;
    if let Err(e) = config.generator.validate()
    {   error!("{}", e);
        return Err(e.into());
    }
    info!(
      "Completion endpoint {} (default model {})",
      config.generator.api_url, config.generator.model
    );

    let addr = SocketAddr::new(
      config.server.bind.parse()?,
      config.server.port
    );
    let listener = TcpListener::bind(addr).await?;
    let generator = TestCaseGenerator::new(&config.generator);

    testgen::server::serve(listener, generator, &config.server).await
}
