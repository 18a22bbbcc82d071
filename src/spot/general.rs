//! General endpoints (no authentication).

use reqwest::Method;

use crate::error::BinanceError;
use crate::rest::endpoints::spot;
use crate::rest::{ApiHost, BinanceClient, Request, SecurityType};
use crate::types::ServerTime;

impl BinanceClient {
    /// Test connectivity to the spot API.
    pub fn ping(&self) -> PingService<'_> {
        PingService { client: self }
    }

    /// Fetch the spot server time.
    pub fn server_time(&self) -> ServerTimeService<'_> {
        ServerTimeService { client: self }
    }
}

/// `GET /api/v3/ping`
#[derive(Debug, Clone)]
pub struct PingService<'a> {
    client: &'a BinanceClient,
}

impl PingService<'_> {
    /// Build the request descriptor.
    pub fn request(&self) -> Request {
        Request::new(Method::GET, ApiHost::Spot, spot::PING, SecurityType::None)
    }

    /// Send the request.
    pub async fn send(&self) -> Result<(), BinanceError> {
        self.client.call_api(self.request()).await?;
        Ok(())
    }
}

/// `GET /api/v3/time`
#[derive(Debug, Clone)]
pub struct ServerTimeService<'a> {
    client: &'a BinanceClient,
}

impl ServerTimeService<'_> {
    /// Build the request descriptor.
    pub fn request(&self) -> Request {
        Request::new(Method::GET, ApiHost::Spot, spot::TIME, SecurityType::None)
    }

    /// Send the request.
    pub async fn send(&self) -> Result<ServerTime, BinanceError> {
        self.client.call(self.request()).await
    }
}
