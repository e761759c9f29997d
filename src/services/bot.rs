use reqwest::Client;
use tracing::{debug, warn};
use url::Url;

use crate::{error::AppError, models::join::JoinRequest};

const JOIN_REQUEST_PATH: &str = "/join_request";

/// Client for the bot service that mediates join requests between users
/// and trip admins.
#[derive(Clone)]
pub struct BotService {
    client: Client,
    host: String,
}

impl BotService {
    pub fn new(host: &str, accept_invalid_certs: bool) -> Result<Self, AppError> {
        if accept_invalid_certs {
            warn!("TLS certificate verification for the bot service is disabled");
        }
        let client = Client::builder()
            .danger_accept_invalid_certs(accept_invalid_certs)
            .build()?;
        Ok(Self {
            client,
            host: host.to_string(),
        })
    }

    /// Relays a join request to the bot. Only transport failures are
    /// reported; the bot's response status is not inspected.
    pub async fn send_join_request(&self, request: &JoinRequest) -> Result<(), AppError> {
        let url = self.endpoint(JOIN_REQUEST_PATH)?;
        debug!(
            trip_id = request.trip_id,
            user_id = request.user_id,
            "relaying join request to bot"
        );
        self.client.post(url).json(request).send().await?;
        Ok(())
    }

    fn endpoint(&self, path: &str) -> Result<Url, AppError> {
        let base = Url::parse(&format!("https://{}", self.host))
            .map_err(|err| AppError::Config(format!("invalid bot host: {err}")))?;
        base.join(path)
            .map_err(|err| AppError::Config(format!("invalid bot path {path}: {err}")))
    }
}
